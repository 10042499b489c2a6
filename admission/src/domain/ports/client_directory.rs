//! Port for resolving client records from the directory that owns them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::client::{Client, ClientId};

/// Errors surfaced by client directory adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientDirectoryError {
    /// The directory could not be reached or refused the lookup.
    #[error("client directory is unavailable: {message}")]
    Unavailable { message: String },
    /// The hosting environment's deadline elapsed before the directory
    /// answered.
    #[error("client directory lookup timed out")]
    Timeout,
}

impl ClientDirectoryError {
    /// Helper for reachability failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Read-side port resolving a client identifier to its record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Fetch the client with the given identifier.
    ///
    /// `Ok(None)` means the directory answered and holds no such client;
    /// adapters must never fold infrastructure faults into `None`.
    async fn client_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientDirectoryError>;
}
