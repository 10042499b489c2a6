//! Port for durably recording admitted users.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::User;

/// Errors surfaced by user registry adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRegistryError {
    /// The registry refused the record (constraint violation, quota, ...).
    #[error("user registry rejected the record: {message}")]
    Rejected { message: String },
    /// The registry could not be reached.
    #[error("user registry is unavailable: {message}")]
    Unavailable { message: String },
    /// The hosting environment's deadline elapsed before the write was
    /// acknowledged.
    #[error("user registry write timed out")]
    Timeout,
}

impl UserRegistryError {
    /// Helper for rejected writes.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Helper for reachability failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Write-side port persisting admitted users.
///
/// The engine calls [`UserRegistry::add_user`] exactly once per successful
/// rule chain, with a fully constructed user. Registries may assign their
/// own identifiers; the engine does not read them back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Durably record an admitted user.
    async fn add_user(&self, user: &User) -> Result<(), UserRegistryError>;
}
