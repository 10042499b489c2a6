//! Port for the external credit-scoring lookup.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by credit oracle adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditOracleError {
    /// The scoring service could not be reached or rejected the query.
    #[error("credit oracle is unavailable: {message}")]
    Unavailable { message: String },
    /// The hosting environment's deadline elapsed before the oracle
    /// answered.
    #[error("credit oracle query timed out")]
    Timeout,
}

impl CreditOracleError {
    /// Helper for reachability failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Query port returning a base creditworthiness figure for an identity.
///
/// The lookup is a pure query; adapters must not record side effects. The
/// engine invokes it at most once per admission attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditOracle: Send + Sync {
    /// Base credit figure for the given identity and birth date.
    async fn credit_limit(
        &self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<u32, CreditOracleError>;
}
