//! Admitted user record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// A user admitted against a client.
///
/// ## Invariants
/// - `first_name` and `surname` are non-blank after trimming.
/// - `email_address` contains at least one `@` and one `.`.
/// - `credit_limit` is `0` exactly when the owning client's tier is credit
///   exempt; otherwise it is at least the engine's minimum.
///
/// Instances are created only by a successful admission run and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    first_name: String,
    surname: String,
    email_address: String,
    date_of_birth: NaiveDate,
    credit_limit: u32,
    client: Client,
}

impl User {
    /// Assemble an admitted user. Callers are expected to have validated the
    /// fields through the rule chain first.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        email_address: impl Into<String>,
        date_of_birth: NaiveDate,
        credit_limit: u32,
        client: Client,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            email_address: email_address.into(),
            date_of_birth,
            credit_limit,
            client,
        }
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Contact email address.
    #[must_use]
    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }

    /// Calendar date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Resolved credit limit; `0` for credit-exempt clients.
    #[must_use]
    pub const fn credit_limit(&self) -> u32 {
        self.credit_limit
    }

    /// Whether a credit limit applies to this user.
    #[must_use]
    pub const fn has_credit_limit(&self) -> bool {
        self.credit_limit > 0
    }

    /// Client the user was admitted against.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}
