//! The admission rule engine and its result model.
//!
//! [`AdmissionService::admit`] runs the ordered rule chain over a candidate
//! user, short-circuiting on the first failed rule. Every expected outcome,
//! including collaborator faults, is reported through [`AdmissionResult`];
//! the engine never signals an ordinary validation failure by panicking or
//! returning `Err`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientId};
use crate::domain::ports::{
    ClientDirectory, ClientDirectoryError, CreditOracle, CreditOracleError, UserRegistry,
    UserRegistryError,
};
use crate::domain::user::User;

/// Youngest age, in whole years, an admitted user may have.
pub const MINIMUM_ADMISSION_AGE: i32 = 21;

/// Smallest resolved credit limit accepted for non-exempt clients.
pub const MINIMUM_CREDIT_LIMIT: u32 = 500;

/// Candidate user supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRequest {
    /// Given name; must be non-blank after trimming.
    pub first_name: String,
    /// Family name; must be non-blank after trimming.
    pub surname: String,
    /// Contact email address.
    pub email: String,
    /// Calendar date of birth used for the age rule.
    pub date_of_birth: NaiveDate,
    /// Identifier of the client the user is admitted against.
    pub client_id: ClientId,
}

/// Discriminator identifying why an admission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// First name is missing or blank.
    InvalidFirstName,
    /// Surname is missing or blank.
    InvalidSurname,
    /// Email address fails the minimal well-formedness check.
    InvalidEmail,
    /// Candidate is younger than [`MINIMUM_ADMISSION_AGE`].
    Underage,
    /// The directory answered but holds no client with the given id.
    ClientNotFound,
    /// Resolved credit limit is below [`MINIMUM_CREDIT_LIMIT`].
    InsufficientCredit,
    /// The registry failed to record the admitted user.
    PersistenceFailed,
    /// A collaborator call exceeded its deadline.
    CollaboratorTimeout,
    /// A collaborator was unreachable; distinct from [`Self::ClientNotFound`]
    /// so infrastructure faults are never mistaken for a missing record.
    CollaboratorUnavailable,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidFirstName => "invalid first name",
            Self::InvalidSurname => "invalid surname",
            Self::InvalidEmail => "invalid email",
            Self::Underage => "underage",
            Self::ClientNotFound => "client not found",
            Self::InsufficientCredit => "insufficient credit",
            Self::PersistenceFailed => "persistence failed",
            Self::CollaboratorTimeout => "collaborator timeout",
            Self::CollaboratorUnavailable => "collaborator unavailable",
        };
        f.write_str(label)
    }
}

/// Outcome of a single admission attempt.
///
/// Exactly one variant is populated; this is the sole channel through which
/// the engine reports success or failure to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdmissionResult {
    /// All rules passed and the user was durably recorded.
    Success {
        /// The admitted user as handed to the registry.
        user: User,
    },
    /// A rule failed; `reason` identifies which one.
    Failure {
        /// Machine-readable reason code.
        reason: FailureReason,
        /// Human-readable diagnostic for the specific failure.
        message: String,
    },
}

impl AdmissionResult {
    fn failure(reason: FailureReason, message: impl Into<String>) -> Self {
        Self::Failure {
            reason,
            message: message.into(),
        }
    }

    /// Whether the attempt admitted the user.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The admitted user, when present.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Success { user } => Some(user),
            Self::Failure { .. } => None,
        }
    }

    /// The failure reason, when present.
    #[must_use]
    pub const fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => Some(*reason),
        }
    }
}

/// The admission validator.
///
/// Holds only `Arc` references to its collaborators and the clock; no state
/// survives between [`AdmissionService::admit`] calls, so concurrent
/// attempts need no locking. All three collaborators must be supplied
/// explicitly; the service never constructs its own infrastructure.
#[derive(Clone)]
pub struct AdmissionService<D, O, R> {
    directory: Arc<D>,
    oracle: Arc<O>,
    registry: Arc<R>,
    clock: Arc<dyn Clock>,
    call_timeout: Option<Duration>,
}

impl<D, O, R> AdmissionService<D, O, R> {
    /// Create a service over the three collaborator ports and a clock.
    pub fn new(
        directory: Arc<D>,
        oracle: Arc<O>,
        registry: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            oracle,
            registry,
            clock,
            call_timeout: None,
        }
    }

    /// Bound every collaborator call by `timeout`; an elapsed deadline
    /// reports [`FailureReason::CollaboratorTimeout`].
    #[must_use]
    pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    async fn bounded<T>(&self, call: impl Future<Output = T>) -> Option<T> {
        match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.ok(),
            None => Some(call.await),
        }
    }
}

impl<D, O, R> AdmissionService<D, O, R>
where
    D: ClientDirectory,
    O: CreditOracle,
    R: UserRegistry,
{
    /// Run the ordered rule chain over `request`.
    ///
    /// Rules fire in a fixed order and the first failure terminates the
    /// attempt: first name, surname, email, age, client lookup, credit
    /// policy, persistence. On success the registry has been invoked exactly
    /// once with the returned user.
    pub async fn admit(&self, request: AdmissionRequest) -> AdmissionResult {
        if request.first_name.trim().is_empty() {
            return AdmissionResult::failure(
                FailureReason::InvalidFirstName,
                "first name must not be blank",
            );
        }
        if request.surname.trim().is_empty() {
            return AdmissionResult::failure(
                FailureReason::InvalidSurname,
                "surname must not be blank",
            );
        }
        if !email_is_well_formed(&request.email) {
            return AdmissionResult::failure(
                FailureReason::InvalidEmail,
                "email must contain '@' and '.'",
            );
        }

        let today = self.clock.utc().date_naive();
        let age = age_on(request.date_of_birth, today);
        if age < MINIMUM_ADMISSION_AGE {
            return AdmissionResult::failure(
                FailureReason::Underage,
                format!("candidate is {age}, minimum age is {MINIMUM_ADMISSION_AGE}"),
            );
        }

        let client = match self.resolve_client(request.client_id).await {
            Ok(client) => client,
            Err(result) => return result,
        };

        let credit_limit = match self.resolve_credit_limit(&request, &client).await {
            Ok(limit) => limit,
            Err(result) => return result,
        };

        let user = User::new(
            request.first_name,
            request.surname,
            request.email,
            request.date_of_birth,
            credit_limit,
            client,
        );

        let Some(write) = self.bounded(self.registry.add_user(&user)).await else {
            return AdmissionResult::failure(
                FailureReason::CollaboratorTimeout,
                "user registry write exceeded the configured deadline",
            );
        };
        if let Err(error) = write {
            return registry_rejection(error);
        }

        AdmissionResult::Success { user }
    }

    async fn resolve_client(&self, id: ClientId) -> Result<Client, AdmissionResult> {
        let Some(lookup) = self.bounded(self.directory.client_by_id(id)).await else {
            return Err(AdmissionResult::failure(
                FailureReason::CollaboratorTimeout,
                "client directory lookup exceeded the configured deadline",
            ));
        };
        match lookup {
            Ok(Some(client)) => Ok(client),
            Ok(None) => Err(AdmissionResult::failure(
                FailureReason::ClientNotFound,
                format!("no client with id {id}"),
            )),
            Err(error) => Err(directory_rejection(error)),
        }
    }

    /// Resolve the credit limit for the candidate, or the failure that stops
    /// the attempt.
    ///
    /// Exempt tiers resolve to `0` without consulting the oracle, and the
    /// minimum-credit rule is skipped outright. Otherwise the oracle is
    /// queried exactly once and its figure scaled by the tier multiplier.
    async fn resolve_credit_limit(
        &self,
        request: &AdmissionRequest,
        client: &Client,
    ) -> Result<u32, AdmissionResult> {
        let classification = client.tier().classification();
        if classification.credit_exempt {
            return Ok(0);
        }

        let query = self.oracle.credit_limit(
            &request.first_name,
            &request.surname,
            request.date_of_birth,
        );
        let Some(outcome) = self.bounded(query).await else {
            return Err(AdmissionResult::failure(
                FailureReason::CollaboratorTimeout,
                "credit oracle query exceeded the configured deadline",
            ));
        };
        let base = match outcome {
            Ok(base) => base,
            Err(error) => return Err(oracle_rejection(error)),
        };

        let credit_limit = base.saturating_mul(classification.credit_multiplier);
        if credit_limit < MINIMUM_CREDIT_LIMIT {
            return Err(AdmissionResult::failure(
                FailureReason::InsufficientCredit,
                format!(
                    "resolved credit limit {credit_limit} is below the minimum of \
                     {MINIMUM_CREDIT_LIMIT}"
                ),
            ));
        }
        Ok(credit_limit)
    }
}

fn directory_rejection(error: ClientDirectoryError) -> AdmissionResult {
    match error {
        ClientDirectoryError::Timeout => {
            AdmissionResult::failure(FailureReason::CollaboratorTimeout, error.to_string())
        }
        ClientDirectoryError::Unavailable { .. } => {
            AdmissionResult::failure(FailureReason::CollaboratorUnavailable, error.to_string())
        }
    }
}

fn oracle_rejection(error: CreditOracleError) -> AdmissionResult {
    match error {
        CreditOracleError::Timeout => {
            AdmissionResult::failure(FailureReason::CollaboratorTimeout, error.to_string())
        }
        CreditOracleError::Unavailable { .. } => {
            AdmissionResult::failure(FailureReason::CollaboratorUnavailable, error.to_string())
        }
    }
}

fn registry_rejection(error: UserRegistryError) -> AdmissionResult {
    match error {
        UserRegistryError::Timeout => {
            AdmissionResult::failure(FailureReason::CollaboratorTimeout, error.to_string())
        }
        UserRegistryError::Rejected { .. } | UserRegistryError::Unavailable { .. } => {
            AdmissionResult::failure(FailureReason::PersistenceFailed, error.to_string())
        }
    }
}

fn email_is_well_formed(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@') && email.contains('.')
}

/// Whole years lived as of `today`.
///
/// The year difference is decremented when the birthday has not yet occurred
/// this year; a birthday falling on `today` counts as already turned.
fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
