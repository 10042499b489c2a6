//! Domain entities and the admission rule engine.
//!
//! Types here are immutable once constructed and carry their invariants in
//! their Rustdoc. The engine reports every expected outcome through
//! [`AdmissionResult`]; no panic or error-return path signals an ordinary
//! validation failure.

pub mod admission;
pub mod client;
pub mod ports;
pub mod user;

pub use self::admission::{
    AdmissionRequest, AdmissionResult, AdmissionService, FailureReason, MINIMUM_ADMISSION_AGE,
    MINIMUM_CREDIT_LIMIT,
};
pub use self::client::{Classification, Client, ClientId, ClientStatus, ClientTier};
pub use self::user::User;
