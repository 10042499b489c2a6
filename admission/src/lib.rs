//! User-admission rule engine.
//!
//! Validates candidate users against a client-scoped rule chain (identity
//! completeness, email well-formedness, minimum age, client existence, and a
//! classification-dependent credit-limit policy) and persists admitted users
//! through an injected registry port.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the entities, the
//! rule engine, and the port traits; [`outbound`] provides in-memory adapters
//! used by the console consumer and the integration tests. Real deployments
//! substitute their own adapters at the same seams.

pub mod domain;
pub mod outbound;
