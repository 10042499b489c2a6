//! Outbound adapters implementing the domain ports.
//!
//! Adapters are thin translators between domain types and infrastructure;
//! they contain no business logic. The crate ships in-memory reference
//! adapters used by the console consumer and the integration tests; real
//! deployments provide their own directory, oracle, and registry behind the
//! same traits.

pub mod memory;
