//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the engine expects to interact with driven adapters
//! (the client directory, the credit oracle, the user registry). Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants the engine can attribute to a failure reason.

mod client_directory;
mod credit_oracle;
mod user_registry;

#[cfg(test)]
pub use client_directory::MockClientDirectory;
pub use client_directory::{ClientDirectory, ClientDirectoryError};
#[cfg(test)]
pub use credit_oracle::MockCreditOracle;
pub use credit_oracle::{CreditOracle, CreditOracleError};
#[cfg(test)]
pub use user_registry::MockUserRegistry;
pub use user_registry::{UserRegistry, UserRegistryError};
