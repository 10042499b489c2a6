//! Console consumer: wires the in-memory adapters and runs one admission.
//!
//! Glue only; argument parsing and wiring live here, the decision logic
//! lives in [`admission::domain`].

use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use mockable::DefaultClock;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use admission::domain::{
    AdmissionRequest, AdmissionResult, AdmissionService, Client, ClientId, ClientStatus,
    ClientTier,
};
use admission::outbound::memory::{
    FixedCreditOracle, InMemoryClientDirectory, InMemoryUserRegistry,
};

/// Validate and admit a user against a seeded in-memory client directory.
#[derive(Debug, Parser)]
#[command(name = "admission", version)]
struct Args {
    /// Candidate's given name.
    #[arg(long, default_value = "Bruno")]
    first_name: String,

    /// Candidate's family name.
    #[arg(long, default_value = "Camba")]
    surname: String,

    /// Candidate's contact email address.
    #[arg(long, default_value = "bruno.camba@gmail.com")]
    email: String,

    /// Candidate's date of birth (YYYY-MM-DD).
    #[arg(long, default_value = "1993-01-01")]
    date_of_birth: NaiveDate,

    /// Identifier of the target client in the seeded directory.
    #[arg(long, default_value_t = 4)]
    client_id: i64,

    /// Base figure the demo credit oracle returns for every identity.
    #[arg(long, default_value_t = 1000)]
    base_credit: u32,
}

fn seeded_directory() -> InMemoryClientDirectory {
    InMemoryClientDirectory::with_clients([
        Client::new(
            ClientId::new(1),
            "Corner Shop",
            ClientStatus::Bronze,
            ClientTier::Standard,
        ),
        Client::new(
            ClientId::new(2),
            "Regional Chain",
            ClientStatus::Silver,
            ClientTier::Important,
        ),
        Client::new(
            ClientId::new(3),
            "Global Holdings",
            ClientStatus::Gold,
            ClientTier::VeryImportant,
        ),
        Client::new(
            ClientId::new(4),
            "Acme Staffing",
            ClientStatus::Gold,
            ClientTier::Standard,
        ),
    ])
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        // No subscriber installed, so the diagnostic must bypass tracing.
        eprintln!("tracing init failed: {e}");
    }

    let args = Args::parse();

    let registry = Arc::new(InMemoryUserRegistry::new());
    let service = AdmissionService::new(
        Arc::new(seeded_directory()),
        Arc::new(FixedCreditOracle::new(args.base_credit)),
        Arc::clone(&registry),
        Arc::new(DefaultClock),
    );

    let request = AdmissionRequest {
        first_name: args.first_name,
        surname: args.surname,
        email: args.email,
        date_of_birth: args.date_of_birth,
        client_id: ClientId::new(args.client_id),
    };

    match service.admit(request).await {
        AdmissionResult::Success { user } => {
            info!(
                first_name = user.first_name(),
                surname = user.surname(),
                client = user.client().name(),
                credit_limit = user.credit_limit(),
                has_credit_limit = user.has_credit_limit(),
                "user admitted"
            );
            ExitCode::SUCCESS
        }
        AdmissionResult::Failure { reason, message } => {
            error!(%reason, message, "admission failed");
            ExitCode::FAILURE
        }
    }
}
