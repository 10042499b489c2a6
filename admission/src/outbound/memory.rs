//! In-memory reference adapters for the three collaborator ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ports::{
    ClientDirectory, ClientDirectoryError, CreditOracle, CreditOracleError, UserRegistry,
    UserRegistryError,
};
use crate::domain::{Client, ClientId, User};

/// Client directory backed by a seeded map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryClientDirectory {
    clients: HashMap<ClientId, Client>,
}

impl InMemoryClientDirectory {
    /// Empty directory; every lookup resolves to "not found".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the given clients, keyed by their ids.
    #[must_use]
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        Self {
            clients: clients
                .into_iter()
                .map(|client| (client.id(), client))
                .collect(),
        }
    }

    /// Add or replace a client record.
    pub fn insert(&mut self, client: Client) {
        self.clients.insert(client.id(), client);
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn client_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientDirectoryError> {
        Ok(self.clients.get(&id).cloned())
    }
}

/// Credit oracle returning one configured base figure for every identity.
#[derive(Debug, Clone, Copy)]
pub struct FixedCreditOracle {
    base: u32,
}

impl FixedCreditOracle {
    /// Oracle answering every query with `base`.
    #[must_use]
    pub const fn new(base: u32) -> Self {
        Self { base }
    }
}

#[async_trait]
impl CreditOracle for FixedCreditOracle {
    async fn credit_limit(
        &self,
        _first_name: &str,
        _surname: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<u32, CreditOracleError> {
        Ok(self.base)
    }
}

/// Admitted user as retained by [`InMemoryUserRegistry`], with the
/// sequential identifier the registry assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    /// Registry-assigned identifier, starting at 1.
    pub id: u64,
    /// The admitted user as handed over by the engine.
    pub user: User,
}

/// User registry appending admitted users behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserRegistry {
    users: Mutex<Vec<RegisteredUser>>,
}

impl InMemoryUserRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every admitted user in insertion order.
    #[must_use]
    pub fn admitted(&self) -> Vec<RegisteredUser> {
        self.lock().clone()
    }

    /// Number of admitted users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no user has been admitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RegisteredUser>> {
        match self.users.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn add_user(&self, user: &User) -> Result<(), UserRegistryError> {
        let mut users = self.lock();
        let id = users.len() as u64 + 1;
        users.push(RegisteredUser {
            id,
            user: user.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Adapter behaviour coverage.

    use super::*;
    use crate::domain::{ClientStatus, ClientTier};

    fn sample_client(id: i64) -> Client {
        Client::new(
            ClientId::new(id),
            "Acme Staffing",
            ClientStatus::Silver,
            ClientTier::Standard,
        )
    }

    fn sample_user() -> User {
        User::new(
            "Homer",
            "Simpson",
            "homer.j.simpson@aol.com",
            NaiveDate::from_ymd_opt(1972, 5, 12).expect("valid date"),
            1000,
            sample_client(123),
        )
    }

    #[tokio::test]
    async fn directory_resolves_seeded_client() {
        let directory = InMemoryClientDirectory::with_clients([sample_client(4)]);

        let found = directory
            .client_by_id(ClientId::new(4))
            .await
            .expect("lookup succeeds");
        let missing = directory
            .client_by_id(ClientId::new(99))
            .await
            .expect("lookup succeeds");

        assert_eq!(found.map(|c| c.id()), Some(ClientId::new(4)));
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn oracle_returns_configured_figure() {
        let oracle = FixedCreditOracle::new(750);
        let figure = oracle
            .credit_limit(
                "Homer",
                "Simpson",
                NaiveDate::from_ymd_opt(1972, 5, 12).expect("valid date"),
            )
            .await
            .expect("query succeeds");
        assert_eq!(figure, 750);
    }

    #[tokio::test]
    async fn registry_assigns_sequential_identifiers() {
        let registry = InMemoryUserRegistry::new();

        registry.add_user(&sample_user()).await.expect("write ok");
        registry.add_user(&sample_user()).await.expect("write ok");

        let admitted = registry.admitted();
        assert_eq!(admitted.len(), 2);
        assert_eq!(admitted.first().map(|r| r.id), Some(1));
        assert_eq!(admitted.get(1).map(|r| r.id), Some(2));
    }
}
