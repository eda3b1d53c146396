//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{UserRecord, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository.
///
/// Records are keyed by their assigned id; ids are handed out from a
/// monotonically increasing sequence starting at 1. Username uniqueness is
/// not enforced; lookup returns the match with the lowest id.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, UserRecord>>>,
    next_id: Arc<RwLock<i64>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
        let mut users = self.users.write().await;

        let id = match record.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.write().await;
                let id = *next_id;
                *next_id += 1;
                id
            }
        };

        let stored = record.with_id(id);
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.user_name == user_name).cloned())
    }
}
