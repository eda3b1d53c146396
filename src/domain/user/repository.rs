//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Repository trait for user storage.
///
/// Single-record atomicity only; no update or delete is exposed through the
/// service surface. Absence of a record is a normal empty result, never an
/// error.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a record, assigning an id if it does not have one yet.
    /// Returns the stored value including the assigned id.
    async fn save(&self, record: UserRecord) -> Result<UserRecord, DomainError>;

    /// Look up a record by username
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing service-level error wrapping
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<BTreeMap<i64, UserRecord>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;

            let id = match record.id {
                Some(id) => id,
                None => users.keys().next_back().copied().unwrap_or(0) + 1,
            };

            let stored = record.with_id(id);
            users.insert(id, stored.clone());
            Ok(stored)
        }

        async fn find_by_user_name(
            &self,
            user_name: &str,
        ) -> Result<Option<UserRecord>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.user_name == user_name).cloned())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_save_assigns_sequential_ids() {
            let repo = MockUserRepository::new();

            let first = repo
                .save(UserRecord::new("alice", "alice@example.com", "Str0ng!Pass"))
                .await
                .unwrap();
            let second = repo
                .save(UserRecord::new("bob", "bob@example.com", "Str0ng!Pass"))
                .await
                .unwrap();

            assert_eq!(first.id, Some(1));
            assert_eq!(second.id, Some(2));
        }

        #[tokio::test]
        async fn test_find_by_user_name() {
            let repo = MockUserRepository::new();

            repo.save(UserRecord::new("alice", "alice@example.com", "Str0ng!Pass"))
                .await
                .unwrap();

            let found = repo.find_by_user_name("alice").await.unwrap();
            assert!(found.is_some());
            assert_eq!(found.unwrap().email, "alice@example.com");

            let missing = repo.find_by_user_name("nobody").await.unwrap();
            assert!(missing.is_none());
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo
                .save(UserRecord::new("alice", "alice@example.com", "Str0ng!Pass"))
                .await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }
    }
}
