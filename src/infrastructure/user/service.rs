//! User service for registration and lookup

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::user::{UserRecord, UserRepository};
use crate::domain::DomainError;

/// Registration/lookup service.
///
/// Orchestrates persistence calls and translates storage failures into
/// domain failures. Input is expected to have passed the validation contract
/// before it reaches this layer.
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service over the given persistence gateway
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// Delegates to the gateway's save and returns the persisted record with
    /// its assigned id. Persistence failures are wrapped as registration
    /// failures carrying the original cause. No duplicate-username check is
    /// performed here and the password is stored as given.
    pub async fn register_user(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
        match self.repository.save(record).await {
            Ok(saved) => {
                info!(user_name = %saved.user_name, id = ?saved.id, "User registered successfully");
                Ok(saved)
            }
            Err(e) => {
                error!("Error occurred while registering user: {}", e);
                Err(DomainError::registration(e))
            }
        }
    }

    /// Fetch a user by username.
    ///
    /// Absence is a normal, non-exceptional outcome and surfaces as
    /// `Ok(None)`. Persistence failures are wrapped as lookup failures.
    pub async fn fetch_user_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserRecord>, DomainError> {
        match self.repository.find_by_user_name(user_name).await {
            Ok(Some(user)) => {
                info!(user_name = %user.user_name, "User fetched successfully");
                Ok(Some(user))
            }
            Ok(None) => {
                warn!(user_name = %user_name, "User not found");
                Ok(None)
            }
            Err(e) => {
                error!("Error occurred while fetching user: {}", e);
                Err(DomainError::lookup(e))
            }
        }
    }
}
