//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::user::UserService;

/// Application state wired together at process startup.
///
/// Each request flows Handler -> Service -> Gateway with no cross-request
/// state beyond the persistence store itself.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}
