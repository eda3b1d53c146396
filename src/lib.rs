//! User Registration API
//!
//! A minimal user-registration web service: accepts a username/email/password
//! payload, validates it, persists it, and allows lookup by username.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::user::UserRepository;
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};
use tracing::info;

/// Create the application state with all services wired together.
///
/// The repository backend is chosen from configuration: `memory` (default)
/// or `postgres`, the latter reading its connection string from the
/// DATABASE_URL environment variable.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository: Arc<dyn UserRepository> = match config.storage.backend.to_lowercase().as_str() {
        "memory" | "inmemory" | "in-memory" | "in_memory" => {
            info!("Using in-memory user storage");
            Arc::new(InMemoryUserRepository::new())
        }
        "postgres" | "postgresql" | "pg" => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let repository = PostgresUserRepository::new(pool);
            repository.ensure_schema().await?;
            Arc::new(repository)
        }
        other => {
            return Err(anyhow::anyhow!("Unknown storage backend: {}", other));
        }
    };

    let user_service = Arc::new(UserService::new(repository));

    Ok(AppState::new(user_service))
}
