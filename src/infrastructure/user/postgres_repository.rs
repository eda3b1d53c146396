//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{UserRecord, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                user_name TEXT NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
        match record.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO users (user_name, email, password)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(&record.user_name)
                .bind(&record.email)
                .bind(&record.password)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to save user: {}", e)))?;

                Ok(record.with_id(id))
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE users
                    SET user_name = $2, email = $3, password = $4
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&record.user_name)
                .bind(&record.email)
                .bind(&record.password)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to save user: {}", e)))?;

                if result.rows_affected() == 0 {
                    return Err(DomainError::storage(format!(
                        "User with id {} does not exist",
                        id
                    )));
                }

                Ok(record)
            }
        }
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_name, email, password
            FROM users
            WHERE user_name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find user by username: {}", e)))?;

        Ok(row.map(|row| row_to_record(&row)))
    }
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> UserRecord {
    UserRecord {
        id: Some(row.get("id")),
        user_name: row.get("user_name"),
        email: row.get("email"),
        password: row.get("password"),
    }
}
