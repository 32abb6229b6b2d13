//! User store — role lookups behind a data-access trait.
//!
//! Handlers depend on [`UserStore`] rather than on SQL so that the storage
//! engine can be swapped and tests can substitute an in-memory double.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::UserRecord;

/// Role string that grants administrative access.
pub const ADMIN_ROLE: &str = "Admin";

/// User store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by ID. `Ok(None)` when no row matches.
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// PostgreSQL-backed [`UserStore`].
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT id, user_role FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, user_role)| UserRecord { id, user_role }))
    }
}
