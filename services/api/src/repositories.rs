//! Repositories for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use crate::models::User;

pub mod memory;

pub use memory::MemoryUserStore;

/// Persistence operations over the user table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether any user is registered with `email`
    async fn email_exists(&self, email: &str) -> DatabaseResult<bool>;

    /// Total number of stored users
    async fn count_users(&self) -> DatabaseResult<i64>;

    /// Persist a new user row
    async fn insert(&self, user: &User) -> DatabaseResult<()>;

    /// First user stored under `id`, if any
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>>;

    /// Connectivity probe
    async fn ping(&self) -> DatabaseResult<()>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn email_exists(&self, email: &str) -> DatabaseResult<bool> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user" WHERE email = $1"#)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(count > 0)
    }

    async fn count_users(&self) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        info!("Users in database: {}", count);
        Ok(count)
    }

    async fn insert(&self, user: &User) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO "user" (id, name, email, password, create_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.create_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, create_at
            FROM "user"
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(user)
    }

    async fn ping(&self) -> DatabaseResult<()> {
        common::database::health_check(&self.pool).await?;
        Ok(())
    }
}
