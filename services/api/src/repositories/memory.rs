//! In-process user store

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::RwLock;

use super::UserStore;
use crate::models::User;

/// User store kept in memory, with the same email uniqueness as the table
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored row, in insertion order
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn email_exists(&self, email: &str) -> DatabaseResult<bool> {
        Ok(self.users.read().await.iter().any(|u| u.email == email))
    }

    async fn count_users(&self) -> DatabaseResult<i64> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn insert(&self, user: &User) -> DatabaseResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::Duplicate("user_email_key".to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn ping(&self) -> DatabaseResult<()> {
        Ok(())
    }
}
