use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserStore;
use crate::types::{error::AppError, user::User};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn save(&self, users: &[User]) -> Result<(), AppError> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}
