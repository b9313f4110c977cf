use async_trait::async_trait;

use crate::types::{error::AppError, user::User};

pub mod json_file;
pub mod memory;
pub mod user;
pub mod user_service;

/// Whole-collection storage for user records.
///
/// `load` hands back every record in stored order and `save` replaces the
/// entire collection. There is no keyed access and no isolation between a
/// `load` and the following `save`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load(&self) -> Result<Vec<User>, AppError>;

    async fn save(&self, users: &[User]) -> Result<(), AppError>;
}
