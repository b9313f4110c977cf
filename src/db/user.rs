use super::user_service::UserService;
use crate::types::{
    error::AppError,
    user::{RLogin, RRegister, User},
};
use tracing::info;

/// Absent and empty both count as missing.
fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

impl UserService {
    /// Signup: append a new record after a full scan for the username.
    pub async fn register_user(&self, payload: RRegister) -> Result<User, AppError> {
        let (Some(username), Some(password), Some(role)) = (
            required(payload.username),
            required(payload.password),
            required(payload.role),
        ) else {
            return Err(AppError::MissingFields);
        };

        let mut users = self.store.load().await?;
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUser);
        }

        let user = User {
            username,
            password,
            role,
        };
        users.push(user.clone());
        self.store.save(&users).await?;

        info!("Registered user {} with role {}", user.username, user.role);
        Ok(user)
    }

    /// Returns the first record matching both username and password.
    pub async fn login_user(&self, payload: RLogin) -> Result<User, AppError> {
        let (Some(username), Some(password)) =
            (required(payload.username), required(payload.password))
        else {
            return Err(AppError::MissingFields);
        };

        self.store
            .load()
            .await?
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(AppError::InvalidCredentials)
    }
}
