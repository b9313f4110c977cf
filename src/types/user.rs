use serde::{Deserialize, Serialize};

/// One persisted record. Field order is the on-disk order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RRegister {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RLogin {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct RegisterRes {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct LoginRes {
    pub success: bool,
    pub message: String,
    pub role: String,
}
