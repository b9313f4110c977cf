use std::path::PathBuf;
use std::sync::Arc;

use roster_auth::db::json_file::JsonFileStore;
use roster_auth::db::memory::MemoryStore;
use roster_auth::db::user_service::UserService;
use roster_auth::db::UserStore;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub users: Arc<UserService>,
    pub store: Arc<dyn UserStore>,
    #[allow(dead_code)]
    pub store_path: Option<PathBuf>,
    _dir: Option<TempDir>,
}

impl TestContext {
    /// Backed by a fresh `users.json` inside a temp directory.
    #[allow(dead_code)]
    pub fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("users.json");
        let store: Arc<dyn UserStore> = Arc::new(JsonFileStore::new(&path));

        TestContext {
            users: Arc::new(UserService::new(Arc::clone(&store))),
            store,
            store_path: Some(path),
            _dir: Some(dir),
        }
    }

    #[allow(dead_code)]
    pub fn in_memory() -> TestContext {
        let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());

        TestContext {
            users: Arc::new(UserService::new(Arc::clone(&store))),
            store,
            store_path: None,
            _dir: None,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use roster_auth::types::user::{RLogin, RRegister};
    use serde_json::{json, Value};

    pub fn register_body(username: &str, password: &str, role: &str) -> Value {
        json!({ "username": username, "password": password, "role": role })
    }

    pub fn login_body(username: &str, password: &str) -> Value {
        json!({ "username": username, "password": password })
    }

    pub fn sample_register() -> RRegister {
        RRegister {
            username: Some("alice".to_string()),
            password: Some("p1".to_string()),
            role: Some("admin".to_string()),
        }
    }

    pub fn sample_login(password: &str) -> RLogin {
        RLogin {
            username: Some("alice".to_string()),
            password: Some(password.to_string()),
        }
    }
}
