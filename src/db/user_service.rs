use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::json_file::JsonFileStore;
use super::UserStore;

#[derive(Clone)]
pub struct UserService {
    pub(crate) store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn with_json_file(path: impl Into<PathBuf>) -> Self {
        let store = JsonFileStore::new(path);
        info!("Using user store at {:?}", store.path());
        Self::new(Arc::new(store))
    }
}
