use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use super::UserStore;
use crate::types::{error::AppError, user::User};

/// Users kept as a pretty-printed JSON array in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    /// A missing file and text that is not JSON both read as an empty store.
    /// Well-formed JSON is kept; records lacking a password or role still load.
    async fn load(&self) -> Result<Vec<User>, AppError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("user store {:?} does not exist yet", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document = match serde_json::from_slice::<Value>(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!("user store {:?} is not valid JSON, treating as empty: {}", self.path, e);
                return Ok(Vec::new());
            }
        };

        // Valid JSON that is not an array of records is an error.
        Ok(serde_json::from_value(document)?)
    }

    // Truncates in place. A crash mid-write leaves a partial file.
    async fn save(&self, users: &[User]) -> Result<(), AppError> {
        let payload = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, payload).await?;
        debug!("wrote {} users to {:?}", users.len(), self.path);
        Ok(())
    }
}
