//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Config container with interior mutability.
///
/// The UI thread and the flow tasks each hold a clone; readers get a snapshot.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        let mut guard = self.inner.write().expect("config lock poisoned");
        *guard = config;
        Ok(())
    }

    /// The config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
