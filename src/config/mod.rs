//! Application configuration.
//!
//! Loaded from a TOML file in the platform config directory. The metadata API
//! key is never compiled into the binary: it comes from the config file or the
//! `CINESCOUT_API_KEY` environment variable, and is handled as a
//! [`SecureString`] so it cannot leak through Debug output or logs.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, LocationConfig, UiConfig};
