//! Credential resolution for the metadata API.
//!
//! The key is read from configuration or the environment at client
//! construction time, never baked into the binary.

use crate::config::types::ApiConfig;

/// Environment variable consulted when `api.api_key` is not set.
pub const API_KEY_ENV_VAR: &str = "CINESCOUT_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value. Use only at the request boundary.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of API key resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Key resolved from config or environment.
    Configured(SecureString),
    /// No key anywhere.
    Unconfigured {
        /// Human-readable explanation of what was checked.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key: config value first, then `CINESCOUT_API_KEY`.
    ///
    /// Called at client construction and not cached, so a key exported in the
    /// environment is picked up without editing the config file.
    pub fn resolve_credential(&self) -> CredentialStatus {
        resolve(self.api_key.as_deref(), std::env::var(API_KEY_ENV_VAR).ok())
    }
}

fn resolve(configured: Option<&str>, from_env: Option<String>) -> CredentialStatus {
    if let Some(key) = configured {
        if !key.trim().is_empty() {
            return CredentialStatus::Configured(SecureString::new(key.to_string()));
        }
    }
    if let Some(key) = from_env {
        if !key.trim().is_empty() {
            return CredentialStatus::Configured(SecureString::new(key));
        }
    }
    CredentialStatus::Unconfigured {
        reason: format!("api.api_key is not set and {} is not exported", API_KEY_ENV_VAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn config_key_wins_over_env() {
        let status = resolve(Some("from-config"), Some("from-env".to_string()));
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "from-config"),
            CredentialStatus::Unconfigured { .. } => panic!("expected Configured"),
        }
    }

    #[test]
    fn env_used_when_config_empty() {
        let status = resolve(Some("   "), Some("from-env".to_string()));
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "from-env"),
            CredentialStatus::Unconfigured { .. } => panic!("expected Configured"),
        }
    }

    #[test]
    fn missing_everywhere_is_unconfigured() {
        assert!(matches!(
            resolve(None, None),
            CredentialStatus::Unconfigured { .. }
        ));
    }
}
