use std::time::Duration;

use reqwest::Client;

use crate::config::{ApiConfig, CredentialStatus, SecureString};
use crate::omdb::error::OmdbError;
use crate::omdb::types::{MovieRecord, SearchPayload};

const USER_AGENT: &str = concat!("cinescout/", env!("CARGO_PKG_VERSION"));

/// Movie metadata API client.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: SecureString,
}

impl OmdbClient {
    /// Build a client from configuration.
    ///
    /// Fails when the API key cannot be resolved, so a missing credential is
    /// reported at startup instead of on the first search.
    pub fn new(config: &ApiConfig) -> Result<Self, OmdbError> {
        let api_key = match config.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(OmdbError::MissingApiKey { reason });
            }
        };

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|source| OmdbError::Transport { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Look up a title.
    ///
    /// Exactly one outbound GET per call; the title is percent-encoded by the
    /// query builder. Callers are responsible for rejecting empty input before
    /// reaching this point.
    pub async fn search(&self, title: &str) -> Result<MovieRecord, OmdbError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("t", title), ("apikey", self.api_key.expose())])
            .send()
            .await
            .map_err(|source| OmdbError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OmdbError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let payload: SearchPayload = response
            .json()
            .await
            .map_err(|_| OmdbError::MalformedPayload)?;

        if !payload.is_hit() {
            let reason = payload
                .error
                .unwrap_or_else(|| "no matching title".to_string());
            return Err(OmdbError::NotFound { reason });
        }

        payload.into_record().ok_or(OmdbError::MalformedPayload)
    }
}
