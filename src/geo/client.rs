use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::LocationConfig;
use crate::geo::error::GeoError;
use crate::geo::Coordinate;

const USER_AGENT: &str = concat!("cinescout/", env!("CARGO_PKG_VERSION"));

/// Response shape of the ip-api.com JSON endpoint, trimmed to what we ask for.
#[derive(Debug, Deserialize)]
struct FixPayload {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// IP-geolocation client.
#[derive(Clone)]
pub struct GeoClient {
    client: Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(config: &LocationConfig) -> Result<Self, GeoError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|source| GeoError::Transport { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request a single position fix for the caller's public address.
    pub async fn current_position(&self) -> Result<Coordinate, GeoError> {
        let response = self
            .client
            .get(format!("{}/json", self.base_url))
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|source| GeoError::Transport { source })?;

        let payload: FixPayload = response
            .json()
            .await
            .map_err(|_| GeoError::MalformedPayload)?;

        if !payload.status.eq_ignore_ascii_case("success") {
            let reason = payload
                .message
                .unwrap_or_else(|| "service reported failure".to_string());
            return Err(GeoError::Unavailable { reason });
        }

        match (payload.lat, payload.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate {
                latitude,
                longitude,
            }),
            _ => Err(GeoError::MalformedPayload),
        }
    }
}
