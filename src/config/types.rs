use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Movie metadata API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OMDb-compatible metadata endpoint.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// API key. Falls back to the `CINESCOUT_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
}

/// Position-fix service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Base URL of the IP-geolocation service.
    #[serde(default = "default_location_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_location_timeout")]
    pub timeout_seconds: u32,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How many ticks a notice banner stays on screen.
    #[serde(default = "default_notice_ttl_ticks")]
    pub notice_ttl_ticks: u16,
    /// Latitude span of the map viewport, in degrees.
    #[serde(default = "default_map_lat_span")]
    pub map_lat_span: f64,
    /// Longitude span of the map viewport, in degrees.
    #[serde(default = "default_map_lon_span")]
    pub map_lon_span: f64,
}

fn default_api_base_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_api_timeout() -> u32 {
    10
}

fn default_location_base_url() -> String {
    "http://ip-api.com".to_string()
}

fn default_location_timeout() -> u32 {
    5
}

fn default_tick_ms() -> u64 {
    250
}

fn default_notice_ttl_ticks() -> u16 {
    20
}

fn default_map_lat_span() -> f64 {
    30.0
}

fn default_map_lon_span() -> f64 {
    60.0
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            api_key: None,
            timeout_seconds: default_api_timeout(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_location_base_url(),
            timeout_seconds: default_location_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            notice_ttl_ticks: default_notice_ttl_ticks(),
            map_lat_span: default_map_lat_span(),
            map_lon_span: default_map_lon_span(),
        }
    }
}
