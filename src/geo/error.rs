use thiserror::Error;

/// Errors from a position-fix request.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Could not reach the geolocation service.
    #[error("Position fix request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered but could not locate this address.
    #[error("Position unavailable: {reason}")]
    Unavailable { reason: String },

    /// The body was not the JSON shape we expect.
    #[error("Malformed position payload")]
    MalformedPayload,
}
