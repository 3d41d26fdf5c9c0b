use thiserror::Error;

/// Errors from a metadata lookup.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// The API answered but found no match for the title.
    #[error("No match: {reason}")]
    NotFound { reason: String },

    /// No API key in config or environment.
    #[error("Metadata API key missing: {reason}")]
    MissingApiKey { reason: String },

    /// Could not reach the API or the connection failed mid-request.
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The API returned a non-success HTTP status.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("Malformed response payload")]
    MalformedPayload,
}

impl OmdbError {
    /// True for failures worth suggesting a retry to the user.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            OmdbError::Transport { .. }
                | OmdbError::UnexpectedStatus { .. }
                | OmdbError::MalformedPayload
        )
    }
}
