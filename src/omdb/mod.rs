//! Client for the OMDb-compatible movie metadata API.
//!
//! One operation: look a title up and get back either a [`MovieRecord`] or a
//! classified error. The API signals domain-level failure in the body
//! (`Response: "False"`) rather than through HTTP status codes, so the client
//! folds both layers into a single error taxonomy.

mod client;
mod error;
mod types;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use types::MovieRecord;
