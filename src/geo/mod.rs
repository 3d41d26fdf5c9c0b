//! One-shot position fix via IP geolocation.
//!
//! Terminal processes have no GPS, so the "current position" is resolved the
//! way terminal map tools do it: a single request to an ip-api.com-compatible
//! service, issued only after the user has granted the in-app consent prompt.

mod client;
mod error;

pub use client::GeoClient;
pub use error::GeoError;

/// A geographic coordinate in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}
