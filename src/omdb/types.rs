use serde::Deserialize;

/// Metadata for a single movie, as returned by the API.
///
/// Field values are kept verbatim; the API uses `"N/A"` for unknowns and that
/// is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Awards")]
    pub awards: String,
}

/// Raw response envelope.
///
/// `Response` is `"True"` on a hit and `"False"` otherwise; on a miss the
/// record fields are absent and `Error` carries the reason.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
}

impl SearchPayload {
    pub fn is_hit(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Assemble the record, requiring every field to be present.
    pub fn into_record(self) -> Option<MovieRecord> {
        Some(MovieRecord {
            title: self.title?,
            year: self.year?,
            genre: self.genre?,
            director: self.director?,
            awards: self.awards?,
        })
    }
}
