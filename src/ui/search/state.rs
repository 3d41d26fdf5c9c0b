use crate::omdb::MovieRecord;
use crate::ui::mvi::UiState;

/// State of the title search: the query being edited plus the request phase.
///
/// The movie record lives only inside `SearchPhase::Success`, so a result can
/// never be displayed while a request is loading or failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
}

/// Lifecycle of the most recent search request.
///
/// Non-idle phases carry the id of the request that produced them; the
/// reducer uses it to discard completions of superseded requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading {
        request_id: u64,
    },
    Success {
        request_id: u64,
        movie: MovieRecord,
    },
    Error {
        request_id: u64,
        failure: SearchFailure,
    },
}

/// Why a search did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// The API found no match for the title.
    NotFound,
    /// Network problem, bad status, or unparseable body.
    Transport,
}

impl UiState for SearchState {}

impl SearchState {
    /// The record to display, present only in the success phase.
    pub fn movie(&self) -> Option<&MovieRecord> {
        match &self.phase {
            SearchPhase::Success { movie, .. } => Some(movie),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }
}
