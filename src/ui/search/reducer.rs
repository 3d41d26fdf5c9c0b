use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::{SearchFailure, SearchPhase, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Typed(ch) => {
                let mut query = state.query;
                query.push(ch);
                SearchState {
                    query,
                    phase: state.phase,
                }
            }
            SearchIntent::Pasted(text) => {
                let mut query = state.query;
                // Strip control characters so a multi-line paste stays a
                // single query line.
                query.extend(text.chars().filter(|ch| !ch.is_control()));
                SearchState {
                    query,
                    phase: state.phase,
                }
            }
            SearchIntent::DeletedBack => {
                let mut query = state.query;
                query.pop();
                SearchState {
                    query,
                    phase: state.phase,
                }
            }
            SearchIntent::Cleared => SearchState {
                query: String::new(),
                phase: state.phase,
            },
            SearchIntent::Started { request_id } => SearchState {
                query: state.query,
                phase: SearchPhase::Loading { request_id },
            },
            SearchIntent::Found { request_id, movie } => {
                if !accepts(&state.phase, request_id) {
                    return state;
                }
                SearchState {
                    query: state.query,
                    phase: SearchPhase::Success { request_id, movie },
                }
            }
            SearchIntent::Missed { request_id } => {
                if !accepts(&state.phase, request_id) {
                    return state;
                }
                SearchState {
                    query: state.query,
                    phase: SearchPhase::Error {
                        request_id,
                        failure: SearchFailure::NotFound,
                    },
                }
            }
            SearchIntent::Errored { request_id } => {
                if !accepts(&state.phase, request_id) {
                    return state;
                }
                SearchState {
                    query: state.query,
                    phase: SearchPhase::Error {
                        request_id,
                        failure: SearchFailure::Transport,
                    },
                }
            }
        }
    }
}

/// A completion is applied only while its request is the one in flight.
/// Anything else is a stale response from a superseded request.
fn accepts(phase: &SearchPhase, request_id: u64) -> bool {
    matches!(phase, SearchPhase::Loading { request_id: current } if *current == request_id)
}
