use crate::geo::Coordinate;
use crate::ui::mvi::UiState;

/// Answer to the one-time consent prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Prompt is on screen, not yet answered.
    #[default]
    Unasked,
    Granted,
    Denied,
}

/// State of the location flow.
///
/// Mutated at most twice per screen lifetime: once when the consent prompt is
/// answered, once when the position fix arrives. The coordinate can only be
/// present after a grant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocationState {
    pub permission: Permission,
    pub coordinate: Option<Coordinate>,
}

impl UiState for LocationState {}

impl LocationState {
    pub fn is_unasked(&self) -> bool {
        self.permission == Permission::Unasked
    }
}
