use crate::geo::Coordinate;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LocationIntent {
    /// User granted the consent prompt.
    Granted,
    /// User denied the consent prompt.
    Denied,
    /// The position fix arrived.
    FixAcquired(Coordinate),
    /// The position fix failed. State is left untouched; the caller surfaces
    /// a notice and logs the cause.
    FixFailed,
}

impl Intent for LocationIntent {}
