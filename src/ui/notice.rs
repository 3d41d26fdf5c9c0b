//! User-facing notices.
//!
//! The terminal stand-in for a mobile alert dialog: a single banner line that
//! replaces any previous notice and expires after a fixed number of ticks.
//! All flow errors end here; none of them crash the screen.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NoticeState {
    #[default]
    Hidden,
    Visible {
        level: NoticeLevel,
        text: String,
        ttl_ticks: u16,
    },
}

impl UiState for NoticeState {}

impl NoticeState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone)]
pub enum NoticeIntent {
    /// Show a notice, replacing whatever is on screen.
    Show {
        level: NoticeLevel,
        text: String,
        ttl_ticks: u16,
    },
    /// One tick elapsed.
    Tick,
    /// User dismissed the banner.
    Dismissed,
}

impl Intent for NoticeIntent {}

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::Show {
                level,
                text,
                ttl_ticks,
            } => NoticeState::Visible {
                level,
                text,
                ttl_ticks,
            },
            NoticeIntent::Tick => match state {
                NoticeState::Visible {
                    level,
                    text,
                    ttl_ticks,
                } if ttl_ticks > 1 => NoticeState::Visible {
                    level,
                    text,
                    ttl_ticks: ttl_ticks - 1,
                },
                _ => NoticeState::Hidden,
            },
            NoticeIntent::Dismissed => NoticeState::Hidden,
        }
    }
}
