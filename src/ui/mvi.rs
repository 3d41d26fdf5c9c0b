//! Unidirectional data flow primitives.
//!
//! Every piece of screen state is owned by a state record, mutated only by a
//! reducer, and rendered by a view that is a pure function of the records:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Intents cover both user actions (keystrokes) and system events (HTTP
//! responses arriving from the flow tasks). Reducers are pure: side effects
//! live in [`crate::ui::flows`], never here.

/// Marker trait for state records.
///
/// States are cloneable snapshots, comparable so a view can detect changes,
/// and self-contained enough to render from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
