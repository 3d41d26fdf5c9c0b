use crate::ui::location::intent::LocationIntent;
use crate::ui::location::state::{LocationState, Permission};
use crate::ui::mvi::Reducer;

pub struct LocationReducer;

impl Reducer for LocationReducer {
    type State = LocationState;
    type Intent = LocationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The prompt is answered once; later answers are no-ops.
            LocationIntent::Granted => match state.permission {
                Permission::Unasked => LocationState {
                    permission: Permission::Granted,
                    coordinate: None,
                },
                _ => state,
            },
            LocationIntent::Denied => match state.permission {
                Permission::Unasked => LocationState {
                    permission: Permission::Denied,
                    coordinate: None,
                },
                _ => state,
            },
            // Only the first fix after a grant lands; a fix without a grant
            // (or a duplicate) is discarded.
            LocationIntent::FixAcquired(coordinate) => {
                if state.permission == Permission::Granted && state.coordinate.is_none() {
                    LocationState {
                        permission: Permission::Granted,
                        coordinate: Some(coordinate),
                    }
                } else {
                    state
                }
            }
            LocationIntent::FixFailed => state,
        }
    }
}
