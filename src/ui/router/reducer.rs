use crate::ui::mvi::Reducer;

use super::intent::RouterIntent;
use super::state::RouterState;

pub struct RouterReducer;

impl Reducer for RouterReducer {
    type State = RouterState;
    type Intent = RouterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let active = match intent {
            RouterIntent::Next => state.active.next(),
            RouterIntent::Previous => state.active.previous(),
            RouterIntent::Select(pane) => pane,
        };
        RouterState { active }
    }
}
