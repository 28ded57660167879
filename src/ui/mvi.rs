//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! key / completion ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are the only place feature state changes. They are pure, so
//! every transition can be tested without a terminal or a network.

/// Marker for feature state: cloneable, comparable, with a resting default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
