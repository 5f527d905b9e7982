//! Unidirectional data flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State only changes inside a reducer, and a reducer is a pure function of
//! the previous state and one intent. Side effects (network fetches, disk
//! writes) live outside, driven by whoever owns the state and observes what
//! the reduction produced.

/// Marker trait for intents: user actions and completed side effects that
/// re-enter the loop (a fetch finishing, a fetch failing).
pub trait Intent: Send + 'static {}

/// Marker trait for state snapshots. Cloneable so a reduction can consume the
/// old snapshot and hand out the new one, comparable so views can skip
/// redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
