//! Unidirectional data flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every interactive subsystem (navigation, overlays) implements these
//! traits: user actions become intents, a pure reducer produces the
//! next state snapshot, and the view is drawn from that snapshot alone.

/// Marker trait for state snapshots.
///
/// Snapshots are immutable: a reduction consumes the old snapshot and
/// returns a new one. `PartialEq` allows change detection, `Default` is
/// the session-start value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents — user actions or system events.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reducers are the only place state transitions happen and must have
/// no side effects. Effects that accompany a transition (scroll reset,
/// menu dismissal, network calls) belong to the app layer.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
