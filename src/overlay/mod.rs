//! Visibility flags for the burger menu and the AI-disclosure popup.
//!
//! Two independent booleans. The menu is force-closed by every
//! navigation transition (the app layer dispatches `DismissMenu`); the
//! popup ignores navigation and closes only on its dismiss control.

mod intent;
mod reducer;
mod state;

pub use intent::OverlayIntent;
pub use reducer::OverlayReducer;
pub use state::OverlayState;
