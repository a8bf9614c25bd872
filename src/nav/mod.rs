//! Navigation router: which page is shown and which book is selected.
//!
//! State transitions follow the MVI pattern; side effects that ride
//! along with navigation (menu dismissal, scroll reset) are owned by
//! the app layer, not the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, PageId};
