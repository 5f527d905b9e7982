//! The feed synchronization state machine.
//!
//! Query text, sort direction, and the current page drive catalog fetches;
//! fetched pages merge into the accumulated movie list; loading and error
//! flags tell the view which of spinner, list, or error line to draw. All
//! transitions are pure and live in [`FeedReducer`]; [`FeedMachine`] wraps
//! the reducer and performs the fetches the reductions ask for.
//!
//! Two rules shape everything here:
//!
//! - At most one fetch is outstanding. Scroll-driven fetches are dropped
//!   while one is loading; query and sort changes instead supersede the
//!   outstanding fetch, whose completion is then discarded as stale.
//! - Completions carry the [`FetchTicket`] they were issued under and are
//!   ignored unless it still matches, so a slow response for an abandoned
//!   query can never populate the current list.

mod intent;
mod machine;
mod reducer;
mod state;

pub use intent::FeedIntent;
pub use machine::FeedMachine;
pub use reducer::FeedReducer;
pub use state::{FeedPhase, FeedState, FetchTicket, SortOrder};
