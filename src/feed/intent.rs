use crate::catalog::FeedPage;
use crate::feed::state::FetchTicket;
use crate::mvi::Intent;

/// User actions and fetch completions driving the feed.
#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// Feed screen activated; issue the page-1 fetch for the current
    /// parameters.
    Start,
    /// Search text edited. Resets the list and refetches from page 1.
    QueryChanged(String),
    /// Sort direction flipped. Resets the list and refetches from page 1;
    /// the accumulated list may be incomplete from the server's point of
    /// view, so a re-sort in place would be wrong.
    SortToggled,
    /// Selection reached the last loaded row; request the next page.
    /// Dropped while a fetch is loading or the list is empty.
    EndReached,
    /// User asked to refetch after a failure. Never issued automatically.
    Retry,
    /// A fetch finished with a page of results.
    PageLoaded { ticket: FetchTicket, page: FeedPage },
    /// A fetch failed: transport error, bad status, or undecodable body.
    FetchFailed { ticket: FetchTicket },
}

impl Intent for FeedIntent {}
