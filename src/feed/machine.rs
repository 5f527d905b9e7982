use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::feed::intent::FeedIntent;
use crate::feed::reducer::FeedReducer;
use crate::feed::state::{FeedState, FetchTicket};
use crate::mvi::Reducer;

/// Drives the feed: runs the reducer and performs the fetches reductions ask
/// for.
///
/// `dispatch` is the only way state changes, and the owner calls it from one
/// thread; fetch completions come back through the channel returned by
/// [`FeedMachine::new`] as further intents to dispatch, so there is never a
/// second writer. A fetch is spawned exactly when a reduction stamps a ticket
/// that differs from the previous one.
pub struct FeedMachine<C: Catalog> {
    state: FeedState,
    catalog: C,
    runtime: tokio::runtime::Handle,
    completions: mpsc::UnboundedSender<FeedIntent>,
}

impl<C: Catalog> FeedMachine<C> {
    pub fn new(
        catalog: C,
        runtime: tokio::runtime::Handle,
    ) -> (Self, mpsc::UnboundedReceiver<FeedIntent>) {
        let (completions, rx) = mpsc::unbounded_channel();
        let machine = Self {
            state: FeedState::default(),
            catalog,
            runtime,
            completions,
        };
        (machine, rx)
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: FeedIntent) {
        let previous = self.state.in_flight.clone();
        self.state = FeedReducer::reduce(std::mem::take(&mut self.state), intent);

        if let Some(ticket) = self.state.in_flight.clone() {
            if previous.as_ref() != Some(&ticket) {
                self.spawn_fetch(ticket);
            }
        }
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let catalog = self.catalog.clone();
        let completions = self.completions.clone();
        self.runtime.spawn(async move {
            let intent = match catalog.fetch(&ticket.query, ticket.page).await {
                Ok(page) => FeedIntent::PageLoaded { ticket, page },
                Err(err) => {
                    tracing::warn!(
                        query = %ticket.query,
                        page = ticket.page,
                        error = %err,
                        "feed fetch failed"
                    );
                    FeedIntent::FetchFailed { ticket }
                }
            };
            // Receiver gone means the screen was torn down; the result is
            // moot.
            let _ = completions.send(intent);
        });
    }
}
