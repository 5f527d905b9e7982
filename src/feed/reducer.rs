use crate::feed::intent::FeedIntent;
use crate::feed::state::FeedState;
use crate::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Start => restart(state),
            FeedIntent::QueryChanged(query) => {
                if query == state.query {
                    return state;
                }
                restart(FeedState { query, ..state })
            }
            FeedIntent::SortToggled => restart(FeedState {
                sort: state.sort.toggled(),
                ..state
            }),
            FeedIntent::EndReached => {
                if state.is_loading || state.is_error || state.movies.is_empty() {
                    return state;
                }
                let next_page = state.current_page + 1;
                let ticket = state.ticket(next_page);
                FeedState {
                    current_page: next_page,
                    is_loading: true,
                    is_error: false,
                    in_flight: Some(ticket),
                    ..state
                }
            }
            FeedIntent::Retry => {
                if state.is_loading {
                    return state;
                }
                let ticket = state.ticket(state.current_page);
                FeedState {
                    is_loading: true,
                    is_error: false,
                    in_flight: Some(ticket),
                    ..state
                }
            }
            FeedIntent::PageLoaded { ticket, page } => {
                if !state.is_current(&ticket) {
                    return state;
                }
                let mut arrived = page.movies;
                ticket.sort.sort(&mut arrived);
                let mut state = state;
                // Page 1 replaces the list; later pages append after the
                // already-merged ones, each sorted only within itself.
                if ticket.page == 1 {
                    state.movies = arrived;
                } else {
                    state.movies.extend(arrived);
                }
                state.current_page = ticket.page;
                state.is_loading = false;
                state.is_error = false;
                state.in_flight = None;
                state
            }
            FeedIntent::FetchFailed { ticket } => {
                if !state.is_current(&ticket) {
                    return state;
                }
                FeedState {
                    is_loading: false,
                    is_error: true,
                    in_flight: None,
                    ..state
                }
            }
        }
    }
}

/// Full reset: movies cleared, back to page 1, fresh ticket for the state's
/// query and sort. Any outstanding fetch is superseded and its completion
/// will no longer match.
fn restart(state: FeedState) -> FeedState {
    let reset = FeedState {
        current_page: 1,
        ..state
    };
    let ticket = reset.ticket(1);
    FeedState {
        movies: Vec::new(),
        is_loading: true,
        is_error: false,
        in_flight: Some(ticket),
        ..reset
    }
}
