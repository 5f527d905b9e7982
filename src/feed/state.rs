use crate::catalog::Movie;
use crate::mvi::UiState;

/// Rating sort direction for the feed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Highest rating first. The default.
    #[default]
    Descending,
    /// Lowest rating first.
    Ascending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }

    /// Stable sort by `vote_average`; equal ratings keep their input order.
    pub fn sort(self, movies: &mut [Movie]) {
        match self {
            Self::Descending => {
                movies.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average))
            }
            Self::Ascending => {
                movies.sort_by(|a, b| a.vote_average.total_cmp(&b.vote_average))
            }
        }
    }
}

/// The parameters one fetch was issued under. A completion whose ticket no
/// longer matches the state's `in_flight` ticket is stale and must not be
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub query: String,
    pub sort: SortOrder,
    pub page: u32,
}

/// What the view should show, projected from the flags so loading and error
/// are never observable together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Full state of the feed screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Current search text; empty means "browse popular".
    pub query: String,
    pub sort: SortOrder,
    /// Last page requested, 1-based.
    pub current_page: u32,
    /// Accumulated results. Each fetched page is sorted internally by the
    /// active order and appended; the combined list is not re-sorted across
    /// pages.
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub is_error: bool,
    /// Ticket of the outstanding fetch, if any.
    pub in_flight: Option<FetchTicket>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortOrder::default(),
            current_page: 1,
            movies: Vec::new(),
            is_loading: false,
            is_error: false,
            in_flight: None,
        }
    }
}

impl UiState for FeedState {}

impl FeedState {
    pub fn phase(&self) -> FeedPhase {
        if self.is_error {
            FeedPhase::Error
        } else if self.is_loading {
            FeedPhase::Loading
        } else if self.movies.is_empty() {
            FeedPhase::Idle
        } else {
            FeedPhase::Loaded
        }
    }

    /// Ticket for a fetch of `page` under the current query and sort.
    pub fn ticket(&self, page: u32) -> FetchTicket {
        FetchTicket {
            query: self.query.clone(),
            sort: self.sort,
            page,
        }
    }

    pub(crate) fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }
}
