use crate::catalog::{CatalogClient, Movie};
use crate::favourites::FavouritesController;
use crate::feed::{FeedIntent, FeedMachine, FeedState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Feed,
    Favourites,
}

/// Everything the draw loop reads and the key handler mutates.
pub struct App {
    should_quit: bool,
    screen: Screen,
    feed: FeedMachine<CatalogClient>,
    favourites: FavouritesController,
    feed_selected: usize,
    favourites_selected: usize,
    search_active: bool,
    /// Last persistence failure, shown in the status line until the next
    /// successful mutation.
    store_error: Option<String>,
}

impl App {
    pub fn new(feed: FeedMachine<CatalogClient>, favourites: FavouritesController) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Feed,
            feed,
            favourites,
            feed_selected: 0,
            favourites_selected: 0,
            search_active: false,
            store_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Feed => Screen::Favourites,
            Screen::Favourites => Screen::Feed,
        };
        self.search_active = false;
        self.clamp_selection();
    }

    pub fn feed_state(&self) -> &FeedState {
        self.feed.state()
    }

    pub fn favourites(&self) -> &FavouritesController {
        &self.favourites
    }

    pub fn store_error(&self) -> Option<&str> {
        self.store_error.as_deref()
    }

    pub fn dispatch_feed(&mut self, intent: FeedIntent) {
        self.feed.dispatch(intent);
        self.clamp_selection();
    }

    // -- search box ---------------------------------------------------------

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn begin_search(&mut self) {
        self.search_active = true;
    }

    pub fn end_search(&mut self) {
        self.search_active = false;
    }

    /// Live query edit: every keystroke resets the feed and refetches.
    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.feed.state().query.clone();
        query.push(c);
        self.dispatch_feed(FeedIntent::QueryChanged(query));
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.feed.state().query.clone();
        if query.pop().is_some() {
            self.dispatch_feed(FeedIntent::QueryChanged(query));
        }
    }

    // -- list selection -----------------------------------------------------

    pub fn selected_index(&self) -> usize {
        match self.screen {
            Screen::Feed => self.feed_selected,
            Screen::Favourites => self.favourites_selected,
        }
    }

    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Feed => {
                let len = self.feed.state().movies.len();
                if len == 0 {
                    return;
                }
                if self.feed_selected + 1 < len {
                    self.feed_selected += 1;
                }
                // Landing on the last loaded row asks for the next page.
                // The reducer drops the request while a fetch is loading.
                if self.feed_selected + 1 == len {
                    self.dispatch_feed(FeedIntent::EndReached);
                }
            }
            Screen::Favourites => {
                let len = self.favourites.list().len();
                if len != 0 && self.favourites_selected + 1 < len {
                    self.favourites_selected += 1;
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen {
            Screen::Feed => self.feed_selected = self.feed_selected.saturating_sub(1),
            Screen::Favourites => {
                self.favourites_selected = self.favourites_selected.saturating_sub(1)
            }
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        match self.screen {
            Screen::Feed => self.feed.state().movies.get(self.feed_selected),
            Screen::Favourites => self.favourites.list().get(self.favourites_selected),
        }
    }

    // -- favourites ---------------------------------------------------------

    /// Toggles the selected movie in or out of the favourites list. On the
    /// favourites screen this always removes.
    pub fn toggle_favourite(&mut self) {
        let Some(movie) = self.selected_movie().cloned() else {
            return;
        };
        let result = match self.screen {
            Screen::Feed if !self.favourites.contains(&movie) => self.favourites.add(movie),
            _ => self.favourites.remove(movie.id),
        };
        match result {
            Ok(()) => self.store_error = None,
            Err(err) => {
                tracing::error!(error = %err, "failed to persist favourites");
                self.store_error = Some(err.to_string());
            }
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let feed_len = self.feed.state().movies.len();
        self.feed_selected = self.feed_selected.min(feed_len.saturating_sub(1));
        let fav_len = self.favourites.list().len();
        self.favourites_selected = self.favourites_selected.min(fav_len.saturating_sub(1));
    }
}
