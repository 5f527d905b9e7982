//! User-curated favourites, independent of the feed's volatile state.
//!
//! The controller owns the in-memory list and mirrors every mutation to the
//! [`FavouritesStore`] before returning (write-through). Initialization reads
//! the persisted list once; see [`FavouritesStore::load`] for the degraded
//! paths.

mod store;

pub use store::{FavouritesStore, StoreError};

use crate::catalog::Movie;

/// In-memory favourites list with write-through persistence.
pub struct FavouritesController {
    movies: Vec<Movie>,
    store: FavouritesStore,
}

impl FavouritesController {
    pub fn new(store: FavouritesStore) -> Self {
        let movies = store.load();
        Self { movies, store }
    }

    /// Adds a movie unless one with the same id is already present.
    /// A duplicate add changes nothing and does not rewrite storage.
    pub fn add(&mut self, movie: Movie) -> Result<(), StoreError> {
        if self.contains_id(movie.id) {
            return Ok(());
        }
        self.movies.push(movie);
        self.store.save(&self.movies)
    }

    /// Drops every entry with the given id and rewrites storage, whether or
    /// not anything matched.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        self.movies.retain(|movie| movie.id != id);
        self.store.save(&self.movies)
    }

    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Membership by full record equality, used when marking rows in the
    /// live feed.
    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.contains(movie)
    }

    /// Membership by id, used for deduplication and removal.
    pub fn contains_id(&self, id: u64) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }
}
