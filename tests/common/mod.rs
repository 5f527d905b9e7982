//! Shared test fixtures.

#![allow(dead_code)]

pub mod mock_catalog;

use moviedeck::catalog::{FeedPage, Movie};

/// Movie fixture with a distinguishable title, so ties on rating can still
/// be told apart in order assertions.
pub fn movie(id: u64, title: &str, vote_average: f64) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: "2024-06-01".to_string(),
        vote_average,
    }
}

pub fn page(page_number: u32, total_pages: u32, movies: Vec<Movie>) -> FeedPage {
    FeedPage {
        page: page_number,
        movies,
        total_pages,
    }
}
