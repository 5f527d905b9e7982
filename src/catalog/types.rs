use serde::{Deserialize, Serialize};

/// Fixed base for poster images; the catalog only returns the path suffix.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// One movie record as the catalog returns it. Immutable once decoded.
///
/// Field names follow the wire contract. The artwork paths are `Option`
/// because the upstream sends JSON `null` for movies without an image;
/// absent and empty both render as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// ISO date text, passed through unvalidated.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Full poster URL, or `None` when the catalog has no artwork.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }
}

/// One page of catalog results. Consumed immediately on arrival; only the
/// movies survive into feed state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedPage {
    pub page: u32,
    #[serde(rename = "results")]
    pub movies: Vec<Movie>,
    pub total_pages: u32,
}
