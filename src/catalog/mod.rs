//! HTTP binding for the remote movie catalog.
//!
//! Two operations exist: popular movies by page and text search by query and
//! page. Both return one [`FeedPage`] or one [`CatalogError`]; there are no
//! retries here. The client is constructed explicitly from config and handed
//! to whoever needs it — no process-wide singleton.

mod error;
mod types;

pub use error::CatalogError;
pub use types::{FeedPage, Movie, IMAGE_BASE_URL};

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::config::CatalogConfig;

/// Fetch seam the feed state machine is generic over. Empty queries route to
/// the popular listing, everything else to search.
pub trait Catalog: Clone + Send + Sync + 'static {
    fn fetch(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<FeedPage, CatalogError>> + Send;
}

/// reqwest-backed catalog client.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// `GET /movie/popular` for the given page (1-based).
    pub async fn fetch_popular(&self, page: u32) -> Result<FeedPage, CatalogError> {
        self.get_page("/movie/popular", None, page).await
    }

    /// `GET /search/movie` for the given query and page (1-based). Callers
    /// route empty queries to [`fetch_popular`](Self::fetch_popular) instead.
    pub async fn search(&self, query: &str, page: u32) -> Result<FeedPage, CatalogError> {
        self.get_page("/search/movie", Some(query), page).await
    }

    async fn get_page(
        &self,
        path: &str,
        query: Option<&str>,
        page: u32,
    ) -> Result<FeedPage, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&[("page", page)])
            .query(&[("include_adult", false)]);
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }

        tracing::debug!(path, page, "fetching catalog page");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, page, status = status.as_u16(), "catalog rejected request");
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<FeedPage>().await.map_err(CatalogError::Decode)
    }
}

impl Catalog for CatalogClient {
    async fn fetch(&self, query: &str, page: u32) -> Result<FeedPage, CatalogError> {
        if query.is_empty() {
            self.fetch_popular(page).await
        } else {
            self.search(query, page).await
        }
    }
}
