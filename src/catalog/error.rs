use thiserror::Error;

/// Errors from one catalog request.
///
/// The feed treats every variant the same way (one attempt, surfaced as an
/// error flag); the variants exist so logs can tell a refused connection from
/// a body that stopped matching the schema.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure: DNS, connect, TLS, or a broken transfer.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("catalog returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a decodable result page.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}
