//! Mock catalog upstream for client tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"status_message": "nope"}"#.to_string(),
        }
    }

    /// Well-formed result page with `(id, title, vote_average)` movies.
    pub fn page(page: u32, total_pages: u32, movies: &[(u64, &str, f64)]) -> Self {
        let results: Vec<serde_json::Value> = movies
            .iter()
            .map(|(id, title, vote)| {
                serde_json::json!({
                    "id": id,
                    "title": title,
                    "poster_path": format!("/poster-{id}.jpg"),
                    "backdrop_path": null,
                    "release_date": "2024-06-01",
                    "vote_average": vote,
                })
            })
            .collect();
        let body = serde_json::json!({
            "page": page,
            "results": results,
            "total_pages": total_pages,
        });
        Self::json(body.to_string())
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// In-process HTTP server answering catalog requests with queued responses.
/// An empty queue answers with an empty page 1.
pub struct MockCatalogServer {
    pub base_url: String,
    state: MockState,
}

impl MockCatalogServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock catalog");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().await.clone()
    }
}

async fn handle(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    let params = req.uri().query().map(parse_query).unwrap_or_default();
    state.captured.lock().await.push(CapturedRequest { path, params });

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::page(1, 1, &[]));

    Response::builder()
        .status(StatusCode::from_u16(response.status).expect("mock status"))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .expect("mock response")
}

// Enough query parsing for assertions; test fixtures avoid characters that
// need percent-decoding.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
