mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::{movie, page};
use moviedeck::catalog::{Catalog, CatalogError, FeedPage};
use moviedeck::feed::{FeedIntent, FeedMachine, FeedPhase};

/// Scripted catalog: answers from a fixed (query, page) table and records
/// every call. Unscripted requests fail like a 500 from the upstream.
#[derive(Clone, Default)]
struct FakeCatalog {
    pages: Arc<Mutex<HashMap<(String, u32), FeedPage>>>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

impl FakeCatalog {
    fn script(&self, query: &str, page: u32, result: FeedPage) {
        self.pages
            .lock()
            .unwrap()
            .insert((query.to_string(), page), result);
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Catalog for FakeCatalog {
    async fn fetch(&self, query: &str, page: u32) -> Result<FeedPage, CatalogError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.pages
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .ok_or(CatalogError::Status { status: 500 })
    }
}

#[tokio::test]
async fn start_fetches_and_applies_page_one() {
    let fake = FakeCatalog::default();
    fake.script("", 1, page(1, 3, vec![movie(1, "a", 8.0), movie(2, "b", 6.0)]));

    let (mut machine, mut completions) =
        FeedMachine::new(fake.clone(), tokio::runtime::Handle::current());
    machine.dispatch(FeedIntent::Start);
    assert!(machine.state().is_loading);

    let completion = completions.recv().await.expect("completion");
    machine.dispatch(completion);

    assert_eq!(machine.state().phase(), FeedPhase::Loaded);
    assert_eq!(machine.state().movies.len(), 2);
    assert_eq!(fake.calls(), vec![(String::new(), 1)]);
}

#[tokio::test]
async fn end_reached_while_loading_spawns_no_second_fetch() {
    let fake = FakeCatalog::default();
    fake.script("", 1, page(1, 3, vec![movie(1, "a", 8.0)]));

    let (mut machine, mut completions) =
        FeedMachine::new(fake.clone(), tokio::runtime::Handle::current());
    machine.dispatch(FeedIntent::Start);
    machine.dispatch(FeedIntent::EndReached);

    let completion = completions.recv().await.expect("completion");
    machine.dispatch(completion);

    assert_eq!(fake.calls(), vec![(String::new(), 1)]);
    assert_eq!(machine.state().movies.len(), 1);
}

#[tokio::test]
async fn superseded_fetch_result_is_discarded() {
    let fake = FakeCatalog::default();
    fake.script("", 1, page(1, 3, vec![movie(1, "popular", 8.0)]));
    fake.script("dune", 1, page(1, 1, vec![movie(2, "dune", 7.0)]));

    let (mut machine, mut completions) =
        FeedMachine::new(fake.clone(), tokio::runtime::Handle::current());
    machine.dispatch(FeedIntent::Start);
    // The query changes before the popular fetch completes; whichever
    // completion arrives first, only the search result may be applied.
    machine.dispatch(FeedIntent::QueryChanged("dune".to_string()));

    for _ in 0..2 {
        let completion = completions.recv().await.expect("completion");
        machine.dispatch(completion);
    }

    let titles: Vec<&str> = machine
        .state()
        .movies
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["dune"]);
    assert_eq!(machine.state().query, "dune");
    assert_eq!(fake.calls().len(), 2);
}

#[tokio::test]
async fn failed_fetch_surfaces_as_error_state() {
    let fake = FakeCatalog::default();

    let (mut machine, mut completions) =
        FeedMachine::new(fake, tokio::runtime::Handle::current());
    machine.dispatch(FeedIntent::Start);

    let completion = completions.recv().await.expect("completion");
    machine.dispatch(completion);

    assert_eq!(machine.state().phase(), FeedPhase::Error);
    assert!(!machine.state().is_loading);
    assert!(machine.state().movies.is_empty());
}
