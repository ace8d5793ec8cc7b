//! Controller behavior under a paused tokio clock.
//!
//! A scripted [`PointSource`] stands in for the lookup service so the
//! debounce window, the fetch latency and the response ordering are all
//! deterministic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use opsearch_client::{FetchError, PointSource, SearchConfig, SearchController, SearchHandle};
use opsearch_core::{OperationalPoint, SessionSnapshot};
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

fn op(name: &str, ch: &str, ci: u64) -> OperationalPoint {
    OperationalPoint {
        name: name.to_string(),
        ch: ch.to_string(),
        ci,
    }
}

fn parisian_fixture() -> Vec<OperationalPoint> {
    vec![
        op("Paris Gare de Lyon", "00", 1),
        op("Parthenay", "X1", 2),
    ]
}

struct Script {
    delay: Duration,
    outcome: Result<Vec<OperationalPoint>, reqwest::StatusCode>,
}

/// Lookup stub that answers each known query after a fixed delay and logs
/// every issued query.
#[derive(Default)]
struct ScriptedSource {
    scripts: HashMap<String, Script>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    fn answer(mut self, query: &str, delay_ms: u64, points: Vec<OperationalPoint>) -> Self {
        self.scripts.insert(
            query.to_string(),
            Script {
                delay: Duration::from_millis(delay_ms),
                outcome: Ok(points),
            },
        );
        self
    }

    fn fail(mut self, query: &str, delay_ms: u64, status: reqwest::StatusCode) -> Self {
        self.scripts.insert(
            query.to_string(),
            Script {
                delay: Duration::from_millis(delay_ms),
                outcome: Err(status),
            },
        );
        self
    }

    fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl PointSource for ScriptedSource {
    async fn search(&self, query: &str) -> Result<Vec<OperationalPoint>, FetchError> {
        self.calls.lock().unwrap().push(query.to_string());
        let Some(script) = self.scripts.get(query) else {
            return Ok(Vec::new());
        };
        sleep(script.delay).await;
        match &script.outcome {
            Ok(points) => Ok(points.clone()),
            Err(status) => Err(FetchError::Status(*status)),
        }
    }
}

fn spawn_default(source: ScriptedSource) -> SearchHandle {
    SearchController::spawn(source, SearchConfig::default())
}

/// Waits until a published snapshot satisfies `pred`, failing the test
/// after 30 s of (virtual) time.
async fn settled(
    rx: &mut watch::Receiver<SessionSnapshot>,
    pred: impl Fn(&SessionSnapshot) -> bool,
) -> SessionSnapshot {
    timeout(Duration::from_secs(30), async {
        loop {
            {
                let snapshot = rx.borrow_and_update();
                if pred(&snapshot) {
                    return snapshot.clone();
                }
            }
            rx.changed().await.expect("controller stopped");
        }
    })
    .await
    .expect("no snapshot matched within 30s")
}

#[tokio::test(start_paused = true)]
async fn initial_query_fetches_without_waiting_for_the_debounce() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = SearchController::spawn(
        source,
        SearchConfig {
            initial_query: Some("par".to_string()),
            ..SearchConfig::default()
        },
    );
    let mut rx = handle.subscribe();

    let snapshot = settled(&mut rx, |s| !s.sorted_results.is_empty()).await;
    let names: Vec<&str> = snapshot.sorted_results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Paris Gare de Lyon", "Parthenay"]);
    assert_eq!(*calls.lock().unwrap(), ["par"]);
}

#[tokio::test(start_paused = true)]
async fn only_the_final_value_of_a_burst_is_fetched() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("p").unwrap();
    sleep(Duration::from_millis(50)).await;
    handle.set_query("pa").unwrap();
    sleep(Duration::from_millis(50)).await;
    handle.set_query("par").unwrap();

    let snapshot = settled(&mut rx, |s| !s.sorted_results.is_empty()).await;
    assert_eq!(snapshot.query, "par");
    assert_eq!(*calls.lock().unwrap(), ["par"]);
}

#[tokio::test(start_paused = true)]
async fn query_cleared_before_the_deadline_never_fetches() {
    let source = ScriptedSource::default().answer("a", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("a").unwrap();
    sleep(Duration::from_millis(100)).await;
    handle.set_query("").unwrap();
    sleep(Duration::from_millis(500)).await;

    let snapshot = settled(&mut rx, |s| s.query.is_empty()).await;
    assert!(snapshot.sorted_results.is_empty());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn emptying_the_query_clears_results_without_a_request() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("par").unwrap();
    settled(&mut rx, |s| !s.sorted_results.is_empty()).await;

    handle.set_query("").unwrap();
    let snapshot = settled(&mut rx, |s| s.sorted_results.is_empty()).await;
    assert_eq!(snapshot.code_filter, None);
    assert_eq!(*calls.lock().unwrap(), ["par"]);
}

#[tokio::test(start_paused = true)]
async fn code_filter_rederives_immediately_without_fetching() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("par").unwrap();
    settled(&mut rx, |s| !s.sorted_results.is_empty()).await;

    handle.set_code_filter(Some("00".to_string())).unwrap();
    let snapshot = settled(&mut rx, |s| !s.displayed_results.is_empty()).await;
    assert!(snapshot
        .displayed_results
        .iter()
        .all(|p| p.name == "Paris Gare de Lyon"));
    // Filtering is local; still exactly one request.
    assert_eq!(*calls.lock().unwrap(), ["par"]);
}

#[tokio::test(start_paused = true)]
async fn failed_lookup_degrades_to_empty_results_and_drops_the_filter() {
    let source = ScriptedSource::default()
        .answer("par", 10, parisian_fixture())
        .fail("boom", 10, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("par").unwrap();
    settled(&mut rx, |s| !s.sorted_results.is_empty()).await;
    handle.set_code_filter(Some("00".to_string())).unwrap();
    settled(&mut rx, |s| !s.displayed_results.is_empty()).await;

    handle.set_query("boom").unwrap();
    let snapshot = settled(&mut rx, |s| s.sorted_results.is_empty()).await;
    assert_eq!(snapshot.code_filter, None);
    assert!(snapshot.displayed_results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn last_response_to_arrive_wins_even_when_stale() {
    let stale = vec![op("Amiens", "00", 1)];
    let fresh = vec![op("Abancourt", "00", 2)];
    let source = ScriptedSource::default()
        .answer("a", 1_000, stale.clone())
        .answer("ab", 10, fresh.clone());
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("a").unwrap();
    // Let the "a" debounce settle so its (slow) request is in flight.
    sleep(Duration::from_millis(200)).await;
    handle.set_query("ab").unwrap();

    // The fast "ab" response lands first...
    let snapshot = settled(&mut rx, |s| s.sorted_results == fresh).await;
    assert_eq!(snapshot.query, "ab");

    // ...and the stale "a" response overwrites it when it finally arrives.
    let snapshot = settled(&mut rx, |s| s.sorted_results == stale).await;
    assert_eq!(snapshot.query, "ab");
}

#[tokio::test(start_paused = true)]
async fn recommitting_the_same_query_does_not_refetch() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let calls = source.call_log();
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("par").unwrap();
    settled(&mut rx, |s| !s.sorted_results.is_empty()).await;

    // Same text submitted again: the debounced value does not change, so
    // nothing re-runs.
    handle.set_query("par").unwrap();
    sleep(Duration::from_millis(500)).await;
    assert_eq!(*calls.lock().unwrap(), ["par"]);
}

#[tokio::test(start_paused = true)]
async fn selection_survives_until_the_next_query_edit() {
    let source = ScriptedSource::default().answer("par", 10, parisian_fixture());
    let handle = spawn_default(source);
    let mut rx = handle.subscribe();

    handle.set_query("par").unwrap();
    settled(&mut rx, |s| !s.sorted_results.is_empty()).await;
    handle.set_code_filter(Some("00".to_string())).unwrap();
    settled(&mut rx, |s| !s.displayed_results.is_empty()).await;

    handle.select(0).unwrap();
    let snapshot = settled(&mut rx, |s| s.selected == 0).await;
    assert_eq!(snapshot.selected, 0);

    handle.set_query("pari").unwrap();
    let snapshot = settled(&mut rx, |s| s.selected == -1).await;
    assert_eq!(snapshot.query, "pari");
}
