//! The async controller end to end, against an in-process lookup stub.
//!
//! Simulates a user typing "p", "pa", "par" in quick succession: only the
//! final value survives the 150 ms debounce, so the stub sees exactly one
//! query. Swap [`StubSource`] for `HttpPointSource::new("https://...")` to
//! run against a real endpoint.

use std::time::Duration;

use opsearch_rs::prelude::*;

/// Canned lookup data with a touch of artificial latency.
struct StubSource;

impl PointSource for StubSource {
    async fn search(&self, query: &str) -> Result<Vec<OperationalPoint>, FetchError> {
        println!("[stub] lookup: {query:?}");
        tokio::time::sleep(Duration::from_millis(20)).await;
        let all = [
            ("Paris Gare de Lyon", "00", 87_686_006_u64),
            ("Paris Montparnasse", "BV", 87_391_003),
            ("Parthenay", "X1", 87_592_204),
            ("Pau", "A4", 87_673_400),
        ];
        Ok(all
            .iter()
            .filter(|(name, _, _)| name.to_lowercase().starts_with(&query.to_lowercase()))
            .map(|(name, ch, ci)| OperationalPoint {
                name: name.to_string(),
                ch: ch.to_string(),
                ci: *ci,
            })
            .collect())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let handle = SearchController::spawn(StubSource, SearchConfig::default());
    let mut snapshots = handle.subscribe();

    for text in ["p", "pa", "par"] {
        handle.set_query(text).expect("controller alive");
        tokio::time::sleep(Duration::from_millis(40)).await;
    }

    // Wait for the debounced fetch to land.
    while snapshots.borrow_and_update().sorted_results.is_empty() {
        snapshots.changed().await.expect("controller alive");
    }

    let snapshot = handle.snapshot();
    println!("\nsorted results for {:?}:", snapshot.query);
    for point in &snapshot.sorted_results {
        println!("  {:<24} ch={:<3} ci={}", point.name, point.ch, point.ci);
    }

    handle
        .set_code_filter(Some("00".to_string()))
        .expect("controller alive");
    snapshots.changed().await.expect("controller alive");

    let snapshot = handle.snapshot();
    println!("\ndisplayed with filter \"00\":");
    for point in &snapshot.displayed_results {
        println!("  {:<24} ch={:<3} ci={}", point.name, point.ch, point.ci);
    }
}
