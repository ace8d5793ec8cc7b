//! Basic usage of the synchronous result pipeline.
//!
//! This demo walks a canned result set through the core state machine:
//! - apply raw lookup results to a session
//! - inspect the sorted view (main-coded points first)
//! - narrow the displayed view with a code filter
//! - watch the stale-filter invariant kick in on an empty result set

use opsearch_rs::prelude::*;

fn op(name: &str, ch: &str, ci: u64) -> OperationalPoint {
    OperationalPoint {
        name: name.to_string(),
        ch: ch.to_string(),
        ci,
    }
}

fn print_points(label: &str, points: &[OperationalPoint]) {
    println!("--- {label} ---");
    if points.is_empty() {
        println!("(empty)");
    }
    for point in points {
        println!("{:<24} ch={:<3} ci={}", point.name, point.ch, point.ci);
    }
    println!();
}

fn main() {
    let mut session = SearchSession::default();
    session.set_query("par");

    // What the lookup service would answer for "par".
    session.apply_results(vec![
        op("Parthenay", "X1", 87_592_204),
        op("Paris Gare de Lyon", "00", 87_686_006),
        op("Pau", "A4", 87_673_400),
        op("Paris Montparnasse", "BV", 87_391_003),
    ]);

    print_points("sorted (no filter yet)", session.sorted_results());
    print_points("displayed (no filter: nothing)", session.displayed_results());

    session.set_code_filter(Some("00".to_string()));
    print_points("displayed with filter \"00\"", session.displayed_results());

    session.set_code_filter(Some("a4".to_string()));
    print_points("displayed with filter \"a4\"", session.displayed_results());

    // An empty fetch result clears the filter along with the data.
    session.clear_results();
    println!("after empty results: filter = {:?}", session.code_filter());
}
