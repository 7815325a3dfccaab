//! Route a unit across a layered text map and print the result.
//!
//! Run: cargo run --bin route -- [MAP] [SX SY GX GY]

use std::error::Error;

use waypath_core::Point;
use waypath_demos::{DEFAULT_MAP, RouteArgs, default_endpoints, load_stack, render, summary};
use waypath_layers::Legend;
use waypath_paths::search_with_stats;

fn main() -> Result<(), Box<dyn Error>> {
    let args = RouteArgs::parse(std::env::args().skip(1))?;
    let text = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };
    let stack = load_stack(&text, &Legend::default())?;
    let bounds = stack.bounds();

    let (from, to) = match args.endpoints {
        Some((from, to)) => (
            Point::from_position(from.0, from.1),
            Point::from_position(to.0, to.1),
        ),
        None => default_endpoints(bounds),
    };
    for p in [from, to] {
        if let Some(layer) = stack.blocking_layer(p) {
            println!("note: {p} is blocked by layer \u{201c}{layer}\u{201d}");
        }
    }

    let (outcome, stats) = search_with_stats(&stack, bounds, from, to);
    print!("{}", render(&stack, bounds, from, to, &outcome));
    println!("{}", summary(&outcome, to));
    println!(
        "expanded {} of {} cells, {} walkability queries, {} requeued",
        stats.expanded,
        bounds.len(),
        stats.oracle_queries,
        stats.requeued
    );
    Ok(())
}
