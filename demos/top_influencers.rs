//! End-to-end run: load an edge list, report the top-1 and top-2 influencers
//! under a deadline.
//!
//! Usage: `top_influencers <edge-list.txt> [deadline]`
//!
//! The edge list is whitespace-separated `source target weight` triples, one
//! per line. `deadline` defaults to 5.

use std::time::Instant;

use sway::{influence_map, marginal_influencer, parse_edge_list, top_influencer, Graph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or("usage: top_influencers <edge-list.txt> [deadline]")?;
    let deadline: f64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 5.0,
    };

    let text = std::fs::read_to_string(&path)?;
    let graph = Graph::from_edges(parse_edge_list(&text)?);
    graph.validate_nonnegative()?;
    println!(
        "graph {path}: {} nodes with outgoing edges, {} edges, deadline {deadline}",
        graph.source_count(),
        graph.edge_count()
    );

    let started = Instant::now();
    let influence = influence_map(&graph, deadline);
    let top = top_influencer(&influence)?;
    println!(
        "top-1 influencer: {}  spread: {}  time: {:?}",
        top.node,
        top.spread,
        started.elapsed()
    );

    let started = Instant::now();
    let second = marginal_influencer(&influence, &top.influencees)?;
    println!(
        "top-2 influencer: {}  marginal spread: {}  spread: {}  time: {:?}",
        second.node,
        second.marginal_spread,
        second.spread,
        started.elapsed()
    );

    Ok(())
}
