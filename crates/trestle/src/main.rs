//! Trestle demo binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use trestle::domain::NodeId;
use trestle::graph::Graph;
use trestle::traversal::reaches_all;

/// Demonstration entry point.
///
/// Builds one fixed graph and prints whether every node is reachable from
/// node 1. Logging is controlled via the `RUST_LOG` environment variable,
/// e.g. `RUST_LOG=trestle=debug cargo run`.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trestle=info")),
        )
        .with_target(false)
        .init();

    let graph = Graph::from_adjacency([
        (NodeId(0), vec![]),
        (NodeId(1), vec![NodeId(3)]),
        (NodeId(2), vec![NodeId(4)]),
        (NodeId(3), vec![NodeId(2)]),
        (NodeId(4), vec![NodeId(0)]),
    ])?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "demo graph built"
    );

    let result = reaches_all(&graph, NodeId(1))?;
    println!("{result}");

    Ok(())
}
