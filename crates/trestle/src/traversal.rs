//! Traversal algorithms over [`Graph`].
//!
//! Two operations, both read-only:
//!
//! - [`reaches_all`]: depth-first reachability check from a single source
//! - [`shortest_path`]: breadth-first minimum edge count between two nodes
//!
//! Each call allocates its own visited set and frontier; nothing is shared
//! between calls, so concurrent queries on the same graph are safe.

use crate::domain::NodeId;
use crate::error::Result;
use crate::graph::Graph;
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};

/// Returns `true` iff every node in `graph` is reachable from `source`.
///
/// Uses an iterative depth-first traversal with an explicit stack, so call
/// depth is independent of graph size. Each node is visited at most once;
/// cycles terminate through the visited set. The answer is whether the
/// visited set ends up covering the full node set.
///
/// A graph with zero nodes is trivially fully reachable, regardless of
/// `source`. A source with no outgoing edges still counts as visited.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`](crate::error::Error::UnknownNode) if the
/// graph is non-empty and `source` is not a registered node.
pub fn reaches_all(graph: &Graph, source: NodeId) -> Result<bool> {
    if graph.node_count() == 0 {
        return Ok(true);
    }

    let start = graph.index_of(source)?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        // A node can be pushed more than once before its first visit.
        if !visited.insert(node) {
            continue;
        }
        for neighbor in graph.inner.neighbors(node) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(visited.len() == graph.node_count())
}

/// Returns the minimum number of edges on any path from `source` to `dest`,
/// or `None` if `dest` is unreachable.
///
/// Standard breadth-first search: the frontier is consumed in first-in
/// first-out order, so entries are processed in non-decreasing distance from
/// `source` and the first dequeue of `dest` is guaranteed minimal. When
/// `source == dest` the first dequeue returns `Some(0)` immediately.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`](crate::error::Error::UnknownNode) if
/// `source` or `dest` is not a registered node.
pub fn shortest_path(graph: &Graph, source: NodeId, dest: NodeId) -> Result<Option<usize>> {
    let start = graph.index_of(source)?;
    let goal = graph.index_of(dest)?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    visited.insert(start);

    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((node, distance)) = queue.pop_front() {
        if node == goal {
            return Ok(Some(distance));
        }

        for neighbor in graph.inner.neighbors(node) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    Ok(None)
}
