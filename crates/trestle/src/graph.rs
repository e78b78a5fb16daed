//! Directed graph representation using petgraph.
//!
//! The graph stores nodes in a `petgraph::DiGraph` with a side map from
//! public [`NodeId`] to the internal `NodeIndex`, giving O(1) id lookups.
//! Edges are directed and unit-weight.
//!
//! # Construction Invariant
//!
//! Every edge endpoint must be a registered node: [`Graph::add_edge`] and
//! [`Graph::from_adjacency`] reject unknown endpoints with
//! [`Error::UnknownNode`]. Traversals can therefore follow any stored edge
//! without re-validating its target.
//!
//! # Thread Safety
//!
//! `Graph` has no interior mutability. All traversal operations take
//! `&Graph`, so a graph may be shared across threads freely as long as it is
//! not mutated while queries run.

use crate::domain::NodeId;
use crate::error::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A directed graph of integer-labeled nodes with unit-weight edges.
///
/// Built incrementally via [`Graph::add_node`] / [`Graph::add_edge`], or in
/// bulk from adjacency lists via [`Graph::from_adjacency`]. Nodes are unique
/// by id; parallel edges and self-loops are permitted (traversals visit each
/// node at most once, so they are harmless).
#[derive(Debug, Clone)]
pub struct Graph {
    /// Underlying graph. Node weights are the public ids; edges carry none.
    pub(crate) inner: DiGraph<NodeId, ()>,

    /// Mapping from public id to graph index.
    ///
    /// Every registered node has exactly one entry here; all lookups go
    /// through this map.
    pub(crate) node_map: HashMap<NodeId, NodeIndex>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            inner: DiGraph::with_capacity(nodes, edges),
            node_map: HashMap::with_capacity(nodes),
        }
    }

    /// Build a graph from `(node, neighbors)` adjacency entries.
    ///
    /// All keys are registered first, then edges are added, so entries may
    /// reference nodes that appear later in the iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if any neighbor is not itself a key in
    /// the entries.
    pub fn from_adjacency<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let entries: Vec<(NodeId, Vec<NodeId>)> = entries.into_iter().collect();

        let mut graph = Self::with_capacity(
            entries.len(),
            entries.iter().map(|(_, neighbors)| neighbors.len()).sum(),
        );

        for (id, _) in &entries {
            graph.add_node(*id);
        }
        for (id, neighbors) in &entries {
            for neighbor in neighbors {
                graph.add_edge(*id, *neighbor)?;
            }
        }

        Ok(graph)
    }

    /// Register a node. Re-adding an existing id is a no-op.
    pub fn add_node(&mut self, id: NodeId) {
        if !self.node_map.contains_key(&id) {
            let index = self.inner.add_node(id);
            self.node_map.insert(id, index);
        }
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is not registered.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        self.inner.add_edge(from_index, to_index, ());
        Ok(())
    }

    /// Whether `id` is a registered node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all registered node ids. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_map.keys().copied()
    }

    /// The out-neighbors of `id`. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is not registered.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let index = self.index_of(id)?;
        Ok(self.inner.neighbors(index).map(|n| self.inner[n]).collect())
    }

    /// Resolve a public id to its graph index.
    pub(crate) fn index_of(&self, id: NodeId) -> Result<NodeIndex> {
        self.node_map
            .get(&id)
            .copied()
            .ok_or(Error::UnknownNode(id))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
