//! Graph construction and read-only accessors.
//!
//! # Overview
//!
//! A [`Graph`] is built once from a vertex set and an edge set and never
//! changes afterwards. Construction derives two indexes:
//!
//! - a [`petgraph`] `DiGraph` with a vertex → `NodeIndex` map, used for
//!   degree queries, edge lookups and component statistics;
//! - the adjacency mapping `vertex → successors`, with every successor list
//!   sorted ascending. Traversals read this mapping directly, which is what
//!   makes sibling tie-breaking deterministic.
//!
//! ## Undeclared Endpoints
//!
//! An edge may name a vertex that is not in the declared vertex set. Such a
//! vertex still takes part in classification (it is part of the relation)
//! and can be reached by a traversal, but it gets no adjacency entry: it is
//! never a root and its own out-edges are never followed. Construction logs
//! how many of these endpoints it saw.

use std::collections::{BTreeSet, HashMap};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{instrument, warn};

use crate::config::GraphConfig;
use crate::graph::{Edge, Vertex};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable directed graph over a totally ordered vertex type.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    pub(crate) vertices: BTreeSet<V>,
    pub(crate) edges: BTreeSet<Edge<V>>,
    /// Sorted successor lists, one per declared vertex.
    pub(crate) adjacency: HashMap<V, Vec<V>>,
    /// Every vertex and edge endpoint, declared or not.
    pub(crate) digraph: DiGraph<V, ()>,
    pub(crate) node_map: HashMap<V, NodeIndex>,
    pub(crate) config: GraphConfig,
}

impl<V: Vertex> Graph<V> {
    /// Build a graph with the default [`GraphConfig`].
    #[must_use]
    pub fn new(vertices: BTreeSet<V>, edges: BTreeSet<Edge<V>>) -> Self {
        Self::with_config(vertices, edges, GraphConfig::default())
    }

    /// Build a graph with an explicit configuration.
    #[must_use]
    #[instrument(skip_all, fields(vertices = vertices.len(), edges = edges.len()))]
    pub fn with_config(
        vertices: BTreeSet<V>,
        edges: BTreeSet<Edge<V>>,
        config: GraphConfig,
    ) -> Self {
        let mut digraph = DiGraph::<V, ()>::with_capacity(vertices.len(), edges.len());
        let mut node_map: HashMap<V, NodeIndex> = HashMap::with_capacity(vertices.len());

        for vertex in &vertices {
            let idx = digraph.add_node(vertex.clone());
            node_map.insert(vertex.clone(), idx);
        }

        let mut undeclared = 0_usize;
        for edge in &edges {
            let (source_idx, source_new) = intern(&mut digraph, &mut node_map, edge.source());
            let (dest_idx, dest_new) = intern(&mut digraph, &mut node_map, edge.destination());
            undeclared += usize::from(source_new) + usize::from(dest_new);
            // The edge set is already unique, so no duplicate check here.
            digraph.add_edge(source_idx, dest_idx, ());
        }

        if undeclared > 0 {
            warn!(
                undeclared,
                "edges reference vertices outside the declared vertex set"
            );
        }

        let adjacency = build_adjacency(&vertices, &digraph, &node_map);

        Self {
            vertices,
            edges,
            adjacency,
            digraph,
            node_map,
            config,
        }
    }

    /// The declared vertex set, ascending.
    #[must_use]
    pub const fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// The edge set, ascending by `(source, destination)`.
    #[must_use]
    pub const fn edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }

    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of declared vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Return `true` if the edge `source → destination` exists.
    ///
    /// Works for undeclared endpoints too.
    #[must_use]
    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        match (self.node_map.get(source), self.node_map.get(destination)) {
            (Some(&a), Some(&b)) => self.digraph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Sorted successors of a declared vertex.
    ///
    /// Returns an empty slice for undeclared or unknown vertices.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of edges ending at `vertex` (self-loops included).
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.degree(vertex, Direction::Incoming)
    }

    /// Number of edges starting at `vertex` (self-loops included).
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.degree(vertex, Direction::Outgoing)
    }

    /// Successors of any vertex known to the relation, declared or not.
    ///
    /// Unlike [`Graph::neighbors`] this follows edges out of undeclared
    /// endpoints, which the relation predicates need. Order is unspecified.
    pub(crate) fn successors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        self.node_map
            .get(vertex)
            .into_iter()
            .flat_map(move |&idx| self.digraph.neighbors_directed(idx, Direction::Outgoing))
            .map(move |idx| &self.digraph[idx])
    }

    /// Map a vertex value to the copy stored inside this graph.
    pub(crate) fn resolve(&self, vertex: &V) -> Option<&V> {
        self.node_map
            .get(vertex)
            .and_then(|&idx| self.digraph.node_weight(idx))
    }

    fn degree(&self, vertex: &V, direction: Direction) -> usize {
        self.node_map.get(vertex).map_or(0, |&idx| {
            self.digraph.edges_directed(idx, direction).count()
        })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Look up `vertex`, adding it as a node if needed. The flag reports whether
/// it was added.
fn intern<V: Vertex>(
    digraph: &mut DiGraph<V, ()>,
    node_map: &mut HashMap<V, NodeIndex>,
    vertex: &V,
) -> (NodeIndex, bool) {
    if let Some(&idx) = node_map.get(vertex) {
        return (idx, false);
    }
    let idx = digraph.add_node(vertex.clone());
    node_map.insert(vertex.clone(), idx);
    (idx, true)
}

fn build_adjacency<V: Vertex>(
    vertices: &BTreeSet<V>,
    digraph: &DiGraph<V, ()>,
    node_map: &HashMap<V, NodeIndex>,
) -> HashMap<V, Vec<V>> {
    let mut adjacency = HashMap::with_capacity(vertices.len());
    for vertex in vertices {
        let mut next: Vec<V> = node_map
            .get(vertex)
            .into_iter()
            .flat_map(|&idx| digraph.neighbors_directed(idx, Direction::Outgoing))
            .map(|idx| digraph[idx].clone())
            .collect();
        next.sort_unstable();
        adjacency.insert(vertex.clone(), next);
    }
    adjacency
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
