//! Summary statistics for a [`Graph`].
//!
//! # Statistics Provided
//!
//! - **`vertex_count`** / **`edge_count`**: declared vertices and edges.
//! - **`self_loop_count`**: edges whose source equals their destination.
//! - **`root_count`**: size of [`Graph::roots`].
//! - **`max_in_degree`** / **`max_out_degree`**: over declared vertices.
//! - **`weakly_connected_component_count`**: components when edge direction
//!   is ignored. Includes undeclared endpoints.
//! - **`strongly_connected_component_count`**: Tarjan SCCs, likewise.
//! - **`relation`**: the [`RelationKind`] of the edge set.

use petgraph::algo::{connected_components, tarjan_scc};

use crate::graph::{Graph, Vertex};
use crate::relation::RelationKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub self_loop_count: usize,
    pub root_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    pub weakly_connected_component_count: usize,
    pub strongly_connected_component_count: usize,
    pub relation: RelationKind,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph<V: Vertex>(graph: &Graph<V>) -> Self {
        let self_loop_count = graph.edges.iter().filter(|edge| edge.is_loop()).count();

        let max_in_degree = graph
            .vertices
            .iter()
            .map(|vertex| graph.in_degree(vertex))
            .max()
            .unwrap_or(0);

        let max_out_degree = graph
            .vertices
            .iter()
            .map(|vertex| graph.out_degree(vertex))
            .max()
            .unwrap_or(0);

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            self_loop_count,
            root_count: graph.roots().len(),
            max_in_degree,
            max_out_degree,
            weakly_connected_component_count: connected_components(&graph.digraph),
            strongly_connected_component_count: tarjan_scc(&graph.digraph).len(),
            relation: graph.relation_kind(),
        }
    }

    /// Return `true` if the graph has no edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if the graph splits into more than one weak component.
    #[must_use]
    pub const fn is_partitioned(&self) -> bool {
        self.weakly_connected_component_count > 1
    }
}
