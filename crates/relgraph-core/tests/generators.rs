#![allow(dead_code)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use relgraph_core::{Edge, Graph, GraphConfig};

/// Vertices `0..n` with an arbitrary edge set among them.
pub fn arb_graph_parts() -> impl Strategy<Value = (BTreeSet<u8>, BTreeSet<Edge<u8>>)> {
    (1u8..10).prop_flat_map(|n| {
        // Duplicate pairs collapse when collected into the edge set.
        let edges = prop::collection::vec((0..n, 0..n), 0..=usize::from(n) * 3);
        (Just(n), edges).prop_map(|(n, pairs)| {
            let vertices: BTreeSet<u8> = (0..n).collect();
            let edges: BTreeSet<Edge<u8>> = pairs.into_iter().map(Edge::from).collect();
            (vertices, edges)
        })
    })
}

pub fn arb_graph() -> impl Strategy<Value = Graph<u8>> {
    arb_graph_parts().prop_map(|(vertices, edges)| Graph::new(vertices, edges))
}

/// An equivalence relation: each vertex gets a group label and every pair
/// inside a group is related.
pub fn arb_equivalence_graph() -> impl Strategy<Value = Graph<u8>> {
    prop::collection::vec(0u8..4, 1..10).prop_map(|labels| {
        let vertices: BTreeSet<u8> = (0..).zip(&labels).map(|(v, _)| v).collect();
        let edges: BTreeSet<Edge<u8>> = (0..)
            .zip(&labels)
            .flat_map(|(a, la)| {
                (0..)
                    .zip(&labels)
                    .filter(move |(_, lb)| *lb == la)
                    .map(move |(b, _)| Edge::new(a, b))
            })
            .collect();
        Graph::new(vertices, edges)
    })
}

pub fn with_config(graph: &Graph<u8>, config: GraphConfig) -> Graph<u8> {
    Graph::with_config(graph.vertices().clone(), graph.edges().clone(), config)
}
