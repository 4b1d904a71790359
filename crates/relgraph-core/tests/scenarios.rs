//! Known-topology regression tests.
//!
//! Each test builds a hand-crafted graph whose roots, classes and
//! visitation orders are worked out by hand and hardcoded.

use std::collections::BTreeSet;

use relgraph_core::{Edge, Graph, GraphStats, Traversal};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_graph(vertices: &[i32], edges: &[(i32, i32)]) -> Graph<i32> {
    Graph::new(
        vertices.iter().copied().collect(),
        edges.iter().copied().map(Edge::from).collect(),
    )
}

fn roots(graph: &Graph<i32>) -> Vec<i32> {
    graph.roots().into_iter().collect()
}

fn all_orders(graph: &Graph<i32>) -> Vec<(Traversal, Vec<i32>)> {
    Traversal::ALL
        .into_iter()
        .map(|strategy| (strategy, graph.traverse(strategy)))
        .collect()
}

// ===========================================================================
// Topology 1: Linear Chain
//
//   1 → 2 → 3
// ===========================================================================

#[test]
fn chain_roots_and_orders() {
    let g = build_graph(&[1, 2, 3], &[(1, 2), (2, 3)]);

    assert_eq!(roots(&g), vec![1]);
    for (strategy, order) in all_orders(&g) {
        assert_eq!(order, vec![1, 2, 3], "{strategy}");
    }
}

#[test]
fn chain_relation_properties() {
    let g = build_graph(&[1, 2, 3], &[(1, 2), (2, 3)]);

    assert!(!g.is_reflexive());
    assert!(!g.is_symmetric());
    assert!(!g.is_transitive());
    assert!(g.is_antisymmetric());
    assert!(!g.is_equivalence());
    assert!(g.equivalence_class(&2).is_empty());
}

// ===========================================================================
// Topology 2: Full equivalence over {1, 2, 3}
// ===========================================================================

fn full_equivalence() -> Graph<i32> {
    build_graph(
        &[1, 2, 3],
        &[
            (1, 1),
            (2, 2),
            (3, 3),
            (1, 2),
            (2, 1),
            (2, 3),
            (3, 2),
            (1, 3),
            (3, 1),
        ],
    )
}

#[test]
fn full_equivalence_classification() {
    let g = full_equivalence();

    assert!(g.is_equivalence());
    assert_eq!(g.equivalence_class(&2), BTreeSet::from([1, 2, 3]));
    assert_eq!(roots(&g), vec![1]);
}

#[test]
fn full_equivalence_orders() {
    let g = full_equivalence();
    for (strategy, order) in all_orders(&g) {
        assert_eq!(order, vec![1, 2, 3], "{strategy}");
    }
}

// ===========================================================================
// Topology 3: Disconnected
//
//   1 → 2     3 → 4
// ===========================================================================

#[test]
fn disconnected_roots_and_bfs() {
    let g = build_graph(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);

    assert_eq!(roots(&g), vec![1, 3]);
    assert_eq!(g.iterative_breadth_first_search(), vec![1, 2, 3, 4]);
    assert_eq!(g.recursive_breadth_first_search(), vec![1, 2, 3, 4]);
}

// ===========================================================================
// Topology 4: Diamond with tail
//
//        1
//       / \
//      2   3
//       \ /
//        4
//        |
//        5
// ===========================================================================

#[test]
fn diamond_bfs_and_dfs_differ() {
    let g = build_graph(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);

    assert_eq!(g.iterative_breadth_first_search(), vec![1, 2, 3, 4, 5]);
    assert_eq!(g.iterative_depth_first_search(), vec![1, 2, 4, 5, 3]);
    assert_eq!(g.recursive_depth_first_search(), vec![1, 2, 4, 5, 3]);
}

// ===========================================================================
// Topology 5: Two equivalence classes
//
//   {10, 30} and {20}, all reflexive
// ===========================================================================

#[test]
fn two_class_equivalence() {
    let g = build_graph(
        &[10, 20, 30],
        &[(10, 10), (20, 20), (30, 30), (10, 30), (30, 10)],
    );

    assert!(g.is_equivalence());
    assert_eq!(
        g.equivalence_classes(),
        vec![BTreeSet::from([10, 30]), BTreeSet::from([20])]
    );
    assert_eq!(roots(&g), vec![10, 20]);
    for (strategy, order) in all_orders(&g) {
        assert_eq!(order, vec![10, 30, 20], "{strategy}");
    }
}

// ===========================================================================
// Topology 6: Out-of-order vertex values
// ===========================================================================

#[test]
fn siblings_visited_in_ascending_order() {
    let g = build_graph(&[0, 12, 3, 7], &[(0, 12), (0, 7), (0, 3), (3, 12)]);

    assert_eq!(g.neighbors(&0), &[3, 7, 12]);
    assert_eq!(g.iterative_breadth_first_search(), vec![0, 3, 7, 12]);
    assert_eq!(g.iterative_depth_first_search(), vec![0, 3, 12, 7]);
}

#[test]
fn negative_vertices_order_numerically() {
    let g = build_graph(&[-5, -1, 2], &[(-5, 2), (-5, -1)]);
    assert_eq!(g.iterative_breadth_first_search(), vec![-5, -1, 2]);
}

// ===========================================================================
// Edge cases
// ===========================================================================

#[test]
fn empty_graph() {
    let g = build_graph(&[], &[]);

    assert!(g.roots().is_empty());
    assert!(g.is_reflexive());
    assert!(g.is_equivalence());
    for (strategy, order) in all_orders(&g) {
        assert!(order.is_empty(), "{strategy}");
    }
}

#[test]
fn isolated_vertices_are_each_visited() {
    let g = build_graph(&[2, 1, 3], &[]);
    for (strategy, order) in all_orders(&g) {
        assert_eq!(order, vec![1, 2, 3], "{strategy}");
    }
}

#[test]
fn unknown_vertex_class_is_singleton() {
    let g = full_equivalence();
    assert_eq!(g.equivalence_class(&99), BTreeSet::from([99]));
}

#[test]
fn stats_summarize_relation() {
    let stats = GraphStats::from_graph(&full_equivalence());

    assert_eq!(stats.vertex_count, 3);
    assert_eq!(stats.edge_count, 9);
    assert_eq!(stats.self_loop_count, 3);
    assert_eq!(stats.root_count, 1);
    assert_eq!(stats.strongly_connected_component_count, 1);
    assert!(stats.relation.is_equivalence());
}
