//! Property tests for classification, roots and traversal invariants.

use std::collections::{BTreeSet, HashSet, VecDeque};

use proptest::prelude::*;
use relgraph_core::{
    ClassifierConfig, Graph, GraphConfig, TransitivityStrategy, Traversal, TraversalConfig,
};

#[path = "generators.rs"]
mod generators;
use generators::*;

/// Everything reachable from `roots`, computed independently of the crate's
/// traversal code.
fn reachable(graph: &Graph<u8>, roots: &BTreeSet<u8>) -> BTreeSet<u8> {
    let mut seen: BTreeSet<u8> = roots.clone();
    let mut queue: VecDeque<u8> = roots.iter().copied().collect();
    while let Some(v) = queue.pop_front() {
        for &next in graph.neighbors(&v) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn equivalence_is_the_conjunction(graph in arb_graph()) {
        prop_assert_eq!(
            graph.is_equivalence(),
            graph.is_reflexive() && graph.is_symmetric() && graph.is_transitive()
        );
        prop_assert_eq!(graph.relation_kind().is_equivalence(), graph.is_equivalence());
    }

    #[test]
    fn transitivity_strategies_agree(graph in arb_graph()) {
        let scan = with_config(&graph, GraphConfig {
            classifier: ClassifierConfig { transitivity: TransitivityStrategy::EdgeScan },
            ..GraphConfig::default()
        });
        prop_assert_eq!(scan.is_transitive(), graph.is_transitive());
    }

    #[test]
    fn roots_are_ascending(graph in arb_graph()) {
        let roots: Vec<u8> = graph.roots().into_iter().collect();
        let mut sorted = roots.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(roots, sorted);
    }

    #[test]
    fn traversals_visit_each_reachable_vertex_once(graph in arb_graph()) {
        let roots = graph.roots();
        let expected = reachable(&graph, &roots);

        for strategy in Traversal::ALL {
            let order = graph.traverse(strategy);
            let unique: HashSet<u8> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len(), "{} repeated a vertex", strategy);
            prop_assert_eq!(order.iter().copied().collect::<BTreeSet<_>>(), expected.clone());

            // Roots are never reachable from one another, so they show up
            // in ascending order, the first one leading the output.
            let root_positions: Vec<u8> =
                order.iter().copied().filter(|v| roots.contains(v)).collect();
            prop_assert_eq!(root_positions, roots.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(order.first(), roots.first());
        }
    }

    #[test]
    fn recursive_matches_iterative(graph in arb_graph(), limit in 0usize..6) {
        let bounded = with_config(&graph, GraphConfig {
            traversal: TraversalConfig { recursion_limit: limit },
            ..GraphConfig::default()
        });
        prop_assert_eq!(
            bounded.recursive_breadth_first_search(),
            graph.iterative_breadth_first_search()
        );
        prop_assert_eq!(
            bounded.recursive_depth_first_search(),
            graph.iterative_depth_first_search()
        );
    }

    #[test]
    fn classes_partition_the_vertices(graph in arb_equivalence_graph()) {
        prop_assert!(graph.is_equivalence());

        let classes = graph.equivalence_classes();
        let mut covered: BTreeSet<u8> = BTreeSet::new();
        for class in &classes {
            prop_assert!(!class.is_empty());
            for v in class {
                prop_assert!(covered.insert(*v), "vertex {} in two classes", v);
            }
        }
        prop_assert_eq!(&covered, graph.vertices());

        for v in graph.vertices() {
            let class = graph.equivalence_class(v);
            prop_assert!(classes.contains(&class));
        }
    }

    #[test]
    fn class_is_the_same_from_any_member(graph in arb_equivalence_graph()) {
        for v in graph.vertices() {
            let class = graph.equivalence_class(v);
            for member in &class {
                prop_assert_eq!(&graph.equivalence_class(member), &class);
            }
        }
    }

    #[test]
    fn equivalence_roots_are_class_minimums(graph in arb_equivalence_graph()) {
        let expected: BTreeSet<u8> = graph
            .equivalence_classes()
            .iter()
            .filter_map(|class| class.first().copied())
            .collect();
        prop_assert_eq!(graph.roots(), expected);
        prop_assert_eq!(graph.iterative_breadth_first_search().len(), graph.vertex_count());
    }
}
