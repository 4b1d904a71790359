//! Deterministic vertex visitation orders.
//!
//! # Overview
//!
//! Four strategies share one contract: starting from the ascending root
//! sequence of [`Graph::roots`], visit every reachable vertex exactly once.
//!
//! | Strategy | Frontier | Recorded when |
//! |----------|----------|---------------|
//! | iterative BFS | [`Queue`] | enqueued |
//! | iterative DFS | [`Stack`] | popped |
//! | recursive BFS | [`Queue`] | enqueued |
//! | recursive DFS | [`Stack`] | popped |
//!
//! The recursive strategies drain the same frontier one element per call
//! frame and produce exactly the iterative output.
//!
//! # Determinism
//!
//! - Roots are processed ascending; a root reached from an earlier root is
//!   skipped entirely.
//! - Successor lists are pre-sorted ascending. BFS enqueues them in that
//!   order; DFS pushes them in descending order so the smallest pops first.
//!
//! Cycles need no special handling: the visited record is the only guard.
//!
//! [`Queue`]: relgraph_containers::Queue
//! [`Stack`]: relgraph_containers::Stack

use std::collections::HashSet;
use std::fmt;

use relgraph_containers::{Queue, Stack};
use tracing::debug;

use crate::graph::{Graph, Vertex};

pub mod iterative;
pub mod recursive;

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Selects one of the four traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    IterativeBreadthFirst,
    IterativeDepthFirst,
    RecursiveBreadthFirst,
    RecursiveDepthFirst,
}

impl Traversal {
    pub const ALL: [Self; 4] = [
        Self::IterativeBreadthFirst,
        Self::IterativeDepthFirst,
        Self::RecursiveBreadthFirst,
        Self::RecursiveDepthFirst,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IterativeBreadthFirst => "iterative_bfs",
            Self::IterativeDepthFirst => "iterative_dfs",
            Self::RecursiveBreadthFirst => "recursive_bfs",
            Self::RecursiveDepthFirst => "recursive_dfs",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<V: Vertex> Graph<V> {
    /// Run the traversal selected by `strategy`.
    #[must_use]
    pub fn traverse(&self, strategy: Traversal) -> Vec<V> {
        match strategy {
            Traversal::IterativeBreadthFirst => self.iterative_breadth_first_search(),
            Traversal::IterativeDepthFirst => self.iterative_depth_first_search(),
            Traversal::RecursiveBreadthFirst => self.recursive_breadth_first_search(),
            Traversal::RecursiveDepthFirst => self.recursive_depth_first_search(),
        }
    }
}

// ---------------------------------------------------------------------------
// Walk state
// ---------------------------------------------------------------------------

/// Per-call traversal state: the visited record and the output order.
///
/// Vertices are borrowed from the graph, so nothing is cloned until
/// [`Walk::finish`].
struct Walk<'g, V> {
    graph: &'g Graph<V>,
    visited: HashSet<&'g V>,
    order: Vec<&'g V>,
}

impl<'g, V: Vertex> Walk<'g, V> {
    fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(graph.vertex_count()),
            order: Vec::with_capacity(graph.vertex_count()),
        }
    }

    /// Resolved roots as references into the graph, ascending.
    fn roots(&self) -> Vec<&'g V> {
        let graph = self.graph;
        graph
            .roots()
            .iter()
            .filter_map(|root| graph.resolve(root))
            .collect()
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Record `vertex`. Returns `false` if it was already recorded.
    fn mark(&mut self, vertex: &'g V) -> bool {
        if self.visited.insert(vertex) {
            self.order.push(vertex);
            true
        } else {
            false
        }
    }

    /// Record and enqueue every unvisited successor of `current`.
    fn expand_breadth(&mut self, current: &V, queue: &mut Queue<&'g V>) {
        let graph = self.graph;
        for next in graph.neighbors(current) {
            if self.mark(next) {
                queue.enqueue(next);
            }
        }
    }

    /// Record `current` and push its unvisited successors, largest first.
    ///
    /// A vertex may sit on the stack more than once; only the first pop
    /// records and expands it.
    fn visit_depth(&mut self, current: &'g V, stack: &mut Stack<&'g V>) {
        if !self.mark(current) {
            return;
        }
        let graph = self.graph;
        for next in graph.neighbors(current).iter().rev() {
            if !self.is_visited(next) {
                stack.push(next);
            }
        }
    }

    fn finish(self, strategy: Traversal) -> Vec<V> {
        debug!(%strategy, visited = self.order.len(), "traversal complete");
        self.order.into_iter().cloned().collect()
    }
}
