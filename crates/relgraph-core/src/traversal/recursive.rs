//! Self-referential drain variants of BFS and DFS.
//!
//! Each drain step takes one element off the frontier, processes it exactly
//! as the iterative loop would, and calls itself on what remains. This is a
//! tail-recursive drain, not per-vertex branching recursion, so the output
//! matches [`iterative`](super::iterative) element for element.
//!
//! # Stack Depth
//!
//! Rust does not guarantee tail-call elimination. A drain therefore stops
//! after [`TraversalConfig::recursion_limit`] frames and unwinds; the
//! caller re-enters it while the frontier is non-empty. Output is
//! unaffected by the limit.
//!
//! [`TraversalConfig::recursion_limit`]: crate::config::TraversalConfig

use relgraph_containers::{Queue, Stack};
use tracing::{instrument, trace};

use crate::graph::{Graph, Vertex};
use crate::traversal::{Traversal, Walk};

impl<V: Vertex> Graph<V> {
    /// Breadth-first order produced by recursive queue draining.
    ///
    /// Identical to [`Graph::iterative_breadth_first_search`].
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn recursive_breadth_first_search(&self) -> Vec<V> {
        let limit = self.config.traversal.effective_recursion_limit();
        let mut walk = Walk::new(self);
        let mut queue = Queue::new();

        for root in walk.roots() {
            if !walk.mark(root) {
                continue;
            }
            queue.enqueue(root);
            let mut reentries = 0_usize;
            while !queue.is_empty() {
                walk.drain_queue(&mut queue, limit);
                reentries += 1;
            }
            trace!(?root, reentries, "drained queue");
        }

        walk.finish(Traversal::RecursiveBreadthFirst)
    }

    /// Depth-first order produced by recursive stack draining.
    ///
    /// Identical to [`Graph::iterative_depth_first_search`].
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn recursive_depth_first_search(&self) -> Vec<V> {
        let limit = self.config.traversal.effective_recursion_limit();
        let mut walk = Walk::new(self);
        let mut stack = Stack::new();

        for root in walk.roots() {
            if walk.is_visited(root) {
                continue;
            }
            stack.push(root);
            let mut reentries = 0_usize;
            while !stack.is_empty() {
                walk.drain_stack(&mut stack, limit);
                reentries += 1;
            }
            trace!(?root, reentries, "drained stack");
        }

        walk.finish(Traversal::RecursiveDepthFirst)
    }
}

impl<'g, V: Vertex> Walk<'g, V> {
    fn drain_queue(&mut self, queue: &mut Queue<&'g V>, budget: usize) {
        if budget == 0 {
            return;
        }
        let Ok(current) = queue.dequeue() else {
            return;
        };
        self.expand_breadth(current, queue);
        self.drain_queue(queue, budget - 1);
    }

    fn drain_stack(&mut self, stack: &mut Stack<&'g V>, budget: usize) {
        if budget == 0 {
            return;
        }
        let Ok(current) = stack.pop() else {
            return;
        };
        self.visit_depth(current, stack);
        self.drain_stack(stack, budget - 1);
    }
}
