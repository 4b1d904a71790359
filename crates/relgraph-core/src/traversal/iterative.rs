//! Loop-driven BFS and DFS.

use relgraph_containers::{Queue, Stack};
use tracing::instrument;

use crate::graph::{Graph, Vertex};
use crate::traversal::{Traversal, Walk};

impl<V: Vertex> Graph<V> {
    /// Queue-based breadth-first order over all roots.
    ///
    /// Vertices are recorded when enqueued, so none is enqueued twice.
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn iterative_breadth_first_search(&self) -> Vec<V> {
        let mut walk = Walk::new(self);
        let mut queue = Queue::new();

        for root in walk.roots() {
            if !walk.mark(root) {
                continue;
            }
            queue.enqueue(root);
            while let Ok(current) = queue.dequeue() {
                walk.expand_breadth(current, &mut queue);
            }
        }

        walk.finish(Traversal::IterativeBreadthFirst)
    }

    /// Stack-based depth-first order over all roots.
    ///
    /// Vertices are recorded when popped.
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn iterative_depth_first_search(&self) -> Vec<V> {
        let mut walk = Walk::new(self);
        let mut stack = Stack::new();

        for root in walk.roots() {
            if walk.is_visited(root) {
                continue;
            }
            stack.push(root);
            while let Ok(current) = stack.pop() {
                walk.visit_depth(current, &mut stack);
            }
        }

        walk.finish(Traversal::IterativeDepthFirst)
    }
}
