//! Traversal starting points.
//!
//! # Root Selection
//!
//! 1. **Structural roots**: declared vertices with in-degree zero.
//! 2. **Class representatives**: when the relation is an equivalence, the
//!    minimum declared element of every equivalence class. In an equivalence
//!    every vertex has a self-loop, so step 1 finds nothing; representatives
//!    guarantee one root per class. A class made only of undeclared edge
//!    endpoints contributes no root.
//!
//! The union of both is returned as a `BTreeSet`, so iteration is always
//! ascending. Traversal output depends on that order.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::graph::{Graph, Vertex};

impl<V: Vertex> Graph<V> {
    /// Declared vertices that no edge points at.
    #[must_use]
    pub fn structural_roots(&self) -> BTreeSet<V> {
        self.vertices
            .iter()
            .filter(|vertex| self.in_degree(vertex) == 0)
            .cloned()
            .collect()
    }

    /// Structural roots plus one representative per equivalence class.
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn roots(&self) -> BTreeSet<V> {
        let mut roots = self.structural_roots();
        let structural = roots.len();

        roots.extend(
            self.equivalence_classes()
                .into_iter()
                .filter_map(|class| {
                    class
                        .into_iter()
                        .find(|member| self.vertices.contains(member))
                }),
        );

        debug!(structural, total = roots.len(), "resolved roots");
        roots
    }
}
