//! Equivalence classes by fixed-point closure.
//!
//! # Algorithm
//!
//! Start from `{v}` and repeatedly scan the whole edge set, adding the
//! destination of every edge whose source is already in the class. Stop
//! after a full pass adds nothing. The class only grows and the vertex set
//! is finite, so the loop terminates.
//!
//! # Edge Cases
//!
//! - On a graph that is not an equivalence relation the class is empty.
//!   That is a normal answer, not an error.
//! - A vertex the graph has never seen yields the singleton `{v}`: no edge
//!   starts at it, so the closure never grows.
//! - Classes may contain undeclared edge endpoints, since they are part of
//!   the relation.

use std::collections::BTreeSet;

use tracing::{debug, instrument, trace};

use crate::graph::{Graph, Vertex};

impl<V: Vertex> Graph<V> {
    /// The equivalence class of `vertex`, ascending.
    ///
    /// Re-checks [`Graph::is_equivalence`] on every call and returns an
    /// empty set when it does not hold.
    #[must_use]
    #[instrument(skip(self))]
    pub fn equivalence_class(&self, vertex: &V) -> BTreeSet<V> {
        if !self.is_equivalence() {
            debug!("not an equivalence relation; class is empty");
            return BTreeSet::new();
        }
        self.closure_from(vertex)
    }

    /// All distinct equivalence classes, ordered by their minimum element.
    ///
    /// Empty when the graph is not an equivalence relation. Together the
    /// classes cover every declared vertex exactly once.
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn equivalence_classes(&self) -> Vec<BTreeSet<V>> {
        if !self.is_equivalence() {
            return Vec::new();
        }

        let mut classes: Vec<BTreeSet<V>> = Vec::new();
        for vertex in &self.vertices {
            if classes.iter().any(|class| class.contains(vertex)) {
                continue;
            }
            let class = self.closure_from(vertex);
            if !classes.contains(&class) {
                classes.push(class);
            }
        }

        classes.sort_unstable_by(|a, b| a.first().cmp(&b.first()));
        debug!(classes = classes.len(), "computed equivalence classes");
        classes
    }

    fn closure_from(&self, vertex: &V) -> BTreeSet<V> {
        let mut class = BTreeSet::from([vertex.clone()]);
        let mut passes = 0_usize;

        loop {
            passes += 1;
            let mut grew = false;
            for edge in &self.edges {
                if class.contains(edge.source()) && !class.contains(edge.destination()) {
                    class.insert(edge.destination().clone());
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        trace!(passes, size = class.len(), "closure reached fixed point");
        class
    }
}
