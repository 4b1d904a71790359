//! Relation predicates: reflexivity, symmetry, transitivity, antisymmetry.
//!
//! All predicates are pure and quantify over the edge set, so a graph with
//! no edges is symmetric, transitive and antisymmetric, and a graph with no
//! vertices is also reflexive.

use tracing::{debug, instrument};

use crate::config::TransitivityStrategy;
use crate::graph::{Graph, Vertex};

/// The properties of a graph's edge relation, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct RelationKind {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
}

impl RelationKind {
    /// Reflexive, symmetric and transitive.
    #[must_use]
    pub const fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    /// Reflexive, antisymmetric and transitive.
    #[must_use]
    pub const fn is_partial_order(&self) -> bool {
        self.reflexive && self.antisymmetric && self.transitive
    }
}

impl<V: Vertex> Graph<V> {
    /// Every declared vertex has a self-loop.
    #[must_use]
    pub fn is_reflexive(&self) -> bool {
        self.vertices
            .iter()
            .all(|vertex| self.neighbors(vertex).binary_search(vertex).is_ok())
    }

    /// Every edge `(a, b)` has a reverse edge `(b, a)`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| self.contains_edge(edge.destination(), edge.source()))
    }

    /// Every pair `(a, b), (b, c)` has a closing edge `(a, c)`.
    ///
    /// The search strategy comes from
    /// [`ClassifierConfig::transitivity`](crate::config::ClassifierConfig).
    #[must_use]
    pub fn is_transitive(&self) -> bool {
        match self.config.classifier.transitivity {
            TransitivityStrategy::EdgeScan => self.is_transitive_by_edge_scan(),
            TransitivityStrategy::SourceIndex => self.is_transitive_by_source_index(),
        }
    }

    /// No two distinct vertices point at each other.
    #[must_use]
    pub fn is_antisymmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.is_loop() || !self.contains_edge(edge.destination(), edge.source()))
    }

    /// Reflexive, symmetric and transitive. Antisymmetry is not required.
    #[must_use]
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// Evaluate all predicates at once.
    #[must_use]
    #[instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn relation_kind(&self) -> RelationKind {
        let kind = RelationKind {
            reflexive: self.is_reflexive(),
            symmetric: self.is_symmetric(),
            transitive: self.is_transitive(),
            antisymmetric: self.is_antisymmetric(),
        };
        debug!(?kind, "classified relation");
        kind
    }

    fn is_transitive_by_edge_scan(&self) -> bool {
        self.edges.iter().all(|first| {
            self.edges
                .iter()
                .filter(|second| first.destination() == second.source())
                .all(|second| {
                    self.edges.iter().any(|third| {
                        third.source() == first.source()
                            && third.destination() == second.destination()
                    })
                })
        })
    }

    fn is_transitive_by_source_index(&self) -> bool {
        self.edges.iter().all(|edge| {
            self.successors(edge.destination())
                .all(|next| self.contains_edge(edge.source(), next))
        })
    }
}
