//! Directed edge between two vertices.

use std::fmt;

/// An ordered pair `source → destination`.
///
/// Ordering is by source, then destination, so a `BTreeSet<Edge<V>>`
/// iterates edges grouped by source in ascending order. A self-loop
/// (`source == destination`) is a regular edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    source: V,
    destination: V,
}

impl<V> Edge<V> {
    #[must_use]
    pub const fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &V {
        &self.source
    }

    #[must_use]
    pub const fn destination(&self) -> &V {
        &self.destination
    }

    /// Split the edge into `(source, destination)`.
    #[must_use]
    pub fn into_parts(self) -> (V, V) {
        (self.source, self.destination)
    }

    /// The edge pointing the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
        }
    }
}

impl<V: PartialEq> Edge<V> {
    /// Return `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Self::new(source, destination)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
