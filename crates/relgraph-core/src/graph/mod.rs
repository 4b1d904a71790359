//! Graph model: vertices, edges and the derived indexes.
//!
//! # Overview
//!
//! ```text
//! BTreeSet<V> vertices + BTreeSet<Edge<V>> edges
//!        ↓  build::Graph::new() / Graph::with_config()
//! Graph
//!   ├─ adjacency: vertex → sorted successors   (traversal)
//!   └─ digraph:   petgraph DiGraph + node map   (degrees, lookups, stats)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (degrees, components, relation kind, …)
//! ```
//!
//! Classification lives in [`crate::relation`], root selection in
//! [`crate::roots`] and the four traversals in [`crate::traversal`]; all of
//! them are inherent methods on [`Graph`].

use std::fmt::Debug;
use std::hash::Hash;

pub mod build;
pub mod edge;
pub mod stats;

pub use build::Graph;
pub use edge::Edge;
pub use stats::GraphStats;

/// A graph vertex: a plain value with a total order.
///
/// Two vertices with equal values are the same vertex. Implemented for
/// every type meeting the bounds.
pub trait Vertex: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Vertex for T {}
