#![forbid(unsafe_code)]
//! relgraph-core library.
//!
//! Finite directed graphs over a totally ordered vertex type: relation
//! classification, equivalence classes, root resolution and four
//! deterministic traversals.
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use relgraph_core::{Edge, Graph};
//!
//! let vertices: BTreeSet<u32> = [1, 2, 3].into();
//! let edges: BTreeSet<Edge<u32>> = [Edge::new(1, 2), Edge::new(2, 3)].into();
//! let graph = Graph::new(vertices, edges);
//!
//! assert_eq!(graph.roots().into_iter().collect::<Vec<_>>(), vec![1]);
//! assert_eq!(graph.iterative_breadth_first_search(), vec![1, 2, 3]);
//! assert!(graph.is_antisymmetric());
//! ```
//!
//! # Conventions
//!
//! - **Errors**: graph queries are total and never fail. Configuration
//!   loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`, `warn!`). The
//!   library never installs a subscriber.

pub mod config;
pub mod graph;
pub mod relation;
pub mod roots;
pub mod traversal;

pub use config::{
    ClassifierConfig, GraphConfig, TransitivityStrategy, TraversalConfig, load_config,
};
pub use graph::{Edge, Graph, GraphStats, Vertex};
pub use relation::RelationKind;
pub use traversal::Traversal;
