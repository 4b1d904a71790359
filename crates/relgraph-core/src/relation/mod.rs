//! Relation classification over the edge set.
//!
//! # Overview
//!
//! The edge set of a [`Graph`](crate::graph::Graph) is read as a binary
//! relation on its vertices. This module answers which of the classic
//! properties that relation has and, for equivalence relations, what its
//! classes are:
//!
//! - **Predicates** (`classify`): reflexive, symmetric, transitive,
//!   antisymmetric, equivalence, plus a one-shot [`RelationKind`] summary.
//! - **Equivalence classes** (`equivalence`): the class of a single vertex
//!   by fixed-point closure, and the full partition.
//!
//! Every query recomputes from the edge set; nothing is cached between
//! calls.

pub mod classify;
pub mod equivalence;

pub use classify::RelationKind;
