#![forbid(unsafe_code)]
//! relgraph-containers library.
//!
//! Sequential containers used as traversal frontiers by `relgraph-core`:
//!
//! - [`LinkedList`] — doubly-linked sequence over an arena of indexed slots.
//! - [`Stack`] — LIFO view (push/pop at the head).
//! - [`Queue`] — FIFO view (enqueue at the tail, dequeue at the head).
//!
//! # Conventions
//!
//! - **Errors**: removing from or peeking into an empty container returns
//!   [`ContainerError::Empty`]; nothing here panics on well-formed use.

pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

pub use error::ContainerError;
pub use list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
