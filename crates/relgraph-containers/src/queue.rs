//! FIFO view over [`LinkedList`].

use std::fmt;

use crate::error::ContainerError;
use crate::list::LinkedList;

/// First-in, first-out queue. Elements enter at the tail and leave at the
/// head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Add `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop_front()
            .map_err(|_| ContainerError::empty("dequeue"))
    }

    /// Borrow the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .peek_front()
            .map_err(|_| ContainerError::empty("peek"))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
