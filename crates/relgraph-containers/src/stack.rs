//! LIFO view over [`LinkedList`].

use std::fmt;

use crate::error::ContainerError;
use crate::list::LinkedList;

/// Last-in, first-out stack. The top of the stack is the list head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Place `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Remove and return the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop_front()
            .map_err(|_| ContainerError::empty("pop"))
    }

    /// Borrow the top of the stack without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the stack is empty.
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

/// Renders top-first, e.g. `[3, 2, 1]` after pushing 1, 2, 3.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}
