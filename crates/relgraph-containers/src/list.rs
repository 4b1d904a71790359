//! Doubly-linked list stored in an arena of indexed slots.
//!
//! # Layout
//!
//! Every element lives in a `Slot` inside one contiguous `Vec`. Links
//! between elements are slot indices rather than pointers, so the list is
//! plain safe Rust with no reference counting.
//!
//! Slots released by `pop_*` are threaded onto a free list through their
//! `next` field and reused by the next push, so a list that is drained and
//! refilled (the usual traversal frontier pattern) does not grow its
//! backing storage.
//!
//! ```text
//!  head                              tail
//!   │                                  │
//!   ▼                                  ▼
//! [slot 2] ⇄ [slot 0] ⇄ [slot 3] ⇄ [slot 1]      free: slot 4 → slot 5 → ∅
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::ContainerError;

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered sequence supporting O(1) insertion and removal at both ends.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `value` after the current tail.
    pub fn push_back(&mut self, value: T) {
        let idx = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Insert `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        let idx = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.slots[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Remove and return the head element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        const OP: &str = "pop_front";
        let idx = self.head.ok_or(ContainerError::empty(OP))?;
        let next = self.slots[idx].next;
        match next {
            Some(next) => self.slots[next].prev = None,
            None => self.tail = None,
        }
        self.head = next;
        self.len -= 1;
        self.release(idx).ok_or(ContainerError::empty(OP))
    }

    /// Remove and return the tail element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        const OP: &str = "pop_back";
        let idx = self.tail.ok_or(ContainerError::empty(OP))?;
        let prev = self.slots[idx].prev;
        match prev {
            Some(prev) => self.slots[prev].next = None,
            None => self.head = None,
        }
        self.tail = prev;
        self.len -= 1;
        self.release(idx).ok_or(ContainerError::empty(OP))
    }

    /// Borrow the head element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the list is empty.
    pub fn peek_front(&self) -> Result<&T, ContainerError> {
        self.head
            .and_then(|idx| self.slots[idx].value.as_ref())
            .ok_or(ContainerError::empty("peek_front"))
    }

    /// Borrow the tail element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the list is empty.
    pub fn peek_back(&self) -> Result<&T, ContainerError> {
        self.tail
            .and_then(|idx| self.slots[idx].value.as_ref())
            .ok_or(ContainerError::empty("peek_back"))
    }

    /// Borrow the element at position `index`, counting from the head.
    ///
    /// Walks from whichever end is closer. Returns `None` when `index` is
    /// out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            self.iter().nth(index)
        } else {
            self.iter().rev().nth(self.len - 1 - index)
        }
    }

    /// Remove every element, keeping the allocated slot storage.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Iterate from head to tail.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn allocate(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let slot = Slot {
            value: Some(value),
            prev,
            next,
        };
        if let Some(idx) = self.free_head {
            self.free_head = self.slots[idx].next;
            self.slots[idx] = slot;
            idx
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> Option<T> {
        let slot = &mut self.slots[idx];
        let value = slot.value.take();
        slot.prev = None;
        slot.next = self.free_head;
        self.free_head = Some(idx);
        value
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Borrowing iterator over a [`LinkedList`], head to tail.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.front?];
        self.front = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.back?];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`], head to tail.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
