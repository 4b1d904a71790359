/// Errors raised by the sequential containers.
///
/// Removing or inspecting an element of an empty container is a caller bug,
/// so it surfaces as a typed error instead of a placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// The container held no elements when `operation` was attempted.
    #[error("{operation} called on an empty container")]
    Empty {
        /// Name of the rejected operation (`pop_front`, `dequeue`, ...).
        operation: &'static str,
    },
}

impl ContainerError {
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::Empty { operation }
    }
}
