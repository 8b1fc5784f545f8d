use alloc::boxed::Box;

use singly_list_derive::ChainNode;

use super::traits::{Chain, Link};

/// A node in a singly linked list.
///
/// Each node exclusively owns the node that follows it, so a chain can
/// neither share nodes nor form a cycle.
#[derive(ChainNode)]
#[node(crate_path = "crate")]
pub struct Node<T> {
    next: Chain<Node<T>>,
    value: T,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { next: None, value }
    }

    /// Creates a detached, heap allocated node holding `value`.
    #[inline]
    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node following this one, or `None` for the last node.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        Link::next(self)
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}
