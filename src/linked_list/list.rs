use alloc::vec::Vec;

use log::{debug, trace};

use super::{
    error::ListError,
    iter::Iter,
    node::Node,
    traits::{Chain, ChainNode, Link, NodeWithData, Slot},
};

/// A singly linked list owning its nodes.
///
/// The list owns the head node, and every node owns its successor. `size`
/// caches the number of reachable nodes.
pub struct LinkedList<T> {
    head: Chain<Node<T>>,
    size: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Get the head of the linked list
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.next()
    }

    /// Inserts `value` before the current head. O(1).
    pub fn add_front(&mut self, value: T) {
        Node::boxed(value).append_to(self);
        self.size += 1;
        trace!("add_front: list holds {} nodes", self.size);
    }

    /// Inserts `value` after the last node. O(n).
    pub fn add_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = node.link_mut();
        }
        Node::boxed(value).append_to(&mut Slot(link));
        self.size += 1;
        trace!("add_back: list holds {} nodes", self.size);
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the number of nodes in the linked list
    #[inline]
    pub fn length(&self) -> usize {
        self.size
    }

    /// Same as [`LinkedList::length`].
    #[inline]
    pub fn len(&self) -> usize {
        self.length()
    }

    /// Get an iterator over the nodes, head to tail.
    ///
    /// Every call starts a fresh cursor at the current head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.size)
    }

    /// Drops every node, leaving the list empty.
    pub fn clear(&mut self) {
        // Detach one node at a time so dropping a long chain never recurses.
        while Node::detach(self).is_some() {}
        self.size = 0;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Inserts `value` right after the first node holding `anchor`. O(n).
    ///
    /// Returns [`ListError::AnchorNotFound`] and leaves the list untouched when
    /// no node holds `anchor`.
    pub fn add_after(&mut self, anchor: &T, value: T) -> Result<(), ListError> {
        let Some(anchor_node) = self.find_mut(anchor) else {
            debug!("add_after: anchor not found among {} nodes", self.size);
            return Err(ListError::AnchorNotFound);
        };
        Node::boxed(value).append_to(anchor_node);
        self.size += 1;
        trace!("add_after: list holds {} nodes", self.size);
        Ok(())
    }

    /// Removes the first node holding `value` and returns the value. O(n).
    ///
    /// Later duplicates are left in place. Returns [`ListError::NotFound`] and
    /// leaves the list untouched when no node holds `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, ListError> {
        let mut link = &mut self.head;
        while link.as_deref().is_some_and(|node| node.value() != value) {
            if let Some(node) = link {
                link = node.link_mut();
            }
        }

        // `link` now owns the first match, or is the empty link past the tail.
        let Some(node) = Node::detach(&mut Slot(link)) else {
            debug!("remove: value not found among {} nodes", self.size);
            return Err(ListError::NotFound);
        };
        self.size -= 1;
        trace!("remove: list holds {} nodes", self.size);
        Ok((*node).into_data())
    }

    /// Returns the first node holding `value`, head to tail. O(n).
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.iter().find(|node| node.value() == value)
    }

    /// Returns `true` if some node holds `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn find_mut(&mut self, value: &T) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.value() == value {
                return Some(node);
            }
            current = node.link_mut().as_deref_mut();
        }
        None
    }
}

impl<T: Clone> LinkedList<T> {
    /// Snapshot of every stored value, head to tail.
    ///
    /// A new vector is built on each call; it does not track later mutation.
    pub fn values(&self) -> Vec<T> {
        self.iter().map(|node| node.value().clone()).collect()
    }
}

impl<T> Link for LinkedList<T> {
    type Target = Node<T>;

    #[inline]
    fn link(&self) -> &Chain<Node<T>> {
        &self.head
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Chain<Node<T>> {
        &mut self.head
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter().map(Node::value)).finish()
    }
}
