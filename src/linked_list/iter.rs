use super::node::Node;

/// An iterator over the nodes of a linked list, head to tail.
///
/// Each iterator is an independent cursor; the borrow it holds on the list
/// keeps the chain from being modified while it is alive.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a new iterator starting at `head`.
    pub(crate) fn new(head: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = current.next();
            self.remaining = self.remaining.saturating_sub(1);
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}
