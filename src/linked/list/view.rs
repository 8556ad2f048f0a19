use std::fmt::{self, Debug, Display, Formatter};

use crate::enumerate::{Countable, Enumerable};
use crate::linked::chain::Chain;
use crate::linked::handle::NodeRef;

use super::{Direction, Iter, ListEnumerator, NodeEnumerator};

/// A non-mutating view of a linked container.
///
/// The view shares the backing list, so its enumerators and iterators walk the very same nodes;
/// it simply offers none of the mutating surface. Obtained through
/// [`as_read_only`](super::DoublyLinkedList::as_read_only).
pub struct ReadOnly<'a, L: Chain>(&'a L);

impl<'a, L: Chain> ReadOnly<'a, L> {
    pub(crate) const fn new(list: &'a L) -> ReadOnly<'a, L> {
        ReadOnly(list)
    }

    /// Whether the backing list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.chain().is_empty()
    }

    /// The first value of the backing list, or [`None`] when empty.
    pub fn front(&self) -> Option<&'a L::Item> {
        self.0.chain().head().map(|node| node.value())
    }

    /// The last value of the backing list, or [`None`] when empty.
    pub fn back(&self) -> Option<&'a L::Item> {
        self.0.chain().tail().map(|node| node.value())
    }

    /// A handle onto the first node, or [`None`] when empty.
    pub fn first_node(&self) -> Option<NodeRef<'a, L>> {
        self.0.chain().head().map(|node| NodeRef::new(self.0, node))
    }

    /// A handle onto the last node, or [`None`] when empty.
    pub fn last_node(&self) -> Option<NodeRef<'a, L>> {
        self.0.chain().tail().map(|node| NodeRef::new(self.0, node))
    }

    /// A borrowing [`Iterator`] over the values, front to back.
    pub fn iter(&self) -> Iter<'a, L::Item> {
        Iter::new(self.0.chain().head())
    }

    /// An enumerator over node handles, front to back, or [`None`] when empty.
    pub fn try_node_enumerator(&self) -> Option<NodeEnumerator<'a, L>> {
        let node = self.0.chain().head()?;
        Some(NodeEnumerator::new(self.0, node, Direction::Forward))
    }

    /// The element count of the backing list, for counted containers.
    pub fn count(&self) -> usize
    where
        L: Countable,
    {
        self.0.count()
    }
}

impl<'a, L: Chain> Clone for ReadOnly<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L: Chain> Copy for ReadOnly<'a, L> {}

impl<'a, L: Chain> Enumerable for ReadOnly<'a, L> {
    type Item = L::Item;
    type Enumerator<'b>
        = ListEnumerator<'b, L::Item>
    where
        Self: 'b;

    fn try_enumerator(&self) -> Option<ListEnumerator<'_, L::Item>> {
        self.0
            .chain()
            .head()
            .map(|node| ListEnumerator::new(node, Direction::Forward))
    }

    fn has_items(&self) -> bool {
        self.0.chain().is_full()
    }
}

impl<'a, L: Chain + Debug> Debug for ReadOnly<'a, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a, L: Chain + Display> Display for ReadOnly<'a, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
