use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::enumerate::Enumerable;
use crate::linked::chain::{self, Chain, ChainState};
use crate::linked::handle::{NodeMut, NodeRef};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

use super::{Direction, Iter, IterMut, ListEnumerator, NodeEnumerator, Queued, ReadOnly, Stacked};

/// A list with links in both directions, the central structure of this crate.
///
/// Every element lives in its own heap node; [`push_front`](DoublyLinkedList::push_front) and
/// [`push_back`](DoublyLinkedList::push_back) return a [`NodeMut`] handle onto the new node, and
/// node handles support navigation, splicing and removal without touching the list's ends. For
/// a list that knows its own length in `O(1)`, see [`CountedList`](super::CountedList).
///
/// # Time Complexity
/// With `n` the number of items and `i` the index in question:
///
/// | Method | Complexity |
/// |-|-|
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `get` | `O(i)` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because every
/// `O(i)` or `O(n)` operation consists primarily of cache misses. The structure earns its keep
/// through the `O(1)` end operations and the stability of its nodes.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ChainState<T>,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: ChainState::Empty,
        }
    }

    /// Whether the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Whether the list holds at least one element.
    pub const fn has_items(&self) -> bool {
        self.state.is_full()
    }

    /// The first value, or [`None`] when empty.
    pub fn front(&self) -> Option<&T> {
        self.state.head().map(|node| node.value())
    }

    /// The first value, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.state.head().map(|mut node| node.value_mut())
    }

    /// The last value, or [`None`] when empty.
    pub fn back(&self) -> Option<&T> {
        self.state.tail().map(|node| node.value())
    }

    /// The last value, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.state.tail().map(|mut node| node.value_mut())
    }

    /// A handle onto the first node, or [`None`] when empty.
    pub fn first_node(&self) -> Option<NodeRef<'_, DoublyLinkedList<T>>> {
        self.state.head().map(|node| NodeRef::new(self, node))
    }

    /// A handle onto the last node, or [`None`] when empty.
    pub fn last_node(&self) -> Option<NodeRef<'_, DoublyLinkedList<T>>> {
        self.state.tail().map(|node| NodeRef::new(self, node))
    }

    /// An exclusive handle onto the first node, or [`None`] when empty.
    pub fn first_node_mut(&mut self) -> Option<NodeMut<'_, DoublyLinkedList<T>>> {
        let node = self.state.head()?;
        Some(NodeMut::new(self, node))
    }

    /// An exclusive handle onto the last node, or [`None`] when empty.
    pub fn last_node_mut(&mut self) -> Option<NodeMut<'_, DoublyLinkedList<T>>> {
        let node = self.state.tail()?;
        Some(NodeMut::new(self, node))
    }

    /// Adds a value at the front of the list, returning a handle onto its node.
    pub fn push_front(&mut self, value: T) -> NodeMut<'_, DoublyLinkedList<T>> {
        let node = chain::push_front(self, value);
        NodeMut::new(self, node)
    }

    /// Adds a value at the back of the list, returning a handle onto its node.
    pub fn push_back(&mut self, value: T) -> NodeMut<'_, DoublyLinkedList<T>> {
        let node = chain::push_back(self, value);
        NodeMut::new(self, node)
    }

    /// Removes and returns the first value. On an empty list this returns [`None`] and has no
    /// other effect.
    pub fn pop_front(&mut self) -> Option<T> {
        chain::pop_front(self)
    }

    /// Removes and returns the last value. On an empty list this returns [`None`] and has no
    /// other effect.
    pub fn pop_back(&mut self) -> Option<T> {
        chain::pop_back(self)
    }

    /// Adds every element of an [`Enumerable`] at the front, each in front of the previous, so
    /// enumerating `[a, b, c]` in leaves the list starting `[c, b, a]`. Returns false without
    /// inserting anything when the source yields no enumerator.
    pub fn push_front_items<S>(&mut self, items: &S) -> bool
    where
        S: Enumerable<Item = T>,
        T: Clone,
    {
        push_items(items, |value| {
            self.push_front(value);
        })
    }

    /// Adds every element of an [`Enumerable`] at the back, in enumeration order. Returns false
    /// without inserting anything when the source yields no enumerator.
    pub fn push_back_items<S>(&mut self, items: &S) -> bool
    where
        S: Enumerable<Item = T>,
        T: Clone,
    {
        push_items(items, |value| {
            self.push_back(value);
        })
    }

    /// Adds owned values at the front, each in front of the previous.
    pub fn push_front_values(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.push_front(value);
        }
    }

    /// Adds owned values at the back, in order.
    pub fn push_back_values(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Removes elements from the front until the list is empty.
    pub fn clear(&mut self) {
        while chain::pop_front(self).is_some() {}
        self.note_clear();
    }

    /// Moves every element of `other` onto the back of this list in `O(1)`.
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        let theirs = mem::take(&mut other.state);
        self.state.join_tail(theirs);
    }

    /// The value at `index`, walking from the front.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] when `index` is past the end of the list.
    pub fn get(&self, index: usize) -> &T {
        match self.try_get(index) {
            Some(value) => value,
            None => Err(IndexOutOfBounds {
                index,
                len: self.iter().count(),
            })
            .throw(),
        }
    }

    /// The value at `index`, or [`None`] when the list is shorter than that.
    pub fn try_get(&self, index: usize) -> Option<&T> {
        let mut curr = self.state.head();
        for _ in 0..index {
            curr = *curr?.next();
        }
        curr.map(|node| node.value())
    }

    /// The value at `index`, mutably.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] when `index` is past the end of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        let len = self.iter().count();
        match self.try_get_mut(index) {
            Some(value) => value,
            None => Err(IndexOutOfBounds { index, len }).throw(),
        }
    }

    /// The value at `index`, mutably, or [`None`] when the list is shorter than that.
    pub fn try_get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut curr = self.state.head();
        for _ in 0..index {
            curr = *curr?.next();
        }
        curr.map(|mut node| node.value_mut())
    }

    /// A borrowing [`Iterator`] over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// A mutably borrowing [`Iterator`] over the values, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// A value enumerator walking back to front, or [`None`] when empty. The forward
    /// counterpart is [`try_enumerator`](Enumerable::try_enumerator).
    pub fn try_enumerator_back(&self) -> Option<ListEnumerator<'_, T>> {
        self.state
            .tail()
            .map(|node| ListEnumerator::new(node, Direction::Backward))
    }

    /// An enumerator over node handles, front to back, or [`None`] when empty.
    pub fn try_node_enumerator(&self) -> Option<NodeEnumerator<'_, DoublyLinkedList<T>>> {
        let node = self.state.head()?;
        Some(NodeEnumerator::new(self, node, Direction::Forward))
    }

    /// An enumerator over node handles, back to front, or [`None`] when empty.
    pub fn try_node_enumerator_back(&self) -> Option<NodeEnumerator<'_, DoublyLinkedList<T>>> {
        let node = self.state.tail()?;
        Some(NodeEnumerator::new(self, node, Direction::Backward))
    }

    /// A destructive enumerator that removes and yields the first element on every advance,
    /// consuming the list front to back (FIFO). Elements not advanced over stay in the list.
    pub fn queued(&mut self) -> Queued<'_, DoublyLinkedList<T>> {
        Queued::new(self)
    }

    /// A destructive enumerator that removes and yields the last element on every advance,
    /// consuming the list back to front (LIFO).
    pub fn stacked(&mut self) -> Stacked<'_, DoublyLinkedList<T>> {
        Stacked::new(self)
    }

    /// A non-mutating view of the list. Enumerators obtained through the view walk the same
    /// nodes as the list's own.
    pub const fn as_read_only(&self) -> ReadOnly<'_, DoublyLinkedList<T>> {
        ReadOnly::new(self)
    }

    #[allow(dead_code)]
    pub(crate) fn verify_double_links(&self) {
        self.state.verify_double_links();
    }
}

/// Shared body of the four `push_*_items` methods across the list types.
pub(crate) fn push_items<S, F>(items: &S, mut push: F) -> bool
where
    S: Enumerable,
    S::Item: Clone,
    F: FnMut(S::Item),
{
    use crate::enumerate::Enumerator;

    match items.try_enumerator() {
        None => false,
        Some(mut items) => {
            while items.advance() {
                // UNWRAP: A successful advance leaves the enumerator on an element.
                push(items.current().unwrap().clone());
            }
            true
        },
    }
}

impl<T> chain::sealed::Sealed for DoublyLinkedList<T> {}

impl<T> Chain for DoublyLinkedList<T> {
    type Item = T;

    fn chain(&self) -> &ChainState<T> {
        &self.state
    }

    fn chain_mut(&mut self) -> &mut ChainState<T> {
        &mut self.state
    }
}

impl<T> Enumerable for DoublyLinkedList<T> {
    type Item = T;
    type Enumerator<'a>
        = ListEnumerator<'a, T>
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<ListEnumerator<'_, T>> {
        self.state
            .head()
            .map(|node| ListEnumerator::new(node, Direction::Forward))
    }

    fn has_items(&self) -> bool {
        self.state.is_full()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.state.pop_head().is_some() {}
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.push_back_values(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_values(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
