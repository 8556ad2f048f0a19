use std::fmt::{self, Debug, Display, Formatter};

use crate::enumerate::{Countable, Enumerable};
use crate::linked::chain::{self, Chain, ChainState, NodePtr};
use crate::linked::handle::{NodeMut, NodeRef};
use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

use super::doubly_linked_list::push_items;
use super::{
    Direction, DoublyLinkedList, Iter, IterMut, ListEnumerator, NodeEnumerator, Queued, ReadOnly,
    Stacked,
};

/// A [`DoublyLinkedList`] that knows how many elements it holds.
///
/// The count is threaded through the list's mutation seam rather than recomputed: every push,
/// pop, splice and removal (including the ones made through [`NodeMut`] handles and the
/// destructive [`queued`](CountedList::queued) / [`stacked`](CountedList::stacked) enumerators)
/// adjusts it as it happens, so [`count`](CountedList::count) is `O(1)` and always equal to the
/// length of the chain. The extra knowledge also buys a smarter
/// [`get`](CountedList::get), which seeks from whichever end is nearer.
pub struct CountedList<T> {
    list: DoublyLinkedList<T>,
    count: usize,
}

impl<T> CountedList<T> {
    pub const fn new() -> CountedList<T> {
        CountedList {
            list: DoublyLinkedList::new(),
            count: 0,
        }
    }

    /// The number of elements currently in the list, in `O(1)`.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the list holds at least one element.
    pub const fn has_items(&self) -> bool {
        self.count > 0
    }

    /// The first value, or [`None`] when empty.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// The first value, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// The last value, or [`None`] when empty.
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// The last value, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// A handle onto the first node, or [`None`] when empty.
    pub fn first_node(&self) -> Option<NodeRef<'_, CountedList<T>>> {
        self.list.state.head().map(|node| NodeRef::new(self, node))
    }

    /// A handle onto the last node, or [`None`] when empty.
    pub fn last_node(&self) -> Option<NodeRef<'_, CountedList<T>>> {
        self.list.state.tail().map(|node| NodeRef::new(self, node))
    }

    /// An exclusive handle onto the first node, or [`None`] when empty. Splices and removals
    /// made through the handle keep the count in step.
    pub fn first_node_mut(&mut self) -> Option<NodeMut<'_, CountedList<T>>> {
        let node = self.list.state.head()?;
        Some(NodeMut::new(self, node))
    }

    /// An exclusive handle onto the last node, or [`None`] when empty.
    pub fn last_node_mut(&mut self) -> Option<NodeMut<'_, CountedList<T>>> {
        let node = self.list.state.tail()?;
        Some(NodeMut::new(self, node))
    }

    /// Adds a value at the front of the list, returning a handle onto its node.
    pub fn push_front(&mut self, value: T) -> NodeMut<'_, CountedList<T>> {
        let node = chain::push_front(self, value);
        NodeMut::new(self, node)
    }

    /// Adds a value at the back of the list, returning a handle onto its node.
    pub fn push_back(&mut self, value: T) -> NodeMut<'_, CountedList<T>> {
        let node = chain::push_back(self, value);
        NodeMut::new(self, node)
    }

    /// Removes and returns the first value, or [`None`] when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        chain::pop_front(self)
    }

    /// Removes and returns the last value, or [`None`] when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        chain::pop_back(self)
    }

    /// Adds every element of an [`Enumerable`] at the front, each in front of the previous.
    /// Returns false without inserting anything when the source yields no enumerator.
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

    /// Removes elements from the front until the list is empty. The count ends at zero.
    pub fn clear(&mut self) {
        while chain::pop_front(self).is_some() {}
        self.note_clear();
    }

    /// Moves every element of `other` onto the back of this list in `O(1)`.
    pub fn append(&mut self, mut other: CountedList<T>) {
        let count = other.count;
        other.count = 0;
        let inner = std::mem::take(&mut other.list.state);
        self.list.state.join_tail(inner);
        self.count += count;
    }

    /// The value at `index`, seeking from whichever end is nearer.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] when `index >= count()`.
    pub fn get(&self, index: usize) -> &T {
        match self.try_get(index) {
            Some(value) => value,
            None => Err(IndexOutOfBounds {
                index,
                len: self.count,
            })
            .throw(),
        }
    }

    /// The value at `index`, or [`None`] when `index >= count()`.
    pub fn try_get(&self, index: usize) -> Option<&T> {
        Some(self.seek(index)?.value())
    }

    /// The value at `index`, mutably.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] when `index >= count()`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        match self.count {
            len if index >= len => Err(IndexOutOfBounds { index, len }).throw(),
            // UNWRAP: The index was just checked against the count.
            _ => self.try_get_mut(index).unwrap(),
        }
    }

    /// The value at `index`, mutably, or [`None`] when `index >= count()`.
    pub fn try_get_mut(&mut self, index: usize) -> Option<&mut T> {
        Some(self.seek(index)?.value_mut())
    }

    fn seek(&self, index: usize) -> Option<NodePtr<T>> {
        if index >= self.count {
            return None;
        }
        if index < self.count / 2 {
            let mut curr = self.list.state.head()?;
            for _ in 0..index {
                // UNREACHABLE: The count guarantees this many next links.
                curr = unsafe { (*curr.next()).unreachable() };
            }
            Some(curr)
        } else {
            let mut curr = self.list.state.tail()?;
            for _ in index + 1..self.count {
                // UNREACHABLE: The count guarantees this many prev links.
                curr = unsafe { (*curr.prev()).unreachable() };
            }
            Some(curr)
        }
    }

    /// A borrowing [`Iterator`] over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// A mutably borrowing [`Iterator`] over the values, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// A value enumerator walking back to front, or [`None`] when empty.
    pub fn try_enumerator_back(&self) -> Option<ListEnumerator<'_, T>> {
        self.list.try_enumerator_back()
    }

    /// An enumerator over node handles, front to back, or [`None`] when empty.
    pub fn try_node_enumerator(&self) -> Option<NodeEnumerator<'_, CountedList<T>>> {
        let node = self.list.state.head()?;
        Some(NodeEnumerator::new(self, node, Direction::Forward))
    }

    /// An enumerator over node handles, back to front, or [`None`] when empty.
    pub fn try_node_enumerator_back(&self) -> Option<NodeEnumerator<'_, CountedList<T>>> {
        let node = self.list.state.tail()?;
        Some(NodeEnumerator::new(self, node, Direction::Backward))
    }

    /// A destructive FIFO enumerator; see [`DoublyLinkedList::queued`]. Every element it
    /// removes is counted out of the list.
    pub fn queued(&mut self) -> Queued<'_, CountedList<T>> {
        Queued::new(self)
    }

    /// A destructive LIFO enumerator; see [`DoublyLinkedList::stacked`].
    pub fn stacked(&mut self) -> Stacked<'_, CountedList<T>> {
        Stacked::new(self)
    }

    /// A non-mutating view of the list.
    pub const fn as_read_only(&self) -> ReadOnly<'_, CountedList<T>> {
        ReadOnly::new(self)
    }

    pub(crate) const fn as_list(&self) -> &DoublyLinkedList<T> {
        &self.list
    }

    pub(crate) const fn as_list_mut(&mut self) -> &mut DoublyLinkedList<T> {
        &mut self.list
    }

    /// Discards the count, returning the plain list.
    pub fn into_inner(self) -> DoublyLinkedList<T> {
        self.list
    }

    #[allow(dead_code)]
    pub(crate) fn verify_count(&self) {
        assert_eq!(
            self.count,
            self.iter().count(),
            "The count should equal the length of the chain"
        );
        self.list.verify_double_links();
    }
}

impl<T> chain::sealed::Sealed for CountedList<T> {}

impl<T> Chain for CountedList<T> {
    type Item = T;

    fn chain(&self) -> &ChainState<T> {
        &self.list.state
    }

    fn chain_mut(&mut self) -> &mut ChainState<T> {
        &mut self.list.state
    }

    fn note_insert(&mut self) {
        self.count += 1;
    }

    fn note_remove(&mut self) {
        self.count -= 1;
    }

    fn note_clear(&mut self) {
        self.count = 0;
    }
}

impl<T> Enumerable for CountedList<T> {
    type Item = T;
    type Enumerator<'a>
        = ListEnumerator<'a, T>
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<ListEnumerator<'_, T>> {
        self.list.try_enumerator()
    }

    fn has_items(&self) -> bool {
        self.count > 0
    }
}

impl<T> Countable for CountedList<T> {
    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for CountedList<T> {
    fn default() -> Self {
        CountedList::new()
    }
}

impl<T> FromIterator<T> for CountedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CountedList::new();
        list.push_back_values(iter);
        list
    }
}

impl<T> Extend<T> for CountedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_values(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for CountedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for CountedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CountedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CountedList<T> {}

impl<T: Debug> Debug for CountedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedList")
            .field("contents", &self.list)
            .field("count", &self.count)
            .finish()
    }
}

impl<T: Debug> Display for CountedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
