use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::enumerate::{Countable, Enumerable};
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

use super::SinglyEnumerator;
use super::node::{SinglyLink, SinglyPtr};
use super::stack::{StackIter, display_chain};

/// A FIFO queue over a singly linked chain. A tail pointer makes the append `O(1)`; pops happen
/// at the head, as for [`Stack`](super::Stack).
pub struct Queue<T> {
    pub(crate) head: SinglyLink<T>,
    pub(crate) tail: SinglyLink<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            head: None,
            tail: None,
        }
    }

    /// Whether the queue holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether the queue holds at least one element.
    pub const fn has_items(&self) -> bool {
        self.head.is_some()
    }

    /// Appends a value at the back of the queue.
    pub fn push(&mut self, value: T) {
        let node = SinglyPtr::detached(value);
        match self.tail {
            Some(tail) => {
                *tail.next_mut() = Some(node);
                self.tail = Some(node);
            },
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            },
        }
    }

    /// The front value without removing it, or [`None`] when empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| node.value())
    }

    /// The front value without removing it.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the queue is empty.
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Removes and returns the front value, or [`None`] when empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.head.map(|node| {
            let node = node.take_node();
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            node.value
        })
    }

    /// Removes and returns the front value.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the queue is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Pops until the queue is empty.
    pub fn clear(&mut self) {
        while self.try_pop().is_some() {}
    }

    /// A borrowing [`Iterator`] over the values, front to back.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            curr: self.head,
            _stack: PhantomData,
        }
    }
}

impl<T> Enumerable for Queue<T> {
    type Item = T;
    type Enumerator<'a>
        = SinglyEnumerator<'a, T>
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<SinglyEnumerator<'_, T>> {
        self.head.map(SinglyEnumerator::new)
    }

    fn has_items(&self) -> bool {
        self.head.is_some()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = QueueIntoIter<T>;

    fn into_iter(self) -> QueueIntoIter<T> {
        QueueIntoIter(self)
    }
}

/// An owning iterator which pops a [`Queue`] until it is empty.
pub struct QueueIntoIter<T>(Queue<T>);

impl<T> Iterator for QueueIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.try_pop()
    }
}

impl<T> IntoIterator for CountedQueue<T> {
    type Item = T;
    type IntoIter = QueueIntoIter<T>;

    fn into_iter(self) -> QueueIntoIter<T> {
        QueueIntoIter(self.queue)
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_chain(self.iter(), f)
    }
}

/// A [`Queue`] that counts its elements without ever walking the chain.
pub struct CountedQueue<T> {
    queue: Queue<T>,
    count: usize,
}

impl<T> CountedQueue<T> {
    pub const fn new() -> CountedQueue<T> {
        CountedQueue {
            queue: Queue::new(),
            count: 0,
        }
    }

    /// The number of elements currently queued, in `O(1)`.
    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn has_items(&self) -> bool {
        self.count > 0
    }

    /// Appends a value at the back of the queue.
    pub fn push(&mut self, value: T) {
        self.queue.push(value);
        self.count += 1;
    }

    /// The front value without removing it, or [`None`] when empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.queue.try_peek()
    }

    /// The front value without removing it.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the queue is empty.
    pub fn peek(&self) -> &T {
        self.queue.peek()
    }

    /// Removes and returns the front value, or [`None`] when empty.
    pub fn try_pop(&mut self) -> Option<T> {
        let value = self.queue.try_pop();
        if value.is_some() {
            self.count -= 1;
        }
        value
    }

    /// Removes and returns the front value.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the queue is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Pops until the queue is empty. The count ends at zero.
    pub fn clear(&mut self) {
        while self.try_pop().is_some() {}
        self.count = 0;
    }

    /// A borrowing [`Iterator`] over the values, front to back.
    pub fn iter(&self) -> StackIter<'_, T> {
        self.queue.iter()
    }
}

impl<T> Enumerable for CountedQueue<T> {
    type Item = T;
    type Enumerator<'a>
        = SinglyEnumerator<'a, T>
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<SinglyEnumerator<'_, T>> {
        self.queue.try_enumerator()
    }

    fn has_items(&self) -> bool {
        self.count > 0
    }
}

impl<T> Countable for CountedQueue<T> {
    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for CountedQueue<T> {
    fn default() -> Self {
        CountedQueue::new()
    }
}

impl<T: Debug> Debug for CountedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedQueue")
            .field("contents", &self.queue)
            .field("count", &self.count)
            .finish()
    }
}
