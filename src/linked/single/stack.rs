use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::enumerate::{Countable, Enumerable};
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

use super::SinglyEnumerator;
use super::node::{SinglyLink, SinglyPtr};

/// A LIFO stack over a singly linked chain: pushes and pops both happen at the head, so every
/// operation is `O(1)`.
pub struct Stack<T> {
    pub(crate) head: SinglyLink<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack { head: None }
    }

    /// Whether the stack holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether the stack holds at least one element.
    pub const fn has_items(&self) -> bool {
        self.head.is_some()
    }

    /// Places a value on top of the stack.
    pub fn push(&mut self, value: T) {
        let node = SinglyPtr::detached(value);
        *node.next_mut() = self.head;
        self.head = Some(node);
    }

    /// The top value without removing it, or [`None`] when empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| node.value())
    }

    /// The top value without removing it.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the stack is empty.
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Removes and returns the top value, or [`None`] when empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.head.map(|node| {
            let node = node.take_node();
            self.head = node.next;
            node.value
        })
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Pops until the stack is empty, so a concurrent enumeration observes the elements leaving
    /// one at a time rather than the chain vanishing underneath it.
    pub fn clear(&mut self) {
        while self.try_pop().is_some() {}
    }

    /// A borrowing [`Iterator`] over the values, top down.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            curr: self.head,
            _stack: PhantomData,
        }
    }
}

/// A borrowing iterator over a [`Stack`] or [`Queue`](super::Queue), following the chain from
/// its head.
pub struct StackIter<'a, T> {
    pub(crate) curr: SinglyLink<T>,
    pub(crate) _stack: PhantomData<&'a T>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.curr.map(|node| {
            self.curr = *node.next();
            node.value()
        })
    }
}

impl<T> Enumerable for Stack<T> {
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

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Collects by pushing each value in turn, so the *last* value of the iterator ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = StackIntoIter<T>;

    fn into_iter(self) -> StackIntoIter<T> {
        StackIntoIter(self)
    }
}

/// An owning iterator which pops a [`Stack`] until it is empty.
pub struct StackIntoIter<T>(Stack<T>);

impl<T> Iterator for StackIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.try_pop()
    }
}

impl<T> IntoIterator for CountedStack<T> {
    type Item = T;
    type IntoIter = StackIntoIter<T>;

    fn into_iter(self) -> StackIntoIter<T> {
        StackIntoIter(self.stack)
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_chain(self.iter(), f)
    }
}

/// A [`Stack`] that counts its elements: the count rises on push, falls on pop and returns to
/// zero on clear, without ever walking the chain.
pub struct CountedStack<T> {
    stack: Stack<T>,
    count: usize,
}

impl<T> CountedStack<T> {
    pub const fn new() -> CountedStack<T> {
        CountedStack {
            stack: Stack::new(),
            count: 0,
        }
    }

    /// The number of elements currently on the stack, in `O(1)`.
    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn has_items(&self) -> bool {
        self.count > 0
    }

    /// Places a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.stack.push(value);
        self.count += 1;
    }

    /// The top value without removing it, or [`None`] when empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.stack.try_peek()
    }

    /// The top value without removing it.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the stack is empty.
    pub fn peek(&self) -> &T {
        self.stack.peek()
    }

    /// Removes and returns the top value, or [`None`] when empty.
    pub fn try_pop(&mut self) -> Option<T> {
        let value = self.stack.try_pop();
        if value.is_some() {
            self.count -= 1;
        }
        value
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    /// Panics with [`EmptyCollection`] when the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => Err(EmptyCollection).throw(),
        }
    }

    /// Pops until the stack is empty. The count ends at zero.
    pub fn clear(&mut self) {
        while self.try_pop().is_some() {}
        self.count = 0;
    }

    /// A borrowing [`Iterator`] over the values, top down.
    pub fn iter(&self) -> StackIter<'_, T> {
        self.stack.iter()
    }
}

impl<T> Enumerable for CountedStack<T> {
    type Item = T;
    type Enumerator<'a>
        = SinglyEnumerator<'a, T>
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<SinglyEnumerator<'_, T>> {
        self.stack.try_enumerator()
    }

    fn has_items(&self) -> bool {
        self.count > 0
    }
}

impl<T> Countable for CountedStack<T> {
    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for CountedStack<T> {
    fn default() -> Self {
        CountedStack::new()
    }
}

impl<T: Debug> Debug for CountedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedStack")
            .field("contents", &self.stack)
            .field("count", &self.count)
            .finish()
    }
}

pub(crate) fn display_chain<'a, T: Debug + 'a>(
    items: impl Iterator<Item = &'a T>,
    f: &mut Formatter<'_>,
) -> fmt::Result {
    write!(f, "(")?;
    for (index, item) in items.enumerate() {
        if index > 0 {
            write!(f, ") -> (")?;
        }
        write!(f, "{item:?}")?;
    }
    write!(f, ")")
}
