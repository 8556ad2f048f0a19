//! Standard-iterator views of the linked lists, the bridge back out to the Rust ecosystem.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{CountedList, DoublyLinkedList};
use crate::linked::chain::Link;

/// A borrowing iterator over a linked list, front to back.
pub struct Iter<'a, T> {
    curr: Link<T>,
    _list: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(curr: Link<T>) -> Iter<'a, T> {
        Iter {
            curr,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.curr.map(|node| {
            self.curr = *node.next();
            node.value()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutably borrowing iterator over a linked list, front to back.
pub struct IterMut<'a, T> {
    curr: Link<T>,
    _list: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) const fn new(curr: Link<T>) -> IterMut<'a, T> {
        IterMut {
            curr,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.curr.map(|mut node| {
            self.curr = *node.next();
            node.value_mut()
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator which consumes a list front to back.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self.state.head())
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut::new(self.state.head())
    }
}

impl<T> IntoIterator for CountedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.into_inner().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CountedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.as_list().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CountedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.as_list_mut().into_iter()
    }
}
