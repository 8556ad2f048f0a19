//! The raw chain layer shared by the doubly linked containers.
//!
//! [`ChainState`] owns the heads of a node chain and carries the splice and unlink primitives;
//! [`Chain`] is the seam through which the public list types expose their chain and hear about
//! mutations, so a counted list can keep its count without ever traversing.

use std::ptr::NonNull;

use derive_more::IsVariant;

use crate::util::option::OptionExtension;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because dereferencing a Box allows
// the value to be moved back out of the heap when a node is unlinked.

/// A copyable pointer to a heap-allocated node.
#[doc(hidden)]
#[derive(Debug)]
pub struct NodePtr<T>(NonNull<Node<T>>);

#[doc(hidden)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

impl<T> NodePtr<T> {
    pub(crate) fn detached(value: T) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: None,
        }))))
    }

    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive for as long as it remains linked into a chain; callers tie
        // the returned lifetime to a borrow of the owning list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value; mutation requires the caller to hold the list exclusively.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub(crate) fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Frees the node, moving its contents out. The pointer (and every copy of it) is dangling
    /// afterwards.
    pub(crate) fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in detached and is only taken once, when the
        // node leaves its chain.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// The ends of a node chain: either no nodes at all, or both a head and a tail.
///
/// Encoding the ends as a single enum makes the "either both are set or neither is" invariant
/// structural rather than checked.
#[doc(hidden)]
#[derive(IsVariant)]
pub enum ChainState<T> {
    Empty,
    Full(ChainEnds<T>),
}

// Manual impl: the derive would demand T: Default.
impl<T> Default for ChainState<T> {
    fn default() -> Self {
        Empty
    }
}

#[doc(hidden)]
pub struct ChainEnds<T> {
    pub(crate) head: NodePtr<T>,
    pub(crate) tail: NodePtr<T>,
}

use ChainState::*;

impl<T> ChainState<T> {
    pub(crate) const fn head(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ChainEnds { head, .. }) => Some(*head),
        }
    }

    pub(crate) const fn tail(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ChainEnds { tail, .. }) => Some(*tail),
        }
    }

    pub(crate) fn push_head(&mut self, value: T) -> NodePtr<T> {
        let node = NodePtr::detached(value);
        match self {
            Empty => *self = Full(ChainEnds { head: node, tail: node }),
            Full(ChainEnds { head, .. }) => {
                *head.prev_mut() = Some(node);
                *node.next_mut() = Some(*head);
                *head = node;
            },
        }
        node
    }

    pub(crate) fn push_tail(&mut self, value: T) -> NodePtr<T> {
        let node = NodePtr::detached(value);
        match self {
            Empty => *self = Full(ChainEnds { head: node, tail: node }),
            Full(ChainEnds { tail, .. }) => {
                *tail.next_mut() = Some(node);
                *node.prev_mut() = Some(*tail);
                *tail = node;
            },
        }
        node
    }

    pub(crate) fn pop_head(&mut self) -> Option<T> {
        match self {
            Empty => None,
            Full(ChainEnds { head, tail }) => {
                let node = if head == tail {
                    let node = head.take_node();
                    *self = Empty;
                    node
                } else {
                    let node = head.take_node();
                    // UNREACHABLE: The head is not the tail, so it has a successor.
                    let new_head = unsafe { node.next.unreachable() };
                    *new_head.prev_mut() = None;
                    *head = new_head;
                    node
                };
                Some(node.value)
            },
        }
    }

    pub(crate) fn pop_tail(&mut self) -> Option<T> {
        match self {
            Empty => None,
            Full(ChainEnds { head, tail }) => {
                let node = if head == tail {
                    let node = tail.take_node();
                    *self = Empty;
                    node
                } else {
                    let node = tail.take_node();
                    // UNREACHABLE: The tail is not the head, so it has a predecessor.
                    let new_tail = unsafe { node.prev.unreachable() };
                    *new_tail.next_mut() = None;
                    *tail = new_tail;
                    node
                };
                Some(node.value)
            },
        }
    }

    /// Splices a fresh node in directly before `at`, which must belong to this chain.
    pub(crate) fn splice_before(&mut self, at: NodePtr<T>, value: T) -> NodePtr<T> {
        match at.prev() {
            None => self.push_head(value),
            Some(before) => {
                let node = NodePtr::detached(value);
                *node.prev_mut() = Some(*before);
                *node.next_mut() = Some(at);
                *before.next_mut() = Some(node);
                *at.prev_mut() = Some(node);
                node
            },
        }
    }

    /// Splices a fresh node in directly after `at`, which must belong to this chain.
    pub(crate) fn splice_after(&mut self, at: NodePtr<T>, value: T) -> NodePtr<T> {
        match at.next() {
            None => self.push_tail(value),
            Some(after) => {
                let node = NodePtr::detached(value);
                *node.next_mut() = Some(*after);
                *node.prev_mut() = Some(at);
                *after.prev_mut() = Some(node);
                *at.next_mut() = Some(node);
                node
            },
        }
    }

    /// Detaches `at` from the chain, re-linking its neighbours and fixing the ends, and returns
    /// its value. The detached node's links are cleared before it is freed, so a stale pointer
    /// to it can never walk back into the chain.
    pub(crate) fn unlink(&mut self, at: NodePtr<T>) -> T {
        match (*at.prev(), *at.next()) {
            (None, None) => {
                *self = Empty;
            },
            (None, Some(next)) => {
                *next.prev_mut() = None;
                if let Full(ChainEnds { head, .. }) = self {
                    *head = next;
                }
            },
            (Some(prev), None) => {
                *prev.next_mut() = None;
                if let Full(ChainEnds { tail, .. }) = self {
                    *tail = prev;
                }
            },
            (Some(prev), Some(next)) => {
                *prev.next_mut() = Some(next);
                *next.prev_mut() = Some(prev);
            },
        }
        *at.prev_mut() = None;
        *at.next_mut() = None;
        at.take_node().value
    }

    /// Joins `other` onto the tail of this chain. `other` must not be used afterwards.
    pub(crate) fn join_tail(&mut self, other: ChainState<T>) {
        match (&mut *self, other) {
            (_, Empty) => {},
            (Empty, full) => *self = full,
            (Full(ours), Full(theirs)) => {
                *ours.tail.next_mut() = Some(theirs.head);
                *theirs.head.prev_mut() = Some(ours.tail);
                ours.tail = theirs.tail;
            },
        }
    }

    /// Asserts the adjacency invariant over the whole chain: every next link is mirrored by a
    /// prev link, and the walk from head lands on tail.
    #[allow(dead_code)]
    pub(crate) fn verify_double_links(&self) {
        match self {
            Empty => {},
            Full(ChainEnds { head, tail }) => {
                assert!(head.prev().is_none(), "The head should have no predecessor");
                let mut curr = *head;
                while let Some(next) = *curr.next() {
                    assert!(
                        *next.prev() == Some(curr),
                        "Every next link should be mirrored by a prev link"
                    );
                    curr = next;
                }
                assert!(*tail == curr, "The walk from head should land on the tail");
            },
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A container built directly on a doubly linked node chain.
///
/// This trait is sealed: it is implemented by [`DoublyLinkedList`](super::DoublyLinkedList) and
/// [`CountedList`](super::CountedList) and exists so node handles and chain-walking enumerators
/// can be generic over the two. The hidden methods are the mutation seam: every structural
/// change reports itself through a `note_*` call, which is how the counted list keeps its count
/// exact without traversing.
pub trait Chain: sealed::Sealed {
    /// The element type stored in the chain.
    type Item;

    #[doc(hidden)]
    fn chain(&self) -> &ChainState<Self::Item>;

    #[doc(hidden)]
    fn chain_mut(&mut self) -> &mut ChainState<Self::Item>;

    #[doc(hidden)]
    fn note_insert(&mut self) {}

    #[doc(hidden)]
    fn note_remove(&mut self) {}

    #[doc(hidden)]
    fn note_clear(&mut self) {}
}

pub(crate) fn push_front<L: Chain>(list: &mut L, value: L::Item) -> NodePtr<L::Item> {
    let node = list.chain_mut().push_head(value);
    list.note_insert();
    node
}

pub(crate) fn push_back<L: Chain>(list: &mut L, value: L::Item) -> NodePtr<L::Item> {
    let node = list.chain_mut().push_tail(value);
    list.note_insert();
    node
}

pub(crate) fn pop_front<L: Chain>(list: &mut L) -> Option<L::Item> {
    let value = list.chain_mut().pop_head();
    if value.is_some() {
        list.note_remove();
    }
    value
}

pub(crate) fn pop_back<L: Chain>(list: &mut L) -> Option<L::Item> {
    let value = list.chain_mut().pop_tail();
    if value.is_some() {
        list.note_remove();
    }
    value
}
