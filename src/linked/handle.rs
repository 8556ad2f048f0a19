//! Node handles: the public face of individual linked nodes.
//!
//! A handle pairs a raw node pointer with a borrow of the owning list, so the borrow checker
//! enforces what the host concept of a "list back-reference" only promised: a node can never be
//! touched without its list, and an exclusive handle cannot coexist with any other access to
//! the list. Splices and removals made through [`NodeMut`] report themselves to the list, which
//! keeps a [`CountedList`](super::CountedList)'s count exact.

use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::chain::{Chain, NodePtr};

/// A shared handle onto one node of a linked container.
///
/// Copyable, and navigable in both directions. The values it hands out borrow the list itself,
/// so they outlive the handle.
pub struct NodeRef<'a, L: Chain> {
    list: &'a L,
    node: NodePtr<L::Item>,
}

impl<'a, L: Chain> NodeRef<'a, L> {
    pub(crate) const fn new(list: &'a L, node: NodePtr<L::Item>) -> NodeRef<'a, L> {
        NodeRef { list, node }
    }

    /// The value stored in this node, borrowed from the list.
    pub fn value(&self) -> &'a L::Item {
        self.node.value()
    }

    /// The handle one step towards the tail, or [`None`] on the last node.
    pub fn next(self) -> Option<NodeRef<'a, L>> {
        (*self.node.next()).map(|node| NodeRef::new(self.list, node))
    }

    /// The handle one step towards the head, or [`None`] on the first node.
    pub fn prev(self) -> Option<NodeRef<'a, L>> {
        (*self.node.prev()).map(|node| NodeRef::new(self.list, node))
    }

    /// The list this node belongs to.
    pub const fn list(self) -> &'a L {
        self.list
    }

    pub(crate) const fn node(&self) -> NodePtr<L::Item> {
        self.node
    }
}

impl<'a, L: Chain> Clone for NodeRef<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L: Chain> Copy for NodeRef<'a, L> {}

impl<'a, L: Chain> PartialEq for NodeRef<'a, L> {
    /// Handle equality is node identity, not value equality.
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<'a, L: Chain> Debug for NodeRef<'a, L>
where
    L::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}

/// An exclusive handle onto one node of a linked container.
///
/// While it exists no other access to the list is possible, which is what makes the structural
/// operations safe: [`insert_before`](NodeMut::insert_before),
/// [`insert_after`](NodeMut::insert_after) and [`remove`](NodeMut::remove) splice the chain
/// around this node and notify the list of the change.
pub struct NodeMut<'a, L: Chain> {
    list: &'a mut L,
    node: NodePtr<L::Item>,
}

impl<'a, L: Chain> NodeMut<'a, L> {
    pub(crate) const fn new(list: &'a mut L, node: NodePtr<L::Item>) -> NodeMut<'a, L> {
        NodeMut { list, node }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &L::Item {
        self.node.value()
    }

    /// The value stored in this node, mutably.
    pub fn value_mut(&mut self) -> &mut L::Item {
        self.node.value_mut()
    }

    /// Swaps the stored value for a new one, returning the old.
    pub fn replace_value(&mut self, value: L::Item) -> L::Item {
        mem::replace(self.value_mut(), value)
    }

    /// A shared handle onto the same node, usable while this one is parked.
    pub fn as_ref(&self) -> NodeRef<'_, L> {
        NodeRef::new(self.list, self.node)
    }

    /// Moves the handle one step towards the tail. The handle is consumed either way; on the
    /// last node [`None`] is returned and access to the list is released.
    pub fn into_next(self) -> Option<NodeMut<'a, L>> {
        (*self.node.next()).map(|node| NodeMut::new(self.list, node))
    }

    /// Moves the handle one step towards the head. The handle is consumed either way.
    pub fn into_prev(self) -> Option<NodeMut<'a, L>> {
        (*self.node.prev()).map(|node| NodeMut::new(self.list, node))
    }

    /// Splices a new node holding `value` in directly before this one, returning a handle onto
    /// it. On the first node of the list this creates a new first node.
    pub fn insert_before(self, value: L::Item) -> NodeMut<'a, L> {
        let node = self.list.chain_mut().splice_before(self.node, value);
        self.list.note_insert();
        NodeMut::new(self.list, node)
    }

    /// Splices a new node holding `value` in directly after this one, returning a handle onto
    /// it. On the last node of the list this creates a new last node.
    pub fn insert_after(self, value: L::Item) -> NodeMut<'a, L> {
        let node = self.list.chain_mut().splice_after(self.node, value);
        self.list.note_insert();
        NodeMut::new(self.list, node)
    }

    /// Detaches this node from the list, re-linking its neighbours and updating the list's ends
    /// if necessary, and returns the value it held. The handle is consumed; the node's links
    /// are cleared before it is freed.
    pub fn remove(self) -> L::Item {
        let value = self.list.chain_mut().unlink(self.node);
        self.list.note_remove();
        value
    }

    /// The list this node belongs to.
    pub fn list(&self) -> &L {
        self.list
    }

    /// Releases the handle, returning the exclusive list borrow it held.
    pub fn into_list(self) -> &'a mut L {
        self.list
    }
}

impl<'a, L: Chain> Debug for NodeMut<'a, L>
where
    L::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeMut").field(self.value()).finish()
    }
}
