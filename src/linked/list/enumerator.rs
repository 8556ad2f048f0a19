use std::marker::PhantomData;

use derive_more::IsVariant;

use crate::enumerate::{Anchored, Enumerator, Lifecycle, Phase, Reset};
use crate::linked::chain::{Chain, Link, NodePtr};
use crate::linked::handle::NodeRef;

/// Which link a node-chain enumerator follows on each advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Direction {
    /// Follow `next` links, head towards tail.
    Forward,
    /// Follow `prev` links, tail towards head.
    Backward,
}

/// The value enumerator of the doubly linked lists: walks the node chain from a starting node
/// and yields each node's value.
///
/// This is the projecting form of [`NodeEnumerator`]; the values it yields are anchored in the
/// list, so it implements [`Anchored`] and can feed the recursive machinery. Resetting is
/// supported and returns to the starting node.
pub struct ListEnumerator<'a, T> {
    start: NodePtr<T>,
    direction: Direction,
    at: Link<T>,
    life: Lifecycle,
    _list: PhantomData<&'a T>,
}

impl<'a, T> ListEnumerator<'a, T> {
    pub(crate) const fn new(start: NodePtr<T>, direction: Direction) -> ListEnumerator<'a, T> {
        ListEnumerator {
            start,
            direction,
            at: None,
            life: Lifecycle::new(),
            _list: PhantomData,
        }
    }

    fn step(&self) -> Link<T> {
        match (self.life.phase(), self.at) {
            (Phase::Fresh, _) => Some(self.start),
            (Phase::Started, Some(node)) => match self.direction {
                Direction::Forward => *node.next(),
                Direction::Backward => *node.prev(),
            },
            _ => None,
        }
    }
}

impl<'a, T> Enumerator for ListEnumerator<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        match self.step() {
            Some(node) => {
                self.at = Some(node);
                self.life.note_yield();
                true
            },
            None => {
                self.at = None;
                self.life.complete();
                false
            },
        }
    }

    fn current(&self) -> Option<&T> {
        self.current_anchored()
    }

    fn stop(&mut self) {
        if self.life.stop() {
            self.at = None;
        }
    }

    fn try_reset(&mut self) -> Reset {
        self.stop();
        self.at = None;
        self.life.rewind();
        Reset::Done
    }

    fn is_reset_supported(&self) -> bool {
        true
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}

impl<'a, T> Anchored<'a> for ListEnumerator<'a, T> {
    fn current_anchored(&self) -> Option<&'a T> {
        match self.life.phase() {
            Phase::Started => self.at.map(|node| node.value()),
            _ => None,
        }
    }
}

/// An enumerator over the node handles of a linked container, from a starting node to the end
/// of the chain in the chosen [`Direction`].
///
/// Yields [`NodeRef`] handles rather than values, so callers can navigate sideways from each
/// position. Resetting is supported and returns to the starting node.
pub struct NodeEnumerator<'a, L: Chain> {
    list: &'a L,
    start: NodePtr<L::Item>,
    direction: Direction,
    current: Option<NodeRef<'a, L>>,
    life: Lifecycle,
}

impl<'a, L: Chain> NodeEnumerator<'a, L> {
    pub(crate) const fn new(
        list: &'a L,
        start: NodePtr<L::Item>,
        direction: Direction,
    ) -> NodeEnumerator<'a, L> {
        NodeEnumerator {
            list,
            start,
            direction,
            current: None,
            life: Lifecycle::new(),
        }
    }

    fn step(&self) -> Option<NodeRef<'a, L>> {
        match (self.life.phase(), self.current) {
            (Phase::Fresh, _) => Some(NodeRef::new(self.list, self.start)),
            (Phase::Started, Some(node)) => match self.direction {
                Direction::Forward => node.next(),
                Direction::Backward => node.prev(),
            },
            _ => None,
        }
    }
}

impl<'a, L: Chain> Enumerator for NodeEnumerator<'a, L> {
    type Item = NodeRef<'a, L>;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        match self.step() {
            Some(node) => {
                self.current = Some(node);
                self.life.note_yield();
                true
            },
            None => {
                self.current = None;
                self.life.complete();
                false
            },
        }
    }

    fn current(&self) -> Option<&NodeRef<'a, L>> {
        match self.life.phase() {
            Phase::Started => self.current.as_ref(),
            _ => None,
        }
    }

    fn stop(&mut self) {
        if self.life.stop() {
            self.current = None;
        }
    }

    fn try_reset(&mut self) -> Reset {
        self.stop();
        self.current = None;
        self.life.rewind();
        Reset::Done
    }

    fn is_reset_supported(&self) -> bool {
        true
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}
