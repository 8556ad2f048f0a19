use std::marker::PhantomData;

use crate::enumerate::{Anchored, Enumerator, Lifecycle, Phase, Reset};

use super::node::{SinglyLink, SinglyPtr};

/// The value enumerator of the singly linked containers: follows `next` links from a starting
/// node until the chain runs out.
///
/// Resetting is supported and returns to the starting node.
pub struct SinglyEnumerator<'a, T> {
    start: SinglyPtr<T>,
    at: SinglyLink<T>,
    life: Lifecycle,
    _list: PhantomData<&'a T>,
}

impl<'a, T> SinglyEnumerator<'a, T> {
    pub(crate) const fn new(start: SinglyPtr<T>) -> SinglyEnumerator<'a, T> {
        SinglyEnumerator {
            start,
            at: None,
            life: Lifecycle::new(),
            _list: PhantomData,
        }
    }

    fn step(&self) -> SinglyLink<T> {
        match (self.life.phase(), self.at) {
            (Phase::Fresh, _) => Some(self.start),
            (Phase::Started, Some(node)) => *node.next(),
            _ => None,
        }
    }
}

impl<'a, T> Enumerator for SinglyEnumerator<'a, T> {
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

impl<'a, T> Anchored<'a> for SinglyEnumerator<'a, T> {
    fn current_anchored(&self) -> Option<&'a T> {
        match self.life.phase() {
            Phase::Started => self.at.map(|node| node.value()),
            _ => None,
        }
    }
}
