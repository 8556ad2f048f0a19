use crate::enumerate::{Enumerator, Lifecycle, Phase, Reset};
use crate::linked::chain::{self, Chain};

/// A destructive enumerator over a linked container: every advance removes the first element
/// from the list and yields it, so the elements come out FIFO and the list empties as the
/// enumeration runs.
///
/// Lazy: elements never advanced over remain in the list. Resetting is unsupported, because the
/// consumed elements are gone.
pub struct Queued<'a, L: Chain> {
    list: &'a mut L,
    current: Option<L::Item>,
    life: Lifecycle,
}

impl<'a, L: Chain> Queued<'a, L> {
    pub(crate) const fn new(list: &'a mut L) -> Queued<'a, L> {
        Queued {
            list,
            current: None,
            life: Lifecycle::new(),
        }
    }
}

impl<'a, L: Chain> Enumerator for Queued<'a, L> {
    type Item = L::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        match chain::pop_front(self.list) {
            Some(value) => {
                self.current = Some(value);
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

    fn current(&self) -> Option<&L::Item> {
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
        Reset::Unsupported
    }

    fn is_reset_supported(&self) -> bool {
        false
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}

/// The LIFO counterpart of [`Queued`]: every advance removes and yields the *last* element, so
/// the list is consumed back to front.
pub struct Stacked<'a, L: Chain> {
    list: &'a mut L,
    current: Option<L::Item>,
    life: Lifecycle,
}

impl<'a, L: Chain> Stacked<'a, L> {
    pub(crate) const fn new(list: &'a mut L) -> Stacked<'a, L> {
        Stacked {
            list,
            current: None,
            life: Lifecycle::new(),
        }
    }
}

impl<'a, L: Chain> Enumerator for Stacked<'a, L> {
    type Item = L::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        match chain::pop_back(self.list) {
            Some(value) => {
                self.current = Some(value);
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

    fn current(&self) -> Option<&L::Item> {
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
        Reset::Unsupported
    }

    fn is_reset_supported(&self) -> bool {
        false
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}
