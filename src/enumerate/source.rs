use std::marker::PhantomData;

use super::enumerator::{Enumerable, Enumerator};
use super::lifecycle::{Lifecycle, Phase, Reset};

/// A single-pass [`Enumerator`] over any [`Iterator`].
///
/// Values are pulled from the iterator one advance at a time and handed out by reference.
/// Because the iterator cannot be rewound, [`try_reset`](Enumerator::try_reset) always returns
/// [`Reset::Unsupported`].
pub struct OneShot<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    life: Lifecycle,
}

impl<I: Iterator> OneShot<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> OneShot<I> {
        OneShot {
            iter: iter.into_iter(),
            current: None,
            life: Lifecycle::new(),
        }
    }
}

impl<I: Iterator> Enumerator for OneShot<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        // Parked terminal while the iterator runs; a panic leaves the enumerator inert.
        self.life.complete();
        match self.iter.next() {
            Some(value) => {
                self.current = Some(value);
                self.life.note_yield();
                true
            },
            None => {
                self.current = None;
                false
            },
        }
    }

    fn current(&self) -> Option<&I::Item> {
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

/// An [`Enumerable`] which manufactures a fresh enumerator from a closure on every request, for
/// sequences that exist only as the ability to enumerate them.
pub struct Provider<F, E> {
    make: F,
    _produced: PhantomData<fn() -> E>,
}

impl<F, E> Provider<F, E>
where
    F: Fn() -> Option<E>,
    E: Enumerator,
{
    pub const fn new(make: F) -> Provider<F, E> {
        Provider {
            make,
            _produced: PhantomData,
        }
    }
}

impl<F, E> Enumerable for Provider<F, E>
where
    F: Fn() -> Option<E>,
    E: Enumerator,
{
    type Item = E::Item;
    type Enumerator<'a>
        = E
    where
        Self: 'a;

    fn try_enumerator(&self) -> Option<E> {
        (self.make)()
    }
}
