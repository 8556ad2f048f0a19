use crate::enumerate::{Enumerator, Lifecycle, Phase, Reset};

/// An [`Enumerator`] which transforms each element of another with a converter closure.
///
/// The converted value is stored in the adapter, so [`current`](Enumerator::current) borrows
/// from the adapter rather than the source.
pub struct Convert<E: Enumerator, F, U> {
    inner: E,
    convert: F,
    current: Option<U>,
    life: Lifecycle,
}

impl<E, F, U> Convert<E, F, U>
where
    E: Enumerator,
    F: FnMut(&E::Item) -> U,
{
    pub(crate) const fn new(inner: E, convert: F) -> Convert<E, F, U> {
        Convert {
            inner,
            convert,
            current: None,
            life: Lifecycle::new(),
        }
    }

    /// Discards the adapter, returning the enumerator it wrapped.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, F, U> Enumerator for Convert<E, F, U>
where
    E: Enumerator,
    F: FnMut(&E::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        // Parked terminal while the inner enumerator and converter run; a panic leaves the
        // adapter inert.
        self.life.complete();
        if self.inner.advance() {
            // UNWRAP: A successful advance leaves the inner enumerator on an element.
            self.current = Some((self.convert)(self.inner.current().unwrap()));
            self.life.note_yield();
            true
        } else {
            self.current = None;
            false
        }
    }

    fn current(&self) -> Option<&U> {
        match self.life.phase() {
            Phase::Started => self.current.as_ref(),
            _ => None,
        }
    }

    fn stop(&mut self) {
        if self.life.stop() {
            self.current = None;
        }
        self.inner.stop();
    }

    fn try_reset(&mut self) -> Reset {
        if !self.inner.is_reset_supported() {
            return Reset::Unsupported;
        }
        self.stop();
        match self.inner.try_reset() {
            Reset::Done => {
                self.current = None;
                self.life.rewind();
                Reset::Done
            },
            refused => refused,
        }
    }

    fn is_reset_supported(&self) -> bool {
        self.inner.is_reset_supported()
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn is_started(&self) -> bool {
        self.inner.is_started()
    }

    fn has_processed_items(&self) -> bool {
        self.inner.has_processed_items()
    }
}
