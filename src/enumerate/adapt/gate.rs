use crate::enumerate::{Anchored, Enumerator, Lifecycle, Phase, Reset};

/// An [`Enumerator`] which cuts another short at the first element failing a predicate.
///
/// One type covers the whole family of bounded traversals built through
/// [`EnumeratorExt`](super::EnumeratorExt): `until` flips the polarity of the predicate,
/// `exempt_first` passes the first element through unchecked (the do-while flavours), and
/// [`with_terminator`](Gated::with_terminator) keeps the element that triggered the cut as the
/// final yield. When the cut happens, the inner enumerator is stopped.
pub struct Gated<E: Enumerator, P> {
    inner: E,
    pred: P,
    until: bool,
    inclusive: bool,
    exempt_first: bool,
    fired: bool,
    last: bool,
    life: Lifecycle,
}

impl<E, P> Gated<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    pub(crate) const fn new(inner: E, pred: P, until: bool, exempt_first: bool) -> Gated<E, P> {
        Gated {
            inner,
            pred,
            until,
            inclusive: false,
            exempt_first,
            fired: false,
            last: false,
            life: Lifecycle::new(),
        }
    }

    pub(crate) const fn with_terminator(mut self) -> Gated<E, P> {
        self.inclusive = true;
        self
    }

    /// Discards the adapter, returning the enumerator it wrapped.
    pub fn into_inner(self) -> E {
        self.inner
    }

    fn cut(&mut self) -> bool {
        self.life.complete();
        self.inner.stop();
        false
    }
}

impl<E, P> Enumerator for Gated<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        if self.last {
            return self.cut();
        }
        // Parked terminal while the inner enumerator and predicate run; a panic leaves the
        // adapter inert.
        self.life.complete();
        if !self.inner.advance() {
            return false;
        }
        if self.exempt_first && !self.fired {
            self.fired = true;
            self.life.note_yield();
            return true;
        }
        self.fired = true;
        // UNWRAP: A successful advance leaves the inner enumerator on an element.
        if (self.pred)(self.inner.current().unwrap()) != self.until {
            self.life.note_yield();
            true
        } else if self.inclusive {
            self.last = true;
            self.life.note_yield();
            true
        } else {
            self.cut()
        }
    }

    fn current(&self) -> Option<&E::Item> {
        match self.life.phase() {
            Phase::Started => self.inner.current(),
            _ => None,
        }
    }

    fn stop(&mut self) {
        self.life.stop();
        self.inner.stop();
    }

    fn try_reset(&mut self) -> Reset {
        if !self.inner.is_reset_supported() {
            return Reset::Unsupported;
        }
        self.stop();
        match self.inner.try_reset() {
            Reset::Done => {
                self.fired = false;
                self.last = false;
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

impl<'a, E, P> Anchored<'a> for Gated<E, P>
where
    E: Anchored<'a>,
    P: FnMut(&E::Item) -> bool,
{
    fn current_anchored(&self) -> Option<&'a E::Item> {
        match self.life.phase() {
            Phase::Started => self.inner.current_anchored(),
            _ => None,
        }
    }
}
