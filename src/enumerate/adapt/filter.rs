use crate::enumerate::{Anchored, Enumerator, Lifecycle, Phase, Reset};

/// An [`Enumerator`] which yields only the elements of another for which a predicate holds.
///
/// The predicate runs exactly once per element of the source, as each is reached.
pub struct Filter<E: Enumerator, P> {
    inner: E,
    select: P,
    life: Lifecycle,
}

impl<E, P> Filter<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    pub(crate) const fn new(inner: E, select: P) -> Filter<E, P> {
        Filter {
            inner,
            select,
            life: Lifecycle::new(),
        }
    }

    /// Discards the adapter, returning the enumerator it wrapped.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, P> Enumerator for Filter<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        // Parked terminal while the inner enumerator and predicate run; a panic leaves the
        // adapter inert.
        self.life.complete();
        loop {
            if !self.inner.advance() {
                return false;
            }
            // UNWRAP: A successful advance leaves the inner enumerator on an element.
            if (self.select)(self.inner.current().unwrap()) {
                self.life.note_yield();
                return true;
            }
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

impl<'a, E, P> Anchored<'a> for Filter<E, P>
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

/// An [`Enumerator`] which drops the leading elements of another while a predicate holds, then
/// yields the entire remainder unchecked.
pub struct SkipWhile<E: Enumerator, P> {
    inner: E,
    pred: P,
    skipped: bool,
    life: Lifecycle,
}

impl<E, P> SkipWhile<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    pub(crate) const fn new(inner: E, pred: P) -> SkipWhile<E, P> {
        SkipWhile {
            inner,
            pred,
            skipped: false,
            life: Lifecycle::new(),
        }
    }

    /// Discards the adapter, returning the enumerator it wrapped.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, P> Enumerator for SkipWhile<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.life.phase().is_terminal() {
            return false;
        }
        // Parked terminal while the inner enumerator and predicate run; a panic leaves the
        // adapter inert.
        self.life.complete();
        if !self.skipped {
            self.skipped = true;
            loop {
                if !self.inner.advance() {
                    return false;
                }
                // UNWRAP: A successful advance leaves the inner enumerator on an element.
                if !(self.pred)(self.inner.current().unwrap()) {
                    self.life.note_yield();
                    return true;
                }
            }
        }
        if self.inner.advance() {
            self.life.note_yield();
            true
        } else {
            false
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
                self.skipped = false;
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

impl<'a, E, P> Anchored<'a> for SkipWhile<E, P>
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
