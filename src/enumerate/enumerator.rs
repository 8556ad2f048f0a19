use super::lifecycle::{Phase, Reset};

/// A cursor over a sequence of elements, with an explicit lifecycle.
///
/// An enumerator sits before its first element until the first call to
/// [`advance`](Enumerator::advance); every successful advance moves it onto the next element,
/// which is then readable through [`current`](Enumerator::current) until the following advance.
/// Once advance returns false the enumerator is finished and stays finished, unless it can be
/// wound back with [`try_reset`](Enumerator::try_reset). [`stop`](Enumerator::stop) ends an
/// enumeration early, releasing whatever the enumerator was holding on to.
///
/// The exact stage an enumerator is in is always available through
/// [`phase`](Enumerator::phase), and the contract ties the two views together:
/// [`current`](Enumerator::current) returns [`Some`] exactly in [`Phase::Started`].
///
/// If a caller-supplied closure (a predicate, converter or producer) panics mid-advance, the
/// enumerator remains in a terminal phase: later calls to advance return false rather than
/// resuming a half-finished step.
pub trait Enumerator {
    /// The element type of the sequence.
    type Item;

    /// Attempts to move onto the next element, returning whether one was found. After a false
    /// return the enumerator is terminal and every further call returns false.
    fn advance(&mut self) -> bool;

    /// The element this enumerator is positioned on, or [`None`] in every phase other than
    /// [`Phase::Started`].
    fn current(&self) -> Option<&Self::Item>;

    /// Ends the enumeration early. Transitions [`Phase::Started`] to [`Phase::Stopped`]; in any
    /// other phase this is a no-op, so calling it repeatedly is harmless.
    fn stop(&mut self);

    /// Attempts to wind the enumerator back to [`Phase::Fresh`] so the sequence can be
    /// enumerated again. A started enumerator is stopped first. Not every enumerator can do
    /// this; the [`Reset`] outcome distinguishes success, refusal and absent support.
    fn try_reset(&mut self) -> Reset;

    /// Whether [`try_reset`](Enumerator::try_reset) can ever return [`Reset::Done`].
    fn is_reset_supported(&self) -> bool;

    /// The lifecycle stage this enumerator is currently in.
    fn phase(&self) -> Phase;

    /// Whether any element has been processed since creation or the last reset. Latches on at
    /// the first successful advance and stays on through completion or stopping.
    fn has_processed_items(&self) -> bool;

    /// Whether the enumerator is mid-sequence with a defined current element.
    fn is_started(&self) -> bool {
        self.phase().is_started()
    }
}

/// An [`Enumerator`] whose elements live in the collection being walked rather than inside the
/// cursor itself, so a reference to the current element can outlive the cursor.
///
/// `'a` is the borrow of the underlying collection. Handing out `&'a` references lets callers
/// keep hold of an element while continuing to advance, which is what allows one enumerator to
/// feed another when walking nested structures.
pub trait Anchored<'a>: Enumerator {
    /// The current element, borrowed from the underlying collection, or [`None`] in every phase
    /// other than [`Phase::Started`].
    fn current_anchored(&self) -> Option<&'a Self::Item>;
}

/// A container able to hand out a fresh [`Enumerator`] over its elements.
pub trait Enumerable {
    /// The element type.
    type Item;

    /// The enumerator type, borrowing the container.
    type Enumerator<'a>: Enumerator<Item = Self::Item>
    where
        Self: 'a;

    /// Returns a fresh enumerator over the elements, or [`None`] when there is nothing to
    /// enumerate. An empty container has no enumerator, it does not have an empty one.
    fn try_enumerator(&self) -> Option<Self::Enumerator<'_>>;

    /// Whether the container currently holds at least one element.
    fn has_items(&self) -> bool {
        match self.try_enumerator() {
            Some(mut enumerator) => enumerator.advance(),
            None => false,
        }
    }
}

/// An [`Enumerable`] container which also keeps track of how many elements it holds.
pub trait Countable: Enumerable {
    /// The number of elements currently held.
    fn count(&self) -> usize;
}
