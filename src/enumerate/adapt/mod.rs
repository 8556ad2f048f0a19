//! Composable transforms over [`Enumerator`]s.
//!
//! Each adapter owns the enumerator it wraps and implements the protocol itself: queries like
//! [`has_processed_items`](Enumerator::has_processed_items) are forwarded to the inner
//! enumerator, a reset winds back the whole chain, and an adapter which cuts a sequence short
//! stops its inner enumerator at the cut. The usual way to construct them is through
//! [`EnumeratorExt`], which is implemented for every enumerator.

mod convert;
mod filter;
mod gate;

pub use convert::*;
pub use filter::*;
pub use gate::*;

use super::Enumerator;

/// Chaining constructors for the adapter types, available on every [`Enumerator`].
pub trait EnumeratorExt: Enumerator + Sized {
    /// Transforms each element with `convert`, yielding the results.
    fn convert<U, F>(self, convert: F) -> Convert<Self, F, U>
    where
        F: FnMut(&Self::Item) -> U,
    {
        Convert::new(self, convert)
    }

    /// Yields only the elements for which `select` returns true.
    fn filter<P>(self, select: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, select)
    }

    /// Skips elements while `pred` returns true, then yields the whole remainder unchecked.
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    /// Yields elements while `pred` returns true, dropping the first failing element.
    fn take_while<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, false, false)
    }

    /// Yields elements while `pred` returns true, including the first failing element as the
    /// final one.
    fn take_while_inclusive<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, false, false).with_terminator()
    }

    /// Yields elements until `pred` returns true, dropping the element that matched.
    fn take_until<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, true, false)
    }

    /// Yields elements until `pred` returns true, including the element that matched as the
    /// final one.
    fn take_until_inclusive<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, true, false).with_terminator()
    }

    /// Always yields the first element, then keeps yielding while `pred` returns true.
    fn do_while<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, false, true)
    }

    /// Always yields the first element, then keeps yielding until `pred` returns true.
    fn do_until<P>(self, pred: P) -> Gated<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Gated::new(self, pred, true, true)
    }
}

impl<E: Enumerator> EnumeratorExt for E {}
