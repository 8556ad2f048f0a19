use derive_more::IsVariant;

/// The answer a traversal hook gives the [`RecursiveEnumerator`](super::RecursiveEnumerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Verdict {
    /// Carry on: accept the entrance or exit.
    Proceed,
    /// Veto: skip the subtree in question but continue the traversal.
    Skip,
    /// Abort the whole traversal. The enumerator completes on the spot, without firing any
    /// remaining exit hooks.
    Abort,
}

impl Verdict {
    /// Combines two verdicts: [`Abort`](Verdict::Abort) dominates, then
    /// [`Skip`](Verdict::Skip).
    #[must_use]
    pub const fn and(self, other: Verdict) -> Verdict {
        match (self, other) {
            (Verdict::Abort, _) | (_, Verdict::Abort) => Verdict::Abort,
            (Verdict::Skip, _) | (_, Verdict::Skip) => Verdict::Skip,
            _ => Verdict::Proceed,
        }
    }
}

/// An observer of a depth-first traversal, consulted at every transition.
///
/// The entrance hooks run in pairs: first the specific one ([`on_entering_main`] for a top-level
/// item, [`on_entering_sub`] for a child), then, if it proceeded, the general
/// [`on_entering_level`]. The exit hooks mirror them when a subtree closes, except that a
/// [`Skip`](Verdict::Skip) from the specific exit hook suppresses the paired
/// [`on_exiting_level`] rather than skipping anything further. An exit hook receives the closing
/// item only from a *stacked* enumerator; the plain flavor passes [`None`].
///
/// Every method defaults to accepting, so an implementation only overrides the transitions it
/// cares about.
///
/// [`on_entering_main`]: Handler::on_entering_main
/// [`on_entering_sub`]: Handler::on_entering_sub
/// [`on_entering_level`]: Handler::on_entering_level
/// [`on_exiting_level`]: Handler::on_exiting_level
pub trait Handler<T> {
    /// Called once before the first element is yielded. Returning false completes the traversal
    /// on the spot, without visiting anything.
    fn on_starting(&mut self) -> bool {
        true
    }

    /// Called when a top-level item is about to be entered.
    fn on_entering_main(&mut self, _item: &T) -> Verdict {
        Verdict::Proceed
    }

    /// Called when a top-level item's subtree has been fully traversed.
    fn on_exiting_main(&mut self, _item: Option<&T>) -> Verdict {
        Verdict::Proceed
    }

    /// Called when a child item is about to be entered.
    fn on_entering_sub(&mut self, _item: &T) -> Verdict {
        Verdict::Proceed
    }

    /// Called when a child item's subtree has been fully traversed.
    fn on_exiting_sub(&mut self, _item: Option<&T>) -> Verdict {
        Verdict::Proceed
    }

    /// Called after any accepted entrance, main or sub.
    fn on_entering_level(&mut self, _item: &T) -> Verdict {
        Verdict::Proceed
    }

    /// Called after any accepted exit, main or sub.
    fn on_exiting_level(&mut self, _item: Option<&T>) -> Verdict {
        Verdict::Proceed
    }

    /// Called exactly once when the traversal is stopped early. No pending exit hooks fire.
    fn on_stopped(&mut self) {}
}

/// The all-accepting [`Handler`], used when no other is supplied. Zero-sized, so the plain
/// factories pay nothing for the hook machinery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accept;

impl<T> Handler<T> for Accept {}
