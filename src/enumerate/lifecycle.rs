use derive_more::IsVariant;

/// The lifecycle stage of an [`Enumerator`](super::Enumerator).
///
/// Every enumerator begins [`Fresh`](Phase::Fresh), becomes [`Started`](Phase::Started) on its
/// first successful [`advance`](super::Enumerator::advance) and stays there while elements keep
/// coming, then finishes in one of two terminal stages: [`Completed`](Phase::Completed) when the
/// sequence ran out, or [`Stopped`](Phase::Stopped) when enumeration was cut short. A terminal
/// stage only ever leads back to [`Fresh`](Phase::Fresh) via a successful
/// [`try_reset`](super::Enumerator::try_reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Phase {
    /// Created (or reset) and not yet advanced; there is no current element.
    Fresh,
    /// Mid-sequence with a defined current element.
    Started,
    /// The sequence was exhausted, or enumeration was refused before it began.
    Completed,
    /// Enumeration was cut short by [`stop`](super::Enumerator::stop).
    Stopped,
}

impl Phase {
    /// Returns true for the two stages in which no further elements can be produced.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::Completed | Phase::Stopped)
    }
}

/// The outcome of [`Enumerator::try_reset`](super::Enumerator::try_reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Reset {
    /// The enumerator returned to [`Phase::Fresh`] and can run from the start again.
    Done,
    /// The enumerator supports resetting but could not perform one right now.
    Refused,
    /// The enumerator can never be reset.
    Unsupported,
}

/// Phase bookkeeping embedded in every enumerator in this crate.
///
/// Keeps the [`Phase`] and the sticky processed flag moving in lockstep so the individual
/// enumerators only have to decide *when* the transitions happen, not what they are.
#[derive(Debug, Clone, Copy)]
pub struct Lifecycle {
    phase: Phase,
    processed: bool,
}

impl Lifecycle {
    pub(crate) const fn new() -> Lifecycle {
        Lifecycle {
            phase: Phase::Fresh,
            processed: false,
        }
    }

    pub(crate) const fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) const fn has_processed(&self) -> bool {
        self.processed
    }

    /// Records a successful advance: mid-sequence, with the processed flag latched on.
    pub(crate) const fn note_yield(&mut self) {
        self.phase = Phase::Started;
        self.processed = true;
    }

    /// Moves to [`Phase::Completed`] from any stage.
    pub(crate) const fn complete(&mut self) {
        self.phase = Phase::Completed;
    }

    /// Moves [`Phase::Started`] to [`Phase::Stopped`] and reports whether the transition fired.
    /// Every other stage is left untouched.
    pub(crate) const fn stop(&mut self) -> bool {
        if matches!(self.phase, Phase::Started) {
            self.phase = Phase::Stopped;
            true
        } else {
            false
        }
    }

    /// Returns to [`Phase::Fresh`], clearing the processed flag.
    pub(crate) const fn rewind(&mut self) {
        self.phase = Phase::Fresh;
        self.processed = false;
    }
}
