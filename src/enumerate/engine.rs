use super::enumerator::Enumerator;
use super::lifecycle::{Lifecycle, Phase, Reset};

/// The overridable core of an [`Engine`]: produces the elements of a sequence and observes the
/// lifecycle of its enumeration.
///
/// [`Engine`] owns the protocol so a producer only supplies behaviour. The observation hooks
/// run in a fixed order:
/// - on natural exhaustion: [`on_terminated(true)`](Produce::on_terminated), then
///   [`on_ended`](Produce::on_ended), then [`on_completed`](Produce::on_completed);
/// - on [`stop`](Enumerator::stop): [`on_terminated(false)`](Produce::on_terminated), then
///   [`on_ended`](Produce::on_ended), then [`on_stopped`](Produce::on_stopped).
///
/// [`on_ended`](Produce::on_ended) therefore fires exactly once per enumeration however it
/// finishes, which makes it the place to release resources.
pub trait Produce {
    /// The element type produced.
    type Item;

    /// Produces the next element, or [`None`] once the sequence is exhausted.
    fn produce(&mut self) -> Option<Self::Item>;

    /// Called once before the first element is produced. Returning false completes the
    /// enumeration on the spot, without producing anything.
    fn on_starting(&mut self) -> bool {
        true
    }

    /// Called when enumeration finishes, with `done` true on natural exhaustion and false when
    /// it was stopped early.
    fn on_terminated(&mut self, _done: bool) {}

    /// Called when enumeration finishes for any reason, directly after
    /// [`on_terminated`](Produce::on_terminated).
    fn on_ended(&mut self) {}

    /// Called last on natural exhaustion.
    fn on_completed(&mut self) {}

    /// Called last when enumeration was stopped early.
    fn on_stopped(&mut self) {}

    /// Whether [`reset`](Produce::reset) may be attempted at all.
    fn supports_reset(&self) -> bool {
        false
    }

    /// Returns the producer to its initial state. Only invoked when
    /// [`supports_reset`](Produce::supports_reset) returns true.
    fn reset(&mut self) -> Reset {
        Reset::Unsupported
    }
}

/// An [`Enumerator`] which drives a [`Produce`] implementation through the full enumeration
/// protocol: phase transitions, current-element handling and hook ordering all live here.
pub struct Engine<P: Produce> {
    producer: P,
    current: Option<P::Item>,
    life: Lifecycle,
}

impl<P: Produce> Engine<P> {
    pub const fn new(producer: P) -> Engine<P> {
        Engine {
            producer,
            current: None,
            life: Lifecycle::new(),
        }
    }

    /// Shared access to the wrapped producer.
    pub const fn producer(&self) -> &P {
        &self.producer
    }

    /// Discards the engine, returning the wrapped producer.
    pub fn into_producer(self) -> P {
        self.producer
    }

    fn pull(&mut self) -> bool {
        // Parked terminal while the producer runs; a panic leaves the engine inert.
        self.life.complete();
        match self.producer.produce() {
            Some(value) => {
                self.current = Some(value);
                self.life.note_yield();
                true
            },
            None => {
                self.current = None;
                self.producer.on_terminated(true);
                self.producer.on_ended();
                self.producer.on_completed();
                false
            },
        }
    }

    fn refuse(&mut self) -> bool {
        self.life.complete();
        self.producer.on_terminated(true);
        self.producer.on_ended();
        self.producer.on_completed();
        false
    }
}

impl<P: Produce> Enumerator for Engine<P> {
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        match self.life.phase() {
            Phase::Fresh if !self.producer.on_starting() => self.refuse(),
            Phase::Fresh | Phase::Started => self.pull(),
            Phase::Completed | Phase::Stopped => false,
        }
    }

    fn current(&self) -> Option<&P::Item> {
        match self.life.phase() {
            Phase::Started => self.current.as_ref(),
            _ => None,
        }
    }

    fn stop(&mut self) {
        if self.life.stop() {
            self.current = None;
            self.producer.on_terminated(false);
            self.producer.on_ended();
            self.producer.on_stopped();
        }
    }

    fn try_reset(&mut self) -> Reset {
        if !self.producer.supports_reset() {
            return Reset::Unsupported;
        }
        self.stop();
        match self.producer.reset() {
            Reset::Done => {
                self.current = None;
                self.life.rewind();
                Reset::Done
            },
            refused => refused,
        }
    }

    fn is_reset_supported(&self) -> bool {
        self.producer.supports_reset()
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}
