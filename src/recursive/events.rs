use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::util::error::ReentrantDispatch;
use crate::util::result::ResultExtension;

use super::handler::{Handler, Verdict};

type Starting = Box<dyn FnMut() -> bool>;
type Entering<T> = Box<dyn FnMut(&T) -> Verdict>;
type Exiting<T> = Box<dyn FnMut(Option<&T>) -> Verdict>;
type Stopped = Box<dyn FnMut()>;

/// The shared hook lists behind an [`Events`] handler and its [`Port`]s, together with the
/// dispatching flag that guards them.
struct Registry<T> {
    dispatching: Cell<bool>,
    starting: RefCell<Vec<Starting>>,
    entering_main: RefCell<Vec<Entering<T>>>,
    exiting_main: RefCell<Vec<Exiting<T>>>,
    entering_sub: RefCell<Vec<Entering<T>>>,
    exiting_sub: RefCell<Vec<Exiting<T>>>,
    entering_level: RefCell<Vec<Entering<T>>>,
    exiting_level: RefCell<Vec<Exiting<T>>>,
    stopped: RefCell<Vec<Stopped>>,
}

impl<T> Registry<T> {
    fn new() -> Registry<T> {
        Registry {
            dispatching: Cell::new(false),
            starting: RefCell::new(Vec::new()),
            entering_main: RefCell::new(Vec::new()),
            exiting_main: RefCell::new(Vec::new()),
            entering_sub: RefCell::new(Vec::new()),
            exiting_sub: RefCell::new(Vec::new()),
            entering_level: RefCell::new(Vec::new()),
            exiting_level: RefCell::new(Vec::new()),
            stopped: RefCell::new(Vec::new()),
        }
    }

    /// Flags the registry as dispatching for the lifetime of the returned guard.
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when a dispatch is already running: a subscriber has
    /// re-entered the traversal machinery, which under cooperative scheduling can only mean a
    /// cycle.
    fn begin(&self) -> Dispatch<'_> {
        if self.dispatching.replace(true) {
            Err(ReentrantDispatch).throw()
        }
        Dispatch(&self.dispatching)
    }

    fn entering(&self, hooks: &RefCell<Vec<Entering<T>>>, item: &T) -> Verdict {
        let _dispatch = self.begin();
        let mut verdict = Verdict::Proceed;
        for hook in hooks.borrow_mut().iter_mut() {
            verdict = verdict.and(hook(item));
        }
        verdict
    }

    fn exiting(&self, hooks: &RefCell<Vec<Exiting<T>>>, item: Option<&T>) -> Verdict {
        let _dispatch = self.begin();
        let mut verdict = Verdict::Proceed;
        for hook in hooks.borrow_mut().iter_mut() {
            verdict = verdict.and(hook(item));
        }
        verdict
    }
}

/// Clears the dispatching flag when the dispatch ends.
struct Dispatch<'a>(&'a Cell<bool>);

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// An event-driven [`Handler`]: every hook is a subscribable event.
///
/// Subscriptions are made through a [`Port`], any number of which can be cloned off via
/// [`port`](Events::port) before the handler is given to an enumerator. Each hook call runs
/// every subscriber in subscription order and combines their verdicts with
/// [`Verdict::and`], so any subscriber can veto or abort.
///
/// While an event is dispatching, subscribing or re-entering dispatch is rejected with
/// [`ReentrantDispatch`]: a subscriber that mutates the structure mid-walk back into the
/// machinery would otherwise cycle.
pub struct Events<T> {
    registry: Rc<Registry<T>>,
}

impl<T> Events<T> {
    pub fn new() -> Events<T> {
        Events {
            registry: Rc::new(Registry::new()),
        }
    }

    /// A subscription handle onto this handler's events.
    pub fn port(&self) -> Port<T> {
        Port {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Events<T> {
    fn default() -> Self {
        Events::new()
    }
}

impl<T> Handler<T> for Events<T> {
    fn on_starting(&mut self) -> bool {
        let _dispatch = self.registry.begin();
        let mut go = true;
        for hook in self.registry.starting.borrow_mut().iter_mut() {
            go &= hook();
        }
        go
    }

    fn on_entering_main(&mut self, item: &T) -> Verdict {
        self.registry.entering(&self.registry.entering_main, item)
    }

    fn on_exiting_main(&mut self, item: Option<&T>) -> Verdict {
        self.registry.exiting(&self.registry.exiting_main, item)
    }

    fn on_entering_sub(&mut self, item: &T) -> Verdict {
        self.registry.entering(&self.registry.entering_sub, item)
    }

    fn on_exiting_sub(&mut self, item: Option<&T>) -> Verdict {
        self.registry.exiting(&self.registry.exiting_sub, item)
    }

    fn on_entering_level(&mut self, item: &T) -> Verdict {
        self.registry.entering(&self.registry.entering_level, item)
    }

    fn on_exiting_level(&mut self, item: Option<&T>) -> Verdict {
        self.registry.exiting(&self.registry.exiting_level, item)
    }

    fn on_stopped(&mut self) {
        let _dispatch = self.registry.begin();
        for hook in self.registry.stopped.borrow_mut().iter_mut() {
            hook();
        }
    }
}

/// A subscription handle onto an [`Events`] handler.
///
/// Cloneable; every clone reaches the same subscriber lists. The `try_on_*` methods report a
/// [`ReentrantDispatch`] error when called while an event is dispatching; the `on_*` forms
/// panic on the same condition.
pub struct Port<T> {
    registry: Rc<Registry<T>>,
}

impl<T> Port<T> {
    fn guarded(&self, subscribe: impl FnOnce(&Registry<T>)) -> Result<(), ReentrantDispatch> {
        if self.registry.dispatching.get() {
            return Err(ReentrantDispatch);
        }
        subscribe(&self.registry);
        Ok(())
    }

    /// Subscribes to the starting event; all subscribers must return true for the traversal to
    /// begin.
    pub fn try_on_starting(
        &self,
        hook: impl FnMut() -> bool + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.starting.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_starting`](Port::try_on_starting).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_starting(&self, hook: impl FnMut() -> bool + 'static) {
        self.try_on_starting(hook).throw();
    }

    /// Subscribes to main-level entrances.
    pub fn try_on_entering_main(
        &self,
        hook: impl FnMut(&T) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.entering_main.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_entering_main`](Port::try_on_entering_main).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_entering_main(&self, hook: impl FnMut(&T) -> Verdict + 'static) {
        self.try_on_entering_main(hook).throw();
    }

    /// Subscribes to main-level exits.
    pub fn try_on_exiting_main(
        &self,
        hook: impl FnMut(Option<&T>) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.exiting_main.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_exiting_main`](Port::try_on_exiting_main).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_exiting_main(&self, hook: impl FnMut(Option<&T>) -> Verdict + 'static) {
        self.try_on_exiting_main(hook).throw();
    }

    /// Subscribes to sublevel entrances.
    pub fn try_on_entering_sub(
        &self,
        hook: impl FnMut(&T) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.entering_sub.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_entering_sub`](Port::try_on_entering_sub).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_entering_sub(&self, hook: impl FnMut(&T) -> Verdict + 'static) {
        self.try_on_entering_sub(hook).throw();
    }

    /// Subscribes to sublevel exits.
    pub fn try_on_exiting_sub(
        &self,
        hook: impl FnMut(Option<&T>) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.exiting_sub.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_exiting_sub`](Port::try_on_exiting_sub).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_exiting_sub(&self, hook: impl FnMut(Option<&T>) -> Verdict + 'static) {
        self.try_on_exiting_sub(hook).throw();
    }

    /// Subscribes to every accepted entrance, main or sub.
    pub fn try_on_entering_level(
        &self,
        hook: impl FnMut(&T) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.entering_level.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_entering_level`](Port::try_on_entering_level).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_entering_level(&self, hook: impl FnMut(&T) -> Verdict + 'static) {
        self.try_on_entering_level(hook).throw();
    }

    /// Subscribes to every accepted exit, main or sub.
    pub fn try_on_exiting_level(
        &self,
        hook: impl FnMut(Option<&T>) -> Verdict + 'static,
    ) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.exiting_level.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_exiting_level`](Port::try_on_exiting_level).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_exiting_level(&self, hook: impl FnMut(Option<&T>) -> Verdict + 'static) {
        self.try_on_exiting_level(hook).throw();
    }

    /// Subscribes to the early-stop notification.
    pub fn try_on_stopped(&self, hook: impl FnMut() + 'static) -> Result<(), ReentrantDispatch> {
        self.guarded(|registry| registry.stopped.borrow_mut().push(Box::new(hook)))
    }

    /// As [`try_on_stopped`](Port::try_on_stopped).
    ///
    /// # Panics
    /// Panics with [`ReentrantDispatch`] when called while an event is dispatching.
    pub fn on_stopped(&self, hook: impl FnMut() + 'static) {
        self.try_on_stopped(hook).throw();
    }
}

impl<T> Clone for Port<T> {
    fn clone(&self) -> Self {
        Port {
            registry: Rc::clone(&self.registry),
        }
    }
}
