use crate::enumerate::{Anchored, Enumerable, Enumerator, Lifecycle, Phase, Reset};
use crate::linked::list::{CountedList, DoublyLinkedList, ListEnumerator};
use crate::linked::tree::{Tree, TreeNode};

use super::handler::{Accept, Handler, Verdict};

/// An element that can open an enumerator over its children, making a structure of such
/// elements walkable depth-first.
///
/// The child enumerator must be [`Anchored`], because the walker holds one frame per open level
/// and each frame's enumerator has to keep working while deeper frames come and go.
pub trait Nested {
    /// The enumerator over this element's children, borrowing the element.
    type Walk<'a>: Anchored<'a, Item = Self>
    where
        Self: 'a;

    /// Opens an enumerator over the children, or [`None`] when there are none to enumerate.
    fn try_children(&self) -> Option<Self::Walk<'_>>;
}

enum Walk<W> {
    Unopened,
    Open(W),
}

/// One open level of the traversal: the item being descended through and the enumerator over
/// its children, opened lazily on the first descent.
struct Frame<'a, T: Nested> {
    item: &'a T,
    walk: Walk<T::Walk<'a>>,
    main: bool,
}

/// What the frame stack asked for on one pass of the advance loop.
enum Step<'a, T> {
    Enter(&'a T, bool),
    Exit,
}

/// A depth-first enumerator over a structure of [`Nested`] items: yields every reachable item,
/// parents before children, consulting a [`Handler`] at every entrance and exit.
///
/// The walker owns the top-level enumerator and a stack of frames, one per open level; the
/// current element is always the item of the deepest frame. A handler can veto a subtree
/// ([`Verdict::Skip`]), abort the whole traversal ([`Verdict::Abort`]) or merely observe; every
/// accepted entrance is balanced by exactly one exit unless the traversal is aborted or
/// [`stop`](Enumerator::stop)ped.
///
/// The *stacked* flavor passes the closing item to the exit hooks; the plain flavor passes
/// [`None`]. Resettable iff the top-level enumerator is; a reset discards the stack.
pub struct RecursiveEnumerator<'a, E, H = Accept>
where
    E: Anchored<'a>,
    E::Item: Nested,
    H: Handler<E::Item>,
{
    top: E,
    frames: Vec<Frame<'a, E::Item>>,
    handler: H,
    stacked: bool,
    life: Lifecycle,
}

impl<'a, E> RecursiveEnumerator<'a, E>
where
    E: Anchored<'a>,
    E::Item: Nested,
{
    /// A plain walker over `top` with the all-accepting handler.
    pub const fn new(top: E) -> RecursiveEnumerator<'a, E> {
        RecursiveEnumerator::with_handler(top, Accept)
    }

    /// A stacked walker over `top` with the all-accepting handler.
    pub const fn stacked(top: E) -> RecursiveEnumerator<'a, E> {
        RecursiveEnumerator::stacked_with_handler(top, Accept)
    }
}

impl<'a, E, H> RecursiveEnumerator<'a, E, H>
where
    E: Anchored<'a>,
    E::Item: Nested,
    H: Handler<E::Item>,
{
    /// A plain walker over `top`, consulting `handler`.
    pub const fn with_handler(top: E, handler: H) -> RecursiveEnumerator<'a, E, H> {
        RecursiveEnumerator::build(top, handler, false)
    }

    /// A stacked walker over `top`, consulting `handler` with the closing item on exits.
    pub const fn stacked_with_handler(top: E, handler: H) -> RecursiveEnumerator<'a, E, H> {
        RecursiveEnumerator::build(top, handler, true)
    }

    const fn build(top: E, handler: H, stacked: bool) -> RecursiveEnumerator<'a, E, H> {
        RecursiveEnumerator {
            top,
            frames: Vec::new(),
            handler,
            stacked,
            life: Lifecycle::new(),
        }
    }

    /// Shared access to the handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Discards the walker, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// How many levels are currently open. Zero when not started.
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    fn walk(&mut self) -> bool {
        // Parked terminal while hooks run; a panic leaves the enumerator inert.
        self.life.complete();
        loop {
            let step = if self.frames.is_empty() {
                if !self.top.advance() {
                    return false;
                }
                // UNWRAP: A successful advance leaves the enumerator on an element.
                Step::Enter(self.top.current_anchored().unwrap(), true)
            } else {
                // UNWRAP: The stack was just checked to be non-empty.
                let frame = self.frames.last_mut().unwrap();
                if matches!(frame.walk, Walk::Unopened)
                    && let Some(children) = frame.item.try_children()
                {
                    frame.walk = Walk::Open(children);
                }
                match &mut frame.walk {
                    Walk::Open(children) => {
                        if children.advance() {
                            // UNWRAP: As above.
                            Step::Enter(children.current_anchored().unwrap(), false)
                        } else {
                            Step::Exit
                        }
                    },
                    Walk::Unopened => Step::Exit,
                }
            };
            match step {
                Step::Enter(item, main) => match self.enter(item, main) {
                    Verdict::Proceed => return true,
                    Verdict::Skip => {},
                    Verdict::Abort => return false,
                },
                Step::Exit => {
                    if !self.exit() {
                        return false;
                    }
                },
            }
        }
    }

    /// Runs the entrance hooks for `item` and, if they proceed, pushes its frame and yields it.
    fn enter(&mut self, item: &'a E::Item, main: bool) -> Verdict {
        let gate = if main {
            self.handler.on_entering_main(item)
        } else {
            self.handler.on_entering_sub(item)
        };
        let verdict = match gate {
            Verdict::Proceed => self.handler.on_entering_level(item),
            vetoed => vetoed,
        };
        if verdict.is_proceed() {
            self.frames.push(Frame {
                item,
                walk: Walk::Unopened,
                main,
            });
            self.life.note_yield();
        }
        verdict
    }

    /// Pops the deepest frame and runs its exit hooks, reporting whether the traversal goes on.
    fn exit(&mut self) -> bool {
        // UNWRAP: Only called while a frame is on the stack.
        let frame = self.frames.pop().unwrap();
        let cookie = if self.stacked { Some(frame.item) } else { None };
        let gate = if frame.main {
            self.handler.on_exiting_main(cookie)
        } else {
            self.handler.on_exiting_sub(cookie)
        };
        match gate {
            Verdict::Proceed => !self.handler.on_exiting_level(cookie).is_abort(),
            // A skipped exit suppresses the paired level hook; the walk itself goes on.
            Verdict::Skip => true,
            Verdict::Abort => false,
        }
    }
}

impl<'a, E, H> Enumerator for RecursiveEnumerator<'a, E, H>
where
    E: Anchored<'a>,
    E::Item: Nested,
    H: Handler<E::Item>,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        match self.life.phase() {
            Phase::Fresh if !self.handler.on_starting() => {
                self.life.complete();
                false
            },
            Phase::Fresh | Phase::Started => self.walk(),
            Phase::Completed | Phase::Stopped => false,
        }
    }

    fn current(&self) -> Option<&E::Item> {
        self.current_anchored()
    }

    fn stop(&mut self) {
        if self.life.stop() {
            self.frames.clear();
            self.top.stop();
            self.handler.on_stopped();
        }
    }

    fn try_reset(&mut self) -> Reset {
        if !self.top.is_reset_supported() {
            return Reset::Unsupported;
        }
        self.stop();
        match self.top.try_reset() {
            Reset::Done => {
                self.frames.clear();
                self.life.rewind();
                Reset::Done
            },
            refused => refused,
        }
    }

    fn is_reset_supported(&self) -> bool {
        self.top.is_reset_supported()
    }

    fn phase(&self) -> Phase {
        self.life.phase()
    }

    fn has_processed_items(&self) -> bool {
        self.life.has_processed()
    }
}

impl<'a, E, H> Anchored<'a> for RecursiveEnumerator<'a, E, H>
where
    E: Anchored<'a>,
    E::Item: Nested,
    H: Handler<E::Item>,
{
    fn current_anchored(&self) -> Option<&'a E::Item> {
        match self.life.phase() {
            Phase::Started => self.frames.last().map(|frame| frame.item),
            _ => None,
        }
    }
}

impl<T: Nested> DoublyLinkedList<T> {
    /// A plain depth-first enumerator over the list's items and their descendants, or [`None`]
    /// when the list is empty.
    pub fn try_recursive_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>>> {
        Some(RecursiveEnumerator::new(self.try_enumerator()?))
    }

    /// As [`try_recursive_enumerator`](DoublyLinkedList::try_recursive_enumerator), consulting
    /// `handler`.
    pub fn try_recursive_enumerator_with<H: Handler<T>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>, H>> {
        Some(RecursiveEnumerator::with_handler(self.try_enumerator()?, handler))
    }

    /// The stacked flavor: exit hooks receive the closing item.
    pub fn try_recursive_stacked_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>>> {
        Some(RecursiveEnumerator::stacked(self.try_enumerator()?))
    }

    /// The stacked flavor, consulting `handler`.
    pub fn try_recursive_stacked_enumerator_with<H: Handler<T>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>, H>> {
        Some(RecursiveEnumerator::stacked_with_handler(self.try_enumerator()?, handler))
    }
}

impl<T: Nested> CountedList<T> {
    /// A plain depth-first enumerator over the list's items and their descendants, or [`None`]
    /// when the list is empty.
    pub fn try_recursive_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>>> {
        Some(RecursiveEnumerator::new(self.try_enumerator()?))
    }

    /// As [`try_recursive_enumerator`](CountedList::try_recursive_enumerator), consulting
    /// `handler`.
    pub fn try_recursive_enumerator_with<H: Handler<T>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>, H>> {
        Some(RecursiveEnumerator::with_handler(self.try_enumerator()?, handler))
    }

    /// The stacked flavor: exit hooks receive the closing item.
    pub fn try_recursive_stacked_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>>> {
        Some(RecursiveEnumerator::stacked(self.try_enumerator()?))
    }

    /// The stacked flavor, consulting `handler`.
    pub fn try_recursive_stacked_enumerator_with<H: Handler<T>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, T>, H>> {
        Some(RecursiveEnumerator::stacked_with_handler(self.try_enumerator()?, handler))
    }
}

impl<T> Nested for TreeNode<T> {
    type Walk<'a>
        = ListEnumerator<'a, TreeNode<T>>
    where
        Self: 'a;

    fn try_children(&self) -> Option<ListEnumerator<'_, TreeNode<T>>> {
        self.children().try_enumerator()
    }
}

impl<T> Tree<T> {
    /// A plain depth-first enumerator over every node of the tree, parents before children, or
    /// [`None`] when the tree is empty.
    pub fn try_recursive_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, TreeNode<T>>>> {
        self.roots().try_recursive_enumerator()
    }

    /// As [`try_recursive_enumerator`](Tree::try_recursive_enumerator), consulting `handler`.
    pub fn try_recursive_enumerator_with<H: Handler<TreeNode<T>>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, TreeNode<T>>, H>> {
        self.roots().try_recursive_enumerator_with(handler)
    }

    /// The stacked flavor: exit hooks receive the closing node.
    pub fn try_recursive_stacked_enumerator(
        &self,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, TreeNode<T>>>> {
        self.roots().try_recursive_stacked_enumerator()
    }

    /// The stacked flavor, consulting `handler`.
    pub fn try_recursive_stacked_enumerator_with<H: Handler<TreeNode<T>>>(
        &self,
        handler: H,
    ) -> Option<RecursiveEnumerator<'_, ListEnumerator<'_, TreeNode<T>>, H>> {
        self.roots().try_recursive_stacked_enumerator_with(handler)
    }
}
