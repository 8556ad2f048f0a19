use std::ptr::NonNull;

pub(crate) type SinglyLink<T> = Option<SinglyPtr<T>>;

/// A copyable pointer to a heap node with a single forward link.
#[derive(Debug)]
pub(crate) struct SinglyPtr<T>(NonNull<SinglyNode<T>>);

pub(crate) struct SinglyNode<T> {
    pub(crate) value: T,
    pub(crate) next: SinglyLink<T>,
}

impl<T> SinglyPtr<T> {
    pub(crate) fn detached(value: T) -> SinglyPtr<T> {
        SinglyPtr(NonNull::from(Box::leak(Box::new(SinglyNode {
            value,
            next: None,
        }))))
    }

    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive while linked into its container; callers tie the returned
        // lifetime to a borrow of that container.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value; mutation requires exclusive access to the container.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn next<'a>(&self) -> &'a SinglyLink<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut SinglyLink<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Frees the node, moving its contents out. The pointer is dangling afterwards.
    pub(crate) fn take_node(self) -> SinglyNode<T> {
        // SAFETY: The pointer came from Box::leak in detached and is only taken once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for SinglyPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SinglyPtr<T> {}

impl<T> PartialEq for SinglyPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
