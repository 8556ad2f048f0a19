use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was past the end of the collection it was used on.
#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A value was demanded from a collection that holds none.
#[derive(Debug)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// Traversal event machinery was re-entered while a dispatch was already running.
#[derive(Debug)]
pub struct ReentrantDispatch;

impl Display for ReentrantDispatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Traversal events cannot be changed or raised during dispatch!")
    }
}

impl Error for ReentrantDispatch {}

/// Any of the ways a positional access can fail, for callers that want one error type.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum PositionError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
}
