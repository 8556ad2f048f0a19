//! The doubly linked lists and their enumerators.

mod counted;
mod doubly_linked_list;
mod drain;
mod enumerator;
mod iter;
mod view;

mod tests;

pub use counted::*;
pub use doubly_linked_list::DoublyLinkedList;
pub use drain::*;
pub use enumerator::*;
pub use iter::{IntoIter, Iter, IterMut};
pub use view::*;
