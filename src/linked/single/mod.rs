//! The singly linked containers: stacks and queues, plain and counted.
//!
//! Both are built on a chain of nodes with a single forward link. The stack works at the head
//! alone; the queue keeps an extra tail pointer so its append is also `O(1)`. For anything
//! richer (node handles, bidirectional walks, splicing) use the doubly linked
//! [`list`](super::list) types.

mod enumerator;
mod node;
mod queue;
mod stack;

mod tests;

pub use enumerator::*;
pub use queue::*;
pub use stack::{CountedStack, Stack, StackIntoIter, StackIter};
