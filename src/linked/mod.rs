//! The linked containers: chains of separately allocated nodes, the lists and trees built over
//! them, and the node handles and enumerators which walk them.
//!
//! The raw chain lives in [`chain`] and is shared by every doubly linked container through the
//! sealed [`Chain`] trait, which is also how the counted variants keep their counts accurate no
//! matter which surface a mutation comes through.

pub mod chain;
pub mod handle;
pub mod list;
pub mod single;
pub mod tree;

pub use chain::Chain;
pub use handle::{NodeMut, NodeRef};
