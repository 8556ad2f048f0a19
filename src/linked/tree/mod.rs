//! A tree of values built from doubly linked lists: [`Tree`] holds the root level, each
//! [`TreeNode`] owns a list of children.

mod tree;

mod tests;

pub use tree::*;
