use std::fmt::{self, Debug, Formatter};

use crate::enumerate::Enumerable;
use crate::linked::handle::NodeMut;
use crate::linked::list::{DoublyLinkedList, ListEnumerator};

/// A node of a [`Tree`]: one value plus an owned list of child nodes.
///
/// The children are an ordinary [`DoublyLinkedList`], so everything the list offers (node
/// handles, splicing, enumerators) applies to a level of a tree as well. Nested trees are
/// built by pushing nodes that already carry children of their own.
pub struct TreeNode<T> {
    value: T,
    children: DoublyLinkedList<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// A leaf node holding `value`, with no children.
    pub const fn new(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            children: DoublyLinkedList::new(),
        }
    }

    /// A node holding `value` with the given children, in order.
    pub fn with_children(value: T, children: impl IntoIterator<Item = TreeNode<T>>) -> TreeNode<T> {
        let mut node = TreeNode::new(value);
        node.children.push_back_values(children);
        node
    }

    /// The value stored at this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The value stored at this node, mutably.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Discards the children, returning the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The child list of this node.
    pub const fn children(&self) -> &DoublyLinkedList<TreeNode<T>> {
        &self.children
    }

    /// The child list of this node, mutably.
    pub const fn children_mut(&mut self) -> &mut DoublyLinkedList<TreeNode<T>> {
        &mut self.children
    }

    /// Whether this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a subtree as the last child, returning a handle onto its list node.
    pub fn push_child(
        &mut self,
        child: TreeNode<T>,
    ) -> NodeMut<'_, DoublyLinkedList<TreeNode<T>>> {
        self.children.push_back(child)
    }

    /// Appends a leaf holding `value` as the last child.
    pub fn add_leaf(&mut self, value: T) -> NodeMut<'_, DoublyLinkedList<TreeNode<T>>> {
        self.push_child(TreeNode::new(value))
    }
}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            self.value.fmt(f)
        } else {
            f.debug_struct("TreeNode")
                .field("value", &self.value)
                .field("children", &self.children)
                .finish()
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        TreeNode {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}

/// A tree: a doubly linked list of [`TreeNode`]s at the root level, each owning its own child
/// list. The substrate the recursive enumerator walks.
pub struct Tree<T> {
    roots: DoublyLinkedList<TreeNode<T>>,
}

impl<T> Tree<T> {
    pub const fn new() -> Tree<T> {
        Tree {
            roots: DoublyLinkedList::new(),
        }
    }

    /// Whether the tree has no root nodes.
    pub const fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether the tree has at least one root node.
    pub const fn has_items(&self) -> bool {
        self.roots.has_items()
    }

    /// The root-level list.
    pub const fn roots(&self) -> &DoublyLinkedList<TreeNode<T>> {
        &self.roots
    }

    /// The root-level list, mutably.
    pub const fn roots_mut(&mut self) -> &mut DoublyLinkedList<TreeNode<T>> {
        &mut self.roots
    }

    /// Appends a subtree as the last root, returning a handle onto its list node.
    pub fn push_root(&mut self, root: TreeNode<T>) -> NodeMut<'_, DoublyLinkedList<TreeNode<T>>> {
        self.roots.push_back(root)
    }

    /// Appends a root leaf holding `value`.
    pub fn add_root(&mut self, value: T) -> NodeMut<'_, DoublyLinkedList<TreeNode<T>>> {
        self.push_root(TreeNode::new(value))
    }

    /// Removes every root (and thereby every descendant).
    pub fn clear(&mut self) {
        self.roots.clear();
    }
}

impl<T> Enumerable for Tree<T> {
    type Item = TreeNode<T>;
    type Enumerator<'a>
        = ListEnumerator<'a, TreeNode<T>>
    where
        Self: 'a;

    /// An enumerator over the root nodes only; for the depth-first walk see
    /// [`try_recursive_enumerator`](Tree::try_recursive_enumerator).
    fn try_enumerator(&self) -> Option<ListEnumerator<'_, TreeNode<T>>> {
        self.roots.try_enumerator()
    }

    fn has_items(&self) -> bool {
        self.roots.has_items()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tree").field(&self.roots).finish()
    }
}

impl<T> FromIterator<TreeNode<T>> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = TreeNode<T>>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.roots.push_back_values(iter);
        tree
    }
}
