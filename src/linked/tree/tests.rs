#![cfg(test)]

use crate::enumerate::{Enumerable, Enumerator};

use super::*;

fn sample() -> Tree<u32> {
    // 1 and 4 at the root, 2 and 3 under 1.
    let mut tree = Tree::new();
    tree.push_root(TreeNode::with_children(
        1,
        [TreeNode::new(2), TreeNode::new(3)],
    ));
    tree.add_root(4);
    tree
}

#[test]
fn new_tree_is_empty() {
    let tree: Tree<u32> = Tree::new();
    assert!(tree.is_empty(), "A new tree should be empty");
    assert!(
        tree.try_enumerator().is_none(),
        "An empty tree should have nothing to enumerate"
    );
}

#[test]
fn build_and_inspect() {
    let tree = sample();
    assert!(tree.has_items(), "The tree should have roots");

    let first = tree.roots().front().unwrap();
    assert_eq!(*first.value(), 1);
    assert!(!first.is_leaf(), "The first root has children");
    assert_eq!(
        first.children().iter().map(|node| *node.value()).collect::<Vec<_>>(),
        [2, 3],
        "The children should sit in insertion order"
    );

    let last = tree.roots().back().unwrap();
    assert_eq!(*last.value(), 4);
    assert!(last.is_leaf(), "The last root should be a leaf");
}

#[test]
fn add_leaf_appends() {
    let mut node = TreeNode::new(0);
    node.add_leaf(1);
    node.add_leaf(2);
    assert_eq!(
        node.children().iter().map(|child| *child.value()).collect::<Vec<_>>(),
        [1, 2]
    );
}

#[test]
fn enumerator_covers_roots_only() {
    let tree = sample();
    let mut e = tree.try_enumerator().unwrap();
    let mut roots = Vec::new();
    while e.advance() {
        roots.push(*e.current().unwrap().value());
    }
    assert_eq!(roots, [1, 4], "Only the root level should be yielded");
}

#[test]
fn clear_removes_everything() {
    let mut tree = sample();
    tree.clear();
    assert!(tree.is_empty(), "A cleared tree should be empty");
}

#[test]
fn node_equality_is_structural() {
    let a = TreeNode::with_children(1, [TreeNode::new(2)]);
    let b = TreeNode::with_children(1, [TreeNode::new(2)]);
    let c = TreeNode::with_children(1, [TreeNode::new(3)]);
    assert_eq!(a, b);
    assert_ne!(a, c, "Nodes with different children should not be equal");
}

#[test]
fn clone_is_deep() {
    let original = TreeNode::with_children(1, [TreeNode::new(2)]);
    let mut copy = original.clone();
    copy.add_leaf(3);
    assert_eq!(original.children().iter().count(), 1);
    assert_eq!(
        copy.children().iter().count(),
        2,
        "Mutating the clone should not affect the original"
    );
}
