#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::enumerate::{Enumerator, Phase, Reset};
use crate::linked::list::{CountedList, DoublyLinkedList};
use crate::linked::tree::{Tree, TreeNode};

use super::*;

// 1
// ├── 2
// ├── 3
// │   ├── 4
// │   └── 5
// └── 6
fn sample() -> Tree<u32> {
    let mut tree = Tree::new();
    tree.push_root(TreeNode::with_children(
        1,
        [
            TreeNode::new(2),
            TreeNode::with_children(3, [TreeNode::new(4), TreeNode::new(5)]),
            TreeNode::new(6),
        ],
    ));
    tree
}

fn values<E: Enumerator<Item = TreeNode<u32>>>(enumerator: &mut E) -> Vec<u32> {
    let mut seen = Vec::new();
    while enumerator.advance() {
        seen.push(*enumerator.current().unwrap().value());
    }
    seen
}

/// Records every hook call, with optional scripted verdicts.
#[derive(Debug, Default)]
struct Journal {
    log: Vec<String>,
    refuse_start: bool,
    skip_sub_at: Option<u32>,
    abort_sub_at: Option<u32>,
    skip_exit_sub_at: Option<u32>,
}

impl Journal {
    fn count_of(&self, prefix: &str) -> usize {
        self.log.iter().filter(|entry| entry.starts_with(prefix)).count()
    }
}

impl Handler<TreeNode<u32>> for Journal {
    fn on_starting(&mut self) -> bool {
        self.log.push("starting".into());
        !self.refuse_start
    }

    fn on_entering_main(&mut self, item: &TreeNode<u32>) -> Verdict {
        self.log.push(format!("enter_main({})", item.value()));
        Verdict::Proceed
    }

    fn on_exiting_main(&mut self, item: Option<&TreeNode<u32>>) -> Verdict {
        self.log.push(format!("exit_main({:?})", item.map(TreeNode::value)));
        Verdict::Proceed
    }

    fn on_entering_sub(&mut self, item: &TreeNode<u32>) -> Verdict {
        self.log.push(format!("enter_sub({})", item.value()));
        if self.skip_sub_at == Some(*item.value()) {
            Verdict::Skip
        } else if self.abort_sub_at == Some(*item.value()) {
            Verdict::Abort
        } else {
            Verdict::Proceed
        }
    }

    fn on_exiting_sub(&mut self, item: Option<&TreeNode<u32>>) -> Verdict {
        self.log.push(format!("exit_sub({:?})", item.map(TreeNode::value)));
        match (item, self.skip_exit_sub_at) {
            (Some(node), Some(skip)) if *node.value() == skip => Verdict::Skip,
            _ => Verdict::Proceed,
        }
    }

    fn on_entering_level(&mut self, item: &TreeNode<u32>) -> Verdict {
        self.log.push(format!("enter_level({})", item.value()));
        Verdict::Proceed
    }

    fn on_exiting_level(&mut self, item: Option<&TreeNode<u32>>) -> Verdict {
        self.log.push(format!("exit_level({:?})", item.map(TreeNode::value)));
        Verdict::Proceed
    }

    fn on_stopped(&mut self) {
        self.log.push("stopped".into());
    }
}

#[test]
fn depth_first_order() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_enumerator().unwrap();
    assert_eq!(enumerator.phase(), Phase::Fresh);
    assert_eq!(enumerator.depth(), 0);

    assert!(enumerator.advance());
    assert_eq!(*enumerator.current().unwrap().value(), 1);
    assert_eq!(enumerator.depth(), 1);

    let mut seen = vec![1];
    seen.append(&mut values(&mut enumerator));
    assert_eq!(seen, [1, 2, 3, 4, 5, 6], "The walk should yield parents before children");
    assert_eq!(enumerator.phase(), Phase::Completed);
    assert!(enumerator.has_processed_items());
    assert_eq!(enumerator.current(), None);
}

#[test]
fn forest_walks_every_root() {
    let mut tree = Tree::new();
    tree.push_root(TreeNode::with_children(1, [TreeNode::new(2)]));
    tree.add_root(3);
    let mut enumerator = tree.try_recursive_enumerator().unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3]);
}

#[test]
fn empty_tree_declines() {
    let tree: Tree<u32> = Tree::new();
    assert!(tree.try_recursive_enumerator().is_none());
    assert!(tree.try_recursive_stacked_enumerator().is_none());
}

#[test]
fn hooks_are_balanced() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_enumerator_with(Journal::default()).unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3, 4, 5, 6]);

    let journal = enumerator.into_handler();
    assert_eq!(journal.count_of("starting"), 1);
    assert_eq!(
        journal.count_of("enter_main"),
        journal.count_of("exit_main"),
        "Every accepted main entrance should be balanced by one exit"
    );
    assert_eq!(
        journal.count_of("enter_sub"),
        journal.count_of("exit_sub"),
        "Every accepted sublevel entrance should be balanced by one exit"
    );
    assert_eq!(journal.count_of("enter_level"), 6, "One level entrance per yielded item");
    assert_eq!(journal.count_of("exit_level"), 6);
    assert_eq!(
        journal.log.last().map(String::as_str),
        Some("exit_level(None)"),
        "The main exit should close the log"
    );
}

#[test]
fn entrance_hook_ordering() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_enumerator_with(Journal::default()).unwrap();
    assert!(enumerator.advance());
    assert!(enumerator.advance());
    assert_eq!(
        enumerator.handler().log,
        ["starting", "enter_main(1)", "enter_level(1)", "enter_sub(2)", "enter_level(2)"],
        "The specific entrance hook should fire before the level hook"
    );
}

#[test]
fn stacked_exits_carry_the_closing_item() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_stacked_enumerator_with(Journal::default()).unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3, 4, 5, 6]);

    let journal = enumerator.into_handler();
    let exits: Vec<&str> = journal
        .log
        .iter()
        .filter(|entry| entry.starts_with("exit_sub"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        exits,
        [
            "exit_sub(Some(2))",
            "exit_sub(Some(4))",
            "exit_sub(Some(5))",
            "exit_sub(Some(3))",
            "exit_sub(Some(6))",
        ],
        "Each exit should name the subtree that is closing, innermost first"
    );
    assert!(journal.log.contains(&"exit_main(Some(1))".to_string()));
}

#[test]
fn veto_skips_the_subtree() {
    let tree = sample();
    let journal = Journal {
        skip_sub_at: Some(3),
        ..Journal::default()
    };
    let mut enumerator = tree.try_recursive_enumerator_with(journal).unwrap();
    assert_eq!(
        values(&mut enumerator),
        [1, 2, 6],
        "The vetoed subtree should be skipped, its sibling still visited"
    );

    let journal = enumerator.into_handler();
    assert!(
        !journal.log.contains(&"enter_level(3)".to_string()),
        "A vetoed entrance should not reach the level hook"
    );
    assert!(
        !journal.log.contains(&"enter_sub(4)".to_string()),
        "Nothing under the vetoed subtree should be visited"
    );
}

#[test]
fn abort_completes_without_exits() {
    let tree = sample();
    let journal = Journal {
        abort_sub_at: Some(4),
        ..Journal::default()
    };
    let mut enumerator = tree.try_recursive_enumerator_with(journal).unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3]);
    assert_eq!(enumerator.phase(), Phase::Completed, "An abort should complete the enumerator");
    assert!(!enumerator.advance());

    let journal = enumerator.into_handler();
    assert_eq!(
        journal.log.last().map(String::as_str),
        Some("enter_sub(4)"),
        "No exit hook should fire after an abort"
    );
}

#[test]
fn exit_veto_suppresses_the_level_hook() {
    let tree = sample();
    let journal = Journal {
        skip_exit_sub_at: Some(2),
        ..Journal::default()
    };
    let mut enumerator = tree.try_recursive_stacked_enumerator_with(journal).unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3, 4, 5, 6], "The walk itself should go on");

    let journal = enumerator.into_handler();
    assert!(journal.log.contains(&"exit_sub(Some(2))".to_string()));
    assert!(
        !journal.log.contains(&"exit_level(Some(2))".to_string()),
        "A vetoed exit should suppress its paired level hook"
    );
}

#[test]
fn stop_fires_once_and_nothing_else() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_enumerator_with(Journal::default()).unwrap();
    assert!(enumerator.advance());
    assert!(enumerator.advance());
    enumerator.stop();
    assert_eq!(enumerator.phase(), Phase::Stopped);
    assert_eq!(enumerator.current(), None);
    assert!(!enumerator.advance());
    enumerator.stop();

    let journal = enumerator.into_handler();
    assert_eq!(journal.count_of("stopped"), 1, "The stop hook should fire exactly once");
    assert_eq!(journal.count_of("exit_"), 0, "Stopping should fire no pending exit hooks");
}

#[test]
fn refused_start_completes_empty() {
    let tree = sample();
    let journal = Journal {
        refuse_start: true,
        ..Journal::default()
    };
    let mut enumerator = tree.try_recursive_enumerator_with(journal).unwrap();
    assert!(!enumerator.advance(), "A refused start should complete without elements");
    assert_eq!(enumerator.phase(), Phase::Completed);
    assert!(!enumerator.has_processed_items());
}

#[test]
fn reset_discards_the_stack() {
    let tree = sample();
    let mut enumerator = tree.try_recursive_enumerator().unwrap();
    assert!(enumerator.is_reset_supported(), "A list-backed walk should be resettable");
    for _ in 0..4 {
        assert!(enumerator.advance());
    }
    assert_eq!(enumerator.depth(), 3);

    assert_eq!(enumerator.try_reset(), Reset::Done);
    assert_eq!(enumerator.phase(), Phase::Fresh);
    assert_eq!(enumerator.depth(), 0);
    assert_eq!(values(&mut enumerator), [1, 2, 3, 4, 5, 6], "A reset walk should start over");
}

#[test]
fn list_factories_walk_nested_items() {
    let mut list = DoublyLinkedList::new();
    list.push_back(TreeNode::with_children(1, [TreeNode::new(2)]));
    list.push_back(TreeNode::new(3));
    let mut enumerator = list.try_recursive_enumerator().unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3]);

    let counted: CountedList<TreeNode<u32>> = list.iter().cloned().collect();
    let mut enumerator = counted.try_recursive_stacked_enumerator().unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 3]);

    assert!(DoublyLinkedList::<TreeNode<u32>>::new().try_recursive_enumerator().is_none());
}

#[test]
fn events_dispatch_to_subscribers() {
    let tree = sample();
    let events = Events::<TreeNode<u32>>::new();
    let port = events.port();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    port.on_entering_level(move |node| {
        record.borrow_mut().push(*node.value());
        Verdict::Proceed
    });
    port.on_entering_sub(|node| {
        if *node.value() == 3 {
            Verdict::Skip
        } else {
            Verdict::Proceed
        }
    });

    let mut enumerator = tree.try_recursive_enumerator_with(events).unwrap();
    assert_eq!(values(&mut enumerator), [1, 2, 6]);
    assert_eq!(
        *seen.borrow(),
        [1, 2, 6],
        "The level event should only fire for accepted entrances"
    );
}

#[test]
fn events_combine_verdicts() {
    let tree = sample();
    let events = Events::<TreeNode<u32>>::new();
    let port = events.port();

    let calls = Rc::new(RefCell::new(0));
    let count = Rc::clone(&calls);
    port.on_entering_sub(move |_| {
        *count.borrow_mut() += 1;
        Verdict::Proceed
    });
    port.on_entering_sub(|node| {
        if *node.value() == 2 {
            Verdict::Skip
        } else {
            Verdict::Proceed
        }
    });

    let mut enumerator = tree.try_recursive_enumerator_with(events).unwrap();
    assert_eq!(values(&mut enumerator), [1, 3, 4, 5, 6], "One skip should outvote a proceed");
    assert_eq!(*calls.borrow(), 5, "Every subscriber should run on every dispatch");
}

#[test]
fn events_reject_subscription_mid_dispatch() {
    let tree = sample();
    let events = Events::<TreeNode<u32>>::new();
    let port = events.port();

    let rejected = Rc::new(RefCell::new(false));
    let outcome = Rc::clone(&rejected);
    let inner = port.clone();
    port.on_entering_main(move |_| {
        *outcome.borrow_mut() = inner.try_on_starting(|| true).is_err();
        Verdict::Proceed
    });

    let mut enumerator = tree.try_recursive_enumerator_with(events).unwrap();
    assert!(enumerator.advance());
    assert!(
        *rejected.borrow(),
        "Subscribing during a dispatch should be rejected as reentrant"
    );

    port.on_stopped(|| {});
    assert!(
        port.try_on_starting(|| true).is_ok(),
        "Subscription should work again once the dispatch has ended"
    );
}
