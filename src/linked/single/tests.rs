#![cfg(test)]

use crate::enumerate::{Countable, Enumerable, Enumerator, Phase, Reset};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

use super::*;

#[test]
fn stack_is_lifo() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.try_peek(), Some(&3), "The last push should sit on top");
    assert_eq!(stack.pop(), 3);
    assert_eq!(stack.pop(), 2);
    assert_eq!(stack.pop(), 1);
    assert!(stack.is_empty(), "Popping everything should leave the stack empty");
    assert_eq!(stack.try_pop(), None);
}

#[test]
fn queue_is_fifo() {
    let mut queue = Queue::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(queue.try_peek(), Some(&1), "The first push should sit at the front");
    assert_eq!(queue.pop(), 1);
    assert_eq!(queue.pop(), 2);
    queue.push(4);
    assert_eq!(queue.pop(), 3);
    assert_eq!(queue.pop(), 4, "A push after pops should still come out last");
    assert!(queue.is_empty());
}

#[test]
fn queue_tail_resets_when_emptied() {
    let mut queue = Queue::new();
    queue.push(1);
    assert_eq!(queue.pop(), 1);
    queue.push(2);
    assert_eq!(queue.try_peek(), Some(&2), "A drained queue should accept new pushes at the head");
}

#[test]
fn empty_access_panics() {
    assert_panics!(
        {
            Stack::<i32>::new().peek();
        },
        "Peeking an empty stack should panic"
    );
    assert_panics!(
        {
            Stack::<i32>::new().pop();
        },
        "Popping an empty stack should panic"
    );
    assert_panics!(
        {
            Queue::<i32>::new().pop();
        },
        "Popping an empty queue should panic"
    );
}

#[test]
fn stack_iteration_is_top_down() {
    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn queue_iteration_is_front_first() {
    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn counted_stack_tracks_count() {
    let mut stack = CountedStack::new();
    assert_eq!(stack.count(), 0);
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.count(), 2, "Pushes should raise the count");
    assert_eq!(stack.pop(), 2);
    assert_eq!(stack.count(), 1, "Pops should lower the count");
    assert_eq!(stack.try_pop(), Some(1));
    assert_eq!(stack.try_pop(), None);
    assert_eq!(stack.count(), 0, "A failed pop should not move the count");
    assert!(stack.is_empty());
}

#[test]
fn counted_queue_tracks_count() {
    let mut queue = CountedQueue::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(Countable::count(&queue), 3);
    assert_eq!(queue.pop(), 1);
    assert_eq!(queue.count(), 2);
    queue.clear();
    assert_eq!(queue.count(), 0, "Clearing should zero the count");
    assert!(queue.is_empty());
}

#[test]
fn enumerator_walks_the_chain() {
    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    let mut enumerator = queue.try_enumerator().unwrap();
    assert_eq!(enumerator.phase(), Phase::Fresh);

    let mut seen = Vec::new();
    while enumerator.advance() {
        seen.push(*enumerator.current().unwrap());
    }
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(enumerator.phase(), Phase::Completed);
    assert!(enumerator.has_processed_items());
}

#[test]
fn enumerator_reset_returns_to_start() {
    let stack: Stack<i32> = [1, 2].into_iter().collect();
    let mut enumerator = stack.try_enumerator().unwrap();
    assert!(enumerator.is_reset_supported());
    assert!(enumerator.advance());
    assert_eq!(enumerator.current(), Some(&2));

    assert_eq!(enumerator.try_reset(), Reset::Done);
    assert_eq!(enumerator.phase(), Phase::Fresh);
    assert!(enumerator.advance());
    assert_eq!(enumerator.current(), Some(&2), "A reset enumerator should start over from the top");
}

#[test]
fn enumerator_stop_is_terminal() {
    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    let mut enumerator = queue.try_enumerator().unwrap();
    assert!(enumerator.advance());
    enumerator.stop();
    assert_eq!(enumerator.phase(), Phase::Stopped);
    assert_eq!(enumerator.current(), None);
    assert!(!enumerator.advance(), "A stopped enumerator should refuse to advance");
}

#[test]
fn empty_containers_decline_enumeration() {
    let stack = Stack::<i32>::new();
    assert!(stack.try_enumerator().is_none());
    assert!(!Enumerable::has_items(&stack));

    let queue = CountedQueue::<i32>::new();
    assert!(queue.try_enumerator().is_none());
    assert!(!Enumerable::has_items(&queue));
}

#[test]
fn display_shows_the_chain() {
    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{queue}"), "(1) -> (2) -> (3)");

    let stack: Stack<i32> = [1, 2].into_iter().collect();
    assert_eq!(format!("{stack}"), "(2) -> (1)", "The stack should print top down");
}

#[test]
fn drop_releases_every_node() {
    let drops = CountedDrop::new(0);
    {
        let mut stack = Stack::new();
        for _ in 0..4 {
            stack.push(drops.clone());
        }
        let _popped = stack.pop();
    }
    assert_eq!(*drops.borrow(), 4, "Every node should be released exactly once");

    let drops = CountedDrop::new(0);
    {
        let mut queue = CountedQueue::new();
        for _ in 0..3 {
            queue.push(drops.clone());
        }
        queue.clear();
        assert_eq!(queue.count(), 0);
    }
    assert_eq!(*drops.borrow(), 3, "Clearing should drop every queued value");
}
