#![cfg(test)]

use crate::enumerate::{Countable, Enumerable, Enumerator, Phase, Reset};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

use super::*;

fn collect<E: Enumerator>(enumerator: &mut E) -> Vec<E::Item>
where
    E::Item: Clone,
{
    let mut items = Vec::new();
    while enumerator.advance() {
        items.push(enumerator.current().unwrap().clone());
    }
    items
}

#[test]
fn new_list_is_empty() {
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.is_empty(), "A new list should be empty");
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.pop_front(), None, "Popping an empty list should do nothing");
    assert_eq!(list.pop_back(), None);
    assert!(list.try_enumerator().is_none(), "An empty list should have nothing to enumerate");
    assert!(list.first_node().is_none());
}

#[test]
fn push_and_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    list.verify_double_links();

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert!(list.is_empty(), "Popping every element should leave the list empty");
}

#[test]
fn enumerates_in_both_directions() {
    let list = DoublyLinkedList::from([1, 2, 3]);

    let mut forward = list.try_enumerator().unwrap();
    assert_eq!(forward.phase(), Phase::Fresh);
    assert_eq!(collect(&mut forward), [1, 2, 3]);
    assert_eq!(forward.phase(), Phase::Completed);

    let mut backward = list.try_enumerator_back().unwrap();
    assert_eq!(collect(&mut backward), [3, 2, 1], "The backward walk should reverse the order");
}

#[test]
fn enumerator_reset_returns_to_start() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    let mut enumerator = list.try_enumerator().unwrap();
    assert!(enumerator.is_reset_supported());
    assert!(enumerator.advance());
    assert!(enumerator.advance());

    assert_eq!(enumerator.try_reset(), Reset::Done);
    assert_eq!(enumerator.phase(), Phase::Fresh);
    assert!(!enumerator.has_processed_items(), "Reset should clear the processed flag");
    assert_eq!(collect(&mut enumerator), [1, 2, 3], "A reset enumerator should start over");
}

#[test]
fn enumerator_stop_is_terminal() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    let mut enumerator = list.try_enumerator().unwrap();
    assert!(enumerator.advance());
    enumerator.stop();
    assert_eq!(enumerator.phase(), Phase::Stopped);
    assert_eq!(enumerator.current(), None, "A stopped enumerator should have no current element");
    assert!(!enumerator.advance());
}

#[test]
fn iterators_walk_front_to_back() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(list, DoublyLinkedList::from([10, 20, 30]));
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn get_walks_to_the_index() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(*list.get(0), 1);
    assert_eq!(*list.get(2), 3);
    assert_eq!(list.try_get(3), None, "An index past the end should yield nothing");

    *list.get_mut(1) = 20;
    assert_eq!(list.try_get(1), Some(&20));

    assert_panics!(
        {
            DoublyLinkedList::from([1, 2]).get(5);
        },
        "Getting past the end should panic"
    );
    assert_panics!(
        {
            DoublyLinkedList::from([1, 2]).get_mut(5);
        },
        "Getting mutably past the end should panic"
    );
}

#[test]
fn node_handles_navigate() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    let first = list.first_node().unwrap();
    assert_eq!(*first.value(), 1);
    assert!(first.prev().is_none(), "The first node should have no predecessor");

    let second = first.next().unwrap();
    assert_eq!(*second.value(), 2);
    assert_eq!(second.prev(), Some(first), "Adjacent nodes should point back at each other");

    let last = list.last_node().unwrap();
    assert_eq!(*last.value(), 3);
    assert!(last.next().is_none(), "The last node should have no successor");
    assert_eq!(second.next(), Some(last));
}

#[test]
fn handle_mutation() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    let mut node = list.first_node_mut().unwrap().into_next().unwrap();
    assert_eq!(node.replace_value(20), 2);
    assert_eq!(*node.value(), 20);
    drop(node);
    assert_eq!(list, DoublyLinkedList::from([1, 20, 3]));
}

#[test]
fn handle_insertion_splices_the_chain() {
    let mut list = DoublyLinkedList::from([1, 3]);
    let second = list.first_node_mut().unwrap().into_next().unwrap();
    let inserted = second.insert_before(2);
    assert_eq!(*inserted.value(), 2);
    drop(inserted);
    list.verify_double_links();
    assert_eq!(list, DoublyLinkedList::from([1, 2, 3]));

    // Inserting around the ends should move the list's ends.
    list.first_node_mut().unwrap().insert_before(0);
    list.last_node_mut().unwrap().insert_after(4);
    list.verify_double_links();
    assert_eq!(list.front(), Some(&0), "Inserting before the first node should create a new head");
    assert_eq!(list.back(), Some(&4), "Inserting after the last node should create a new tail");
}

#[test]
fn handle_removal_relinks_neighbours() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    let second = list.first_node_mut().unwrap().into_next().unwrap();
    assert_eq!(second.remove(), 2);
    list.verify_double_links();
    assert_eq!(list, DoublyLinkedList::from([1, 3]));

    assert_eq!(list.first_node_mut().unwrap().remove(), 1, "Removing the head should work");
    assert_eq!(list.first_node_mut().unwrap().remove(), 3);
    assert!(list.is_empty(), "Removing the only node should empty the list");
}

#[test]
fn counted_list_tracks_every_mutation() {
    let mut list = CountedList::new();
    assert_eq!(list.count(), 0);
    list.push_back_values([0, 1, 2, 3]);
    assert_eq!(list.count(), 4);
    list.verify_count();

    // Removal through a node handle must be counted too.
    let node = list.first_node_mut().unwrap().into_next().unwrap().into_next().unwrap();
    assert_eq!(*node.value(), 2);
    assert_eq!(node.remove(), 2);
    assert_eq!(list.count(), 3, "A handle removal should lower the count");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 3]);
    list.verify_count();

    list.first_node_mut().unwrap().insert_after(10);
    assert_eq!(list.count(), 4, "A handle insertion should raise the count");
    list.verify_count();

    assert_eq!(list.pop_back(), Some(3));
    list.clear();
    assert_eq!(list.count(), 0, "Clearing should zero the count");
    list.verify_count();
}

#[test]
fn counted_get_seeks_from_the_nearer_end() {
    let list: CountedList<i32> = (0..10).collect();
    assert_eq!(*list.get(1), 1);
    assert_eq!(*list.get(8), 8, "An index near the tail should be reached backwards");
    assert_eq!(list.try_get(10), None);
    assert_panics!(
        {
            let list: CountedList<i32> = (0..3).collect();
            list.get(3);
        },
        "Getting at the count should panic"
    );
}

#[test]
fn queued_consumes_front_first() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    let mut queued = list.queued();
    assert_eq!(collect(&mut queued), [1, 2, 3], "The queued drain should be FIFO");
    assert_eq!(queued.phase(), Phase::Completed);
    assert!(list.is_empty(), "A completed drain should leave the list empty");
}

#[test]
fn stacked_consumes_back_first() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(collect(&mut list.stacked()), [3, 2, 1], "The stacked drain should be LIFO");
    assert!(list.is_empty());
}

#[test]
fn drains_are_lazy() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);
    {
        let mut queued = list.queued();
        assert!(queued.advance());
        assert_eq!(queued.current(), Some(&1));
        assert!(queued.advance());
        queued.stop();
        assert_eq!(queued.current(), None);
    }
    assert_eq!(
        list,
        DoublyLinkedList::from([3, 4]),
        "Elements not advanced over should stay in the list"
    );
}

#[test]
fn drains_cannot_reset() {
    let mut list = DoublyLinkedList::from([1, 2]);
    let mut queued = list.queued();
    assert!(!queued.is_reset_supported());
    assert!(queued.advance());
    assert_eq!(queued.try_reset(), Reset::Unsupported, "The consumed elements are gone");
    assert_eq!(queued.phase(), Phase::Started, "A refused reset should not alter the phase");
}

#[test]
fn counted_drains_keep_the_count() {
    let mut list: CountedList<i32> = [1, 2, 3].into();
    {
        let mut stacked = list.stacked();
        assert!(stacked.advance());
        assert_eq!(stacked.current(), Some(&3));
    }
    assert_eq!(list.count(), 2, "Each drained element should be counted out");
    list.verify_count();

    assert_eq!(collect(&mut list.queued()), [1, 2]);
    assert_eq!(list.count(), 0);
}

#[test]
fn append_moves_everything() {
    let mut list = DoublyLinkedList::from([1, 2]);
    list.append(DoublyLinkedList::from([3, 4]));
    list.verify_double_links();
    assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 4]));

    let mut empty = DoublyLinkedList::new();
    empty.append(DoublyLinkedList::from([5]));
    assert_eq!(empty.front(), Some(&5), "Appending onto an empty list should adopt the chain");

    let mut counted: CountedList<i32> = [1].into();
    counted.append([2, 3].into());
    assert_eq!(counted.count(), 3, "Append should transfer the count");
    counted.verify_count();
}

#[test]
fn push_items_follows_enumeration_order() {
    let source = DoublyLinkedList::from([1, 2, 3]);
    let mut list = DoublyLinkedList::new();
    assert!(list.push_back_items(&source));
    assert_eq!(list, DoublyLinkedList::from([1, 2, 3]));

    assert!(list.push_front_items(&source));
    assert_eq!(
        list,
        DoublyLinkedList::from([3, 2, 1, 1, 2, 3]),
        "Each front push should land in front of the previous"
    );
}

#[test]
fn push_items_declines_without_an_enumerator() {
    let source: DoublyLinkedList<i32> = DoublyLinkedList::new();
    let mut list = DoublyLinkedList::from([1]);
    assert!(!list.push_back_items(&source), "An empty source should be reported");
    assert_eq!(list, DoublyLinkedList::from([1]), "A declined push should insert nothing");
}

#[test]
fn node_enumerator_yields_handles() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    let mut nodes = list.try_node_enumerator().unwrap();
    assert!(nodes.advance());
    let first = *nodes.current().unwrap();
    assert_eq!(*first.value(), 1);
    assert_eq!(
        first.next().map(|node| *node.value()),
        Some(2),
        "A yielded handle should still navigate sideways"
    );

    let mut seen = Vec::new();
    seen.push(*first.value());
    while nodes.advance() {
        seen.push(*nodes.current().unwrap().value());
    }
    assert_eq!(seen, [1, 2, 3]);

    let mut backward = list.try_node_enumerator_back().unwrap();
    assert!(backward.advance());
    assert_eq!(*backward.current().unwrap().value(), 3);
}

#[test]
fn read_only_view_shares_the_nodes() {
    let list: CountedList<i32> = [1, 2, 3].into();
    let view = list.as_read_only();
    assert!(!view.is_empty());
    assert_eq!(view.front(), Some(&1));
    assert_eq!(view.back(), Some(&3));
    assert_eq!(view.count(), 3);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    let mut enumerator = view.try_enumerator().unwrap();
    assert_eq!(collect(&mut enumerator), [1, 2, 3]);

    let first = view.first_node().unwrap();
    assert_eq!(first.next().map(|node| *node.value()), Some(2));
}

#[test]
fn std_trait_surface() {
    let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(list, DoublyLinkedList::from([1, 2, 3]));
    assert_eq!(list.clone(), list, "A clone should compare equal to its source");
    assert_ne!(list, DoublyLinkedList::from([1, 2]));

    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");

    let counted: CountedList<i32> = list.iter().copied().collect();
    assert_eq!(Countable::count(&counted), 3);
    assert_eq!(format!("{counted}"), "(1) -> (2) -> (3)");
    assert_eq!(counted.into_inner(), DoublyLinkedList::from([1, 2, 3]));
}

#[test]
fn drop_releases_every_node() {
    let drops = CountedDrop::new(0);
    {
        let mut list = DoublyLinkedList::new();
        for _ in 0..5 {
            list.push_back(drops.clone());
        }
        let _removed = list.first_node_mut().unwrap().remove();
        let mut queued = list.queued();
        queued.advance();
    }
    assert_eq!(*drops.borrow(), 5, "Every node should be released exactly once");
}
