//! Tests for the traversal suite: visitor callbacks, iterators, and the
//! FIFO queue collaborator driving level-order.

use rstest::{fixture, rstest};
use rstree::{Bst, Queue};

#[fixture]
fn seven() -> Bst<i64> {
    Bst::from_values(1..=7)
}

fn collect<F>(run: F) -> Vec<i64>
where
    F: FnOnce(&mut dyn FnMut(&i64)),
{
    let mut visited = Vec::new();
    run(&mut |value| visited.push(*value));
    visited
}

// ============================================================
// Visitor Order Tests
// ============================================================

#[rstest]
fn given_seven_node_tree_when_level_order_then_breadth_first(seven: Bst<i64>) {
    assert_eq!(collect(|f| seven.level_order(f)), vec![4, 2, 6, 1, 3, 5, 7]);
}

#[rstest]
fn given_seven_node_tree_when_pre_order_then_node_before_subtrees(seven: Bst<i64>) {
    assert_eq!(collect(|f| seven.pre_order(f)), vec![4, 2, 1, 3, 6, 5, 7]);
}

#[rstest]
fn given_seven_node_tree_when_in_order_then_ascending(seven: Bst<i64>) {
    assert_eq!(collect(|f| seven.in_order(f)), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[rstest]
fn given_seven_node_tree_when_post_order_then_subtrees_before_node(seven: Bst<i64>) {
    assert_eq!(collect(|f| seven.post_order(f)), vec![1, 3, 2, 5, 7, 6, 4]);
}

#[test]
fn given_single_node_when_traversing_then_each_order_visits_it_once() {
    let tree = Bst::from_values(vec![9]);
    assert_eq!(collect(|f| tree.level_order(f)), vec![9]);
    assert_eq!(collect(|f| tree.pre_order(f)), vec![9]);
    assert_eq!(collect(|f| tree.in_order(f)), vec![9]);
    assert_eq!(collect(|f| tree.post_order(f)), vec![9]);
}

#[test]
fn given_empty_tree_when_traversing_then_no_node_is_visited() {
    let tree: Bst<i64> = Bst::new();
    assert!(collect(|f| tree.level_order(f)).is_empty());
    assert!(collect(|f| tree.pre_order(f)).is_empty());
    assert!(collect(|f| tree.in_order(f)).is_empty());
    assert!(collect(|f| tree.post_order(f)).is_empty());
}

#[rstest]
fn given_tree_when_traversing_twice_then_runs_are_identical(seven: Bst<i64>) {
    let first = collect(|f| seven.level_order(f));
    let second = collect(|f| seven.level_order(f));
    assert_eq!(first, second);
}

// ============================================================
// Iterator Tests
// ============================================================

#[rstest]
fn given_tree_when_iterating_then_iterators_agree_with_visitors(seven: Bst<i64>) {
    let level: Vec<i64> = seven.level_order_iter().map(|(_, v)| *v).collect();
    assert_eq!(level, collect(|f| seven.level_order(f)));

    let pre: Vec<i64> = seven.pre_order_iter().map(|(_, v)| *v).collect();
    assert_eq!(pre, collect(|f| seven.pre_order(f)));

    let inorder: Vec<i64> = seven.in_order_iter().map(|(_, v)| *v).collect();
    assert_eq!(inorder, collect(|f| seven.in_order(f)));

    let post: Vec<i64> = seven.post_order_iter().map(|(_, v)| *v).collect();
    assert_eq!(post, collect(|f| seven.post_order(f)));
}

#[rstest]
fn given_tree_when_iterating_values_then_ascending(seven: Bst<i64>) {
    let values: Vec<i64> = seven.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[rstest]
fn given_tree_when_iterating_then_ids_resolve_to_their_values(seven: Bst<i64>) {
    for (id, value) in seven.level_order_iter() {
        assert_eq!(seven.get(id), Some(value));
    }
}

// ============================================================
// Queue Collaborator Tests
// ============================================================

#[test]
fn given_queue_when_interleaving_operations_then_fifo_order_holds() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Some(1));
    queue.enqueue(3);
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}
