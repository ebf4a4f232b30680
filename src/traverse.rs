//! Traversal protocols over the tree: visitor callbacks and lazy iterators.
//!
//! Every traversal visits each live node exactly once in its fixed order and
//! terminates on any finite tree, the empty tree included. The visitor forms
//! take a closure per node; the iterator forms yield `(NodeId, &T)` pairs
//! from explicit stack/queue state so callers can pull lazily. Traversals are
//! not resumable mid-run but may be restarted from scratch at any time.

use crate::queue::Queue;
use crate::tree::{Bst, NodeId};

impl<T: Ord> Bst<T> {
    /// Breadth-first visitation, top to bottom, left to right within a level.
    ///
    /// A FIFO queue is seeded with the root; the front node is visited, its
    /// left then right child enqueued, and the front dequeued.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue = Queue::new();
        if let Some(root) = self.root() {
            queue.enqueue(root);
        }
        while let Some(&id) = queue.peek() {
            if let Some(node) = self.node(id) {
                visit(&node.value);
                if let Some(left) = node.left {
                    queue.enqueue(left);
                }
                if let Some(right) = node.right {
                    queue.enqueue(right);
                }
            }
            queue.dequeue();
        }
    }

    /// Depth-first: node, then left subtree, then right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.pre_order_at(self.root(), &mut visit);
    }

    fn pre_order_at<F>(&self, node: Option<NodeId>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = node.and_then(|id| self.node(id)) {
            visit(&node.value);
            self.pre_order_at(node.left, visit);
            self.pre_order_at(node.right, visit);
        }
    }

    /// Depth-first: left subtree, node, right subtree. Visits values in
    /// ascending order for any valid tree.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.in_order_at(self.root(), &mut visit);
    }

    fn in_order_at<F>(&self, node: Option<NodeId>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = node.and_then(|id| self.node(id)) {
            self.in_order_at(node.left, visit);
            visit(&node.value);
            self.in_order_at(node.right, visit);
        }
    }

    /// Depth-first: left subtree, right subtree, then the node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.post_order_at(self.root(), &mut visit);
    }

    fn post_order_at<F>(&self, node: Option<NodeId>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = node.and_then(|id| self.node(id)) {
            self.post_order_at(node.left, visit);
            self.post_order_at(node.right, visit);
            visit(&node.value);
        }
    }

    /// Ascending iterator over the stored values.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.in_order_iter().map(|(_, value)| value)
    }

    pub fn in_order_iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }

    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }

    pub fn level_order_iter(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }
}

pub struct PreOrderIter<'a, T> {
    tree: &'a Bst<T>,
    stack: Vec<NodeId>,
}

impl<'a, T: Ord> PreOrderIter<'a, T> {
    fn new(tree: &'a Bst<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a, T: Ord> Iterator for PreOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(node) = self.tree.node(id) {
                // Right pushed first so the left subtree pops first.
                if let Some(right) = node.right {
                    self.stack.push(right);
                }
                if let Some(left) = node.left {
                    self.stack.push(left);
                }
                return Some((id, &node.value));
            }
        }
        None
    }
}

pub struct InOrderIter<'a, T> {
    tree: &'a Bst<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T: Ord> InOrderIter<'a, T> {
    fn new(tree: &'a Bst<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: tree.root(),
        }
    }
}

impl<'a, T: Ord> Iterator for InOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).and_then(|node| node.left);
        }
        let id = self.stack.pop()?;
        let node = self.tree.node(id)?;
        self.current = node.right;
        Some((id, &node.value))
    }
}

pub struct PostOrderIter<'a, T> {
    tree: &'a Bst<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T: Ord> PostOrderIter<'a, T> {
    fn new(tree: &'a Bst<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a, T: Ord> Iterator for PostOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(id) {
                if visited {
                    return Some((id, &node.value));
                }
                self.stack.push((id, true));
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

pub struct LevelOrderIter<'a, T> {
    tree: &'a Bst<T>,
    queue: Queue<NodeId>,
}

impl<'a, T: Ord> LevelOrderIter<'a, T> {
    fn new(tree: &'a Bst<T>) -> Self {
        let mut queue = Queue::new();
        if let Some(root) = tree.root() {
            queue.enqueue(root);
        }
        Self { tree, queue }
    }
}

impl<'a, T: Ord> Iterator for LevelOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.dequeue() {
            if let Some(node) = self.tree.node(id) {
                if let Some(left) = node.left {
                    self.queue.enqueue(left);
                }
                if let Some(right) = node.right {
                    self.queue.enqueue(right);
                }
                return Some((id, &node.value));
            }
        }
        None
    }
}
