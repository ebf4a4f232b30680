//! Arena-based binary search tree over unique ordered values.
//!
//! Nodes live in a generational arena and reference their children by index,
//! so parent-to-child edges are the only ownership links and stale handles
//! are detected by generation instead of dangling.

use std::cmp::Ordering;

use generational_arena::Arena;
use itertools::Itertools;
use tracing::trace;

/// Handle to a node slot in the tree's arena.
pub type NodeId = generational_arena::Index;

/// One tree vertex: a value and its child links.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// Binary search tree with arena storage.
///
/// Invariants: for every node, all values in its left subtree compare less
/// than its own value and all values in its right subtree compare greater;
/// no two live nodes hold equal values. Every live arena slot is reachable
/// from `root` through exactly one parent link.
#[derive(Debug)]
pub struct Bst<T> {
    arena: Arena<Node<T>>,
    root: Option<NodeId>,
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Builds a height-balanced tree from an arbitrary collection.
    ///
    /// Input is sorted ascending and de-duplicated first, then built by
    /// recursive midpoint selection, so the resulting shape is minimal in
    /// height and deterministic for a given value set.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().sorted().dedup().collect();
        let mut tree = Self {
            arena: Arena::with_capacity(values.len()),
            root: None,
        };
        let count = values.len();
        let mut values = values.into_iter();
        tree.root = tree.build_range(&mut values, count);
        tree
    }

    /// Builds the subtree for the next `len` values of a sorted sequence.
    ///
    /// The root of a range takes the midpoint with lower-index bias: the
    /// left subtree receives `(len - 1) / 2` elements, which matches
    /// `mid = floor((left + right) / 2)` over inclusive index ranges.
    fn build_range<I>(&mut self, values: &mut I, len: usize) -> Option<NodeId>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let left_len = (len - 1) / 2;
        let left = self.build_range(values, left_len);
        let value = values.next()?;
        let right = self.build_range(values, len - 1 - left_len);
        Some(self.arena.insert(Node { value, left, right }))
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Inserts `value`, returning `false` without modifying the tree when an
    /// equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.root {
            None => {
                let id = self.arena.insert(Node::leaf(value));
                self.root = Some(id);
                true
            }
            Some(root) => self.insert_below(root, value),
        }
    }

    fn insert_below(&mut self, id: NodeId, value: T) -> bool {
        match value.cmp(&self.arena[id].value) {
            Ordering::Equal => {
                trace!("insert rejected: value already present");
                false
            }
            Ordering::Less => match self.arena[id].left {
                Some(left) => self.insert_below(left, value),
                None => {
                    let leaf = self.arena.insert(Node::leaf(value));
                    self.arena[id].left = Some(leaf);
                    true
                }
            },
            Ordering::Greater => match self.arena[id].right {
                Some(right) => self.insert_below(right, value),
                None => {
                    let leaf = self.arena.insert(Node::leaf(value));
                    self.arena[id].right = Some(leaf);
                    true
                }
            },
        }
    }

    /// Removes the node holding `value`, returning whether it was present.
    /// The freed slot is released from the arena immediately.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.root {
            None => false,
            Some(root) => {
                let (new_root, removed) = self.remove_below(root, value);
                self.root = new_root;
                removed
            }
        }
    }

    fn remove_below(&mut self, id: NodeId, value: &T) -> (Option<NodeId>, bool) {
        match value.cmp(&self.arena[id].value) {
            Ordering::Less => match self.arena[id].left {
                Some(left) => {
                    let (new_left, removed) = self.remove_below(left, value);
                    self.arena[id].left = new_left;
                    (Some(id), removed)
                }
                None => (Some(id), false),
            },
            Ordering::Greater => match self.arena[id].right {
                Some(right) => {
                    let (new_right, removed) = self.remove_below(right, value);
                    self.arena[id].right = new_right;
                    (Some(id), removed)
                }
                None => (Some(id), false),
            },
            Ordering::Equal => self.unlink(id),
        }
    }

    /// Detaches the matched node. With two children the in-order successor's
    /// value moves into this node and the successor node is removed from the
    /// right subtree; otherwise the sole child (if any) is promoted.
    fn unlink(&mut self, id: NodeId) -> (Option<NodeId>, bool) {
        let (left, right) = {
            let node = &self.arena[id];
            (node.left, node.right)
        };
        match (left, right) {
            (None, right) => {
                self.take(id);
                (right, true)
            }
            (Some(left), None) => {
                self.take(id);
                (Some(left), true)
            }
            (Some(_), Some(right)) => {
                let (new_right, successor) = self.detach_min(right);
                let node = &mut self.arena[id];
                node.value = successor;
                node.right = new_right;
                (Some(id), true)
            }
        }
    }

    /// Removes the leftmost node of the subtree at `id` and returns the new
    /// subtree root together with the detached value.
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, T) {
        match self.arena[id].left {
            Some(left) => {
                let (new_left, value) = self.detach_min(left);
                self.arena[id].left = new_left;
                (Some(id), value)
            }
            None => {
                let node = self.take(id);
                (node.right, node.value)
            }
        }
    }

    fn take(&mut self, id: NodeId) -> Node<T> {
        self.arena
            .remove(id)
            .expect("child link points at live slot")
    }

    /// Whether `value` exists in the tree. O(height), no mutation.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Locates the node holding `value` and returns its handle.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.find_below(self.root, value)
    }

    fn find_below(&self, node: Option<NodeId>, value: &T) -> Option<NodeId> {
        let id = node?;
        let node = self.arena.get(id)?;
        match value.cmp(&node.value) {
            Ordering::Equal => Some(id),
            Ordering::Less => self.find_below(node.left, value),
            Ordering::Greater => self.find_below(node.right, value),
        }
    }

    /// Height of the whole tree; -1 when empty.
    pub fn height(&self) -> i32 {
        self.height_at(self.root)
    }

    /// Longest downward edge count from `node` to a leaf. Absent subtrees
    /// (and stale handles) have height -1, so a leaf has height 0.
    pub fn height_at(&self, node: Option<NodeId>) -> i32 {
        match node.and_then(|id| self.arena.get(id)) {
            None => -1,
            Some(node) => 1 + self.height_at(node.left).max(self.height_at(node.right)),
        }
    }

    /// Edge count from the root to `node`, found by descending from the root
    /// and comparing node identity, left subtree first. `None` when the
    /// handle is stale or not reachable.
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.depth_below(self.root?, node, 0)
    }

    fn depth_below(&self, current: NodeId, target: NodeId, edges: usize) -> Option<usize> {
        if current == target {
            return Some(edges);
        }
        let node = self.arena.get(current)?;
        node.left
            .and_then(|left| self.depth_below(left, target, edges + 1))
            .or_else(|| {
                node.right
                    .and_then(|right| self.depth_below(right, target, edges + 1))
            })
    }

    /// Whether every node's child subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height(self.root).is_some()
    }

    /// Height of the subtree, or `None` as soon as any node below is found
    /// unbalanced; the sentinel short-circuits the remaining height work.
    fn balanced_height(&self, node: Option<NodeId>) -> Option<i32> {
        match node.and_then(|id| self.arena.get(id)) {
            None => Some(-1),
            Some(node) => {
                let left = self.balanced_height(node.left)?;
                let right = self.balanced_height(node.right)?;
                if (left - right).abs() > 1 {
                    None
                } else {
                    Some(1 + left.max(right))
                }
            }
        }
    }

    /// Rebuilds the tree into a height-balanced shape from its own in-order
    /// sequence. Every old slot is released; values are moved, not cloned.
    pub fn rebalance(&mut self) {
        let ids: Vec<NodeId> = self.in_order_iter().map(|(id, _)| id).collect();
        let count = ids.len();
        let mut values = Vec::with_capacity(count);
        for id in ids {
            values.push(self.take(id).value);
        }
        let mut values = values.into_iter();
        self.root = self.build_range(&mut values, count);
    }
}
