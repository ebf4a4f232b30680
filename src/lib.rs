//! Balanced binary search tree over unique ordered values.
//!
//! A binary search tree keeps, for every node, all values of its left
//! subtree strictly less than the node's value and all values of its right
//! subtree strictly greater. This crate stores the nodes in a generational
//! arena (children referenced by index, exclusive parent-to-child ownership)
//! and layers on top of it:
//!
//! - construction from arbitrary collections via sort, de-duplicate, and
//!   midpoint build into a minimal-height shape ([`tree::Bst::from_values`])
//! - ordered-set mutation: [`tree::Bst::insert`] (duplicates rejected),
//!   [`tree::Bst::remove`] (in-order successor promotion), lookup
//! - the four classic traversals as visitor callbacks and lazy iterators,
//!   level-order driven by the FIFO [`queue::Queue`] collaborator
//! - structural queries: height (edge count, empty subtree is -1), depth by
//!   node identity, balance check, and full-rebuild rebalancing
//! - diagnostic renderings: a sideways connector-glyph diagram and a
//!   top-down `termtree` outline

pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod queue;
pub mod traverse;
pub mod tree;
pub mod util;

pub use display::TreeOutline;
pub use errors::{TreeError, TreeResult};
pub use queue::Queue;
pub use tree::{Bst, Node, NodeId};
