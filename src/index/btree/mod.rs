//! B-tree index implementation.
//!
//! An in-memory multiway balanced search tree parameterized by its *order*
//! (minimum degree `t`). Inserts descend top-down and split any full node
//! before entering it, so no second upward pass is ever needed; every key
//! maps to one payload, and duplicate inserts overwrite in place.
//!
//! Layout follows the component split:
//! - [`separator`] - the key-or-sentinel type that orders a node's slots
//! - [`node`] - local slot storage and mutation (no balancing knowledge)
//! - [`tree`] - descent, eager splitting, and the public API

pub mod separator;

mod node;
mod tree;

pub use separator::Separator;
pub use tree::BTree;
