//! fantree - An in-memory order-parameterized B-tree with top-down eager splitting.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                           fantree                             │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │           Tree Layer (index/btree/tree.rs)            │   │
//! │  │   BTree<K, V>: new / insert / search / diagnostics    │   │
//! │  │   top-down descent, eager split of full children      │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                              ↓                                │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │           Node Layer (index/btree/node.rs)            │   │
//! │  │   Node: Leaf | Internal, ordered slot storage         │   │
//! │  │   Separator: Key(K) | Unbounded sentinel              │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                              ↓                                │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │           Arena (Vec<Node>, NodeId indices)           │   │
//! │  │   each node owned by exactly one parent slot          │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Concurrency
//! A [`BTree`] is single-threaded and synchronous: `insert` and `search` run
//! to completion on the calling thread with no observable intermediate state.
//! Wrap the tree in an exclusive lock if it must be shared across threads.
//!
//! # Quick Start
//! ```
//! use fantree::BTree;
//!
//! // Order 2: each node holds at most 3 real keys.
//! let mut tree = BTree::new(2).unwrap();
//!
//! tree.insert(5, "five");
//! tree.insert(3, "three");
//!
//! assert_eq!(tree.search(&5), Some(&"five"));
//! assert_eq!(tree.search(&4), None);
//! ```

// Core modules
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::MIN_ORDER;
pub use common::{Error, NodeId, Result};

pub use index::btree::{BTree, Separator};
