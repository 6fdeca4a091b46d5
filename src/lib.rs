//! Unbalanced binary-search-tree collections for Rust.
//!
//! This crate provides [`BSTreeMap`] and [`BSTreeSet`], ordered collections backed
//! by a plain (unbalanced) binary search tree:
//!
//! - [`BSTreeMap`] - a unique-key dictionary ordered by key comparison, with
//!   replace-on-insert semantics and ascending bulk extraction
//! - [`BSTreeSet`] - an ordered multiset of comparable elements, where duplicates
//!   are retained as separate nodes
//!
//! # Example
//!
//! ```
//! use bstree::BSTreeMap;
//!
//! let mut authors = BSTreeMap::new();
//! authors.insert(2767052, "Suzanne Collins");
//! authors.insert(41865, "Stephenie Meyer");
//! authors.insert(2657, "Harper Lee");
//!
//! assert_eq!(authors.len(), 3);
//! assert_eq!(authors.get(&41865), Some(&"Stephenie Meyer"));
//!
//! // Bulk extraction visits the tree in order, so keys come out ascending.
//! assert_eq!(authors.keys_in_order(), [&2657, &41865, &2767052]);
//! assert_eq!(
//!     authors.values_in_order(),
//!     [&"Harper Lee", &"Stephenie Meyer", &"Suzanne Collins"],
//! );
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Predictable semantics** - Insertion either creates exactly one node or
//!   overwrites one value in place; nothing else moves
//! - **Iterative internals** - Descent, traversal, and teardown run on explicit
//!   loops and worklists, so degenerate trees cannot exhaust the call stack
//!
//! # Implementation
//!
//! Every entry lives in its own heap-allocated node with two owned child links.
//! The tree is never rebalanced: depth is a direct function of insertion order,
//! and inserting keys in sorted order produces a chain whose height equals the
//! number of entries. Operations therefore cost O(height), which is O(log n) for
//! well-shuffled input and O(n) in the worst case. Neither container supports
//! removing individual entries; the mutating surface is insert, overwrite, and
//! [`clear`](BSTreeMap::clear).

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod bstree_map;
pub mod bstree_set;

pub use bstree_map::BSTreeMap;
pub use bstree_set::BSTreeSet;
