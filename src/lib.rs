//! A Binary Search Tree of employee records keyed by their integer id.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a [`Record`]
//! and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    record with a smaller id than its own.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    record with a larger id than its own.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree does not balance itself, so searching takes `O(height)` which
//! degrades to `O(N)` when records are inserted in sorted order. It naturally
//! supports sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use employee_bst::{Error, Record, Tree};
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(Record::new(5, "Ana")).unwrap();
//! tree.insert(Record::new(3, "Bob")).unwrap();
//! tree.insert(Record::new(8, "Cid")).unwrap();
//!
//! // Ids are unique.
//! assert_eq!(tree.insert(Record::new(3, "Dup")), Err(Error::DuplicateKey(3)));
//!
//! let mut lines: Vec<String> = Vec::new();
//! tree.print_inorder(&mut lines);
//! assert_eq!(
//!     lines,
//!     [
//!         "  Empleado ID: 3, Nombre: Bob",
//!         "Empleado ID: 5, Nombre: Ana",
//!         "  Empleado ID: 8, Nombre: Cid",
//!     ]
//! );
//!
//! // Deleting a record returns it.
//! assert_eq!(tree.delete(5).map(|r| r.name().to_owned()), Some("Ana".to_owned()));
//! assert!(!tree.exists(5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod record;
pub mod traversal;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use record::Record;
pub use traversal::{LogSink, Order, Sink, Visit};
pub use tree::Tree;
