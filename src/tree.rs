//! An unbalanced BST of [`Record`]s with parent back-references.
//!
//! Nodes live in an arena owned by the [`Tree`]. A node's `left` and `right` links are the only
//! way to reach its children, so each child is owned by exactly one parent. The `parent` link is
//! a plain index used to splice nodes out during deletion and never keeps anything alive.
//!
//! # Examples
//!
//! ```
//! use employee_bst::{Record, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.get(1), None);
//!
//! tree.insert(Record::new(1, "Ana")).unwrap();
//! assert!(tree.is_leaf());
//! assert_eq!(tree.get(1).map(|r| r.name()), Some("Ana"));
//!
//! // Deleting a record returns it.
//! let deleted = tree.delete(1);
//! assert_eq!(deleted.map(|r| r.id()), Some(1));
//! assert!(!tree.exists(1));
//!
//! // Deleting something that isn't there does nothing.
//! assert!(tree.delete(1).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::record::Record;

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// An optional reference to another node in the same arena.
pub(crate) type Link = Option<NodeId>;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) left: Link,
    pub(crate) right: Link,
    parent: Link,
}

/// A Binary Search Tree of [`Record`]s keyed by [`Record::id`]. This can be used for inserting,
/// finding, and deleting records.
///
/// The tree is not self-balancing: inserting records in sorted order produces a tree as tall as
/// it has records.
#[derive(Clone, Default)]
pub struct Tree {
    /// Node storage. `None` slots have been freed by a deletion and are listed in `vacant`.
    nodes: Vec<Option<Node>>,
    vacant: Vec<NodeId>,
    root: Link,
    len: usize,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.map(|at| DebugNode { tree: self, at }))
            .finish()
    }
}

/// Formats a subtree by following child links instead of dumping the arena.
struct DebugNode<'a> {
    tree: &'a Tree,
    at: NodeId,
}

impl fmt::Debug for DebugNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.at);
        let child = |link: Link| link.map(|at| DebugNode { tree: self.tree, at });
        f.debug_struct("Node")
            .field("record", &node.record)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many records are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no record at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_bst::{Record, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(Record::new(1, "Ana")).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether the root holds a record and has no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_bst::{Record, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.is_leaf());
    ///
    /// tree.insert(Record::new(5, "Ana")).unwrap();
    /// assert!(tree.is_leaf());
    ///
    /// tree.insert(Record::new(3, "Bob")).unwrap();
    /// assert!(!tree.is_leaf());
    /// ```
    pub fn is_leaf(&self) -> bool {
        self.root.is_some_and(|root| {
            let root = self.node(root);
            root.left.is_none() && root.right.is_none()
        })
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Inserts the given record. Fails with [`Error::DuplicateKey`] if a record with the same id
    /// is already stored, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_bst::{Error, Record, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(Record::new(1, "Ana")).unwrap();
    /// assert_eq!(tree.insert(Record::new(1, "Bob")), Err(Error::DuplicateKey(1)));
    ///
    /// // The original record is still there.
    /// assert_eq!(tree.get(1).map(|r| r.name()), Some("Ana"));
    /// ```
    pub fn insert(&mut self, record: Record) -> Result<()> {
        match self.root {
            Some(root) => self.insert_at(root, record)?,
            None => {
                debug!(id = record.id(), "inserting root record");
                self.root = Some(self.allocate(record, None));
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Whether a record with the given id is stored.
    pub fn exists(&self, id: i64) -> bool {
        self.find(self.root, id).is_some()
    }

    /// Potentially finds the record with the given id. If no node has the corresponding id,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_bst::{Record, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Record::new(1, "Ana")).unwrap();
    ///
    /// assert_eq!(tree.get(1).map(|r| r.name()), Some("Ana"));
    /// assert_eq!(tree.get(42), None);
    /// ```
    pub fn get(&self, id: i64) -> Option<&Record> {
        self.find(self.root, id).map(|at| &self.node(at).record)
    }

    /// Deletes the record with the given id from the tree and returns it. If the tree does not
    /// contain a record with the id, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_bst::{Record, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for (id, name) in [(5, "Ana"), (3, "Bob"), (8, "Cid")] {
    ///     tree.insert(Record::new(id, name)).unwrap();
    /// }
    ///
    /// // The root has two children, so its successor (8) takes its place.
    /// assert_eq!(tree.delete(5).map(|r| r.id()), Some(5));
    ///
    /// let ids: Vec<_> = tree.iter().map(|r| r.id()).collect();
    /// assert_eq!(ids, [3, 8]);
    /// ```
    pub fn delete(&mut self, id: i64) -> Option<Record> {
        let Some(at) = self.find(self.root, id) else {
            trace!(id, "nothing to delete");
            return None;
        };
        let deleted = self.delete_node(at);
        self.len -= 1;
        Some(deleted)
    }

    /// Checks the structural invariants of the tree:
    ///
    /// 1. every record in a left subtree is smaller than its ancestor, every record in a right
    ///    subtree is larger (which also rules out duplicate ids),
    /// 2. every child's parent link points at the node holding it, and the root has no parent,
    /// 3. the number of reachable nodes matches [`Tree::len`] and every other arena slot is free.
    pub fn validate(&self) -> bool {
        let Some(reachable) = self.validate_subtree(self.root, None, None, None) else {
            return false;
        };
        let occupied = self.nodes.iter().filter(|slot| slot.is_some()).count();

        reachable == self.len
            && occupied == self.len
            && self.vacant.len() + self.len == self.nodes.len()
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    /// Links are only ever created for occupied slots and cleared before their slot is freed,
    /// so following one can't land on a vacant slot.
    pub(crate) fn node(&self, at: NodeId) -> &Node {
        self.nodes[at.0]
            .as_ref()
            .expect("Links always point at occupied slots")
    }

    fn node_mut(&mut self, at: NodeId) -> &mut Node {
        self.nodes[at.0]
            .as_mut()
            .expect("Links always point at occupied slots")
    }

    fn allocate(&mut self, record: Record, parent: Link) -> NodeId {
        let node = Node {
            record,
            left: None,
            right: None,
            parent,
        };
        match self.vacant.pop() {
            Some(at) => {
                self.nodes[at.0] = Some(node);
                at
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Clears the node's slot and hands back its record. The caller must already have unlinked
    /// the node from its parent and children.
    fn release(&mut self, at: NodeId) -> Record {
        let node = self.nodes[at.0]
            .take()
            .expect("Released nodes are occupied");
        self.vacant.push(at);
        node.record
    }

    fn insert_at(&mut self, at: NodeId, record: Record) -> Result<()> {
        let node = self.node(at);
        let ordering = record.cmp(&node.record);
        let (left, right) = (node.left, node.right);

        match ordering {
            Ordering::Less => match left {
                Some(left) => self.insert_at(left, record),
                None => {
                    debug!(id = record.id(), parent = node.record.id(), "inserting left child");
                    let new_left = self.allocate(record, Some(at));
                    self.node_mut(at).left = Some(new_left);
                    Ok(())
                }
            },
            // Detected before anything below `at` is allocated, so a failed insert is a no-op.
            Ordering::Equal => Err(Error::DuplicateKey(record.id())),
            Ordering::Greater => match right {
                Some(right) => self.insert_at(right, record),
                None => {
                    debug!(id = record.id(), parent = node.record.id(), "inserting right child");
                    let new_right = self.allocate(record, Some(at));
                    self.node_mut(at).right = Some(new_right);
                    Ok(())
                }
            },
        }
    }

    /// Descends from `link` towards `id`, returning the node holding it.
    fn find(&self, link: Link, id: i64) -> Link {
        let at = link?;
        let node = self.node(at);
        match id.cmp(&node.record.id()) {
            Ordering::Less => self.find(node.left, id),
            Ordering::Equal => Some(at),
            Ordering::Greater => self.find(node.right, id),
        }
    }

    /// Follows left links down from `at`.
    fn find_minimum(&self, mut at: NodeId) -> NodeId {
        while let Some(left) = self.node(at).left {
            at = left;
        }
        at
    }

    /// Removes the record held by `at` and returns it, keeping the BST and parent invariants.
    fn delete_node(&mut self, at: NodeId) -> Record {
        let node = self.node(at);
        let (left, right, parent) = (node.left, node.right, node.parent);

        match (left, right) {
            (Some(_), Some(right)) => {
                // The successor is the smallest record in the right subtree. It has no left child
                // so removing it recurses at most once more. `at` keeps its place in the tree and
                // only swaps the record it holds.
                let successor = self.find_minimum(right);
                debug!(
                    id = self.node(at).record.id(),
                    successor = self.node(successor).record.id(),
                    "deleting node with two children"
                );
                let promoted = self.delete_node(successor);
                std::mem::replace(&mut self.node_mut(at).record, promoted)
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!(id = self.node(at).record.id(), "deleting node with one child");
                self.replace_child(parent, at, Some(child));
                self.node_mut(child).parent = parent;
                self.release(at)
            }
            (None, None) => {
                debug!(id = self.node(at).record.id(), "deleting leaf");
                self.replace_child(parent, at, None);
                self.release(at)
            }
        }
    }

    /// Points whichever link of `parent` referenced `old` at `new` instead. A missing parent
    /// means `old` is the root.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }
    }

    fn height_of(&self, link: Link) -> usize {
        link.map_or(0, |at| {
            let node = self.node(at);
            self.height_of(node.left).max(self.height_of(node.right)) + 1
        })
    }

    /// Returns the number of nodes in the subtree if all of its records lie strictly between
    /// `lower` and `upper` and its parent links are consistent.
    fn validate_subtree(
        &self,
        link: Link,
        parent: Link,
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> Option<usize> {
        let Some(at) = link else {
            return Some(0);
        };
        let node = self.nodes.get(at.0)?.as_ref()?;
        let id = node.record.id();

        let in_bounds =
            lower.map_or(true, |lower| lower < id) && upper.map_or(true, |upper| id < upper);
        if !in_bounds || node.parent != parent {
            return None;
        }

        let left = self.validate_subtree(node.left, Some(at), lower, Some(id))?;
        let right = self.validate_subtree(node.right, Some(at), Some(id), upper)?;
        Some(left + right + 1)
    }
}
