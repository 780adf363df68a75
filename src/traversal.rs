//! Lazy pre/in/postorder walks over a [`Tree`] and the sinks their rendered lines go to.
//!
//! Every walk is a fresh iterator, so walking the same (unchanged) tree twice yields the same
//! visits in the same order.
//!
//! # Examples
//!
//! ```
//! use employee_bst::{Order, Record, Tree};
//!
//! let mut tree = Tree::new();
//! for (id, name) in [(5, "Ana"), (3, "Bob"), (8, "Cid")] {
//!     tree.insert(Record::new(id, name)).unwrap();
//! }
//!
//! let preorder: Vec<_> = tree.preorder().map(|visit| visit.record().id()).collect();
//! assert_eq!(preorder, [5, 3, 8]);
//!
//! let mut lines: Vec<String> = Vec::new();
//! tree.print(Order::Post, &mut lines);
//! assert_eq!(
//!     lines,
//!     [
//!         "  Empleado ID: 3, Nombre: Bob",
//!         "  Empleado ID: 8, Nombre: Cid",
//!         "Empleado ID: 5, Nombre: Ana",
//!     ]
//! );
//! ```

use std::fmt;

use crate::config::{INDENT_WIDTH, TRAVERSAL_TARGET};
use crate::record::Record;
use crate::tree::{NodeId, Tree};

/// Which order a traversal visits nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Records come out sorted.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// One step of a traversal: a record and how deep in the tree it sits. The root has depth 0.
///
/// Its `Display` rendering is the record prefixed by two spaces per level.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    record: &'a Record,
    depth: usize,
}

impl<'a> Visit<'a> {
    /// The visited record.
    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl fmt::Display for Visit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.depth * INDENT_WIDTH;
        write!(f, "{:indent$}{}", "", self.record)
    }
}

/// Where rendered traversal lines go. Each call gets one complete line, in visit order.
pub trait Sink {
    /// Receives one rendered line.
    fn emit(&mut self, line: &str);
}

impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Emits every line as an INFO event through `tracing`. Nothing shows up unless the application
/// installs a subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn emit(&mut self, line: &str) {
        tracing::info!(target: TRAVERSAL_TARGET, "{}", line);
    }
}

impl Tree {
    /// Walks the tree visiting each node before its children.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root().map(|root| (root, 0)).into_iter().collect(),
        }
    }

    /// Walks the tree in ascending id order.
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder {
            tree: self,
            stack: Vec::new(),
            pending: self.root().map(|root| (root, 0)),
        }
    }

    /// Walks the tree visiting each node after its children.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder {
            tree: self,
            stack: self
                .root()
                .map(|root| (root, 0, false))
                .into_iter()
                .collect(),
        }
    }

    /// Walks the tree in the given order.
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        match order {
            Order::Pre => Traversal::Pre(self.preorder()),
            Order::In => Traversal::In(self.inorder()),
            Order::Post => Traversal::Post(self.postorder()),
        }
    }

    /// Iterates over the records in ascending id order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.inorder())
    }

    /// Renders every visit of the given walk into `sink`, one indented line per record.
    pub fn print(&self, order: Order, mut sink: impl Sink) {
        for visit in self.traverse(order) {
            sink.emit(&visit.to_string());
        }
    }

    /// [`Tree::print`] in preorder.
    pub fn print_preorder(&self, sink: impl Sink) {
        self.print(Order::Pre, sink);
    }

    /// [`Tree::print`] in inorder.
    pub fn print_inorder(&self, sink: impl Sink) {
        self.print(Order::In, sink);
    }

    /// [`Tree::print`] in postorder.
    pub fn print_postorder(&self, sink: impl Sink) {
        self.print(Order::Post, sink);
    }
}

/// Preorder walk, see [`Tree::preorder`].
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let (at, depth) = self.stack.pop()?;
        let node = tree.node(at);

        // Right goes first so left is popped first.
        self.stack.extend(
            [node.right, node.left]
                .into_iter()
                .flatten()
                .map(|child| (child, depth + 1)),
        );

        Some(Visit {
            record: &node.record,
            depth,
        })
    }
}

/// Inorder walk, see [`Tree::inorder`].
#[derive(Clone, Debug)]
pub struct Inorder<'a> {
    tree: &'a Tree,
    /// Ancestors whose left subtree is being walked.
    stack: Vec<(NodeId, usize)>,
    /// Root of the next subtree to descend into.
    pending: Option<(NodeId, usize)>,
}

impl<'a> Iterator for Inorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((at, depth)) = self.pending.take() {
            self.stack.push((at, depth));
            self.pending = tree.node(at).left.map(|left| (left, depth + 1));
        }

        let (at, depth) = self.stack.pop()?;
        let node = tree.node(at);
        self.pending = node.right.map(|right| (right, depth + 1));

        Some(Visit {
            record: &node.record,
            depth,
        })
    }
}

/// Postorder walk, see [`Tree::postorder`].
#[derive(Clone, Debug)]
pub struct Postorder<'a> {
    tree: &'a Tree,
    /// Nodes to visit, flagged once their children have been queued.
    stack: Vec<(NodeId, usize, bool)>,
}

impl<'a> Iterator for Postorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let (at, depth, expanded) = self.stack.pop()?;
            let node = tree.node(at);
            if expanded {
                return Some(Visit {
                    record: &node.record,
                    depth,
                });
            }

            self.stack.push((at, depth, true));
            self.stack.extend(
                [node.right, node.left]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1, false)),
            );
        }
    }
}

/// A walk in an order picked at runtime, see [`Tree::traverse`].
#[derive(Clone, Debug)]
pub enum Traversal<'a> {
    /// See [`Order::Pre`].
    Pre(Preorder<'a>),
    /// See [`Order::In`].
    In(Inorder<'a>),
    /// See [`Order::Post`].
    Post(Postorder<'a>),
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Pre(walk) => walk.next(),
            Self::In(walk) => walk.next(),
            Self::Post(walk) => walk.next(),
        }
    }
}

/// Records in ascending id order, see [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a>(Inorder<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|visit| visit.record)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
