//! An unbalanced BST over owned strings. Nodes live in an arena and refer to
//! their children by index, so a node is allocated exactly once (when its value
//! is inserted) and is only released when the whole tree is torn down.
//!
//! Values are ordered by ordinal (byte-wise) comparison. A value equal to a
//! node's value is placed in that node's left subtree, so duplicates are kept
//! and surface next to each other during in-order traversal.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//!
//! for value in ["banana", "apple", "cherry", "apple"] {
//!     tree.insert(value.to_string())?;
//! }
//!
//! // In-order traversal is sorted and keeps duplicates.
//! let values: Vec<&str> = tree.iter().collect();
//! assert_eq!(values, ["apple", "apple", "banana", "cherry"]);
//!
//! // Take the values back instead of releasing them with the tree.
//! let mut values = tree.dismantle();
//! values.sort();
//! assert_eq!(values, ["apple", "apple", "banana", "cherry"]);
//! # Ok::<(), ordtree::TreeError>(())
//! ```

use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};

/// Identifies a node inside the [`OrderedTree`] that allocated it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element of the tree. Children are indices into the owning
/// tree's arena; `None` marks an absent child.
#[derive(Debug)]
struct Node {
    value: String,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn new(value: String) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree of owned strings supporting insertion, in-order
/// traversal and whole-tree teardown. It is never rebalanced, so sorted
/// input degenerates it into a list.
#[derive(Debug, Default)]
pub struct OrderedTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl OrderedTree {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// The number of values inserted so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root of the tree, if anything has been inserted.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The number of nodes on the longest path from the root to a leaf.
    /// An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        stack.extend(self.root.map(|root| (root, 1)));
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// Inserts `value`, taking ownership of it, and returns the root of the
    /// tree. The root only changes when inserting into an empty tree.
    ///
    /// If the node storage cannot grow, [`TreeError::Alloc`] is returned and
    /// the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let root = tree.insert("b".to_string())?;
    ///
    /// // Later insertions hang off the same root.
    /// assert_eq!(tree.insert("a".to_string())?, root);
    /// assert_eq!(tree.insert("c".to_string())?, root);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    /// # Ok::<(), ordtree::TreeError>(())
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: String) -> TreeResult<NodeId> {
        self.nodes
            .try_reserve(1)
            .map_err(|source| TreeError::alloc("node", source))?;

        // Walk down to the empty slot, remembering which side of the parent it is on.
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = self.node(current);
            let goes_left = value <= node.value;
            cursor = if goes_left { node.left } else { node.right };
            parent = Some((current, goes_left));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        match parent {
            Some((parent, true)) => self.node_mut(parent).left = Some(id),
            Some((parent, false)) => self.node_mut(parent).right = Some(id),
            None => trace!(node = id.0, "new root"),
        }

        Ok(*self.root.get_or_insert(id))
    }

    /// Calls `visit` on every value: the left subtree first, then the node
    /// itself, then the right subtree. Visiting an empty tree does nothing.
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// A lazy in-order iterator over the values, yielding them in
    /// non-decreasing ordinal order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Tears the tree down, releasing every node together with its value.
    /// Children are released before their parent. Destroying an empty tree is
    /// a no-op.
    pub fn destroy(self) {
        self.teardown(drop);
    }

    /// Tears the tree down like [`destroy`][Self::destroy] but hands the
    /// values back instead of releasing them. They are returned in the order
    /// their nodes were released (post-order), not sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in ["b", "a", "c"] {
    ///     tree.insert(value.to_string())?;
    /// }
    ///
    /// assert_eq!(tree.dismantle(), ["a", "c", "b"]);
    /// # Ok::<(), ordtree::TreeError>(())
    /// ```
    pub fn dismantle(self) -> Vec<String> {
        let mut values = Vec::with_capacity(self.len());
        self.teardown(|value| values.push(value));
        values
    }

    fn teardown<F>(mut self, mut release: F)
    where
        F: FnMut(String),
    {
        for id in self.post_order() {
            release(mem::take(&mut self.node_mut(id).value));
        }
        debug!(nodes = self.nodes.len(), "tree torn down");
        self.root = None;
        self.nodes.clear();
    }

    /// Node ids ordered left subtree, right subtree, then the node itself.
    fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = self.node(id);
            stack.extend(node.left);
            stack.extend(node.right);
        }

        // `order` is node, right, left; reversed it is left, right, node.
        order.reverse();
        order
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedTree`], created by [`OrderedTree::iter`].
///
/// Keeps the path of pending ancestors on an explicit stack, so a degenerate
/// tree does not recurse.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a OrderedTree,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.tree.node(id).left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.stack.pop()?);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
