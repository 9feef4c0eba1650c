//! An unbalanced BST that owns its nodes outright. Every node is owned by exactly one slot (the
//! tree's root slot or a parent's left/right slot) and the mutating algorithms work by taking and
//! rebinding those slots. Nothing is shared and there are no parent pointers.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.find_min().is_err());
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert!(tree.contains(&3));
//!
//! // Duplicates are dropped without complaint.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.number_of_nodes(), 3);
//!
//! assert_eq!(tree.find_min(), Ok(&3));
//! assert_eq!(tree.find_max(), Ok(&8));
//! assert_eq!(tree.get_range(&4, &10), vec![5, 8]);
//!
//! // Peel off the fringe.
//! let leaves = tree.remove_leaves();
//! assert_eq!(leaves.into_iter().collect::<Vec<_>>(), vec![3, 8]);
//! assert_eq!(tree.to_string(), "5\n");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::io;

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};

/// A Binary Search Tree of unique, ordered keys. It performs no rebalancing: its shape is decided
/// entirely by the order keys are inserted and removed in.
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    /// Releases every node children-first. This keeps an explicit stack instead of recursing so a
    /// tree that degraded into a list can be dropped no matter how long it is.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.0.take().into_iter().collect();
        while let Some(node) = pending.last_mut() {
            if let Some(left) = node.left.0.take() {
                pending.push(left);
            } else if let Some(right) = node.right.0.take() {
                pending.push(right);
            } else {
                // Both children are already gone.
                pending.pop();
            }
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    /// Renders one key per line in pre-order. Each line is indented by the depth of its node:
    ///
    /// ```text
    /// 50
    /// +---25
    /// |   +---15
    /// +---78
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => root.render(f, 0),
            None => Ok(()),
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: Link(None) }
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Whether the given key is stored in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.root().map_or(false, |n| n.contains(key))
    }

    /// Inserts the given key into the tree. Returns `false` and leaves the tree untouched if the
    /// key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.number_of_nodes(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = self.root.insert(key);
        if !inserted {
            trace!("dropped duplicate key");
        }
        inserted
    }

    /// Removes the given key from the tree. Returns `false` and leaves the tree untouched if the
    /// key was not present.
    ///
    /// A node with two children is never physically unlinked. It takes over the key of its
    /// in-order successor instead, and the successor (which has no left child) is spliced out of
    /// the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "3\n+---1\n");
    /// ```
    pub fn remove(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let removed = self.root.remove(key);
        if !removed {
            trace!("key to remove was absent");
        }
        removed
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no keys.
    pub fn find_min(&self) -> Result<&T> {
        self.root()
            .map(Node::min)
            .ok_or_else(|| empty_tree("find_min"))
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no keys.
    pub fn find_max(&self) -> Result<&T> {
        self.root()
            .map(Node::max)
            .ok_or_else(|| empty_tree("find_max"))
    }

    /// How many keys are stored in the tree. This walks the whole tree.
    pub fn number_of_nodes(&self) -> usize {
        self.root().map_or(0, Node::count_nodes)
    }

    /// How many nodes have no children. This walks the whole tree.
    pub fn number_of_leaves(&self) -> usize {
        self.root().map_or(0, Node::count_leaves)
    }

    /// How many nodes have exactly two children. This walks the whole tree.
    pub fn number_of_full_nodes(&self) -> usize {
        self.root().map_or(0, Node::count_full)
    }

    /// Removes every node that is a leaf when this is called and returns their keys.
    ///
    /// Nodes that only become leaves because their children were removed stay in the tree, so
    /// calling this repeatedly peels the tree one fringe at a time until it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_leaves().into_iter().collect::<Vec<_>>(), vec![1, 4]);
    /// assert_eq!(tree.remove_leaves().into_iter().collect::<Vec<_>>(), vec![3]);
    /// assert_eq!(tree.remove_leaves().into_iter().collect::<Vec<_>>(), vec![2]);
    /// assert!(tree.is_empty());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove_leaves(&mut self) -> BTreeSet<T>
    where
        T: Ord,
    {
        let mut removed = BTreeSet::new();
        self.root.remove_leaves(&mut removed);
        debug!(removed = removed.len(), "stripped fringe");
        removed
    }

    /// Every key `k` with `lo <= k <= hi`, in ascending order. Subtrees that cannot hold such a
    /// key are never visited. An inverted range (`lo > hi`) is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [50, 25, 78, 15, 66].into_iter().collect();
    ///
    /// assert_eq!(tree.get_range(&20, &70), vec![25, 50, 66]);
    /// assert!(tree.get_range(&51, &60).is_empty());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn get_range(&self, lo: &T, hi: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut range = Vec::new();
        if let Some(root) = self.root() {
            root.collect_range(lo, hi, &mut range);
        }
        trace!(len = range.len(), "collected range");
        range
    }

    /// Writes the rendering described on the [`Display`](fmt::Display) impl to `dest`. The output
    /// is meant for people and its format may change.
    pub fn print<W>(&self, dest: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        write!(dest, "{}", self)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

fn empty_tree(op: &'static str) -> Error {
    debug!(op = op, "tree is empty");
    Error::EmptyTree { op }
}

/// An owning slot for a subtree: the tree's root, or one of a node's children.
#[derive(Clone, Debug)]
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Link<T> {
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        match &mut self.0 {
            None => {
                self.0 = Some(Node::new_boxed(key));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key),
                Ordering::Equal => false,
                Ordering::Greater => node.right.insert(key),
            },
        }
    }

    fn remove(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let Some(node) = self.0.as_mut() else {
            return false;
        };
        match key.cmp(&node.key) {
            Ordering::Less => node.left.remove(key),
            Ordering::Greater => node.right.remove(key),
            Ordering::Equal => {
                if node.is_full() {
                    if let Some(successor) = node.right.take_min() {
                        node.key = successor;
                    }
                } else {
                    self.splice();
                }
                true
            }
        }
    }

    /// Unlinks the smallest node of this subtree and returns its key.
    fn take_min(&mut self) -> Option<T> {
        if let Some(node) = self.0.as_mut() {
            if !node.left.is_empty() {
                return node.left.take_min();
            }
        }
        self.splice()
    }

    /// Releases the node in this slot, rebinding the slot to the node's only child (or to nothing)
    /// and handing back its key. The node must not have two children.
    fn splice(&mut self) -> Option<T> {
        let node = self.0.take()?;
        debug_assert!(!node.is_full(), "splicing out a full node would drop a subtree");

        let Node { key, left, right } = *node;
        self.0 = if left.is_empty() { right.0 } else { left.0 };
        Some(key)
    }

    /// Splices out every leaf of this subtree as it was on entry, right subtrees first.
    fn remove_leaves(&mut self, removed: &mut BTreeSet<T>)
    where
        T: Ord,
    {
        let Some(node) = self.0.as_mut() else {
            return;
        };
        if node.is_leaf() {
            removed.extend(self.splice());
            return;
        }
        node.right.remove_leaves(removed);
        node.left.remove_leaves(removed);
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    fn is_full(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().map_or(false, |n| n.contains(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.contains(key)),
        }
    }

    fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    fn count_nodes(&self) -> usize {
        1 + self.left().map_or(0, Self::count_nodes) + self.right().map_or(0, Self::count_nodes)
    }

    fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left().map_or(0, Self::count_leaves) + self.right().map_or(0, Self::count_leaves)
    }

    fn count_full(&self) -> usize {
        let below =
            self.left().map_or(0, Self::count_full) + self.right().map_or(0, Self::count_full);
        below + usize::from(self.is_full())
    }

    /// In-order walk that skips any subtree lying entirely outside `lo..=hi`.
    fn collect_range(&self, lo: &T, hi: &T, range: &mut Vec<T>)
    where
        T: Ord + Clone,
    {
        if *lo <= self.key && self.key <= *hi {
            if let Some(left) = self.left() {
                left.collect_range(lo, hi, range);
            }
            range.push(self.key.clone());
            if let Some(right) = self.right() {
                right.collect_range(lo, hi, range);
            }
        } else if self.key < *lo {
            if let Some(right) = self.right() {
                right.collect_range(lo, hi, range);
            }
        } else if let Some(left) = self.left() {
            left.collect_range(lo, hi, range);
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        for _ in 1..depth {
            f.write_str("|   ")?;
        }
        if depth > 0 {
            f.write_str("+---")?;
        }
        writeln!(f, "{}", self.key)?;

        if let Some(left) = self.left() {
            left.render(f, depth + 1)?;
        }
        if let Some(right) = self.right() {
            right.render(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Panics if any node in the tree breaks the ordering invariant. Returns the number of nodes with
/// exactly one child.
#[cfg(test)]
fn assert_ordered<T: Ord>(tree: &OrderedTree<T>) -> usize {
    fn walk<T: Ord>(node: Option<&Node<T>>, lo: Option<&T>, hi: Option<&T>) -> usize {
        let Some(node) = node else {
            return 0;
        };
        if let Some(lo) = lo {
            assert!(node.key > *lo, "left subtree key not below its ancestor");
        }
        if let Some(hi) = hi {
            assert!(node.key < *hi, "right subtree key not above its ancestor");
        }
        let single = usize::from(node.left.is_empty() != node.right.is_empty());
        single + walk(node.left(), lo, Some(&node.key)) + walk(node.right(), Some(&node.key), hi)
    }
    walk(tree.root(), None, None)
}
