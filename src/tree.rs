//! An owned BST. Every `Node` exclusively owns its two children through a
//! `Box` so there is no sharing and no parent pointer. Anything that needs a
//! parent (e.g. [`Tree::depth`]) re-searches from the root.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1).map(|n| *n.key()), Some(1));
//!
//! // Inserting an existing key leaves the tree alone.
//! assert!(!tree.insert(1));
//!
//! // Deleting reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::ptr;

/// An owning link to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over unique keys. Insertion and deletion keep the
/// BST ordering but never rebalance; call [`Tree::rebalance`] for that.
#[derive(Debug, PartialEq, Eq)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
}

/// A `Node` holds a key and up to two children. The left subtree only holds
/// smaller keys and the right subtree only holds larger keys.
///
/// Nodes are only ever borrowed from a [`Tree`]; copies go through
/// [`Tree::clone`] so the owning tree's `Drop` frees them.
///
/// ```compile_fail
/// use balanced_bst::tree::Tree;
///
/// let tree = Tree::from_keys(1..=3);
/// let detached = tree.root().cloned();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink children before each node is freed so a degenerate tree
        // doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: clone_link(&self.root),
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-minimal tree from an arbitrary collection of keys.
    /// Duplicates are dropped and the rest are sorted before building.
    ///
    /// The root of every subtree is the key at index `len / 2` of its sorted
    /// slice, so an even-length slice picks its upper middle key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_keys(vec![4, 2, 1, 3]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.level_order(), vec![&3, &2, &4, &1]);
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let tree = Self {
            root: build_balanced(keys),
        };
        tracing::debug!(
            nodes = tree.len(),
            height = tree.height(),
            "built balanced tree"
        );
        tree
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter(crate::traversal::Order::Pre).count()
    }

    /// Inserts `key` as a new leaf. Returns `false` and leaves the tree
    /// untouched if the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_keys(vec![2, 1, 3]);
    ///
    /// assert!(tree.insert(4));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3, &4]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = insert(&mut self.root, key);
        tracing::trace!(inserted, "insert");
        inserted
    }

    /// Deletes the node holding `key`. A node with two children takes the
    /// key of its in-order successor, which is then unlinked from the right
    /// subtree. Returns `false` if the key wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_keys(1..=7);
    ///
    /// assert!(tree.delete(&4));
    /// assert!(!tree.delete(&42));
    ///
    /// // 5 was the successor of the old root.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3, &5, &6, &7]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = delete(&mut self.root, key);
        tracing::trace!(deleted, "delete");
        deleted
    }

    /// Finds the node holding `key`, descending left or right by comparison.
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| &root.min_node().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// The number of edges on the longest path from the root to a leaf. An
    /// empty tree has a height of `-1` and a single node has a height of `0`.
    pub fn height(&self) -> isize {
        link_height(&self.root)
    }

    /// Finds the node whose left or right child is `target`.
    ///
    /// The search navigates by comparing `target`'s key so `target` must sit
    /// where its key belongs, which holds for any node borrowed from this tree.
    /// Returns `None` when `target` is the root or isn't in this tree.
    pub fn find_parent(&self, target: &Node<K>) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find_parent(target))
    }

    /// Counts the edges between `node` and the root by repeatedly looking up
    /// the parent of the current position. Returns `None` if `node` isn't in
    /// this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_keys(1..=7);
    /// let depth_of = |k| tree.find(&k).and_then(|n| tree.depth(n));
    ///
    /// assert_eq!(depth_of(4), Some(0));
    /// assert_eq!(depth_of(6), Some(1));
    /// assert_eq!(depth_of(7), Some(2));
    /// assert_eq!(depth_of(8), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        let root = self.root()?;
        let mut current = node;
        let mut hops = 0;
        while !ptr::eq(current, root) {
            current = self.find_parent(current)?;
            hops += 1;
        }
        Some(hops)
    }

    /// Whether every node's subtrees differ in height by at most one. An
    /// empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the whole tree from its keys in ascending order, the same way
    /// [`Tree::from_keys`] does. Afterwards the height is minimal for the
    /// number of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree, Tree::from_keys(1..=7));
    /// ```
    pub fn rebalance(&mut self) {
        let old_height = self.height();
        let keys = drain_in_order(self.root.take());
        let nodes = keys.len();
        self.root = build_balanced(keys);
        tracing::debug!(
            nodes,
            old_height,
            new_height = self.height(),
            "rebalanced tree"
        );
    }
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Edges on the longest path down to a leaf. A leaf has a height of `0`.
    /// This is recomputed on every call.
    pub fn height(&self) -> usize {
        (1 + link_height(&self.left).max(link_height(&self.right))) as usize
    }

    /// Whether the subtree rooted here is height-balanced.
    pub fn is_balanced(&self) -> bool {
        (link_height(&self.left) - link_height(&self.right)).abs() <= 1
            && self.left().map_or(true, Self::is_balanced)
            && self.right().map_or(true, Self::is_balanced)
    }

    /// The node with the smallest key in this subtree, found by following
    /// left links.
    fn min_node(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    fn find_parent(&self, target: &Self) -> Option<&Self>
    where
        K: Ord,
    {
        let is_target = |child: Option<&Self>| child.map_or(false, |c| ptr::eq(c, target));
        if is_target(self.left()) || is_target(self.right()) {
            return Some(self);
        }

        match target.key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find_parent(target)),
            Ordering::Equal => None,
            Ordering::Greater => self.right().and_then(|n| n.find_parent(target)),
        }
    }
}

fn clone_link<K>(link: &Link<K>) -> Link<K>
where
    K: Clone,
{
    link.as_deref().map(|node| {
        Box::new(Node {
            key: node.key.clone(),
            left: clone_link(&node.left),
            right: clone_link(&node.right),
        })
    })
}

/// Height of a possibly empty subtree, with the empty subtree at `-1`.
fn link_height<K>(link: &Link<K>) -> isize {
    link.as_deref().map_or(-1, |n| n.height() as isize)
}

/// Builds a subtree from keys that are sorted and unique by making the key at
/// `len / 2` the root and recursing on both halves.
fn build_balanced<K>(mut keys: Vec<K>) -> Link<K> {
    if keys.is_empty() {
        return None;
    }

    let mid = keys.len() / 2;
    let right = keys.split_off(mid + 1);
    let key = keys.pop()?;
    Some(Box::new(Node {
        key,
        left: build_balanced(keys),
        right: build_balanced(right),
    }))
}

fn insert<K>(link: &mut Link<K>, key: K) -> bool
where
    K: Ord,
{
    match link {
        None => {
            *link = Some(Box::new(Node::leaf(key)));
            true
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, key),
        },
    }
}

fn delete<K>(link: &mut Link<K>, key: &K) -> bool
where
    K: Ord,
{
    let Some(node) = link else {
        return false;
    };

    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (None, right) => *link = right,
                (left, None) => *link = left,
                (Some(left), Some(right)) => {
                    let (successor, rest) = take_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
            true
        }
    }
}

/// Unlinks the smallest node of a subtree. Returns its key and what is left
/// of the subtree.
fn take_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

/// Consumes a subtree and returns its keys in ascending order.
fn drain_in_order<K>(root: Link<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut stack: Vec<Box<Node<K>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            return keys;
        };
        let Node { key, right, .. } = *node;
        keys.push(key);
        current = right;
    }
}
