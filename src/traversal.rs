//! Traversals over a [`Tree`]. Every order is available as a lazy iterator
//! over the keys and, for callers that want a side effect per key, as
//! [`Tree::walk`] which both calls a visitor and collects the keys.
//!
//! The iterators keep their own stack (or queue, for level order) so walking
//! a degenerate tree doesn't recurse once per level.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::traversal::Order;
//! use balanced_bst::tree::Tree;
//!
//! let tree = Tree::from_keys(1..=7);
//!
//! assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
//! assert_eq!(tree.pre_order(), vec![&4, &2, &1, &3, &6, &5, &7]);
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7]);
//! assert_eq!(tree.post_order(), vec![&1, &3, &2, &5, &7, &6, &4]);
//!
//! let mut sum = 0;
//! let visited = tree.walk(Order::In, |k| sum += k);
//! assert_eq!(sum, 28);
//! assert_eq!(visited.len(), 7);
//! ```

use std::collections::VecDeque;

use crate::tree::{Node, Tree};

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth first: the root, then every node one level down (left to
    /// right), and so on.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. For a BST
    /// this yields the keys in ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// A lazy traversal of a tree's keys. Created by [`Tree::iter`].
pub struct Traversal<'a, K> {
    order: Order,
    pending: Pending<'a, K>,
}

enum Pending<'a, K> {
    /// FIFO of nodes still to visit for [`Order::Level`].
    Queue(VecDeque<&'a Node<K>>),
    /// LIFO of frames for the depth first orders. A frame marked `expanded`
    /// is yielded when popped; otherwise it is replaced by its node and
    /// children in the order being walked.
    Stack(Vec<Frame<'a, K>>),
}

struct Frame<'a, K> {
    node: &'a Node<K>,
    expanded: bool,
}

impl<'a, K> Frame<'a, K> {
    fn unexpanded(node: &'a Node<K>) -> Self {
        Self {
            node,
            expanded: false,
        }
    }
}

impl<'a, K> Traversal<'a, K> {
    fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let pending = match order {
            Order::Level => Pending::Queue(root.into_iter().collect()),
            Order::Pre | Order::In | Order::Post => {
                Pending::Stack(root.into_iter().map(Frame::unexpanded).collect())
            }
        };
        Self { order, pending }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.pending {
            Pending::Queue(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node.key())
            }
            Pending::Stack(stack) => loop {
                let Frame { node, expanded } = stack.pop()?;
                if expanded {
                    return Some(node.key());
                }

                // Pushed in reverse so they pop in visiting order.
                let left = node.left().map(Frame::unexpanded);
                let right = node.right().map(Frame::unexpanded);
                let this = Frame {
                    node,
                    expanded: true,
                };
                match self.order {
                    Order::Pre => stack.extend(right.into_iter().chain(left).chain([this])),
                    Order::In => stack.extend(right.into_iter().chain([this]).chain(left)),
                    Order::Post => stack.extend([this].into_iter().chain(right).chain(left)),
                    Order::Level => unreachable!("level order uses a queue"),
                }
            },
        }
    }
}

impl<K> Tree<K> {
    /// Lazily walks the keys in the given order. An empty tree yields nothing.
    pub fn iter(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(self.root(), order)
    }

    /// Calls `visit` on each key in the given order and returns the visited
    /// keys in that same order.
    pub fn walk<F>(&self, order: Order, mut visit: F) -> Vec<&K>
    where
        F: FnMut(&K),
    {
        self.iter(order).inspect(|k| visit(*k)).collect()
    }

    /// The keys in breadth first order.
    pub fn level_order(&self) -> Vec<&K> {
        self.iter(Order::Level).collect()
    }

    /// The keys in pre-order.
    pub fn pre_order(&self) -> Vec<&K> {
        self.iter(Order::Pre).collect()
    }

    /// The keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.iter(Order::In).collect()
    }

    /// The keys in post-order.
    pub fn post_order(&self) -> Vec<&K> {
        self.iter(Order::Post).collect()
    }
}
