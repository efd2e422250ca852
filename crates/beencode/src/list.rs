//! List node.

use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::node::Node;

/// An ordered sequence of nodes of any kind.
///
/// Element order is significant and survives a decode/encode round trip.
///
/// # Examples
///
/// ```
/// use beencode::{List, Node};
///
/// let mut list = List::new();
/// list.push(Node::from("spam"));
/// list.push(Node::Integer(42));
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].as_integer(), Some(42));
/// assert_eq!(Node::from(list).encode(), b"l4:spami42ee");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List(Vec<Node>);

impl List {
    pub fn new() -> Self {
        List(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        List(Vec::with_capacity(capacity))
    }

    /// Appends a node to the end of the list.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.0.push(node.into());
    }

    /// Alias of [`push`](List::push).
    pub fn add(&mut self, node: impl Into<Node>) {
        self.push(node);
    }

    /// Inserts a node at `index`, shifting later elements to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, node: impl Into<Node>) {
        self.0.insert(index, node.into());
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.0.get_mut(index)
    }

    /// Replaces the node at `index`, returning the previous one, or `None`
    /// (leaving the list untouched) if `index` is out of bounds.
    pub fn set(&mut self, index: usize, node: impl Into<Node>) -> Option<Node> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, node.into()))
    }

    /// Removes and returns the node at `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Node> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl From<Vec<Node>> for List {
    fn from(nodes: Vec<Node>) -> Self {
        List(nodes)
    }
}

impl<N: Into<Node>> FromIterator<N> for List {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        List(iter.into_iter().map(Into::into).collect())
    }
}

impl<N: Into<Node>> Extend<N> for List {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for List {
    type Item = Node;
    type IntoIter = vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for List {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.0[index]
    }
}

impl IndexMut<usize> for List {
    fn index_mut(&mut self, index: usize) -> &mut Node {
        &mut self.0[index]
    }
}
