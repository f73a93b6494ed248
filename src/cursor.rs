//! A bidirectional cursor over an ordered tree.

use compare::Compare;
use log::trace;
use std::fmt::{self, Debug};
use std::ptr;
use super::error::{Error, Result};
use super::node::{Dir, Left, Link, Node, Right};

/// A position in an [`OrderedTree`](../tree/struct.OrderedTree.html): either one of its items or
/// the end, one past the maximum.
///
/// A cursor keeps no path from the root. When stepping out of a node without a subtree in the
/// direction of travel, it finds the next item by descending from the root again, which costs
/// O(log n) comparisons for that step. Use [`OrderedTree::iter`] for plain traversals.
///
/// Two cursors are equal if they are positioned at the same node, or are both at the end.
///
/// [`OrderedTree::iter`]: ../tree/struct.OrderedTree.html#method.iter
///
/// # Examples
///
/// ```
/// let tree = aa_tree::OrderedTree::from_seq(vec![10, 30, 20]).unwrap();
///
/// let mut cursor = tree.end();
/// let mut reversed = vec![];
///
/// while cursor != tree.begin() {
///     cursor.move_prev().unwrap();
///     reversed.push(*cursor.get().unwrap());
/// }
///
/// assert_eq!(reversed, [30, 20, 10]);
/// ```
pub struct Cursor<'a, T: 'a, C: 'a> {
    root: &'a Link<T>,
    cmp: &'a C,
    current: Option<&'a Node<T>>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(crate) fn new(root: &'a Link<T>, cmp: &'a C, current: Option<&'a Node<T>>) -> Self {
        Cursor { root: root, cmp: cmp, current: current }
    }

    /// Returns a reference to the item at the cursor.
    ///
    /// Fails with `InvalidDereference` if the cursor is at the end.
    pub fn get(&self) -> Result<&'a T, T> {
        self.current.map(Node::item).ok_or(Error::InvalidDereference)
    }

    /// Checks if the cursor is at the end.
    pub fn is_end(&self) -> bool { self.current.is_none() }
}

impl<'a, T, C> Cursor<'a, T, C> where C: Compare<T> {
    /// Moves the cursor to the next greater item, or to the end if it is at the maximum.
    ///
    /// Fails with `InvalidAdvance` if the cursor is already at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use aa_tree::Error;
    ///
    /// let tree = aa_tree::OrderedTree::from_seq(vec![2, 1]).unwrap();
    /// let mut cursor = tree.begin();
    ///
    /// assert_eq!(cursor.get(), Ok(&1));
    /// assert_eq!(cursor.move_next(), Ok(()));
    /// assert_eq!(cursor.get(), Ok(&2));
    /// assert_eq!(cursor.move_next(), Ok(()));
    /// assert_eq!(cursor.get(), Err(Error::InvalidDereference));
    /// assert_eq!(cursor.move_next(), Err(Error::InvalidAdvance));
    /// ```
    pub fn move_next(&mut self) -> Result<(), T> {
        match self.current {
            None => {
                trace!("cannot advance a cursor at the end");
                Err(Error::InvalidAdvance)
            }
            Some(node) => {
                self.current = Right::neighbor(self.root, self.cmp, node);
                Ok(())
            }
        }
    }

    /// Moves the cursor to the next smaller item. A cursor at the end moves to the maximum.
    ///
    /// Fails with `InvalidAdvance`, leaving the cursor in place, if it is at the minimum or if
    /// the tree is empty.
    pub fn move_prev(&mut self) -> Result<(), T> {
        let prev = match self.current {
            None => self.root.as_deref().map(Right::extremum),
            Some(node) => Left::neighbor(self.root, self.cmp, node),
        };

        match prev {
            None => {
                trace!("cannot retreat a cursor at the beginning");
                Err(Error::InvalidAdvance)
            }
            Some(node) => {
                self.current = Some(node);
                Ok(())
            }
        }
    }
}

impl<'a, T, C> Clone for Cursor<'a, T, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T, C> Copy for Cursor<'a, T, C> {}

impl<'a, T, C> PartialEq for Cursor<'a, T, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<'a, T, C> Eq for Cursor<'a, T, C> {}

impl<'a, T, C> Debug for Cursor<'a, T, C> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.current {
            None => write!(f, "Cursor(end)"),
            Some(node) => write!(f, "Cursor({:?})", node.item()),
        }
    }
}
