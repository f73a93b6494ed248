//! An ordered set based on an AA tree.

use compare::{Compare, Natural};
use log::{debug, trace};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;
use super::cursor::Cursor;
use super::error::{Error, Result};
use super::node::{self, Dir, Left, Link, Node, Right};

/// An ordered set based on an AA tree.
///
/// Items are kept unique and sorted according to the tree's comparator. Inserting an item that
/// compares equal to one already present is an error rather than a replacement.
///
/// The behavior of this tree is undefined if an item's ordering relative to any other item
/// changes while the item is in the tree. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
pub struct OrderedTree<T, C = Natural<T>> where C: Compare<T> {
    root: Link<T>,
    cmp: C,
}

impl<T> OrderedTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedTree::with_cmp(compare::natural()) }

    /// Creates a tree holding the given items, inserted in sequence order.
    ///
    /// Fails as a whole on the first item that duplicates an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// use aa_tree::{Error, OrderedTree};
    ///
    /// let tree = OrderedTree::from_seq(vec![10, 30, 20, 15, 25]).unwrap();
    /// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [10, 15, 20, 25, 30]);
    ///
    /// assert_eq!(OrderedTree::from_seq(vec![1, 2, 1]), Err(Error::DuplicateElement(1)));
    /// ```
    pub fn from_seq<I>(items: I) -> Result<Self, T> where I: IntoIterator<Item=T> {
        let mut tree = OrderedTree::new();
        tree.try_extend(items)?;
        Ok(tree)
    }
}

impl<T, C> OrderedTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// # extern crate aa_tree;
    /// # extern crate compare;
    /// # fn main() {
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = aa_tree::OrderedTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// # }
    /// ```
    pub fn with_cmp(cmp: C) -> Self { OrderedTree { root: None, cmp: cmp } }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree.
    ///
    /// The tree does not keep a count, so this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { node::count(&self.root) }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// tree.clear();
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing tree");
        node::clear(&mut self.root);
    }

    /// Inserts an item into the tree.
    ///
    /// Fails with `DuplicateElement`, handing the item back, if the tree already contains an
    /// equal item. The tree is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use aa_tree::Error;
    ///
    /// let mut tree = aa_tree::OrderedTree::new();
    /// assert_eq!(tree.insert(5), Ok(()));
    /// assert_eq!(tree.insert(5), Err(Error::DuplicateElement(5)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), T> {
        node::insert(&mut self.root, &self.cmp, item).map_err(|item| {
            debug!("rejected duplicate element");
            Error::DuplicateElement(item)
        })
    }

    /// Inserts each item in turn, stopping at the first duplicate.
    ///
    /// Items inserted before the duplicate stay in the tree; the duplicate is handed back and
    /// the remaining items are dropped.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), T> where I: IntoIterator<Item=T> {
        for item in items { self.insert(item)?; }
        Ok(())
    }

    /// Removes the given item from the tree, returning `true` if the tree contained it.
    ///
    /// Removing an absent item is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.contains(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.take(item).is_some()
    }

    /// Removes the given item from the tree and returns the item that was stored, or `None` if
    /// the tree did not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    /// tree.insert(String::from("b")).unwrap();
    ///
    /// let key = String::from("b");
    /// assert_eq!(tree.take(&key), Some(String::from("b")));
    /// assert_eq!(tree.take(&key), None);
    /// ```
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        let removed = node::remove(&mut self.root, &self.cmp, item);
        if removed.is_none() { trace!("no element to remove"); }
        removed
    }

    /// Checks if the tree contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    /// assert!(!tree.contains(&1));
    /// tree.insert(1).unwrap();
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.get(item).is_some()
    }

    /// Returns a reference to the tree's item that is equal to the given item, or `None` if
    /// there is none.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item).map(Node::item)
    }

    /// Returns a reference to the tree's minimum item, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> { self.root.as_deref().map(Left::extremum).map(Node::item) }

    /// Returns a reference to the tree's maximum item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.min(), Some(&1));
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> { self.root.as_deref().map(Right::extremum).map(Node::item) }

    /// Exchanges the contents and comparators of two trees without copying any items.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.cmp, &mut other.cmp);
    }

    /// Returns a cursor at the tree's minimum item, or at the end if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T, C> {
        Cursor::new(&self.root, &self.cmp, self.root.as_deref().map(Left::extremum))
    }

    /// Returns a cursor one past the tree's maximum item.
    pub fn end(&self) -> Cursor<'_, T, C> { Cursor::new(&self.root, &self.cmp, None) }

    /// Returns a cursor at the tree's item that is equal to the given item, or at the end if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = aa_tree::OrderedTree::from_seq(vec![5, 3, 7]).unwrap();
    ///
    /// let mut cursor = tree.cursor(&5);
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.get(), Ok(&7));
    ///
    /// assert!(tree.cursor(&4).is_end());
    /// ```
    pub fn cursor<Q: ?Sized>(&self, item: &Q) -> Cursor<'_, T, C> where C: Compare<Q, T> {
        Cursor::new(&self.root, &self.cmp, node::get(&self.root, &self.cmp, item))
    }

    /// Returns an iterator over the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next_back(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter(node::Iter::new(self.root.as_deref())) }
}

impl<T, C> Drop for OrderedTree<T, C> where C: Compare<T> {
    fn drop(&mut self) { node::clear(&mut self.root); }
}

impl<T, C> Clone for OrderedTree<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { OrderedTree { root: self.root.clone(), cmp: self.cmp.clone() } }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, C> Debug for OrderedTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it { write!(f, ", {:?}", item)?; }
        }

        write!(f, "}}")
    }
}

impl<T, C> Default for OrderedTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { OrderedTree::with_cmp(C::default()) }
}

impl<T, C> Hash for OrderedTree<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        for item in self { item.hash(h); }
    }
}

impl<T, C> PartialEq for OrderedTree<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.iter().eq(other.iter()) }
}

impl<T, C> Eq for OrderedTree<T, C> where T: Eq, C: Compare<T> {}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    ///
    /// let mut it = tree.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next_back(), Some(3));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> { IntoIter(node::Iter::new(self.root.take())) }
}

/// An iterator that consumes the tree.
///
/// The iterator yields the items in ascending order according to the tree's comparator.
#[derive(Clone)]
pub struct IntoIter<T>(node::Iter<Box<Node<T>>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the tree.
///
/// The iterator yields the items in ascending order according to the tree's comparator. It
/// keeps the pending ancestors of both ends on a stack, so each step costs O(1) amortized and no
/// comparisons.
///
/// # Examples
///
/// Acquire through [`OrderedTree::iter`](struct.OrderedTree.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let tree = aa_tree::OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
///
/// for item in &tree {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a>(node::Iter<&'a Node<T>>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
