mod iter;


use compare::Compare;
use std::cmp::{self, Ordering::*};
use std::mem::{replace, swap};

pub use self::iter::Iter;

pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    level: usize,
    item: T,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node { left: None, right: None, level: 1, item: item }
    }

    pub fn item(&self) -> &T { &self.item }

    // Remove left horizontal link by rotating right
    fn skew(node: &mut Box<Self>) {
        let level = node.level;

        match node.left.take() {
            Some(mut save) if save.level == level => {
                swap(&mut node.left, &mut save.right); // save.right now None
                swap(node, &mut save);
                node.right = Some(save);
            }
            left => node.left = left,
        }
    }

    // Remove dual horizontal link by rotating left and increasing level of
    // the promoted node
    fn split(node: &mut Box<Self>) {
        let level = node.level;

        match node.right.take() {
            Some(mut save) if save.right.as_ref().map_or(false, |x| x.level == level) => {
                swap(&mut node.right, &mut save.left); // save.left now None
                save.level += 1;
                swap(node, &mut save);
                node.left = Some(save);
            }
            right => node.right = right,
        }
    }

    // Lower the level to what the children justify after a removal below this
    // node, then clear any horizontal links that became illegal, up to two
    // levels down the right spine.
    fn rebalance(node: &mut Box<Self>) {
        let left_level = node.left.as_ref().map_or(0, |x| x.level);
        let right_level = node.right.as_ref().map_or(0, |x| x.level);
        let should_be = cmp::min(left_level, right_level) + 1;

        if should_be < node.level {
            node.level = should_be;

            if let Some(ref mut right) = node.right {
                if right.level > should_be { right.level = should_be; }
            }
        }

        Node::skew(node);

        if let Some(ref mut right) = node.right {
            Node::skew(right);
            if let Some(ref mut x) = right.right { Node::skew(x); }
        }

        Node::split(node);
        if let Some(ref mut x) = node.right { Node::split(x); }
    }
}

/// Inserts `item` below `link`, handing it back if an equal item is already present.
///
/// Nothing is modified when the item is rejected.
pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, item: T) -> Result<(), T> where C: Compare<T> {
    match *link {
        None => {
            *link = Some(Box::new(Node::new(item)));
            Ok(())
        }
        Some(ref mut node) => {
            match cmp.compare(&item, &node.item) {
                Equal => return Err(item),
                Less => insert(&mut node.left, cmp, item)?,
                Greater => insert(&mut node.right, cmp, item)?,
            }

            Node::skew(node);
            Node::split(node);
            Ok(())
        }
    }
}

/// Removes the item equal to `item` from below `link` and returns it.
///
/// An interior node is never unlinked: it takes over the item of its in-order predecessor (when
/// it has a left subtree) or successor (otherwise), and that neighbour is removed recursively.
pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, item: &Q) -> Option<T>
    where C: Compare<Q, T> {

    let node = link.as_mut()?;

    let removed = match cmp.compare(item, &node.item) {
        Less => remove(&mut node.left, cmp, item)?,
        Greater => remove(&mut node.right, cmp, item)?,
        Equal => {
            let replacement = if node.left.is_some() {
                Right::remove_extremum(&mut node.left)
            } else {
                Left::remove_extremum(&mut node.right)
            };

            match replacement {
                Some(replacement) => replace(&mut node.item, replacement),
                None => return link.take().map(|leaf| leaf.item),
            }
        }
    };

    Node::rebalance(node);
    Some(removed)
}

pub fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, item: &Q) -> Option<&'a Node<T>>
    where C: Compare<Q, T> {

    while let Some(ref node) = *link {
        match cmp.compare(item, &node.item) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// Counts the nodes below `link`.
pub fn count<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}

/// Releases every node below `link`, children before their parents, without recursion.
pub fn clear<T>(link: &mut Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.take().into_iter().collect();

    while let Some(mut node) = pending.pop() {
        match (node.left.take(), node.right.take()) {
            (None, None) => drop(node),
            (left, right) => {
                pending.push(node);
                pending.extend(left);
                pending.extend(right);
            }
        }
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward<T>(node: &Node<T>) -> &Link<T>;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    /// Follows `forward` links from `node` as far as they go.
    fn extremum<T>(mut node: &Node<T>) -> &Node<T> {
        while let Some(ref child) = *Self::forward(node) { node = &**child; }
        node
    }

    /// Removes the extremum below `link` and returns its item.
    ///
    /// The extremum is unlinked only when it is a leaf. Otherwise it has a single child in the
    /// opposite direction, so it takes over the item of its neighbour in that subtree instead.
    fn remove_extremum<T>(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;

        let item = if Self::forward(node).is_some() {
            Self::remove_extremum(Self::forward_mut(node))?
        } else if Self::Opposite::forward(node).is_some() {
            let replacement = Self::remove_extremum(Self::Opposite::forward_mut(node))?;
            replace(&mut node.item, replacement)
        } else {
            return link.take().map(|leaf| leaf.item);
        };

        Node::rebalance(node);
        Some(item)
    }

    /// Returns the in-order neighbour of `node` in the `forward` direction.
    ///
    /// Nodes hold no parent link, so when `node` has no `forward` subtree the nearest ancestor
    /// reached through an opposite link is found again by descending from `root`.
    fn neighbor<'a, T, C>(root: &'a Link<T>, cmp: &C, node: &'a Node<T>) -> Option<&'a Node<T>>
        where C: Compare<T> {

        if let Some(ref child) = *Self::forward(node) {
            return Some(Self::Opposite::extremum(child));
        }

        let mut link = root;
        let mut ancestor = None;

        while let Some(ref current) = *link {
            match cmp.compare(&node.item, &current.item) {
                Equal => break,
                order => link =
                    if Self::left() == (order == Less) {
                        Self::forward(current)
                    } else {
                        ancestor = Some(&**current);
                        Self::Opposite::forward(current)
                    },
            }
        }

        ancestor
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}
