use std::collections::VecDeque;
use std::iter::FusedIterator;
use super::Node;

/// A handle to a node that can give up its children and, eventually, its item.
pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Item = &'a T;

    fn item(self) -> &'a T { &self.item }

    fn left(&mut self) -> Option<&'a Node<T>> {
        let node: &'a Node<T> = *self;
        node.left.as_deref()
    }

    fn right(&mut self) -> Option<&'a Node<T>> {
        let node: &'a Node<T> = *self;
        node.right.as_deref()
    }
}

impl<T> NodeRef for Box<Node<T>> {
    type Item = T;

    fn item(self) -> T { let node = *self; node.item }

    fn left(&mut self) -> Option<Box<Node<T>>> { self.left.take() }

    fn right(&mut self) -> Option<Box<Node<T>>> { self.right.take() }
}

/// An in-order traversal that keeps its pending ancestors in a deque.
///
/// The front end of the traversal works on the back of the deque and vice versa, so both ends
/// can be consumed independently without ever revisiting the root.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    visits: VecDeque<Visit<N>>,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>) -> Iter<N> {
        Iter { visits: root.into_iter().map(Visit::new).collect() }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let visit = self.visits.back_mut()?;

            if visit.done(Side::Left) {
                let right = visit.take(Side::Right);
                let visit = self.visits.pop_back()?;
                if let Some(node) = right { self.visits.push_back(Visit::new(node)); }
                return Some(visit.node.item());
            }

            if let Some(node) = visit.take(Side::Left) { self.visits.push_back(Visit::new(node)); }
        }
    }
}

impl<N> DoubleEndedIterator for Iter<N> where N: NodeRef {
    fn next_back(&mut self) -> Option<N::Item> {
        loop {
            let visit = self.visits.front_mut()?;

            if visit.done(Side::Right) {
                let left = visit.take(Side::Left);
                let visit = self.visits.pop_front()?;
                if let Some(node) = left { self.visits.push_front(Visit::new(node)); }
                return Some(visit.node.item());
            }

            if let Some(node) = visit.take(Side::Right) { self.visits.push_front(Visit::new(node)); }
        }
    }
}

impl<N> FusedIterator for Iter<N> where N: NodeRef {}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Visit<N> where N: NodeRef {
    node: N,
    left_taken: bool,
    right_taken: bool,
}

impl<N> Visit<N> where N: NodeRef {
    fn new(node: N) -> Visit<N> { Visit { node: node, left_taken: false, right_taken: false } }

    fn done(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_taken,
            Side::Right => self.right_taken,
        }
    }

    // Each child is handed out at most once, whichever end asks for it first.
    fn take(&mut self, side: Side) -> Option<N> {
        match side {
            Side::Left if !self.left_taken => { self.left_taken = true; self.node.left() }
            Side::Right if !self.right_taken => { self.right_taken = true; self.node.right() }
            _ => None,
        }
    }
}
