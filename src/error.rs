//! Errors reported by tree and cursor operations.

use thiserror::Error;

/// A failed operation on an [`OrderedTree`](../tree/struct.OrderedTree.html) or one of its
/// [`Cursor`](../cursor/struct.Cursor.html)s.
///
/// A failed operation leaves the tree and the cursor exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error<T> {
    /// The tree already holds an item equal to the one being inserted.
    ///
    /// The rejected item is handed back.
    #[error("duplicate element")]
    DuplicateElement(T),

    /// The cursor is positioned at the end and has no item to read.
    #[error("iterator out of range")]
    InvalidDereference,

    /// The cursor cannot move in the requested direction.
    #[error("iterator cannot be moved past the bounds of the tree")]
    InvalidAdvance,
}

impl<T> Error<T> {
    /// Returns the rejected item of a `DuplicateElement` error.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = aa_tree::OrderedTree::new();
    /// tree.insert(String::from("a")).unwrap();
    ///
    /// let err = tree.insert(String::from("a")).unwrap_err();
    /// assert_eq!(err.into_inner(), Some(String::from("a")));
    /// ```
    pub fn into_inner(self) -> Option<T> {
        match self {
            Error::DuplicateElement(item) => Some(item),
            Error::InvalidDereference | Error::InvalidAdvance => None,
        }
    }
}

/// The result of a tree or cursor operation.
pub type Result<R, T> = ::std::result::Result<R, Error<T>>;
