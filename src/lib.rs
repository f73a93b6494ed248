//! An ordered set based on an AA tree.
//!
//! An AA tree is a binary search tree balanced through a per-node level instead of a color:
//! leaves sit at level one, a left child is always exactly one level below its parent, and at
//! most one same-level ("horizontal") link may hang off the right of any node. Two rotations,
//! `skew` and `split`, restore these rules after every insertion and removal, so the height
//! stays logarithmic in the number of items.
//!
//! # Examples
//!
//! ```
//! use aa_tree::{Error, OrderedTree};
//!
//! let mut tree = OrderedTree::from_seq(vec![5, 3, 7, 2, 4, 6, 8]).unwrap();
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.insert(5), Err(Error::DuplicateElement(5)));
//!
//! tree.remove(&3);
//! tree.remove(&7);
//! assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [2, 4, 5, 6, 8]);
//!
//! let mut cursor = tree.begin();
//! cursor.move_next().unwrap();
//! assert_eq!(cursor.get(), Ok(&4));
//! ```

mod node;

#[cfg(feature = "quickcheck")]
mod arbitrary;
#[cfg(feature = "ordered_iter")]
mod ordered;

pub mod cursor;
pub mod error;
pub mod tree;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use tree::OrderedTree;
