use std::fmt;

use crate::tree::NodeID;

/// Errors reported by a [`KdTree`](crate::KdTree).
///
/// Configuration errors are only reported when a tree is created; the other kinds signal a misuse
/// of a tree or of its nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The bucket size of a tree was zero.
    InvalidBucketSize,
    /// The tree was given a zero dimension.
    ZeroDimension,
    /// An inserted item does not have the dimension of the tree.
    DimensionMismatch {
        /// Dimension of the tree.
        expected: usize,
        /// Dimension of the item.
        found: usize,
    },
    /// The tree was modified or never built and has to be built before being traversed.
    NotBuilt,
    /// The tree was built without any item, so it has no root.
    Empty,
    /// The children of a leaf were requested.
    LeafHasNoChildren(NodeID),
    /// A node that does not exist in the tree was requested.
    UnknownNode(NodeID),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBucketSize => write!(f, "bucket size must be at least 1"),
            Self::ZeroDimension => write!(f, "dimension must be at least 1"),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "item has dimension {found} but the tree has dimension {expected}"
            ),
            Self::NotBuilt => write!(f, "tree is not built"),
            Self::Empty => write!(f, "tree contains no item"),
            Self::LeafHasNoChildren(id) => write!(f, "node {id} is a leaf and has no children"),
            Self::UnknownNode(id) => write!(f, "node {id} does not exist"),
        }
    }
}

impl std::error::Error for Error {}
