#![warn(missing_docs)]
//! # kdspace
//!
//! kdspace is a crate providing a generic k-d tree to partition space in Rust.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide the spatial structure that query algorithms (nearest
//! neighbours, range searches, collision detection...) are built upon, without imposing any of
//! them. A [`KdTree`] owns a collection of items, recursively splits the space they occupy with
//! axis-aligned hyperplanes, and exposes the resulting nodes for these algorithms to traverse.
//!
//! The tree is generic over the items it stores, the way their coordinates are read, the strategy
//! used to split nodes and the data attached to every node. Nodes and items are stored in two flat
//! vectors: the nodes of any subtree and the items they contain are always contiguous.
//!
//! kdspace can use [rayon](https://github.com/rayon-rs/rayon) to build trees on multiple threads.
//! Enable the `parallel` feature to access `KdTree::build_parallel`.
//!
//! ## Using kdspace
//!
//! ### Getting started
//!
//! Items are located with a [`Coordinate`] accessor. The [`Intrinsic`] accessor is used for items
//! implementing the [`Position`] trait, which is implemented for arrays, tuples and the vector
//! types of `glam`, `nalgebra` and `ultraviolet` (enable the corresponding features). It can be
//! derived for types that have a field named `position` or a field marked `#[position]`.
//!
//! ```
//! use kdspace::prelude::*;
//!
//! #[derive(Position)]
//! struct Particle {
//!     position: [f64; 3],
//!     charge: f64,
//! }
//!
//! let particles = (0..100).map(|i| Particle {
//!     position: [i as f64, (i % 7) as f64, (i % 3) as f64],
//!     charge: 1.0,
//! });
//!
//! let mut tree = KdTree::<Particle, 3>::new(Intrinsic, MedianSplit::default())?;
//! tree.insert_all(particles)?;
//!
//! let report = tree.build();
//! assert!(report.is_clean());
//! assert!(tree.leaves()?.all(|leaf| leaf.data().len() <= Config::DEFAULT_BUCKET_SIZE));
//! # Ok::<(), Error>(())
//! ```
//!
//! Items that do not know their position can be stored with a [`FnCoordinate`] accessor instead.
//!
//! ### Splitting strategies
//!
//! How nodes are split is decided by a [`Splitter`](tree::Splitter):
//!
//! - [`RotatingSplit`](tree::RotatingSplit) halves the box of a node, cycling through the axes.
//! - [`MedianSplit`](tree::MedianSplit) splits the items of a node at their median coordinate
//!   along the widest axis of its box, producing balanced trees.
//!
//! [`Strategy`](tree::Strategy) wraps both to choose one at runtime.
//!
//! ### Traversing the tree
//!
//! Query algorithms start from [`KdTree::root`] and descend through
//! [`NodeRef`](tree::NodeRef)s, pruning nodes with their box or splitting hyperplane. Items
//! lying exactly on a hyperplane belong to the upper child.
//!
//! ```
//! use kdspace::prelude::*;
//!
//! fn count_within(node: NodeRef<[f32; 2], f32, 2>, region: &BoundingBox<[f32; 2]>) -> usize {
//!     if !node.bbox().intersects(region) {
//!         return 0;
//!     }
//!     match node.children() {
//!         Ok((lower, upper)) => count_within(lower, region) + count_within(upper, region),
//!         Err(_) => node.data().iter().filter(|p| region.contains(p)).count(),
//!     }
//! }
//!
//! let points = (0..20).flat_map(|x| (0..20).map(move |y| [x as f32, y as f32]));
//! let config = Config::with_bucket_size(4);
//! let mut tree = KdTree::<_, 2>::from_items(points, Intrinsic, MedianSplit::default(), config)?;
//! tree.build();
//!
//! let region = BoundingBox::new([2.0, 2.0], [5.0, 3.0]);
//! assert_eq!(count_within(tree.root()?, &region), 8);
//! # Ok::<(), Error>(())
//! ```
//!
//! Every node can also carry data computed from its items when the tree is built, such as
//! [`TightBounds`](tree::TightBounds). See [`NodeExtension`](tree::NodeExtension).

/// Error type of the crate.
pub mod error;
/// Numeric traits required from coordinates.
pub mod math;
/// Traits and types to locate items in space.
pub mod position;
/// K-d tree and space partitioning implementation.
pub mod tree;

mod impls;
#[cfg(feature = "parallel")]
mod parallel;
mod sequential;

pub use error::Error;
pub use position::*;
pub use tree::{Config, KdTree};

/// Commonly used types, re-exported.
pub mod prelude {
    // Common traits and their derive macro.
    pub use crate::{Coordinate, FnCoordinate, Intrinsic, Position};
    pub use kdspace_derive::Position;

    pub use crate::{
        math::Scalar,
        tree::{
            AxisPolicy, BoundingBox, BuildReport, Config, Hyperplane, KdTree, MedianSplit,
            NodeExtension, NodeRef, RotatingSplit, Splitter, Strategy, TightBounds,
        },
        Error,
    };
}
