use std::ops::Range;

use crate::{
    math::Scalar,
    tree::{BoundingBox, Hyperplane},
    Coordinate, Error,
};

/// Index of a [`Node`] in a [`KdTree`](crate::KdTree).
pub type NodeID = usize;

/// Children of an internal [`Node`] and the [`Hyperplane`] separating them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split<S> {
    /// Plane separating the children.
    pub hyperplane: Hyperplane<S>,
    /// Index of the child below the plane. Always the node directly following its parent.
    pub lower: NodeID,
    /// Index of the child above the plane, ties included.
    pub upper: NodeID,
}

/// Kind of a [`Node`]: either internal with two children or external without children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind<S> {
    /// Node with child nodes.
    Internal(Split<S>),
    /// Node without children.
    External,
}

/// Region of space in a [`KdTree`](crate::KdTree).
///
/// A node owns no data: it refers to the items it contains and to the nodes of its subtree with
/// two ranges into the tree's storages. Both ranges are contiguous because nodes are stored depth
/// first, the lower subtree before the upper one, and items are reordered accordingly.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<S, const D: usize, X = ()> {
    pub(crate) kind: NodeKind<S>,
    pub(crate) bbox: BoundingBox<[S; D]>,
    pub(crate) data: Range<usize>,
    pub(crate) nodes: Range<NodeID>,
    pub(crate) depth: usize,
    pub(crate) extension: X,
}

impl<S, const D: usize, X> Node<S, D, X> {
    /// Returns the [`NodeKind`] of this node.
    #[inline]
    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::External)
    }

    /// Returns the [`Split`] of this node if it is internal.
    #[inline]
    pub fn split(&self) -> Option<&Split<S>> {
        match &self.kind {
            NodeKind::Internal(split) => Some(split),
            NodeKind::External => None,
        }
    }

    /// Returns the [`Hyperplane`] splitting this node if it is internal.
    #[inline]
    pub fn hyperplane(&self) -> Option<&Hyperplane<S>> {
        self.split().map(|split| &split.hyperplane)
    }

    /// Returns the index of the axis this node is split along if it is internal.
    #[inline]
    pub fn splitting_dimension(&self) -> Option<usize> {
        self.hyperplane().map(|hyperplane| hyperplane.dimension)
    }

    /// Returns the coordinate this node is split at if it is internal.
    #[inline]
    pub fn splitting_position(&self) -> Option<S>
    where
        S: Copy,
    {
        self.hyperplane().map(|hyperplane| hyperplane.anchor)
    }

    /// Returns the box of the region covered by this node.
    ///
    /// This is the box resulting from the successive splits of the ancestors, so it contains every
    /// item of the node but is not necessarily the smallest box doing so.
    #[inline]
    pub fn bbox(&self) -> &BoundingBox<[S; D]> {
        &self.bbox
    }

    /// Returns the range of the items of this node and its descendants in the tree's data.
    #[inline]
    pub fn data_range(&self) -> Range<usize> {
        self.data.clone()
    }

    /// Returns the range of this node and its descendants in the tree's nodes.
    #[inline]
    pub fn node_range(&self) -> Range<NodeID> {
        self.nodes.clone()
    }

    /// Returns the number of items contained in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this node contains no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the depth of this node, zero for the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the user data attached to this node.
    #[inline]
    pub fn extension(&self) -> &X {
        &self.extension
    }

    /// Moves the node and its children `offset` positions further in the node storage.
    #[inline]
    pub(crate) fn shift(&mut self, offset: NodeID) {
        self.nodes = self.nodes.start + offset..self.nodes.end + offset;
        if let NodeKind::Internal(split) = &mut self.kind {
            split.lower += offset;
            split.upper += offset;
        }
    }
}

/// Trait for user data attached to every [`Node`] of a [`KdTree`](crate::KdTree).
///
/// The data is computed once, when the node is created, from its box and its items. Implemented
/// for `()` (no data) and [`TightBounds`].
///
/// # Example
///
/// ```
/// # use kdspace::prelude::*;
/// # use kdspace::tree::BoundingBox;
/// struct Count(usize);
///
/// impl<T, S, const D: usize> NodeExtension<T, S, D> for Count {
///     fn compute<C>(_: &BoundingBox<[S; D]>, data: &[T], _: &C) -> Self
///     where
///         C: Coordinate<T, Scalar = S>,
///     {
///         Count(data.len())
///     }
/// }
///
/// let config = Config { bucket_size: 1, ..Config::default() };
/// let mut tree =
///     KdTree::<[f32; 2], 2, _, _, Count>::with_config(Intrinsic, MedianSplit::default(), config)
///         .unwrap();
/// tree.insert_all([[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]).unwrap();
/// tree.build();
///
/// assert_eq!(tree.root().unwrap().extension().0, 3);
/// ```
pub trait NodeExtension<T, S, const D: usize>: Sized {
    /// Computes the data of the node with the given box and items.
    fn compute<C>(bbox: &BoundingBox<[S; D]>, data: &[T], coordinate: &C) -> Self
    where
        C: Coordinate<T, Scalar = S>;
}

impl<T, S, const D: usize> NodeExtension<T, S, D> for () {
    #[inline]
    fn compute<C>(_: &BoundingBox<[S; D]>, _: &[T], _: &C) -> Self
    where
        C: Coordinate<T, Scalar = S>,
    {
    }
}

/// [`NodeExtension`] storing the smallest box containing the items of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TightBounds<S, const D: usize>(pub BoundingBox<[S; D]>);

impl<T, S, const D: usize> NodeExtension<T, S, D> for TightBounds<S, D>
where
    S: Scalar,
{
    #[inline]
    fn compute<C>(_: &BoundingBox<[S; D]>, data: &[T], coordinate: &C) -> Self
    where
        C: Coordinate<T, Scalar = S>,
    {
        Self(BoundingBox::enclosing(data, coordinate))
    }
}

/// Lightweight handle to a [`Node`] of a built [`KdTree`](crate::KdTree), giving access to the
/// items and nodes it covers.
pub struct NodeRef<'a, T, S, const D: usize, X = ()> {
    id: NodeID,
    nodes: &'a [Node<S, D, X>],
    data: &'a [T],
}

impl<T, S, const D: usize, X> Clone for NodeRef<'_, T, S, D, X> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S, const D: usize, X> Copy for NodeRef<'_, T, S, D, X> {}

impl<T, S, const D: usize, X> std::fmt::Debug for NodeRef<'_, T, S, D, X>
where
    S: std::fmt::Debug,
    X: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("node", self.node())
            .finish_non_exhaustive()
    }
}

impl<'a, T, S, const D: usize, X> NodeRef<'a, T, S, D, X> {
    /// Creates a handle to the node `id`, failing if there is no such node.
    #[inline]
    pub(crate) fn new(
        id: NodeID,
        nodes: &'a [Node<S, D, X>],
        data: &'a [T],
    ) -> Result<Self, Error> {
        if id < nodes.len() {
            Ok(Self { id, nodes, data })
        } else {
            Err(Error::UnknownNode(id))
        }
    }

    /// Returns the index of the node.
    #[inline]
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// Returns the underlying [`Node`].
    #[inline]
    pub fn node(&self) -> &'a Node<S, D, X> {
        &self.nodes[self.id]
    }

    /// Returns true if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the lower and upper children of the node, failing if it is a leaf.
    #[inline]
    pub fn children(&self) -> Result<(Self, Self), Error> {
        match self.node().split() {
            Some(split) => Ok((self.with_id(split.lower), self.with_id(split.upper))),
            None => Err(Error::LeafHasNoChildren(self.id)),
        }
    }

    /// Returns the child below the splitting hyperplane, failing if the node is a leaf.
    #[inline]
    pub fn lower(&self) -> Result<Self, Error> {
        self.children().map(|(lower, _)| lower)
    }

    /// Returns the child above the splitting hyperplane, failing if the node is a leaf.
    #[inline]
    pub fn upper(&self) -> Result<Self, Error> {
        self.children().map(|(_, upper)| upper)
    }

    /// Returns the items contained in the node and its descendants.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        &self.data[self.node().data_range()]
    }

    /// Returns the node followed by all its descendants, in depth-first order.
    #[inline]
    pub fn subtree(&self) -> &'a [Node<S, D, X>] {
        &self.nodes[self.node().node_range()]
    }

    /// Returns an iterator over the leaves of the subtree rooted at this node, from the lowest to
    /// the uppermost.
    #[inline]
    pub fn leaves(&self) -> impl Iterator<Item = Self> + 'a
    where
        T: 'a,
        S: 'a,
        X: 'a,
    {
        let (nodes, data) = (self.nodes, self.data);
        self.node()
            .node_range()
            .filter(move |&id| nodes[id].is_leaf())
            .map(move |id| Self { id, nodes, data })
    }

    /// Returns the [`Hyperplane`] splitting the node if it is internal.
    #[inline]
    pub fn hyperplane(&self) -> Option<&'a Hyperplane<S>> {
        self.node().hyperplane()
    }

    /// Returns the box of the region covered by the node.
    #[inline]
    pub fn bbox(&self) -> &'a BoundingBox<[S; D]> {
        self.node().bbox()
    }

    /// Returns the user data attached to the node.
    #[inline]
    pub fn extension(&self) -> &'a X {
        self.node().extension()
    }

    /// Returns the depth of the node, zero for the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.node().depth()
    }

    #[inline]
    fn with_id(&self, id: NodeID) -> Self {
        Self { id, ..*self }
    }
}
