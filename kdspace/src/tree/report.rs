/// Reason a node became a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum LeafReason {
    /// The node holds at most `bucket_size` items.
    Fits,
    /// The splitter found no hyperplane separating the items.
    Declined,
    /// The chosen hyperplane neither separated the items nor shrunk the box.
    NoProgress,
    /// The node reached the maximum depth.
    DepthLimit,
}

/// Summary of a [`KdTree`](crate::KdTree) build.
///
/// A build never fails: when items cannot be separated (typically because they coincide) or the
/// maximum depth is reached, the node is turned into a leaf that may hold more than `bucket_size`
/// items. Such leaves are counted here.
///
/// ```
/// # use kdspace::prelude::*;
/// let config = Config::with_bucket_size(2);
/// let mut tree = KdTree::<[f64; 2], 2>::with_config(Intrinsic, MedianSplit::default(), config)?;
/// tree.insert_all([[2.0, 2.0]; 5])?;
///
/// let report = tree.build();
/// assert_eq!(report.leaf_count, 1);
/// assert_eq!(report.largest_leaf, 5);
/// assert_eq!(report.forced_leaves, 1);
/// assert!(!report.is_clean());
/// # Ok::<(), kdspace::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BuildReport {
    /// Number of nodes in the tree.
    pub node_count: usize,
    /// Number of leaves in the tree.
    pub leaf_count: usize,
    /// Depth of the deepest node.
    pub depth: usize,
    /// Number of items in the largest leaf.
    pub largest_leaf: usize,
    /// Number of leaves holding more than `bucket_size` items because their items could not be
    /// separated.
    pub forced_leaves: usize,
    /// Number of leaves holding more than `bucket_size` items because they reached the maximum
    /// depth.
    pub depth_limited_leaves: usize,
}

impl BuildReport {
    /// Returns true if every leaf holds at most `bucket_size` items.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.forced_leaves == 0 && self.depth_limited_leaves == 0
    }

    /// Returns the number of leaves holding more than `bucket_size` items.
    #[inline]
    pub fn oversized_leaves(&self) -> usize {
        self.forced_leaves + self.depth_limited_leaves
    }

    #[inline]
    pub(crate) fn record_node(&mut self, depth: usize) {
        self.node_count += 1;
        self.depth = self.depth.max(depth);
    }

    #[inline]
    pub(crate) fn record_leaf(&mut self, reason: LeafReason, len: usize, depth: usize) {
        self.record_node(depth);
        self.leaf_count += 1;
        self.largest_leaf = self.largest_leaf.max(len);
        match reason {
            LeafReason::Fits => {}
            LeafReason::Declined | LeafReason::NoProgress => self.forced_leaves += 1,
            LeafReason::DepthLimit => self.depth_limited_leaves += 1,
        }
    }

    /// Combines the reports of two disjoint subtrees.
    #[inline]
    pub(crate) fn merge(&mut self, other: &Self) {
        self.node_count += other.node_count;
        self.leaf_count += other.leaf_count;
        self.depth = self.depth.max(other.depth);
        self.largest_leaf = self.largest_leaf.max(other.largest_leaf);
        self.forced_leaves += other.forced_leaves;
        self.depth_limited_leaves += other.depth_limited_leaves;
    }
}
