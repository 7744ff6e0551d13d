use crate::{
    math::Scalar,
    tree::{BoundingBox, Config, Hyperplane, LeafReason, Node, NodeID, NodeKind, Splitter},
    Coordinate,
};

/// Reorders `data` so that items on the lower side of `hyperplane` come first and returns the
/// number of such items.
///
/// Single two-pointer pass, not stable.
pub(crate) fn partition<T, C, S>(
    data: &mut [T],
    coordinate: &C,
    hyperplane: &Hyperplane<S>,
) -> usize
where
    C: Coordinate<T, Scalar = S>,
    S: PartialOrd,
{
    let is_lower =
        |item: &T| hyperplane.is_lower(&coordinate.coordinate(item, hyperplane.dimension));

    let (mut i, mut j) = (0, data.len());
    loop {
        while i < j && is_lower(&data[i]) {
            i += 1;
        }
        while i < j && !is_lower(&data[j - 1]) {
            j -= 1;
        }
        if i == j {
            return i;
        }
        data.swap(i, j - 1);
        i += 1;
        j -= 1;
    }
}

/// Outcome of processing a [`Task`].
pub(crate) enum Step<S> {
    Leaf(LeafReason),
    /// The data was partitioned: the first `usize` items are below the hyperplane.
    Split(Hyperplane<S>, usize),
}

/// A node waiting to be created: where its items start in the tree's data, its box, its depth and
/// the splitting dimension of its parent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Task<S, const D: usize> {
    pub offset: usize,
    pub bbox: BoundingBox<[S; D]>,
    pub depth: usize,
    pub parent: Option<usize>,
}

impl<S, const D: usize> Task<S, D>
where
    S: Scalar,
{
    #[inline]
    pub fn root(bbox: BoundingBox<[S; D]>) -> Self {
        Self {
            offset: 0,
            bbox,
            depth: 0,
            parent: None,
        }
    }

    /// Tasks of the lower and upper children, the first `mid` items being below `hyperplane`.
    #[inline]
    pub fn split(&self, hyperplane: &Hyperplane<S>, mid: usize) -> (Self, Self) {
        let (lower, upper) = self.bbox.split_at(hyperplane);
        let child = |offset, bbox| Self {
            offset,
            bbox,
            depth: self.depth + 1,
            parent: Some(hyperplane.dimension),
        };

        (child(self.offset, lower), child(self.offset + mid, upper))
    }

    /// Leaf node `id` holding `len` items. Internal nodes start as leaves and are completed once
    /// their subtrees are built.
    #[inline]
    pub fn node<X>(&self, id: NodeID, len: usize, extension: X) -> Node<S, D, X> {
        Node {
            kind: NodeKind::External,
            bbox: self.bbox,
            data: self.offset..self.offset + len,
            nodes: id..id + 1,
            depth: self.depth,
            extension,
        }
    }
}

/// Everything a build needs besides the data.
pub(crate) struct Context<'a, C, P> {
    pub coordinate: &'a C,
    pub splitter: &'a P,
    pub config: Config,
}

impl<C, P> Context<'_, C, P> {
    /// Decides whether the node of `task` holding `data` is a leaf, and partitions `data` if not.
    pub fn step<T, S, const D: usize>(&self, data: &mut [T], task: &Task<S, D>) -> Step<S>
    where
        C: Coordinate<T, Scalar = S>,
        P: Splitter<S, D>,
        S: Scalar,
    {
        if data.len() <= self.config.bucket_size {
            return Step::Leaf(LeafReason::Fits);
        }
        if task.depth >= self.config.max_depth {
            return Step::Leaf(LeafReason::DepthLimit);
        }

        let Some(hyperplane) = self
            .splitter
            .choose_split(&task.bbox, data, self.coordinate, task.parent)
            .filter(|hyperplane| hyperplane.dimension < D)
        else {
            return Step::Leaf(LeafReason::Declined);
        };

        let mid = partition(data, self.coordinate, &hyperplane);
        let (min, max) = (task.bbox.min[hyperplane.dimension], task.bbox.max[hyperplane.dimension]);

        // A one-sided split only helps if the remaining side gets a smaller box.
        let progress = match mid {
            0 => min < hyperplane.anchor,
            mid if mid == data.len() => hyperplane.anchor < max,
            _ => true,
        };

        if progress {
            Step::Split(hyperplane, mid)
        } else {
            Step::Leaf(LeafReason::NoProgress)
        }
    }
}
