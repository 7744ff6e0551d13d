use crate::{
    math::{order, MinMax, Scalar},
    tree::BoundingBox,
    Coordinate,
};

/// Axis-aligned hyperplane splitting space in two.
///
/// The plane is perpendicular to the axis `dimension` and passes through `anchor`. Items whose
/// coordinate along `dimension` is strictly less than `anchor` belong to the lower side, every
/// other item (including those lying exactly on the plane) belongs to the upper side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hyperplane<S> {
    /// Index of the axis the plane is perpendicular to.
    pub dimension: usize,
    /// Coordinate of the plane along its axis.
    pub anchor: S,
}

impl<S> Hyperplane<S> {
    /// Creates a new [`Hyperplane`].
    #[inline]
    pub const fn new(dimension: usize, anchor: S) -> Self {
        Self { dimension, anchor }
    }

    /// Returns true if the given coordinate along [`dimension`](Hyperplane::dimension) is on the
    /// lower side of the plane.
    #[inline]
    pub fn is_lower(&self, coordinate: &S) -> bool
    where
        S: PartialOrd,
    {
        *coordinate < self.anchor
    }
}

/// Trait for strategies choosing where a node of a [`KdTree`](crate::KdTree) is split.
///
/// Splitters are stateless across nodes: everything needed to choose a split is given as
/// arguments, so the same splitter can be applied independently to any subtree.
pub trait Splitter<S, const D: usize> {
    /// Chooses the [`Hyperplane`] splitting the node with the given box and data, or returns
    /// `None` if the data cannot be split any further.
    ///
    /// `parent` is the splitting dimension of the parent node, `None` for the root. The data may
    /// be reordered; the tree partitions it around the returned hyperplane afterwards.
    fn choose_split<T, C>(
        &self,
        bbox: &BoundingBox<[S; D]>,
        data: &mut [T],
        coordinate: &C,
        parent: Option<usize>,
    ) -> Option<Hyperplane<S>>
    where
        C: Coordinate<T, Scalar = S>;
}

impl<S, const D: usize, P> Splitter<S, D> for &P
where
    P: Splitter<S, D> + ?Sized,
{
    #[inline]
    fn choose_split<T, C>(
        &self,
        bbox: &BoundingBox<[S; D]>,
        data: &mut [T],
        coordinate: &C,
        parent: Option<usize>,
    ) -> Option<Hyperplane<S>>
    where
        C: Coordinate<T, Scalar = S>,
    {
        (**self).choose_split(bbox, data, coordinate, parent)
    }
}

/// Axes in rotation order, starting after `parent` or at `start` for the root.
#[inline]
fn rotation<const D: usize>(start: usize, parent: Option<usize>) -> impl Iterator<Item = usize> {
    let first = parent.map_or(start, |axis| axis + 1) % D;
    (0..D).map(move |i| (first + i) % D)
}

/// Splits boxes in their middle, cycling through the axes.
///
/// The splitting axis is the one following the parent's, and the hyperplane is anchored at the
/// middle of the box along that axis, regardless of how the data is distributed. When no value
/// lies strictly inside the box along that axis, the items on its upper bound are separated from
/// the others if there are both. Axes along which the box cannot be split any further are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotatingSplit {
    /// Axis used to split the root.
    pub start_axis: usize,
}

impl<S, const D: usize> Splitter<S, D> for RotatingSplit
where
    S: Scalar,
{
    fn choose_split<T, C>(
        &self,
        bbox: &BoundingBox<[S; D]>,
        data: &mut [T],
        coordinate: &C,
        parent: Option<usize>,
    ) -> Option<Hyperplane<S>>
    where
        C: Coordinate<T, Scalar = S>,
    {
        rotation::<D>(self.start_axis, parent).find_map(|axis| {
            let (min, max) = (bbox.min[axis], bbox.max[axis]);
            let anchor = min.midpoint(max);
            if min < anchor && anchor < max {
                return Some(Hyperplane::new(axis, anchor));
            }

            // No value lies strictly between the bounds, as for integer boxes of size one: the
            // items at `max` are split from the others.
            if min < max {
                let (below, at_max) = data.iter().fold((false, false), |(below, at_max), item| {
                    let c = coordinate.coordinate(item, axis);
                    (below || c < max, at_max || c >= max)
                });
                if below && at_max {
                    return Some(Hyperplane::new(axis, max));
                }
            }
            None
        })
    }
}

/// Policy used by [`MedianSplit`] to pick the splitting axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPolicy {
    /// Split along the axis where the box is the widest.
    #[default]
    Widest,
    /// Split along the axis following the parent's, starting at axis 0 for the root.
    Rotate,
}

/// Splits data at its median coordinate, producing children with near-equal item counts.
///
/// The median is found with an `O(n)` selection. If the items sharing the median coordinate would
/// leave the lower side empty, the plane moves to the next greater coordinate; axes along which
/// every item has the same coordinate are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MedianSplit {
    /// How the splitting axis is chosen.
    pub axis: AxisPolicy,
}

impl MedianSplit {
    /// Creates a [`MedianSplit`] that rotates through the axes.
    #[inline]
    pub const fn rotating() -> Self {
        Self {
            axis: AxisPolicy::Rotate,
        }
    }

    fn split_along<T, C, S>(data: &mut [T], coordinate: &C, axis: usize) -> Option<S>
    where
        C: Coordinate<T, Scalar = S>,
        S: Scalar,
    {
        let mid = data.len() / 2;
        let (lower, median, upper) = data.select_nth_unstable_by(mid, |a, b| {
            order(&coordinate.coordinate(a, axis), &coordinate.coordinate(b, axis))
        });
        let median = coordinate.coordinate(median, axis);

        if lower
            .iter()
            .any(|item| coordinate.coordinate(item, axis) < median)
        {
            return Some(median);
        }

        // Everything before the median shares its coordinate.
        upper
            .iter()
            .map(|item| coordinate.coordinate(item, axis))
            .filter(|c| *c > median)
            .reduce(MinMax::min)
    }
}

impl<S, const D: usize> Splitter<S, D> for MedianSplit
where
    S: Scalar,
{
    fn choose_split<T, C>(
        &self,
        bbox: &BoundingBox<[S; D]>,
        data: &mut [T],
        coordinate: &C,
        parent: Option<usize>,
    ) -> Option<Hyperplane<S>>
    where
        C: Coordinate<T, Scalar = S>,
    {
        if data.len() < 2 {
            return None;
        }

        let mut axes: [usize; D] = std::array::from_fn(|i| i);
        match self.axis {
            AxisPolicy::Widest => {
                let size = bbox.size();
                axes.sort_by(|&a, &b| order(&size[b], &size[a]));
            }
            AxisPolicy::Rotate => {
                for (slot, axis) in axes.iter_mut().zip(rotation::<D>(0, parent)) {
                    *slot = axis;
                }
            }
        }

        axes.into_iter().find_map(|axis| {
            Self::split_along(data, coordinate, axis).map(|anchor| Hyperplane::new(axis, anchor))
        })
    }
}

/// Splitting strategy chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// See [`RotatingSplit`].
    Rotating(RotatingSplit),
    /// See [`MedianSplit`].
    Median(MedianSplit),
}

impl Default for Strategy {
    #[inline]
    fn default() -> Self {
        Self::Median(MedianSplit::default())
    }
}

impl From<RotatingSplit> for Strategy {
    #[inline]
    fn from(splitter: RotatingSplit) -> Self {
        Self::Rotating(splitter)
    }
}

impl From<MedianSplit> for Strategy {
    #[inline]
    fn from(splitter: MedianSplit) -> Self {
        Self::Median(splitter)
    }
}

impl<S, const D: usize> Splitter<S, D> for Strategy
where
    S: Scalar,
{
    #[inline]
    fn choose_split<T, C>(
        &self,
        bbox: &BoundingBox<[S; D]>,
        data: &mut [T],
        coordinate: &C,
        parent: Option<usize>,
    ) -> Option<Hyperplane<S>>
    where
        C: Coordinate<T, Scalar = S>,
    {
        match self {
            Self::Rotating(splitter) => splitter.choose_split(bbox, data, coordinate, parent),
            Self::Median(splitter) => splitter.choose_split(bbox, data, coordinate, parent),
        }
    }
}
