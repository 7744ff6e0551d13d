use crate::{
    math::{Bounded, Extent, MinMax, Scalar},
    tree::Hyperplane,
    Coordinate,
};

/// An axis-aligned bounding box using arrays.
///
/// A box is valid when `min[i] <= max[i]` on every axis. The [`Default`] box is the inverted
/// "empty" box (`min = +∞`, `max = -∞`) that any call to [`extend`](BoundingBox::extend)
/// turns into a valid one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox<A> {
    /// Minimum corner of the box.
    pub min: A,
    /// Maximum corner of the box.
    pub max: A,
}

impl<A> BoundingBox<A> {
    /// Creates a new [`BoundingBox`] with the given min and max values.
    #[inline]
    pub const fn new(min: A, max: A) -> Self {
        Self { min, max }
    }
}

impl<const D: usize, S> Default for BoundingBox<[S; D]>
where
    S: Bounded + Copy,
{
    #[inline]
    fn default() -> Self {
        Self::new([S::HIGHEST; D], [S::LOWEST; D])
    }
}

#[allow(clippy::needless_range_loop)]
impl<const D: usize, S> BoundingBox<[S; D]>
where
    S: Scalar,
{
    /// Extends the [`BoundingBox`] so that it contains the given position.
    #[inline]
    pub fn extend(&mut self, position: [S; D]) {
        for i in 0..D {
            self.min[i] = MinMax::min(self.min[i], position[i]);
            self.max[i] = MinMax::max(self.max[i], position[i]);
        }
    }

    /// Creates a new [`BoundingBox`] that contains the given positions.
    #[inline]
    pub fn with<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = [S; D]>,
    {
        let mut result = Self::default();
        for position in positions {
            result.extend(position);
        }
        result
    }

    /// Creates the minimal [`BoundingBox`] that contains the given items, located with the given
    /// [`Coordinate`] accessor.
    #[inline]
    pub fn enclosing<'a, T, C>(items: impl IntoIterator<Item = &'a T>, coordinate: &C) -> Self
    where
        T: 'a,
        C: Coordinate<T, Scalar = S>,
    {
        Self::with(items.into_iter().map(|item| coordinate.point(item)))
    }

    /// Returns true if the box contains no point, i.e. `min > max` on some axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..D).any(|i| self.min[i] > self.max[i])
    }

    /// Returns true if the given position lies inside the box, boundaries included.
    #[inline]
    pub fn contains(&self, position: &[S; D]) -> bool {
        (0..D).all(|i| self.min[i] <= position[i] && position[i] <= self.max[i])
    }

    /// Returns true if `other` lies entirely inside this box, boundaries included.
    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        (0..D).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// Returns true if the two boxes share at least one point, boundaries included.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        (0..D).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Returns the center of the [`BoundingBox`].
    #[inline]
    pub fn center(&self) -> [S; D] {
        let mut r = [S::ZERO; D];
        for i in 0..D {
            r[i] = self.min[i].midpoint(self.max[i]);
        }
        r
    }

    /// Returns the size of the [`BoundingBox`] along every axis.
    ///
    /// Sizes of integer boxes are unsigned, so that a box spanning the whole range of its type
    /// can be measured.
    #[inline]
    pub fn size(&self) -> [S::Width; D] {
        std::array::from_fn(|i| self.min[i].extent(self.max[i]))
    }

    /// Returns the axis along which the box is the widest. Ties are resolved in favour of the
    /// lowest axis.
    #[inline]
    pub fn widest_axis(&self) -> usize {
        let size = self.size();
        (1..D).fold(0, |widest, i| if size[i] > size[widest] { i } else { widest })
    }

    /// Returns the squared euclidean distance between the box and the given position, which is
    /// zero if the position is inside the box.
    #[inline]
    pub fn distance_squared(&self, position: &[S; D]) -> S {
        let mut r = S::ZERO;
        for i in 0..D {
            let d = if position[i] < self.min[i] {
                self.min[i] - position[i]
            } else if position[i] > self.max[i] {
                position[i] - self.max[i]
            } else {
                S::ZERO
            };
            r = r + d * d;
        }
        r
    }

    /// Splits the box along the given [`Hyperplane`], returning the lower and upper halves.
    ///
    /// Both halves share every bound except along `hyperplane.dimension`, where the lower half
    /// ends and the upper half starts at `hyperplane.anchor`.
    #[inline]
    pub fn split_at(&self, hyperplane: &Hyperplane<S>) -> (Self, Self) {
        let mut lower = *self;
        let upper = lower.split_off(hyperplane);
        (lower, upper)
    }

    /// Splits the box in place along the given [`Hyperplane`]: `self` becomes the lower half and
    /// the upper half is returned.
    #[inline]
    pub fn split_off(&mut self, hyperplane: &Hyperplane<S>) -> Self {
        let mut upper = *self;
        self.max[hyperplane.dimension] = hyperplane.anchor;
        upper.min[hyperplane.dimension] = hyperplane.anchor;
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Intrinsic;

    #[test]
    fn enclosing_is_minimal() {
        let points = [[0.0, 4.0], [2.0, -1.0], [1.0, 1.0]];
        let bbox: BoundingBox<[f64; 2]> = BoundingBox::enclosing(&points, &Intrinsic);

        assert_eq!(bbox, BoundingBox::new([0.0, -1.0], [2.0, 4.0]));
        assert!(points.iter().all(|p| bbox.contains(p)));
        assert!(!bbox.contains(&[2.5, 0.0]));
    }

    #[test]
    fn default_box_is_empty() {
        let bbox = BoundingBox::<[f32; 3]>::default();
        assert!(bbox.is_empty());
        assert!(!BoundingBox::with([[1.0f32, 2.0, 3.0]]).is_empty());
    }

    #[test]
    fn split_halves_share_the_hyperplane() {
        let bbox = BoundingBox::new([0.0, 0.0], [4.0, 2.0]);
        let (lower, upper) = bbox.split_at(&Hyperplane::new(0, 1.0));

        assert_eq!(lower, BoundingBox::new([0.0, 0.0], [1.0, 2.0]));
        assert_eq!(upper, BoundingBox::new([1.0, 0.0], [4.0, 2.0]));
        assert!(bbox.contains_box(&lower) && bbox.contains_box(&upper));
        assert!(lower.intersects(&upper));
        assert!(lower.contains(&[1.0, 1.0]) && upper.contains(&[1.0, 1.0]));
    }

    #[test]
    fn split_off_keeps_lower_half() {
        let mut bbox = BoundingBox::new([0i32, 0, 0], [8, 8, 8]);
        let upper = bbox.split_off(&Hyperplane::new(2, 3));

        assert_eq!(bbox.max, [8, 8, 3]);
        assert_eq!(upper.min, [0, 0, 3]);
    }

    #[test]
    fn measures() {
        let bbox = BoundingBox::new([0.0, -2.0, 1.0], [1.0, 2.0, 1.0]);

        assert_eq!(bbox.size(), [1.0, 4.0, 0.0]);
        assert_eq!(bbox.center(), [0.5, 0.0, 1.0]);
        assert_eq!(bbox.widest_axis(), 1);
        assert_eq!(bbox.distance_squared(&[0.5, 0.0, 1.0]), 0.0);
        assert_eq!(bbox.distance_squared(&[3.0, 3.0, 1.0]), 5.0);
    }

    #[test]
    fn full_range_integer_box() {
        let bbox = BoundingBox::new([i32::MIN, 0, -5], [i32::MAX, 10, 5]);

        assert_eq!(bbox.size(), [u32::MAX, 10, 10]);
        assert_eq!(bbox.center(), [-1, 5, 0]);
        assert_eq!(bbox.widest_axis(), 0);
    }
}
