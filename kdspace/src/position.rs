/// Trait for items that know their own location in space.
///
/// #### Deriving:
///
/// Used when the type has a field named `position` (or a field marked `#[position]`) whose type
/// implements [`Position`]:
///
/// ```
/// # use kdspace::prelude::*;
/// #[derive(Position)]
/// struct Star {
///     position: [f64; 3],
///     magnitude: f32,
/// }
///
/// let star = Star { position: [1.0, 2.0, 3.0], magnitude: 4.5 };
/// assert_eq!(star.coordinate(2), 3.0);
/// assert_eq!(star.dimension(), 3);
/// ```
///
/// #### Manual implementation:
///
/// ```
/// # use kdspace::prelude::*;
/// struct Pixel {
///     x: i32,
///     y: i32,
/// }
///
/// impl Position for Pixel {
///     type Scalar = i32;
///
///     fn coordinate(&self, axis: usize) -> i32 {
///         [self.x, self.y][axis]
///     }
///
///     fn dimension(&self) -> usize {
///         2
///     }
/// }
/// ```
pub trait Position {
    /// Type of the coordinates.
    type Scalar;

    /// Returns the `axis`-th coordinate of the item, for `axis` in `0..self.dimension()`.
    fn coordinate(&self, axis: usize) -> Self::Scalar;

    /// Returns the dimensionality of the space the item lives in.
    fn dimension(&self) -> usize;
}

impl<S: Copy, const D: usize> Position for [S; D] {
    type Scalar = S;

    #[inline]
    fn coordinate(&self, axis: usize) -> S {
        self[axis]
    }

    #[inline]
    fn dimension(&self) -> usize {
        D
    }
}

impl<S: Copy> Position for (S, S) {
    type Scalar = S;

    #[inline]
    fn coordinate(&self, axis: usize) -> S {
        [self.0, self.1][axis]
    }

    #[inline]
    fn dimension(&self) -> usize {
        2
    }
}

impl<S: Copy> Position for (S, S, S) {
    type Scalar = S;

    #[inline]
    fn coordinate(&self, axis: usize) -> S {
        [self.0, self.1, self.2][axis]
    }

    #[inline]
    fn dimension(&self) -> usize {
        3
    }
}

impl<P> Position for &P
where
    P: Position + ?Sized,
{
    type Scalar = P::Scalar;

    #[inline]
    fn coordinate(&self, axis: usize) -> Self::Scalar {
        (**self).coordinate(axis)
    }

    #[inline]
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}

impl<P> Position for Box<P>
where
    P: Position + ?Sized,
{
    type Scalar = P::Scalar;

    #[inline]
    fn coordinate(&self, axis: usize) -> Self::Scalar {
        (**self).coordinate(axis)
    }

    #[inline]
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}

/// Coordinate accessor used by a [`KdTree`](crate::KdTree) to locate the items it stores.
///
/// Implementations must be pure: the same item always yields the same coordinates, and every item
/// of a given tree has the same [`dimension`](Coordinate::dimension).
pub trait Coordinate<T: ?Sized> {
    /// Type of the coordinates.
    type Scalar;

    /// Returns the `axis`-th coordinate of `item`.
    fn coordinate(&self, item: &T, axis: usize) -> Self::Scalar;

    /// Returns the dimensionality of `item`.
    fn dimension(&self, item: &T) -> usize;

    /// Returns the first `D` coordinates of `item` as an array.
    #[inline]
    fn point<const D: usize>(&self, item: &T) -> [Self::Scalar; D] {
        std::array::from_fn(|axis| self.coordinate(item, axis))
    }
}

/// [`Coordinate`] accessor for items implementing [`Position`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intrinsic;

impl<T> Coordinate<T> for Intrinsic
where
    T: Position + ?Sized,
{
    type Scalar = T::Scalar;

    #[inline]
    fn coordinate(&self, item: &T, axis: usize) -> T::Scalar {
        item.coordinate(axis)
    }

    #[inline]
    fn dimension(&self, item: &T) -> usize {
        item.dimension()
    }
}

/// [`Coordinate`] accessor defined by a function and a fixed dimension.
///
/// ```
/// # use kdspace::prelude::*;
/// struct City {
///     name: &'static str,
///     lat_lon: (f64, f64),
/// }
///
/// let accessor = FnCoordinate::new(2, |city: &City, axis: usize| match axis {
///     0 => city.lat_lon.0,
///     _ => city.lat_lon.1,
/// });
///
/// let paris = City { name: "Paris", lat_lon: (48.85, 2.35) };
/// assert_eq!(accessor.coordinate(&paris, 1), 2.35);
/// assert_eq!(accessor.dimension(&paris), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnCoordinate<F> {
    dimension: usize,
    f: F,
}

impl<F> FnCoordinate<F> {
    /// Creates a new [`FnCoordinate`] returning `f(item, axis)` for every axis in `0..dimension`.
    #[inline]
    pub const fn new(dimension: usize, f: F) -> Self {
        Self { dimension, f }
    }
}

impl<T, S, F> Coordinate<T> for FnCoordinate<F>
where
    F: Fn(&T, usize) -> S,
{
    type Scalar = S;

    #[inline]
    fn coordinate(&self, item: &T, axis: usize) -> S {
        (self.f)(item, axis)
    }

    #[inline]
    fn dimension(&self, _: &T) -> usize {
        self.dimension
    }
}
