use std::{
    cmp::Ordering,
    ops::{Add, Mul, Sub},
};

/// Trait for the identity element `zero`.
pub trait Zero {
    /// `zero` value of the type.
    const ZERO: Self;
}

/// Trait for the extreme values of a type.
///
/// For floating-point numbers these are the infinities, for integers the minimum and maximum
/// representable values.
pub trait Bounded {
    /// Value smaller than or equal to every other value of the type.
    const LOWEST: Self;
    /// Value greater than or equal to every other value of the type.
    const HIGHEST: Self;
}

/// Trait to compute the minimum and maximum of a number.
pub trait MinMax {
    /// Returns the minimum between two numbers.
    fn min(self, rhs: Self) -> Self;

    /// Returns the maximum between two numbers.
    fn max(self, rhs: Self) -> Self;
}

/// Trait to compute the midpoint of two numbers.
pub trait MidPoint {
    /// Returns the middle point of `self` and `rhs`, rounded towards negative infinity for
    /// integers. Never overflows.
    fn midpoint(self, rhs: Self) -> Self;
}

/// Trait to measure the distance between two numbers.
pub trait Extent {
    /// Type of the distance, able to hold the distance between any two values.
    type Width: Copy + PartialOrd;

    /// Returns the distance between `self` and `rhs`, which is `rhs - self` when `self <= rhs`.
    /// Never overflows.
    fn extent(self, rhs: Self) -> Self::Width;
}

/// Scalar type of the coordinates stored in a [`KdTree`](crate::KdTree).
///
/// Implemented for `f32`, `f64`, `i32` and `i64`. Coordinates are compared with
/// [`PartialOrd`]; `NaN` coordinates are not supported and lead to an unspecified (but
/// terminating) partitioning.
pub trait Scalar:
    Copy
    + PartialOrd
    + Zero
    + Bounded
    + MinMax
    + MidPoint
    + Extent
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

impl<S> Scalar for S where
    S: Copy
        + PartialOrd
        + Zero
        + Bounded
        + MinMax
        + MidPoint
        + Extent
        + Add<Output = S>
        + Sub<Output = S>
        + Mul<Output = S>
{
}

/// Total order used when sorting or selecting coordinates. Incomparable values are treated as
/// equal.
#[inline]
pub(crate) fn order<S: PartialOrd>(lhs: &S, rhs: &S) -> Ordering {
    lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal)
}

macro_rules! impl_floats {
    ($($s: ty),*) => {$(
        impl Zero for $s {
            const ZERO: Self = 0.0;
        }

        impl Bounded for $s {
            const LOWEST: Self = <$s>::NEG_INFINITY;
            const HIGHEST: Self = <$s>::INFINITY;
        }

        impl MinMax for $s {
            #[inline]
            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }
        }

        impl MidPoint for $s {
            #[inline]
            fn midpoint(self, rhs: Self) -> Self {
                let midpoint = self + (rhs - self) / 2.0;
                if midpoint.is_finite() {
                    midpoint
                } else {
                    self / 2.0 + rhs / 2.0
                }
            }
        }

        impl Extent for $s {
            type Width = $s;

            #[inline]
            fn extent(self, rhs: Self) -> Self {
                rhs - self
            }
        }
    )*};
}

macro_rules! impl_integers {
    ($($s: ty => $w: ty),*) => {$(
        impl Zero for $s {
            const ZERO: Self = 0;
        }

        impl Bounded for $s {
            const LOWEST: Self = <$s>::MIN;
            const HIGHEST: Self = <$s>::MAX;
        }

        impl MinMax for $s {
            #[inline]
            fn min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }
        }

        impl MidPoint for $s {
            #[inline]
            fn midpoint(self, rhs: Self) -> Self {
                (self >> 1) + (rhs >> 1) + (self & rhs & 1)
            }
        }

        impl Extent for $s {
            type Width = $w;

            #[inline]
            fn extent(self, rhs: Self) -> $w {
                self.abs_diff(rhs)
            }
        }
    )*};
}

impl_floats!(f32, f64);
impl_integers!(i32 => u32, i64 => u64);
