use nalgebra::{Point, SVector};

impl<S, const D: usize> crate::Position for SVector<S, D>
where
    S: nalgebra::Scalar + Copy,
{
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

impl<S, const D: usize> crate::Position for Point<S, D>
where
    S: nalgebra::Scalar + Copy,
{
    type Scalar = S;

    #[inline]
    fn coordinate(&self, axis: usize) -> S {
        self.coords[axis]
    }

    #[inline]
    fn dimension(&self) -> usize {
        D
    }
}
