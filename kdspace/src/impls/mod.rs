#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;
#[cfg(feature = "ultraviolet")]
mod ultraviolet;

#[doc(hidden)]
#[macro_export]
macro_rules! impl_position_into_array {
    ($([$scalar: ty; $dim: literal] => $vector: ty),* $(,)?) => {$(
        impl $crate::Position for $vector {
            type Scalar = $scalar;

            #[inline]
            fn coordinate(&self, axis: usize) -> $scalar {
                let array: [$scalar; $dim] = (*self).into();
                array[axis]
            }

            #[inline]
            fn dimension(&self) -> usize {
                $dim
            }
        }
    )*};
}
