use ultraviolet::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};

crate::impl_position_into_array! {
    [f32; 2] => Vec2,
    [f32; 3] => Vec3,
    [f32; 4] => Vec4,
    [f64; 2] => DVec2,
    [f64; 3] => DVec3,
    [f64; 4] => DVec4,
}
