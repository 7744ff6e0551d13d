use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, Vec2, Vec3, Vec3A, Vec4};

crate::impl_position_into_array! {
    [f32; 2] => Vec2,
    [f32; 3] => Vec3,
    [f32; 3] => Vec3A,
    [f32; 4] => Vec4,
    [f64; 2] => DVec2,
    [f64; 3] => DVec3,
    [f64; 4] => DVec4,
    [i32; 2] => IVec2,
    [i32; 3] => IVec3,
    [i32; 4] => IVec4,
}
