use nalgebra as na;

pub type Scalar = f32;
pub type Vector2 = na::Vector2<Scalar>;
