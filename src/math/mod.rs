//! This module contains the math utils that mainly comes from `cgmath`.

pub mod color;
pub mod frustum;
pub mod projection;

pub mod prelude {
    pub use cgmath::Transform as _;
    pub use cgmath::{Angle, EuclideanSpace, InnerSpace, Matrix, MetricSpace, One, SquareMatrix, Zero};
    pub use cgmath::{Deg, Euler, Matrix3, Matrix4, Point3, Quaternion, Rad, Vector2, Vector3, Vector4};

    pub use super::color::Color;
    pub use super::frustum::FrustumPoints;
    pub use super::projection::Projection;
}
