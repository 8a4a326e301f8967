//! View frustum corners, used to visualize what a camera sees.

use cgmath::{Matrix4, Point3, Transform};

use super::projection::Projection;

/// View frustum corner points.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FrustumPoints {
    /// Near top left point
    pub near_top_left: Point3<f32>,
    /// Near top right point
    pub near_top_right: Point3<f32>,
    /// Near bottom left point
    pub near_bottom_left: Point3<f32>,
    /// Near bottom right point
    pub near_bottom_right: Point3<f32>,
    /// Far top left point
    pub far_top_left: Point3<f32>,
    /// Far top right point
    pub far_top_right: Point3<f32>,
    /// Far bottom left point
    pub far_bottom_left: Point3<f32>,
    /// Far bottom right point
    pub far_bottom_right: Point3<f32>,
}

impl FrustumPoints {
    /// The corners of the normalized device cube `[-1, 1]^3`. The near plane sits at
    /// `z = -1`.
    pub fn ndc() -> Self {
        let one = 1.0;

        FrustumPoints {
            near_top_left: Point3::new(-one, one, -one),
            near_top_right: Point3::new(one, one, -one),
            near_bottom_left: Point3::new(-one, -one, -one),
            near_bottom_right: Point3::new(one, -one, -one),
            far_top_left: Point3::new(-one, one, one),
            far_top_right: Point3::new(one, one, one),
            far_bottom_left: Point3::new(-one, -one, one),
            far_bottom_right: Point3::new(one, -one, one),
        }
    }

    /// Reconstructs the view space corners of the viewing volume of `projection`.
    pub fn from_projection(projection: &Projection) -> Self {
        Self::ndc().transform(&projection.inverse_matrix())
    }

    /// Apply an arbitrary transform to the corners of this frustum. Projective
    /// transforms are followed by the homogeneous division.
    #[inline]
    pub fn transform(&self, transform: &Matrix4<f32>) -> Self {
        let t = |p: Point3<f32>| transform.transform_point(p);

        FrustumPoints {
            near_top_left: t(self.near_top_left),
            near_top_right: t(self.near_top_right),
            near_bottom_left: t(self.near_bottom_left),
            near_bottom_right: t(self.near_bottom_right),
            far_top_left: t(self.far_top_left),
            far_top_right: t(self.far_top_right),
            far_bottom_left: t(self.far_bottom_left),
            far_bottom_right: t(self.far_bottom_right),
        }
    }

    /// Compute corners.
    #[inline]
    pub fn to_corners(&self) -> [Point3<f32>; 8] {
        [
            self.near_top_left,
            self.near_top_right,
            self.near_bottom_left,
            self.near_bottom_right,
            self.far_top_left,
            self.far_top_right,
            self.far_bottom_left,
            self.far_bottom_right,
        ]
    }
}
