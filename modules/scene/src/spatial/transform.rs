use easel::math::prelude::*;

/// `Transform` is used to store and manipulate the position, orientation and scaling
/// of a node relative to its parent.
///
/// The orientation is made of Euler angles in degrees. When composing local->parent,
/// the node is scaled first, then rotated around X, Y and Z in this order, and finally
/// translated:
///
/// ```text
/// local_to_parent = T(position) * Rz(z) * Ry(y) * Rx(x) * S(scaling)
/// ```
///
/// Every component of `scaling` must be non-zero for `parent_to_local` to be finite.
/// This is not checked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub orientation: Vector3<f32>,
    pub scaling: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector3::new(0.0, 0.0, 0.0),
            orientation: Vector3::new(0.0, 0.0, 0.0),
            scaling: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn new<T1, T2, T3>(position: T1, orientation: T2, scaling: T3) -> Self
    where
        T1: Into<Vector3<f32>>,
        T2: Into<Vector3<f32>>,
        T3: Into<Vector3<f32>>,
    {
        Transform {
            position: position.into(),
            orientation: orientation.into(),
            scaling: scaling.into(),
        }
    }

    /// Overwrites all the three components.
    pub fn set<T1, T2, T3>(&mut self, position: T1, orientation: T2, scaling: T3)
    where
        T1: Into<Vector3<f32>>,
        T2: Into<Vector3<f32>>,
        T3: Into<Vector3<f32>>,
    {
        *self = Transform::new(position, orientation, scaling);
    }

    /// Gets the matrix that maps the local frame onto the parent frame.
    pub fn local_to_parent(&self) -> Matrix4<f32> {
        let o = self.orientation;
        let s = self.scaling;

        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Deg(o.z))
            * Matrix4::from_angle_y(Deg(o.y))
            * Matrix4::from_angle_x(Deg(o.x))
            * Matrix4::from_nonuniform_scale(s.x, s.y, s.z)
    }

    /// Gets the matrix that maps the parent frame onto the local frame, which is the
    /// algebraic inverse of `local_to_parent` composed in reverse order.
    pub fn parent_to_local(&self) -> Matrix4<f32> {
        let o = self.orientation;
        let s = self.scaling;

        Matrix4::from_nonuniform_scale(1.0 / s.x, 1.0 / s.y, 1.0 / s.z)
            * Matrix4::from_angle_x(Deg(-o.x))
            * Matrix4::from_angle_y(Deg(-o.y))
            * Matrix4::from_angle_z(Deg(-o.z))
            * Matrix4::from_translation(-self.position)
    }

    /// Transforms point from local space to parent space.
    #[inline]
    pub fn transform_point<T>(&self, v: T) -> Point3<f32>
    where
        T: Into<Point3<f32>>,
    {
        self.local_to_parent().transform_point(v.into())
    }

    /// Transforms point from parent space to local space.
    #[inline]
    pub fn inverse_transform_point<T>(&self, v: T) -> Point3<f32>
    where
        T: Into<Point3<f32>>,
    {
        self.parent_to_local().transform_point(v.into())
    }
}
