use easel::errors::Result;
use easel::math::prelude::*;

/// A camera. Its placement is the transform of its node like any other node, the view
/// matrix is the world->local transform of that node.
///
/// The parameters are never clamped. The window-resize collaborator is expected to call
/// `fit_aspect` whenever the viewport dimensions change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    projection: Projection,
}

impl Default for Camera {
    /// A perspective camera with 60 degrees vertical field of view, 16:9 aspect and clip
    /// planes at 0.5 and 100.
    fn default() -> Self {
        Camera {
            projection: Projection::default(),
        }
    }
}

impl From<Projection> for Camera {
    fn from(projection: Projection) -> Self {
        Camera { projection }
    }
}

impl Camera {
    pub fn perspective<T>(fovy: T, aspect: f32, near: f32, far: f32) -> Self
    where
        T: Into<Deg<f32>>,
    {
        Projection::perspective(fovy, aspect, near, far).into()
    }

    pub fn ortho(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Projection::ortho(left, right, top, bottom, near, far).into()
    }

    /// An orthographic camera covering `width x height` pixels, with the origin at the
    /// bottom-left corner and clip planes at -10 and 10.
    pub fn screen(width: f32, height: f32) -> Self {
        Camera::ortho(0.0, width, height, 0.0, -10.0, 10.0)
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[inline]
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    #[inline]
    pub fn is_perspective(&self) -> bool {
        match self.projection {
            Projection::Perspective { .. } => true,
            _ => false,
        }
    }

    /// Sets the vertical field of view. Has no effect on orthographic cameras.
    pub fn set_fovy<T: Into<Deg<f32>>>(&mut self, v: T) {
        if let Projection::Perspective { ref mut fovy, .. } = self.projection {
            *fovy = v.into();
        }
    }

    /// Sets the aspect ratio. Has no effect on orthographic cameras, see `fit_aspect`.
    pub fn set_aspect(&mut self, v: f32) {
        if let Projection::Perspective { ref mut aspect, .. } = self.projection {
            *aspect = v;
        }
    }

    /// Sets the near/far clipping planes.
    #[inline]
    pub fn set_clip_plane(&mut self, near: f32, far: f32) {
        self.projection.set_clip_plane(near, far);
    }

    #[inline]
    pub fn set_near(&mut self, near: f32) {
        let far = self.projection.far();
        self.projection.set_clip_plane(near, far);
    }

    #[inline]
    pub fn set_far(&mut self, far: f32) {
        let near = self.projection.near();
        self.projection.set_clip_plane(near, far);
    }

    /// Sets the left, right, top and bottom planes of the viewing box. Has no effect on
    /// perspective cameras.
    pub fn set_bounds(&mut self, l: f32, r: f32, t: f32, b: f32) {
        if let Projection::Ortho {
            ref mut left,
            ref mut right,
            ref mut top,
            ref mut bottom,
            ..
        } = self.projection
        {
            *left = l;
            *right = r;
            *top = t;
            *bottom = b;
        }
    }

    /// Turns the y-axis of an orthographic camera upside down.
    #[inline]
    pub fn flip_y(&mut self) {
        self.projection.flip_y();
    }

    /// Adapts the camera to a viewport with aspect ratio `aspect` (width / height).
    #[inline]
    pub fn fit_aspect(&mut self, aspect: f32) {
        self.projection.fit_aspect(aspect);
    }

    /// Gets the projection matrix, mapping view space onto the normalized device cube.
    #[inline]
    pub fn matrix(&self) -> Matrix4<f32> {
        self.projection.matrix()
    }

    /// Gets the inverse projection matrix, mapping the normalized device cube back into
    /// view space.
    #[inline]
    pub fn inverse_matrix(&self) -> Matrix4<f32> {
        self.projection.inverse_matrix()
    }

    #[inline]
    pub fn validate(&self) -> Result<()> {
        self.projection.validate()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn setters() {
        let mut camera = Camera::default();
        camera.set_fovy(Deg(45.0));
        camera.set_far(10.0);
        camera.set_bounds(0.0, 1.0, 1.0, 0.0);
        assert_eq!(
            *camera.projection(),
            Projection::perspective(Deg(45.0), 16.0 / 9.0, 0.5, 10.0)
        );

        let mut camera = Camera::screen(1280.0, 720.0);
        camera.set_aspect(2.0);
        camera.set_near(-1.0);
        camera.flip_y();
        assert_eq!(
            *camera.projection(),
            Projection::ortho(0.0, 1280.0, 0.0, 720.0, -1.0, 10.0)
        );
        assert!(!camera.is_perspective());
    }
}
