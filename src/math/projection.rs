//! Perspective and orthographic projections, together with their exact inverses.

use cgmath::{Deg, Matrix4, Rad, Vector4};

use crate::errors::Result;

/// Projections.
///
/// Both variants are plain parameter sets; no clamping happens on construction or
/// when the parameters change. Degenerated parameters (zero-area viewports, `near ==
/// far`) produce infinite or NaN entries instead of errors, call `validate` when that
/// matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective projection, looking down the negative z-axis of view space.
    Perspective {
        /// Field of view in vertical.
        fovy: Deg<f32>,
        /// The aspect of width / height.
        aspect: f32,
        /// The distance to the near clip plane.
        near: f32,
        /// The distance to the far clip plane.
        far: f32,
    },

    /// Orthographic projection. The box `[left, right] x [bottom, top] x [near, far]`
    /// in view space is mapped onto the normalized device cube, `z = near` onto -1.
    ///
    /// Depth is not negated as it is for `Perspective`, so an orthographic camera sees
    /// along its local +Z axis.
    Ortho {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::perspective(Deg(60.0), 16.0 / 9.0, 0.5, 100.0)
    }
}

impl Projection {
    pub fn perspective<T>(fovy: T, aspect: f32, near: f32, far: f32) -> Self
    where
        T: Into<Deg<f32>>,
    {
        Projection::Perspective {
            fovy: fovy.into(),
            aspect,
            near,
            far,
        }
    }

    pub fn ortho(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Projection::Ortho {
            left,
            right,
            top,
            bottom,
            near,
            far,
        }
    }

    /// Gets the near clip plane.
    #[inline]
    pub fn near(&self) -> f32 {
        match *self {
            Projection::Perspective { near, .. } => near,
            Projection::Ortho { near, .. } => near,
        }
    }

    /// Gets the far clip plane.
    #[inline]
    pub fn far(&self) -> f32 {
        match *self {
            Projection::Perspective { far, .. } => far,
            Projection::Ortho { far, .. } => far,
        }
    }

    /// Sets the near/far clipping planes.
    pub fn set_clip_plane(&mut self, n: f32, f: f32) {
        match self {
            Projection::Perspective { near, far, .. } => {
                *near = n;
                *far = f;
            }
            Projection::Ortho { near, far, .. } => {
                *near = n;
                *far = f;
            }
        }
    }

    /// Swaps the top and bottom planes of an orthographic projection, which turns
    /// the y-axis of the window upside down. Has no effect on perspective projections.
    pub fn flip_y(&mut self) {
        if let Projection::Ortho { top, bottom, .. } = self {
            ::std::mem::swap(top, bottom);
        }
    }

    /// Adapts the projection to a new viewport aspect ratio (width / height).
    ///
    /// Perspective projections take the aspect as is. Orthographic projections keep
    /// their vertical extent and center, and rescale the horizontal extent so that
    /// `right - left == |top - bottom| * aspect`.
    pub fn fit_aspect(&mut self, ratio: f32) {
        match self {
            Projection::Perspective { aspect, .. } => *aspect = ratio,
            Projection::Ortho {
                left,
                right,
                top,
                bottom,
                ..
            } => {
                let center = (*left + *right) * 0.5;
                let half = (*top - *bottom).abs() * 0.5 * ratio;
                let sign = if *right < *left { -1.0 } else { 1.0 };
                *left = center - half * sign;
                *right = center + half * sign;
            }
        }
    }

    /// Checks that the parameters describe a non-degenerated viewing volume.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Projection::Perspective {
                fovy,
                aspect,
                near,
                far,
            } => {
                ensure_projection!(
                    fovy.0 > 0.0 && fovy.0 < 180.0,
                    "the vertical field of view must be in (0, 180), found: {:?}",
                    fovy
                );

                ensure_projection!(
                    aspect > 0.0,
                    "the aspect ratio must be positive, found: {}",
                    aspect
                );

                ensure_projection!(
                    near > 0.0 && far > near,
                    "expects 0 < near < far, found: near: {}, far: {}",
                    near,
                    far
                );
            }
            Projection::Ortho {
                left,
                right,
                top,
                bottom,
                near,
                far,
            } => {
                ensure_projection!(
                    left != right && top != bottom && near != far,
                    "the viewing box has no volume, found: {:?}",
                    self
                );
            }
        }

        Ok(())
    }

    /// Gets the projection matrix.
    pub fn matrix(&self) -> Matrix4<f32> {
        match *self {
            Projection::Perspective {
                fovy,
                aspect,
                near,
                far,
            } => Self::perspective_matrix(fovy, aspect, near, far),
            Projection::Ortho {
                left,
                right,
                top,
                bottom,
                near,
                far,
            } => Self::ortho_matrix(left, right, top, bottom, near, far),
        }
    }

    /// Gets the inverse of the projection matrix, which maps normalized device
    /// coordinates back into view space.
    pub fn inverse_matrix(&self) -> Matrix4<f32> {
        match *self {
            Projection::Perspective {
                fovy,
                aspect,
                near,
                far,
            } => Self::inverse_perspective_matrix(fovy, aspect, near, far),
            Projection::Ortho {
                left,
                right,
                top,
                bottom,
                near,
                far,
            } => Self::inverse_ortho_matrix(left, right, top, bottom, near, far),
        }
    }

    /// Gets the symmetric perspective projection matrix, same as `gluPerspective`.
    pub fn perspective_matrix(fovy: Deg<f32>, aspect: f32, n: f32, f: f32) -> Matrix4<f32> {
        let fc = 1.0 / Rad::from(fovy * 0.5).0.tan();
        let c0 = Vector4::new(fc / aspect, 0.0, 0.0, 0.0);
        let c1 = Vector4::new(0.0, fc, 0.0, 0.0);
        let c2 = Vector4::new(0.0, 0.0, (f + n) / (n - f), -1.0);
        let c3 = Vector4::new(0.0, 0.0, (2.0 * f * n) / (n - f), 0.0);
        Matrix4::from_cols(c0, c1, c2, c3)
    }

    /// Gets the closed-form inverse of `perspective_matrix`.
    pub fn inverse_perspective_matrix(
        fovy: Deg<f32>,
        aspect: f32,
        n: f32,
        f: f32,
    ) -> Matrix4<f32> {
        let fc = 1.0 / Rad::from(fovy * 0.5).0.tan();
        let a = (f + n) / (n - f);
        let b = (2.0 * f * n) / (n - f);

        let c0 = Vector4::new(aspect / fc, 0.0, 0.0, 0.0);
        let c1 = Vector4::new(0.0, 1.0 / fc, 0.0, 0.0);
        let c2 = Vector4::new(0.0, 0.0, 0.0, 1.0 / b);
        let c3 = Vector4::new(0.0, 0.0, -1.0, a / b);
        Matrix4::from_cols(c0, c1, c2, c3)
    }

    /// Gets the orthographic projection matrix. View space `z` in `[n, f]` goes to
    /// `[-1, 1]` without a flip, unlike `perspective_matrix` which expects `z` in `[-f, -n]`.
    pub fn ortho_matrix(l: f32, r: f32, t: f32, b: f32, n: f32, f: f32) -> Matrix4<f32> {
        let c0 = Vector4::new(2.0 / (r - l), 0.0, 0.0, 0.0);
        let c1 = Vector4::new(0.0, 2.0 / (t - b), 0.0, 0.0);
        let c2 = Vector4::new(0.0, 0.0, 2.0 / (f - n), 0.0);
        let c3 = Vector4::new(
            (r + l) / (l - r),
            (t + b) / (b - t),
            (f + n) / (n - f),
            1.0,
        );
        Matrix4::from_cols(c0, c1, c2, c3)
    }

    /// Gets the closed-form inverse of `ortho_matrix`.
    pub fn inverse_ortho_matrix(l: f32, r: f32, t: f32, b: f32, n: f32, f: f32) -> Matrix4<f32> {
        let c0 = Vector4::new((r - l) * 0.5, 0.0, 0.0, 0.0);
        let c1 = Vector4::new(0.0, (t - b) * 0.5, 0.0, 0.0);
        let c2 = Vector4::new(0.0, 0.0, (f - n) * 0.5, 0.0);
        let c3 = Vector4::new((r + l) * 0.5, (t + b) * 0.5, (f + n) * 0.5, 1.0);
        Matrix4::from_cols(c0, c1, c2, c3)
    }
}
