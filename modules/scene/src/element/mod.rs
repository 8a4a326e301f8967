//! The things that could be placed at a node.
//!
//! `Element` is a closed set of variants dispatched by the traversal. Labs that need
//! something else implement `Drawable` and wrap it into `Element::Custom`.

pub mod axis;
pub mod camera;
pub mod cube;
pub mod ground;
pub mod lit;
pub mod sphere;

pub mod prelude {
    pub use super::axis::Axis;
    pub use super::camera::Camera;
    pub use super::cube::Cube;
    pub use super::ground::Ground;
    pub use super::lit::Lit;
    pub use super::sphere::Sphere;
    pub use super::{Drawable, Element};
}

use std::fmt;

use easel::video::Canvas;

pub use self::axis::Axis;
pub use self::camera::Camera;
pub use self::cube::Cube;
pub use self::ground::Ground;
pub use self::lit::Lit;
pub use self::sphere::Sphere;

/// User defined elements.
pub trait Drawable {
    /// The name printed in hierarchies.
    fn type_name(&self) -> &str {
        "Drawable"
    }

    /// Draws primitives in the local space of the node.
    fn draw(&self, _: &mut dyn Canvas, _: f32) {}

    /// Per-frame hook, only called when the owner asks for it.
    fn update(&mut self, _: f32) {}
}

pub enum Element {
    /// Groups its children, draws nothing.
    Group,
    /// A perspective or orthographic camera, draws nothing.
    Camera(Camera),
    Axis(Axis),
    Ground(Ground),
    Cube(Cube),
    Sphere(Sphere),
    /// A point light, collected by the render pass before traversal.
    Lit(Lit),
    Custom(Box<dyn Drawable>),
}

impl Default for Element {
    fn default() -> Self {
        Element::Group
    }
}

impl Element {
    /// Wraps a user defined element.
    pub fn custom<T: Drawable + 'static>(drawable: T) -> Self {
        Element::Custom(Box::new(drawable))
    }

    pub fn type_name(&self) -> &str {
        match *self {
            Element::Group => "Object",
            Element::Camera(ref v) if v.is_perspective() => "PerspectiveCamera",
            Element::Camera(_) => "OrthographicCamera",
            Element::Axis(_) => "Axis",
            Element::Ground(_) => "MeshGround",
            Element::Cube(_) => "Cube",
            Element::Sphere(_) => "Sphere",
            Element::Lit(_) => "Lit",
            Element::Custom(ref v) => v.type_name(),
        }
    }

    /// Draws the primitives of this element in its local space.
    pub fn draw(&self, canvas: &mut dyn Canvas, dt: f32) {
        match *self {
            Element::Group | Element::Camera(_) | Element::Lit(_) => {}
            Element::Axis(ref v) => v.draw(canvas),
            Element::Ground(ref v) => v.draw(canvas),
            Element::Cube(ref v) => v.draw(canvas),
            Element::Sphere(ref v) => v.draw(canvas),
            Element::Custom(ref v) => v.draw(canvas, dt),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Element::Custom(ref mut v) = *self {
            v.update(dt);
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Element::Group => write!(f, "Group"),
            Element::Camera(ref v) => f.debug_tuple("Camera").field(v).finish(),
            Element::Axis(ref v) => f.debug_tuple("Axis").field(v).finish(),
            Element::Ground(ref v) => f.debug_tuple("Ground").field(v).finish(),
            Element::Cube(ref v) => f.debug_tuple("Cube").field(v).finish(),
            Element::Sphere(ref v) => f.debug_tuple("Sphere").field(v).finish(),
            Element::Lit(ref v) => f.debug_tuple("Lit").field(v).finish(),
            Element::Custom(ref v) => write!(f, "Custom({})", v.type_name()),
        }
    }
}

macro_rules! impl_into_element {
    ($name:ident) => {
        impl From<$name> for Element {
            fn from(v: $name) -> Self {
                Element::$name(v)
            }
        }
    };
}

impl_into_element!(Camera);
impl_into_element!(Axis);
impl_into_element!(Ground);
impl_into_element!(Cube);
impl_into_element!(Sphere);
impl_into_element!(Lit);
