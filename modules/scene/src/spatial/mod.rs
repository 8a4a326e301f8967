//! The transform hierarchy.

pub mod graph;
pub mod hierarchy;
pub mod node;
pub mod transform;

pub mod prelude {
    pub use super::graph::SceneGraph;
    pub use super::hierarchy::Hierarchy;
    pub use super::node::Node;
    pub use super::transform::Transform;
}
