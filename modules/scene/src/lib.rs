//! _Easel-Scene_ is the scene graph of the easel labs.
//!
//! A scene is a tree of nodes, each owning a local `Transform` (a translation, Euler
//! angles in degrees and a per-axis scaling) and an `Element` which decides what is drawn
//! at that node. All the nodes are stored in one arena, `SceneGraph`, and are referred by
//! `NodeId` handles. Children are only created through `SceneGraph::add_child`, so the
//! graph is a tree by construction.
//!
//! ```rust
//! use easel::prelude::*;
//! use easel_scene::prelude::*;
//!
//! let mut graph = SceneGraph::new();
//! let root = graph.root();
//! let cube = graph.add_child(root, Cube::default()).unwrap();
//! let camera = graph.add_child(root, Camera::default()).unwrap();
//! graph.translate(camera, [0.0, 0.0, 5.0]).unwrap();
//!
//! let mut canvas = CommandBuffer::new();
//! let view = graph.world_to_local(camera).unwrap();
//! graph.draw_subtree(root, &view, &mut canvas, 0.016).unwrap();
//! assert_eq!(canvas.draw_calls().count(), 1);
//! # let _ = cube;
//! ```

#[macro_use]
extern crate easel;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

extern crate inlinable_string;
extern crate smallvec;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod context;
pub mod controls;
pub mod element;
pub mod renderer;
pub mod spatial;

pub mod prelude {
    pub use super::context::SceneContext;
    pub use super::controls::FlyControls;
    pub use super::element::prelude::*;
    pub use super::spatial::prelude::*;
    pub use super::NodeId;
}

impl_handle!(NodeId);
