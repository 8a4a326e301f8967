//! _Easel_ is the shared core of a series of small graphics labs. It provides the math
//! (projections, frustums, colors), the handle based object pools that back the scene
//! graph, the opaque drawing capability (`Canvas`) and the input state fed by whatever
//! window loop hosts a lab.
//!
//! The scene graph itself lives in the `easel-scene` module.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub extern crate cgmath;

#[macro_use]
pub mod utils;
#[macro_use]
pub mod errors;

pub mod application;
pub mod input;
pub mod math;
pub mod video;

pub mod prelude;
