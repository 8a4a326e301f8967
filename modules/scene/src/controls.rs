//! Keyboard and mouse navigation of nodes.

use easel::application::ViewParams;
use easel::errors::Result;
use easel::input::prelude::*;
use easel::math::prelude::*;

use crate::spatial::graph::SceneGraph;
use crate::NodeId;

/// Moves a node with W/S (along -Z/+Z), A/D (-X/+X) and Q/E (-Y/+Y) in its parent
/// frame, and turns it around Y while the right mouse button is dragged.
///
/// Holding shift moves faster, holding alt moves slower.
#[derive(Debug, Clone, Copy)]
pub struct FlyControls {
    params: ViewParams,
}

impl Default for FlyControls {
    fn default() -> Self {
        FlyControls::new(ViewParams::default())
    }
}

impl FlyControls {
    pub fn new(params: ViewParams) -> Self {
        FlyControls { params }
    }

    /// Gets the distance moved in this frame.
    pub fn step(&self, input: &InputState) -> f32 {
        let mut step = self.params.move_step;

        if input.is_shift_down() {
            step *= self.params.fast_multiplier;
        }

        if input.is_alt_down() {
            step *= self.params.slow_multiplier;
        }

        step
    }

    /// Gets the translation of this frame, in the parent frame of the controlled node.
    pub fn movement(&self, input: &InputState) -> Vector3<f32> {
        let step = self.step(input);
        let mut v = Vector3::new(0.0, 0.0, 0.0);

        let keys = [
            (Key::W, Vector3::new(0.0, 0.0, -1.0)),
            (Key::S, Vector3::new(0.0, 0.0, 1.0)),
            (Key::A, Vector3::new(-1.0, 0.0, 0.0)),
            (Key::D, Vector3::new(1.0, 0.0, 0.0)),
            (Key::Q, Vector3::new(0.0, -1.0, 0.0)),
            (Key::E, Vector3::new(0.0, 1.0, 0.0)),
        ];

        for &(key, dir) in &keys {
            if input.is_key_down(key) {
                v += dir * step;
            }
        }

        v
    }

    /// Gets the rotation of this frame around the Y axis, in degrees.
    pub fn turn(&self, input: &InputState) -> f32 {
        if input.is_mouse_down(MouseButton::Right) {
            -input.mouse_movement().x * self.params.rotate_sensitivity
        } else {
            0.0
        }
    }

    /// Applies the input of this frame to `node`.
    pub fn update(&self, graph: &mut SceneGraph, node: NodeId, input: &InputState) -> Result<()> {
        let movement = self.movement(input);
        let turn = self.turn(input);

        graph.translate(node, movement)?;
        graph.rotate(node, [0.0, turn, 0.0])?;
        Ok(())
    }
}
