//! The render pass: sets up a camera, the lights and then traverses the graph.

use easel::errors::{Error, Result};
use easel::math::prelude::*;
use easel::video::{Canvas, Light, Primitive, Vertex, Viewport, MAX_LITS};

use crate::element::{Cube, Element};
use crate::spatial::graph::SceneGraph;
use crate::NodeId;

/// Renders the whole graph from `camera` into `viewport`.
///
/// The projection of the camera and its world->local transform are applied first, then
/// the lights are collected, and finally the root traverses itself.
pub fn render_view(
    graph: &SceneGraph,
    camera: NodeId,
    viewport: Viewport,
    canvas: &mut dyn Canvas,
    dt: f32,
) -> Result<()> {
    let projection = graph.camera(camera)?.matrix();
    let view = view_matrix(graph, camera)?;

    canvas.set_viewport(viewport);
    canvas.set_projection(&projection);
    canvas.set_depth_write(true);
    canvas.set_blend(false);

    setup_lights(graph, &view, canvas);
    graph.draw_subtree(graph.root(), &view, canvas, dt)
}

/// Hands the enabled lights of the graph, in tree order and expressed in the space
/// defined by `view`, to the canvas. Returns the number of lights set.
///
/// At most `MAX_LITS` lights are taken, the rest are skipped. Unused slots are cleared.
pub fn setup_lights(graph: &SceneGraph, view: &Matrix4<f32>, canvas: &mut dyn Canvas) -> usize {
    let root = graph.root();
    let mut slot = 0;

    for node in ::std::iter::once(root).chain(graph.descendants(root)) {
        let lit = match graph.element(node) {
            Some(Element::Lit(lit)) if lit.enable => *lit,
            _ => continue,
        };

        if slot >= MAX_LITS {
            warn!(
                "[Renderer] Only {} lights are supported, {} is skipped.",
                MAX_LITS, node
            );
            continue;
        }

        if let Some(world) = graph.local_to_world(node) {
            let position = (*view * world).transform_point(Point3::new(0.0, 0.0, 0.0));
            let light = Light {
                position,
                color: lit.color,
                intensity: lit.intensity,
                radius: lit.radius,
            };

            canvas.set_light(slot, Some(light));
            slot += 1;
        }
    }

    for i in slot..MAX_LITS {
        canvas.set_light(i, None);
    }

    slot
}

/// Draws the viewing volume of `observed` as seen from `observer`.
///
/// The normalized device cube is taken back into the view space of `observed` by its
/// inverse projection, then into world space, and drawn as a half-transparent cube with
/// depth writes disabled, so every face stays visible. The edges are outlined with
/// lines. Expects the projection of `observer` to be applied already.
pub fn draw_frustum(
    graph: &SceneGraph,
    observer: NodeId,
    observed: NodeId,
    canvas: &mut dyn Canvas,
) -> Result<()> {
    let view = view_matrix(graph, observer)?;
    let camera = graph.camera(observed)?;
    let world = graph
        .local_to_world(observed)
        .ok_or_else(|| Error::NodeHandleInvalid(observed.to_string()))?;

    canvas.set_depth_write(false);
    canvas.set_blend(true);

    canvas.set_model_view(&(view * world * camera.inverse_matrix()));
    Cube::new(1.0).with_alpha(128).draw(canvas);

    let corners = FrustumPoints::from_projection(camera.projection()).transform(&world);
    canvas.set_model_view(&view);
    canvas.draw(Primitive::Lines, &frustum_edges(&corners, Color::white()));

    canvas.set_blend(false);
    canvas.set_depth_write(true);
    Ok(())
}

/// Gets the 12 edges of a frustum as line segments.
pub fn frustum_edges(frustum: &FrustumPoints, color: Color) -> Vec<Vertex> {
    let f = frustum;
    let edges = [
        (f.near_top_left, f.near_top_right),
        (f.near_top_right, f.near_bottom_right),
        (f.near_bottom_right, f.near_bottom_left),
        (f.near_bottom_left, f.near_top_left),
        (f.far_top_left, f.far_top_right),
        (f.far_top_right, f.far_bottom_right),
        (f.far_bottom_right, f.far_bottom_left),
        (f.far_bottom_left, f.far_top_left),
        (f.near_top_left, f.far_top_left),
        (f.near_top_right, f.far_top_right),
        (f.near_bottom_left, f.far_bottom_left),
        (f.near_bottom_right, f.far_bottom_right),
    ];

    let mut vertices = Vec::with_capacity(24);
    for &(from, to) in &edges {
        vertices.push(Vertex::new(from.to_vec(), color));
        vertices.push(Vertex::new(to.to_vec(), color));
    }

    vertices
}

#[inline]
fn view_matrix(graph: &SceneGraph, camera: NodeId) -> Result<Matrix4<f32>> {
    graph
        .world_to_local(camera)
        .ok_or_else(|| Error::NodeHandleInvalid(camera.to_string()))
}
