use easel::application::{Settings, ViewParams};
use easel::errors::{Error, Result};
use easel::math::prelude::Color;
use easel::video::{Canvas, Viewport};

use crate::element::Camera;
use crate::renderer;
use crate::spatial::graph::SceneGraph;
use crate::NodeId;

/// Everything a lab needs to update and render a scene: the graph, the selectable
/// cameras, an optional observer camera and the framebuffer viewport.
///
/// With an observer, the framebuffer is split in halves. The observer renders the
/// left half, together with the viewing frustum of the active camera, and the active
/// camera renders the right half. Without one the active camera covers the whole
/// framebuffer.
pub struct SceneContext {
    graph: SceneGraph,
    cameras: Vec<NodeId>,
    selection: usize,
    observer: Option<NodeId>,
    viewport: Viewport,
    params: ViewParams,

    pub clear_color: Color,
    pub show_frustum: bool,
}

impl SceneContext {
    pub fn new(settings: &Settings) -> Self {
        let size = settings.window.size;

        SceneContext {
            graph: SceneGraph::new(),
            cameras: Vec::new(),
            selection: 0,
            observer: None,
            viewport: Viewport::new(0, 0, size.x, size.y),
            params: settings.view,
            clear_color: Color::black(),
            show_frustum: true,
        }
    }

    #[inline]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    #[inline]
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    #[inline]
    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Creates a selectable camera under `parent`. The first camera added becomes the
    /// active one.
    pub fn add_camera(&mut self, parent: NodeId, camera: Camera) -> Result<NodeId> {
        let node = self.graph.add_child(parent, camera)?;
        self.cameras.push(node);
        self.fit_cameras();
        Ok(node)
    }

    /// Sets the camera which observes the scene from the left half of the framebuffer.
    pub fn set_observer(&mut self, observer: Option<NodeId>) -> Result<()> {
        if let Some(node) = observer {
            self.graph.camera(node)?;
        }

        self.observer = observer;
        self.fit_cameras();
        Ok(())
    }

    /// Gets the observer camera. Observers removed from the graph are ignored.
    #[inline]
    pub fn observer(&self) -> Option<NodeId> {
        self.observer.filter(|&v| self.graph.contains(v))
    }

    /// Gets the selectable cameras, in the order they were added.
    #[inline]
    pub fn cameras(&self) -> &[NodeId] {
        &self.cameras
    }

    /// Gets the active camera.
    pub fn active_camera(&self) -> Option<NodeId> {
        self.cameras
            .get(self.selection)
            .cloned()
            .filter(|&v| self.graph.contains(v))
    }

    /// Makes a selectable camera the active one.
    pub fn select_camera(&mut self, camera: NodeId) -> Result<()> {
        match self.cameras.iter().position(|&v| v == camera) {
            Some(index) if self.graph.contains(camera) => {
                self.selection = index;
                Ok(())
            }
            _ => Err(Error::NotACamera(camera.to_string())),
        }
    }

    /// Cycles the active camera through the selectable ones. Cameras removed from the
    /// graph are forgotten.
    pub fn select_next_camera(&mut self) -> Option<NodeId> {
        let graph = &self.graph;
        self.cameras.retain(|&v| graph.contains(v));

        if self.cameras.is_empty() {
            self.selection = 0;
            return None;
        }

        self.selection = (self.selection + 1) % self.cameras.len();
        let camera = self.cameras[self.selection];
        info!("[SceneContext] Switch to camera {}.", camera);
        Some(camera)
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the framebuffer, and fits the aspect ratio of all the cameras to their
    /// new viewports.
    pub fn resize(&mut self, viewport: Viewport) {
        debug!(
            "[SceneContext] Resize to {}x{}.",
            viewport.width, viewport.height
        );

        self.viewport = viewport;
        self.fit_cameras();
    }

    /// Gets the viewports of the observer and of the active camera.
    pub fn viewports(&self) -> (Option<Viewport>, Viewport) {
        let v = self.viewport;

        if self.observer().is_some() {
            let half = v.width / 2;
            let left = Viewport::new(v.x, v.y, half, v.height);
            let right = Viewport::new(v.x + half, v.y, v.width - half, v.height);
            (Some(left), right)
        } else {
            (None, v)
        }
    }

    fn fit_cameras(&mut self) {
        let (left, right) = self.viewports();

        if let (Some(observer), Some(left)) = (self.observer(), left) {
            if let Ok(camera) = self.graph.camera_mut(observer) {
                camera.fit_aspect(left.aspect());
            }
        }

        for &node in &self.cameras {
            if Some(node) == self.observer {
                continue;
            }

            if let Ok(camera) = self.graph.camera_mut(node) {
                camera.fit_aspect(right.aspect());
            }
        }
    }

    /// Runs the update hook of `node`.
    #[inline]
    pub fn update(&mut self, node: NodeId, dt: f32) -> Result<()> {
        self.graph.update(node, dt)
    }

    /// Renders a frame.
    pub fn render(&self, canvas: &mut dyn Canvas, dt: f32) -> Result<()> {
        canvas.clear(self.clear_color);

        let (left, right) = self.viewports();
        let active = self.active_camera();

        if let (Some(observer), Some(left)) = (self.observer(), left) {
            renderer::render_view(&self.graph, observer, left, canvas, dt)?;

            if let Some(camera) = active.filter(|&v| v != observer) {
                if self.show_frustum {
                    renderer::draw_frustum(&self.graph, observer, camera, canvas)?;
                }
            }
        }

        match active {
            Some(camera) => renderer::render_view(&self.graph, camera, right, canvas, dt),
            None => {
                trace!("[SceneContext] Nothing to render without active camera.");
                Ok(())
            }
        }
    }

    /// Logs the hierarchy of the whole graph.
    #[inline]
    pub fn print_hierarchy(&self) {
        self.graph.print_hierarchy();
    }
}
