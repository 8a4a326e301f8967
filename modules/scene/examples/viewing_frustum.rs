//! Observes a perspective and an orthographic camera from a third one, with the viewing
//! frustum of the active camera drawn in the left half of the framebuffer.
//!
//! Press Tab to switch between the observed cameras, W/S/A/D/Q/E to move the active one
//! and drag with the right mouse button to turn it around.

extern crate easel;
extern crate easel_scene;
extern crate env_logger;
#[macro_use]
extern crate log;

use easel::prelude::*;
use easel_scene::prelude::*;

struct Window {
    ctx: SceneContext,
    controls: FlyControls,
    cube: NodeId,
}

impl Window {
    fn new(settings: &Settings) -> Result<Window> {
        let mut ctx = SceneContext::new(settings);
        let params = *ctx.params();
        let root = ctx.graph().root();

        let cube = {
            let graph = ctx.graph_mut();
            graph.add_child(root, Axis::default())?;
            graph.add_child(root, Ground::default())?;
            let cube = graph.add_child(root, Cube::default())?;
            graph.set_name(cube, "Cube")?;
            cube
        };

        let observer = {
            let mut camera = Camera::default();
            camera.set_far(1000.0);

            let graph = ctx.graph_mut();
            let observer = graph.add_child(root, camera)?;
            graph.set_name(observer, "Observer")?;
            graph.translate(observer, [0.0, 0.0, params.observer_distance])?;
            observer
        };

        ctx.set_observer(Some(observer))?;

        let size = params.view_size;
        let ortho = ctx.add_camera(root, Camera::ortho(-size, size, size, -size, -size, size))?;
        let perspective = ctx.add_camera(root, Camera::perspective(Deg(45.0), 1.0, 0.5, 10.0))?;

        {
            let graph = ctx.graph_mut();
            graph.set_name(ortho, "Orthographic")?;
            graph.translate(ortho, [0.0, 5.0, 0.0])?;
            graph.rotate(ortho, [-90.0, 0.0, 0.0])?;

            graph.set_name(perspective, "Perspective")?;
            graph.translate(perspective, [0.0, 0.0, 5.0])?;

            for &camera in &[ortho, perspective] {
                graph.add_child(camera, Axis::new(0.05))?;
            }
        }

        ctx.print_hierarchy();

        Ok(Window {
            ctx,
            controls: FlyControls::new(params),
            cube,
        })
    }
}

impl Application for Window {
    fn on_update(&mut self, input: &InputState, dt: f32) -> Result<()> {
        if input.is_key_press(Key::Tab) {
            self.ctx.select_next_camera();
        }

        if let Some(camera) = self.ctx.active_camera() {
            self.controls.update(self.ctx.graph_mut(), camera, input)?;
        }

        self.ctx.graph_mut().rotate(self.cube, [0.0, 30.0 * dt, 0.0])?;
        Ok(())
    }

    fn on_render(&mut self, canvas: &mut dyn Canvas, dt: f32) -> Result<()> {
        self.ctx.render(canvas, dt)
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.ctx.resize(viewport);
    }
}

fn main() {
    env_logger::init();

    let mut settings = Settings::default();
    settings.window.title = "Viewing Frustum".into();

    let mut window = Window::new(&settings).unwrap();
    let mut headless = Headless::new(&settings);

    headless.input_mut().on_key_pressed(Key::W);
    for _ in 0..30 {
        headless.advance(&mut window, 0.016).unwrap();
    }

    headless.input_mut().on_key_released(Key::W);
    headless.input_mut().on_key_pressed(Key::Tab);
    headless.advance(&mut window, 0.016).unwrap();

    headless.resize(&mut window, 800, 600);
    headless.advance(&mut window, 0.016).unwrap();

    info!(
        "Recorded {} draw calls in frame {}.",
        headless.canvas().draw_calls().count(),
        headless.frames()
    );

    window.ctx.print_hierarchy();
}
