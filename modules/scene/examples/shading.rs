//! A textured sphere lit by two orbiting point lights, with a shaded cube next to it.
//!
//! W/S/A/D/Q/E move the active camera. Hold left control to move the observer instead.

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
    pivot: NodeId,
}

impl Window {
    fn new(settings: &Settings) -> Result<Window> {
        let mut ctx = SceneContext::new(settings);
        let params = *ctx.params();
        let root = ctx.graph().root();

        let checker = TextureHandle::from(Handle::new(0, 1));
        let phong = ShaderHandle::from(Handle::new(0, 1));
        let flat = ShaderHandle::from(Handle::new(1, 1));

        let pivot = {
            let graph = ctx.graph_mut();
            graph.add_child(root, Ground::default())?;

            // The sphere and the cube share the phong shader, only the sphere is textured.
            let shaded = graph.add_child(root, Element::Group)?;
            graph.set_name(shaded, "Shaded")?;
            graph.set_shader(shaded, Some(phong))?;

            let sphere = graph.add_child(shaded, Sphere::new(0.75))?;
            graph.set_name(sphere, "Sphere")?;
            graph.set_texture(sphere, Some(checker))?;
            graph.translate(sphere, [-1.0, 0.75, 0.0])?;

            let cube = graph.add_child(shaded, Cube::default())?;
            graph.set_name(cube, "Cube")?;
            graph.translate(cube, [1.0, 0.5, 0.0])?;

            let pivot = graph.add_child(root, Element::Group)?;
            graph.set_name(pivot, "Lights")?;
            graph.translate(pivot, [0.0, 2.0, 0.0])?;

            let warm = Lit {
                color: Color::rgb8(255, 200, 150),
                ..Lit::default()
            };

            let cold = Lit {
                color: Color::rgb8(150, 200, 255),
                intensity: 0.5,
                ..Lit::default()
            };

            for &(lit, x) in &[(warm, 3.0), (cold, -3.0)] {
                let node = graph.add_child(pivot, lit)?;
                graph.translate(node, [x, 0.0, 0.0])?;

                // Marks the light with an unlit little sphere.
                let marker = graph.add_child(node, Sphere::new(0.1))?;
                graph.set_shader(marker, Some(flat))?;
            }

            pivot
        };

        let observer = {
            let mut camera = Camera::default();
            camera.set_far(1000.0);

            let graph = ctx.graph_mut();
            let observer = graph.add_child(root, camera)?;
            graph.set_name(observer, "Observer")?;
            graph.translate(observer, [0.0, 3.0, params.observer_distance])?;
            graph.rotate(observer, [-10.0, 0.0, 0.0])?;
            observer
        };

        ctx.set_observer(Some(observer))?;

        let camera = ctx.add_camera(root, Camera::perspective(Deg(45.0), 1.0, 0.5, 20.0))?;
        {
            let graph = ctx.graph_mut();
            graph.set_name(camera, "Perspective")?;
            graph.translate(camera, [0.0, 1.0, 6.0])?;
        }

        ctx.print_hierarchy();

        Ok(Window {
            ctx,
            controls: FlyControls::new(params),
            pivot,
        })
    }
}

impl Application for Window {
    fn on_update(&mut self, input: &InputState, dt: f32) -> Result<()> {
        let target = if input.is_key_down(Key::LControl) {
            self.ctx.observer()
        } else {
            self.ctx.active_camera()
        };

        if let Some(node) = target {
            self.controls.update(self.ctx.graph_mut(), node, input)?;
        }

        self.ctx.graph_mut().rotate(self.pivot, [0.0, 45.0 * dt, 0.0])?;
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
    settings.window.title = "Shading".into();

    let mut window = Window::new(&settings).unwrap();
    let mut headless = Headless::new(&settings);

    for _ in 0..30 {
        headless.advance(&mut window, 0.016).unwrap();
    }

    headless.input_mut().on_key_pressed(Key::LControl);
    headless.input_mut().on_key_pressed(Key::S);
    for _ in 0..30 {
        headless.advance(&mut window, 0.016).unwrap();
    }

    headless.input_mut().on_key_released(Key::S);
    headless.input_mut().on_key_released(Key::LControl);
    headless.advance(&mut window, 0.016).unwrap();

    let canvas = headless.canvas();
    let textured = canvas
        .draw_calls()
        .filter(|dc| dc.state.texture.is_some())
        .count();

    info!(
        "Recorded {} draw calls, {} of them textured, lit by {} lights in frame {}.",
        canvas.draw_calls().count(),
        textured,
        canvas.lights().iter().filter(|v| v.is_some()).count(),
        headless.frames()
    );

    window.ctx.print_hierarchy();
}
