#[macro_use]
extern crate approx;
extern crate easel;
extern crate env_logger;
extern crate easel_scene;

use std::cell::RefCell;
use std::rc::Rc;

use easel::prelude::*;
use easel::video::MAX_LITS;
use easel_scene::prelude::*;
use easel_scene::renderer;

struct Tag {
    name: &'static str,
    visits: Rc<RefCell<Vec<&'static str>>>,
}

impl Drawable for Tag {
    fn type_name(&self) -> &str {
        self.name
    }

    fn draw(&self, _: &mut dyn Canvas, _: f32) {
        self.visits.borrow_mut().push(self.name);
    }
}

fn tag(name: &'static str, visits: &Rc<RefCell<Vec<&'static str>>>) -> Element {
    Element::custom(Tag {
        name,
        visits: visits.clone(),
    })
}

#[test]
fn visit_order() {
    let visits = Rc::new(RefCell::new(Vec::new()));

    let mut graph = SceneGraph::new();
    let root = graph.root();
    let a = graph.add_child(root, tag("a", &visits)).unwrap();
    let b = graph.add_child(root, tag("b", &visits)).unwrap();
    graph.add_child(a, tag("a1", &visits)).unwrap();
    let a2 = graph.add_child(a, tag("a2", &visits)).unwrap();
    graph.add_child(b, tag("b1", &visits)).unwrap();
    graph.add_child(a2, tag("a2x", &visits)).unwrap();
    graph.add_child(a, tag("a3", &visits)).unwrap();

    let mut canvas = CommandBuffer::new();
    graph
        .draw_subtree(root, &Matrix4::one(), &mut canvas, 0.0)
        .unwrap();

    assert_eq!(
        *visits.borrow(),
        ["a", "a1", "a2", "a2x", "a3", "b", "b1"]
    );

    visits.borrow_mut().clear();
    graph.draw_subtree(a2, &Matrix4::one(), &mut canvas, 0.0).unwrap();
    assert_eq!(*visits.borrow(), ["a2", "a2x"]);
}

#[test]
fn model_view_per_node() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Cube::default()).unwrap();
    let e2 = graph.add_child(e1, Cube::default()).unwrap();
    let e3 = graph.add_child(root, Cube::default()).unwrap();

    graph.translate(e1, [1.0, 0.0, 0.0]).unwrap();
    graph.translate(e2, [0.0, 1.0, 0.0]).unwrap();
    graph.translate(e3, [0.0, 0.0, 1.0]).unwrap();

    let view = Matrix4::from_translation(Vector3::new(0.0, 0.0, -5.0));
    let mut canvas = CommandBuffer::new();
    graph.draw_subtree(root, &view, &mut canvas, 0.0).unwrap();

    let origins: Vec<_> = canvas
        .draw_calls()
        .map(|dc| dc.state.model_view.transform_point(Point3::new(0.0, 0.0, 0.0)))
        .collect();

    assert_eq!(origins.len(), 3);
    assert_ulps_eq!(origins[0], Point3::new(1.0, 0.0, -5.0));
    assert_ulps_eq!(origins[1], Point3::new(1.0, 1.0, -5.0));
    assert_ulps_eq!(origins[2], Point3::new(0.0, 0.0, -4.0));

    for node in &[e1, e2, e3] {
        let world = graph.local_to_world(*node).unwrap();
        assert!(canvas
            .draw_calls()
            .any(|dc| dc.state.model_view == view * world));
    }
}

#[test]
fn draw_subtree_of_a_leaf() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Element::Group).unwrap();

    let mut canvas = CommandBuffer::new();
    graph
        .draw_subtree(e1, &Matrix4::one(), &mut canvas, 0.0)
        .unwrap();

    assert_eq!(canvas.commands(), [Command::SetModelView(Matrix4::one())]);

    graph.remove(e1).unwrap();
    assert!(graph
        .draw_subtree(e1, &Matrix4::one(), &mut canvas, 0.0)
        .is_err());
    assert_eq!(canvas.len(), 1);
}

#[test]
fn bindings_are_scoped() {
    let t1 = TextureHandle::from(Handle::new(1, 1));
    let t2 = TextureHandle::from(Handle::new(2, 1));
    let s1 = ShaderHandle::from(Handle::new(1, 1));

    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Cube::default()).unwrap();
    let e2 = graph.add_child(e1, Cube::default()).unwrap();
    let e3 = graph.add_child(e1, Cube::default()).unwrap();
    let e4 = graph.add_child(root, Cube::default()).unwrap();

    graph.set_texture(e1, Some(t1)).unwrap();
    graph.set_shader(e1, Some(s1)).unwrap();
    graph.set_texture(e2, Some(t2)).unwrap();

    let mut canvas = CommandBuffer::new();
    graph
        .draw_subtree(root, &Matrix4::one(), &mut canvas, 0.0)
        .unwrap();

    let states: Vec<_> = canvas
        .draw_calls()
        .map(|dc| (dc.state.texture, dc.state.shader))
        .collect();

    assert_eq!(
        states,
        [
            (Some(t1), Some(s1)),
            (Some(t2), Some(s1)),
            (Some(t1), Some(s1)),
            (None, None),
        ]
    );

    assert_eq!(canvas.state().texture, None);
    assert_eq!(canvas.state().shader, None);
    let _ = (e3, e4);
}

#[test]
fn render_view() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    graph.add_child(root, Axis::default()).unwrap();
    let camera = graph.add_child(root, Camera::default()).unwrap();
    graph.translate(camera, [0.0, 0.0, 5.0]).unwrap();

    let viewport = Viewport::new(0, 0, 1280, 720);
    let mut canvas = CommandBuffer::new();
    renderer::render_view(&graph, camera, viewport, &mut canvas, 0.0).unwrap();

    let dc: Vec<_> = canvas.draw_calls().collect();
    assert_eq!(dc.len(), 1);
    assert_eq!(dc[0].primitive, Primitive::Lines);
    assert_eq!(dc[0].state.viewport, viewport);
    assert_eq!(dc[0].state.projection, Camera::default().matrix());
    assert_ulps_eq!(
        dc[0].state.model_view.transform_point(Point3::new(0.0, 0.0, 0.0)),
        Point3::new(0.0, 0.0, -5.0)
    );

    let group = graph.add_child(root, Element::Group).unwrap();
    assert!(renderer::render_view(&graph, group, viewport, &mut canvas, 0.0).is_err());
}

#[test]
fn lights() {
    let _ = env_logger::try_init();
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let parent = graph.add_child(root, Element::Group).unwrap();
    graph.translate(parent, [0.0, 2.0, 0.0]).unwrap();

    let l1 = graph.add_child(parent, Lit::default()).unwrap();
    graph.translate(l1, [1.0, 0.0, 0.0]).unwrap();

    let disabled = Lit {
        enable: false,
        ..Lit::default()
    };
    graph.add_child(root, disabled).unwrap();

    let view = Matrix4::from_translation(Vector3::new(0.0, 0.0, -5.0));
    let mut canvas = CommandBuffer::new();
    assert_eq!(renderer::setup_lights(&graph, &view, &mut canvas), 1);

    let light = canvas.lights()[0].unwrap();
    assert_ulps_eq!(light.position, Point3::new(1.0, 2.0, -5.0));
    assert!(canvas.lights()[1..].iter().all(|v| v.is_none()));

    for _ in 0..MAX_LITS {
        graph.add_child(root, Lit::default()).unwrap();
    }

    assert_eq!(renderer::setup_lights(&graph, &view, &mut canvas), MAX_LITS);
    assert!(canvas.lights().iter().all(|v| v.is_some()));
}

#[test]
fn frustum() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let observer = graph.add_child(root, Camera::default()).unwrap();
    graph.translate(observer, [0.0, 0.0, 10.0]).unwrap();

    let observed = graph
        .add_child(root, Camera::perspective(Deg(90.0), 1.0, 1.0, 10.0))
        .unwrap();
    graph.translate(observed, [0.0, 0.0, 5.0]).unwrap();

    let mut canvas = CommandBuffer::new();
    renderer::draw_frustum(&graph, observer, observed, &mut canvas).unwrap();

    let dc: Vec<_> = canvas.draw_calls().collect();
    assert_eq!(dc.len(), 2);

    // The translucent volume.
    assert_eq!(dc[0].primitive, Primitive::Quads);
    assert!(dc[0].state.blend);
    assert!(!dc[0].state.depth_write);
    assert!(dc[0].vertices.iter().all(|v| v.color.a == 128.0 / 255.0));

    // The near top left corner of NDC ends up at world (-1, 1, 4), seen from z = 10.
    let corner = dc[0]
        .state
        .model_view
        .transform_point(Point3::new(-1.0, 1.0, -1.0));
    assert_relative_eq!(corner, Point3::new(-1.0, 1.0, -6.0), epsilon = 1e-4);

    // The outline, in the view space of the observer.
    assert_eq!(dc[1].primitive, Primitive::Lines);
    assert_eq!(dc[1].vertices.len(), 24);
    assert_relative_eq!(
        dc[1].vertices[0].position,
        Vector3::new(-1.0, 1.0, 4.0),
        epsilon = 1e-4
    );

    assert!(!canvas.state().blend);
    assert!(canvas.state().depth_write);
}
