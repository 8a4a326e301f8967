#[macro_use]
extern crate approx;
extern crate easel;
extern crate env_logger;
extern crate easel_scene;
extern crate rand;

use easel::prelude::*;
use easel_scene::prelude::*;
use rand::Rng;

#[test]
fn hierarchy() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Element::Group).unwrap();
    let e2 = graph.add_child(e1, Axis::default()).unwrap();
    let e3 = graph.add_child(e1, Cube::default()).unwrap();
    let e4 = graph.add_child(e3, Sphere::default()).unwrap();
    // root <- e1 <- (e2, e3 <- (e4))

    assert_eq!(graph.len(), 5);
    assert!(graph.is_ancestor(e2, e1));
    assert!(graph.is_ancestor(e4, e1));
    assert!(graph.is_ancestor(e4, e3));
    assert!(graph.is_ancestor(e4, root));

    assert!(!graph.is_ancestor(e1, e1));
    assert!(!graph.is_ancestor(e1, e2));
    assert!(!graph.is_ancestor(e2, e4));

    assert!(graph.is_root(root));
    assert!(!graph.is_root(e1));
    assert!(graph.is_leaf(e2));
    assert!(!graph.is_leaf(e3));
    assert_eq!(graph.parent(e4), Some(e3));
    assert_eq!(graph.parent(root), None);

    assert_eq!(graph.children(e1).collect::<Vec<_>>(), [e2, e3]);
    assert_eq!(graph.ancestors(e4).collect::<Vec<_>>(), [e3, e1, root]);
    assert_eq!(
        graph.descendants(root).collect::<Vec<_>>(),
        [e1, e2, e3, e4]
    );
}

#[test]
fn invalid_handles() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Element::Group).unwrap();
    graph.remove(e1).unwrap();

    assert!(!graph.contains(e1));
    assert!(graph.add_child(e1, Element::Group).is_err());
    assert!(graph.translate(e1, [1.0, 0.0, 0.0]).is_err());
    assert!(graph.local_to_world(e1).is_none());
    assert!(graph.world_to_local(e1).is_none());
    assert_eq!(graph.children(e1).count(), 0);

    match graph.camera(root) {
        Err(Error::NotACamera(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    match graph.camera(e1) {
        Err(Error::NodeHandleInvalid(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    let err = graph.translate(e1, [1.0, 0.0, 0.0]).unwrap_err();
    assert_eq!(err.to_string(), format!("{} is invalid.", e1));
    assert!(err.to_string().starts_with("NodeId ("));

    let err = graph.camera(root).map(|_| ()).unwrap_err();
    assert_eq!(err.to_string(), "NodeId (0, 1) is not a camera.");
}

#[test]
fn remove() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Element::Group).unwrap();
    let e2 = graph.add_child(e1, Element::Group).unwrap();
    let e3 = graph.add_child(e1, Element::Group).unwrap();
    let e4 = graph.add_child(e3, Element::Group).unwrap();
    let e5 = graph.add_child(root, Element::Group).unwrap();
    // root <- (e1 <- (e2, e3 <- e4), e5)

    assert_eq!(graph.remove(e3).unwrap(), [e3, e4]);
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.children(e1).collect::<Vec<_>>(), [e2]);

    // Freed slots are reused with new versions.
    let e6 = graph.add_child(e5, Element::Group).unwrap();
    assert!(graph.contains(e6));
    assert!(!graph.contains(e3));
    assert!(!graph.contains(e4));

    // Removing the root only removes what hangs below.
    assert_eq!(graph.remove(root).unwrap(), [e1, e2, e5, e6]);
    assert_eq!(graph.len(), 1);
    assert!(graph.contains(root));
    assert!(graph.is_leaf(root));
}

#[test]
fn names_and_cameras() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let c1 = graph.add_child(root, Camera::default()).unwrap();
    let e1 = graph.add_child(root, Element::Group).unwrap();
    let c2 = graph.add_child(e1, Camera::screen(1280.0, 720.0)).unwrap();

    graph.set_name(c1, "Observer").unwrap();
    assert_eq!(graph.name(c1), Some("Observer"));
    assert_eq!(graph.name(root), Some("Root"));
    assert_eq!(graph.name(e1), Some(""));

    assert_eq!(graph.cameras(), [c1, c2]);
    assert!(graph.camera(c2).is_ok());

    graph.camera_mut(c1).unwrap().set_fovy(Deg(45.0));
    match *graph.camera(c1).unwrap().projection() {
        Projection::Perspective { fovy, .. } => assert_eq!(fovy, Deg(45.0)),
        _ => unreachable!(),
    }
}

#[test]
fn hierarchy_printing() {
    let _ = env_logger::try_init();
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let axis = graph.add_child(root, Axis::default()).unwrap();
    graph.add_child(axis, Camera::default()).unwrap();
    graph.translate(axis, [1.0, 2.0, 3.0]).unwrap();

    let text = format!("{}", graph.hierarchy(root));
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "Object \"Root\"");
    assert_eq!(lines[1], "  Scaling  = vec3(1.000000, 1.000000, 1.000000)");
    assert_eq!(lines[4], "  Axis");
    assert_eq!(lines[7], "    Position = vec3(1.000000, 2.000000, 3.000000)");
    assert_eq!(lines[8], "    PerspectiveCamera");
    assert!(lines[12].starts_with("      Projection = Perspective"));
    assert_eq!(lines.len(), 13);
}

fn random_tree(depth: usize) -> (SceneGraph, Vec<NodeId>) {
    let mut rng = rand::thread_rng();
    let mut graph = SceneGraph::new();
    let mut nodes = vec![graph.root()];

    for _ in 0..depth {
        let parent = nodes[rng.gen_range(0..nodes.len())];
        let node = graph.add_child(parent, Element::Group).unwrap();

        let position: [f32; 3] = [
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        ];

        let orientation: [f32; 3] = [
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-180.0..180.0),
        ];

        let mut scaling = [0.0f32; 3];
        for v in &mut scaling {
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            *v = sign * rng.gen_range(0.8..1.25);
        }

        graph
            .set_transform(node, position, orientation, scaling)
            .unwrap();
        nodes.push(node);
    }

    (graph, nodes)
}

#[test]
fn world_to_local_is_inverse() {
    for _ in 0..10 {
        let (graph, nodes) = random_tree(8);

        for &node in &nodes {
            let m = graph.world_to_local(node).unwrap() * graph.local_to_world(node).unwrap();
            assert_relative_eq!(m, Matrix4::one(), epsilon = 1e-3);
        }
    }
}

#[test]
fn deep_chain_is_inverse() {
    let mut graph = SceneGraph::new();
    let mut node = graph.root();

    for i in 0..16 {
        node = graph.add_child(node, Element::Group).unwrap();
        let f = i as f32;
        graph
            .set_transform(node, [f * 0.1, -0.2, 0.3], [f, 2.0 * f, -f], [1.1, 0.9, 1.0])
            .unwrap();
    }

    let m = graph.world_to_local(node).unwrap() * graph.local_to_world(node).unwrap();
    assert_relative_eq!(m, Matrix4::one(), epsilon = 1e-3);
}

#[test]
fn scaled_parent() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let parent = graph.add_child(root, Element::Group).unwrap();
    graph
        .set_transform(parent, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [2.0, 2.0, 2.0])
        .unwrap();

    let child = graph.add_child(parent, Element::Group).unwrap();
    let world = graph.local_to_world(child).unwrap();

    assert_ulps_eq!(
        world.transform_point(Point3::new(0.0, 0.0, 0.0)),
        Point3::new(1.0, 0.0, 0.0)
    );

    assert_ulps_eq!(
        world.transform_point(Point3::new(1.0, 0.0, 0.0)),
        Point3::new(3.0, 0.0, 0.0)
    );

    assert_ulps_eq!(
        graph.world_position(child).unwrap(),
        Point3::new(1.0, 0.0, 0.0)
    );
}

#[test]
fn camera_view() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let camera = graph.add_child(root, Camera::default()).unwrap();
    graph
        .set_transform(camera, [0.0, 0.0, 5.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
        .unwrap();

    let view = graph.world_to_local(camera).unwrap();
    assert_ulps_eq!(
        view.transform_point(Point3::new(0.0, 0.0, 0.0)),
        Point3::new(0.0, 0.0, -5.0)
    );
}

#[test]
fn rotated_parent() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let e1 = graph.add_child(root, Element::Group).unwrap();
    let e2 = graph.add_child(e1, Element::Group).unwrap();

    graph.translate(e2, [1.0, 0.0, 0.0]).unwrap();
    graph.rotate(e1, [0.0, 90.0, 0.0]).unwrap();
    graph.translate(e1, [1.0, 0.0, 2.0]).unwrap();

    assert_relative_eq!(
        graph.world_position(e2).unwrap(),
        Point3::new(1.0, 0.0, 1.0),
        epsilon = 1e-6
    );
}

#[test]
fn zero_scale_is_not_an_error() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    let flat = graph.add_child(root, Cube::default()).unwrap();
    graph
        .set_transform(flat, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 1.0])
        .unwrap();

    let world = graph.local_to_world(flat).unwrap();
    let cols: &[[f32; 4]; 4] = world.as_ref();
    assert!(cols.iter().flat_map(|v| v.iter()).all(|v| v.is_finite()));

    let inverse = graph.world_to_local(flat).unwrap();
    let cols: &[[f32; 4]; 4] = inverse.as_ref();
    assert!(cols.iter().flat_map(|v| v.iter()).any(|v| !v.is_finite()));

    let mut canvas = CommandBuffer::new();
    assert!(graph
        .draw_subtree(root, &inverse, &mut canvas, 0.0)
        .is_ok());
    assert_eq!(canvas.draw_calls().count(), 1);
}

#[test]
fn elements_by_path() {
    use easel_scene::element::{Axis, Camera, Cube, Element, Ground, Lit, Sphere};

    let elements: Vec<Element> = vec![
        Axis::default().into(),
        Camera::default().into(),
        Cube::default().into(),
        Ground::default().into(),
        Lit::default().into(),
        Sphere::default().into(),
    ];

    let names: Vec<_> = elements.iter().map(|v| v.type_name()).collect();
    assert_eq!(
        names,
        ["Axis", "PerspectiveCamera", "Cube", "MeshGround", "Lit", "Sphere"]
    );
}
