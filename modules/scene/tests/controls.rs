#[macro_use]
extern crate approx;
extern crate easel;
extern crate easel_scene;

use easel::prelude::*;
use easel_scene::prelude::*;

#[test]
fn movement() {
    let controls = FlyControls::default();
    let mut input = InputState::new();
    assert_eq!(controls.movement(&input), Vector3::new(0.0, 0.0, 0.0));

    input.on_key_pressed(Key::W);
    input.on_key_pressed(Key::D);
    input.on_key_pressed(Key::E);
    assert_ulps_eq!(controls.movement(&input), Vector3::new(0.1, 0.1, -0.1));

    // Opposite keys cancel each other.
    input.on_key_pressed(Key::S);
    input.on_key_pressed(Key::A);
    input.on_key_pressed(Key::Q);
    assert_ulps_eq!(controls.movement(&input), Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn modifiers() {
    let controls = FlyControls::default();
    let mut input = InputState::new();
    assert_ulps_eq!(controls.step(&input), 0.1);

    input.on_key_pressed(Key::LShift);
    assert_ulps_eq!(controls.step(&input), 1.0);

    input.on_key_released(Key::LShift);
    input.on_key_pressed(Key::RAlt);
    assert_relative_eq!(controls.step(&input), 0.01, epsilon = 1e-6);
}

#[test]
fn turn() {
    let controls = FlyControls::default();
    let mut input = InputState::new();

    input.on_mouse_moved(Vector2::new(20.0, 5.0));
    assert_eq!(controls.turn(&input), 0.0);

    input.on_mouse_pressed(MouseButton::Right);
    assert_ulps_eq!(controls.turn(&input), -2.0);

    input.advance();
    assert_eq!(controls.turn(&input), 0.0);
}

#[test]
fn update() {
    let controls = FlyControls::default();
    let mut input = InputState::new();

    let mut graph = SceneGraph::new();
    let root = graph.root();
    let camera = graph.add_child(root, Camera::default()).unwrap();

    input.on_key_pressed(Key::S);
    input.on_mouse_pressed(MouseButton::Right);
    input.on_mouse_moved(Vector2::new(-100.0, 0.0));

    for _ in 0..10 {
        controls.update(&mut graph, camera, &input).unwrap();
    }

    let transform = graph.local_transform(camera).unwrap();
    assert_relative_eq!(transform.position, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
    assert_relative_eq!(transform.orientation, Vector3::new(0.0, 100.0, 0.0), epsilon = 1e-4);

    graph.remove(camera).unwrap();
    assert!(controls.update(&mut graph, camera, &input).is_err());
}
