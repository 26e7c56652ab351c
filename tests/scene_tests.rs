//! Scene graph tests
//!
//! Tests for:
//! - Node hierarchy (add, attach, remove)
//! - Visibility pruning in `renderables`
//! - Camera / light components
//! - Viewport stage setup
//! - Tomato model construction and rig application

use chomp::animation::{FeedingDriver, FrameUpdate, Part, PartWrite, Phase, RestPose};
use chomp::character::build_tomato;
use chomp::resources::primitives::create_box;
use chomp::resources::{Mesh, MeshStandardMaterial};
use chomp::scene::light::LightKind;
use chomp::scene::{Camera, Light, NodeHandle, Scene, Transform};
use chomp::viewport;
use glam::Vec3;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn box_mesh(scene: &mut Scene) -> Mesh {
    let geometry = scene.add_geometry(create_box(1.0, 1.0, 1.0));
    let material = scene.add_material(MeshStandardMaterial::default());
    Mesh::new(geometry, material)
}

fn world_position(scene: &Scene, handle: NodeHandle) -> Vec3 {
    scene.get_node(handle).unwrap().world_matrix().translation.into()
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn add_group_links_parent_and_child() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    let child = scene.add_group(root, "Child", Transform::new());

    assert_eq!(scene.root_nodes, vec![root]);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(root));
    assert_eq!(scene.get_node(root).unwrap().children(), &[child]);
}

#[test]
fn missing_parent_falls_back_to_root() {
    let mut scene = Scene::new();
    let ghost = scene.create_node("Ghost");
    scene.remove_node(ghost);

    let orphan = scene.add_group(ghost, "Orphan", Transform::new());
    assert!(scene.root_nodes.contains(&orphan));
    assert_eq!(scene.get_node(orphan).unwrap().parent(), None);
}

#[test]
fn world_matrix_composes_through_hierarchy() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    scene.get_node_mut(root).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
    let child = scene.add_group(root, "Child", Transform::from_position(Vec3::new(0.0, 2.0, 0.0)));

    scene.update_matrix_world();
    assert!(vec3_approx(world_position(&scene, child), Vec3::new(1.0, 2.0, 0.0)));

    scene.get_node_mut(root).unwrap().transform.position = Vec3::new(-1.0, 0.0, 0.0);
    scene.update_matrix_world();
    assert!(vec3_approx(world_position(&scene, child), Vec3::new(-1.0, 2.0, 0.0)));
}

#[test]
fn attach_moves_node_between_parents() {
    let mut scene = Scene::new();
    let a = scene.create_node("A");
    let b = scene.create_node("B");
    let child = scene.add_group(a, "Child", Transform::new());

    scene.attach(child, b);

    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));

    // self-attach is ignored
    scene.attach(b, b);
    assert_eq!(scene.get_node(b).unwrap().parent(), None);
}

#[test]
fn attach_under_own_descendant_is_ignored() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    let mesh = box_mesh(&mut scene);
    let child = scene.add_mesh(Some(root), "Child", mesh, Transform::new());
    let grandchild = scene.add_group(child, "Grandchild", Transform::new());

    scene.attach(root, child);
    scene.attach(root, grandchild);

    assert_eq!(scene.root_nodes, vec![root]);
    assert_eq!(scene.get_node(root).unwrap().parent(), None);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(root));
    assert_eq!(scene.get_node(grandchild).unwrap().parent(), Some(child));
    assert!(scene.is_visible_in_hierarchy(grandchild));
    assert_eq!(scene.renderables().len(), 1);
}

#[test]
fn remove_node_drops_subtree_and_components() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    let mesh = box_mesh(&mut scene);
    let leaf = scene.add_mesh(Some(root), "Leaf", mesh, Transform::new());
    assert_eq!(scene.meshes.len(), 1);

    scene.remove_node(root);

    assert!(scene.get_node(root).is_none());
    assert!(scene.get_node(leaf).is_none());
    assert!(scene.meshes.is_empty());
    assert!(scene.root_nodes.is_empty());
}

#[test]
fn find_node_by_name() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    let nose = scene.add_group(root, "Nose", Transform::new());

    assert_eq!(scene.find_node_by_name("Nose"), Some(nose));
    assert_eq!(scene.find_node_by_name("Ears"), None);
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn hidden_parent_prunes_subtree_from_renderables() {
    let mut scene = Scene::new();
    let mesh = box_mesh(&mut scene);
    let root = scene.create_node("Root");
    let group = scene.add_group(root, "Group", Transform::new());
    let inner = scene.add_mesh(Some(group), "Inner", mesh, Transform::new());
    let outer = scene.add_mesh(Some(root), "Outer", mesh, Transform::new());

    scene.update_matrix_world();
    assert_eq!(scene.renderables().len(), 2);

    scene.get_node_mut(group).unwrap().visible = false;
    let items = scene.renderables();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].node, outer);
    assert!(!scene.is_visible_in_hierarchy(inner));

    scene.get_node_mut(group).unwrap().visible = true;
    assert_eq!(scene.renderables().len(), 2);
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn first_camera_becomes_active() {
    let mut scene = Scene::new();
    assert!(scene.main_camera().is_none());

    let first = scene.add_camera(Camera::new_perspective(50.0, 1.0, 0.1, 100.0), Transform::new());
    let _second = scene.add_camera(Camera::new_perspective(70.0, 1.0, 0.1, 100.0), Transform::new());

    assert_eq!(scene.active_camera, Some(first));
    assert!((scene.main_camera().unwrap().fov_degrees() - 50.0).abs() < 1e-4);
}

#[test]
fn hidden_lights_are_not_active() {
    let mut scene = Scene::new();
    let sun = scene.add_light(Light::new_directional(Vec3::ONE, 1.0), Transform::new());
    scene.add_light(Light::new_ambient(Vec3::ONE, 0.5), Transform::new());

    assert_eq!(scene.iter_active_lights().count(), 2);
    scene.get_node_mut(sun).unwrap().visible = false;
    assert_eq!(scene.iter_active_lights().count(), 1);
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn stage_adds_camera_lights_and_background() {
    let mut scene = Scene::new();
    let stage = viewport::setup_stage(&mut scene, 16.0 / 9.0);
    scene.update_matrix_world();

    assert_eq!(scene.active_camera, Some(stage.camera));
    let camera = scene.main_camera().unwrap();
    assert!((camera.fov_degrees() - viewport::CAMERA_FOV_DEGREES).abs() < 1e-4);
    assert!(vec3_approx(camera.position(), viewport::CAMERA_POSITION));

    assert_eq!(stage.lights.len(), 4);
    let kinds: Vec<_> = scene.iter_active_lights().map(|(l, _)| l.kind.clone()).collect();
    assert_eq!(kinds.iter().filter(|k| matches!(k, LightKind::Ambient)).count(), 1);
    assert_eq!(kinds.iter().filter(|k| matches!(k, LightKind::Directional)).count(), 2);
    assert_eq!(kinds.iter().filter(|k| matches!(k, LightKind::Spot(_))).count(), 1);

    // #ffb3ba: full red channel, opaque
    let bg = scene.background.unwrap();
    assert!((bg.x - 1.0).abs() < EPSILON);
    assert!((bg.w - 1.0).abs() < EPSILON);
    assert!(bg.y < bg.x && bg.z < bg.x);
    assert!(scene.environment.is_enabled());
}

#[test]
fn stage_orbit_controls_start_at_camera_distance() {
    let controls = viewport::orbit_controls();
    assert!((controls.radius - 5.0).abs() < EPSILON);
    assert!(!controls.enable_zoom);
    assert!(!controls.enable_pan);
}

// ============================================================================
// Character
// ============================================================================

#[test]
fn tomato_rig_resolves_distinct_live_parts() {
    let mut scene = Scene::new();
    let rig = build_tomato(&mut scene, &RestPose::DEFAULT);

    let handles: Vec<_> = Part::ALL.iter().map(|&p| rig.handle(p)).collect();
    for (i, a) in handles.iter().enumerate() {
        assert!(scene.get_node(*a).is_some());
        for b in &handles[i + 1..] {
            assert_ne!(a, b);
        }
    }

    // every part hangs off the body
    let body = rig.handle(Part::Body);
    assert!(scene.root_nodes.contains(&body));
    for part in Part::ALL.iter().skip(1) {
        assert_eq!(scene.get_node(rig.handle(*part)).unwrap().parent(), Some(body));
    }
}

#[test]
fn tomato_starts_at_rest_pose() {
    let mut scene = Scene::new();
    let rest = RestPose::DEFAULT;
    let rig = build_tomato(&mut scene, &rest);
    scene.update_matrix_world();

    assert!(vec3_approx(world_position(&scene, rig.handle(Part::Fork)), rest.utensil_start));
    assert!(vec3_approx(world_position(&scene, rig.handle(Part::Slice)), rest.utensil_start));
    assert!(vec3_approx(world_position(&scene, rig.handle(Part::LeftPupil)), rest.left_pupil));
    assert!(vec3_approx(world_position(&scene, rig.handle(Part::RightPupil)), rest.right_pupil));

    assert!(scene.find_node_by_name("Skin").is_some());
    assert!(scene.find_node_by_name("Tongue").is_some());
    assert!(!scene.renderables().is_empty());
}

#[test]
fn rig_apply_writes_only_given_fields() {
    let mut scene = Scene::new();
    let rig = build_tomato(&mut scene, &RestPose::DEFAULT);
    let mouth = rig.handle(Part::Mouth);
    let before = scene.get_node(mouth).unwrap().transform.position;

    let mut update = FrameUpdate::new(Phase::LoopReset);
    update.push(PartWrite::new(Part::Mouth).with_scale(Vec3::new(1.3, 1.6, 1.0)));
    update.push(PartWrite::new(Part::Fork).with_visible(false));
    rig.apply(&update, &mut scene);

    let node = scene.get_node(mouth).unwrap();
    assert_eq!(node.transform.scale, Vec3::new(1.3, 1.6, 1.0));
    assert_eq!(node.transform.position, before);
    assert!(!scene.get_node(rig.handle(Part::Fork)).unwrap().visible);
}

#[test]
fn chew_hides_utensil_from_renderables_and_reset_restores_it() {
    let mut scene = Scene::new();
    let rig = build_tomato(&mut scene, &RestPose::DEFAULT);
    let driver = FeedingDriver::default();
    let fork = rig.handle(Part::Fork);
    let is_fork_drawn = |scene: &Scene| {
        scene
            .renderables()
            .iter()
            .any(|item| scene.get_node(item.node).unwrap().parent() == Some(fork))
    };

    scene.update_matrix_world();
    assert!(is_fork_drawn(&scene));

    rig.apply(&driver.sample(3.0), &mut scene);
    scene.update_matrix_world();
    assert!(!is_fork_drawn(&scene));

    rig.apply(&driver.sample(5.0), &mut scene);
    scene.update_matrix_world();
    assert!(is_fork_drawn(&scene));
}

#[test]
fn chew_tilt_rotates_whole_body() {
    let mut scene = Scene::new();
    let rig = build_tomato(&mut scene, &RestPose::DEFAULT);
    let driver = FeedingDriver::default();

    rig.apply(&driver.sample(2.5), &mut scene);
    let body = scene.get_node(rig.handle(Part::Body)).unwrap();
    let tilt = body.transform.rotation_euler().z;
    assert!((tilt - (0.5_f32 * 3.0).sin() * 0.05).abs() < 1e-4);

    rig.apply(&driver.sample(0.1), &mut scene);
    let body = scene.get_node(rig.handle(Part::Body)).unwrap();
    assert!(body.transform.rotation_euler().z.abs() < 1e-6);
}

#[test]
fn rig_skips_removed_parts() {
    let mut scene = Scene::new();
    let rig = build_tomato(&mut scene, &RestPose::DEFAULT);
    scene.remove_node(rig.handle(Part::Slice));

    // must not panic
    rig.apply(&FeedingDriver::default().sample(1.0), &mut scene);
    assert!(scene.get_node(rig.handle(Part::Fork)).unwrap().visible);
}
