//! Tomato model.
//!
//! Geometry, materials and the static layout of every part. Nothing here
//! changes after construction except the transforms and visibility the
//! animation driver writes through the returned [`TomatoRig`].

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

use glam::Vec3;

use crate::animation::{Part, RestPose};
use crate::character::rig::TomatoRig;
use crate::resources::primitives::{
    create_box, create_cylinder, create_sphere, create_torus, CylinderOptions, SphereOptions,
    TorusOptions,
};
use crate::resources::{Mesh, MeshStandardMaterial};
use crate::scene::{NodeHandle, Scene, Transform};

/// sRGB colors of the model.
pub mod palette {
    pub const SKIN: u32 = 0xff3b30;
    pub const STEM: u32 = 0x4a7c3b;
    pub const LEAF: u32 = 0x5ea847;
    pub const EYE_WHITE: u32 = 0xffffff;
    pub const PUPIL: u32 = 0x000000;
    pub const NOSE: u32 = 0xe63027;
    pub const MOUTH: u32 = 0x8b0000;
    pub const TONGUE: u32 = 0xff6b6b;
    pub const STEEL: u32 = 0xc0c0c0;
    pub const SLICE: u32 = 0xff4444;
    pub const SEED: u32 = 0xffffcc;
}

const LEAF_COUNT: usize = 5;
const PRONG_OFFSETS: [f32; 4] = [-0.08, -0.03, 0.03, 0.08];
const SEED_COUNT: usize = 6;
const SEED_RING_RADIUS: f32 = 0.12;

const EYE_LEFT: Vec3 = Vec3::new(-0.35, 0.25, 0.85);
const EYE_RIGHT: Vec3 = Vec3::new(0.35, 0.25, 0.85);
const NOSE: Vec3 = Vec3::new(0.0, 0.05, 0.98);
const MOUTH: Vec3 = Vec3::new(0.0, -0.25, 0.92);
const TONGUE: Vec3 = Vec3::new(0.0, -0.35, 0.88);
const STEM: Vec3 = Vec3::new(0.0, 1.05, 0.0);

fn at(position: Vec3) -> Transform {
    Transform::from_position(position)
}

fn rotated(position: Vec3, x: f32, y: f32, z: f32) -> Transform {
    let mut t = Transform::from_position(position);
    t.set_rotation_euler(x, y, z);
    t
}

/// Adds the tomato to `scene` under a new root group and returns the
/// handles of its animated parts.
///
/// Pupils, fork and slice are placed at `rest`.
pub fn build_tomato(scene: &mut Scene, rest: &RestPose) -> TomatoRig {
    let body = scene.create_node("Tomato");

    // ---- Body ----
    let skin_geo = scene.add_geometry(create_sphere(SphereOptions::new(1.0, 64, 64)));
    let skin_mat = scene.add_material(
        MeshStandardMaterial::from_hex(palette::SKIN)
            .with_roughness(0.2)
            .with_metalness(0.1)
            .with_env_map_intensity(0.8),
    );
    scene.add_mesh(
        Some(body),
        "Skin",
        Mesh::new(skin_geo, skin_mat)
            .with_cast_shadows(true)
            .with_receive_shadows(true),
        Transform::new(),
    );

    build_stem(scene, body);

    // ---- Face ----
    let eye_geo = scene.add_geometry(create_sphere(SphereOptions::new(0.18, 32, 32)));
    let eye_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::EYE_WHITE).with_roughness(0.1));
    let pupil_geo = scene.add_geometry(create_sphere(SphereOptions::new(0.09, 32, 32)));
    let pupil_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::PUPIL));

    let eye = Mesh::new(eye_geo, eye_mat).with_cast_shadows(true);
    let pupil = Mesh::new(pupil_geo, pupil_mat);

    let left_eye = scene.add_mesh(Some(body), "LeftEye", eye, at(EYE_LEFT));
    let left_pupil = scene.add_mesh(Some(body), "LeftPupil", pupil, at(rest.left_pupil));
    let right_eye = scene.add_mesh(Some(body), "RightEye", eye, at(EYE_RIGHT));
    let right_pupil = scene.add_mesh(Some(body), "RightPupil", pupil, at(rest.right_pupil));

    let nose_geo = scene.add_geometry(create_sphere(SphereOptions::new(0.08, 16, 16)));
    let nose_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::NOSE).with_roughness(0.3));
    scene.add_mesh(
        Some(body),
        "Nose",
        Mesh::new(nose_geo, nose_mat).with_cast_shadows(true),
        at(NOSE),
    );

    let mouth_geo = scene.add_geometry(create_torus(TorusOptions {
        radius: 0.25,
        tube: 0.08,
        radial_segments: 16,
        tubular_segments: 32,
        arc: PI,
    }));
    let mouth_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::MOUTH).with_roughness(0.4));
    let mouth = scene.add_mesh(
        Some(body),
        "Mouth",
        Mesh::new(mouth_geo, mouth_mat).with_cast_shadows(true),
        at(MOUTH),
    );

    let tongue_geo = scene.add_geometry(create_sphere(SphereOptions {
        theta_length: FRAC_PI_2,
        ..SphereOptions::new(0.15, 16, 16)
    }));
    let tongue_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::TONGUE).with_roughness(0.6));
    scene.add_mesh(Some(body), "Tongue", Mesh::new(tongue_geo, tongue_mat), at(TONGUE));

    // ---- Fork & slice ----
    let fork = build_fork(scene, body, rest.utensil_start);
    let slice = build_slice(scene, body, rest.utensil_start);

    let mut handles = [NodeHandle::default(); Part::COUNT];
    for (part, handle) in [
        (Part::Body, body),
        (Part::Fork, fork),
        (Part::Slice, slice),
        (Part::Mouth, mouth),
        (Part::LeftEye, left_eye),
        (Part::RightEye, right_eye),
        (Part::LeftPupil, left_pupil),
        (Part::RightPupil, right_pupil),
    ] {
        handles[part.index()] = handle;
    }

    log::info!(
        "Built tomato model: {} nodes, {} meshes",
        scene.nodes.len(),
        scene.meshes.len()
    );

    TomatoRig::new(handles)
}

fn build_stem(scene: &mut Scene, body: NodeHandle) {
    let stem = scene.add_group(body, "Stem", rotated(STEM, 0.0, 0.0, 0.1));

    let stalk_geo = scene.add_geometry(create_cylinder(CylinderOptions::new(0.08, 0.12, 0.3, 16)));
    let stalk_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::STEM).with_roughness(0.7));
    scene.add_mesh(
        Some(stem),
        "Stalk",
        Mesh::new(stalk_geo, stalk_mat).with_cast_shadows(true),
        Transform::new(),
    );

    let leaf_geo = scene.add_geometry(create_box(0.35, 0.02, 0.15));
    let leaf_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::LEAF).with_roughness(0.6));
    let leaf = Mesh::new(leaf_geo, leaf_mat).with_cast_shadows(true);

    for i in 0..LEAF_COUNT {
        let yaw = i as f32 * TAU / LEAF_COUNT as f32;
        let pivot = scene.add_group(
            stem,
            format!("LeafPivot {i}"),
            rotated(Vec3::new(0.0, 0.1, 0.0), 0.0, yaw, FRAC_PI_3),
        );
        scene.add_mesh(Some(pivot), format!("Leaf {i}"), leaf, Transform::new());
    }
}

fn build_fork(scene: &mut Scene, body: NodeHandle, start: Vec3) -> NodeHandle {
    let fork = scene.add_group(body, "Fork", at(start));

    let steel = scene.add_material(
        MeshStandardMaterial::from_hex(palette::STEEL)
            .with_metalness(0.8)
            .with_roughness(0.2),
    );

    let handle_geo = scene.add_geometry(create_cylinder(CylinderOptions::new(0.03, 0.03, 1.5, 16)));
    scene.add_mesh(Some(fork), "ForkHandle", Mesh::new(handle_geo, steel), Transform::new());

    let prong_geo = scene.add_geometry(create_cylinder(CylinderOptions::new(0.015, 0.015, 0.4, 8)));
    for (i, &x) in PRONG_OFFSETS.iter().enumerate() {
        scene.add_mesh(
            Some(fork),
            format!("Prong {i}"),
            Mesh::new(prong_geo, steel),
            at(Vec3::new(x, 0.8, 0.0)),
        );
    }

    fork
}

fn build_slice(scene: &mut Scene, body: NodeHandle, start: Vec3) -> NodeHandle {
    let slice = scene.add_group(body, "Slice", at(start));

    let disc_geo = scene.add_geometry(create_cylinder(CylinderOptions::new(0.25, 0.25, 0.08, 32)));
    let disc_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::SLICE).with_roughness(0.3));
    scene.add_mesh(
        Some(slice),
        "SliceDisc",
        Mesh::new(disc_geo, disc_mat).with_cast_shadows(true),
        rotated(Vec3::ZERO, FRAC_PI_2, 0.0, 0.0),
    );

    let seed_geo = scene.add_geometry(create_sphere(SphereOptions::new(0.02, 8, 8)));
    let seed_mat = scene.add_material(MeshStandardMaterial::from_hex(palette::SEED));
    for i in 0..SEED_COUNT {
        let angle = i as f32 * TAU / SEED_COUNT as f32;
        let (sin, cos) = angle.sin_cos();
        scene.add_mesh(
            Some(slice),
            format!("Seed {i}"),
            Mesh::new(seed_geo, seed_mat),
            rotated(
                Vec3::new(cos * SEED_RING_RADIUS, 0.0, sin * SEED_RING_RADIUS),
                FRAC_PI_2,
                0.0,
                0.0,
            ),
        );
    }

    slice
}
