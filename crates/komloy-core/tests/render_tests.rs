// Host-side tests for GPU instance packing.

use glam::{Mat4, Vec3};
use komloy_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn record_layouts_match_shader_strides() {
    assert_eq!(std::mem::size_of::<Instance>(), 80);
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn lantern_instance_carries_pulse_mapping() {
    let l = Lantern::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, std::f32::consts::FRAC_PI_2);
    let inst = Instance::lantern(&l);
    assert_eq!(inst.pos, [1.0, 2.0, 3.0]);
    assert_eq!(inst.kind, KIND_LANTERN);
    assert!((inst.pulse - 1.0).abs() < 1e-6);
    assert!((inst.glow[1] - 1.0).abs() < 1e-6, "full pulse is bright yellow");
    assert!((inst.glow[3] - core_scale(1.0)).abs() < 1e-6);
    assert!((inst.flame_base[1] - 0.7).abs() < 1e-6);
}

#[test]
fn instances_are_sorted_far_to_near() {
    let cfg = SceneConfig {
        lantern_count: 100,
        ..SceneConfig::default()
    };
    let scene = Scene::with_rng(&cfg, StdRng::seed_from_u64(3)).expect("valid config");
    let (eye, _) = scene.eye_and_target();
    let mut out = Vec::new();
    build_instances(&scene, eye, &mut out);
    assert_eq!(out.len(), 100 + 6, "lanterns plus figure parts");
    let dists: Vec<f32> = out
        .iter()
        .map(|i| Vec3::from(i.pos).distance_squared(eye))
        .collect();
    assert!(dists.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(out.iter().filter(|i| i.kind == KIND_SOLID).count(), 6);
}

#[test]
fn first_person_hides_the_figure() {
    let cfg = SceneConfig {
        lantern_count: 10,
        view_mode: ViewMode::FirstPerson,
        ..SceneConfig::default()
    };
    let scene = Scene::with_rng(&cfg, StdRng::seed_from_u64(3)).expect("valid config");
    let mut out = Vec::new();
    build_instances(&scene, Vec3::ZERO, &mut out);
    assert_eq!(out.len(), 10);
}

#[test]
fn uniforms_pack_flame_table_and_billboard_axes() {
    let mut rng = StdRng::seed_from_u64(9);
    let shapes = generate_flame_shapes(&mut rng);
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let u = SceneUniforms::new(Mat4::IDENTITY, eye, Vec3::ZERO, &shapes);
    assert!((Vec3::from_slice(&u.cam_right[..3]) - Vec3::X).length() < 1e-5);
    assert!((Vec3::from_slice(&u.cam_up[..3]) - Vec3::Y).length() < 1e-5);
    for (packed, shape) in u.flames.iter().zip(&shapes) {
        assert_eq!(packed[3], shape.alpha);
    }
    // First layer of each shape: tip 0.8, base 0.2.
    for layers in &u.layers {
        assert!((layers[0][1] - 0.8).abs() < 1e-6);
        assert!((layers[0][2] - 0.2).abs() < 1e-6);
        assert!(layers.iter().all(|l| (0.0..=1.0).contains(&l[0])));
    }
}

#[test]
fn flame_layers_fan_around_vertical_axis() {
    let shape = FlameShapeDescriptor {
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
        alpha: 1.0,
        animation_offset: 0.0,
    };
    let layers: Vec<FlameLayer> = shape.layers().collect();
    assert_eq!(layers.len(), FLAME_LAYERS);
    assert_eq!(layers[0].yaw_deg, 0.0);
    assert!((layers[9].yaw_deg - 162.0).abs() < 1e-4);
    assert!((layers[9].tip_alpha - 0.3).abs() < 1e-6);
    assert!((layers[9].base_alpha - 0.5).abs() < 1e-6);
}

#[test]
fn shader_source_declares_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}
