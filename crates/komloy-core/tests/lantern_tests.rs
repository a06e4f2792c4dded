// Host-side tests for the lantern lifecycle: drift, cull and respawn.

use glam::Vec3;
use komloy_core::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still(position: Vec3, phase: f32) -> Lantern {
    Lantern::new(position, Vec3::ZERO, phase)
}

fn assert_in_window(l: &Lantern, anchor: Vec3) {
    let d = l.position - anchor;
    assert!(d.y >= 0.0 && d.y <= 35.0, "respawn height {} out of window", d.y);
    assert!(d.x.abs() <= 50.0, "respawn x offset {} out of window", d.x);
    assert!(d.z.abs() <= 50.0, "respawn z offset {} out of window", d.z);
}

#[test]
fn core_pulse_is_derived_from_flame_phase_every_tick() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = LanternField::new(64, Vec3::ZERO, &mut rng);
    for _ in 0..200 {
        field.update(Vec3::ZERO, &mut rng);
        for l in field.lanterns() {
            let expected = (l.flame_phase.sin() + 1.0) / 2.0;
            assert!((l.core_pulse() - expected).abs() < 1e-6);
            assert!((0.0..=1.0).contains(&l.core_pulse()));
        }
    }
}

#[test]
fn drifting_lantern_advances_position_and_phase() {
    let mut rng = StdRng::seed_from_u64(1);
    let v = Vec3::new(0.004, 0.02, -0.003);
    let mut field = LanternField::from_lanterns(vec![Lantern::new(Vec3::new(1.0, 5.0, 2.0), v, 3.0)]);
    let respawned = field.update(Vec3::ZERO, &mut rng);
    assert_eq!(respawned, 0);
    let l = &field.lanterns()[0];
    assert!((l.position - (Vec3::new(1.0, 5.0, 2.0) + v)).length() < 1e-6);
    assert!((l.flame_phase - (3.0 + FLAME_PHASE_STEP)).abs() < 1e-6);
    assert_eq!(l.velocity, v);
}

#[test]
fn lantern_above_ceiling_respawns_inside_window() {
    let mut rng = StdRng::seed_from_u64(99);
    let anchor = Vec3::new(12.0, 3.0, -40.0);
    for _ in 0..100 {
        let mut field =
            LanternField::from_lanterns(vec![still(anchor + Vec3::new(0.0, 40.0, 0.0), 1.0)]);
        assert_eq!(field.update(anchor, &mut rng), 1);
        assert_in_window(&field.lanterns()[0], anchor);
    }
}

#[test]
fn respawn_preserves_flame_phase_and_redraws_velocity() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = LanternField::from_lanterns(vec![still(Vec3::new(0.0, 80.0, 0.0), 42.0)]);
    field.update(Vec3::ZERO, &mut rng);
    let l = &field.lanterns()[0];
    // Only the regular per-tick advance touches the phase.
    assert!((l.flame_phase - (42.0 + FLAME_PHASE_STEP)).abs() < 1e-6);
    assert!(l.velocity.x.abs() <= 0.005 && l.velocity.z.abs() <= 0.005);
    assert!(l.velocity.y >= 0.01 && l.velocity.y <= 0.03);
}

#[test]
fn respawn_branch_alone_keeps_phase() {
    let mut rng = StdRng::seed_from_u64(11);
    let ranges = SpawnRanges::default();
    let mut l = still(Vec3::new(500.0, 500.0, 500.0), 17.25);
    l.respawn(Vec3::ZERO, &ranges, &mut rng);
    assert_eq!(l.flame_phase, 17.25);
    assert_in_window(&l, Vec3::ZERO);
}

#[test]
fn cull_box_edges_are_inclusive() {
    let anchor = Vec3::new(1.0, 2.0, 3.0);
    let b = CullBox::around(anchor);
    assert!(b.contains(anchor + Vec3::new(0.0, -1.0, 0.0)));
    assert!(b.contains(anchor + Vec3::new(0.0, 37.5, 0.0)));
    assert!(b.contains(anchor + Vec3::new(50.0, 0.0, -50.0)));
    assert!(!b.contains(anchor + Vec3::new(0.0, -1.01, 0.0)));
    assert!(!b.contains(anchor + Vec3::new(0.0, 37.51, 0.0)));
    assert!(!b.contains(anchor + Vec3::new(50.01, 0.0, 0.0)));
    assert!(!b.contains(anchor + Vec3::new(0.0, 0.0, -50.01)));
}

#[test]
fn lantern_on_floor_boundary_is_not_respawned() {
    let mut rng = StdRng::seed_from_u64(3);
    let start = Vec3::new(0.0, -1.0, 0.0);
    let mut field = LanternField::from_lanterns(vec![still(start, 0.0)]);
    assert_eq!(field.update(Vec3::ZERO, &mut rng), 0);
    assert_eq!(field.lanterns()[0].position, start);
}

#[test]
fn single_axis_violation_resets_all_axes() {
    // Fixed-sequence source: every draw lands on the same value.
    let mut rng = StepRng::new(0, 0);
    let start = Vec3::new(60.0, 10.0, 5.0);
    let mut field = LanternField::from_lanterns(vec![Lantern::new(
        start,
        Vec3::new(0.001, 0.02, 0.001),
        0.0,
    )]);
    assert_eq!(field.update(Vec3::ZERO, &mut rng), 1);
    let l = &field.lanterns()[0];
    // All-zero bits sample the low end of every range.
    assert_eq!(l.position, Vec3::new(-50.0, 0.0, -50.0));
    assert_eq!(l.velocity, Vec3::new(-0.005, 0.01, -0.005));
}

#[test]
fn three_lantern_scenario_respawns_all_out_of_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let ay = 0.0;
    let mut field = LanternField::from_lanterns(vec![
        still(Vec3::new(0.0, ay - 5.0, 0.0), 0.0),
        still(Vec3::new(0.0, ay + 50.0, 0.0), 0.0),
        still(Vec3::new(200.0, ay, 0.0), 0.0),
    ]);
    assert_eq!(field.update(Vec3::ZERO, &mut rng), 3);
    let ls = field.lanterns();
    assert!(ls[0].position.y >= 0.0 && ls[0].position.y <= 35.0);
    assert!(ls[1].position.y >= 0.0 && ls[1].position.y <= 35.0);
    assert!(ls[2].position.x.abs() <= 50.0);
}

#[test]
fn respawn_follows_moving_anchor() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut field = LanternField::new(300, Vec3::ZERO, &mut rng);
    let anchor = Vec3::new(1000.0, 0.0, -1000.0);
    let respawned = field.update(anchor, &mut rng);
    assert_eq!(respawned, 300, "every lantern is far from the new anchor");
    for l in field.lanterns() {
        assert_in_window(l, anchor);
    }
}

#[test]
fn initial_population_is_anchor_relative() {
    let mut rng = StdRng::seed_from_u64(13);
    let anchor = Vec3::new(-20.0, 4.0, 9.0);
    let field = LanternField::new(LANTERN_COUNT, anchor, &mut rng);
    assert_eq!(field.len(), LANTERN_COUNT);
    for l in field.lanterns() {
        let d = l.position - anchor;
        assert!(d.x.abs() <= 50.0 && d.z.abs() <= 50.0);
        assert!(d.y >= -10.0 && d.y <= 50.0);
        assert!(l.velocity.y > 0.0, "lanterns always rise");
        assert!(l.flame_phase >= 0.0 && l.flame_phase <= 100.0);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(77);
        let mut field = LanternField::new(50, Vec3::ZERO, &mut rng);
        for _ in 0..500 {
            field.update(Vec3::new(0.0, 0.0, -0.5), &mut rng);
        }
        field.lanterns().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn steady_state_keeps_everything_inside_cull_box() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut field = LanternField::new(200, Vec3::ZERO, &mut rng);
    let mut anchor = Vec3::ZERO;
    for _ in 0..2000 {
        anchor += Vec3::new(0.1, 0.0, -0.05);
        field.update(anchor, &mut rng);
        let bounds = CullBox::around(anchor);
        assert!(field.lanterns().iter().all(|l| bounds.contains(l.position)));
    }
}
