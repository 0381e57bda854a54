// Host-side tests for the lanyard rig: chain layout, strap smoothing and drag.

use folio_core::*;
use glam::{Quat, Vec2, Vec3};
use rapier3d::prelude::{point, RigidBodyHandle, RigidBodyType};

const DT: f32 = 1.0 / 60.0;

fn run(rig: &mut BandRig, seconds: f32) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        rig.frame(DT);
    }
}

fn translation(rig: &BandRig, h: RigidBodyHandle) -> Vec3 {
    to_vec3(rig.body(h).unwrap().translation())
}

/// Largest amount any rope exceeds its length, or the card pin drifts from
/// the last joint.
fn max_stretch(rig: &BandRig) -> f32 {
    let h = rig.handles().unwrap();
    let rope = [(h.fixed, h.j1), (h.j1, h.j2), (h.j2, h.j3)]
        .into_iter()
        .map(|(a, b)| translation(rig, a).distance(translation(rig, b)) - ROPE_LENGTH)
        .fold(0.0, f32::max);
    let a = CARD_JOINT_ANCHOR;
    let pin = rig.body(h.card).unwrap().position() * point![a.x, a.y, a.z];
    let pin = Vec3::new(pin.x, pin.y, pin.z);
    rope.max(pin.distance(translation(rig, h.j3)))
}

fn card_ndc(rig: &BandRig) -> Vec2 {
    let (t, _) = rig.card_transform().unwrap();
    rig.camera().project(t).truncate()
}

#[test]
fn unbuilt_rig_is_inert() {
    let mut rig = BandRig::default();
    assert!(!rig.is_ready());
    rig.frame(DT);
    assert!(rig.strap_points().is_empty());
    assert!(rig.card_transform().is_none());
    assert!(!rig.pointer_down(Vec2::ZERO));
    assert_eq!(rig.cursor(), Cursor::Auto);
}

#[test]
fn build_creates_chain_in_rest_layout() {
    let rig = BandRig::built(BandParams::default());
    let h = rig.handles().unwrap();
    assert!(h.all().iter().all(|&b| rig.body(b).is_some()));
    assert_eq!(rig.impulse_joints().len(), 4);
    assert_eq!(translation(&rig, h.fixed), ANCHOR_POSITION);
    assert_eq!(rig.body(h.fixed).unwrap().body_type(), RigidBodyType::Fixed);
    for (i, j) in [h.j1, h.j2, h.j3].into_iter().enumerate() {
        let expected = ANCHOR_POSITION - Vec3::Y * SEGMENT_SPACING * (i + 1) as f32;
        assert!(translation(&rig, j).distance(expected) < 1e-6);
    }
    assert_eq!(rig.card_kind(), Some(RigidBodyType::Dynamic));
    assert_eq!(rig.interaction(), Interaction::Idle);
}

#[test]
fn strap_runs_from_last_joint_to_anchor() {
    let mut rig = BandRig::built(BandParams::default());
    rig.frame(DT);
    let h = rig.handles().unwrap();
    let strap = rig.strap_points();
    assert_eq!(strap.len(), STRAP_DIVISIONS + 1);
    assert!(strap[0].distance(translation(&rig, h.j3)) < 1e-4);
    assert!(strap[strap.len() - 1].distance(ANCHOR_POSITION) < 1e-4);
    assert_eq!(rig.ribbon().len(), 2 * strap.len());
}

#[test]
fn chain_settles_below_anchor_within_tolerance() {
    let mut rig = BandRig::built(BandParams::default());
    for _ in 0..480 {
        rig.frame(DT);
        assert!(max_stretch(&rig) < 0.3, "stretch {}", max_stretch(&rig));
    }
    let h = rig.handles().unwrap();
    let card = translation(&rig, h.card);
    assert!(card.y < ANCHOR_POSITION.y - 3.0, "card hangs low, y={}", card.y);
    assert!((card.x - ANCHOR_POSITION.x).abs() < 0.1);
    assert!(max_stretch(&rig) <= 0.1, "stretch {}", max_stretch(&rig));
}

#[test]
fn settled_chain_goes_to_sleep() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 15.0);
    let h = rig.handles().unwrap();
    for body in [h.j1, h.j2, h.j3, h.card] {
        assert!(rig.body(body).unwrap().is_sleeping());
    }
}

#[test]
fn smoothed_joints_follow_truth() {
    let mut rig = BandRig::built(BandParams::default());
    assert_eq!(rig.smoothed(), [None, None]);
    rig.frame(DT);
    let h = rig.handles().unwrap();
    // first frame seeds from the simulated position
    assert_eq!(rig.smoothed()[0], Some(translation(&rig, h.j1)));
    run(&mut rig, 8.0);
    let [l1, l2] = rig.smoothed();
    assert!(l1.unwrap().distance(translation(&rig, h.j1)) < 0.01);
    assert!(l2.unwrap().distance(translation(&rig, h.j2)) < 0.01);
}

#[test]
fn smoothing_never_passes_the_target() {
    let target = Vec3::new(1.0, -2.0, 0.5);
    let starts = [
        Vec3::ZERO,
        Vec3::new(1.05, -2.0, 0.5),
        Vec3::new(-20.0, 4.0, 3.0),
    ];
    for start in starts {
        for dt in [0.0, 1.0 / 240.0, DT, 0.1, 5.0] {
            let next = smooth_toward(start, target, dt, STRAP_MIN_SPEED, STRAP_MAX_SPEED);
            let before = start.distance(target);
            let after = next.distance(target);
            assert!(after <= before + 1e-6, "moved away: {before} -> {after}");
            // stays on the segment toward the target
            let step = next - start;
            assert!(step.dot(target - start) >= -1e-6);
            assert!(step.length() <= before + 1e-6);
        }
    }
}

#[test]
fn smoothing_closes_gap_gradually() {
    let mut p = Vec3::ZERO;
    let target = Vec3::new(0.0, 1.0, 0.0);
    let mut last = p.distance(target);
    for _ in 0..10 {
        p = smooth_toward(p, target, DT, 0.0, 50.0);
        let d = p.distance(target);
        assert!(d < last);
        assert!(d > 0.0);
        last = d;
    }
}

#[test]
fn hover_updates_cursor() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 2.0);
    rig.pointer_move(card_ndc(&rig));
    assert_eq!(rig.interaction(), Interaction::Hovering);
    assert_eq!(rig.cursor(), Cursor::Grab);
    rig.pointer_move(Vec2::new(0.9, 0.9));
    assert_eq!(rig.interaction(), Interaction::Idle);
    assert_eq!(rig.cursor(), Cursor::Auto);
}

#[test]
fn pointer_down_off_card_does_not_grab() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 2.0);
    assert!(!rig.pointer_down(Vec2::new(0.9, 0.9)));
    assert_eq!(rig.card_kind(), Some(RigidBodyType::Dynamic));
    assert!(!rig.pointer_up());
}

#[test]
fn drag_then_release_restores_dynamic_motion() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 2.0);
    let h = rig.handles().unwrap();
    let ndc = card_ndc(&rig);
    let rest = translation(&rig, h.card);

    assert!(rig.pointer_down(ndc));
    assert_eq!(rig.card_kind(), Some(RigidBodyType::KinematicPositionBased));
    assert_eq!(rig.cursor(), Cursor::Grabbing);

    rig.pointer_move(ndc + Vec2::new(0.1, 0.3));
    assert!(matches!(rig.interaction(), Interaction::Dragging { .. }));
    // leaving the canvas does not drop the card
    rig.pointer_leave();
    assert!(matches!(rig.interaction(), Interaction::Dragging { .. }));
    rig.pointer_move(ndc + Vec2::new(0.1, 0.3));
    run(&mut rig, 0.5);
    let held = translation(&rig, h.card);
    assert!(held.y > rest.y + 0.2, "card follows the pointer up: {rest} -> {held}");

    assert!(rig.pointer_up());
    assert_eq!(rig.card_kind(), Some(RigidBodyType::Dynamic));
    assert!(!matches!(rig.interaction(), Interaction::Dragging { .. }));

    rig.frame(DT);
    rig.frame(DT);
    let moving = translation(&rig, h.card);
    assert_ne!(moving, held, "gravity acts again after release");
    run(&mut rig, 1.0);
    assert!(translation(&rig, h.card).y < held.y - 0.1);
}

#[test]
fn rebuild_discards_drag_state() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 2.0);
    assert!(rig.pointer_down(card_ndc(&rig)));
    rig.build();
    assert_eq!(rig.interaction(), Interaction::Idle);
    assert_eq!(rig.card_kind(), Some(RigidBodyType::Dynamic));
    assert!(rig.strap_points().is_empty());
    assert_eq!(rig.smoothed(), [None, None]);
}

#[test]
fn ray_box_hits_misses_and_starts_inside() {
    let half = Vec3::new(1.0, 1.0, 0.1);
    let hit = ray_box(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, Quat::IDENTITY, half);
    assert!((hit.unwrap() - 9.9).abs() < 1e-5);

    let miss = ray_box(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, Quat::IDENTITY, half);
    assert!(miss.is_none());

    let behind = ray_box(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, Quat::IDENTITY, half);
    assert!(behind.is_none());

    let inside = ray_box(Vec3::ZERO, Vec3::X, Vec3::ZERO, Quat::IDENTITY, half);
    assert_eq!(inside, Some(0.0));
}

#[test]
fn ray_box_respects_rotation() {
    // a thin box turned edge-on to the ray is missed off its short side
    let half = Vec3::new(1.0, 1.0, 0.01);
    let edge_on = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let origin = Vec3::new(0.5, 0.0, 10.0);
    assert!(ray_box(origin, Vec3::NEG_Z, Vec3::ZERO, Quat::IDENTITY, half).is_some());
    assert!(ray_box(origin, Vec3::NEG_Z, Vec3::ZERO, edge_on, half).is_none());
}
