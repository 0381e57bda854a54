// Host-side tests for how the lanyard drives its rapier world: fixed stepping,
// sleeping, waking on drag and the yaw correction.

use folio_core::*;
use glam::{Vec2, Vec3};
use rapier3d::prelude::RigidBodyHandle;

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

fn asleep(rig: &BandRig) -> bool {
    let h = rig.handles().unwrap();
    [h.j1, h.j2, h.j3, h.card]
        .into_iter()
        .all(|b| rig.body(b).unwrap().is_sleeping())
}

fn card_ndc(rig: &BandRig) -> Vec2 {
    let (t, _) = rig.card_transform().unwrap();
    rig.camera().project(t).truncate()
}

#[test]
fn frame_ignores_non_positive_and_non_finite_dt() {
    let mut rig = BandRig::built(BandParams::default());
    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        rig.frame(dt);
    }
    assert_eq!(rig.physics_steps(), 0);
}

#[test]
fn steps_at_fixed_rate_and_drops_backlog() {
    let mut rig = BandRig::built(BandParams::default());
    rig.frame(PHYSICS_TIMESTEP / 2.0);
    assert_eq!(rig.physics_steps(), 0);
    rig.frame(PHYSICS_TIMESTEP / 2.0);
    assert_eq!(rig.physics_steps(), 1);
    // a long stall runs at most MAX_SUBSTEPS steps in one frame
    rig.frame(1.0);
    assert_eq!(rig.physics_steps(), 1 + u64::from(MAX_SUBSTEPS));
}

#[test]
fn rebuild_restarts_step_count() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 0.5);
    assert!(rig.physics_steps() > 0);
    rig.build();
    assert_eq!(rig.physics_steps(), 0);
}

#[test]
fn anchor_stays_put_through_drag() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 2.0);
    let h = rig.handles().unwrap();
    let ndc = card_ndc(&rig);
    assert!(rig.pointer_down(ndc));
    rig.pointer_move(ndc + Vec2::new(0.4, 0.2));
    run(&mut rig, 1.0);
    rig.pointer_up();
    run(&mut rig, 1.0);
    assert_eq!(translation(&rig, h.fixed), ANCHOR_POSITION);
}

#[test]
fn sleeping_card_keeps_its_velocity() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 15.0);
    assert!(asleep(&rig));
    let h = rig.handles().unwrap();
    let card = rig.body(h.card).unwrap();
    let angvel = *card.angvel();
    let (position, rotation) = rig.card_transform().unwrap();

    // ten minutes of idle frames
    for _ in 0..36_000 {
        rig.frame(DT);
    }
    assert!(asleep(&rig));
    assert_eq!(*rig.body(h.card).unwrap().angvel(), angvel);
    assert_eq!(rig.card_transform(), Some((position, rotation)));
}

#[test]
fn grabbing_wakes_the_chain() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 15.0);
    assert!(asleep(&rig));
    assert!(rig.pointer_down(card_ndc(&rig)));
    rig.frame(DT);
    let h = rig.handles().unwrap();
    for b in [h.j1, h.j2, h.j3] {
        assert!(!rig.body(b).unwrap().is_sleeping());
    }
}

#[test]
fn released_card_settles_back_and_sleeps_again() {
    let mut rig = BandRig::built(BandParams::default());
    run(&mut rig, 15.0);
    let h = rig.handles().unwrap();
    let rest = translation(&rig, h.card);

    let ndc = card_ndc(&rig);
    assert!(rig.pointer_down(ndc));
    rig.pointer_move(ndc + Vec2::new(0.0, 0.3));
    run(&mut rig, 1.0);
    assert!(translation(&rig, h.card).y > rest.y + 0.2);
    rig.pointer_up();

    run(&mut rig, 15.0);
    assert!(asleep(&rig));
    let back = translation(&rig, h.card);
    assert!(back.distance(rest) < 0.15, "rest {rest} vs {back}");
}
