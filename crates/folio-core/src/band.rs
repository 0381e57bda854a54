//! Lanyard badge rig: chain bodies, pointer drag and the smoothed strap.
//!
//! `BandRig` owns a rapier world with one fixed anchor, three rope-linked
//! joint bodies and the card. Every animation frame the front end calls
//! [`BandRig::frame`] and reads back the strap ribbon and the card transform
//! for drawing.

use crate::constants::*;
use crate::curve::{ribbon_strip, CatmullRom, CurveType};
use crate::state::Camera;
use glam::{Quat, Vec2, Vec3};
use rapier3d::prelude::*;

/// Tunables for the badge; `Default` gives the stock lanyard.
#[derive(Clone, Debug)]
pub struct BandParams {
    pub max_speed: f32,
    pub min_speed: f32,
    pub divisions: usize,
    pub strap_half_width: f32,
    pub yaw_correction: f32,
    pub anchor: Vec3,
}

impl Default for BandParams {
    fn default() -> Self {
        Self {
            max_speed: STRAP_MAX_SPEED,
            min_speed: STRAP_MIN_SPEED,
            divisions: STRAP_DIVISIONS,
            strap_half_width: STRAP_HALF_WIDTH,
            yaw_correction: YAW_CORRECTION,
            anchor: ANCHOR_POSITION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainHandles {
    pub fixed: RigidBodyHandle,
    pub j1: RigidBodyHandle,
    pub j2: RigidBodyHandle,
    pub j3: RigidBodyHandle,
    pub card: RigidBodyHandle,
}

impl ChainHandles {
    pub fn all(&self) -> [RigidBodyHandle; 5] {
        [self.fixed, self.j1, self.j2, self.j3, self.card]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Hovering,
    /// `offset` is the grab point relative to the card centre.
    Dragging { offset: Vec3 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Auto,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Move `lerped` toward `target`, faster the further behind it is. The step
/// fraction is clamped to `[0, 1]` so the result never passes the target.
pub fn smooth_toward(lerped: Vec3, target: Vec3, dt: f32, min_speed: f32, max_speed: f32) -> Vec3 {
    let gap = lerped
        .distance(target)
        .clamp(LERP_DISTANCE_MIN, LERP_DISTANCE_MAX);
    let alpha = (dt * (min_speed + gap * (max_speed - min_speed))).clamp(0.0, 1.0);
    lerped.lerp(target, alpha)
}

/// Slab test of a ray against an oriented box. Returns the entry distance,
/// or zero when the origin is inside.
pub fn ray_box(origin: Vec3, dir: Vec3, center: Vec3, rotation: Quat, half: Vec3) -> Option<f32> {
    let inv = rotation.inverse();
    let o = inv * (origin - center);
    let d = inv * dir;
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (o[axis], d[axis], half[axis]);
        if d.abs() < 1e-8 {
            if o.abs() > h {
                return None;
            }
            continue;
        }
        let t0 = (-h - o) / d;
        let t1 = (h - o) / d;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(t_min.max(0.0))
}

/// Rapier sets and pipeline for the chain, stepped at a fixed rate.
struct Physics {
    gravity: Vector<Real>,
    integration: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    accumulator: f32,
    steps: u64,
}

impl Physics {
    fn new() -> Self {
        let mut integration = IntegrationParameters::default();
        integration.dt = PHYSICS_TIMESTEP;
        Self {
            gravity: to_vector(GRAVITY),
            integration,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            accumulator: 0.0,
            steps: 0,
        }
    }

    fn add_body(&mut self, body: RigidBodyBuilder, collider: Option<ColliderBuilder>) -> RigidBodyHandle {
        let handle = self.bodies.insert(body.build());
        if let Some(collider) = collider {
            self.colliders
                .insert_with_parent(collider.build(), handle, &mut self.bodies);
        }
        handle
    }

    /// Run as many fixed steps as `dt` covers, at most `MAX_SUBSTEPS`.
    /// Backlog beyond that is dropped.
    fn advance(&mut self, dt: f32) {
        self.accumulator += dt;
        let mut taken = 0;
        while self.accumulator >= PHYSICS_TIMESTEP && taken < MAX_SUBSTEPS {
            self.pipeline.step(
                &self.gravity,
                &self.integration,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd,
                &(),
                &(),
            );
            self.accumulator -= PHYSICS_TIMESTEP;
            taken += 1;
        }
        if taken == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(PHYSICS_TIMESTEP);
        }
        self.steps += u64::from(taken);
    }

    fn wake(&mut self, handles: &[RigidBodyHandle]) {
        for &h in handles {
            if let Some(body) = self.bodies.get_mut(h) {
                body.wake_up(true);
            }
        }
    }

    fn translation(&self, h: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(h).map(|b| to_vec3(b.translation()))
    }
}

pub fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

pub fn to_vec3(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_quat(r: &Rotation<Real>) -> Quat {
    let q = r.quaternion();
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

pub struct BandRig {
    pub params: BandParams,
    physics: Physics,
    chain: Option<ChainHandles>,
    camera: Camera,
    pointer: Option<Vec2>,
    interaction: Interaction,
    smoothed: [Option<Vec3>; 2],
    curve: CatmullRom,
    strap: Vec<Vec3>,
    ribbon: Vec<Vec3>,
}

impl Default for BandRig {
    fn default() -> Self {
        Self::new(BandParams::default())
    }
}

impl BandRig {
    /// An empty rig; call [`BandRig::build`] before the first frame.
    pub fn new(params: BandParams) -> Self {
        Self {
            params,
            physics: Physics::new(),
            chain: None,
            camera: Camera::default(),
            pointer: None,
            interaction: Interaction::Idle,
            smoothed: [None; 2],
            curve: CatmullRom::new(CurveType::Chordal),
            strap: Vec::new(),
            ribbon: Vec::new(),
        }
    }

    /// Convenience for `new` + `build`.
    pub fn built(params: BandParams) -> Self {
        let mut rig = Self::new(params);
        rig.build();
        rig
    }

    /// (Re)create the chain in its rest layout, discarding any previous state.
    pub fn build(&mut self) {
        let anchor = self.params.anchor;
        let mut physics = Physics::new();
        let segment = |offset: f32| {
            RigidBodyBuilder::dynamic()
                .translation(to_vector(anchor - Vec3::Y * offset))
                .linear_damping(BODY_LINEAR_DAMPING)
                .angular_damping(BODY_ANGULAR_DAMPING)
                .can_sleep(true)
        };

        let fixed = physics.add_body(RigidBodyBuilder::fixed().translation(to_vector(anchor)), None);
        let ball = || Some(ColliderBuilder::ball(JOINT_RADIUS));
        let j1 = physics.add_body(segment(SEGMENT_SPACING), ball());
        let j2 = physics.add_body(segment(2.0 * SEGMENT_SPACING), ball());
        let j3 = physics.add_body(segment(3.0 * SEGMENT_SPACING), ball());
        let half = CARD_HALF_EXTENTS;
        let card = physics.add_body(
            segment(CARD_DROP),
            Some(ColliderBuilder::cuboid(half.x, half.y, half.z)),
        );

        for (a, b) in [(fixed, j1), (j1, j2), (j2, j3)] {
            physics
                .impulse_joints
                .insert(a, b, RopeJointBuilder::new(ROPE_LENGTH), true);
        }
        let pin = CARD_JOINT_ANCHOR;
        physics.impulse_joints.insert(
            j3,
            card,
            SphericalJointBuilder::new().local_anchor2(point![pin.x, pin.y, pin.z]),
            true,
        );

        self.physics = physics;
        self.chain = Some(ChainHandles {
            fixed,
            j1,
            j2,
            j3,
            card,
        });
        self.interaction = Interaction::Idle;
        self.smoothed = [None; 2];
        self.strap.clear();
        self.ribbon.clear();
        log::debug!("[lanyard] chain built at {:?}", anchor);
    }

    pub fn is_ready(&self) -> bool {
        self.chain.is_some()
    }

    pub fn handles(&self) -> Option<ChainHandles> {
        self.chain
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.physics.bodies.get(handle)
    }

    pub fn impulse_joints(&self) -> &ImpulseJointSet {
        &self.physics.impulse_joints
    }

    /// Fixed physics steps run since the chain was built.
    pub fn physics_steps(&self) -> u64 {
        self.physics.steps
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn cursor(&self) -> Cursor {
        match self.interaction {
            Interaction::Idle => Cursor::Auto,
            Interaction::Hovering => Cursor::Grab,
            Interaction::Dragging { .. } => Cursor::Grabbing,
        }
    }

    /// Advance one animation frame of `dt` seconds.
    pub fn frame(&mut self, dt: f32) {
        let Some(chain) = self.chain else {
            return;
        };
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        if let (Interaction::Dragging { offset }, Some(ndc)) = (self.interaction, self.pointer) {
            let target = self.drag_point(ndc) - offset;
            self.physics.wake(&chain.all());
            if let Some(card) = self.physics.bodies.get_mut(chain.card) {
                card.set_next_kinematic_translation(to_vector(target));
            }
        }

        self.physics.advance(dt);

        let (max_speed, min_speed) = (self.params.max_speed, self.params.min_speed);
        for (slot, handle) in self.smoothed.iter_mut().zip([chain.j1, chain.j2]) {
            let Some(truth) = self.physics.translation(handle) else {
                continue;
            };
            let lerped = slot.get_or_insert(truth);
            *lerped = smooth_toward(*lerped, truth, dt, min_speed, max_speed);
        }

        let translation = |h: RigidBodyHandle| self.physics.translation(h).unwrap_or_default();
        let j3 = translation(chain.j3);
        let fixed = translation(chain.fixed);
        let [l1, l2] = self.smoothed;
        let points = [
            j3,
            l2.unwrap_or_else(|| translation(chain.j2)),
            l1.unwrap_or_else(|| translation(chain.j1)),
            fixed,
        ];
        self.curve.set_points(&points);
        self.curve.sample_into(self.params.divisions, &mut self.strap);
        ribbon_strip(&self.strap, self.params.strap_half_width, &mut self.ribbon);

        // A sleeping card keeps its velocity untouched until something wakes it.
        let yaw = self.params.yaw_correction;
        if let Some(card) = self.physics.bodies.get_mut(chain.card) {
            if !card.is_sleeping() {
                let rot_y = to_quat(card.rotation()).y;
                let ang = *card.angvel();
                card.set_angvel(vector![ang.x, ang.y - rot_y * yaw, ang.z], false);
            }
        }
    }

    /// Pointer moved to `ndc`. Updates hover state unless a drag is active.
    pub fn pointer_move(&mut self, ndc: Vec2) {
        self.pointer = Some(ndc);
        if matches!(self.interaction, Interaction::Dragging { .. }) {
            return;
        }
        self.interaction = if self.pick(ndc).is_some() {
            Interaction::Hovering
        } else {
            Interaction::Idle
        };
    }

    /// Pointer left the canvas. An active drag continues until release.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        if self.interaction == Interaction::Hovering {
            self.interaction = Interaction::Idle;
        }
    }

    /// Start a drag if the card is under `ndc`. Returns true when grabbed.
    pub fn pointer_down(&mut self, ndc: Vec2) -> bool {
        self.pointer = Some(ndc);
        let (Some(chain), Some(hit)) = (self.chain, self.pick(ndc)) else {
            return false;
        };
        let Some(card) = self.physics.bodies.get_mut(chain.card) else {
            return false;
        };
        let offset = hit - to_vec3(card.translation());
        card.set_body_type(RigidBodyType::KinematicPositionBased, true);
        self.interaction = Interaction::Dragging { offset };
        log::debug!("[lanyard] drag start, offset {:?}", offset);
        true
    }

    /// End a drag. Returns true when a drag was active.
    pub fn pointer_up(&mut self) -> bool {
        let Interaction::Dragging { .. } = self.interaction else {
            return false;
        };
        if let Some(chain) = self.chain {
            if let Some(card) = self.physics.bodies.get_mut(chain.card) {
                card.set_body_type(RigidBodyType::Dynamic, true);
            }
            self.physics.wake(&chain.all());
        }
        let over_card = self.pointer.and_then(|ndc| self.pick(ndc)).is_some();
        self.interaction = if over_card {
            Interaction::Hovering
        } else {
            Interaction::Idle
        };
        log::debug!("[lanyard] drag end");
        true
    }

    /// World point under the card for a pointer at `ndc`, if any.
    pub fn pick(&self, ndc: Vec2) -> Option<Vec3> {
        let (center, rotation) = self.card_transform()?;
        let (origin, dir) = self.camera.ray(ndc);
        let half = CARD_HALF_EXTENTS + Vec3::splat(CARD_PICK_PADDING);
        let t = ray_box(origin, dir, center, rotation, half)?;
        Some(origin + dir * t)
    }

    /// Drag plane point: unproject at mid depth, then push along the view ray
    /// by the eye's distance from the origin.
    fn drag_point(&self, ndc: Vec2) -> Vec3 {
        let eye = self.camera.eye;
        let near = self
            .camera
            .unproject(Vec3::new(ndc.x, ndc.y, UNPROJECT_DEPTH));
        let dir = (near - eye).normalize_or_zero();
        near + dir * eye.length()
    }

    /// Sampled strap centreline, anchor last.
    pub fn strap_points(&self) -> &[Vec3] {
        &self.strap
    }

    /// Strap as a triangle strip, two vertices per strap point.
    pub fn ribbon(&self) -> &[Vec3] {
        &self.ribbon
    }

    /// Smoothed positions of joints 1 and 2 (None before the first frame).
    pub fn smoothed(&self) -> [Option<Vec3>; 2] {
        self.smoothed
    }

    pub fn card_kind(&self) -> Option<RigidBodyType> {
        Some(self.body(self.chain?.card)?.body_type())
    }

    pub fn card_transform(&self) -> Option<(Vec3, Quat)> {
        let card = self.body(self.chain?.card)?;
        Some((to_vec3(card.translation()), to_quat(card.rotation())))
    }
}
