//! The cube aggregate: cubies, transform rig, face groups and the rotation
//! state machine behind one resource.

use bevy::prelude::*;

use crate::cube::clock::{MonotonicClock, TimeSource};
use crate::cube::config::CubeConfig;
use crate::cube::cubie::{Cubie, Highlight};
use crate::cube::grouping::FaceGroups;
use crate::cube::lattice::{Face, lattice_cells};
use crate::cube::rig::Rig;
use crate::cube::rotation::{RotationMachine, RotationSession, Tick};
use crate::cube::selection::pick_face;

#[derive(Resource)]
pub struct Cube {
    config: CubeConfig,
    cubies: Vec<Cubie>,
    rig: Rig,
    groups: FaceGroups,
    rotation: RotationMachine,
    clock: Box<dyn TimeSource>,
    highlighted: Option<Face>,
}

impl Cube {
    pub fn new(config: CubeConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }

    pub fn with_clock(config: CubeConfig, clock: impl TimeSource + 'static) -> Self {
        let cubies = lattice_cells()
            .enumerate()
            .map(|(id, cell)| Cubie::new(id, cell))
            .collect();

        Self {
            rotation: RotationMachine::new(config.rotation_duration()),
            config,
            cubies,
            rig: Rig::default(),
            groups: FaceGroups::default(),
            clock: Box::new(clock),
            highlighted: None,
        }
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn is_animating(&self) -> bool {
        self.rotation.is_animating()
    }

    pub fn session(&self) -> Option<&RotationSession> {
        self.rotation.session()
    }

    pub fn highlighted_face(&self) -> Option<Face> {
        self.highlighted
    }

    /// Members last recorded for `face`, possibly stale.
    pub fn members(&self, face: Face) -> &[usize] {
        self.groups.members(face)
    }

    /// Current cube-local lattice cell of a cubie.
    pub fn lattice_position(&self, id: usize) -> Option<IVec3> {
        let cubie = self.cubies.get(id)?;
        Some(self.rig.relative_position(cubie).round().as_ivec3())
    }

    /// Regroups the cubies of `face` under its frame. Does nothing while a
    /// turn is in flight, since the grouping must not change mid-turn.
    pub fn compute_membership(&mut self, face: Face) -> &[usize] {
        if self.rotation.is_animating() {
            return self.groups.members(face);
        }
        self.groups
            .reconcile(face, &mut self.cubies, &self.rig, self.config.face_tolerance)
    }

    /// Requests a quarter turn of `face`. Returns `false` if a turn is
    /// already running.
    pub fn start_rotation(&mut self, face: Face) -> bool {
        if self.rotation.is_animating() {
            log::debug!("ignoring {face:?} turn, another turn is in flight");
            return false;
        }
        self.compute_membership(face);

        let now = self.clock.now();
        let started = self.rotation.begin(face, self.rig.face_angle(face), now).is_some();
        if started {
            log::debug!("turning {face:?}");
        }
        started
    }

    /// Same as [`Cube::start_rotation`] for a raw face index; out-of-range
    /// indices are ignored.
    pub fn start_rotation_index(&mut self, index: usize) -> bool {
        match Face::from_index(index) {
            Some(face) => self.start_rotation(face),
            None => {
                log::debug!("ignoring turn of unknown face {index}");
                false
            }
        }
    }

    /// Per-frame tick of the rotation state machine.
    pub fn update(&mut self) {
        match self.rotation.tick(self.clock.now()) {
            Tick::Idle => {}
            Tick::Turning { face, angle } => self.rig.set_face_angle(face, angle),
            Tick::Finished(session) => self.commit(session),
        }
    }

    fn commit(&mut self, session: RotationSession) {
        self.rig.set_face_angle(session.face, session.end_angle);
        for cubie in &mut self.cubies {
            cubie.snap_to_lattice();
        }
        self.highlighted = None;
        log::debug!("{:?} turn committed at {} rad", session.face, session.end_angle);
    }

    /// Advances the whole-cube drift by `delta_secs` of frame time.
    pub fn spin(&mut self, delta_secs: f32) {
        self.rig.spin(self.config.auto_rotation_speed * delta_secs);
    }

    /// Face under a world-space ray, tested against the cube's hitbox.
    pub fn pick(&self, ray: Ray3d) -> Option<Face> {
        pick_face(ray, self.rig.root_transform().compute_affine())
    }

    /// Highlights the cubies of the hovered face, or clears every highlight
    /// when nothing is hovered. Ignored while a turn is running.
    pub fn hover(&mut self, face: Option<Face>) {
        if self.rotation.is_animating() {
            return;
        }

        let Some(face) = face else {
            if self.highlighted.take().is_some() {
                self.clear_highlights();
            }
            return;
        };
        if self.highlighted == Some(face) {
            return;
        }

        self.compute_membership(face);
        self.clear_highlights();
        let members = self.groups.members(face);
        for cubie in &mut self.cubies {
            if members.contains(&cubie.id) {
                cubie.highlight = Highlight::Highlighted;
            }
        }
        self.highlighted = Some(face);
    }

    fn clear_highlights(&mut self) {
        for cubie in &mut self.cubies {
            cubie.highlight = Highlight::None;
        }
    }
}
