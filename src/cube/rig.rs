//! Explicit transform hierarchy of the cube.
//!
//! ```text
//! root (whole-cube orientation)
//! ├── neutral frame (identity)
//! └── face frame × 6 (rotation about the face axis)
//!     └── cubies
//! ```
//!
//! Every cubie hangs under exactly one frame. Reparenting recomputes the
//! local transform from the world transform instead of relying on the scene
//! graph, so the ECS only mirrors what is computed here.

use bevy::math::Affine3A;
use bevy::prelude::*;

use crate::cube::cubie::Cubie;
use crate::cube::lattice::{Face, wrap_angle};

/// Parent frame of a cubie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Frame {
    #[default]
    Neutral,
    Face(Face),
}

/// Whole-cube orientation plus the angle of each face frame.
#[derive(Clone, Debug, Default)]
pub struct Rig {
    /// Euler XYZ angles of the root; only X and Y drift.
    root_angles: Vec2,
    face_angles: [f32; 6],
}

impl Rig {
    pub fn root_transform(&self) -> Transform {
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.root_angles.x,
            self.root_angles.y,
            0.0,
        ))
    }

    /// Advances the whole-cube drift by `delta` radians on X and Y.
    pub fn spin(&mut self, delta: f32) {
        self.root_angles = Vec2::new(
            wrap_angle(self.root_angles.x + delta),
            wrap_angle(self.root_angles.y + delta),
        );
    }

    pub fn set_root_angles(&mut self, x: f32, y: f32) {
        self.root_angles = Vec2::new(wrap_angle(x), wrap_angle(y));
    }

    pub fn face_angle(&self, face: Face) -> f32 {
        self.face_angles[face.index()]
    }

    /// Sets a face frame angle, wrapped into one turn.
    pub fn set_face_angle(&mut self, face: Face, angle: f32) {
        self.face_angles[face.index()] = wrap_angle(angle);
    }

    pub fn frame_transform(&self, frame: Frame) -> Transform {
        match frame {
            Frame::Neutral => Transform::IDENTITY,
            Frame::Face(face) => {
                Transform::from_rotation(face.axis().rotation(self.face_angle(face)))
            }
        }
    }

    fn frame_world(&self, frame: Frame) -> Affine3A {
        self.root_transform().compute_affine() * self.frame_transform(frame).compute_affine()
    }

    /// World transform of a cubie.
    pub fn world_affine(&self, cubie: &Cubie) -> Affine3A {
        self.frame_world(cubie.frame) * cubie.local_transform().compute_affine()
    }

    /// Position of a cubie in the cube-local frame, i.e. with the whole-cube
    /// orientation divided out.
    pub fn relative_position(&self, cubie: &Cubie) -> Vec3 {
        let world = self.world_affine(cubie).translation;
        self.root_transform()
            .compute_affine()
            .inverse()
            .transform_point3(world.into())
    }

    /// Moves `cubie` under `frame` without changing its world placement.
    pub fn reparent(&self, cubie: &mut Cubie, frame: Frame) {
        if cubie.frame == frame {
            return;
        }
        let world = self.world_affine(cubie);
        let local = self.frame_world(frame).inverse() * world;
        let (_, rotation, translation) = local.to_scale_rotation_translation();
        cubie.frame = frame;
        cubie.set_local(translation, rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_same_world(a: Affine3A, b: Affine3A) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a:?} != {b:?}");
    }

    #[test]
    fn reparent_preserves_world_transform() {
        let mut rig = Rig::default();
        rig.set_root_angles(0.3, 1.1);
        rig.set_face_angle(Face::Top, FRAC_PI_2);
        rig.set_face_angle(Face::Right, 0.4);

        let mut cubie = Cubie::new(0, IVec3::new(1, 1, 1));
        let before = rig.world_affine(&cubie);

        rig.reparent(&mut cubie, Frame::Face(Face::Top));
        assert_eq!(cubie.frame, Frame::Face(Face::Top));
        assert_same_world(before, rig.world_affine(&cubie));

        rig.reparent(&mut cubie, Frame::Face(Face::Right));
        assert_same_world(before, rig.world_affine(&cubie));

        rig.reparent(&mut cubie, Frame::Neutral);
        assert_same_world(before, rig.world_affine(&cubie));
        assert!(cubie.translation.abs_diff_eq(Vec3::ONE, 1e-5));
    }

    #[test]
    fn relative_position_divides_out_root() {
        let mut rig = Rig::default();
        let cubie = Cubie::new(0, IVec3::new(-1, 0, 1));
        for step in 0..50 {
            rig.spin(0.37 * step as f32);
            let rel = rig.relative_position(&cubie);
            assert!(rel.abs_diff_eq(Vec3::new(-1.0, 0.0, 1.0), 1e-4), "{rel}");
        }
    }

    #[test]
    fn turning_a_frame_moves_its_children() {
        let mut rig = Rig::default();
        let mut cubie = Cubie::new(0, IVec3::new(1, 1, 0));
        rig.reparent(&mut cubie, Frame::Face(Face::Top));

        rig.set_face_angle(Face::Top, -FRAC_PI_2);
        let rel = rig.relative_position(&cubie);
        assert!(rel.abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), 1e-5), "{rel}");
    }

    #[test]
    fn face_angles_wrap() {
        let mut rig = Rig::default();
        rig.set_face_angle(Face::Front, -FRAC_PI_2);
        assert!((rig.face_angle(Face::Front) - 3.0 * FRAC_PI_2).abs() < 1e-5);
    }
}
