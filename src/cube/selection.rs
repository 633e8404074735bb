//! Pointer picking and click/drag discrimination.

use bevy::math::Affine3A;
use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::cube::lattice::Face;
use crate::utils::constants::cube_constants::HITBOX_HALF_SIZE;

/// Converts a window cursor position (pixels, origin top-left) to normalized
/// device coordinates (origin centre, Y up).
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    )
}

/// Tells a click/tap apart from a drag used to orbit the camera.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickTracker {
    pressed_at: Option<Vec2>,
}

impl ClickTracker {
    pub fn press(&mut self, ndc: Vec2) {
        self.pressed_at = Some(ndc);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Ends the press. `true` when the pointer stayed within `threshold` on
    /// both axes since [`ClickTracker::press`].
    pub fn release(&mut self, ndc: Vec2, threshold: f32) -> bool {
        let Some(start) = self.pressed_at.take() else {
            return false;
        };
        let moved = (ndc - start).abs();
        moved.x < threshold && moved.y < threshold
    }

    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}

/// Face of the cube hit by `ray`, if any.
///
/// `root` is the world transform of the cube; the ray is brought into cube
/// space and tested against the 3x3x3 hitbox there, so the hit normal is
/// already a cube-local face direction.
pub fn pick_face(ray: Ray3d, root: Affine3A) -> Option<Face> {
    let to_local = root.inverse();
    let direction = Dir3::new(to_local.transform_vector3(*ray.direction)).ok()?;
    let local_ray = Ray3d::new(to_local.transform_point3(ray.origin), direction);

    let hitbox = Aabb3d::new(Vec3::ZERO, Vec3::splat(HITBOX_HALF_SIZE));
    let distance = RayCast3d::from_ray(local_ray, f32::MAX).aabb_intersection_at(&hitbox)?;
    hit_face(local_ray.get_point(distance))
}

/// Face whose plane contains a point on the hitbox surface.
fn hit_face(point: Vec3) -> Option<Face> {
    let scaled = point / HITBOX_HALF_SIZE;
    let abs = scaled.abs();
    let normal = if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::X * scaled.x.signum()
    } else if abs.y >= abs.z {
        Vec3::Y * scaled.y.signum()
    } else {
        Vec3::Z * scaled.z.signum()
    };
    Face::from_normal(normal, 1e-3)
}
