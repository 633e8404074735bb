use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::cube::puzzle::Cube;
use crate::utils::constants::camera_3d_constants::CAMERA_3D_MAX_PITCH;
use crate::utils::objects::OrbitCamera;

pub struct Camera3dOrbitPlugin;

impl Plugin for Camera3dOrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orbit_camera);
    }
}

/// Orbiting 3D Camera System
/// Rotates around the origin while the left button is dragged or a single finger swipes.
/// Zoom is fixed.
pub fn orbit_camera(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut mouse_motion: MessageReader<MouseMotion>,
    cube: Res<Cube>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = camera_query.single_mut() else {
        return;
    };

    // Drain motion every frame so a later press does not replay stale deltas
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    let mut fingers = touches.iter();
    let delta = match (fingers.next(), fingers.next()) {
        (Some(touch), None) => touch.delta(),
        (Some(_), Some(_)) => return,
        (None, _) if mouse_buttons.pressed(MouseButton::Left) => mouse_delta,
        (None, _) => return,
    };

    if delta == Vec2::ZERO {
        return;
    }

    let sensitivity = cube.config().orbit_sensitivity;
    apply_drag(&mut orbit, delta, sensitivity);
    *transform = orbit.transform();
}

/// Turns a pointer drag (pixels) into yaw/pitch, keeping the camera off the poles.
pub fn apply_drag(orbit: &mut OrbitCamera, delta: Vec2, sensitivity: f32) {
    orbit.yaw -= delta.x * sensitivity;
    orbit.pitch = (orbit.pitch + delta.y * sensitivity)
        .clamp(-CAMERA_3D_MAX_PITCH, CAMERA_3D_MAX_PITCH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_right_orbits_left() {
        let mut orbit = OrbitCamera::new(6.0);
        apply_drag(&mut orbit, Vec2::new(100.0, 0.0), 0.005);
        assert!((orbit.yaw + 0.5).abs() < 1e-6);
        assert_eq!(orbit.pitch, 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut orbit = OrbitCamera::new(6.0);
        apply_drag(&mut orbit, Vec2::new(0.0, 10_000.0), 0.005);
        assert_eq!(orbit.pitch, CAMERA_3D_MAX_PITCH);
        apply_drag(&mut orbit, Vec2::new(0.0, -100_000.0), 0.005);
        assert_eq!(orbit.pitch, -CAMERA_3D_MAX_PITCH);
    }

    #[test]
    fn orbit_keeps_distance_and_faces_origin() {
        let mut orbit = OrbitCamera::new(6.0);
        apply_drag(&mut orbit, Vec2::new(137.0, -64.0), 0.005);
        let transform = orbit.transform();
        assert!((transform.translation.length() - 6.0).abs() < 1e-4);
        let toward_origin = -transform.translation.normalize();
        assert!(transform.forward().dot(toward_origin) > 0.9999);
    }
}
