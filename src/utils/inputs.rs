use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::cube::lattice::Face;
use crate::cube::puzzle::Cube;
use crate::cube::selection::cursor_to_ndc;
use crate::utils::objects::{OrbitCamera, PointerState};

/// Plugin for handling inputs
pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>();
    }
}

/// Keys that request a quarter turn of a face.
pub const KEY_BINDINGS: [(KeyCode, Face); 6] = [
    (KeyCode::KeyW, Face::Top),
    (KeyCode::KeyS, Face::Bottom),
    (KeyCode::KeyA, Face::Left),
    (KeyCode::KeyD, Face::Right),
    (KeyCode::KeyQ, Face::Front),
    (KeyCode::KeyE, Face::Back),
];

pub fn face_for_key(key: KeyCode) -> Option<Face> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, face)| *face)
}

/// Resolves the pointer for this frame: the tracked finger when there is one,
/// the mouse cursor otherwise.
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    touches: Res<Touches>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    if pointer.touch_id.is_none() {
        pointer.touch_id = touches.iter_just_pressed().next().map(|touch| touch.id());
    }

    // A finger released this frame still reports where it lifted
    let touch_position = pointer.touch_id.and_then(|id| {
        touches
            .get_pressed(id)
            .or_else(|| touches.get_released(id))
            .map(|touch| touch.position())
    });

    let Some(position) = touch_position.or_else(|| window.cursor_position()) else {
        pointer.ndc = None;
        pointer.ray = None;
        return;
    };

    pointer.ndc = Some(cursor_to_ndc(position, window.size()));
    pointer.ray = camera.viewport_to_world(camera_transform, position).ok();
}

/// Handle keyboard inputs
pub fn handle_keyboard_rotations(keyboard: Res<ButtonInput<KeyCode>>, mut cube: ResMut<Cube>) {
    for key in keyboard.get_just_pressed() {
        let Some(face) = face_for_key(*key) else {
            continue;
        };
        if cube.start_rotation(face) {
            info!("Turning {face:?} from keyboard");
        }
    }
}

/// Mouse clicks and touch taps. A press followed by a release close to it
/// turns the face under the pointer; anything longer is an orbit drag.
pub fn handle_pointer_clicks(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut pointer: ResMut<PointerState>,
    mut cube: ResMut<Cube>,
) {
    let pointer = &mut *pointer;
    let Some(ndc) = pointer.ndc else {
        return;
    };

    let released = match pointer.touch_id {
        Some(id) => {
            // A second finger turns the gesture into something other than a tap
            if touches.iter().count() > 1 {
                pointer.click.cancel();
            }
            if touches.just_pressed(id) {
                pointer.click.press(ndc);
            }

            if touches.just_canceled(id) {
                pointer.click.cancel();
                pointer.touch_id = None;
                false
            } else if touches.just_released(id) {
                pointer.touch_id = None;
                true
            } else {
                false
            }
        }
        None => {
            if mouse_buttons.just_pressed(MouseButton::Left) {
                pointer.click.press(ndc);
            }
            mouse_buttons.just_released(MouseButton::Left)
        }
    };

    if released && let Some(face) = release_pointer(pointer, ndc, &mut cube) {
        info!("Turning {face:?} from pointer");
    }
}

/// Ends a press at `ndc`. Turns the face under the pointer when the press was
/// a click and returns it; drags and misses leave the cube untouched.
pub fn release_pointer(pointer: &mut PointerState, ndc: Vec2, cube: &mut Cube) -> Option<Face> {
    if !pointer.click.release(ndc, cube.config().click_threshold) {
        return None;
    }

    let Some(face) = pointer.ray.and_then(|ray| cube.pick(ray)) else {
        debug!("Click missed the cube");
        return None;
    };
    cube.start_rotation(face).then_some(face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::config::CubeConfig;

    fn pointer_over_front(pressed_at: Vec2) -> PointerState {
        let mut pointer = PointerState {
            ndc: Some(pressed_at),
            ray: Some(Ray3d::new(Vec3::new(0.0, 0.0, 6.0), Dir3::NEG_Z)),
            ..default()
        };
        pointer.click.press(pressed_at);
        pointer
    }

    #[test]
    fn click_on_a_face_turns_it() {
        let mut cube = Cube::new(CubeConfig::default());
        let mut pointer = pointer_over_front(Vec2::ZERO);

        let turned = release_pointer(&mut pointer, Vec2::new(0.004, -0.004), &mut cube);
        assert_eq!(turned, Some(Face::Front));
        assert_eq!(cube.session().map(|s| s.face), Some(Face::Front));
    }

    #[test]
    fn drag_released_over_a_face_does_not_turn() {
        let mut cube = Cube::new(CubeConfig::default());
        let mut pointer = pointer_over_front(Vec2::ZERO);

        // The release ray still hits the front face
        assert_eq!(release_pointer(&mut pointer, Vec2::new(0.05, 0.0), &mut cube), None);
        assert!(!cube.is_animating());

        let mut pointer = pointer_over_front(Vec2::ZERO);
        assert_eq!(release_pointer(&mut pointer, Vec2::new(0.0, -0.01), &mut cube), None);
        assert!(!cube.is_animating());
    }

    #[test]
    fn click_beside_the_cube_does_nothing() {
        let mut cube = Cube::new(CubeConfig::default());
        let mut pointer = pointer_over_front(Vec2::ZERO);
        pointer.ray = Some(Ray3d::new(Vec3::new(5.0, 0.0, 6.0), Dir3::NEG_Z));

        assert_eq!(release_pointer(&mut pointer, Vec2::ZERO, &mut cube), None);
        assert!(!cube.is_animating());
    }

    #[test]
    fn every_face_has_one_key() {
        for face in Face::ALL {
            let bound = KEY_BINDINGS.iter().filter(|(_, f)| *f == face).count();
            assert_eq!(bound, 1, "{face:?}");
        }
    }

    #[test]
    fn keys_map_to_faces() {
        assert_eq!(face_for_key(KeyCode::KeyW), Some(Face::Top));
        assert_eq!(face_for_key(KeyCode::KeyS), Some(Face::Bottom));
        assert_eq!(face_for_key(KeyCode::KeyA), Some(Face::Left));
        assert_eq!(face_for_key(KeyCode::KeyD), Some(Face::Right));
        assert_eq!(face_for_key(KeyCode::KeyQ), Some(Face::Front));
        assert_eq!(face_for_key(KeyCode::KeyE), Some(Face::Back));
        assert_eq!(face_for_key(KeyCode::KeyX), None);
    }
}
