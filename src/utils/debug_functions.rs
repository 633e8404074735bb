//! Debug functions for the toy.
use bevy::{prelude::*, window::*};

use crate::cube::puzzle::Cube;
use crate::utils::constants::cube_constants::HITBOX_HALF_SIZE;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_gizmos));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(
    input: Res<ButtonInput<KeyCode>>,
    mut window: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !input.just_pressed(KeyCode::KeyV) {
        return;
    }
    let Ok(mut window) = window.single_mut() else {
        return;
    };

    window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
        PresentMode::AutoNoVsync
    } else {
        PresentMode::AutoVsync
    };

    info!("PRESENT_MODE: {:?}", window.present_mode);
}

/// Visualizes the lights and the picking hitbox when the 'L' key is pressed.
fn visualize_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&GlobalTransform, &PointLight)>,
    cube: Res<Cube>,
    input: Res<ButtonInput<KeyCode>>,
    mut show_gizmos: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyL) {
        *show_gizmos = !*show_gizmos;
        info!("Gizmo visualization: {}", *show_gizmos);
    }

    if !*show_gizmos {
        return;
    }

    for (transform, light) in &query {
        // Draw a sphere representing the light's range
        gizmos.sphere(transform.translation(), light.range, light.color);
        // Draw a smaller sphere representing the light source itself
        gizmos.sphere(transform.translation(), 0.2, Color::WHITE);
    }

    // The hitbox follows the whole-cube drift but not the face turns
    let hitbox = cube
        .rig()
        .root_transform()
        .with_scale(Vec3::splat(HITBOX_HALF_SIZE * 2.0));
    gizmos.cuboid(hitbox, Color::srgb(1.0, 1.0, 0.0));
}
