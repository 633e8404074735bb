use bevy::{prelude::*, window::PresentMode};

use cubie_toy::plugins::cube_plugin::CubePlugin;
use cubie_toy::utils::debug_functions::DebugFunctionsPlugin;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cubie Toy".into(),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: true,
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((CubePlugin, DebugFunctionsPlugin))
        .run();
}
