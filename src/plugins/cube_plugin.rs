use bevy::prelude::*;

use crate::cube::config::CubeConfig;
use crate::cube::puzzle::Cube;
use crate::utils::camera::Camera3dOrbitPlugin;
use crate::utils::inputs::InputsPlugin;
use crate::utils::setup::SetupPlugin;
use crate::utils::systems_logic::SystemsLogicPlugin;

/// Plugins
pub struct CubePlugin;

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Cube::new(CubeConfig::load_or_default()))
            .add_plugins((SetupPlugin, InputsPlugin, Camera3dOrbitPlugin, SystemsLogicPlugin));
    }
}
