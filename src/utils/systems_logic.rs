//! Systems logic: read input, advance the cube model, then mirror it into the ECS.

use bevy::prelude::*;

use crate::cube::cubie::Highlight;
use crate::cube::puzzle::Cube;
use crate::utils::inputs::{handle_keyboard_rotations, handle_pointer_clicks, track_pointer};
use crate::utils::objects::{CubeEntities, CubeRoot, CubieEntity, FrameEntity, PointerState};

/// Per-frame phases, run in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeSet {
    Input,
    Advance,
    Sync,
}

// Plugin scheduling all the cube systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (CubeSet::Input, CubeSet::Advance, CubeSet::Sync).chain())
            .add_systems(
                Update,
                (
                    (track_pointer, (handle_keyboard_rotations, handle_pointer_clicks))
                        .chain()
                        .in_set(CubeSet::Input),
                    (advance_cube, update_hover).chain().in_set(CubeSet::Advance),
                    (sync_cube_transforms, sync_highlights).in_set(CubeSet::Sync),
                ),
            );
    }
}

/// Drifts the whole cube and ticks the running turn.
pub fn advance_cube(time: Res<Time>, mut cube: ResMut<Cube>) {
    cube.spin(time.delta_secs());
    cube.update();
}

/// Highlights the face under the pointer.
pub fn update_hover(pointer: Res<PointerState>, mut cube: ResMut<Cube>) {
    let face = pointer.ray.and_then(|ray| cube.pick(ray));
    cube.hover(face);
}

/// Writes the rig and every cubie back onto their entities, reparenting the
/// cubies whose frame changed.
pub fn sync_cube_transforms(
    mut commands: Commands,
    cube: Res<Cube>,
    entities: Option<Res<CubeEntities>>,
    mut roots: Query<&mut Transform, (With<CubeRoot>, Without<FrameEntity>, Without<CubieEntity>)>,
    mut frames: Query<(&FrameEntity, &mut Transform), (Without<CubeRoot>, Without<CubieEntity>)>,
    mut cubies: Query<
        (Entity, &CubieEntity, &mut Transform, &ChildOf),
        (Without<CubeRoot>, Without<FrameEntity>),
    >,
) {
    let Some(entities) = entities else {
        return;
    };
    let rig = cube.rig();

    if let Ok(mut transform) = roots.single_mut() {
        transform.set_if_neq(rig.root_transform());
    }

    for (frame, mut transform) in &mut frames {
        transform.set_if_neq(rig.frame_transform(frame.0));
    }

    for (entity, cubie_entity, mut transform, child_of) in &mut cubies {
        let Some(cubie) = cube.cubies().get(cubie_entity.id) else {
            continue;
        };
        transform.set_if_neq(cubie.local_transform());

        let parent = entities.frame(cubie.frame);
        if child_of.parent() != parent {
            commands.entity(entity).insert(ChildOf(parent));
        }
    }
}

/// Applies the emissive highlight to the materials of highlighted cubies.
pub fn sync_highlights(
    cube: Res<Cube>,
    cubies: Query<(&CubieEntity, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let strength = cube.config().highlight_strength;
    let lit = Color::srgb(strength, strength, strength).to_linear();

    for (cubie_entity, material) in &cubies {
        let Some(cubie) = cube.cubies().get(cubie_entity.id) else {
            continue;
        };
        let emissive = match cubie.highlight {
            Highlight::Highlighted => lit,
            Highlight::None => LinearRgba::BLACK,
        };

        // get_mut marks the asset modified, so check first
        if materials.get(&material.0).is_some_and(|m| m.emissive != emissive)
            && let Some(m) = materials.get_mut(&material.0)
        {
            m.emissive = emissive;
        }
    }
}
