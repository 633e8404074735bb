//! Setup of the scene: camera, lights and the 27 cubie meshes under their frame hierarchy.
use bevy::color::ColorToComponents;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::cube::cubie::Cubie;
use crate::cube::lattice::Face;
use crate::cube::puzzle::Cube;
use crate::cube::rig::Frame;
use crate::log;
use crate::utils::constants::color_constants::BACKGROUND_RGB;
use crate::utils::constants::cube_constants::CUBIE_SIZE;
use crate::utils::constants::lighting_constants::{
    AMBIENT_LIGHT_BRIGHTNESS, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITIONS,
};
use crate::utils::objects::{CubeEntities, CubeRoot, CubieEntity, FrameEntity, OrbitCamera};

/// Plugin for handling setup
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(
            BACKGROUND_RGB[0],
            BACKGROUND_RGB[1],
            BACKGROUND_RGB[2],
        )))
        .add_systems(Startup, (setup_environment, setup_cube));
    }
}

/// Camera and lights.
pub fn setup_environment(mut commands: Commands, cube: Res<Cube>) {
    // Start on the +Z axis looking at the origin
    let orbit = OrbitCamera::new(cube.config().camera_distance);
    commands.spawn((Camera3d::default(), orbit.transform(), orbit));

    for position in POINT_LIGHT_POSITIONS {
        commands.spawn((
            PointLight {
                intensity: POINT_LIGHT_INTENSITY,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(position)),
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
}

/// Spawns the root, the six face frames, the neutral frame and every cubie.
pub fn setup_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cube: Res<Cube>,
) {
    let rig = cube.rig();
    let root = commands
        .spawn((CubeRoot, rig.root_transform(), Visibility::default()))
        .id();

    let mut spawn_frame = |frame: Frame| {
        commands
            .spawn((
                FrameEntity(frame),
                rig.frame_transform(frame),
                Visibility::default(),
                ChildOf(root),
            ))
            .id()
    };
    let faces = Face::ALL.map(|face| spawn_frame(Frame::Face(face)));
    let neutral = spawn_frame(Frame::Neutral);

    let entities = CubeEntities {
        root,
        neutral,
        faces,
    };

    for cubie in cube.cubies() {
        commands.spawn((
            CubieEntity { id: cubie.id },
            Mesh3d(meshes.add(cubie_mesh(cubie))),
            // One material per cubie so highlights stay independent
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                perceptual_roughness: 1.0,
                metallic: 0.1,
                ..default()
            })),
            cubie.local_transform(),
            ChildOf(entities.frame(cubie.frame)),
        ));
    }

    commands.insert_resource(entities);

    log!("🧊 Cube ready: {} cubies", cube.cubies().len());
    log!("🖱️  Hover a face to highlight it, click to turn it, drag to orbit");
    log!("⌨️  W/S top/bottom, A/D left/right, Q/E front/back");
}

/// Box mesh of a single cubie with its stickers baked in as vertex colors.
///
/// Each side gets its own four vertices so colors do not bleed across edges.
pub fn cubie_mesh(cubie: &Cubie) -> Mesh {
    let half = CUBIE_SIZE / 2.0;
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(24);
    let mut colors = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for side in Face::ALL {
        let normal = side.direction().as_vec3();
        // u x v == normal keeps the winding counter-clockwise from outside
        let u = if normal.x.abs() > 0.5 { Vec3::Z } else { Vec3::X };
        let v = normal.cross(u);
        let center = normal * half;

        let color = cubie
            .sticker(side)
            .map_or(Color::BLACK, |sticker| sticker.color())
            .to_linear()
            .to_f32_array();

        let base = positions.len() as u32;
        for (du, dv, uv) in [
            (-1.0, -1.0, [0.0, 1.0]),
            (1.0, -1.0, [1.0, 1.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (-1.0, 1.0, [0.0, 0.0]),
        ] {
            positions.push((center + (u * du + v * dv) * half).to_array());
            normals.push(normal.to_array());
            uvs.push(uv);
            colors.push(color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, Default::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}
