// This file defines the components and resources mirroring the cube model into the ECS.
use bevy::prelude::*;

use crate::cube::rig::Frame;
use crate::cube::selection::ClickTracker;

/// A component that marks the root entity carrying the whole-cube orientation.
#[derive(Component)]
pub struct CubeRoot;

/// A component that marks one of the seven frame entities under the root.
#[derive(Component)]
pub struct FrameEntity(pub Frame);

/// A component linking a rendered cubie to its model counterpart.
#[derive(Component)]
pub struct CubieEntity {
    pub id: usize,
}

/// A component that marks the camera orbiting the cube.
#[derive(Component)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
        }
    }

    /// Camera placement for the current yaw/pitch, looking at the origin.
    pub fn transform(&self) -> Transform {
        let position = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Entities spawned for the cube, resolved once at setup.
#[derive(Resource)]
pub struct CubeEntities {
    pub root: Entity,
    pub neutral: Entity,
    pub faces: [Entity; 6],
}

impl CubeEntities {
    pub fn frame(&self, frame: Frame) -> Entity {
        match frame {
            Frame::Neutral => self.neutral,
            Frame::Face(face) => self.faces[face.index()],
        }
    }
}

/// Where the pointer (mouse cursor or the tracked finger) is this frame.
#[derive(Resource, Default)]
pub struct PointerState {
    /// Normalized device coordinates.
    pub ndc: Option<Vec2>,
    /// World-space ray through the pointer.
    pub ray: Option<Ray3d>,
    pub click: ClickTracker,
    /// Finger currently driving the pointer, if the pointer is a touch.
    pub touch_id: Option<u64>,
}
