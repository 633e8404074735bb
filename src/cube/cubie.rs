//! A single unit sub-cube and its frozen sticker assignment.

use bevy::prelude::*;

use crate::cube::lattice::{Face, StickerColor, is_quarter_multiple, snap_rotation, snap_to_quarter};
use crate::cube::rig::Frame;

/// Visual highlight state read by the rendering side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Highlighted,
}

/// One of the 27 cubies.
///
/// `translation` and `rotation` are relative to `frame`. `angles` are the
/// Euler XYZ angles of `rotation`, refreshed whenever the cubie is reparented
/// or snapped.
#[derive(Clone, Debug)]
pub struct Cubie {
    pub id: usize,
    pub home: IVec3,
    stickers: [Option<StickerColor>; 6],
    pub frame: Frame,
    pub translation: Vec3,
    pub rotation: Quat,
    pub angles: Vec3,
    pub highlight: Highlight,
}

impl Cubie {
    /// Creates a cubie resting in its home cell under the neutral frame.
    pub fn new(id: usize, home: IVec3) -> Self {
        let mut stickers = [None; 6];
        for face in Face::ALL {
            if face.contains(home.as_vec3(), 0.5) {
                stickers[face.index()] = Some(face.sticker());
            }
        }

        Self {
            id,
            home,
            stickers,
            frame: Frame::Neutral,
            translation: home.as_vec3(),
            rotation: Quat::IDENTITY,
            angles: Vec3::ZERO,
            highlight: Highlight::None,
        }
    }

    /// Sticker painted on the cubie's own `side`, `None` for interior sides.
    pub fn sticker(&self, side: Face) -> Option<StickerColor> {
        self.stickers[side.index()]
    }

    pub fn local_transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation)
    }

    /// Replaces the local placement, keeping `angles` in sync.
    pub fn set_local(&mut self, translation: Vec3, rotation: Quat) {
        self.translation = translation;
        self.rotation = rotation.normalize();
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        self.angles = Vec3::new(x, y, z);
    }

    /// Snaps the local placement onto the lattice.
    ///
    /// Only valid while the parent frame itself sits at a quarter-turn angle.
    pub fn snap_to_lattice(&mut self) {
        self.set_local(self.translation.round(), snap_rotation(self.rotation));
        self.angles = Vec3::new(
            snap_to_quarter(self.angles.x),
            snap_to_quarter(self.angles.y),
            snap_to_quarter(self.angles.z),
        );
    }

    /// Whether all three angle accumulators sit exactly on a quarter turn.
    pub fn is_axis_aligned(&self) -> bool {
        is_quarter_multiple(self.angles.x)
            && is_quarter_multiple(self.angles.y)
            && is_quarter_multiple(self.angles.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::lattice::lattice_cells;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn corner_has_three_stickers() {
        let cubie = Cubie::new(0, IVec3::new(1, 1, -1));
        assert_eq!(cubie.sticker(Face::Top), Some(StickerColor::White));
        assert_eq!(cubie.sticker(Face::Right), Some(StickerColor::Red));
        assert_eq!(cubie.sticker(Face::Back), Some(StickerColor::Blue));
        assert_eq!(cubie.sticker(Face::Bottom), None);
        assert_eq!(cubie.sticker(Face::Left), None);
        assert_eq!(cubie.sticker(Face::Front), None);
    }

    #[test]
    fn sticker_count_matches_cell_kind() {
        let mut counts = [0; 4];
        for (id, cell) in lattice_cells().enumerate() {
            let cubie = Cubie::new(id, cell);
            let stickers = Face::ALL.into_iter().filter(|f| cubie.sticker(*f).is_some()).count();
            counts[stickers] += 1;
        }
        // core, centers, edges, corners
        assert_eq!(counts, [1, 6, 12, 8]);
    }

    #[test]
    fn snapping_clears_drift() {
        let mut cubie = Cubie::new(3, IVec3::new(1, 0, 0));
        cubie.set_local(
            Vec3::new(0.99998, 0.00003, -1.00001),
            Quat::from_rotation_z(FRAC_PI_2 + 2e-4),
        );
        assert!(!cubie.is_axis_aligned());

        cubie.snap_to_lattice();
        assert_eq!(cubie.translation, Vec3::new(1.0, 0.0, -1.0));
        assert!(cubie.is_axis_aligned());
        assert_eq!(cubie.angles.z, FRAC_PI_2);
    }
}
