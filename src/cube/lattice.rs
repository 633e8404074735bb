//! Lattice geometry of the 3x3x3 cube: faces, rotation axes, sticker colors
//! and the quarter-turn arithmetic used to keep orientations exact.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::utils::constants::color_constants::{
    STICKER_BLUE, STICKER_GREEN, STICKER_ORANGE, STICKER_RED, STICKER_WHITE, STICKER_YELLOW,
};
use crate::utils::constants::cube_constants::QUARTER_TURN;

/// One of the six outer layers of the cube.
///
/// The discriminant is the face index used throughout the toy, in the fixed
/// order top, bottom, left, right, front, back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for a raw index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// Outward unit direction of the face in cube-local space.
    pub fn direction(self) -> IVec3 {
        match self {
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
            Face::Left => IVec3::NEG_X,
            Face::Right => IVec3::X,
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
        }
    }

    /// Axis the face turns around.
    pub fn axis(self) -> Axis {
        match self {
            Face::Top | Face::Bottom => Axis::Y,
            Face::Left | Face::Right => Axis::X,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Direction of a turn around [`Face::axis`], chosen so every face turns
    /// clockwise when looked at from outside the cube.
    pub fn turn_sign(self) -> f32 {
        match self {
            Face::Top | Face::Right | Face::Front => -1.0,
            Face::Bottom | Face::Left | Face::Back => 1.0,
        }
    }

    /// Sticker painted on this side of every cubie whose home cell lies on the face.
    pub fn sticker(self) -> StickerColor {
        match self {
            Face::Top => StickerColor::White,
            Face::Bottom => StickerColor::Yellow,
            Face::Left => StickerColor::Orange,
            Face::Right => StickerColor::Red,
            Face::Front => StickerColor::Green,
            Face::Back => StickerColor::Blue,
        }
    }

    /// Face whose direction matches `normal` within `tolerance`.
    pub fn from_normal(normal: Vec3, tolerance: f32) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| (normal - face.direction().as_vec3()).abs().max_element() < tolerance)
    }

    /// Whether a cube-local position lies on this face.
    ///
    /// The position is rounded to the lattice first, so float error from the
    /// animated transforms is absorbed as long as it stays under half a cell.
    pub fn contains(self, position: Vec3, tolerance: f32) -> bool {
        let rounded = position.round();
        let dir = self.direction();
        let (coord, target) = match self.axis() {
            Axis::X => (rounded.x, dir.x),
            Axis::Y => (rounded.y, dir.y),
            Axis::Z => (rounded.z, dir.z),
        };
        (coord - target as f32).abs() < tolerance
    }
}

/// Rotation axis of a face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn rotation(self, angle: f32) -> Quat {
        match self {
            Axis::X => Quat::from_rotation_x(angle),
            Axis::Y => Quat::from_rotation_y(angle),
            Axis::Z => Quat::from_rotation_z(angle),
        }
    }
}

/// Standard sticker palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickerColor {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl StickerColor {
    pub fn rgb(self) -> u32 {
        match self {
            StickerColor::White => STICKER_WHITE,
            StickerColor::Yellow => STICKER_YELLOW,
            StickerColor::Orange => STICKER_ORANGE,
            StickerColor::Red => STICKER_RED,
            StickerColor::Green => STICKER_GREEN,
            StickerColor::Blue => STICKER_BLUE,
        }
    }

    pub fn color(self) -> Color {
        let [_, r, g, b] = self.rgb().to_be_bytes();
        Color::srgb_u8(r, g, b)
    }
}

/// All 27 lattice cells, x outermost and z innermost.
pub fn lattice_cells() -> impl Iterator<Item = IVec3> {
    (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| IVec3::new(x, y, z))))
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Number of whole quarter turns nearest to `angle`.
pub fn quarter_turns(angle: f32) -> i32 {
    (angle / QUARTER_TURN).round() as i32
}

/// Nearest multiple of 90 degrees.
pub fn snap_to_quarter(angle: f32) -> f32 {
    quarter_turns(angle) as f32 * QUARTER_TURN
}

/// Whether `angle` is exactly (bit for bit) a multiple of 90 degrees.
pub fn is_quarter_multiple(angle: f32) -> bool {
    snap_to_quarter(angle) == angle
}

/// Rounds every entry of the rotation matrix to -1, 0 or 1.
///
/// Any orientation reachable by quarter turns is a signed permutation
/// matrix, so this removes the float drift that composing animated
/// rotations leaves behind.
pub fn snap_rotation(rotation: Quat) -> Quat {
    let m = Mat3::from_quat(rotation);
    let snapped = Mat3::from_cols(m.x_axis.round(), m.y_axis.round(), m.z_axis.round());
    Quat::from_mat3(&snapped).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn face_indices_follow_fixed_order() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn opposite_faces_share_axis_and_flip_sign() {
        for (a, b) in [
            (Face::Top, Face::Bottom),
            (Face::Left, Face::Right),
            (Face::Front, Face::Back),
        ] {
            assert_eq!(a.axis(), b.axis());
            assert_eq!(a.turn_sign(), -b.turn_sign());
            assert_eq!(a.direction(), -b.direction());
        }
    }

    #[test]
    fn normal_lookup_matches_directions() {
        for face in Face::ALL {
            assert_eq!(Face::from_normal(face.direction().as_vec3(), 1e-3), Some(face));
        }
        assert_eq!(Face::from_normal(Vec3::new(0.7, 0.7, 0.0), 1e-3), None);
    }

    #[test]
    fn contains_absorbs_float_error_but_not_a_cell() {
        assert!(Face::Top.contains(Vec3::new(0.0, 0.9999, 0.0), 0.01));
        assert!(Face::Top.contains(Vec3::new(1.0, 1.3, -1.0), 0.01));
        assert!(!Face::Top.contains(Vec3::new(0.0, 0.2, 0.0), 0.01));
        assert!(Face::Left.contains(Vec3::new(-1.0001, 0.0, 1.0), 0.01));
        assert!(!Face::Right.contains(Vec3::new(-1.0, 0.0, 0.0), 0.01));
    }

    #[test]
    fn lattice_has_27_distinct_cells() {
        let cells: Vec<IVec3> = lattice_cells().collect();
        assert_eq!(cells.len(), 27);
        assert_eq!(cells[0], IVec3::new(-1, -1, -1));
        assert_eq!(cells[26], IVec3::new(1, 1, 1));
    }

    #[test]
    fn quarter_snapping_is_exact() {
        let drifted = FRAC_PI_2 + 3e-5;
        let snapped = snap_to_quarter(drifted);
        assert_eq!(snapped, FRAC_PI_2);
        assert!(is_quarter_multiple(snapped));
        assert!(!is_quarter_multiple(drifted));
        assert_eq!(snap_to_quarter(-3.1), -2.0 * FRAC_PI_2);
    }

    #[test]
    fn wrap_keeps_angles_in_one_turn() {
        assert!((wrap_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert!(wrap_angle(5.0 * TAU + 0.25) < TAU);
    }

    #[test]
    fn snap_rotation_repairs_drift() {
        let drifted = Quat::from_rotation_y(FRAC_PI_2 + 1e-3) * Quat::from_rotation_x(-1e-3);
        let snapped = snap_rotation(drifted);
        let expected = Quat::from_rotation_y(FRAC_PI_2);
        assert!(Mat3::from_quat(snapped).abs_diff_eq(Mat3::from_quat(expected), 1e-5));
    }

    #[test]
    fn sticker_colors_decode_hex() {
        let Srgba { red, green, blue, .. } = StickerColor::Red.color().to_srgba();
        assert!((red - 0xb7 as f32 / 255.0).abs() < 1e-6);
        assert!((green - 0x12 as f32 / 255.0).abs() < 1e-6);
        assert!((blue - 0x34 as f32 / 255.0).abs() < 1e-6);
    }
}
