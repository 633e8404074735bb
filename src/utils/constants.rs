// Constants used in the toy, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    // Distance of the orbiting camera from the cube centre.
    pub const CAMERA_3D_DISTANCE: f32 = 6.0;

    // Radians of orbit per pixel of pointer drag.
    pub const CAMERA_3D_ORBIT_SENSITIVITY: f32 = 0.005;

    // Keep the orbit away from the poles so `look_at` never degenerates.
    pub const CAMERA_3D_MAX_PITCH: f32 = 1.4;
}

/// Cube object
pub mod cube_constants {
    use std::f32::consts::FRAC_PI_2;

    // Duration of one quarter turn in milliseconds.
    pub const ROTATION_DURATION_MS: u64 = 200;

    // Allowed distance from +1/-1 when classifying a rounded lattice coordinate.
    pub const FACE_TOLERANCE: f32 = 0.01;

    // Whole-cube drift on X and Y in radians per second (0.002 rad per frame at 60 Hz).
    pub const AUTO_ROTATION_SPEED: f32 = 0.12;

    pub const QUARTER_TURN: f32 = FRAC_PI_2;

    // Edge of a single cubie, slightly under 1 so the seams stay visible.
    pub const CUBIE_SIZE: f32 = 0.98;

    // Half edge of the invisible hitbox around the whole 3x3x3 assembly.
    pub const HITBOX_HALF_SIZE: f32 = 1.5;

    pub const CUBIE_COUNT: usize = 27;
}

/// Pointer and touch input
pub mod input_constants {
    // Max pointer travel between press and release for a click.
    // Normalized device coordinates, checked per axis.
    pub const CLICK_THRESHOLD_NDC: f32 = 0.01;
}

/// Materials and colors
pub mod color_constants {
    // Sticker colors as 0xRRGGBB, indexed like `Face`.
    pub const STICKER_WHITE: u32 = 0xffffff;
    pub const STICKER_YELLOW: u32 = 0xffd500;
    pub const STICKER_ORANGE: u32 = 0xff5800;
    pub const STICKER_RED: u32 = 0xb71234;
    pub const STICKER_GREEN: u32 = 0x009b48;
    pub const STICKER_BLUE: u32 = 0x0046ad;

    // Emissive strength applied to highlighted cubies (0x44 per channel).
    pub const HIGHLIGHT_STRENGTH: f32 = 0x44 as f32 / 255.0;

    pub const BACKGROUND_RGB: [f32; 3] = [0.0, 0.0, 0.0];
}

/// Lighting
pub mod lighting_constants {
    pub const POINT_LIGHT_INTENSITY: f32 = 300_000.0;
    pub const POINT_LIGHT_POSITIONS: [[f32; 3]; 3] =
        [[2.0, 3.0, 5.0], [0.0, 3.0, 0.0], [0.0, 0.0, 6.0]];
    pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
}
