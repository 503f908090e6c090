use glam::Vec3;

use crate::lighting::Material;

// Shared tuning constants for the lamp model, its lighting and the viewer.

// Lamp dimensions (world units)
pub const BASE_RADIUS: f32 = 1.0;
pub const BASE_HEIGHT: f32 = 0.3;
pub const ARM_RADIUS: f32 = 0.15;
pub const LOWER_ARM_LENGTH: f32 = 3.0;
pub const UPPER_ARM_LENGTH: f32 = 2.5;
pub const LAMPSHADE_RADIUS: f32 = 0.8;
pub const LAMPSHADE_HEIGHT: f32 = 1.2;

// Derived part sizes
pub const JOINT_RADIUS: f32 = ARM_RADIUS * 1.5; // joint spheres are a little fatter than the arms
pub const SHADE_NECK_RADIUS: f32 = LAMPSHADE_RADIUS * 0.4; // narrow end of the shade cone
pub const GLOW_RADIUS: f32 = LAMPSHADE_RADIUS * 0.5;
pub const EMITTER_DEPTH: f32 = LAMPSHADE_HEIGHT * 0.6; // light sits 60% of the way into the shade

// Selection overlays
pub const HIGHLIGHT_CUBE_SIZE: f32 = BASE_RADIUS * 2.2;
pub const HIGHLIGHT_SPHERE_RADIUS: f32 = ARM_RADIUS * 2.5;

// Tessellation
pub const BASE_SLICES: u32 = 32;
pub const ARM_SLICES: u32 = 16;
pub const JOINT_SLICES: u32 = 16;
pub const JOINT_STACKS: u32 = 16;
pub const SHADE_SLICES: u32 = 32;
pub const HIGHLIGHT_SLICES: u32 = 16;
pub const HIGHLIGHT_STACKS: u32 = 16;

// Table
pub const TABLE_HALF_EXTENT: f32 = 10.0;
pub const TABLE_STEP: f32 = 0.5; // finer grid = smoother spotlight falloff (lighting is sampled per vertex too)
pub const TABLE_Y: f32 = -0.1;

// Joint control (degrees)
pub const ROTATION_STEP_DEG: f32 = 3.0;
pub const LOWER_ARM_LIMITS: (f32, f32) = (-10.0, 90.0);
pub const UPPER_ARM_LIMITS: (f32, f32) = (-120.0, 90.0);
pub const LAMPSHADE_LIMITS: (f32, f32) = (-90.0, 45.0);

// base rotation, lower arm, upper arm, lampshade tilt, lampshade spin
pub const DEFAULT_POSE: [f32; 5] = [0.0, 45.0, -60.0, -30.0, 0.0];

// Part materials
pub const BASE_MATERIAL: Material = Material {
    ambient_diffuse: [0.2, 0.2, 0.22, 1.0],
    specular: [0.9, 0.9, 0.95, 1.0],
    shininess: 80.0,
};
pub const ARM_MATERIAL: Material = Material {
    ambient_diffuse: [0.25, 0.25, 0.28, 1.0],
    specular: [0.95, 0.95, 1.0, 1.0],
    shininess: 100.0,
};
pub const JOINT_MATERIAL: Material = Material {
    ambient_diffuse: [0.22, 0.22, 0.25, 1.0],
    specular: [1.0, 1.0, 1.0, 1.0],
    shininess: 120.0,
};
pub const SHADE_MATERIAL: Material = Material {
    ambient_diffuse: [0.3, 0.3, 0.35, 1.0],
    specular: [0.8, 0.8, 0.85, 1.0],
    shininess: 90.0,
};
pub const TABLE_MATERIAL: Material = Material {
    ambient_diffuse: [0.4, 0.4, 0.4, 1.0],
    specular: [0.2, 0.2, 0.2, 1.0],
    shininess: 10.0,
};

// Unlit colours
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // yellow
pub const GLOW_COLOR: [f32; 4] = [1.0, 0.9, 0.2, 0.9]; // warm yellow, slightly translucent
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Fill light (weak, so the spotlight dominates)
pub const GLOBAL_AMBIENT: f32 = 0.2;
pub const FILL_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 5.0]; // directional: only the direction matters
pub const FILL_AMBIENT: f32 = 0.05;
pub const FILL_DIFFUSE: f32 = 0.1;
pub const FILL_SPECULAR: f32 = 1.0; // white, the fixed-function default for light 0

// Spotlight
pub const SPOT_DIFFUSE: [f32; 3] = [3.0, 2.5, 1.5]; // warm yellow-white
pub const SPOT_SPECULAR: [f32; 3] = [2.0, 2.0, 2.0];
pub const SPOT_CUTOFF_DEG: f32 = 60.0;
pub const SPOT_EXPONENT: f32 = 15.0;
pub const SPOT_ATTENUATION: [f32; 3] = [0.5, 0.02, 0.005]; // constant, linear, quadratic

// Camera
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_AZIMUTH_DEG: f32 = 20.0;
pub const CAMERA_ELEVATION_DEG: f32 = 30.0;
pub const CAMERA_TARGET: [f32; 3] = [0.0, 3.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Window
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
pub const WINDOW_TITLE: &str = "Luxo Lamp";

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}

#[inline]
pub fn fill_light_direction() -> Vec3 {
    Vec3::from(FILL_LIGHT_POSITION).normalize()
}
