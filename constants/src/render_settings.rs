use bevy::color::LinearRgba;

/// Vertical field of view of the scene camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const TORUS_MAJOR_RADIUS: f32 = 10.0;
pub const TORUS_MINOR_RADIUS: f32 = 3.0;
pub const TORUS_MAJOR_RESOLUTION: usize = 100;
pub const TORUS_MINOR_RESOLUTION: usize = 16;
/// Tomato, 0xff6347.
pub const TORUS_COLOUR: [u8; 3] = [0xff, 0x63, 0x47];

pub const STAR_RADIUS: f32 = 0.25;
pub const STAR_RESOLUTION: u32 = 24;
pub const DEFAULT_STAR_COUNT: usize = 200;
/// Upper bound accepted from a config override.
pub const MAX_STAR_COUNT: usize = 10_000;
/// Full width of the cube stars are scattered in, centred on the origin.
pub const DEFAULT_STAR_SPREAD: f32 = 100.0;

pub const AVATAR_SIZE: f32 = 3.0;

pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1_000_000.0;
/// Covers the furthest body from the light.
pub const POINT_LIGHT_RANGE: f32 = 200.0;
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

/// Hover emissive: 0x555555 (0.0908 linear) scaled to 500 nits.
pub const HOVER_EMISSIVE: LinearRgba = LinearRgba::new(45.4, 45.4, 45.4, 1.0);
pub const NO_EMISSIVE: LinearRgba = LinearRgba::BLACK;

/// Sphere tracing limits for torus picking.
pub const TORUS_PICK_MAX_STEPS: usize = 128;
pub const TORUS_PICK_EPSILON: f32 = 1e-3;
pub const PICK_MAX_DISTANCE: f32 = CAMERA_FAR;
