use bevy::math::Vec3;

/// Per-frame Euler increment (radians) for the torus.
pub const TORUS_SPIN: Vec3 = Vec3::new(0.01, 0.005, 0.01);

/// Per-frame Euler increment for each celestial body.
pub const BODY_SPIN: Vec3 = Vec3::new(0.005, 0.0, 0.0);

/// Euler increment applied to each celestial body on every scroll event.
pub const BODY_SCROLL_SPIN: Vec3 = Vec3::new(0.05, 0.0, 0.0);

/// Euler increment applied to the avatar cube on every scroll event.
pub const AVATAR_SCROLL_SPIN: Vec3 = Vec3::new(0.0, 0.01, 0.0);
