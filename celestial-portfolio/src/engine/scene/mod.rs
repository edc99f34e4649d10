//! Scene construction.
//!
//! Spawns the torus, the star field, the avatar cube, the three textured
//! celestial bodies, lighting, the background and the scene camera.

/// Entry system assembling the full scene, plus torus, avatar and background.
pub mod builder;

/// Celestial body identities and their textured, normal-mapped spheres.
pub mod bodies;

/// Random star placement and star entity spawning.
pub mod stars;
