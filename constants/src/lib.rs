//! Fixed numeric laws and scene layout shared by the portfolio scene.

pub mod animation;
pub mod bodies;
pub mod coordinate_system;
pub mod render_settings;
pub mod texture;
