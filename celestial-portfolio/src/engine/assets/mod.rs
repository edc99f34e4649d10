//! Scene configuration and texture bookkeeping.
//!
//! Holds the runtime-overridable scene settings and the registry of every
//! image the scene requested, used to surface load failures.

/// Scene configuration with JSON override support and validation.
pub mod scene_config;

/// Registry of requested textures and their settle state.
pub mod scene_textures;
