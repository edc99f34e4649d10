//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and the transition
//! from config loading to the running scene, for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers resources, events and the loading/runtime system sets.
pub mod app_setup;

/// Application state machine: config loading, then the running scene.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the `#bg` canvas on web targets and enables vsync.
pub mod window_config;
