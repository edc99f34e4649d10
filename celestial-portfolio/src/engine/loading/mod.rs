//! Startup loading for the scene config override and texture reporting.

/// Optional JSON scene config loading and validation.
pub mod config_loader;

/// Texture load state monitoring with failure warnings.
pub mod texture_loader;
