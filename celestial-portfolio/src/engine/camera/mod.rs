//! Scroll-driven scene camera.
//!
//! Maps the document scroll offset to a camera pose with a fixed linear law,
//! and turns native mouse wheel input into the same scroll events the
//! browser bridge produces.

/// Scene camera, scroll events and the scroll-to-pose controller.
pub mod scroll_camera;
