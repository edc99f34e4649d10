/// Scroll-to-camera coefficients, applied to the document top offset `t`.
/// `t` is 0 at the top of the page and decreases as the user scrolls down.
pub const SCROLL_TO_CAMERA_Z: f32 = -0.01;
pub const SCROLL_TO_CAMERA_X: f32 = -0.0002;
pub const SCROLL_TO_CAMERA_YAW: f32 = -0.0002;

/// Camera position before the first scroll pose is applied.
pub const INITIAL_CAMERA_X: f32 = -3.0;
pub const INITIAL_CAMERA_Z: f32 = 30.0;

/// Pixels per wheel line on native builds, where no document scroll exists.
pub const DEFAULT_WHEEL_LINE_HEIGHT: f32 = 40.0;
