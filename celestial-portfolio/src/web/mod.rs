//! Browser integration for wasm32 builds.
//!
//! DOM listeners on the page window capture `scroll`, `mousemove` and
//! `click`, queue them, and the engine drains the queue into the same
//! scroll and pointer events native input produces.
//!
//! ```text
//! window (DOM)  ──listener──>  DomEventQueue  ──PreUpdate──>  ScrollEvent / PointerEvent
//! ```

/// DOM listener registration and the queue drained each frame.
pub mod dom_bridge;
