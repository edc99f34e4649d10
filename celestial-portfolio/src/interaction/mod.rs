//! Pointer interaction with the scene.
//!
//! Pointer events (from winit natively, from the DOM bridge in the browser)
//! are turned into camera rays. Moving the pointer highlights the celestial
//! bodies under it; clicking a body with a configured destination navigates
//! away from the page.

/// Hover highlighting of celestial bodies via emissive colour.
pub mod hover;

/// Click-to-navigate and the page location it drives.
pub mod navigation;

/// Pick shapes, camera rays and nearest-first intersection.
pub mod picking;

/// Pointer events and normalized device coordinates.
pub mod pointer;

/// Ray intersection primitives for spheres, boxes and tori.
pub mod ray;

use crate::engine::camera::scroll_camera::scroll_camera_controller;
use crate::engine::core::app_state::AppState;
use bevy::prelude::*;
use hover::hover_highlight_system;
use navigation::{NavigationRequest, PageLocation, click_navigation_system, perform_navigation};
use pointer::PointerEvent;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        // Pointer rays are cast from the pose this frame's scroll produced.
        app.add_event::<PointerEvent>()
            .add_event::<NavigationRequest>()
            .init_resource::<PageLocation>()
            .add_systems(
                Update,
                (
                    hover_highlight_system,
                    click_navigation_system,
                    perform_navigation,
                )
                    .chain()
                    .after(scroll_camera_controller)
                    .run_if(in_state(AppState::Running)),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            pointer::native_pointer_source
                .before(hover_highlight_system)
                .run_if(in_state(AppState::Running)),
        );
    }
}
