use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bg".into()),
            fit_canvas_to_parent: true,
            // Page scrolling and clicks must keep reaching the document.
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Celestial Portfolio".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
