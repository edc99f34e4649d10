use super::picking::picking_ray;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Click,
}

/// A pointer event in viewport pixels, origin top-left. Produced by winit
/// natively and by the DOM bridge in the browser.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
    pub viewport: Vec2,
}

impl PointerEvent {
    pub fn ndc(&self) -> Option<Vec2> {
        cursor_to_ndc(self.position, self.viewport)
    }

    /// Ray from the camera through this pointer position.
    pub fn ray(&self, camera_xf: &Transform, projection: &Projection) -> Option<Ray3d> {
        let ndc = self.ndc()?;
        picking_ray(ndc, camera_xf, projection, self.viewport.x / self.viewport.y)
    }
}

/// Pixel coordinates to `-1..1` on both axes, y pointing up.
pub fn cursor_to_ndc(position: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (position.x / viewport.x) * 2.0 - 1.0,
        -(position.y / viewport.y) * 2.0 + 1.0,
    ))
}

// Native pointer source: cursor motion and left clicks on the primary window.
pub fn native_pointer_source(
    mut cursor_moved: EventReader<CursorMoved>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let Ok(window) = windows.single() else {
        cursor_moved.clear();
        return;
    };
    let viewport = window.size();

    for cursor in cursor_moved.read() {
        pointer_events.write(PointerEvent {
            kind: PointerKind::Move,
            position: cursor.position,
            viewport,
        });
    }

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(position) = window.cursor_position() {
            pointer_events.write(PointerEvent {
                kind: PointerKind::Click,
                position,
                viewport,
            });
        }
    }
}
