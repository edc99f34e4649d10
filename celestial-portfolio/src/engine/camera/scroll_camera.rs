use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::systems::spin::{EulerRotation, ScrollSpin};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::coordinate_system::{
    INITIAL_CAMERA_X, INITIAL_CAMERA_Z, SCROLL_TO_CAMERA_X, SCROLL_TO_CAMERA_YAW,
    SCROLL_TO_CAMERA_Z,
};
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

#[derive(Component)]
pub struct SceneCamera;

/// The document's top offset changed. `top` is 0 at the top of the page and
/// grows more negative as the user scrolls down.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub top: f32,
}

/// Native stand-in for the document scroll position, fed by the mouse wheel.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub top: f32,
}

impl ScrollOffset {
    /// Accumulate one wheel event. Returns true when the offset moved.
    pub fn apply_wheel(&mut self, unit: MouseScrollUnit, y: f32, line_height: f32) -> bool {
        let delta = match unit {
            MouseScrollUnit::Line => y * line_height,
            MouseScrollUnit::Pixel => y,
        };
        let previous = self.top;
        // A page cannot scroll above its top.
        self.top = (self.top + delta).min(0.0);
        self.top != previous
    }
}

/// Camera placement for a given scroll offset. Unbounded and unsmoothed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub x: f32,
    pub z: f32,
    pub yaw: f32,
}

impl CameraPose {
    pub fn apply(&self, transform: &mut Transform) {
        transform.translation.x = self.x;
        transform.translation.z = self.z;
        transform.rotation = Quat::from_rotation_y(self.yaw);
    }
}

pub fn camera_pose_for_scroll(top: f32) -> CameraPose {
    CameraPose {
        x: top * SCROLL_TO_CAMERA_X,
        z: top * SCROLL_TO_CAMERA_Z,
        yaw: top * SCROLL_TO_CAMERA_YAW,
    }
}

pub fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Name::new("scene_camera"),
        SceneCamera,
        Camera3d::default(),
        Camera {
            // Drawn over the background camera without clearing it.
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(INITIAL_CAMERA_X, 0.0, INITIAL_CAMERA_Z),
    ));
}

/// Establish the initial pose, as if the page had just been scrolled to
/// its current offset.
pub fn initial_scroll(offset: Res<ScrollOffset>, mut scroll_events: EventWriter<ScrollEvent>) {
    scroll_events.write(ScrollEvent { top: offset.top });
}

// Native scroll source: one scroll event per frame in which the wheel moved the page.
pub fn wheel_scroll_source(
    mut wheel_events: EventReader<MouseWheel>,
    mut offset: ResMut<ScrollOffset>,
    config: Res<SceneConfig>,
    mut scroll_events: EventWriter<ScrollEvent>,
) {
    let mut moved = false;
    for wheel in wheel_events.read() {
        moved |= offset.apply_wheel(wheel.unit, wheel.y, config.wheel_line_height);
    }

    if moved {
        scroll_events.write(ScrollEvent { top: offset.top });
    }
}

pub fn scroll_camera_controller(
    mut scroll_events: EventReader<ScrollEvent>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
    mut spinners: Query<(&mut EulerRotation, &ScrollSpin)>,
) {
    for event in scroll_events.read() {
        for (mut rotation, spin) in &mut spinners {
            rotation.advance(spin.0);
        }

        let pose = camera_pose_for_scroll(event.top);
        for mut transform in &mut cameras {
            pose.apply(&mut transform);
        }
    }
}
