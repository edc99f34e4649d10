use super::picking::{PickHit, PickShape, intersect_shapes};
use super::pointer::{PointerEvent, PointerKind};
use crate::engine::assets::scene_config::{NavigationTargets, SceneConfig};
use crate::engine::camera::scroll_camera::SceneCamera;
use crate::engine::scene::bodies::CelestialBody;
use bevy::prelude::*;

/// Request to leave the page for `destination`, relative to the current one.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub destination: String,
}

/// Last destination the page was sent to. Setting it again is harmless.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub href: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("browser rejected navigation to '{destination}': {reason}")]
    Rejected { destination: String, reason: String },
}

/// Walk hits nearest-first and return the destination of the first body
/// that has one. Hits on other objects are skipped, not blocking.
pub fn first_navigation_target<'a>(
    hits: &[PickHit],
    body_of: impl Fn(Entity) -> Option<CelestialBody>,
    targets: &'a NavigationTargets,
) -> Option<&'a str> {
    hits.iter()
        .filter_map(|hit| body_of(hit.entity))
        .find_map(|body| targets.destination(body))
}

pub fn click_navigation_system(
    mut pointer_events: EventReader<PointerEvent>,
    cameras: Query<(&Transform, &Projection), With<SceneCamera>>,
    shapes: Query<(Entity, &PickShape, &GlobalTransform)>,
    bodies: Query<&CelestialBody>,
    config: Res<SceneConfig>,
    mut navigation: EventWriter<NavigationRequest>,
) {
    let Ok((camera_xf, projection)) = cameras.single() else {
        pointer_events.clear();
        return;
    };

    for event in pointer_events
        .read()
        .filter(|event| event.kind == PointerKind::Click)
    {
        let Some(ray) = event.ray(camera_xf, projection) else {
            continue;
        };

        let hits = intersect_shapes(ray, shapes.iter());
        let body_of = |entity| bodies.get(entity).ok().copied();
        if let Some(destination) = first_navigation_target(&hits, body_of, &config.navigation) {
            info!("Navigating to {}", destination);
            navigation.write(NavigationRequest {
                destination: destination.to_string(),
            });
        }
    }
}

pub fn perform_navigation(
    mut requests: EventReader<NavigationRequest>,
    mut location: ResMut<PageLocation>,
) {
    for request in requests.read() {
        location.href = Some(request.destination.clone());

        if let Err(err) = navigate_browser(&request.destination) {
            error!("Navigation failed: {}", err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn navigate_browser(destination: &str) -> Result<(), NavigationError> {
    let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
    window
        .location()
        .set_href(destination)
        .map_err(|err| NavigationError::Rejected {
            destination: destination.to_string(),
            reason: format!("{:?}", err),
        })
}

// Native builds have no document to leave; the request is only recorded.
#[cfg(not(target_arch = "wasm32"))]
fn navigate_browser(destination: &str) -> Result<(), NavigationError> {
    debug!("No browser location on native builds, recorded '{}'", destination);
    Ok(())
}
