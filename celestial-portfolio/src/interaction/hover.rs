use super::picking::{PickHit, PickShape, intersect_shapes};
use super::pointer::{PointerEvent, PointerKind};
use crate::engine::camera::scroll_camera::SceneCamera;
use crate::engine::scene::bodies::CelestialBody;
use bevy::prelude::*;
use constants::render_settings::{HOVER_EMISSIVE, NO_EMISSIVE};

/// Clear every body's emissive, then light up each body the ray hit.
/// Nothing is remembered between calls.
pub fn apply_hover_highlight<'a>(
    hits: &[PickHit],
    bodies: impl IntoIterator<Item = (Entity, &'a Handle<StandardMaterial>)>,
    materials: &mut Assets<StandardMaterial>,
) {
    for (entity, handle) in bodies {
        let Some(material) = materials.get_mut(handle) else {
            continue;
        };
        let hovered = hits.iter().any(|hit| hit.entity == entity);
        material.emissive = if hovered { HOVER_EMISSIVE } else { NO_EMISSIVE };
    }
}

pub fn hover_highlight_system(
    mut pointer_events: EventReader<PointerEvent>,
    cameras: Query<(&Transform, &Projection), With<SceneCamera>>,
    bodies: Query<
        (
            Entity,
            &PickShape,
            &GlobalTransform,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<CelestialBody>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((camera_xf, projection)) = cameras.single() else {
        pointer_events.clear();
        return;
    };

    for event in pointer_events
        .read()
        .filter(|event| event.kind == PointerKind::Move)
    {
        let hits = match event.ray(camera_xf, projection) {
            Some(ray) => intersect_shapes(ray, bodies.iter().map(|(e, s, xf, _)| (e, s, xf))),
            None => Vec::new(),
        };

        apply_hover_highlight(
            &hits,
            bodies.iter().map(|(entity, _, _, material)| (entity, &material.0)),
            &mut materials,
        );
    }
}
