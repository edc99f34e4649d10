use crate::interaction::picking::PickShape;
use bevy::prelude::*;
use constants::render_settings::{STAR_RADIUS, STAR_RESOLUTION};
use rand::Rng;

#[derive(Component)]
pub struct Star;

/// Draw `count` positions with every coordinate independently uniform in
/// `[-spread / 2, spread / 2)`.
pub fn scatter_star_positions(rng: &mut impl Rng, count: usize, spread: f32) -> Vec<Vec3> {
    let half = spread * 0.5;
    (0..count)
        .map(|_| {
            if half > 0.0 {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            } else {
                Vec3::ZERO
            }
        })
        .collect()
}

// Stars share one mesh and one material; each is its own entity.
pub fn spawn_star_field(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    positions: &[Vec3],
) {
    let mesh = meshes.add(
        Sphere::new(STAR_RADIUS)
            .mesh()
            .uv(STAR_RESOLUTION, STAR_RESOLUTION),
    );
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    for (index, position) in positions.iter().enumerate() {
        commands.spawn((
            Name::new(format!("star_{index}")),
            Star,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(*position),
            PickShape::Sphere {
                radius: STAR_RADIUS,
            },
        ));
    }
}
