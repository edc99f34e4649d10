use super::bodies::spawn_celestial_bodies;
use super::stars::{scatter_star_positions, spawn_star_field};
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::assets::scene_textures::{SceneTextures, TextureEncoding};
use crate::engine::camera::scroll_camera::spawn_scene_camera;
use crate::engine::systems::spin::{ScrollSpin, Spin};
use crate::interaction::picking::PickShape;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::animation::{AVATAR_SCROLL_SPIN, TORUS_SPIN};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AVATAR_SIZE, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION, POINT_LIGHT_RANGE,
    TORUS_COLOUR, TORUS_MAJOR_RADIUS, TORUS_MAJOR_RESOLUTION, TORUS_MINOR_RADIUS,
    TORUS_MINOR_RESOLUTION,
};
use std::f32::consts::FRAC_PI_2;

#[derive(Component)]
pub struct SceneTorus;

#[derive(Component)]
pub struct Avatar;

/// Build the whole scene once the config is settled. Nothing spawned here
/// is ever despawned.
pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut textures: ResMut<SceneTextures>,
    config: Res<SceneConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    println!("=== CELESTIAL PORTFOLIO SCENE ===");

    spawn_scene_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_torus(&mut commands, &mut meshes, &mut materials);

    let positions =
        scatter_star_positions(&mut rand::thread_rng(), config.star_count, config.star_spread);
    spawn_star_field(&mut commands, &mut meshes, &mut materials, &positions);
    println!("  Stars: {}", positions.len());

    let viewport = windows.single().map(|w| w.size()).unwrap_or(Vec2::ONE);
    spawn_background(&mut commands, &asset_server, &mut textures, &config, viewport);

    spawn_avatar(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &mut textures,
        &config,
    );
    spawn_celestial_bodies(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &mut textures,
        &config,
    );

    println!("  Textures requested: {}", textures.textures.len());
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("point_light"),
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(POINT_LIGHT_POSITION)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

pub fn spawn_torus(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    // Bevy builds the ring around +Y; turn it to face the camera like a ring around +Z.
    let mesh = Mesh::from(
        Torus {
            minor_radius: TORUS_MINOR_RADIUS,
            major_radius: TORUS_MAJOR_RADIUS,
        }
        .mesh()
        .minor_resolution(TORUS_MINOR_RESOLUTION)
        .major_resolution(TORUS_MAJOR_RESOLUTION),
    )
    .rotated_by(Quat::from_rotation_x(FRAC_PI_2));

    let [r, g, b] = TORUS_COLOUR;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        ..default()
    });

    commands.spawn((
        Name::new("torus"),
        SceneTorus,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Spin(TORUS_SPIN),
        PickShape::Torus {
            major_radius: TORUS_MAJOR_RADIUS,
            minor_radius: TORUS_MINOR_RADIUS,
        },
    ));
}

fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    textures: &mut SceneTextures,
    config: &SceneConfig,
) {
    let texture = textures.load(
        asset_server,
        "avatar",
        &config.textures.avatar,
        TextureEncoding::Colour,
    );

    let size = Vec3::splat(AVATAR_SIZE);
    commands.spawn((
        Name::new("avatar"),
        Avatar,
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        ScrollSpin(AVATAR_SCROLL_SPIN),
        PickShape::Cuboid { size },
    ));
}

// Screen-space backdrop: a 2D camera draws the image first, the scene camera
// draws over it without clearing. Sized once; window resizes are not tracked.
fn spawn_background(
    commands: &mut Commands,
    asset_server: &AssetServer,
    textures: &mut SceneTextures,
    config: &SceneConfig,
    viewport: Vec2,
) {
    let image = textures.load(
        asset_server,
        "background",
        &config.textures.background,
        TextureEncoding::Colour,
    );

    commands.spawn((
        Name::new("background_camera"),
        Camera2d,
        Camera {
            order: 0,
            ..default()
        },
    ));
    commands.spawn((
        Name::new("background"),
        Sprite {
            image,
            custom_size: Some(viewport),
            ..default()
        },
    ));
}
