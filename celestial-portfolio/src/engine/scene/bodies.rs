use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::assets::scene_textures::{SceneTextures, TextureEncoding};
use crate::engine::systems::spin::{EulerRotation, ScrollSpin, Spin};
use crate::interaction::picking::PickShape;
use bevy::prelude::*;
use constants::animation::{BODY_SCROLL_SPIN, BODY_SPIN};
use constants::bodies::{BodyInfo, JUPITER, MARS, MOON};
use constants::render_settings::NO_EMISSIVE;

/// The three textured, hoverable bodies.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Moon,
    Mars,
    Jupiter,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 3] = [Self::Moon, Self::Mars, Self::Jupiter];

    pub fn info(self) -> &'static BodyInfo {
        match self {
            Self::Moon => &MOON,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

pub fn spawn_celestial_bodies(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    textures: &mut SceneTextures,
    config: &SceneConfig,
) {
    for body in CelestialBody::ALL {
        spawn_body(commands, meshes, materials, asset_server, textures, config, body);
    }
}

fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    textures: &mut SceneTextures,
    config: &SceneConfig,
    body: CelestialBody,
) {
    let info = body.info();
    let paths = config.textures.body(body);

    let colour = textures.load(
        asset_server,
        format!("{} colour", info.name),
        &paths.colour,
        TextureEncoding::Colour,
    );

    let sphere = Sphere::new(info.radius).mesh().uv(info.sectors, info.stacks);

    // Normal mapping needs tangents; without them the body keeps its colour map only.
    let (mesh, normal_map) = match sphere.clone().with_generated_tangents() {
        Ok(mesh) => {
            let normal = textures.load(
                asset_server,
                format!("{} normal", info.name),
                &paths.normal,
                TextureEncoding::Linear,
            );
            (mesh, Some(normal))
        }
        Err(err) => {
            warn!(
                "Tangent generation failed for {}, rendering without normal map: {}",
                info.name, err
            );
            (sphere, None)
        }
    };

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(colour),
        normal_map_texture: normal_map,
        emissive: NO_EMISSIVE,
        ..default()
    });

    commands.spawn((
        Name::new(info.name),
        body,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::from_array(info.position)),
        EulerRotation::default(),
        Spin(BODY_SPIN),
        ScrollSpin(BODY_SCROLL_SPIN),
        PickShape::Sphere {
            radius: info.radius,
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_have_distinct_names_and_positions() {
        let names: Vec<_> = CelestialBody::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, ["moon", "mars", "jupiter"]);

        assert_eq!(CelestialBody::Moon.info().position, [-10.0, 0.0, 30.0]);
        assert_eq!(CelestialBody::Mars.info().position, [-20.0, 0.0, 47.0]);
        assert_eq!(CelestialBody::Jupiter.info().position, [-20.0, 0.0, 35.0]);
        assert_eq!(CelestialBody::Jupiter.info().stacks, 40);
    }
}
