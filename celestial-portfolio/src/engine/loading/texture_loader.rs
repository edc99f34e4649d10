use crate::engine::assets::scene_textures::SceneTextures;
use bevy::asset::LoadState;
use bevy::prelude::*;

// Report each texture once; a failed texture leaves its mesh untextured.
pub fn report_texture_loading(
    mut textures: ResMut<SceneTextures>,
    asset_server: Res<AssetServer>,
) {
    if textures.summary_reported {
        return;
    }

    for texture in textures.textures.iter_mut().filter(|t| !t.settled) {
        match asset_server.get_load_state(&texture.handle) {
            Some(LoadState::Loaded) => texture.settled = true,
            Some(LoadState::Failed(err)) => {
                warn!(
                    "Failed to load {} texture from '{}': {}",
                    texture.role, texture.path, err
                );
                texture.settled = true;
                texture.failed = true;
            }
            _ => {}
        }
    }

    if textures.textures.is_empty() || textures.pending() > 0 {
        return;
    }

    let failed = textures.failed();
    if failed == 0 {
        info!("✓ All {} scene textures loaded", textures.textures.len());
    } else {
        warn!(
            "{} of {} scene textures failed to load",
            failed,
            textures.textures.len()
        );
    }
    textures.summary_reported = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_textures::{TextureEncoding, TrackedTexture};
    use bevy::asset::AssetMetaCheck;
    use bevy::image::{CompressedImageFormats, ImageLoader};
    use std::time::Duration;

    fn texture_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                file_path: "test_assets".to_string(),
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
        ))
        .init_asset::<Image>()
        .register_asset_loader(ImageLoader::new(CompressedImageFormats::NONE))
        .init_resource::<SceneTextures>()
        .add_systems(Update, report_texture_loading);
        app
    }

    fn request(app: &mut App, role: &str, path: &str, encoding: TextureEncoding) {
        let asset_server = app.world().resource::<AssetServer>().clone();
        app.world_mut()
            .resource_mut::<SceneTextures>()
            .load(&asset_server, role, path, encoding);
    }

    fn update_until_reported(app: &mut App) {
        for _ in 0..500 {
            app.update();
            if app.world().resource::<SceneTextures>().summary_reported {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("texture loading never settled");
    }

    #[test]
    fn missing_texture_is_reported_as_failed() {
        let mut app = texture_app();
        request(&mut app, "avatar", "missing/cat.png", TextureEncoding::Colour);

        update_until_reported(&mut app);

        let textures = app.world().resource::<SceneTextures>();
        let avatar = &textures.textures[0];
        assert_eq!(avatar.role, "avatar");
        assert!(avatar.settled && avatar.failed);
        assert_eq!(textures.pending(), 0);
        assert_eq!(textures.failed(), 1);
    }

    #[test]
    fn loaded_textures_settle_beside_failed_ones() {
        let mut app = texture_app();
        request(&mut app, "background", "pixel.png", TextureEncoding::Colour);
        request(&mut app, "moon normal", "missing/normal.jpg", TextureEncoding::Linear);

        update_until_reported(&mut app);

        let textures = app.world().resource::<SceneTextures>();
        assert!(textures.textures[0].settled && !textures.textures[0].failed);
        assert!(textures.textures[1].settled && textures.textures[1].failed);
        assert_eq!(textures.failed(), 1);
    }

    #[test]
    fn nothing_requested_reports_nothing() {
        let mut app = texture_app();
        for _ in 0..3 {
            app.update();
        }
        assert!(!app.world().resource::<SceneTextures>().summary_reported);
    }

    #[test]
    fn counts_follow_settle_state() {
        let tracked = |settled, failed| TrackedTexture {
            role: "avatar".to_string(),
            path: "cat.png".to_string(),
            handle: Handle::default(),
            settled,
            failed,
        };
        let textures = SceneTextures {
            textures: vec![tracked(false, false), tracked(true, false), tracked(true, true)],
            summary_reported: false,
        };

        assert_eq!(textures.pending(), 1);
        assert_eq!(textures.failed(), 1);
    }
}
