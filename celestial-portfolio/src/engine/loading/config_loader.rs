use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::app_state::AppState;
use bevy::asset::{AssetLoadError, LoadState, io::AssetReaderError};
use bevy::prelude::*;
use constants::texture::SCENE_CONFIG_PATH;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Request the optional JSON override; defaults are already in place.
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    println!("Loading scene config override from: {}", SCENE_CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

// Apply the override once it settles, then let the scene build.
pub fn load_config_system(
    config_loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = config_loader.handle else {
        next_state.set(AppState::Running);
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(config) = configs.get(handle) else {
                return;
            };
            match config.validate() {
                Ok(()) => {
                    info!("✓ Scene config override applied");
                    commands.insert_resource(config.clone());
                }
                Err(err) => warn!("Ignoring invalid scene config override: {}", err),
            }
            next_state.set(AppState::Running);
        }
        Some(LoadState::Failed(err)) => {
            if matches!(
                err.as_ref(),
                AssetLoadError::AssetReaderError(AssetReaderError::NotFound(_))
            ) {
                info!("No scene config override found, using defaults");
            } else {
                warn!("Failed to load scene config override: {}", err);
            }
            next_state.set(AppState::Running);
        }
        _ => {}
    }
}
