use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::assets::scene_textures::SceneTextures;
use crate::engine::camera::scroll_camera::{
    ScrollEvent, ScrollOffset, initial_scroll, scroll_camera_controller,
};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::texture_loader::report_texture_loading;
use crate::engine::scene::builder::build_scene;
use crate::engine::systems::spin::{spin_system, sync_euler_rotation};
// Interaction and browser bridge
use crate::interaction::InteractionPlugin;
use crate::web::dom_bridge::DomBridgePlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::scroll_camera::wheel_scroll_source;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Optional JSON override of the scene configuration.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["scene.json"]))
        .add_plugins(InteractionPlugin)
        .add_plugins(DomBridgePlugin);

    app.init_resource::<ConfigLoader>()
        .init_resource::<SceneConfig>()
        .init_resource::<SceneTextures>()
        .init_resource::<ScrollOffset>()
        .add_event::<ScrollEvent>();

    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            load_config_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (build_scene, initial_scroll).chain(),
        );

    // Scroll poses the camera, then the frame's spin is applied and
    // written back to transforms before Bevy draws.
    let runtime_systems = (
        report_texture_loading,
        (scroll_camera_controller, spin_system, sync_euler_rotation).chain(),
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            wheel_scroll_source
                .before(scroll_camera_controller)
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
