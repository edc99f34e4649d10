/// Default relative asset paths, resolved against the asset root.
pub const BACKGROUND_TEXTURE: &str = "space.jpeg";
pub const AVATAR_TEXTURE: &str = "cat.png";

/// Default JSON override for the scene configuration.
pub const SCENE_CONFIG_PATH: &str = "portfolio.scene.json";

/// Default click destinations. The mars page is an unfinished placeholder.
pub const MOON_DESTINATION: &str = "uxdesign.html";
pub const MARS_DESTINATION: &str = "path/to/mars-page.html";
