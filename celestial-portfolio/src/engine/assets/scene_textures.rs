use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

/// How a texture's texels are interpreted when uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureEncoding {
    /// Colour data, sampled as sRGB.
    Colour,
    /// Normal maps and other data textures, sampled as linear.
    Linear,
}

#[derive(Debug, Clone)]
pub struct TrackedTexture {
    pub role: String,
    pub path: String,
    pub handle: Handle<Image>,
    pub settled: bool,
    pub failed: bool,
}

/// Every image the scene requested, kept so load failures can be reported.
#[derive(Resource, Default, Debug)]
pub struct SceneTextures {
    pub textures: Vec<TrackedTexture>,
    pub summary_reported: bool,
}

impl SceneTextures {
    pub fn load(
        &mut self,
        asset_server: &AssetServer,
        role: impl Into<String>,
        path: &str,
        encoding: TextureEncoding,
    ) -> Handle<Image> {
        let handle = match encoding {
            TextureEncoding::Colour => asset_server.load(path.to_string()),
            TextureEncoding::Linear => asset_server
                .load_with_settings(path.to_string(), |settings: &mut ImageLoaderSettings| {
                    settings.is_srgb = false;
                }),
        };

        self.textures.push(TrackedTexture {
            role: role.into(),
            path: path.to_string(),
            handle: handle.clone(),
            settled: false,
            failed: false,
        });
        handle
    }

    pub fn pending(&self) -> usize {
        self.textures.iter().filter(|t| !t.settled).count()
    }

    pub fn failed(&self) -> usize {
        self.textures.iter().filter(|t| t.failed).count()
    }
}
