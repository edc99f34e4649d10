use bevy::prelude::*;
use constants::bodies::{JUPITER, MARS, MOON};
use constants::coordinate_system::DEFAULT_WHEEL_LINE_HEIGHT;
use constants::render_settings::{DEFAULT_STAR_COUNT, DEFAULT_STAR_SPREAD, MAX_STAR_COUNT};
use constants::texture::{AVATAR_TEXTURE, BACKGROUND_TEXTURE, MARS_DESTINATION, MOON_DESTINATION};
use serde::Deserialize;

use crate::engine::scene::bodies::CelestialBody;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("star count {count} exceeds the limit of {max}")]
    TooManyStars { count: usize, max: usize },

    #[error("star spread must be finite and non-negative, got {0}")]
    InvalidStarSpread(f32),

    #[error("wheel line height must be finite and positive, got {0}")]
    InvalidWheelLineHeight(f32),

    #[error("navigation destination for {0} is empty")]
    EmptyDestination(String),

    #[error("texture path for {0} is empty")]
    EmptyTexturePath(String),
}

/// Colour and normal map pair for one textured body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyTextures {
    pub colour: String,
    pub normal: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    pub background: String,
    pub avatar: String,
    pub moon: BodyTextures,
    pub mars: BodyTextures,
    pub jupiter: BodyTextures,
}

impl Default for TexturePaths {
    fn default() -> Self {
        let body = |info: &constants::bodies::BodyInfo| BodyTextures {
            colour: info.colour_texture.to_string(),
            normal: info.normal_texture.to_string(),
        };
        Self {
            background: BACKGROUND_TEXTURE.to_string(),
            avatar: AVATAR_TEXTURE.to_string(),
            moon: body(&MOON),
            mars: body(&MARS),
            jupiter: body(&JUPITER),
        }
    }
}

impl TexturePaths {
    pub fn body(&self, body: CelestialBody) -> &BodyTextures {
        match body {
            CelestialBody::Moon => &self.moon,
            CelestialBody::Mars => &self.mars,
            CelestialBody::Jupiter => &self.jupiter,
        }
    }
}

/// Page each body navigates to when clicked. `None` disables navigation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationTargets {
    pub moon: Option<String>,
    pub mars: Option<String>,
    pub jupiter: Option<String>,
}

impl Default for NavigationTargets {
    fn default() -> Self {
        Self {
            moon: Some(MOON_DESTINATION.to_string()),
            mars: Some(MARS_DESTINATION.to_string()),
            jupiter: None,
        }
    }
}

impl NavigationTargets {
    pub fn destination(&self, body: CelestialBody) -> Option<&str> {
        match body {
            CelestialBody::Moon => self.moon.as_deref(),
            CelestialBody::Mars => self.mars.as_deref(),
            CelestialBody::Jupiter => self.jupiter.as_deref(),
        }
    }
}

/// Runtime scene configuration. Defaults reproduce the shipped page; a JSON
/// asset may override any subset of fields.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub textures: TexturePaths,
    pub star_count: usize,
    pub star_spread: f32,
    pub navigation: NavigationTargets,
    pub wheel_line_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            textures: TexturePaths::default(),
            star_count: DEFAULT_STAR_COUNT,
            star_spread: DEFAULT_STAR_SPREAD,
            navigation: NavigationTargets::default(),
            wheel_line_height: DEFAULT_WHEEL_LINE_HEIGHT,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count > MAX_STAR_COUNT {
            return Err(ConfigError::TooManyStars {
                count: self.star_count,
                max: MAX_STAR_COUNT,
            });
        }
        if !self.star_spread.is_finite() || self.star_spread < 0.0 {
            return Err(ConfigError::InvalidStarSpread(self.star_spread));
        }
        if !self.wheel_line_height.is_finite() || self.wheel_line_height <= 0.0 {
            return Err(ConfigError::InvalidWheelLineHeight(self.wheel_line_height));
        }

        for body in CelestialBody::ALL {
            if self.navigation.destination(body).is_some_and(str::is_empty) {
                return Err(ConfigError::EmptyDestination(body.name().to_string()));
            }
            let textures = self.textures.body(body);
            if textures.colour.is_empty() || textures.normal.is_empty() {
                return Err(ConfigError::EmptyTexturePath(body.name().to_string()));
            }
        }

        for (role, path) in [
            ("background", &self.textures.background),
            ("avatar", &self.textures.avatar),
        ] {
            if path.is_empty() {
                return Err(ConfigError::EmptyTexturePath(role.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_page() {
        let config = SceneConfig::default();
        assert_eq!(config.star_count, 200);
        assert_eq!(config.star_spread, 100.0);
        assert_eq!(
            config.navigation.destination(CelestialBody::Moon),
            Some("uxdesign.html")
        );
        assert_eq!(
            config.navigation.destination(CelestialBody::Mars),
            Some("path/to/mars-page.html")
        );
        assert_eq!(config.navigation.destination(CelestialBody::Jupiter), None);
        assert_eq!(config.textures.jupiter.normal, "normal3.jpeg");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let json = r#"{
            "star_count": 50,
            "navigation": { "mars": "mars.html" }
        }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.star_count, 50);
        assert_eq!(
            config.navigation.destination(CelestialBody::Mars),
            Some("mars.html")
        );
        assert_eq!(
            config.navigation.destination(CelestialBody::Moon),
            Some("uxdesign.html")
        );
        assert_eq!(config.textures, TexturePaths::default());
    }

    #[test]
    fn explicit_null_disables_navigation() {
        let json = r#"{ "navigation": { "moon": null } }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.navigation.destination(CelestialBody::Moon), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = SceneConfig {
            star_spread: -1.0,
            ..default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidStarSpread(-1.0)));

        config.star_spread = 100.0;
        config.wheel_line_height = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWheelLineHeight(0.0))
        );

        config.wheel_line_height = 40.0;
        config.navigation.mars = Some(String::new());
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyDestination("mars".to_string()))
        );

        config.navigation.mars = None;
        config.textures.background.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyTexturePath("background".to_string()))
        );
    }

    #[test]
    fn star_count_is_capped() {
        let mut config = SceneConfig {
            star_count: 100_000_000,
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyStars {
                count: 100_000_000,
                max: MAX_STAR_COUNT,
            })
        );

        config.star_count = MAX_STAR_COUNT;
        assert!(config.validate().is_ok());
    }
}
