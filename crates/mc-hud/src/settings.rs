//! Container viewer settings.

use serde::Deserialize;

use crate::error::SettingsError;

/// Smallest allowed scale.
pub const SCALE_MIN: f64 = 1.0;
/// Upper end of the scale slider in the settings UI. Larger values are
/// accepted when typed in.
pub const SCALE_SLIDER_MAX: f64 = 5.0;

/// Background skin of the container viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    None,
    #[default]
    Texture,
    Outline,
    Flat,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::None,
        Background::Texture,
        Background::Outline,
        Background::Flat,
    ];

    /// Unscaled `(width, height)` of the skin.
    pub const fn size(self) -> (f64, f64) {
        match self {
            Background::Texture => (176.0, 67.0),
            Background::None | Background::Outline | Background::Flat => (162.0, 54.0),
        }
    }

    /// Unscaled offset of the first slot's icon from the box corner.
    pub const fn slot_origin(self) -> (f64, f64) {
        match self {
            Background::Texture => (8.0, 7.0),
            Background::None | Background::Outline | Background::Flat => (1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerViewerSettings {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub background: Background,
    #[serde(default = "default_background_opacity")]
    pub background_opacity: u8,
    /// Show the ender chest when no other container is held.
    #[serde(default)]
    pub echest_when_empty: bool,
}

fn default_scale() -> f64 {
    2.0
}

fn default_background_opacity() -> u8 {
    255
}

impl Default for ContainerViewerSettings {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            background: Background::default(),
            background_opacity: default_background_opacity(),
            echest_when_empty: false,
        }
    }
}

impl ContainerViewerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.scale.is_finite() || self.scale < SCALE_MIN {
            return Err(SettingsError::InvalidScale {
                min: SCALE_MIN,
                got: self.scale,
            });
        }
        Ok(())
    }
}
