//! `hud.toml`: logging, HUD, container viewer and scenario sections.

use mc_hud::ContainerViewerSettings;
use mc_hud_item::item_stack::AIR;
use mc_hud_render::Color;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub hud: HudSection,
    #[serde(default)]
    pub container_viewer: ContainerViewerSection,
    #[serde(default)]
    pub player: PlayerSection,
    /// Remembered ender chest contents.
    #[serde(default)]
    pub ender_chest: Vec<SlotSpec>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HudSection {
    #[serde(default)]
    pub editor: bool,
    /// Frames to render before exiting. 0 = until Ctrl+C.
    #[serde(default = "default_frames")]
    pub frames: u64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_frames() -> u64 {
    1
}

fn default_frame_interval_ms() -> u64 {
    50
}

impl Default for HudSection {
    fn default() -> Self {
        Self {
            editor: false,
            frames: default_frames(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContainerViewerSection {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Overrides the ender chest tint.
    #[serde(default)]
    pub ender_chest_color: Option<Color>,
    #[serde(flatten)]
    pub settings: ContainerViewerSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerSection {
    #[serde(default)]
    pub held_slot: u8,
    #[serde(default)]
    pub main_hand: ItemSpec,
    #[serde(default)]
    pub off_hand: ItemSpec,
}

/// An item, optionally holding other items.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default = "default_count")]
    pub count: u16,
    #[serde(default)]
    pub items: Vec<SlotSpec>,
    /// Raw little-endian NBT user data. Takes precedence over `items`.
    #[serde(default)]
    pub user_data: Option<Vec<u8>>,
}

impl Default for ItemSpec {
    fn default() -> Self {
        Self {
            id: default_id(),
            count: default_count(),
            items: Vec::new(),
            user_data: None,
        }
    }
}

/// An item in a container slot.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotSpec {
    pub slot: u8,
    pub id: String,
    #[serde(default = "default_count")]
    pub count: u16,
}

fn default_id() -> String {
    AIR.into()
}

fn default_count() -> u16 {
    1
}

impl ClientConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
