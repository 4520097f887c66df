//! Tint colours for container backgrounds.

use mc_hud_item::{ContainerKind, ItemStack};
use mc_hud_render::Color;

/// Picks the tint a container's background is drawn with.
pub trait ColorResolver {
    fn color_of(&self, container: &ItemStack) -> Color;
}

/// Dyed shulker boxes use their dye colour, the ender chest a fixed colour,
/// everything else is untinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerColors {
    pub ender_chest: Color,
}

impl ContainerColors {
    pub const DEFAULT_ENDER_CHEST: Color = Color::rgb(0, 50, 50);
}

impl Default for ContainerColors {
    fn default() -> Self {
        Self {
            ender_chest: Self::DEFAULT_ENDER_CHEST,
        }
    }
}

impl ColorResolver for ContainerColors {
    fn color_of(&self, container: &ItemStack) -> Color {
        match ContainerKind::of(container) {
            Some(ContainerKind::ShulkerBox(Some(dye))) => Color::from(dye.rgb()),
            Some(ContainerKind::EnderChest) => self.ender_chest,
            _ => Color::WHITE,
        }
    }
}
