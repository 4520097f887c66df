//! Container contents as the game client knows them.

use mc_hud_item::{ContainerContents, ContainerKind, ContainerSlots, ItemStack, ItemTagContents};

use crate::ender_chest::EnderChestMemory;

/// Reads shulker boxes and chests from their item data and ender chests
/// from the remembered player contents.
#[derive(Debug, Clone, Copy)]
pub struct GameContents<'a> {
    ender_chest: &'a EnderChestMemory,
}

impl<'a> GameContents<'a> {
    pub fn new(ender_chest: &'a EnderChestMemory) -> Self {
        Self { ender_chest }
    }
}

impl ContainerContents for GameContents<'_> {
    fn has_items(&self, item: &ItemStack) -> bool {
        match ContainerKind::of(item) {
            Some(ContainerKind::EnderChest) => self.ender_chest.item_count() > 0,
            _ => ItemTagContents.has_items(item),
        }
    }

    fn items_in(&self, item: &ItemStack, slots: &mut ContainerSlots) {
        match ContainerKind::of(item) {
            Some(ContainerKind::EnderChest) => slots.clone_from(self.ender_chest.items()),
            _ => ItemTagContents.items_in(item, slots),
        }
    }
}
