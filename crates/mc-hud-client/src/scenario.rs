//! Builds the game state the preview renders from the config.

use mc_hud_game::inventory::{CONTAINER_INVENTORY, CONTAINER_OFFHAND, HOTBAR_SLOTS};
use mc_hud_game::{EnderChestMemory, PlayerInventory};
use mc_hud_item::ItemStack;
use mc_hud_nbt::{write_nbt_le, NbtCompound, NbtError, NbtRoot, NbtTag};
use tracing::{debug, warn};

use crate::config::{ItemSpec, PlayerSection, SlotSpec};

impl SlotSpec {
    pub fn to_stack(&self) -> ItemStack {
        ItemStack::new(self.id.as_str(), self.count)
    }
}

impl ItemSpec {
    /// The stack as the client receives it: user data arrives as
    /// little-endian NBT, either given raw or built from `items`.
    pub fn to_stack(&self) -> Result<ItemStack, NbtError> {
        let stack = ItemStack::new(self.id.as_str(), self.count);
        let data = match &self.user_data {
            Some(raw) => raw.clone(),
            None if self.items.is_empty() => return Ok(stack),
            None => self.items_user_data(),
        };
        debug!(item = %self.id, bytes = data.len(), "decoding item user data");
        stack.with_user_data(&data)
    }

    /// `items` encoded as an `Items` list under an unnamed root.
    fn items_user_data(&self) -> Vec<u8> {
        let items = self
            .items
            .iter()
            .map(|s| NbtTag::Compound(s.to_stack().to_slot_entry(s.slot)))
            .collect();
        let mut tag = NbtCompound::new();
        tag.insert("Items".to_string(), NbtTag::List(items));

        let mut buf = Vec::new();
        write_nbt_le(&mut buf, &NbtRoot::new("", tag));
        buf
    }
}

impl PlayerSection {
    pub fn inventory(&self) -> Result<PlayerInventory, NbtError> {
        let mut inventory = PlayerInventory::new();
        let held_slot = if self.held_slot < HOTBAR_SLOTS {
            self.held_slot
        } else {
            warn!(held_slot = self.held_slot, "held slot outside the hotbar, using 0");
            0
        };
        inventory.select_hotbar(held_slot);
        inventory.set_slot(CONTAINER_INVENTORY, held_slot, self.main_hand.to_stack()?);
        inventory.set_slot(CONTAINER_OFFHAND, 0, self.off_hand.to_stack()?);
        Ok(inventory)
    }
}

pub fn ender_chest_memory(slots: &[SlotSpec]) -> EnderChestMemory {
    EnderChestMemory::with_items(slots.iter().map(|s| (s.slot as usize, s.to_stack())))
}
