//! Local player inventory.
//!
//! Mirrors the 36-slot main inventory and the offhand slot as the server
//! sends them, plus the selected hotbar slot.

use mc_hud_item::ItemStack;

/// Bedrock container IDs.
pub const CONTAINER_INVENTORY: u8 = 0;
pub const CONTAINER_OFFHAND: u8 = 124;

/// Number of main inventory slots. Slots 0-8 are the hotbar.
pub const MAIN_SLOTS: usize = 36;
/// Number of hotbar slots.
pub const HOTBAR_SLOTS: u8 = 9;

static EMPTY_HAND: ItemStack = ItemStack {
    name: String::new(),
    count: 0,
    damage: 0,
    user_data: None,
};

/// What the controlled character is holding.
pub trait PlayerHands {
    fn off_hand(&self) -> &ItemStack;
    fn main_hand(&self) -> &ItemStack;
}

/// Player inventory as seen by the client.
#[derive(Debug, Clone)]
pub struct PlayerInventory {
    /// Main inventory: 36 slots (0-35). Slots 0-8 = hotbar.
    pub main: Vec<ItemStack>,
    /// Offhand: 1 slot.
    pub offhand: ItemStack,
    /// Currently selected hotbar slot (0-8).
    held_slot: u8,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            main: (0..MAIN_SLOTS).map(|_| ItemStack::empty()).collect(),
            offhand: ItemStack::empty(),
            held_slot: 0,
        }
    }

    /// Get a reference to the item in a specific slot.
    pub fn get_slot(&self, container_id: u8, slot: u8) -> Option<&ItemStack> {
        match container_id {
            CONTAINER_INVENTORY => self.main.get(slot as usize),
            CONTAINER_OFFHAND => Some(&self.offhand),
            _ => None,
        }
    }

    /// Set the item in a specific slot. Unknown containers and slots are ignored.
    pub fn set_slot(&mut self, container_id: u8, slot: u8, item: ItemStack) {
        match container_id {
            CONTAINER_INVENTORY => {
                if let Some(s) = self.main.get_mut(slot as usize) {
                    *s = item;
                }
            }
            CONTAINER_OFFHAND => self.offhand = item,
            _ => {}
        }
    }

    /// Replace a whole container's contents (InventoryContent).
    pub fn set_contents(&mut self, container_id: u8, items: Vec<ItemStack>) {
        match container_id {
            CONTAINER_INVENTORY => {
                self.main = items;
                self.main.resize_with(MAIN_SLOTS, ItemStack::empty);
            }
            CONTAINER_OFFHAND => {
                self.offhand = items.into_iter().next().unwrap_or_default();
            }
            _ => {}
        }
    }

    pub fn held_slot(&self) -> u8 {
        self.held_slot
    }

    /// Select a hotbar slot. Values past the hotbar are ignored.
    pub fn select_hotbar(&mut self, slot: u8) {
        if slot < HOTBAR_SLOTS {
            self.held_slot = slot;
        }
    }

    /// Get the currently held item (hotbar slot). Empty if `main` has been
    /// cut short below the held slot.
    pub fn held_item(&self) -> &ItemStack {
        self.main.get(self.held_slot as usize).unwrap_or(&EMPTY_HAND)
    }
}

impl PlayerHands for PlayerInventory {
    fn off_hand(&self) -> &ItemStack {
        &self.offhand
    }

    fn main_hand(&self) -> &ItemStack {
        self.held_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_inventory_is_empty() {
        let inv = PlayerInventory::new();
        assert_eq!(inv.main.len(), 36);
        assert!(inv.main.iter().all(|s| s.is_empty()));
        assert!(inv.offhand.is_empty());
        assert_eq!(inv.held_slot(), 0);
    }

    #[test]
    fn get_set_slot() {
        let mut inv = PlayerInventory::new();
        inv.set_slot(CONTAINER_INVENTORY, 0, ItemStack::new("minecraft:stone", 64));
        let stored = inv.get_slot(CONTAINER_INVENTORY, 0).unwrap();
        assert_eq!(stored.name, "minecraft:stone");
        assert_eq!(stored.count, 64);
        assert!(inv.get_slot(CONTAINER_INVENTORY, 36).is_none());
        assert!(inv.get_slot(42, 0).is_none());
    }

    #[test]
    fn get_set_offhand() {
        let mut inv = PlayerInventory::new();
        inv.set_slot(CONTAINER_OFFHAND, 0, ItemStack::new("minecraft:totem_of_undying", 1));
        assert_eq!(inv.off_hand().name, "minecraft:totem_of_undying");
    }

    #[test]
    fn main_hand_follows_held_slot() {
        let mut inv = PlayerInventory::new();
        inv.set_slot(CONTAINER_INVENTORY, 3, ItemStack::new("minecraft:chest", 1));
        assert!(inv.main_hand().is_empty());
        inv.select_hotbar(3);
        assert_eq!(inv.main_hand().name, "minecraft:chest");
    }

    #[test]
    fn select_past_hotbar_is_ignored() {
        let mut inv = PlayerInventory::new();
        inv.select_hotbar(4);
        inv.select_hotbar(9);
        assert_eq!(inv.held_slot(), 4);
    }

    #[test]
    fn set_contents_pads_main_inventory() {
        let mut inv = PlayerInventory::new();
        inv.set_contents(CONTAINER_INVENTORY, vec![ItemStack::new("minecraft:dirt", 2)]);
        assert_eq!(inv.main.len(), 36);
        assert_eq!(inv.main[0].count, 2);

        inv.set_contents(CONTAINER_OFFHAND, vec![]);
        assert!(inv.offhand.is_empty());
    }

    #[test]
    fn short_main_inventory_holds_nothing() {
        let mut inv = PlayerInventory::new();
        inv.set_slot(CONTAINER_INVENTORY, 5, ItemStack::new("minecraft:chest", 1));
        inv.select_hotbar(5);
        inv.main.truncate(3);
        assert!(inv.held_item().is_empty());
        assert!(inv.main_hand().is_empty());

        inv.main.clear();
        assert!(inv.main_hand().is_empty());
    }
}
