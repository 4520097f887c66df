//! Remembered ender chest contents.
//!
//! The ender chest item carries no contents of its own; the only time the
//! client sees them is while an ender chest window is open. The memory
//! copies whatever the server sends for that window and keeps it after the
//! window closes.

use tracing::debug;

use mc_hud_item::{empty_slots, ContainerSlots, ItemStack, CONTAINER_SLOTS};

#[derive(Debug, Clone)]
pub struct EnderChestMemory {
    items: ContainerSlots,
    /// Window ID of the ender chest currently open, if any.
    open_window: Option<u8>,
}

impl Default for EnderChestMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl EnderChestMemory {
    pub fn new() -> Self {
        Self {
            items: empty_slots(),
            open_window: None,
        }
    }

    /// Seed the memory, e.g. from a saved session.
    pub fn with_items(items: impl IntoIterator<Item = (usize, ItemStack)>) -> Self {
        let mut memory = Self::new();
        for (slot, item) in items {
            if let Some(target) = memory.items.get_mut(slot) {
                *target = item;
            }
        }
        memory
    }

    /// A container window opened. Only ender chest windows are tracked.
    pub fn open(&mut self, window_id: u8, is_ender_chest: bool) {
        self.open_window = is_ender_chest.then_some(window_id);
        if is_ender_chest {
            debug!(window_id, "tracking ender chest window");
        }
    }

    /// Full contents of a window arrived.
    pub fn set_contents(&mut self, window_id: u8, items: &[ItemStack]) {
        if self.open_window != Some(window_id) {
            return;
        }
        for (slot, target) in self.items.iter_mut().enumerate() {
            *target = items.get(slot).cloned().unwrap_or_default();
        }
        debug!(window_id, items = self.item_count(), "ender chest contents updated");
    }

    /// A single slot of a window changed.
    pub fn set_slot(&mut self, window_id: u8, slot: usize, item: ItemStack) {
        if self.open_window != Some(window_id) || slot >= CONTAINER_SLOTS {
            return;
        }
        self.items[slot] = item;
    }

    pub fn close(&mut self, window_id: u8) {
        if self.open_window == Some(window_id) {
            self.open_window = None;
        }
    }

    pub fn items(&self) -> &ContainerSlots {
        &self.items
    }

    /// Number of non-empty slots.
    pub fn item_count(&self) -> usize {
        self.items.iter().filter(|s| !s.is_empty()).count()
    }
}
