//! Reading the contents of container items.

use mc_hud_nbt::{CompoundExt, NbtTag};
use tracing::trace;

use crate::container::{ContainerKind, CONTAINER_SLOTS};
use crate::item_stack::ItemStack;

/// Fixed-size slot buffer for one container.
pub type ContainerSlots = [ItemStack; CONTAINER_SLOTS];

/// A fresh buffer of empty slots.
pub fn empty_slots() -> ContainerSlots {
    std::array::from_fn(|_| ItemStack::empty())
}

/// Access to what a container item holds.
pub trait ContainerContents {
    /// Whether `item` is a container holding at least one item.
    fn has_items(&self, item: &ItemStack) -> bool;

    /// Fill `slots` with the contents of `item` in row-major order.
    ///
    /// Every slot is overwritten; slots the container does not fill are left
    /// empty. Non-containers produce an all-empty buffer.
    fn items_in(&self, item: &ItemStack, slots: &mut ContainerSlots);
}

/// Contents stored in the item's own user data (`Items` list).
///
/// Ender chests always read as empty here; their contents are player state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemTagContents;

impl ContainerContents for ItemTagContents {
    fn has_items(&self, item: &ItemStack) -> bool {
        match ContainerKind::of(item) {
            Some(kind) if kind.stores_items_in_item() => {
                item_entries(item).any(|(slot, _)| slot < CONTAINER_SLOTS)
            }
            _ => false,
        }
    }

    fn items_in(&self, item: &ItemStack, slots: &mut ContainerSlots) {
        slots.fill(ItemStack::empty());
        match ContainerKind::of(item) {
            Some(kind) if kind.stores_items_in_item() => {}
            _ => return,
        }
        for (slot, stack) in item_entries(item) {
            match slots.get_mut(slot) {
                Some(target) => *target = stack,
                None => trace!(slot, item = %item.name, "ignoring out-of-range container slot"),
            }
        }
    }
}

/// Non-empty `(slot, stack)` entries of the item's `Items` list.
fn item_entries(item: &ItemStack) -> impl Iterator<Item = (usize, ItemStack)> + '_ {
    item.user_data
        .as_ref()
        .and_then(|tag| tag.list("Items"))
        .unwrap_or_default()
        .iter()
        .filter_map(NbtTag::as_compound)
        .filter_map(ItemStack::from_slot_entry)
}
