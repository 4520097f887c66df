//! ItemStack type and its NBT slot-entry form.
//!
//! Represents an item held by the player or stored inside a container item.

use mc_hud_nbt::{read_nbt_le, CompoundExt, NbtCompound, NbtError, NbtTag};

/// Identifier of the empty item.
pub const AIR: &str = "minecraft:air";

/// A single item stack.
///
/// An empty `name`, [`AIR`], or `count == 0` means the slot is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemStack {
    /// Namespaced item identifier, e.g. `"minecraft:stone"`.
    pub name: String,
    /// Number of items in this stack (1-255 in practice).
    pub count: u16,
    /// Item damage/variant metadata.
    pub damage: u16,
    /// User data compound (custom name, enchantments, container contents).
    pub user_data: Option<NbtCompound>,
}

impl ItemStack {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a simple item stack with no user data.
    pub fn new(name: impl Into<String>, count: u16) -> Self {
        Self {
            name: name.into(),
            count,
            damage: 0,
            user_data: None,
        }
    }

    /// Attach decoded user data, replacing any previous compound.
    pub fn with_tag(mut self, tag: NbtCompound) -> Self {
        self.user_data = Some(tag);
        self
    }

    /// Attach user data from raw little-endian NBT, as sent alongside the item.
    pub fn with_user_data(mut self, data: &[u8]) -> Result<Self, NbtError> {
        let root = read_nbt_le(&mut &data[..])?;
        self.user_data = Some(root.compound);
        Ok(self)
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.name == AIR || self.count == 0
    }

    /// Whether this stack is the given item, ignoring count and data.
    pub fn is(&self, name: &str) -> bool {
        !self.is_empty() && self.name == name
    }

    /// Parse one entry of a container `Items` list.
    ///
    /// Returns the slot index and the stack, or `None` for entries that are
    /// malformed or hold nothing.
    pub fn from_slot_entry(entry: &NbtCompound) -> Option<(usize, Self)> {
        let slot = entry.byte("Slot")?;
        if slot < 0 {
            return None;
        }
        let name = entry.string("Name")?;
        let count = entry.byte("Count").unwrap_or(0) as u8;
        let damage = entry.short("Damage").unwrap_or(0);

        let stack = Self {
            name: name.to_string(),
            count: count as u16,
            damage: damage as u16,
            user_data: entry.compound("tag").cloned(),
        };
        if stack.is_empty() {
            return None;
        }
        Some((slot as usize, stack))
    }

    /// Build the `Items` list entry for this stack at `slot`.
    pub fn to_slot_entry(&self, slot: u8) -> NbtCompound {
        let mut c = NbtCompound::new();
        c.insert("Slot".to_string(), NbtTag::Byte(slot as i8));
        c.insert("Name".to_string(), NbtTag::String(self.name.clone()));
        c.insert("Count".to_string(), NbtTag::Byte(self.count.min(255) as u8 as i8));
        c.insert("Damage".to_string(), NbtTag::Short(self.damage as i16));
        if let Some(tag) = &self.user_data {
            c.insert("tag".to_string(), NbtTag::Compound(tag.clone()));
        }
        c
    }
}
