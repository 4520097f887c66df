//! Container item classification.
//!
//! A container item is an item that holds its own list of items: shulker
//! boxes, plus chests and barrels picked up with their contents. Ender
//! chests count as containers too, but their contents belong to the player
//! rather than to the item.

use crate::item_stack::ItemStack;

/// Number of slots in a single-chest sized container (3 rows of 9).
pub const CONTAINER_SLOTS: usize = 27;
/// Slots per container row.
pub const CONTAINER_COLUMNS: usize = 9;
/// Rows per container.
pub const CONTAINER_ROWS: usize = 3;

pub const ENDER_CHEST: &str = "minecraft:ender_chest";
pub const CHEST: &str = "minecraft:chest";
pub const TRAPPED_CHEST: &str = "minecraft:trapped_chest";
pub const BARREL: &str = "minecraft:barrel";
pub const UNDYED_SHULKER_BOX: &str = "minecraft:undyed_shulker_box";

/// The sixteen dye colours, in Bedrock's aux-value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::Orange,
        DyeColor::Magenta,
        DyeColor::LightBlue,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Pink,
        DyeColor::Gray,
        DyeColor::LightGray,
        DyeColor::Cyan,
        DyeColor::Purple,
        DyeColor::Blue,
        DyeColor::Brown,
        DyeColor::Green,
        DyeColor::Red,
        DyeColor::Black,
    ];

    /// Identifier prefix, e.g. `light_blue` in `minecraft:light_blue_shulker_box`.
    pub fn name(self) -> &'static str {
        match self {
            DyeColor::White => "white",
            DyeColor::Orange => "orange",
            DyeColor::Magenta => "magenta",
            DyeColor::LightBlue => "light_blue",
            DyeColor::Yellow => "yellow",
            DyeColor::Lime => "lime",
            DyeColor::Pink => "pink",
            DyeColor::Gray => "gray",
            DyeColor::LightGray => "light_gray",
            DyeColor::Cyan => "cyan",
            DyeColor::Purple => "purple",
            DyeColor::Blue => "blue",
            DyeColor::Brown => "brown",
            DyeColor::Green => "green",
            DyeColor::Red => "red",
            DyeColor::Black => "black",
        }
    }

    /// Diffuse colour as `0xRRGGBB`.
    pub fn rgb(self) -> u32 {
        match self {
            DyeColor::White => 0xF9FFFE,
            DyeColor::Orange => 0xF9801D,
            DyeColor::Magenta => 0xC74EBD,
            DyeColor::LightBlue => 0x3AB3DA,
            DyeColor::Yellow => 0xFED83D,
            DyeColor::Lime => 0x80C71F,
            DyeColor::Pink => 0xF38BAA,
            DyeColor::Gray => 0x474F52,
            DyeColor::LightGray => 0x9D9D97,
            DyeColor::Cyan => 0x169C9C,
            DyeColor::Purple => 0x8932B8,
            DyeColor::Blue => 0x3C44AA,
            DyeColor::Brown => 0x835432,
            DyeColor::Green => 0x5E7C16,
            DyeColor::Red => 0xB02E26,
            DyeColor::Black => 0x1D1D21,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Kind of container an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Shulker box; `None` is the undyed variant.
    ShulkerBox(Option<DyeColor>),
    EnderChest,
    Chest,
    TrappedChest,
    Barrel,
}

impl ContainerKind {
    /// Classify an item. Returns `None` for empty slots and non-containers.
    pub fn of(item: &ItemStack) -> Option<Self> {
        if item.is_empty() {
            return None;
        }
        Self::from_id(&item.name)
    }

    /// Classify an item identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            ENDER_CHEST => Some(ContainerKind::EnderChest),
            CHEST => Some(ContainerKind::Chest),
            TRAPPED_CHEST => Some(ContainerKind::TrappedChest),
            BARREL => Some(ContainerKind::Barrel),
            UNDYED_SHULKER_BOX => Some(ContainerKind::ShulkerBox(None)),
            _ => {
                let color = id
                    .strip_prefix("minecraft:")?
                    .strip_suffix("_shulker_box")?;
                DyeColor::from_name(color).map(|c| ContainerKind::ShulkerBox(Some(c)))
            }
        }
    }

    /// Whether the contents are stored on the item itself.
    pub fn stores_items_in_item(self) -> bool {
        !matches!(self, ContainerKind::EnderChest)
    }
}
