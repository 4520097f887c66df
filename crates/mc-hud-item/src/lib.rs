//! Items and container items: stacks, container classification and contents.

pub mod container;
pub mod contents;
pub mod item_stack;

pub use container::{ContainerKind, DyeColor, CONTAINER_COLUMNS, CONTAINER_ROWS, CONTAINER_SLOTS};
pub use contents::{empty_slots, ContainerContents, ContainerSlots, ItemTagContents};
pub use item_stack::ItemStack;
