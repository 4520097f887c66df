//! Client-side game state the HUD reads: the player's inventory and
//! remembered ender chest contents.

pub mod contents;
pub mod ender_chest;
pub mod inventory;

pub use contents::GameContents;
pub use ender_chest::EnderChestMemory;
pub use inventory::{PlayerHands, PlayerInventory};
