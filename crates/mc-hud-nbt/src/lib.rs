//! Little-endian NBT (Named Binary Tag) for Bedrock item user data.
//!
//! Container items (shulker boxes, chests picked with their contents) carry
//! their slot list in this form.

pub mod error;
mod io;
pub mod tag;

pub use error::NbtError;
pub use tag::{CompoundExt, NbtCompound, NbtRoot, NbtTag};

use bytes::{Buf, BufMut};

/// Read a little-endian NBT root compound from a buffer.
pub fn read_nbt_le(buf: &mut impl Buf) -> Result<NbtRoot, NbtError> {
    io::read_root(buf)
}

/// Write a little-endian NBT root compound to a buffer.
pub fn write_nbt_le(buf: &mut impl BufMut, root: &NbtRoot) {
    io::write_root(buf, root)
}
