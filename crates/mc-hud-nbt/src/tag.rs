//! NBT tag types.

use std::collections::HashMap;

/// A compound tag: map of name -> tag.
pub type NbtCompound = HashMap<String, NbtTag>;

/// A named root compound. Item user data uses an empty root name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtRoot {
    pub name: String,
    pub compound: NbtCompound,
}

impl NbtRoot {
    pub fn new(name: impl Into<String>, compound: NbtCompound) -> Self {
        Self {
            name: name.into(),
            compound,
        }
    }
}

/// Any NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtTag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<NbtTag>),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtTag {
    /// Numeric tag type ID (1-12). TAG_End (0) has no value form.
    pub fn tag_type_id(&self) -> u8 {
        match self {
            NbtTag::Byte(_) => 1,
            NbtTag::Short(_) => 2,
            NbtTag::Int(_) => 3,
            NbtTag::Long(_) => 4,
            NbtTag::Float(_) => 5,
            NbtTag::Double(_) => 6,
            NbtTag::ByteArray(_) => 7,
            NbtTag::String(_) => 8,
            NbtTag::List(_) => 9,
            NbtTag::Compound(_) => 10,
            NbtTag::IntArray(_) => 11,
            NbtTag::LongArray(_) => 12,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            NbtTag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            NbtTag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            NbtTag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            NbtTag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtTag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NbtTag]> {
        match self {
            NbtTag::List(v) => Some(v),
            _ => None,
        }
    }
}

/// Typed lookups on a compound, so callers can chain `?` instead of
/// matching on every tag.
pub trait CompoundExt {
    fn byte(&self, name: &str) -> Option<i8>;
    fn short(&self, name: &str) -> Option<i16>;
    fn string(&self, name: &str) -> Option<&str>;
    fn list(&self, name: &str) -> Option<&[NbtTag]>;
    fn compound(&self, name: &str) -> Option<&NbtCompound>;
}

impl CompoundExt for NbtCompound {
    fn byte(&self, name: &str) -> Option<i8> {
        self.get(name).and_then(NbtTag::as_byte)
    }

    fn short(&self, name: &str) -> Option<i16> {
        self.get(name).and_then(NbtTag::as_short)
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(NbtTag::as_string)
    }

    fn list(&self, name: &str) -> Option<&[NbtTag]> {
        self.get(name).and_then(NbtTag::as_list)
    }

    fn compound(&self, name: &str) -> Option<&NbtCompound> {
        self.get(name).and_then(NbtTag::as_compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_type_ids() {
        assert_eq!(NbtTag::Byte(0).tag_type_id(), 1);
        assert_eq!(NbtTag::Short(0).tag_type_id(), 2);
        assert_eq!(NbtTag::String(String::new()).tag_type_id(), 8);
        assert_eq!(NbtTag::List(vec![]).tag_type_id(), 9);
        assert_eq!(NbtTag::Compound(NbtCompound::new()).tag_type_id(), 10);
        assert_eq!(NbtTag::LongArray(vec![]).tag_type_id(), 12);
    }

    #[test]
    fn compound_lookups_check_type() {
        let mut c = NbtCompound::new();
        c.insert("Slot".into(), NbtTag::Byte(4));
        c.insert("Name".into(), NbtTag::String("minecraft:stone".into()));
        c.insert("Damage".into(), NbtTag::Short(2));

        assert_eq!(c.byte("Slot"), Some(4));
        assert_eq!(c.string("Name"), Some("minecraft:stone"));
        assert_eq!(c.short("Damage"), Some(2));
        // Wrong type or missing key
        assert_eq!(c.short("Slot"), None);
        assert!(c.list("Items").is_none());
        assert!(c.compound("tag").is_none());
    }
}
