//! Entity metadata (actor data) dictionary.
//!
//! A metadata record is a list of `(key, type, value)` entries sorted by key.
//! Key 0 holds the entity flag bitfield as a long.

use std::collections::BTreeMap;

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::types::{VarInt, VarLong, VarUInt32};

/// Metadata keys.
pub mod key {
    pub const FLAGS: u32 = 0;
    pub const NAMETAG: u32 = 4;
    pub const AIR_SUPPLY: u32 = 7;
    pub const SCALE: u32 = 23;
    pub const MAX_AIR_SUPPLY: u32 = 42;
    pub const BOUNDING_BOX_WIDTH: u32 = 38;
    pub const BOUNDING_BOX_HEIGHT: u32 = 39;
}

/// Bit indices inside the `FLAGS` entry.
pub mod flag {
    pub const ON_FIRE: u32 = 0;
    pub const SNEAKING: u32 = 1;
    pub const SPRINTING: u32 = 3;
    pub const INVISIBLE: u32 = 5;
    pub const CAN_CLIMB: u32 = 19;
    pub const BREATHING: u32 = 35;
    pub const HAS_COLLISION: u32 = 47;
    pub const AFFECTED_BY_GRAVITY: u32 = 48;
}

/// Entity metadata value types.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Byte(u8),
    Short(i16),
    Int(i32),
    Float(f32),
    String(String),
    Long(i64),
}

impl MetadataValue {
    /// Wire data type ID (0=byte, 1=short, 2=int, 3=float, 4=string, 7=long).
    pub fn data_type(&self) -> u32 {
        match self {
            MetadataValue::Byte(_) => 0,
            MetadataValue::Short(_) => 1,
            MetadataValue::Int(_) => 2,
            MetadataValue::Float(_) => 3,
            MetadataValue::String(_) => 4,
            MetadataValue::Long(_) => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityMetadata {
    entries: BTreeMap<u32, MetadataValue>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline record sent for every entity: gravity, collision and climbing
    /// flags, full air supply and unit scale.
    pub fn default_entity() -> Self {
        let mut m = Self::new();
        m.set(key::FLAGS, MetadataValue::Long(0));
        m.set_flag(flag::AFFECTED_BY_GRAVITY);
        m.set_flag(flag::HAS_COLLISION);
        m.set_flag(flag::CAN_CLIMB);
        m.set(key::AIR_SUPPLY, MetadataValue::Short(300));
        m.set(key::MAX_AIR_SUPPLY, MetadataValue::Short(300));
        m.set(key::SCALE, MetadataValue::Float(1.0));
        m
    }

    /// Player record: the entity baseline plus name tag and player hitbox.
    pub fn default_player(display_name: &str) -> Self {
        let mut m = Self::default_entity();
        m.set(key::NAMETAG, MetadataValue::String(display_name.to_string()));
        m.set(key::BOUNDING_BOX_WIDTH, MetadataValue::Float(0.6));
        m.set(key::BOUNDING_BOX_HEIGHT, MetadataValue::Float(1.8));
        m
    }

    pub fn set(&mut self, key: u32, value: MetadataValue) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: u32) -> Option<&MetadataValue> {
        self.entries.get(&key)
    }

    /// Set one bit of the `FLAGS` long, creating the entry if missing.
    pub fn set_flag(&mut self, bit: u32) {
        let entry = self
            .entries
            .entry(key::FLAGS)
            .or_insert(MetadataValue::Long(0));
        match entry {
            MetadataValue::Long(v) => *v |= 1i64 << bit,
            other => *other = MetadataValue::Long(1i64 << bit),
        }
    }

    pub fn has_flag(&self, bit: u32) -> bool {
        match self.entries.get(&key::FLAGS) {
            Some(MetadataValue::Long(v)) => v & (1i64 << bit) != 0,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wire format: `VarUInt32(count)` then per entry `VarUInt32(key)`,
/// `VarUInt32(type)` and the typed value.
impl ProtoEncode for EntityMetadata {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt32(self.entries.len() as u32).proto_encode(buf);
        for (key, value) in &self.entries {
            VarUInt32(*key).proto_encode(buf);
            VarUInt32(value.data_type()).proto_encode(buf);
            match value {
                MetadataValue::Byte(v) => buf.put_u8(*v),
                MetadataValue::Short(v) => buf.put_i16_le(*v),
                MetadataValue::Int(v) => VarInt(*v).proto_encode(buf),
                MetadataValue::Float(v) => buf.put_f32_le(*v),
                MetadataValue::String(v) => write_string(buf, v),
                MetadataValue::Long(v) => VarLong(*v).proto_encode(buf),
            }
        }
    }
}
