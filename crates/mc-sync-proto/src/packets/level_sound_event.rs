//! LevelSoundEvent (0x7B), Server → Client.
//!
//! Plays a named sound at a position. Block sounds carry the block runtime ID
//! in `extra_data`.

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::types::{VarInt, VarUInt32, Vec3};

pub const SOUND_BREAK: u32 = 5;
pub const SOUND_PLACE: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct LevelSoundEvent {
    pub sound_type: u32,
    pub position: Vec3,
    pub extra_data: i32,
    pub entity_type: String,
    pub baby_mob: bool,
    pub disable_relative_volume: bool,
    /// Unique ID of the emitting actor, -1 for none.
    pub entity_unique_id: i64,
}

impl LevelSoundEvent {
    /// Sound emitted by a block rather than an actor.
    pub fn block(sound_type: u32, position: Vec3, block_runtime_id: u32) -> Self {
        Self {
            sound_type,
            position,
            extra_data: block_runtime_id as i32,
            entity_type: ":".to_string(),
            baby_mob: false,
            disable_relative_volume: false,
            entity_unique_id: -1,
        }
    }
}

impl ProtoEncode for LevelSoundEvent {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt32(self.sound_type).proto_encode(buf);
        self.position.proto_encode(buf);
        VarInt(self.extra_data).proto_encode(buf);
        write_string(buf, &self.entity_type);
        buf.put_u8(self.baby_mob as u8);
        buf.put_u8(self.disable_relative_volume as u8);
        buf.put_i64_le(self.entity_unique_id);
    }
}
