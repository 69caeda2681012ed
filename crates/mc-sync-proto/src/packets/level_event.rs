//! LevelEvent (0x19), Server → Client.
//!
//! Generic world event: particles, sounds, block effects, etc.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, Vec3};

/// Simple click sound.
pub const SOUND_CLICK: i32 = 1000;
/// Event ID for block-destroy particles. Data = block runtime ID.
pub const PARTICLE_DESTROY: i32 = 2001;
/// Block-cracking particles. Data = block runtime ID | face << 24.
pub const PARTICLE_PUNCH_BLOCK: i32 = 2014;

/// LevelEvent packet.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEvent {
    pub event_id: i32,
    pub position: Vec3,
    pub data: i32,
}

impl LevelEvent {
    pub fn destroy_block(position: Vec3, block_runtime_id: u32) -> Self {
        Self {
            event_id: PARTICLE_DESTROY,
            position,
            data: block_runtime_id as i32,
        }
    }

    pub fn punch_block(position: Vec3, block_runtime_id: u32, face: u8) -> Self {
        Self {
            event_id: PARTICLE_PUNCH_BLOCK,
            position,
            data: (block_runtime_id | u32::from(face) << 24) as i32,
        }
    }

    pub fn click(position: Vec3) -> Self {
        Self {
            event_id: SOUND_CLICK,
            position,
            data: 0,
        }
    }
}

impl ProtoEncode for LevelEvent {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.event_id).proto_encode(buf);
        self.position.proto_encode(buf);
        VarInt(self.data).proto_encode(buf);
    }
}
