//! MoveActorAbsolute (0x10), Server → Client.
//!
//! Updates the absolute position and rotation of a non-player entity.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarUInt64, Vec3};

pub const FLAG_ON_GROUND: u16 = 0x01;
pub const FLAG_TELEPORT: u16 = 0x02;

/// MoveActorAbsolute packet.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveActorAbsolute {
    pub entity_runtime_id: u64,
    /// Flags: bit 0 = on_ground, bit 1 = teleport.
    pub flags: u16,
    pub position: Vec3,
    /// Pitch in degrees (encoded as compressed byte on wire).
    pub pitch: f32,
    /// Yaw in degrees (encoded as compressed byte on wire).
    pub yaw: f32,
    /// Head yaw in degrees (encoded as compressed byte on wire).
    pub head_yaw: f32,
}

impl MoveActorAbsolute {
    /// Compress an angle (0..360) to a single byte.
    fn angle_to_byte(angle: f32) -> u8 {
        ((angle % 360.0 + 360.0) % 360.0 * (256.0 / 360.0)) as u8
    }

    /// Create a normal (non-teleport) move packet.
    pub fn normal(runtime_id: u64, position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            entity_runtime_id: runtime_id,
            flags: 0,
            position,
            pitch,
            yaw,
            head_yaw: yaw,
        }
    }

    /// Create a move packet with the teleport flag set.
    pub fn teleport(runtime_id: u64, position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            flags: FLAG_TELEPORT,
            ..Self::normal(runtime_id, position, pitch, yaw)
        }
    }

    pub fn is_teleport(&self) -> bool {
        self.flags & FLAG_TELEPORT != 0
    }
}

impl ProtoEncode for MoveActorAbsolute {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        buf.put_u16_le(self.flags);
        self.position.proto_encode(buf);
        buf.put_u8(Self::angle_to_byte(self.pitch));
        buf.put_u8(Self::angle_to_byte(self.yaw));
        buf.put_u8(Self::angle_to_byte(self.head_yaw));
    }
}
