//! MovePlayer (0x13), Server → Client.
//!
//! Broadcast a player's position to other players, or teleport a player.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarUInt64, Vec3};

/// Movement mode for MovePlayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MoveMode {
    /// Regular position update (broadcast to others).
    Normal = 0,
    /// Force position correction.
    Reset = 1,
    /// Teleport with cause information.
    Teleport = 2,
    /// Rotation-only update.
    Rotation = 3,
}

/// MovePlayer packet.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlayer {
    pub runtime_entity_id: u64,
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub mode: MoveMode,
    pub on_ground: bool,
    pub ridden_entity_runtime_id: u64,
    /// Only written when mode == Teleport.
    pub teleport_cause: i32,
    /// Only written when mode == Teleport.
    pub teleport_entity_type: i32,
    pub tick: u64,
}

impl MovePlayer {
    fn with_mode(runtime_entity_id: u64, position: Vec3, pitch: f32, yaw: f32, mode: MoveMode) -> Self {
        Self {
            runtime_entity_id,
            position,
            pitch,
            yaw,
            head_yaw: yaw,
            mode,
            on_ground: false,
            ridden_entity_runtime_id: 0,
            teleport_cause: 0,
            teleport_entity_type: 0,
            tick: 0,
        }
    }

    /// Create a Normal (broadcast) packet. Head yaw follows yaw.
    pub fn normal(runtime_entity_id: u64, position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self::with_mode(runtime_entity_id, position, pitch, yaw, MoveMode::Normal)
    }

    /// Create a Teleport packet.
    pub fn teleport(runtime_entity_id: u64, position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self::with_mode(runtime_entity_id, position, pitch, yaw, MoveMode::Teleport)
    }
}

impl ProtoEncode for MovePlayer {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt64(self.runtime_entity_id).proto_encode(buf);
        self.position.proto_encode(buf);
        buf.put_f32_le(self.pitch);
        buf.put_f32_le(self.yaw);
        buf.put_f32_le(self.head_yaw);
        buf.put_u8(self.mode as u8);
        buf.put_u8(self.on_ground as u8);
        VarUInt64(self.ridden_entity_runtime_id).proto_encode(buf);
        if self.mode == MoveMode::Teleport {
            buf.put_i32_le(self.teleport_cause);
            buf.put_i32_le(self.teleport_entity_type);
        }
        VarUInt64(self.tick).proto_encode(buf);
    }
}
