//! Respawn (0x2D), Client → Server.
//!
//! The client sends state 2 once the player clicked respawn.

use bytes::Buf;

use crate::codec::{ensure_remaining, ProtoDecode};
use crate::error::ProtoError;
use crate::types::{VarUInt64, Vec3};

pub const STATE_SEARCHING_FOR_SPAWN: u8 = 0;
pub const STATE_READY_TO_SPAWN: u8 = 1;
pub const STATE_CLIENT_READY_TO_SPAWN: u8 = 2;

/// Respawn packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Respawn {
    pub position: Vec3,
    pub state: u8,
    pub runtime_entity_id: u64,
}

impl ProtoDecode for Respawn {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let position = Vec3::proto_decode(buf)?;
        ensure_remaining(buf, 1)?;
        let state = buf.get_u8();
        let runtime_entity_id = VarUInt64::proto_decode(buf)?.0;
        Ok(Self {
            position,
            state,
            runtime_entity_id,
        })
    }
}
