//! Animate (0x2C), Server → Client.
//!
//! Broadcasts a player's arm swing to other players.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, VarUInt64};

/// Arm swing action.
pub const ACTION_SWING_ARM: i32 = 1;

/// Animate packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animate {
    pub action_type: i32,
    pub entity_runtime_id: u64,
}

impl Animate {
    pub fn swing_arm(entity_runtime_id: u64) -> Self {
        Self {
            action_type: ACTION_SWING_ARM,
            entity_runtime_id,
        }
    }
}

impl ProtoEncode for Animate {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.action_type).proto_encode(buf);
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
    }
}
