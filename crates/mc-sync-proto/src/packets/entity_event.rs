//! EntityEvent (0x1B), Server → Client.
//!
//! Notifies clients of entity events: hurt animation, death, arm swing.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, VarUInt64};

/// Hurt animation event.
pub const EVENT_HURT: u8 = 2;
/// Death event.
pub const EVENT_DEATH: u8 = 3;
/// Arm swing of a non-player entity.
pub const EVENT_ARM_SWING: u8 = 4;

/// EntityEvent packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEvent {
    pub entity_runtime_id: u64,
    pub event_id: u8,
    pub data: i32,
}

impl EntityEvent {
    pub fn new(entity_runtime_id: u64, event_id: u8) -> Self {
        Self {
            entity_runtime_id,
            event_id,
            data: 0,
        }
    }

    pub fn hurt(entity_runtime_id: u64) -> Self {
        Self::new(entity_runtime_id, EVENT_HURT)
    }

    pub fn death(entity_runtime_id: u64) -> Self {
        Self::new(entity_runtime_id, EVENT_DEATH)
    }

    pub fn arm_swing(entity_runtime_id: u64) -> Self {
        Self::new(entity_runtime_id, EVENT_ARM_SWING)
    }
}

impl ProtoEncode for EntityEvent {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        buf.put_u8(self.event_id);
        VarInt(self.data).proto_encode(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn encode_hurt() {
        let mut buf = BytesMut::new();
        EntityEvent::hurt(5).proto_encode(&mut buf);
        assert_eq!(&buf[..], &[5, EVENT_HURT, 0]);
    }

    #[test]
    fn event_ids() {
        assert_eq!(EntityEvent::death(1).event_id, 3);
        assert_eq!(EntityEvent::arm_swing(1).event_id, 4);
    }
}
