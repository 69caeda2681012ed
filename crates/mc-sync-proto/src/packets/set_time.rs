//! SetTime (0x0A), Server → Client.
//!
//! Synchronizes the world time (day/night cycle).

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::VarInt;

/// SetTime packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTime {
    /// World time in ticks.
    pub time: i32,
}

impl ProtoEncode for SetTime {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.time).proto_encode(buf);
    }
}
