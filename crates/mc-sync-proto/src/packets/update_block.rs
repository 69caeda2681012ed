//! UpdateBlock (0x15), Server → Client.
//!
//! Sent when a single block changes in the world.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{BlockPos, VarUInt32};

pub const FLAG_NEIGHBOURS: u32 = 0x01;
pub const FLAG_NETWORK: u32 = 0x02;

/// UpdateBlock packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBlock {
    pub position: BlockPos,
    pub runtime_id: u32,
    pub flags: u32,
    pub layer: u32,
}

impl UpdateBlock {
    /// Network-only update on the default layer.
    pub fn new(position: BlockPos, runtime_id: u32) -> Self {
        Self {
            position,
            runtime_id,
            flags: FLAG_NETWORK,
            layer: 0,
        }
    }
}

impl ProtoEncode for UpdateBlock {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        self.position.proto_encode(buf);
        VarUInt32(self.runtime_id).proto_encode(buf);
        VarUInt32(self.flags).proto_encode(buf);
        VarUInt32(self.layer).proto_encode(buf);
    }
}
