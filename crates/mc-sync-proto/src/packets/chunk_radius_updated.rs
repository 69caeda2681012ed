//! ChunkRadiusUpdated (0x46), Server → Client.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::VarInt;

/// Tells the client the accepted chunk render distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRadiusUpdated {
    pub chunk_radius: i32,
}

impl ProtoEncode for ChunkRadiusUpdated {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.chunk_radius).proto_encode(buf);
    }
}
