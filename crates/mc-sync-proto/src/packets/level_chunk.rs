//! LevelChunk (0x3A), Server → Client.

use bytes::{BufMut, Bytes};

use crate::codec::ProtoEncode;
use crate::types::{VarInt, VarUInt32};

/// Sends a full chunk column to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChunk {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub dimension_id: i32,
    pub sub_chunk_count: u32,
    pub cache_enabled: bool,
    /// Pre-serialized payload: sub-chunks, 2D data, block entities.
    pub payload: Bytes,
}

impl ProtoEncode for LevelChunk {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.chunk_x).proto_encode(buf);
        VarInt(self.chunk_z).proto_encode(buf);
        VarInt(self.dimension_id).proto_encode(buf);
        VarUInt32(self.sub_chunk_count).proto_encode(buf);
        buf.put_u8(self.cache_enabled as u8);
        // Payload as string: VarUInt32(length) + bytes
        VarUInt32(self.payload.len() as u32).proto_encode(buf);
        buf.put_slice(&self.payload);
    }
}
