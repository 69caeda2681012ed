//! RequestChunkRadius (0x45), Client → Server.

use bytes::Buf;

use crate::codec::{ensure_remaining, ProtoDecode};
use crate::error::ProtoError;
use crate::types::VarInt;

/// The client requests a specific chunk render distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestChunkRadius {
    pub chunk_radius: i32,
    /// Upper bound the client will accept.
    pub max_chunk_radius: u8,
}

impl ProtoDecode for RequestChunkRadius {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let chunk_radius = VarInt::proto_decode(buf)?.0;
        ensure_remaining(buf, 1)?;
        let max_chunk_radius = buf.get_u8();
        Ok(Self {
            chunk_radius,
            max_chunk_radius,
        })
    }
}
