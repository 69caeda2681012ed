//! SubChunkRequest (0xAF), Client → Server.
//!
//! Asks for the sub-chunks at a list of offsets around a centre sub-chunk.

use bytes::Buf;

use crate::codec::{ensure_remaining, ProtoDecode};
use crate::error::ProtoError;
use crate::types::{SubChunkPos, VarInt};

/// Offset of a requested sub-chunk relative to the request centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubChunkOffset {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl SubChunkOffset {
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubChunkRequest {
    pub dimension: i32,
    pub position: SubChunkPos,
    pub offsets: Vec<SubChunkOffset>,
}

impl ProtoDecode for SubChunkRequest {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let dimension = VarInt::proto_decode(buf)?.0;
        let position = SubChunkPos::proto_decode(buf)?;
        ensure_remaining(buf, 4)?;
        let count = buf.get_u32_le() as usize;
        // Each offset is three bytes; check before allocating
        ensure_remaining(buf, count.saturating_mul(3))?;
        let mut offsets = Vec::with_capacity(count);
        for _ in 0..count {
            offsets.push(SubChunkOffset::new(
                buf.get_i8(),
                buf.get_i8(),
                buf.get_i8(),
            ));
        }
        Ok(Self {
            dimension,
            position,
            offsets,
        })
    }
}
