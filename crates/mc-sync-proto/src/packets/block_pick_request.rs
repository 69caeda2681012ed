//! BlockPickRequest (0x22), Client → Server.
//!
//! Middle-click on a block: the client wants the block as an item.

use bytes::Buf;

use crate::codec::{ensure_remaining, read_bool, ProtoDecode};
use crate::error::ProtoError;
use crate::types::{BlockPos, VarInt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPickRequest {
    pub position: BlockPos,
    /// Whether block entity data should be copied onto the item.
    pub add_block_nbt: bool,
    pub hotbar_slot: u8,
}

impl ProtoDecode for BlockPickRequest {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        // All three axes are signed here, unlike the usual block position
        let x = VarInt::proto_decode(buf)?.0;
        let y = VarInt::proto_decode(buf)?.0;
        let z = VarInt::proto_decode(buf)?.0;
        let add_block_nbt = read_bool(buf)?;
        ensure_remaining(buf, 1)?;
        let hotbar_slot = buf.get_u8();
        Ok(Self {
            position: BlockPos::new(x, y, z),
            add_block_nbt,
            hotbar_slot,
        })
    }
}
