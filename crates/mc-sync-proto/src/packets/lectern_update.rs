//! LecternUpdate (0x7D), Client → Server.
//!
//! The client turned a page of the book on a lectern.

use bytes::Buf;

use crate::codec::{ensure_remaining, ProtoDecode};
use crate::error::ProtoError;
use crate::types::BlockPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LecternUpdate {
    pub page: u8,
    pub page_count: u8,
    pub position: BlockPos,
}

impl ProtoDecode for LecternUpdate {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        ensure_remaining(buf, 2)?;
        let page = buf.get_u8();
        let page_count = buf.get_u8();
        let position = BlockPos::proto_decode(buf)?;
        Ok(Self {
            page,
            page_count,
            position,
        })
    }
}
