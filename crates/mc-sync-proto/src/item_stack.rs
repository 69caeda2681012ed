//! Item stack wire form (`NetworkItemStackDescriptor`) for equipment packets.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, VarUInt32};

/// A single item stack as the client sees it.
///
/// `runtime_id == 0` means the slot is empty (air).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemStack {
    /// Item runtime ID from the item table. 0 = air/empty.
    pub runtime_id: i32,
    pub count: u16,
    /// Damage or variant metadata.
    pub metadata: u16,
    /// Block runtime ID if the item places a block.
    pub block_runtime_id: i32,
    /// Server-assigned stack ID. 0 = none.
    pub stack_network_id: i32,
}

impl ItemStack {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(runtime_id: i32, count: u16, metadata: u16) -> Self {
        Self {
            runtime_id,
            count,
            metadata,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runtime_id == 0 || self.count == 0
    }
}

/// Wire format:
/// ```text
/// VarInt(runtime_id) , 0 = empty, nothing follows
/// u16_le(count)
/// VarUInt32(metadata)
/// u8(has_stack_id) + optional VarInt(stack_network_id)
/// VarInt(block_runtime_id)
/// VarUInt32(0)       , no user data
/// VarInt(0) VarInt(0), no can-place-on / can-destroy lists
/// ```
impl ProtoEncode for ItemStack {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        if self.is_empty() {
            VarInt(0).proto_encode(buf);
            return;
        }
        VarInt(self.runtime_id).proto_encode(buf);
        buf.put_u16_le(self.count);
        VarUInt32(u32::from(self.metadata)).proto_encode(buf);
        if self.stack_network_id != 0 {
            buf.put_u8(1);
            VarInt(self.stack_network_id).proto_encode(buf);
        } else {
            buf.put_u8(0);
        }
        VarInt(self.block_runtime_id).proto_encode(buf);
        VarUInt32(0).proto_encode(buf);
        VarInt(0).proto_encode(buf);
        VarInt(0).proto_encode(buf);
    }
}
