//! SetActorData (0x27), Server → Client.
//!
//! Replaces the metadata record of an entity (flags, name tag, scale...).

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::metadata::EntityMetadata;
use crate::types::{VarUInt32, VarUInt64};

#[derive(Debug, Clone, PartialEq)]
pub struct SetActorData {
    pub entity_runtime_id: u64,
    pub metadata: EntityMetadata,
    pub tick: u64,
}

impl ProtoEncode for SetActorData {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        self.metadata.proto_encode(buf);
        // Entity sync properties (int count + float count)
        VarUInt32(0).proto_encode(buf);
        VarUInt32(0).proto_encode(buf);
        VarUInt64(self.tick).proto_encode(buf);
    }
}
