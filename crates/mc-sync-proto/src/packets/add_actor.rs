//! AddActor (0x0D), Server → Client.
//!
//! Spawns a non-player entity (mob, item, projectile, etc.) visible to the client.

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::metadata::EntityMetadata;
use crate::types::{VarLong, VarUInt32, VarUInt64, Vec3};

/// Spawn a non-player entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AddActor {
    pub entity_unique_id: i64,
    pub entity_runtime_id: u64,
    pub entity_type: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub body_yaw: f32,
    pub metadata: EntityMetadata,
}

impl AddActor {
    pub fn new(entity_type: &str, runtime_id: u64, position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            entity_unique_id: runtime_id as i64,
            entity_runtime_id: runtime_id,
            entity_type: entity_type.to_string(),
            position,
            velocity: Vec3::ZERO,
            pitch,
            yaw,
            head_yaw: yaw,
            body_yaw: yaw,
            metadata: EntityMetadata::default_entity(),
        }
    }
}

impl ProtoEncode for AddActor {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarLong(self.entity_unique_id).proto_encode(buf);
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        write_string(buf, &self.entity_type);
        self.position.proto_encode(buf);
        self.velocity.proto_encode(buf);
        buf.put_f32_le(self.pitch);
        buf.put_f32_le(self.yaw);
        buf.put_f32_le(self.head_yaw);
        buf.put_f32_le(self.body_yaw);
        // Attributes (none)
        VarUInt32(0).proto_encode(buf);
        self.metadata.proto_encode(buf);
        // Entity sync properties (int count + float count)
        VarUInt32(0).proto_encode(buf);
        VarUInt32(0).proto_encode(buf);
        // Entity links
        VarUInt32(0).proto_encode(buf);
    }
}
