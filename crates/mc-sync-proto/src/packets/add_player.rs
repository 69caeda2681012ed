//! AddPlayer (0x0C), Server → Client.
//!
//! Spawns a remote player entity visible to the receiving client.

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::item_stack::ItemStack;
use crate::metadata::EntityMetadata;
use crate::types::{Uuid, VarInt, VarUInt32, VarUInt64, Vec3};

/// Spawn a remote player.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPlayer {
    pub uuid: Uuid,
    pub username: String,
    pub entity_runtime_id: u64,
    pub platform_chat_id: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub held_item: ItemStack,
    pub gamemode: i32,
    pub metadata: EntityMetadata,
    // AbilityData
    pub entity_unique_id: i64,
    pub permission_level: u8,
    pub command_permission_level: u8,
    // Device
    pub device_id: String,
    pub device_os: i32,
}

impl AddPlayer {
    /// Spawn packet for a player seen by another client. The unique ID mirrors
    /// the runtime ID and the head follows the body yaw.
    pub fn new(
        uuid: Uuid,
        username: &str,
        runtime_id: u64,
        position: Vec3,
        pitch: f32,
        yaw: f32,
    ) -> Self {
        Self {
            uuid,
            username: username.to_string(),
            entity_runtime_id: runtime_id,
            platform_chat_id: String::new(),
            position,
            velocity: Vec3::ZERO,
            pitch,
            yaw,
            head_yaw: yaw,
            held_item: ItemStack::empty(),
            gamemode: 0,
            metadata: EntityMetadata::default_player(username),
            entity_unique_id: runtime_id as i64,
            permission_level: 1,
            command_permission_level: 0,
            device_id: String::new(),
            device_os: 0,
        }
    }
}

impl ProtoEncode for AddPlayer {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        self.uuid.proto_encode(buf);
        write_string(buf, &self.username);
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        write_string(buf, &self.platform_chat_id);
        self.position.proto_encode(buf);
        self.velocity.proto_encode(buf);
        // Rotation: pitch, yaw, head_yaw as f32 LE
        buf.put_f32_le(self.pitch);
        buf.put_f32_le(self.yaw);
        buf.put_f32_le(self.head_yaw);
        self.held_item.proto_encode(buf);
        VarInt(self.gamemode).proto_encode(buf);
        self.metadata.proto_encode(buf);
        // Entity sync properties (int count + float count)
        VarUInt32(0).proto_encode(buf);
        VarUInt32(0).proto_encode(buf);
        encode_ability_data(buf, self);
        // Entity links (empty)
        VarUInt32(0).proto_encode(buf);
        write_string(buf, &self.device_id);
        buf.put_i32_le(self.device_os);
    }
}

/// Encode minimal ability data (one Base layer).
fn encode_ability_data(buf: &mut impl BufMut, player: &AddPlayer) {
    buf.put_i64_le(player.entity_unique_id);
    buf.put_u8(player.permission_level);
    buf.put_u8(player.command_permission_level);
    // 1 ability layer
    VarUInt32(1).proto_encode(buf);
    // Layer type = Base (0)
    buf.put_u16_le(0);
    // Abilities allowed bitmask
    buf.put_u32_le(0x0001_BFFF);
    // Abilities values bitmask
    let values = if player.gamemode == 1 {
        0x0000_0477
    } else {
        0x0000_0003
    };
    buf.put_u32_le(values);
    // Fly speed
    buf.put_f32_le(0.05);
    // Walk speed
    buf.put_f32_le(0.1);
}
