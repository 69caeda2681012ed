//! Game packet definitions for the view-synchronization layer.

pub mod add_actor;
pub mod add_player;
pub mod animate;
pub mod block_pick_request;
pub mod change_dimension;
pub mod chunk_radius_updated;
pub mod command_request;
pub mod entity_event;
pub mod lectern_update;
pub mod level_chunk;
pub mod level_event;
pub mod level_sound_event;
pub mod mob_equipment;
pub mod move_actor_absolute;
pub mod move_player;
pub mod remove_entity;
pub mod request_chunk_radius;
pub mod respawn;
pub mod set_actor_data;
pub mod set_time;
pub mod sub_chunk_request;
pub mod update_block;

use bytes::Bytes;

use crate::batch::encode_sub_packet;

pub use add_actor::AddActor;
pub use add_player::AddPlayer;
pub use animate::Animate;
pub use block_pick_request::BlockPickRequest;
pub use change_dimension::ChangeDimension;
pub use chunk_radius_updated::ChunkRadiusUpdated;
pub use command_request::{CommandOrigin, CommandRequest};
pub use entity_event::EntityEvent;
pub use lectern_update::LecternUpdate;
pub use level_chunk::LevelChunk;
pub use level_event::LevelEvent;
pub use level_sound_event::LevelSoundEvent;
pub use mob_equipment::MobEquipment;
pub use move_actor_absolute::MoveActorAbsolute;
pub use move_player::{MoveMode, MovePlayer};
pub use remove_entity::RemoveEntity;
pub use request_chunk_radius::RequestChunkRadius;
pub use respawn::Respawn;
pub use set_actor_data::SetActorData;
pub use set_time::SetTime;
pub use sub_chunk_request::{SubChunkOffset, SubChunkRequest};
pub use update_block::UpdateBlock;

/// Game packet IDs.
pub mod id {
    pub const SET_TIME: u32 = 0x0A;
    pub const ADD_PLAYER: u32 = 0x0C;
    pub const ADD_ACTOR: u32 = 0x0D;
    pub const REMOVE_ENTITY: u32 = 0x0E;
    pub const MOVE_ACTOR_ABSOLUTE: u32 = 0x10;
    pub const MOVE_PLAYER: u32 = 0x13;
    pub const UPDATE_BLOCK: u32 = 0x15;
    pub const LEVEL_EVENT: u32 = 0x19;
    pub const ENTITY_EVENT: u32 = 0x1B;
    pub const MOB_EQUIPMENT: u32 = 0x1F;
    pub const BLOCK_PICK_REQUEST: u32 = 0x22;
    pub const SET_ACTOR_DATA: u32 = 0x27;
    pub const ANIMATE: u32 = 0x2C;
    pub const RESPAWN: u32 = 0x2D;
    pub const LEVEL_CHUNK: u32 = 0x3A;
    pub const CHANGE_DIMENSION: u32 = 0x3D;
    pub const REQUEST_CHUNK_RADIUS: u32 = 0x45;
    pub const CHUNK_RADIUS_UPDATED: u32 = 0x46;
    pub const COMMAND_REQUEST: u32 = 0x4D;
    pub const LEVEL_SOUND_EVENT: u32 = 0x7B;
    pub const LECTERN_UPDATE: u32 = 0x7D;
    pub const SUB_CHUNK_REQUEST: u32 = 0xAF;
}

/// Every packet the server sends through a session's outbound queue.
#[derive(Debug, Clone, PartialEq)]
pub enum GamePacket {
    AddPlayer(AddPlayer),
    AddActor(AddActor),
    RemoveEntity(RemoveEntity),
    MoveActorAbsolute(MoveActorAbsolute),
    MovePlayer(MovePlayer),
    UpdateBlock(UpdateBlock),
    LevelEvent(LevelEvent),
    EntityEvent(EntityEvent),
    MobEquipment(MobEquipment),
    SetActorData(SetActorData),
    LevelChunk(LevelChunk),
    ChangeDimension(ChangeDimension),
    ChunkRadiusUpdated(ChunkRadiusUpdated),
    SetTime(SetTime),
    LevelSoundEvent(LevelSoundEvent),
    Animate(Animate),
}

impl GamePacket {
    pub fn id(&self) -> u32 {
        match self {
            GamePacket::AddPlayer(_) => id::ADD_PLAYER,
            GamePacket::AddActor(_) => id::ADD_ACTOR,
            GamePacket::RemoveEntity(_) => id::REMOVE_ENTITY,
            GamePacket::MoveActorAbsolute(_) => id::MOVE_ACTOR_ABSOLUTE,
            GamePacket::MovePlayer(_) => id::MOVE_PLAYER,
            GamePacket::UpdateBlock(_) => id::UPDATE_BLOCK,
            GamePacket::LevelEvent(_) => id::LEVEL_EVENT,
            GamePacket::EntityEvent(_) => id::ENTITY_EVENT,
            GamePacket::MobEquipment(_) => id::MOB_EQUIPMENT,
            GamePacket::SetActorData(_) => id::SET_ACTOR_DATA,
            GamePacket::LevelChunk(_) => id::LEVEL_CHUNK,
            GamePacket::ChangeDimension(_) => id::CHANGE_DIMENSION,
            GamePacket::ChunkRadiusUpdated(_) => id::CHUNK_RADIUS_UPDATED,
            GamePacket::SetTime(_) => id::SET_TIME,
            GamePacket::LevelSoundEvent(_) => id::LEVEL_SOUND_EVENT,
            GamePacket::Animate(_) => id::ANIMATE,
        }
    }

    /// Encode into a sub-packet: `VarUInt32(id) + body`.
    pub fn encode(&self) -> Bytes {
        let id = self.id();
        match self {
            GamePacket::AddPlayer(p) => encode_sub_packet(id, p),
            GamePacket::AddActor(p) => encode_sub_packet(id, p),
            GamePacket::RemoveEntity(p) => encode_sub_packet(id, p),
            GamePacket::MoveActorAbsolute(p) => encode_sub_packet(id, p),
            GamePacket::MovePlayer(p) => encode_sub_packet(id, p),
            GamePacket::UpdateBlock(p) => encode_sub_packet(id, p),
            GamePacket::LevelEvent(p) => encode_sub_packet(id, p),
            GamePacket::EntityEvent(p) => encode_sub_packet(id, p),
            GamePacket::MobEquipment(p) => encode_sub_packet(id, p),
            GamePacket::SetActorData(p) => encode_sub_packet(id, p),
            GamePacket::LevelChunk(p) => encode_sub_packet(id, p),
            GamePacket::ChangeDimension(p) => encode_sub_packet(id, p),
            GamePacket::ChunkRadiusUpdated(p) => encode_sub_packet(id, p),
            GamePacket::SetTime(p) => encode_sub_packet(id, p),
            GamePacket::LevelSoundEvent(p) => encode_sub_packet(id, p),
            GamePacket::Animate(p) => encode_sub_packet(id, p),
        }
    }
}

macro_rules! impl_from_packet {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for GamePacket {
                fn from(packet: $variant) -> Self {
                    GamePacket::$variant(packet)
                }
            }
        )*
    };
}

impl_from_packet!(
    AddPlayer,
    AddActor,
    RemoveEntity,
    MoveActorAbsolute,
    MovePlayer,
    UpdateBlock,
    LevelEvent,
    EntityEvent,
    MobEquipment,
    SetActorData,
    LevelChunk,
    ChangeDimension,
    ChunkRadiusUpdated,
    SetTime,
    LevelSoundEvent,
    Animate,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::split_sub_packet;

    #[test]
    fn encode_prefixes_packet_id() {
        let pkt: GamePacket = RemoveEntity {
            entity_unique_id: 42,
        }
        .into();
        let (id, body) = split_sub_packet(&pkt.encode()).unwrap();
        assert_eq!(id, id::REMOVE_ENTITY);
        assert_eq!(&body[..], &[0x54]);
    }

    #[test]
    fn chunk_radius_updated_sub_packet() {
        let pkt: GamePacket = ChunkRadiusUpdated { chunk_radius: 4 }.into();
        assert_eq!(pkt.id(), 0x46);
        assert_eq!(&pkt.encode()[..], &[0x46, 0x08]);
    }
}
