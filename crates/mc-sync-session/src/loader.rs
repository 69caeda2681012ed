//! Chunk loader collaborator.

use mc_sync_proto::packets::SubChunkOffset;
use mc_sync_proto::types::{SubChunkPos, Vec3};

/// Tracks the chunks within a session's view radius and streams them back
/// through the session's viewer.
pub trait ChunkLoader: Send + Sync {
    fn change_radius(&self, radius: i32);

    /// Recentre the loaded area on `position`.
    fn move_to(&self, position: Vec3);

    fn request_sub_chunks(&self, dimension: i32, centre: SubChunkPos, offsets: &[SubChunkOffset]);
}
