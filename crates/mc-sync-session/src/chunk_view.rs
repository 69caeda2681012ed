//! LevelChunk assembly for a session.

use bytes::{BufMut, Bytes, BytesMut};
use parking_lot::Mutex;

use mc_sync_proto::packets::LevelChunk;
use mc_sync_proto::types::ChunkPos;
use mc_sync_world::chunk::ChunkColumn;
use mc_sync_world::serializer::{network_encode, sub_chunk_count, SUB_CHUNK_VERSION};

/// Marker sent for an empty section below the highest populated one.
const EMPTY_SUB_CHUNK: [u8; 2] = [SUB_CHUNK_VERSION, 0];

/// Builds LevelChunk packets through one reusable scratch buffer.
///
/// Concurrent encodes serialize on the buffer lock. The packet payload is a
/// copy, so the buffer can be cleared and reused once the call returns.
pub struct ChunkEncoder {
    scratch: Mutex<BytesMut>,
}

impl Default for ChunkEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkEncoder {
    pub fn new() -> Self {
        Self {
            scratch: Mutex::new(BytesMut::new()),
        }
    }

    pub fn encode(&self, pos: ChunkPos, dimension: i32, column: &ChunkColumn) -> LevelChunk {
        let network = network_encode(column);
        let count = sub_chunk_count(&network.sub_chunks);

        let mut buf = self.scratch.lock();
        for section in &network.sub_chunks[..count] {
            match section {
                Some(payload) => buf.put_slice(payload),
                None => buf.put_slice(&EMPTY_SUB_CHUNK),
            }
        }
        buf.put_slice(&network.data_2d);
        buf.put_slice(&network.block_nbt);

        let payload = Bytes::copy_from_slice(&buf);
        buf.clear();

        LevelChunk {
            chunk_x: pos.x,
            chunk_z: pos.z,
            dimension_id: dimension,
            sub_chunk_count: count as u32,
            cache_enabled: false,
            payload,
        }
    }

    #[cfg(test)]
    fn scratch_len(&self) -> usize {
        self.scratch.lock().len()
    }
}
