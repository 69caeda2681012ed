//! Sub-chunk and chunk column serialization to Bedrock network format.

use bytes::{BufMut, Bytes, BytesMut};
use mc_sync_proto::codec::ProtoEncode;
use mc_sync_proto::types::VarInt;

use crate::chunk::{ChunkColumn, SubChunk, BLOCKS_PER_SUB_CHUNK, SECTION_COUNT};

/// Network sub-chunk format version.
pub const SUB_CHUNK_VERSION: u8 = 8;

/// Network form of a column, split into the pieces a LevelChunk payload is
/// assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkChunk {
    /// Encoded sections; `None` where the section is empty.
    pub sub_chunks: [Option<Bytes>; SECTION_COUNT],
    /// Height map (256 x i16 LE) followed by 256 biome bytes.
    pub data_2d: Bytes,
    /// Border-block count (always 0) followed by block entity NBT.
    pub block_nbt: Bytes,
}

/// Encode every populated section of `column` plus its trailer blocks.
pub fn network_encode(column: &ChunkColumn) -> NetworkChunk {
    let mut sub_chunks: [Option<Bytes>; SECTION_COUNT] = Default::default();
    for (slot, section) in sub_chunks.iter_mut().zip(column.sections.iter()) {
        if let Some(sub_chunk) = section {
            let mut buf = BytesMut::new();
            serialize_sub_chunk(&mut buf, sub_chunk);
            *slot = Some(buf.freeze());
        }
    }

    let mut data_2d = BytesMut::with_capacity(256 * 2 + 256);
    for &height in &column.height_map {
        data_2d.put_i16_le(height);
    }
    data_2d.put_slice(&column.biomes);

    let mut block_nbt = BytesMut::with_capacity(1 + column.block_nbt.len());
    // Border blocks: none (not Education Edition)
    block_nbt.put_u8(0x00);
    block_nbt.put_slice(&column.block_nbt);

    NetworkChunk {
        sub_chunks,
        data_2d: data_2d.freeze(),
        block_nbt: block_nbt.freeze(),
    }
}

/// Number of sections to transmit: one past the highest populated section,
/// 0 for an all-empty column. Only trailing empties are dropped.
pub fn sub_chunk_count(sub_chunks: &[Option<Bytes>; SECTION_COUNT]) -> usize {
    let mut count = SECTION_COUNT;
    for section in sub_chunks.iter().rev() {
        if section.is_some() {
            break;
        }
        count -= 1;
    }
    count
}

/// Serialize a single sub-chunk with one storage layer.
fn serialize_sub_chunk(buf: &mut BytesMut, sub_chunk: &SubChunk) {
    buf.put_u8(SUB_CHUNK_VERSION);
    buf.put_u8(1); // storage count (no waterlogging layer)

    let palette_size = sub_chunk.palette.len();
    let bpb = bits_per_block_for_palette(palette_size);
    // bit 0 = runtime flag
    buf.put_u8((bpb << 1) | 1);

    if bpb > 0 {
        // Pack block indices into u32 words (LSB-first)
        let blocks_per_word = 32 / bpb as usize;
        let word_count = BLOCKS_PER_SUB_CHUNK.div_ceil(blocks_per_word);

        for word_idx in 0..word_count {
            let mut word: u32 = 0;
            for slot in 0..blocks_per_word {
                let block_idx = word_idx * blocks_per_word + slot;
                if block_idx < BLOCKS_PER_SUB_CHUNK {
                    let palette_index = sub_chunk.blocks[block_idx] as u32;
                    word |= palette_index << (bpb as u32 * slot as u32);
                }
            }
            buf.put_u32_le(word);
        }
    }

    VarInt(palette_size as i32).proto_encode(buf);
    for &runtime_id in &sub_chunk.palette {
        VarInt(runtime_id as i32).proto_encode(buf);
    }
}

/// Determine minimum bits-per-block for a given palette size.
/// Valid values: 0, 1, 2, 3, 4, 5, 6, 8, 16.
fn bits_per_block_for_palette(palette_size: usize) -> u8 {
    match palette_size {
        0..=1 => 0,
        2 => 1,
        3..=4 => 2,
        5..=8 => 3,
        9..=16 => 4,
        17..=32 => 5,
        33..=64 => 6,
        65..=256 => 8,
        _ => 16,
    }
}
