//! Chunk column and sub-chunk data structures.

use bytes::Bytes;

/// Sections per column, index 0 at the bottom.
pub const SECTION_COUNT: usize = 16;

/// Blocks in one 16x16x16 sub-chunk.
pub const BLOCKS_PER_SUB_CHUNK: usize = 4096;

/// A 16x16x16 sub-chunk with a single block storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubChunk {
    /// Palette indices for each block, stored in XZY order: `(x*16 + z)*16 + y`.
    pub blocks: Box<[u16; BLOCKS_PER_SUB_CHUNK]>,
    /// Palette of block runtime IDs.
    pub palette: Vec<u32>,
}

impl SubChunk {
    /// Create a sub-chunk filled entirely with a single block.
    pub fn new_single(runtime_id: u32) -> Self {
        Self {
            blocks: Box::new([0; BLOCKS_PER_SUB_CHUNK]),
            palette: vec![runtime_id],
        }
    }

    /// Set a block at local coordinates within this sub-chunk.
    /// `x`, `y`, `z` must each be in `[0, 15]`.
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, runtime_id: u32) {
        debug_assert!(x < 16 && y < 16 && z < 16);
        let palette_index = match self.palette.iter().position(|&id| id == runtime_id) {
            Some(idx) => idx,
            None => {
                self.palette.push(runtime_id);
                self.palette.len() - 1
            }
        };
        self.blocks[block_index(x, y, z)] = palette_index as u16;
    }

    /// Get the runtime ID of the block at local coordinates.
    pub fn block(&self, x: usize, y: usize, z: usize) -> u32 {
        let palette_index = self.blocks[block_index(x, y, z)] as usize;
        self.palette[palette_index]
    }
}

fn block_index(x: usize, y: usize, z: usize) -> usize {
    (x * 16 + z) * 16 + y
}

/// A full chunk column: 16 optional sections plus the 2D data the client
/// needs. A `None` section is all air.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkColumn {
    pub sections: [Option<SubChunk>; SECTION_COUNT],
    /// Highest block per column, indexed `z*16 + x`.
    pub height_map: [i16; 256],
    /// 2D biome IDs, indexed `z*16 + x`.
    pub biomes: [u8; 256],
    /// Pre-encoded network NBT of the column's block entities.
    pub block_nbt: Bytes,
}

impl Default for ChunkColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkColumn {
    /// An all-air column.
    pub fn new() -> Self {
        Self {
            sections: Default::default(),
            height_map: [0; 256],
            biomes: [0; 256],
            block_nbt: Bytes::new(),
        }
    }

    /// Set a block at column-local coordinates (`y` in `0..256`), creating the
    /// section filled with `air_id` if it does not exist yet.
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, runtime_id: u32, air_id: u32) {
        let section = self.sections[y >> 4].get_or_insert_with(|| SubChunk::new_single(air_id));
        section.set_block(x, y & 15, z, runtime_id);
    }

    /// Runtime ID at column-local coordinates, `None` inside an absent section.
    pub fn block(&self, x: usize, y: usize, z: usize) -> Option<u32> {
        self.sections
            .get(y >> 4)?
            .as_ref()
            .map(|s| s.block(x, y & 15, z))
    }

    /// Index of the highest populated section.
    pub fn highest_section(&self) -> Option<usize> {
        self.sections.iter().rposition(Option::is_some)
    }
}
