//! Chunk columns, block and item values, and their network encodings.

pub mod block;
pub mod block_hash;
pub mod chunk;
pub mod ids;
pub mod item;
pub mod serializer;
