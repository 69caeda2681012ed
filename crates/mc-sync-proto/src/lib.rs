//! Bedrock wire types, codec traits and the packets used by the view layer.

pub mod batch;
pub mod codec;
pub mod error;
pub mod item_stack;
pub mod metadata;
pub mod packets;
pub mod types;
