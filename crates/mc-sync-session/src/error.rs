//! Session-level errors.

use mc_sync_proto::error::ProtoError;
use mc_sync_proto::types::BlockPos;
use thiserror::Error;

/// Errors raised while handling inbound packets. Any of these terminates the
/// connection.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("packet decode failed: {0}")]
    Proto(#[from] ProtoError),

    #[error("command request packet must never have the internal field set to true")]
    InternalCommand,

    #[error("runtime ID must be the session's own ID (0), got {0}")]
    NotSelfRuntimeId(u64),

    #[error("respawn state must be client ready (2), got {0}")]
    InvalidRespawnState(u8),

    #[error("block at {pos} is not within reach ({distance:.2} > {reach})")]
    OutOfReach {
        pos: BlockPos,
        distance: f32,
        reach: f32,
    },

    #[error("block at {pos} is not a lectern (found {block})")]
    NotALectern { pos: BlockPos, block: String },

    #[error("sub-chunk request asks for {count} offsets, limit is {max}")]
    TooManyOffsets { count: usize, max: usize },

    #[error("actor rejected the request: {0}")]
    Actor(String),
}

/// Errors loading a [`SessionConfig`](crate::config::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
