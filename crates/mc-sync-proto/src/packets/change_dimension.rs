//! ChangeDimension (0x3D), Server → Client.
//!
//! Tells the client to transition to a different dimension.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, Vec3};

pub const DIMENSION_OVERWORLD: i32 = 0;
pub const DIMENSION_NETHER: i32 = 1;
pub const DIMENSION_END: i32 = 2;

/// ChangeDimension packet: initiates a dimension change on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDimension {
    pub dimension: i32,
    /// Spawn position in the target dimension.
    pub position: Vec3,
    pub respawn: bool,
}

impl ChangeDimension {
    /// Transition to `dimension` at the origin without a respawn screen.
    pub fn to(dimension: i32) -> Self {
        Self {
            dimension,
            position: Vec3::ZERO,
            respawn: false,
        }
    }
}

impl ProtoEncode for ChangeDimension {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.dimension).proto_encode(buf);
        self.position.proto_encode(buf);
        buf.put_u8(self.respawn as u8);
    }
}
