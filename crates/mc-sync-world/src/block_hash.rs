//! FNV-1a 32-bit block state hash computation.
//!
//! With hashed block network IDs the client computes block runtime IDs as
//! FNV-1a hashes of the network-serialized block state NBT. The server must
//! produce identical hashes.

use bytes::{BufMut, BytesMut};
use mc_sync_proto::codec::{write_string, ProtoEncode};
use mc_sync_proto::types::VarInt;

use crate::block::{Block, StateValue};

/// FNV-1a 32-bit offset basis.
const FNV1_32_INIT: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
const FNV1_32_PRIME: u32 = 0x0100_0193;

/// Block state version for 1.21.50 protocol.
const BLOCK_STATE_VERSION: i32 = 18_100_737;

const TAG_END: u8 = 0x00;
const TAG_BYTE: u8 = 0x01;
const TAG_INT: u8 = 0x03;
const TAG_STRING: u8 = 0x08;
const TAG_COMPOUND: u8 = 0x0A;

/// Compute FNV-1a 32-bit hash of a byte slice.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hash = FNV1_32_INIT;
    for &byte in data {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV1_32_PRIME);
    }
    hash
}

/// Compute the block runtime ID (FNV-1a hash) of a block state.
pub fn hash_block_state(block: &Block) -> u32 {
    fnv1a_32(&serialize_block_state_nbt(block))
}

/// Serialize a block state to network NBT bytes with deterministic key order.
///
/// Root key order matches BDS: "name", "states", "version". States follow
/// the block's sorted map.
fn serialize_block_state_nbt(block: &Block) -> BytesMut {
    let mut buf = BytesMut::new();

    // Root TAG_Compound with empty name
    buf.put_u8(TAG_COMPOUND);
    write_string(&mut buf, "");

    buf.put_u8(TAG_STRING);
    write_string(&mut buf, "name");
    write_string(&mut buf, &block.name);

    buf.put_u8(TAG_COMPOUND);
    write_string(&mut buf, "states");
    for (key, value) in &block.states {
        match value {
            StateValue::Byte(v) => {
                buf.put_u8(TAG_BYTE);
                write_string(&mut buf, key);
                buf.put_u8(*v);
            }
            StateValue::Int(v) => {
                buf.put_u8(TAG_INT);
                write_string(&mut buf, key);
                VarInt(*v).proto_encode(&mut buf);
            }
            StateValue::String(v) => {
                buf.put_u8(TAG_STRING);
                write_string(&mut buf, key);
                write_string(&mut buf, v);
            }
        }
    }
    buf.put_u8(TAG_END);

    // Network NBT writes ints as ZigZag VarInt
    buf.put_u8(TAG_INT);
    write_string(&mut buf, "version");
    VarInt(BLOCK_STATE_VERSION).proto_encode(&mut buf);

    buf.put_u8(TAG_END);
    buf
}
