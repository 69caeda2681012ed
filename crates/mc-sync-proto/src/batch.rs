//! Game packet batch framing (the 0xFE payload layer, before compression).
//!
//! A batch is a sequence of `VarUInt32(len) + sub-packet` entries, where each
//! sub-packet is `VarUInt32(packet_id) + packet body`. Compression and
//! encryption are applied by the transport after framing.

use std::io::Cursor;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::codec::{ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::types::VarUInt32;

/// Split a framed batch into its sub-packets without copying.
pub fn decode_batch(data: Bytes) -> Result<Vec<Bytes>, ProtoError> {
    let mut cursor = Cursor::new(&data[..]);
    let mut packets = Vec::new();

    while cursor.has_remaining() {
        let len = VarUInt32::proto_decode(&mut cursor)?.0 as usize;
        if cursor.remaining() < len {
            return Err(ProtoError::BufferTooShort {
                needed: len,
                remaining: cursor.remaining(),
            });
        }
        let start = cursor.position() as usize;
        packets.push(data.slice(start..start + len));
        cursor.set_position((start + len) as u64);
    }

    Ok(packets)
}

/// Frame already-encoded sub-packets into a single batch.
pub fn encode_batch(packets: &[Bytes]) -> Bytes {
    let total: usize = packets.iter().map(|p| p.len() + 5).sum();
    let mut batch = BytesMut::with_capacity(total);
    for packet in packets {
        VarUInt32(packet.len() as u32).proto_encode(&mut batch);
        batch.put_slice(packet);
    }
    batch.freeze()
}

/// Encode a packet body into a sub-packet: `VarUInt32(id) + body`.
pub fn encode_sub_packet(packet_id: u32, packet: &impl ProtoEncode) -> Bytes {
    let mut buf = BytesMut::new();
    VarUInt32(packet_id).proto_encode(&mut buf);
    packet.proto_encode(&mut buf);
    buf.freeze()
}

/// Split a sub-packet into its packet ID and body.
pub fn split_sub_packet(sub_packet: &Bytes) -> Result<(u32, Bytes), ProtoError> {
    let mut cursor = Cursor::new(&sub_packet[..]);
    let id = VarUInt32::proto_decode(&mut cursor)?.0;
    let body = sub_packet.slice(cursor.position() as usize..);
    Ok((id, body))
}
