//! CommandRequest (0x4D), Client → Server.
//!
//! Sent when the player types a `/command` in chat.

use bytes::{Buf, BufMut};

use crate::codec::{read_bool, read_string, write_string, ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::types::{Uuid, VarLong, VarUInt32};

pub const ORIGIN_PLAYER: u32 = 0;
pub const ORIGIN_DEV_CONSOLE: u32 = 3;
pub const ORIGIN_TEST: u32 = 5;

/// Origin information for a command request.
///
/// Must be echoed back verbatim in command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOrigin {
    pub origin_type: u32,
    pub uuid: Uuid,
    pub request_id: String,
    /// Only present for dev-console and test origins.
    pub player_entity_id: Option<i64>,
}

impl CommandOrigin {
    fn carries_entity_id(origin_type: u32) -> bool {
        origin_type == ORIGIN_DEV_CONSOLE || origin_type == ORIGIN_TEST
    }
}

impl ProtoDecode for CommandOrigin {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let origin_type = VarUInt32::proto_decode(buf)?.0;
        let uuid = Uuid::proto_decode(buf)?;
        let request_id = read_string(buf)?;

        let player_entity_id = if Self::carries_entity_id(origin_type) {
            Some(VarLong::proto_decode(buf)?.0)
        } else {
            None
        };

        Ok(Self {
            origin_type,
            uuid,
            request_id,
            player_entity_id,
        })
    }
}

impl ProtoEncode for CommandOrigin {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt32(self.origin_type).proto_encode(buf);
        self.uuid.proto_encode(buf);
        write_string(buf, &self.request_id);
        if Self::carries_entity_id(self.origin_type) {
            VarLong(self.player_entity_id.unwrap_or(0)).proto_encode(buf);
        }
    }
}

/// CommandRequest packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: String,
    pub origin: CommandOrigin,
    /// Set for commands the client generated itself, never for typed ones.
    pub internal: bool,
}

impl ProtoDecode for CommandRequest {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let command = read_string(buf)?;
        let origin = CommandOrigin::proto_decode(buf)?;
        let internal = read_bool(buf)?;
        Ok(Self {
            command,
            origin,
            internal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn decode_player_origin() {
        let mut buf = BytesMut::new();
        write_string(&mut buf, "/say hello");
        CommandOrigin {
            origin_type: ORIGIN_PLAYER,
            uuid: Uuid::ZERO,
            request_id: String::new(),
            player_entity_id: None,
        }
        .proto_encode(&mut buf);
        buf.put_u8(0);
        let pkt = CommandRequest::proto_decode(&mut buf.freeze()).unwrap();
        assert_eq!(pkt.command, "/say hello");
        assert_eq!(pkt.origin.origin_type, 0);
        assert!(pkt.origin.player_entity_id.is_none());
        assert!(!pkt.internal);
    }

    #[test]
    fn decode_dev_console_origin() {
        let mut buf = BytesMut::new();
        write_string(&mut buf, "/stop");
        VarUInt32(ORIGIN_DEV_CONSOLE).proto_encode(&mut buf);
        Uuid::ZERO.proto_encode(&mut buf);
        write_string(&mut buf, "req-1");
        VarLong(42).proto_encode(&mut buf);
        buf.put_u8(1);
        let pkt = CommandRequest::proto_decode(&mut buf.freeze()).unwrap();
        assert_eq!(pkt.origin.request_id, "req-1");
        assert_eq!(pkt.origin.player_entity_id, Some(42));
        assert!(pkt.internal);
    }

    #[test]
    fn missing_internal_flag_is_rejected() {
        let mut buf = BytesMut::new();
        write_string(&mut buf, "/me");
        VarUInt32(ORIGIN_PLAYER).proto_encode(&mut buf);
        Uuid::ZERO.proto_encode(&mut buf);
        write_string(&mut buf, "");
        assert!(CommandRequest::proto_decode(&mut buf.freeze()).is_err());
    }
}
