use std::io::Cursor;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::respawn::STATE_CLIENT_READY_TO_SPAWN;
use mc_sync_proto::packets::Respawn;

use crate::error::SessionError;
use crate::registry::SELF_RUNTIME_ID;
use crate::session::Session;

impl Session {
    pub(crate) fn handle_respawn(&self, buf: &mut Cursor<&[u8]>) -> Result<(), SessionError> {
        let respawn = Respawn::proto_decode(buf)?;
        if respawn.runtime_entity_id != SELF_RUNTIME_ID {
            return Err(SessionError::NotSelfRuntimeId(respawn.runtime_entity_id));
        }
        if respawn.state != STATE_CLIENT_READY_TO_SPAWN {
            return Err(SessionError::InvalidRespawnState(respawn.state));
        }
        self.controllable.respawn();
        Ok(())
    }
}
