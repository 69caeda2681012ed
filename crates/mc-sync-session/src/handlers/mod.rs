//! Inbound packet handlers.
//!
//! Each handler decodes one packet, validates it completely and only then
//! calls into the actor or the chunk loader, so a rejected packet has no side
//! effects.

mod block_pick_request;
mod command_request;
mod lectern_update;
mod request_chunk_radius;
mod respawn;
mod sub_chunk_request;

use std::io::Cursor;

use tracing::debug;

use mc_sync_proto::packets::id;

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    pub(crate) fn route(&self, packet_id: u32, buf: &mut Cursor<&[u8]>) -> Result<(), SessionError> {
        match packet_id {
            id::REQUEST_CHUNK_RADIUS => self.handle_request_chunk_radius(buf),
            id::BLOCK_PICK_REQUEST => self.handle_block_pick_request(buf),
            id::COMMAND_REQUEST => self.handle_command_request(buf),
            id::LECTERN_UPDATE => self.handle_lectern_update(buf),
            id::RESPAWN => self.handle_respawn(buf),
            id::SUB_CHUNK_REQUEST => self.handle_sub_chunk_request(buf),
            other => {
                debug!(
                    "Ignoring packet 0x{other:02X} from {}: {} bytes",
                    self.controllable.name(),
                    buf.get_ref().len()
                );
                Ok(())
            }
        }
    }
}
