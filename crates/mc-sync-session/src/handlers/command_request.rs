use std::io::Cursor;

use tracing::info;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::CommandRequest;

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    pub(crate) fn handle_command_request(&self, buf: &mut Cursor<&[u8]>) -> Result<(), SessionError> {
        let request = CommandRequest::proto_decode(buf)?;
        // Typed commands never carry the internal flag
        if request.internal {
            return Err(SessionError::InternalCommand);
        }

        info!(
            "{} issued command: {}",
            self.controllable.name(),
            request.command
        );
        *self.last_command_origin.lock() = Some(request.origin);
        self.controllable.execute_command(&request.command);
        Ok(())
    }
}
