use std::io::Cursor;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::BlockPickRequest;

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    pub(crate) fn handle_block_pick_request(
        &self,
        buf: &mut Cursor<&[u8]>,
    ) -> Result<(), SessionError> {
        let request = BlockPickRequest::proto_decode(buf)?;
        self.controllable.pick_block(request.position);
        Ok(())
    }
}
