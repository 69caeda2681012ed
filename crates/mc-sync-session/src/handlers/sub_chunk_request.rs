use std::io::Cursor;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::SubChunkRequest;

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    pub(crate) fn handle_sub_chunk_request(
        &self,
        buf: &mut Cursor<&[u8]>,
    ) -> Result<(), SessionError> {
        let request = SubChunkRequest::proto_decode(buf)?;
        let max = self.config.max_sub_chunk_offsets;
        if request.offsets.len() > max {
            return Err(SessionError::TooManyOffsets {
                count: request.offsets.len(),
                max,
            });
        }

        self.chunk_loader()
            .request_sub_chunks(request.dimension, request.position, &request.offsets);
        Ok(())
    }
}
