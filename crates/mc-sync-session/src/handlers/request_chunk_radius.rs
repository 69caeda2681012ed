use std::io::Cursor;

use tracing::debug;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::{ChunkRadiusUpdated, RequestChunkRadius};

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    /// Acknowledge a render distance request, capped at the configured
    /// maximum.
    pub fn handle_request_chunk_radius(&self, buf: &mut Cursor<&[u8]>) -> Result<(), SessionError> {
        let request = RequestChunkRadius::proto_decode(buf)?;
        let radius = request.chunk_radius.min(self.config.max_chunk_radius);

        debug!(
            "{} requested chunk radius {}, using {radius}",
            self.controllable.name(),
            request.chunk_radius
        );
        self.set_chunk_radius(radius);
        self.chunk_loader().change_radius(radius);
        self.write_packet(ChunkRadiusUpdated {
            chunk_radius: radius,
        });
        Ok(())
    }
}
