use std::io::Cursor;

use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::LecternUpdate;

use crate::error::SessionError;
use crate::session::Session;

impl Session {
    pub(crate) fn handle_lectern_update(&self, buf: &mut Cursor<&[u8]>) -> Result<(), SessionError> {
        let update = LecternUpdate::proto_decode(buf)?;
        let pos = update.position;

        let reach = self.config.interaction_reach;
        let distance = self.controllable.eye_position().distance(&pos.center());
        if distance > reach {
            return Err(SessionError::OutOfReach {
                pos,
                distance,
                reach,
            });
        }

        let block = self.controllable.world().block(pos);
        if !block.is_lectern() {
            return Err(SessionError::NotALectern {
                pos,
                block: block.to_string(),
            });
        }

        self.controllable
            .turn_lectern_page(pos, update.page)
            .map_err(SessionError::Actor)
    }
}
