//! Outbound writer task.
//!
//! Packets queued by dispatch are encoded and framed here, off the caller's
//! thread. Everything queued at the moment the writer wakes goes out as one
//! batch, so bursts (a chunk plus its entities) share a frame.

use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use mc_sync_proto::batch::encode_batch;
use mc_sync_proto::packets::GamePacket;

/// Drain `queue` into `transport` until either side closes.
pub async fn run(mut queue: mpsc::UnboundedReceiver<GamePacket>, transport: mpsc::Sender<Bytes>) {
    while let Some(first) = queue.recv().await {
        let mut sub_packets = vec![first.encode()];
        while let Ok(next) = queue.try_recv() {
            sub_packets.push(next.encode());
        }

        let batch = encode_batch(&sub_packets);
        trace!("Flushing {} packets ({} bytes)", sub_packets.len(), batch.len());
        if transport.send(batch).await.is_err() {
            debug!("Transport closed, stopping writer");
            return;
        }
    }
    debug!("Outbound queue closed, stopping writer");
}
