//! The per-connection session.

use std::io::Cursor;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::{info, warn};

use mc_sync_proto::batch::decode_batch;
use mc_sync_proto::codec::ProtoDecode;
use mc_sync_proto::packets::{CommandOrigin, GamePacket};
use mc_sync_proto::types::VarUInt32;
use mc_sync_world::ids::NetworkIds;

use crate::chunk_view::ChunkEncoder;
use crate::config::SessionConfig;
use crate::entity::Controllable;
use crate::error::SessionError;
use crate::loader::ChunkLoader;
use crate::registry::EntityRegistry;
use crate::writer;

/// View state of one connected client.
///
/// World events reach the client through the [`Viewer`](crate::Viewer)
/// impl; inbound packets are handled by [`Session::read_loop`].
pub struct Session {
    pub(crate) config: SessionConfig,
    pub(crate) controllable: Arc<dyn Controllable>,
    pub(crate) registry: EntityRegistry,
    pub(crate) chunk_encoder: ChunkEncoder,
    chunk_loader: RwLock<Arc<dyn ChunkLoader>>,
    pub(crate) network_ids: Arc<dyn NetworkIds>,
    chunk_radius: AtomicI32,
    outbound: mpsc::UnboundedSender<GamePacket>,
    pub(crate) last_command_origin: Mutex<Option<CommandOrigin>>,
}

impl Session {
    /// Create a session whose outbound packets are pushed onto `outbound`.
    pub fn new(
        config: SessionConfig,
        controllable: Arc<dyn Controllable>,
        chunk_loader: Arc<dyn ChunkLoader>,
        network_ids: Arc<dyn NetworkIds>,
        outbound: mpsc::UnboundedSender<GamePacket>,
    ) -> Self {
        info!("Session opened for {}", controllable.name());
        Self {
            registry: EntityRegistry::new(controllable.entity_id()),
            chunk_encoder: ChunkEncoder::new(),
            chunk_loader: RwLock::new(chunk_loader),
            network_ids,
            chunk_radius: AtomicI32::new(config.max_chunk_radius),
            outbound,
            last_command_origin: Mutex::new(None),
            controllable,
            config,
        }
    }

    /// Create a session and spawn its writer task, which forwards framed
    /// batches to `transport`. Must be called inside a tokio runtime.
    pub fn spawn(
        config: SessionConfig,
        controllable: Arc<dyn Controllable>,
        chunk_loader: Arc<dyn ChunkLoader>,
        network_ids: Arc<dyn NetworkIds>,
        transport: mpsc::Sender<Bytes>,
    ) -> Arc<Self> {
        let (outbound, queue) = mpsc::unbounded_channel();
        tokio::spawn(writer::run(queue, transport));
        Arc::new(Self::new(
            config,
            controllable,
            chunk_loader,
            network_ids,
            outbound,
        ))
    }

    /// Tear down view state. Dispatch after close is harmless.
    pub fn close(&self) {
        info!(
            "Session closed for {} ({} entities in view)",
            self.controllable.name(),
            self.registry.len()
        );
        self.registry.clear();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Radius most recently acknowledged to the client.
    pub fn chunk_radius(&self) -> i32 {
        self.chunk_radius.load(Ordering::Relaxed)
    }

    pub(crate) fn set_chunk_radius(&self, radius: i32) {
        self.chunk_radius.store(radius, Ordering::Relaxed);
    }

    pub fn chunk_loader(&self) -> Arc<dyn ChunkLoader> {
        self.chunk_loader.read().clone()
    }

    /// Swap the chunk loader, e.g. when the actor changes world.
    pub fn set_chunk_loader(&self, loader: Arc<dyn ChunkLoader>) {
        *self.chunk_loader.write() = loader;
    }

    /// Origin of the last command the client sent, echoed in command output.
    pub fn last_command_origin(&self) -> Option<CommandOrigin> {
        self.last_command_origin.lock().clone()
    }

    /// Queue a packet for the writer. Packets sent after the writer stopped
    /// are dropped.
    pub fn write_packet(&self, packet: impl Into<GamePacket>) {
        let _ = self.outbound.send(packet.into());
    }

    /// Handle every sub-packet of one inbound batch, stopping at the first
    /// violation.
    pub fn handle_batch(&self, batch: Bytes) -> Result<(), SessionError> {
        for sub_packet in decode_batch(batch)? {
            self.handle_packet(&sub_packet)?;
        }
        Ok(())
    }

    /// Handle one sub-packet, `VarUInt32(id) + body`.
    pub fn handle_packet(&self, sub_packet: &[u8]) -> Result<(), SessionError> {
        let mut cursor = Cursor::new(sub_packet);
        let packet_id = VarUInt32::proto_decode(&mut cursor)?.0;
        self.route(packet_id, &mut cursor)
    }

    /// Handle inbound batches until the connection closes or the client
    /// violates the protocol. The error is returned so the connection layer can
    /// drop the client.
    pub async fn read_loop(&self, mut inbound: mpsc::Receiver<Bytes>) -> Result<(), SessionError> {
        while let Some(batch) = inbound.recv().await {
            if let Err(e) = self.handle_batch(batch) {
                warn!("Dropping {}: {e}", self.controllable.name());
                return Err(e);
            }
        }
        Ok(())
    }
}
