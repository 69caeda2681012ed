//! Mock collaborators for session tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use mc_sync_proto::packets::{GamePacket, SubChunkOffset};
use mc_sync_proto::types::{BlockPos, SubChunkPos, Uuid, Vec3};
use mc_sync_world::block::Block;
use mc_sync_world::ids::HashedNetworkIds;
use mc_sync_world::item::ItemStack;

use crate::config::SessionConfig;
use crate::entity::{Controllable, Entity, EntityId, ItemCarrier, World};
use crate::loader::ChunkLoader;
use crate::session::Session;

pub(crate) fn entity_id(n: u64) -> EntityId {
    Uuid::new(0, n)
}

pub(crate) struct MockEntity {
    id: EntityId,
    kind: String,
    position: Vec3,
    items: Option<(ItemStack, ItemStack)>,
}

impl MockEntity {
    pub(crate) fn new(n: u64, kind: &str) -> Self {
        Self {
            id: entity_id(n),
            kind: kind.to_string(),
            position: Vec3::ZERO,
            items: None,
        }
    }

    pub(crate) fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub(crate) fn holding(mut self, main_hand: ItemStack, off_hand: ItemStack) -> Self {
        self.items = Some((main_hand, off_hand));
        self
    }
}

impl Entity for MockEntity {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn pitch(&self) -> f32 {
        0.0
    }

    fn yaw(&self) -> f32 {
        0.0
    }

    fn entity_type(&self) -> &str {
        &self.kind
    }

    fn item_carrier(&self) -> Option<&dyn ItemCarrier> {
        self.items.as_ref().map(|_| self as &dyn ItemCarrier)
    }
}

impl ItemCarrier for MockEntity {
    fn held_items(&self) -> (ItemStack, ItemStack) {
        self.items.clone().unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockWorld {
    blocks: Mutex<HashMap<BlockPos, Block>>,
}

impl MockWorld {
    pub(crate) fn set_block(&self, pos: BlockPos, block: Block) {
        self.blocks.lock().insert(pos, block);
    }
}

impl World for MockWorld {
    fn block(&self, pos: BlockPos) -> Block {
        self.blocks.lock().get(&pos).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ActorCall {
    PickBlock(BlockPos),
    ExecuteCommand(String),
    Respawn,
    TurnLecternPage(BlockPos, u8),
}

/// A player that records every actor call it receives.
pub(crate) struct MockPlayer {
    id: EntityId,
    name: String,
    position: Vec3,
    world: Arc<MockWorld>,
    calls: Mutex<Vec<ActorCall>>,
    page_error: Mutex<Option<String>>,
}

impl MockPlayer {
    pub(crate) fn new(n: u64, name: &str) -> Self {
        Self {
            id: entity_id(n),
            name: name.to_string(),
            position: Vec3::new(0.0, 64.0, 0.0),
            world: Arc::new(MockWorld::default()),
            calls: Mutex::new(Vec::new()),
            page_error: Mutex::new(None),
        }
    }

    pub(crate) fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub(crate) fn in_world(mut self, world: Arc<MockWorld>) -> Self {
        self.world = world;
        self
    }

    /// Make `turn_lectern_page` fail with `message`.
    pub(crate) fn reject_pages(&self, message: &str) {
        *self.page_error.lock() = Some(message.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<ActorCall> {
        self.calls.lock().clone()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ActorCall::ExecuteCommand(line) => Some(line),
                _ => None,
            })
            .collect()
    }
}

impl Entity for MockPlayer {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn pitch(&self) -> f32 {
        0.0
    }

    fn yaw(&self) -> f32 {
        0.0
    }

    fn entity_type(&self) -> &str {
        "minecraft:player"
    }

    fn controllable(&self) -> Option<&dyn Controllable> {
        Some(self as &dyn Controllable)
    }
}

impl Controllable for MockPlayer {
    fn uuid(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, 1.62, 0.0)
    }

    fn world(&self) -> Arc<dyn World> {
        self.world.clone()
    }

    fn pick_block(&self, pos: BlockPos) {
        self.calls.lock().push(ActorCall::PickBlock(pos));
    }

    fn execute_command(&self, command_line: &str) {
        self.calls
            .lock()
            .push(ActorCall::ExecuteCommand(command_line.to_string()));
    }

    fn respawn(&self) {
        self.calls.lock().push(ActorCall::Respawn);
    }

    fn turn_lectern_page(&self, pos: BlockPos, page: u8) -> Result<(), String> {
        if let Some(message) = self.page_error.lock().clone() {
            return Err(message);
        }
        self.calls.lock().push(ActorCall::TurnLecternPage(pos, page));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoaderCall {
    ChangeRadius(i32),
    MoveTo(Vec3),
    RequestSubChunks {
        dimension: i32,
        centre: SubChunkPos,
        offsets: Vec<SubChunkOffset>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct MockLoader {
    calls: Mutex<Vec<LoaderCall>>,
}

impl MockLoader {
    pub(crate) fn calls(&self) -> Vec<LoaderCall> {
        self.calls.lock().clone()
    }
}

impl ChunkLoader for MockLoader {
    fn change_radius(&self, radius: i32) {
        self.calls.lock().push(LoaderCall::ChangeRadius(radius));
    }

    fn move_to(&self, position: Vec3) {
        self.calls.lock().push(LoaderCall::MoveTo(position));
    }

    fn request_sub_chunks(&self, dimension: i32, centre: SubChunkPos, offsets: &[SubChunkOffset]) {
        self.calls.lock().push(LoaderCall::RequestSubChunks {
            dimension,
            centre,
            offsets: offsets.to_vec(),
        });
    }
}

/// A session over mock collaborators with its outbound queue exposed.
pub(crate) struct Fixture {
    pub(crate) session: Session,
    pub(crate) actor: Arc<MockPlayer>,
    pub(crate) world: Arc<MockWorld>,
    pub(crate) loader: Arc<MockLoader>,
    pub(crate) ids: Arc<HashedNetworkIds>,
    pub(crate) rx: mpsc::UnboundedReceiver<GamePacket>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub(crate) fn with_config(config: SessionConfig) -> Self {
        let world = Arc::new(MockWorld::default());
        let actor = Arc::new(MockPlayer::new(0, "Steve").in_world(world.clone()));
        let loader = Arc::new(MockLoader::default());
        let mut ids = HashedNetworkIds::new();
        ids.register_item("minecraft:diamond_sword", 316);
        ids.register_item("minecraft:shield", 355);
        let ids = Arc::new(ids);

        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session::new(
            config,
            actor.clone(),
            loader.clone(),
            ids.clone(),
            tx,
        );
        Self {
            session,
            actor,
            world,
            loader,
            ids,
            rx,
        }
    }

    /// Every packet queued so far.
    pub(crate) fn drain(&mut self) -> Vec<GamePacket> {
        let mut packets = Vec::new();
        while let Ok(packet) = self.rx.try_recv() {
            packets.push(packet);
        }
        packets
    }
}
