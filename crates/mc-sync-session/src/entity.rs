//! Collaborator traits for the entities and world the session views.

use std::sync::Arc;

use mc_sync_proto::types::{BlockPos, Uuid, Vec3};
use mc_sync_world::block::Block;
use mc_sync_world::item::ItemStack;

/// Persistent identity of a world entity, stable across sessions.
pub type EntityId = Uuid;

/// A world entity as seen by the view layer.
pub trait Entity: Send + Sync {
    fn entity_id(&self) -> EntityId;
    fn position(&self) -> Vec3;
    fn pitch(&self) -> f32;
    fn yaw(&self) -> f32;
    /// Network entity type identifier, e.g. `"minecraft:zombie"`.
    fn entity_type(&self) -> &str;

    /// Client-driven actor capability (players).
    fn controllable(&self) -> Option<&dyn Controllable> {
        None
    }

    fn item_carrier(&self) -> Option<&dyn ItemCarrier> {
        None
    }
}

/// Entities that hold items in their hands.
pub trait ItemCarrier {
    /// `(main_hand, off_hand)`.
    fn held_items(&self) -> (ItemStack, ItemStack);
}

/// A client-driven actor. Request handlers act on the session's own
/// controllable; other controllables are shown as players.
pub trait Controllable: Entity {
    fn uuid(&self) -> Uuid;
    fn name(&self) -> &str;
    fn eye_position(&self) -> Vec3;
    /// World the actor currently lives in.
    fn world(&self) -> Arc<dyn World>;

    fn pick_block(&self, pos: BlockPos);
    fn execute_command(&self, command_line: &str);
    fn respawn(&self);
    fn turn_lectern_page(&self, pos: BlockPos, page: u8) -> Result<(), String>;
}

/// Read access to the authoritative block model.
pub trait World: Send + Sync {
    fn block(&self, pos: BlockPos) -> Block;
}
