//! Network ID lookup for blocks and items.

use std::collections::HashMap;

use crate::block::Block;
use crate::block_hash::hash_block_state;
use crate::item::ItemStack;
use mc_sync_proto::item_stack::ItemStack as NetworkItemStack;

/// Maps world values to the numeric IDs the client knows them by.
pub trait NetworkIds: Send + Sync {
    fn block_runtime_id(&self, block: &Block) -> u32;

    /// Numeric item ID, `None` for items the client does not know.
    fn item_runtime_id(&self, name: &str) -> Option<i32>;

    /// Wire form of a held item. Unknown items are sent as an empty hand.
    fn network_item(&self, item: &ItemStack) -> NetworkItemStack {
        if item.is_empty() {
            return NetworkItemStack::empty();
        }
        match self.item_runtime_id(&item.name) {
            Some(id) => NetworkItemStack::new(id, item.count, item.meta),
            None => NetworkItemStack::empty(),
        }
    }
}

/// Block IDs are FNV-1a hashes of the block state; item IDs come from a
/// registered table.
#[derive(Debug, Default)]
pub struct HashedNetworkIds {
    items: HashMap<String, i32>,
}

impl HashedNetworkIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item under its numeric ID. Re-registering replaces the ID.
    pub fn register_item(&mut self, name: &str, runtime_id: i32) {
        self.items.insert(name.to_string(), runtime_id);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl NetworkIds for HashedNetworkIds {
    fn block_runtime_id(&self, block: &Block) -> u32 {
        hash_block_state(block)
    }

    fn item_runtime_id(&self, name: &str) -> Option<i32> {
        self.items.get(name).copied()
    }
}
