//! MobEquipment (0x1F), Server → Client.
//!
//! Shows what another entity is holding in either hand.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::item_stack::ItemStack;
use crate::types::VarUInt64;

/// Container window ID of the main inventory.
pub const WINDOW_INVENTORY: u8 = 0;
/// Container window ID of the off-hand slot.
pub const WINDOW_OFF_HAND: u8 = 119;

/// Equipment change for a mob/player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobEquipment {
    /// Runtime ID of the entity whose equipment changed.
    pub entity_runtime_id: u64,
    /// The item being held.
    pub item: ItemStack,
    /// Inventory slot the item is from.
    pub inventory_slot: u8,
    /// Hotbar slot (0-8).
    pub hotbar_slot: u8,
    pub window_id: u8,
}

impl MobEquipment {
    pub fn main_hand(entity_runtime_id: u64, item: ItemStack) -> Self {
        Self {
            entity_runtime_id,
            item,
            inventory_slot: 0,
            hotbar_slot: 0,
            window_id: WINDOW_INVENTORY,
        }
    }

    pub fn off_hand(entity_runtime_id: u64, item: ItemStack) -> Self {
        Self {
            window_id: WINDOW_OFF_HAND,
            ..Self::main_hand(entity_runtime_id, item)
        }
    }
}

impl ProtoEncode for MobEquipment {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        self.item.proto_encode(buf);
        buf.put_u8(self.inventory_slot);
        buf.put_u8(self.hotbar_slot);
        buf.put_u8(self.window_id);
    }
}
