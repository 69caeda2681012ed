//! Item stacks held by entities.

/// A stack of a named item. Count 0 means an empty hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemStack {
    /// Namespaced item identifier, e.g. `"minecraft:stone"`.
    pub name: String,
    /// Damage or variant metadata.
    pub meta: u16,
    pub count: u16,
}

impl ItemStack {
    pub fn new(name: &str, count: u16) -> Self {
        Self {
            name: name.to_string(),
            meta: 0,
            count,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.name.is_empty() || self.name == "minecraft:air"
    }
}
