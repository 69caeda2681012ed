//! Block values as the view layer sees them: a namespaced name plus states.

use std::collections::BTreeMap;
use std::fmt;

pub const AIR: &str = "minecraft:air";
pub const LECTERN: &str = "minecraft:lectern";

/// A single block state property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateValue {
    Byte(u8),
    Int(i32),
    String(String),
}

/// A block with its state properties. States are kept sorted by key, which is
/// the order the client hashes them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub name: String,
    pub states: BTreeMap<String, StateValue>,
}

impl Block {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            states: BTreeMap::new(),
        }
    }

    pub fn air() -> Self {
        Self::new(AIR)
    }

    /// Builder-style state setter.
    pub fn with_state(mut self, key: &str, value: StateValue) -> Self {
        self.states.insert(key.to_string(), value);
        self
    }

    pub fn is_air(&self) -> bool {
        self.name == AIR
    }

    pub fn is_lectern(&self) -> bool {
        self.name == LECTERN
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::air()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.states.is_empty() {
            f.write_str("[")?;
            for (i, (key, value)) in self.states.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                match value {
                    StateValue::Byte(v) => write!(f, "{key}={v}")?,
                    StateValue::Int(v) => write!(f, "{key}={v}")?,
                    StateValue::String(v) => write!(f, "{key}={v}")?,
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lectern_detection() {
        let lectern = Block::new(LECTERN).with_state("powered_bit", StateValue::Byte(0));
        assert!(lectern.is_lectern());
        assert!(!Block::air().is_lectern());
    }

    #[test]
    fn display_lists_sorted_states() {
        let block = Block::new("minecraft:lectern")
            .with_state("powered_bit", StateValue::Byte(1))
            .with_state("direction", StateValue::Int(2));
        assert_eq!(
            block.to_string(),
            "minecraft:lectern[direction=2,powered_bit=1]"
        );
    }
}
