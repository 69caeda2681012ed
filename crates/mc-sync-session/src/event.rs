//! World events a viewer can be shown.

use mc_sync_proto::metadata::flag;
use mc_sync_proto::packets::change_dimension::{
    DIMENSION_END, DIMENSION_NETHER, DIMENSION_OVERWORLD,
};
use mc_sync_world::block::Block;

#[derive(Debug, Clone, PartialEq)]
pub enum Particle {
    BlockBreak { block: Block },
    /// Cracks on the given block face while it is being mined.
    PunchBlock { block: Block, face: u8 },
    /// Coloured dust, RGBA.
    Dust { colour: [u8; 4] },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sound {
    BlockPlace { block: Block },
    BlockBreak { block: Block },
    Click,
    Note { instrument: u8, pitch: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityAction {
    SwingArm,
    Hurt,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    Sneaking,
    Sprinting,
    Invisible,
    OnFire,
    Breathing,
}

impl EntityState {
    /// Bit in the entity flags metadata entry.
    pub fn flag(self) -> u32 {
        match self {
            EntityState::Sneaking => flag::SNEAKING,
            EntityState::Sprinting => flag::SPRINTING,
            EntityState::Invisible => flag::INVISIBLE,
            EntityState::OnFire => flag::ON_FIRE,
            EntityState::Breathing => flag::BREATHING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl Dimension {
    pub fn network_id(self) -> i32 {
        match self {
            Dimension::Overworld => DIMENSION_OVERWORLD,
            Dimension::Nether => DIMENSION_NETHER,
            Dimension::End => DIMENSION_END,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_flags() {
        assert_eq!(EntityState::OnFire.flag(), 0);
        assert_eq!(EntityState::Sneaking.flag(), 1);
        assert_eq!(EntityState::Sprinting.flag(), 3);
        assert_eq!(EntityState::Invisible.flag(), 5);
        assert_eq!(EntityState::Breathing.flag(), 35);
    }

    #[test]
    fn dimension_ids() {
        assert_eq!(Dimension::Overworld.network_id(), 0);
        assert_eq!(Dimension::Nether.network_id(), 1);
        assert_eq!(Dimension::End.network_id(), 2);
    }
}
