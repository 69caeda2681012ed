use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Per-session limits, loaded from the `[session]` table of a TOML file or
/// from a bare table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Upper bound for client-requested chunk radii.
    #[serde(default = "default_max_chunk_radius")]
    pub max_chunk_radius: i32,
    /// Maximum distance from the actor's eyes to a block it interacts with.
    #[serde(default = "default_interaction_reach")]
    pub interaction_reach: f32,
    /// Maximum number of offsets in one sub-chunk request.
    #[serde(default = "default_max_sub_chunk_offsets")]
    pub max_sub_chunk_offsets: usize,
    /// Dimension ID written into chunk packets.
    #[serde(default)]
    pub dimension: i32,
}

fn default_max_chunk_radius() -> i32 {
    16
}

fn default_interaction_reach() -> f32 {
    8.0
}

fn default_max_sub_chunk_offsets() -> usize {
    8192
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_chunk_radius: default_max_chunk_radius(),
            interaction_reach: default_interaction_reach(),
            max_sub_chunk_offsets: default_max_sub_chunk_offsets(),
            dimension: 0,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    session: Option<SessionConfig>,
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse either a document with a `[session]` table or a bare table.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        let config = match file.session {
            Some(section) => section,
            None => toml::from_str(contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chunk_radius <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_chunk_radius must be positive, got {}",
                self.max_chunk_radius
            )));
        }
        if self.interaction_reach.is_nan() || self.interaction_reach <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "interaction_reach must be positive, got {}",
                self.interaction_reach
            )));
        }
        Ok(())
    }
}
