//! Configuration snapshot for the harvest handler.
//!
//! The host loads its config file once and hands the handler an immutable
//! [`HarvestConfig`]. Keys follow the host's camelCase file layout.

use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// Crops that lack the native crop capability but are always harvestable.
pub const BUILTIN_EXTRA_CROPS: [&str; 2] = ["minecraft:nether_wart", "minecraft:cocoa"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarvestConfig {
    /// Additional block ids to treat as crops, e.g. `"farmersdelight:tomatoes"`.
    pub crops: Vec<String>,

    /// Whether a hoe must be held in either hand.
    pub require_hoe: bool,

    /// Damage dealt to the hoe per harvest.
    ///
    /// Effective only when greater than 0 and `require_hoe` is set.
    pub damage_on_harvest: i32,

    /// Experience granted per harvest. Negative values disable the grant.
    pub granted_exp: i32,

    pub play_sound: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            crops: Vec::new(),
            require_hoe: false,
            damage_on_harvest: 0,
            granted_exp: -1,
            play_sound: true,
        }
    }
}

impl HarvestConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    pub fn with_crops<I, S>(mut self, crops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crops = crops.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_require_hoe(mut self, require_hoe: bool) -> Self {
        self.require_hoe = require_hoe;
        self
    }

    pub fn with_damage_on_harvest(mut self, damage: i32) -> Self {
        self.damage_on_harvest = damage;
        self
    }

    pub fn with_granted_exp(mut self, exp: i32) -> Self {
        self.granted_exp = exp;
        self
    }

    pub fn with_play_sound(mut self, play_sound: bool) -> Self {
        self.play_sound = play_sound;
        self
    }
}
