use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Face of a block, used to eject drops toward the clicked side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    MainHand,
    OffHand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHitResult {
    pub pos: BlockPos,
    pub side: Direction,
}

/// Signal returned to the host. `Success` suppresses the default block-use handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionResult {
    Pass,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn is_spectator(self) -> bool {
        self == GameMode::Spectator
    }

    pub fn is_creative(self) -> bool {
        self == GameMode::Creative
    }
}

/// A held tool, a drop, or the item a block picks as.
///
/// `max_damage == 0` marks a stack that cannot take damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: String, // e.g., "minecraft:wheat_seeds"
    pub count: u32,
    pub damage: u32,
    pub max_damage: u32,
}

impl ItemStack {
    pub const AIR: &'static str = "minecraft:air";

    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
            damage: 0,
            max_damage: 0,
        }
    }

    /// Creates a single damageable tool with the given durability.
    pub fn tool(item: impl Into<String>, max_damage: u32) -> Self {
        Self {
            max_damage,
            ..Self::new(item, 1)
        }
    }

    pub fn empty() -> Self {
        Self::new(Self::AIR, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item == Self::AIR
    }

    /// Equality by item kind, ignoring count and damage.
    pub fn is_same_item(&self, other: &ItemStack) -> bool {
        self.item == other.item
    }

    pub fn decrement(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

/// One property of a block state together with its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateProperty {
    Int { values: BTreeSet<i32>, value: i32 },
    Bool(bool),
    Enum { values: Vec<String>, value: String },
}

impl StateProperty {
    pub fn int(range: RangeInclusive<i32>, value: i32) -> Self {
        StateProperty::Int {
            values: range.collect(),
            value,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StateProperty::Int { .. } => "an integer property",
            StateProperty::Bool(_) => "a boolean property",
            StateProperty::Enum { .. } => "an enum property",
        }
    }
}

/// Host-owned block state: block identifier plus named properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    block: String,
    properties: BTreeMap<String, StateProperty>,
}

impl BlockState {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, property: StateProperty) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    pub fn with_int(self, name: impl Into<String>, range: RangeInclusive<i32>, value: i32) -> Self {
        self.with_property(name, StateProperty::int(range, value))
    }

    /// Stable registry identifier of the block, e.g. `"minecraft:wheat"`.
    pub fn block(&self) -> &str {
        &self.block
    }

    pub fn property(&self, name: &str) -> Option<&StateProperty> {
        self.properties.get(name)
    }

    pub fn int_value(&self, name: &str) -> Option<i32> {
        match self.properties.get(name) {
            Some(StateProperty::Int { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// Overwrites the value of an existing integer property. Returns `false`
    /// when the property is missing, not an integer, or `value` is not legal.
    pub(crate) fn set_int(&mut self, name: &str, new_value: i32) -> bool {
        match self.properties.get_mut(name) {
            Some(StateProperty::Int { values, value }) if values.contains(&new_value) => {
                *value = new_value;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCategory {
    Master,
    Blocks,
    Players,
    Ambient,
}

/// Sounds a block plays; only the break sound matters here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundGroup {
    pub break_sound: String,
    pub volume: f32,
    pub pitch: f32,
    pub category: SoundCategory,
}

/// A concrete sound to play at a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    pub sound: String,
    pub category: SoundCategory,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundSpec {
    pub fn break_sound(group: &SoundGroup) -> Self {
        Self {
            sound: group.break_sound.clone(),
            category: group.category,
            volume: group.volume,
            pitch: group.pitch,
        }
    }
}
