//! Two-phase harvest pipeline.
//!
//! [`HarvestPlan::compute`] reads the mature crop and resolves everything the
//! harvest will produce; [`HarvestPlan::commit`] then applies it to the world:
//! 1. **Drops**: every computed stack, minus one seed unit, ejected toward the clicked face
//! 2. **Reset**: growth stage back to its minimum
//! 3. **Sound**: the block's break sound, if enabled
//!
//! Loot is resolved before any write, so it always reflects the mature state.

use crate::harvest::growth::GrowthProperty;
use crate::model::{BlockPos, BlockState, Direction, ItemStack, SoundSpec};
use crate::traits::{LootContext, Registry, World};

// ============================================================================
// Plan
// ============================================================================

/// Effects of one harvest, resolved from the pre-reset block state.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestPlan {
    /// Crop position
    pub pos: BlockPos,

    /// Face drops are ejected toward
    pub side: Direction,

    /// Drops after seed removal, in loot order
    pub drops: Vec<ItemStack>,

    /// Whether one seed unit was taken from `drops`
    pub seed_removed: bool,

    /// State written back on commit
    pub reset_state: BlockState,

    /// Sound played on commit, if any
    pub sound: Option<SoundSpec>,
}

/// Statistics about a committed harvest.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarvestStats {
    /// Number of stacks spawned into the world
    pub stacks_dropped: usize,

    /// Sum of the counts of all spawned stacks
    pub items_dropped: u64,

    /// Whether a seed unit was kept back
    pub seed_removed: bool,

    pub sound_played: bool,
}

impl HarvestPlan {
    /// Resolves drops and the reset state without mutating the world.
    ///
    /// `context.block_state` must be the mature state currently in the world.
    pub fn compute<W, R>(
        world: &W,
        registry: &R,
        context: &LootContext<'_>,
        growth: &GrowthProperty,
        side: Direction,
        play_sound: bool,
    ) -> Self
    where
        W: World + ?Sized,
        R: Registry + ?Sized,
    {
        let state = context.block_state;

        let mut drops = world.dropped_stacks(context);
        let seed_removed = remove_one_seed(&mut drops, &registry.pick_stack(state));

        let sound = play_sound.then(|| SoundSpec::break_sound(&registry.sound_group(state)));

        Self {
            pos: context.origin,
            side,
            drops,
            seed_removed,
            reset_state: growth.reset(state),
            sound,
        }
    }

    /// Applies the plan. The growth reset is the last state mutation.
    pub fn commit<W>(self, world: &mut W) -> HarvestStats
    where
        W: World + ?Sized,
    {
        let mut stats = HarvestStats {
            seed_removed: self.seed_removed,
            ..HarvestStats::default()
        };

        for stack in self.drops {
            // The host never spawns empty stacks.
            if stack.is_empty() {
                continue;
            }
            stats.stacks_dropped += 1;
            stats.items_dropped = stats.items_dropped.saturating_add(u64::from(stack.count));
            world.drop_stack(self.pos, self.side, stack);
        }

        world.set_block_state(self.pos, self.reset_state);

        if let Some(sound) = &self.sound {
            world.play_sound(self.pos, sound);
            stats.sound_played = true;
        }

        stats
    }
}

/// Takes one unit off the first non-empty stack of the same item kind as `seed`.
///
/// Returns `false`, leaving `drops` untouched, when no stack matches.
pub fn remove_one_seed(drops: &mut [ItemStack], seed: &ItemStack) -> bool {
    if seed.is_empty() {
        return false;
    }
    match drops
        .iter_mut()
        .find(|stack| !stack.is_empty() && stack.is_same_item(seed))
    {
        Some(stack) => {
            stack.decrement(1);
            true
        }
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
