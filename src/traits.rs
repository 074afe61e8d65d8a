//! Collaborator seams onto the host engine.
//!
//! The handler never touches host objects directly: the acting entity, the
//! world and the block/item registry are all reached through these traits.

use crate::model::{
    BlockPos, BlockState, Direction, GameMode, Hand, ItemStack, SoundGroup, SoundSpec,
};

/// Capabilities a registry can report for a block identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCapability {
    /// Natively part of the host's crop family.
    CropLike,
}

/// The entity performing the right-click.
pub trait Actor {
    fn game_mode(&self) -> GameMode;

    fn is_sneaking(&self) -> bool;

    fn stack_in_hand(&self, hand: Hand) -> &ItemStack;

    /// Damages the stack in `hand` by `amount` points under the host's
    /// durability rules. Returns `true` when the stack broke.
    fn damage_stack_in_hand(&mut self, hand: Hand, amount: u32) -> bool;

    fn add_experience(&mut self, amount: i32);

    /// Feedback shown to the actor when the tool in `hand` breaks.
    fn send_tool_break_status(&mut self, hand: Hand);
}

/// Parameters handed to the loot resolver when a block is harvested.
pub struct LootContext<'a> {
    pub origin: BlockPos,
    pub block_state: &'a BlockState,
    pub this_entity: &'a dyn Actor,
    pub tool: &'a ItemStack,
}

/// Resolves the stacks a block state drops when broken.
pub trait LootResolver {
    /// Returns the drops in loot-table order.
    fn dropped_stacks(&self, context: &LootContext<'_>) -> Vec<ItemStack>;
}

/// Mutable accessor onto the host world.
pub trait World: LootResolver {
    fn block_state(&self, pos: BlockPos) -> BlockState;

    fn set_block_state(&mut self, pos: BlockPos, state: BlockState);

    fn play_sound(&mut self, pos: BlockPos, sound: &SoundSpec);

    /// `false` during client-side prediction passes.
    fn is_authoritative(&self) -> bool;

    /// Spawns `stack` at `pos`, ejected toward `side`.
    fn drop_stack(&mut self, pos: BlockPos, side: Direction, stack: ItemStack);
}

/// Block and item lookups answered by the host registries.
pub trait Registry {
    fn has_capability(&self, block: &str, capability: BlockCapability) -> bool;

    /// Whether the item is hoe-class.
    fn is_hoe(&self, stack: &ItemStack) -> bool;

    /// Whether breaking `state` requires a specific tool class.
    fn requires_tool(&self, state: &BlockState) -> bool;

    fn is_suitable_for(&self, tool: &ItemStack, state: &BlockState) -> bool;

    /// The item representing the block itself, usually its seed.
    fn pick_stack(&self, state: &BlockState) -> ItemStack;

    fn sound_group(&self, state: &BlockState) -> SoundGroup;
}
