use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::config::{HarvestConfig, BUILTIN_EXTRA_CROPS};
use crate::harvest::{lookup_growth_property, GrowthProperty, HarvestPlan, AGE_PROPERTY};
use crate::model::{BlockHitResult, BlockState, Hand, InteractionResult, ItemStack};
use crate::traits::{Actor, BlockCapability, LootContext, Registry, World};

/// Handles the host's use-block event to right-click harvest mature crops.
///
/// Built once per session from an immutable [`HarvestConfig`]; every
/// interaction is then decided by [`UseBlockHandler::handle`].
pub struct UseBlockHandler<R: Registry> {
    registry: R,
    config: HarvestConfig,
    extra_crops: HashSet<String>,
}

impl<R: Registry> UseBlockHandler<R> {
    pub fn new(registry: R, config: HarvestConfig) -> Self {
        let extra_crops = BUILTIN_EXTRA_CROPS
            .iter()
            .map(|id| id.to_string())
            .chain(config.crops.iter().cloned())
            .collect();
        Self {
            registry,
            config,
            extra_crops,
        }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Decides whether the right-click is a harvest.
    ///
    /// Returns [`InteractionResult::Success`] only for a fully grown crop
    /// clicked with the eligible hand. The harvest side effects run only when
    /// the world is authoritative; prediction passes still get `Success` so
    /// the host suppresses its default handling.
    #[instrument(level = "trace", skip(self, actor, world))]
    pub fn handle<A, W>(
        &self,
        actor: &mut A,
        world: &mut W,
        hand: Hand,
        hit: BlockHitResult,
    ) -> InteractionResult
    where
        A: Actor,
        W: World,
    {
        if actor.game_mode().is_spectator() {
            return InteractionResult::Pass;
        }

        let pos = hit.pos;
        let state = world.block_state(pos);
        if !self.is_crop(&state)
            || self.interaction_hand(actor) != Some(hand)
            || !self.can_harvest(actor.stack_in_hand(hand), &state)
        {
            return InteractionResult::Pass;
        }

        let growth = match lookup_growth_property(&state, AGE_PROPERTY) {
            Ok(growth) => growth,
            Err(fault) => {
                debug!(
                    x = pos.x,
                    y = pos.y,
                    z = pos.z,
                    block = state.block(),
                    %fault,
                    "Non-blocking fault reading crop growth stage; most probably a non-crop id was added to the configured crops"
                );
                return InteractionResult::Pass;
            }
        };

        if !growth.is_mature() {
            return InteractionResult::Pass;
        }

        if world.is_authoritative() {
            self.harvest(actor, world, hand, hit, &state, &growth);
        }
        InteractionResult::Success
    }

    /// Whether the block is a native crop or one of the extra crop ids.
    pub fn is_crop(&self, state: &BlockState) -> bool {
        self.registry
            .has_capability(state.block(), BlockCapability::CropLike)
            || self.extra_crops.contains(state.block())
    }

    /// Returns the hand allowed to harvest, if any.
    ///
    /// Sneaking disables harvesting. A hoe in the main hand wins over one in
    /// the off hand; without any hoe the main hand qualifies unless a hoe is required.
    pub fn interaction_hand<A: Actor>(&self, actor: &A) -> Option<Hand> {
        if actor.is_sneaking() {
            return None;
        }
        if self.registry.is_hoe(actor.stack_in_hand(Hand::MainHand)) {
            return Some(Hand::MainHand);
        }
        if self.registry.is_hoe(actor.stack_in_hand(Hand::OffHand)) {
            return Some(Hand::OffHand);
        }
        (!self.config.require_hoe).then_some(Hand::MainHand)
    }

    fn can_harvest(&self, tool: &ItemStack, state: &BlockState) -> bool {
        !self.registry.requires_tool(state) || self.registry.is_suitable_for(tool, state)
    }

    fn harvest<A, W>(
        &self,
        actor: &mut A,
        world: &mut W,
        hand: Hand,
        hit: BlockHitResult,
        state: &BlockState,
        growth: &GrowthProperty,
    ) where
        A: Actor,
        W: World,
    {
        self.grant_exp(actor);
        self.damage_hoe(actor, hand);

        let plan = {
            let context = LootContext {
                origin: hit.pos,
                block_state: state,
                this_entity: &*actor,
                tool: actor.stack_in_hand(hand),
            };
            HarvestPlan::compute(
                &*world,
                &self.registry,
                &context,
                growth,
                hit.side,
                self.config.play_sound,
            )
        };
        let stats = plan.commit(world);

        trace!(
            block = state.block(),
            stacks = stats.stacks_dropped,
            items = stats.items_dropped,
            seed_removed = stats.seed_removed,
            "Crop harvested"
        );
    }

    fn grant_exp<A: Actor>(&self, actor: &mut A) {
        if self.config.granted_exp >= 0 {
            actor.add_experience(self.config.granted_exp);
        }
    }

    fn damage_hoe<A: Actor>(&self, actor: &mut A, hand: Hand) {
        if self.config.require_hoe
            && self.config.damage_on_harvest > 0
            && !actor.game_mode().is_creative()
        {
            let amount = self.config.damage_on_harvest.unsigned_abs();
            if actor.damage_stack_in_hand(hand, amount) {
                actor.send_tool_break_status(hand);
            }
        }
    }
}
