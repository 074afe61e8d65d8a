//! Mock host collaborators shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::model::{
    BlockHitResult, BlockPos, BlockState, Direction, GameMode, Hand, ItemStack, SoundCategory,
    SoundGroup, SoundSpec,
};
use crate::traits::{Actor, BlockCapability, LootContext, LootResolver, Registry, World};

pub const POS: BlockPos = BlockPos::new(12, 64, -3);

pub fn hit() -> BlockHitResult {
    BlockHitResult {
        pos: POS,
        side: Direction::Up,
    }
}

pub fn wheat(age: i32) -> BlockState {
    BlockState::new("minecraft:wheat").with_int("age", 0..=7, age)
}

pub fn iron_hoe() -> ItemStack {
    ItemStack::tool("minecraft:iron_hoe", 250)
}

pub struct MockPlayer {
    pub game_mode: GameMode,
    pub sneaking: bool,
    pub main_hand: ItemStack,
    pub off_hand: ItemStack,
    pub experience_grants: Vec<i32>,
    pub broken_tools: Vec<Hand>,
    /// Damage requests in call order.
    pub damage_requests: Vec<(Hand, u32)>,
    /// Stands in for host-side durability rules such as unbreakable stacks.
    pub unbreakable: bool,
}

impl MockPlayer {
    pub fn new() -> Self {
        Self {
            game_mode: GameMode::Survival,
            sneaking: false,
            main_hand: ItemStack::empty(),
            off_hand: ItemStack::empty(),
            experience_grants: Vec::new(),
            broken_tools: Vec::new(),
            damage_requests: Vec::new(),
            unbreakable: false,
        }
    }

    pub fn holding(mut self, hand: Hand, stack: ItemStack) -> Self {
        *self.stack_mut(hand) = stack;
        self
    }

    fn stack_mut(&mut self, hand: Hand) -> &mut ItemStack {
        match hand {
            Hand::MainHand => &mut self.main_hand,
            Hand::OffHand => &mut self.off_hand,
        }
    }
}

impl Actor for MockPlayer {
    fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn stack_in_hand(&self, hand: Hand) -> &ItemStack {
        match hand {
            Hand::MainHand => &self.main_hand,
            Hand::OffHand => &self.off_hand,
        }
    }

    /// Host durability: breaks once damage reaches `max_damage`, consuming
    /// one item and resetting the counter.
    fn damage_stack_in_hand(&mut self, hand: Hand, amount: u32) -> bool {
        self.damage_requests.push((hand, amount));
        if self.unbreakable {
            return false;
        }
        let stack = self.stack_mut(hand);
        if stack.max_damage == 0 || stack.is_empty() || amount == 0 {
            return false;
        }
        stack.damage = stack.damage.saturating_add(amount);
        if stack.damage >= stack.max_damage {
            stack.decrement(1);
            stack.damage = 0;
            return true;
        }
        false
    }

    fn add_experience(&mut self, amount: i32) {
        self.experience_grants.push(amount);
    }

    fn send_tool_break_status(&mut self, hand: Hand) {
        self.broken_tools.push(hand);
    }
}

/// What the loot resolver was asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct LootRequest {
    pub origin: BlockPos,
    pub block_state: BlockState,
    pub tool: ItemStack,
}

pub struct MockWorld {
    pub states: HashMap<BlockPos, BlockState>,
    pub authoritative: bool,
    /// Drops per block id.
    pub loot: HashMap<String, Vec<ItemStack>>,
    pub loot_requests: RefCell<Vec<LootRequest>>,
    pub dropped: Vec<(BlockPos, Direction, ItemStack)>,
    pub writes: Vec<(BlockPos, BlockState)>,
    pub sounds: Vec<(BlockPos, SoundSpec)>,
}

impl MockWorld {
    pub fn with_block(pos: BlockPos, state: BlockState) -> Self {
        let mut states = HashMap::new();
        states.insert(pos, state);
        Self {
            states,
            authoritative: true,
            loot: HashMap::new(),
            loot_requests: RefCell::new(Vec::new()),
            dropped: Vec::new(),
            writes: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn with_loot(mut self, block: &str, drops: Vec<ItemStack>) -> Self {
        self.loot.insert(block.to_string(), drops);
        self
    }

    pub fn emitted(&self) -> Vec<ItemStack> {
        self.dropped.iter().map(|(_, _, stack)| stack.clone()).collect()
    }

    /// Whether the world saw no writes, drops or sounds.
    pub fn untouched(&self) -> bool {
        self.writes.is_empty() && self.dropped.is_empty() && self.sounds.is_empty()
    }
}

impl LootResolver for MockWorld {
    fn dropped_stacks(&self, context: &LootContext<'_>) -> Vec<ItemStack> {
        self.loot_requests.borrow_mut().push(LootRequest {
            origin: context.origin,
            block_state: context.block_state.clone(),
            tool: context.tool.clone(),
        });
        self.loot
            .get(context.block_state.block())
            .cloned()
            .unwrap_or_default()
    }
}

impl World for MockWorld {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        self.states
            .get(&pos)
            .cloned()
            .unwrap_or_else(|| BlockState::new("minecraft:air"))
    }

    fn set_block_state(&mut self, pos: BlockPos, state: BlockState) {
        self.writes.push((pos, state.clone()));
        self.states.insert(pos, state);
    }

    fn play_sound(&mut self, pos: BlockPos, sound: &SoundSpec) {
        self.sounds.push((pos, sound.clone()));
    }

    fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    fn drop_stack(&mut self, pos: BlockPos, side: Direction, stack: ItemStack) {
        self.dropped.push((pos, side, stack));
    }
}

pub struct MockRegistry {
    pub crops: HashSet<String>,
    pub hoes: HashSet<String>,
    /// Block id → items able to harvest it. Blocks listed here require a tool.
    pub required_tools: HashMap<String, HashSet<String>>,
    pub picks: HashMap<String, String>,
}

impl Default for MockRegistry {
    fn default() -> Self {
        fn set(ids: &[&str]) -> HashSet<String> {
            ids.iter().map(|s| s.to_string()).collect()
        }
        let picks = [
            ("minecraft:wheat", "minecraft:wheat_seeds"),
            ("minecraft:carrots", "minecraft:carrot"),
            ("minecraft:potatoes", "minecraft:potato"),
            ("minecraft:beetroots", "minecraft:beetroot_seeds"),
            ("minecraft:nether_wart", "minecraft:nether_wart"),
            ("minecraft:cocoa", "minecraft:cocoa_beans"),
        ]
        .into_iter()
        .map(|(block, item)| (block.to_string(), item.to_string()))
        .collect();

        Self {
            crops: set(&[
                "minecraft:wheat",
                "minecraft:carrots",
                "minecraft:potatoes",
                "minecraft:beetroots",
            ]),
            hoes: set(&[
                "minecraft:wooden_hoe",
                "minecraft:iron_hoe",
                "minecraft:diamond_hoe",
            ]),
            required_tools: HashMap::new(),
            picks,
        }
    }
}

impl Registry for MockRegistry {
    fn has_capability(&self, block: &str, capability: BlockCapability) -> bool {
        match capability {
            BlockCapability::CropLike => self.crops.contains(block),
        }
    }

    fn is_hoe(&self, stack: &ItemStack) -> bool {
        !stack.is_empty() && self.hoes.contains(&stack.item)
    }

    fn requires_tool(&self, state: &BlockState) -> bool {
        self.required_tools.contains_key(state.block())
    }

    fn is_suitable_for(&self, tool: &ItemStack, state: &BlockState) -> bool {
        self.required_tools
            .get(state.block())
            .map_or(true, |items| items.contains(&tool.item))
    }

    fn pick_stack(&self, state: &BlockState) -> ItemStack {
        self.picks
            .get(state.block())
            .map_or_else(ItemStack::empty, |item| ItemStack::new(item.clone(), 1))
    }

    fn sound_group(&self, _state: &BlockState) -> SoundGroup {
        SoundGroup {
            break_sound: "minecraft:block.crop.break".to_string(),
            volume: 1.0,
            pitch: 1.0,
            category: SoundCategory::Blocks,
        }
    }
}
