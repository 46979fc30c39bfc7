//! Shared components, resources, events, and states for Shorehaven.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    MainMenu,
    Playing,
    GameOver,
}

// ═══════════════════════════════════════════════════════════════════════
// SCENES
// ═══════════════════════════════════════════════════════════════════════

/// The themed areas the avatar can roam. Each scene is data (entry point,
/// exit zones, local quest list) plus shared behavior — see `player::scenes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SceneId {
    #[default]
    Island,
    House,
    Beach,
    Mountain,
}

impl SceneId {
    pub fn label(self) -> &'static str {
        match self {
            SceneId::Island => "Island",
            SceneId::House => "House",
            SceneId::Beach => "Beach",
            SceneId::Mountain => "Mountain",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GAME TIME
// ═══════════════════════════════════════════════════════════════════════

/// In-game clock. Day is 1-based and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    pub day: u32,
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            day: 1,
            hour: WAKE_HOUR,
            minute: 0,
        }
    }
}

impl GameTime {
    /// Advances the clock by exactly one game-minute, propagating
    /// minute -> hour -> day rollovers.
    pub fn advance_minute(&mut self) {
        self.minute += 1;
        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
            if self.hour >= 24 {
                self.hour = 0;
                self.day += 1;
            }
        }
    }

    /// Formats as "HH:MM" for the HUD.
    pub fn clock_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// NEED STATS
// ═══════════════════════════════════════════════════════════════════════

/// The four bounded need stats plus money. Money is unbounded above but
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub meal: f32,
    pub sleep: f32,
    pub happiness: f32,
    pub cleanliness: f32,
    pub money: f32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            meal: STAT_MAX,
            sleep: STAT_MAX,
            happiness: STAT_MAX,
            cleanliness: STAT_MAX,
            money: STARTING_MONEY,
        }
    }
}

/// Identifies one of the need stats, e.g. for the game-over cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Meal,
    Sleep,
    Happiness,
    Cleanliness,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Meal => "Meal",
            StatKind::Sleep => "Sleep",
            StatKind::Happiness => "Happiness",
            StatKind::Cleanliness => "Cleanliness",
        }
    }
}

/// A partial change to the stats, applied through the clamped mutation path.
/// Zero fields leave the corresponding stat untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatDeltas {
    pub meal: f32,
    pub sleep: f32,
    pub happiness: f32,
    pub cleanliness: f32,
    pub money: f32,
}

impl Stats {
    /// Applies a delta set and clamps every bounded field to [0, STAT_MAX];
    /// money is clamped to >= 0 only. Total for any input.
    pub fn apply(&mut self, deltas: &StatDeltas) {
        self.meal = (self.meal + deltas.meal).clamp(0.0, STAT_MAX);
        self.sleep = (self.sleep + deltas.sleep).clamp(0.0, STAT_MAX);
        self.happiness = (self.happiness + deltas.happiness).clamp(0.0, STAT_MAX);
        self.cleanliness = (self.cleanliness + deltas.cleanliness).clamp(0.0, STAT_MAX);
        self.money = (self.money + deltas.money).max(0.0);
    }

    /// One tick of continuous decay. Meal, sleep, and cleanliness drain
    /// faster than happiness.
    pub fn decay(&mut self) {
        self.apply(&StatDeltas {
            meal: -MEAL_DECAY_PER_TICK,
            sleep: -SLEEP_DECAY_PER_TICK,
            happiness: -HAPPINESS_DECAY_PER_TICK,
            cleanliness: -CLEANLINESS_DECAY_PER_TICK,
            money: 0.0,
        });
    }

    /// Returns the first need stat that has hit zero, if any.
    /// Money running out is not fatal.
    pub fn depleted(&self) -> Option<StatKind> {
        if self.meal <= 0.0 {
            Some(StatKind::Meal)
        } else if self.sleep <= 0.0 {
            Some(StatKind::Sleep)
        } else if self.happiness <= 0.0 {
            Some(StatKind::Happiness)
        } else if self.cleanliness <= 0.0 {
            Some(StatKind::Cleanliness)
        } else {
            None
        }
    }
}

/// The single source of truth for time, needs, and score.
/// Mutated only by the `stats` domain systems; everyone else reads it or
/// sends command events.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub time: GameTime,
    pub stats: Stats,
    pub score: u32,
}

impl GameStats {
    /// Restores all defaults: day 1 at 08:00, full stats, zero score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUESTS
// ═══════════════════════════════════════════════════════════════════════

/// Unique quest identifier. Catalog quests get ids from a monotonically
/// increasing counter starting at 1; scene-local quests use fixed ids at
/// `LOCAL_QUEST_ID_BASE` and above so the two ranges never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestState {
    Available,
    Active,
    Completed,
}

/// A location-bound task with stat/score rewards and a three-state lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub x: f32,
    pub y: f32,
    pub destination: SceneId,
    pub stat_changes: StatDeltas,
    pub score_increase: u32,
    pub state: QuestState,
    /// Virtual-time seconds at creation.
    pub created_at: f64,
    /// Virtual-time seconds when completed, if completed.
    pub completed_at: Option<f64>,
}

/// Declarative quest authoring input. Consumed by `CreateQuestEvent`;
/// templates in `quests::templates` produce these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestSpec {
    pub title: String,
    pub description: String,
    pub x: f32,
    pub y: f32,
    pub destination: SceneId,
    pub stat_changes: StatDeltas,
    pub score_increase: u32,
}

/// Quest records across the three lifecycle buckets. A quest lives in
/// exactly one bucket at a time and its `state` always matches the bucket.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct QuestLog {
    pub available: Vec<Quest>,
    pub active: Vec<Quest>,
    pub completed: Vec<Quest>,
    pub next_id: u32,
}

impl Default for QuestLog {
    fn default() -> Self {
        Self {
            available: Vec::new(),
            active: Vec::new(),
            completed: Vec::new(),
            next_id: 1,
        }
    }
}

impl QuestLog {
    /// Creates an Available quest from a spec, assigning the next id.
    pub fn create(&mut self, spec: QuestSpec, now: f64) -> QuestId {
        let id = QuestId(self.next_id);
        self.next_id += 1;
        self.available.push(Quest {
            id,
            title: spec.title,
            description: spec.description,
            x: spec.x,
            y: spec.y,
            destination: spec.destination,
            stat_changes: spec.stat_changes,
            score_increase: spec.score_increase,
            state: QuestState::Available,
            created_at: now,
            completed_at: None,
        });
        id
    }

    /// Available -> Active. Returns false (no state change) if the id is
    /// not in the available bucket.
    pub fn start(&mut self, id: QuestId) -> bool {
        let Some(idx) = self.available.iter().position(|q| q.id == id) else {
            return false;
        };
        let mut quest = self.available.remove(idx);
        quest.state = QuestState::Active;
        self.active.push(quest);
        true
    }

    /// Active -> Available (cancel). Returns false if not active.
    pub fn cancel(&mut self, id: QuestId) -> bool {
        let Some(idx) = self.active.iter().position(|q| q.id == id) else {
            return false;
        };
        let mut quest = self.active.remove(idx);
        quest.state = QuestState::Available;
        self.available.push(quest);
        true
    }

    /// Active -> Completed, stamping `completed_at`. Returns the completed
    /// quest (the caller applies its rewards) or None if not active.
    pub fn complete(&mut self, id: QuestId, now: f64) -> Option<&Quest> {
        let idx = self.active.iter().position(|q| q.id == id)?;
        let mut quest = self.active.remove(idx);
        quest.state = QuestState::Completed;
        quest.completed_at = Some(now);
        self.completed.push(quest);
        self.completed.last()
    }

    /// Deletes the quest from whichever bucket holds it. Idempotent.
    pub fn remove(&mut self, id: QuestId) {
        self.available.retain(|q| q.id != id);
        self.active.retain(|q| q.id != id);
        self.completed.retain(|q| q.id != id);
    }

    /// Empties all three buckets and resets the id counter to 1.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.active.is_empty() && self.completed.is_empty()
    }

    pub fn find_active(&self, id: QuestId) -> Option<&Quest> {
        self.active.iter().find(|q| q.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUEST COOLDOWNS & DAILY COMPLETIONS — scheduler bookkeeping
// ═══════════════════════════════════════════════════════════════════════

/// A scene-local quest spec: fixed id, rewards, and a marker position,
/// but no lifecycle bookkeeping.
#[derive(Debug, Clone)]
pub struct LocalQuest {
    pub id: QuestId,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub stat_changes: StatDeltas,
    pub score_increase: u32,
}

/// What to do when a completion delay elapses.
#[derive(Debug, Clone)]
pub enum CompletionTarget {
    /// A catalog-tracked quest: transition Active -> Completed and apply
    /// its rewards.
    Catalog(QuestId),
    /// A scene-local quest: apply rewards directly, no catalog membership.
    Local(LocalQuest),
}

impl CompletionTarget {
    pub fn quest_id(&self) -> QuestId {
        match self {
            CompletionTarget::Catalog(id) => *id,
            CompletionTarget::Local(quest) => quest.id,
        }
    }
}

/// A running completion delay for one quest.
#[derive(Debug, Clone)]
pub struct QuestCooldown {
    pub target: CompletionTarget,
    /// Virtual-time seconds when the delay started.
    pub started_at: f64,
    /// Chosen delay in seconds (uniform in the cooldown range).
    pub duration_secs: f32,
}

impl QuestCooldown {
    pub fn end_time(&self) -> f64 {
        self.started_at + self.duration_secs as f64
    }

    /// Remaining whole seconds, ceiling-rounded; 0 once elapsed.
    pub fn remaining_secs(&self, now: f64) -> u32 {
        let remaining = self.end_time() - now;
        if remaining <= 0.0 {
            0
        } else {
            remaining.ceil() as u32
        }
    }
}

/// At most one cooldown exists per quest id at a time — the map key
/// enforces it, and the scheduler rejects a second start while one runs.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuestCooldowns {
    pub pending: HashMap<QuestId, QuestCooldown>,
}

/// Once-per-in-game-day completion gate, keyed by (quest id, day).
/// Entries for days other than the current one are purged on day change.
#[derive(Resource, Debug, Clone, Default)]
pub struct DailyCompletions {
    pub marks: HashSet<(QuestId, u32)>,
}

impl DailyCompletions {
    pub fn is_marked(&self, id: QuestId, day: u32) -> bool {
        self.marks.contains(&(id, day))
    }

    pub fn mark(&mut self, id: QuestId, day: u32) {
        self.marks.insert((id, day));
    }

    /// Drops every mark that does not belong to `day`. Returns how many
    /// were purged. Day progression is forward-only by contract.
    pub fn purge_other_days(&mut self, day: u32) -> usize {
        let before = self.marks.len();
        self.marks.retain(|(_, d)| *d == day);
        before - self.marks.len()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY & EFFECTS
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// String IDs keep the item table data-driven.
pub type ItemId = String;

/// Item counts. A quantity reaching zero removes the entry.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub items: HashMap<ItemId, u32>,
}

impl Inventory {
    pub fn count(&self, item_id: &str) -> u32 {
        self.items.get(item_id).copied().unwrap_or(0)
    }

    /// Increments the count, creating the entry if absent.
    pub fn add(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item_id.to_string()).or_insert(0) += quantity;
    }

    /// Decrements the count, deleting the entry if it reaches zero.
    /// Returns whether anything was removed (false if absent).
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(current) = self.items.get_mut(item_id) else {
            return false;
        };
        if *current <= quantity {
            self.items.remove(item_id);
        } else {
            *current -= quantity;
        }
        true
    }
}

/// Closed set of temporary effect identities. Only one instance of a given
/// effect may be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectId {
    SpeedBoost,
}

impl EffectId {
    pub fn label(self) -> &'static str {
        match self {
            EffectId::SpeedBoost => "Speed Boost",
        }
    }
}

/// A temporary modifier with explicit start time and duration.
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub id: EffectId,
    pub name: String,
    pub duration_secs: f32,
    /// Virtual-time seconds when the effect was applied.
    pub started_at: f64,
}

impl ActiveEffect {
    pub fn is_expired(&self, now: f64) -> bool {
        now - self.started_at >= self.duration_secs as f64
    }
}

/// Currently running effects. Re-applying an effect id restarts the single
/// instance rather than stacking a second one.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveEffects {
    pub effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    /// Replaces any existing effect of the same id, then pushes the new one.
    pub fn apply(&mut self, effect: ActiveEffect) {
        self.effects.retain(|e| e.id != effect.id);
        self.effects.push(effect);
    }

    pub fn remove(&mut self, id: EffectId) {
        self.effects.retain(|e| e.id != id);
    }

    /// Pure query: effect exists and has not yet run out.
    pub fn is_active(&self, id: EffectId, now: f64) -> bool {
        self.effects.iter().any(|e| e.id == id && !e.is_expired(now))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEM REGISTRY — closed effect table, resolved once at startup
// ═══════════════════════════════════════════════════════════════════════

/// What using a consumable does. A closed set: unknown item ids have no
/// entry and using them is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Grants (or restarts) a temporary movement speed multiplier.
    SpeedBoost { duration_secs: f32 },
    /// Immediate positive meal delta through the clamped stat path.
    RestoreMeal { amount: f32 },
}

#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Purchase price at the beach shack; None = not sold anywhere.
    pub price: Option<f32>,
    pub effect: Option<ItemEffect>,
    /// Digit key that uses this item from anywhere.
    pub hotkey: Option<u8>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ItemRegistry {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemRegistry {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    pub fn by_hotkey(&self, digit: u8) -> Option<&ItemDef> {
        self.items.values().find(|def| def.hotkey == Some(digit))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER SESSION STATE
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the avatar entity.
#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// Session-scoped position/scene metadata. Written by `UpdatePositionEvent`
/// / `UpdateSceneEvent` only; never touches gameplay stats. The `day`
/// snapshot gates the daily quest reset.
#[derive(Resource, Debug, Clone)]
pub struct PlayerLocation {
    pub x: i32,
    pub y: i32,
    pub scene: SceneId,
    pub day: u32,
}

impl Default for PlayerLocation {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            scene: SceneId::Island,
            day: 1,
        }
    }
}

/// Who is playing. Identity for the leaderboard hand-off.
#[derive(Resource, Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub character: u8,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: String::from("Guest"),
            character: 1,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COMMAND EVENTS — the store's mutation surface
// ═══════════════════════════════════════════════════════════════════════

/// Replace the game clock wholesale (the clock tick computes rollovers).
#[derive(Event, Debug, Clone)]
pub struct UpdateTimeEvent {
    pub time: GameTime,
}

/// One tick of continuous stat decay.
#[derive(Event, Debug, Clone)]
pub struct DecayStatsEvent;

/// Apply a partial stat change through the clamped path.
#[derive(Event, Debug, Clone)]
pub struct ModifyStatsEvent {
    pub deltas: StatDeltas,
}

#[derive(Event, Debug, Clone)]
pub struct IncreaseScoreEvent {
    pub amount: u32,
}

/// Sleep in the house bed: advances the day, resets the clock to morning,
/// and applies the one-time recharge/decay.
#[derive(Event, Debug, Clone)]
pub struct SleepEvent;

/// Full game restart: every domain restores its defaults.
#[derive(Event, Debug, Clone)]
pub struct ResetGameEvent;

#[derive(Event, Debug, Clone)]
pub struct CreateQuestEvent {
    pub spec: QuestSpec,
}

#[derive(Event, Debug, Clone)]
pub struct StartQuestEvent {
    pub id: QuestId,
}

#[derive(Event, Debug, Clone)]
pub struct CancelQuestEvent {
    pub id: QuestId,
}

#[derive(Event, Debug, Clone)]
pub struct CompleteQuestEvent {
    pub id: QuestId,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveQuestEvent {
    pub id: QuestId,
}

#[derive(Event, Debug, Clone)]
pub struct ClearQuestsEvent;

/// Kick off the completion-with-cooldown protocol for a quest.
#[derive(Event, Debug, Clone)]
pub struct BeginQuestCompletionEvent {
    pub target: CompletionTarget,
}

#[derive(Event, Debug, Clone)]
pub struct AddItemEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveItemEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct UseItemEvent {
    pub item_id: ItemId,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveEffectEvent {
    pub effect: EffectId,
}

/// Buy an item at the beach shack: spends money and adds the item.
#[derive(Event, Debug, Clone)]
pub struct PurchaseItemEvent {
    pub item_id: ItemId,
}

/// Pure position write; coordinates are rounded to integers.
#[derive(Event, Debug, Clone)]
pub struct UpdatePositionEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Event, Debug, Clone)]
pub struct UpdateSceneEvent {
    pub scene: SceneId,
}

// ═══════════════════════════════════════════════════════════════════════
// NOTIFICATION EVENTS — broadcast after committed mutations
// ═══════════════════════════════════════════════════════════════════════

/// The store's day advanced (tick rollover or sleep).
#[derive(Event, Debug, Clone)]
pub struct DayChangedEvent {
    pub previous: u32,
    pub current: u32,
}

/// A need stat hit zero. Fired once per run; drives the game-over screen
/// and the leaderboard hand-off.
#[derive(Event, Debug, Clone)]
pub struct GameOverEvent {
    pub failed: StatKind,
    pub final_score: u32,
}

/// A completion delay was accepted and is now running.
#[derive(Event, Debug, Clone)]
pub struct QuestCompletionStartedEvent {
    pub id: QuestId,
    pub title: String,
    pub delay_secs: u32,
}

/// Why a completion request was rejected.
#[derive(Debug, Clone)]
pub enum CompletionDenial {
    CompletedToday,
    OnCooldown { remaining_secs: u32 },
}

#[derive(Event, Debug, Clone)]
pub struct QuestCompletionDeniedEvent {
    pub id: QuestId,
    pub title: String,
    pub reason: CompletionDenial,
}

/// A completion delay elapsed and the rewards were dispatched.
#[derive(Event, Debug, Clone)]
pub struct QuestRewardsAppliedEvent {
    pub id: QuestId,
    pub title: String,
    pub score_increase: u32,
}

#[derive(Event, Debug, Clone)]
pub struct EffectExpiredEvent {
    pub effect: EffectId,
}

/// Transient player feedback message.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const STAT_MAX: f32 = 100.0;
pub const STARTING_MONEY: f32 = 1000.0;
pub const WAKE_HOUR: u8 = 8;

/// One game-minute elapses per clock tick.
pub const CLOCK_TICK_SECS: f32 = 0.1;
pub const MEAL_DECAY_PER_TICK: f32 = 0.1;
pub const SLEEP_DECAY_PER_TICK: f32 = 0.1;
pub const HAPPINESS_DECAY_PER_TICK: f32 = 0.05;
pub const CLEANLINESS_DECAY_PER_TICK: f32 = 0.1;

/// Wall-clock score drip: +10 every 10 seconds while a run is live.
pub const SCORE_BONUS_INTERVAL_SECS: f32 = 10.0;
pub const SCORE_BONUS_AMOUNT: u32 = 10;

/// Sleeping restores this much sleep and costs a quarter of current meal.
pub const SLEEP_RESTORE: f32 = 30.0;
pub const SLEEP_MEAL_COST_FRACTION: f32 = 0.25;

/// Completion delay bounds, inclusive.
pub const QUEST_COOLDOWN_MIN_SECS: u32 = 5;
pub const QUEST_COOLDOWN_MAX_SECS: u32 = 15;

/// How close the avatar must be to a quest marker or zone to interact.
pub const INTERACT_RADIUS: f32 = 50.0;

/// Effect expiry sweep interval (well under one second).
pub const EFFECT_SWEEP_SECS: f32 = 0.25;

pub const BASE_PLAYER_SPEED: f32 = 160.0;
pub const SPEED_BOOST_MULTIPLIER: f32 = 2.0;
pub const SPEED_BOOST_DURATION_SECS: f32 = 10.0;

/// Scene-local quest ids live at and above this value; the catalog counter
/// starts at 1 and never reaches it.
pub const LOCAL_QUEST_ID_BASE: u32 = 10_000;

pub const LEADERBOARD_LIMIT: usize = 10;
