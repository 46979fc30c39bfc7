//! Bridge domain — the uniform query/command surface over the game state.
//!
//! The per-frame simulation systems and the UI layer are equal peers here:
//! both read through `GameQueries` and write through `GameCommands`, so
//! neither takes a dependency on the other. Both façades are ordinary
//! system parameters — constructed by the schedule and injected wherever
//! they are asked for, never a global singleton.
//!
//! `GameQueries` is read-only; the ECS freely shares it across readers.
//! `GameCommands` only enqueues command events; the owning domain applies
//! them, which keeps every mutation atomic with respect to all readers.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::shared::*;

pub struct BridgePlugin;

impl Plugin for BridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_position_updates, apply_scene_updates, handle_reset),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// READ SIDE
// ═══════════════════════════════════════════════════════════════════════

/// A quest annotated with its exact distance from a query point.
#[derive(Debug, Clone)]
pub struct NearbyQuest<'a> {
    pub quest: &'a Quest,
    pub distance: f32,
}

/// Active quests within `radius` (Euclidean) of the given point.
/// Order is unspecified; distances are exact.
pub fn quests_within<'a>(quests: &'a [Quest], x: f32, y: f32, radius: f32) -> Vec<NearbyQuest<'a>> {
    quests
        .iter()
        .filter_map(|quest| {
            let distance = ((x - quest.x).powi(2) + (y - quest.y).powi(2)).sqrt();
            (distance <= radius).then_some(NearbyQuest { quest, distance })
        })
        .collect()
}

/// Read-only snapshot surface over the whole game state.
#[derive(SystemParam)]
pub struct GameQueries<'w> {
    time: Res<'w, Time>,
    game: Res<'w, GameStats>,
    log: Res<'w, QuestLog>,
    inventory: Res<'w, Inventory>,
    effects: Res<'w, ActiveEffects>,
    cooldowns: Res<'w, QuestCooldowns>,
    daily: Res<'w, DailyCompletions>,
    location: Res<'w, PlayerLocation>,
}

impl GameQueries<'_> {
    /// Virtual-time seconds since boot; the clock all effect and cooldown
    /// timing is measured against.
    pub fn now(&self) -> f64 {
        self.time.elapsed_secs_f64()
    }

    pub fn stats(&self) -> &Stats {
        &self.game.stats
    }

    pub fn score(&self) -> u32 {
        self.game.score
    }

    pub fn game_time(&self) -> GameTime {
        self.game.time
    }

    pub fn available_quests(&self) -> &[Quest] {
        &self.log.available
    }

    pub fn active_quests(&self) -> &[Quest] {
        &self.log.active
    }

    pub fn completed_quests(&self) -> &[Quest] {
        &self.log.completed
    }

    pub fn item_count(&self, item_id: &str) -> u32 {
        self.inventory.count(item_id)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn position(&self) -> (i32, i32) {
        (self.location.x, self.location.y)
    }

    pub fn scene(&self) -> SceneId {
        self.location.scene
    }

    /// High-frequency derived flag for the movement loop.
    pub fn has_speed_boost(&self) -> bool {
        self.effects.is_active(EffectId::SpeedBoost, self.now())
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.has_speed_boost() {
            SPEED_BOOST_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn is_quest_on_cooldown(&self, id: QuestId) -> bool {
        self.cooldowns
            .pending
            .get(&id)
            .is_some_and(|cd| self.now() < cd.end_time())
    }

    /// Remaining whole seconds of a running completion delay, ceiling
    /// rounded; 0 when none is running.
    pub fn cooldown_remaining_secs(&self, id: QuestId) -> u32 {
        self.cooldowns
            .pending
            .get(&id)
            .map(|cd| cd.remaining_secs(self.now()))
            .unwrap_or(0)
    }

    pub fn is_completed_today(&self, id: QuestId) -> bool {
        self.daily.is_marked(id, self.game.time.day)
    }

    /// Proximity query over ACTIVE quests; see `quests_within`.
    pub fn quests_near(&self, x: f32, y: f32, radius: f32) -> Vec<NearbyQuest<'_>> {
        quests_within(&self.log.active, x, y, radius)
    }

    /// Same proximity query over the available bucket (used to offer a
    /// quest start when the avatar walks up to a fresh marker).
    pub fn available_quests_near(&self, x: f32, y: f32, radius: f32) -> Vec<NearbyQuest<'_>> {
        quests_within(&self.log.available, x, y, radius)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WRITE SIDE
// ═══════════════════════════════════════════════════════════════════════

/// Command surface mirroring every store operation. Calls enqueue command
/// events; the owning domains apply them.
#[derive(SystemParam)]
pub struct GameCommands<'w> {
    modify_stats: EventWriter<'w, ModifyStatsEvent>,
    increase_score: EventWriter<'w, IncreaseScoreEvent>,
    sleep: EventWriter<'w, SleepEvent>,
    reset: EventWriter<'w, ResetGameEvent>,
    create_quest: EventWriter<'w, CreateQuestEvent>,
    start_quest: EventWriter<'w, StartQuestEvent>,
    cancel_quest: EventWriter<'w, CancelQuestEvent>,
    complete_quest: EventWriter<'w, CompleteQuestEvent>,
    remove_quest: EventWriter<'w, RemoveQuestEvent>,
    clear_quests: EventWriter<'w, ClearQuestsEvent>,
    begin_completion: EventWriter<'w, BeginQuestCompletionEvent>,
    add_item: EventWriter<'w, AddItemEvent>,
    remove_item: EventWriter<'w, RemoveItemEvent>,
    use_item: EventWriter<'w, UseItemEvent>,
    remove_effect: EventWriter<'w, RemoveEffectEvent>,
    purchase: EventWriter<'w, PurchaseItemEvent>,
    update_position: EventWriter<'w, UpdatePositionEvent>,
    update_scene: EventWriter<'w, UpdateSceneEvent>,
}

impl GameCommands<'_> {
    pub fn modify_stats(&mut self, deltas: StatDeltas) {
        self.modify_stats.send(ModifyStatsEvent { deltas });
    }

    pub fn increase_score(&mut self, amount: u32) {
        self.increase_score.send(IncreaseScoreEvent { amount });
    }

    pub fn sleep(&mut self) {
        self.sleep.send(SleepEvent);
    }

    pub fn reset_game(&mut self) {
        self.reset.send(ResetGameEvent);
    }

    pub fn create_quest(&mut self, spec: QuestSpec) {
        self.create_quest.send(CreateQuestEvent { spec });
    }

    pub fn start_quest(&mut self, id: QuestId) {
        self.start_quest.send(StartQuestEvent { id });
    }

    pub fn cancel_quest(&mut self, id: QuestId) {
        self.cancel_quest.send(CancelQuestEvent { id });
    }

    pub fn complete_quest(&mut self, id: QuestId) {
        self.complete_quest.send(CompleteQuestEvent { id });
    }

    pub fn remove_quest(&mut self, id: QuestId) {
        self.remove_quest.send(RemoveQuestEvent { id });
    }

    pub fn clear_quests(&mut self) {
        self.clear_quests.send(ClearQuestsEvent);
    }

    pub fn begin_quest_completion(&mut self, target: CompletionTarget) {
        self.begin_completion
            .send(BeginQuestCompletionEvent { target });
    }

    pub fn add_item(&mut self, item_id: &str, quantity: u32) {
        self.add_item.send(AddItemEvent {
            item_id: item_id.to_string(),
            quantity,
        });
    }

    pub fn remove_item(&mut self, item_id: &str, quantity: u32) {
        self.remove_item.send(RemoveItemEvent {
            item_id: item_id.to_string(),
            quantity,
        });
    }

    pub fn use_item(&mut self, item_id: &str) {
        self.use_item.send(UseItemEvent {
            item_id: item_id.to_string(),
        });
    }

    pub fn remove_effect(&mut self, effect: EffectId) {
        self.remove_effect.send(RemoveEffectEvent { effect });
    }

    pub fn purchase_item(&mut self, item_id: &str) {
        self.purchase.send(PurchaseItemEvent {
            item_id: item_id.to_string(),
        });
    }

    /// Pure position write-through; the stored coordinates are rounded.
    pub fn update_position(&mut self, x: f32, y: f32) {
        self.update_position.send(UpdatePositionEvent { x, y });
    }

    pub fn update_scene(&mut self, scene: SceneId) {
        self.update_scene.send(UpdateSceneEvent { scene });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION-STATE HANDLERS
// ═══════════════════════════════════════════════════════════════════════

/// Rounds and stores the avatar position. Position writes carry no
/// gameplay side effects.
fn apply_position_updates(
    mut events: EventReader<UpdatePositionEvent>,
    mut location: ResMut<PlayerLocation>,
) {
    for event in events.read() {
        location.x = event.x.round() as i32;
        location.y = event.y.round() as i32;
    }
}

fn apply_scene_updates(
    mut events: EventReader<UpdateSceneEvent>,
    mut location: ResMut<PlayerLocation>,
) {
    for event in events.read() {
        if location.scene != event.scene {
            info!("[Bridge] Scene -> {}", event.scene.label());
        }
        location.scene = event.scene;
    }
}

fn handle_reset(mut events: EventReader<ResetGameEvent>, mut location: ResMut<PlayerLocation>) {
    for _ in events.read() {
        *location = PlayerLocation::default();
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn quest_at(id: u32, x: f32, y: f32) -> Quest {
        Quest {
            id: QuestId(id),
            title: format!("q{}", id),
            description: String::new(),
            x,
            y,
            destination: SceneId::Island,
            stat_changes: StatDeltas::default(),
            score_increase: 0,
            state: QuestState::Active,
            created_at: 0.0,
            completed_at: None,
        }
    }

    #[test]
    fn test_quests_within_exact_distance() {
        let quests = vec![quest_at(1, 3.0, 4.0), quest_at(2, 100.0, 100.0)];
        let near = quests_within(&quests, 0.0, 0.0, 10.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].quest.id, QuestId(1));
        assert!((near[0].distance - 5.0).abs() < 1e-6, "3-4-5 triangle");
    }

    #[test]
    fn test_quests_within_radius_is_inclusive() {
        let quests = vec![quest_at(1, 50.0, 0.0)];
        assert_eq!(quests_within(&quests, 0.0, 0.0, 50.0).len(), 1);
        assert_eq!(quests_within(&quests, 0.0, 0.0, 49.99).len(), 0);
    }
}
