//! Quest catalog — the three-bucket lifecycle store.
//!
//! Invalid transitions (starting a non-available quest, completing a
//! non-active one) and unknown ids are logged no-ops, never errors.

use bevy::prelude::*;

use crate::shared::*;

pub fn handle_create(
    mut events: EventReader<CreateQuestEvent>,
    time: Res<Time>,
    mut log: ResMut<QuestLog>,
) {
    let now = time.elapsed_secs_f64();
    for event in events.read() {
        let id = log.create(event.spec.clone(), now);
        info!(
            "[Quests] Created quest {:?}: {}",
            id,
            log.available.last().map(|q| q.title.as_str()).unwrap_or("")
        );
    }
}

pub fn handle_start(mut events: EventReader<StartQuestEvent>, mut log: ResMut<QuestLog>) {
    for event in events.read() {
        if log.start(event.id) {
            info!("[Quests] Quest {:?} started", event.id);
        } else {
            info!(
                "[Quests] Start skipped — quest {:?} is not available",
                event.id
            );
        }
    }
}

pub fn handle_cancel(mut events: EventReader<CancelQuestEvent>, mut log: ResMut<QuestLog>) {
    for event in events.read() {
        if log.cancel(event.id) {
            info!("[Quests] Quest {:?} cancelled back to available", event.id);
        } else {
            info!(
                "[Quests] Cancel skipped — quest {:?} is not active",
                event.id
            );
        }
    }
}

/// Active -> Completed. Rewards are dispatched stats-first, score-second;
/// the stats domain applies them in that order within the same frame.
pub fn handle_complete(
    mut events: EventReader<CompleteQuestEvent>,
    time: Res<Time>,
    mut log: ResMut<QuestLog>,
    mut stats_writer: EventWriter<ModifyStatsEvent>,
    mut score_writer: EventWriter<IncreaseScoreEvent>,
) {
    let now = time.elapsed_secs_f64();
    for event in events.read() {
        let Some(quest) = log.complete(event.id, now) else {
            info!(
                "[Quests] Complete skipped — quest {:?} is not active",
                event.id
            );
            continue;
        };

        info!("[Quests] Quest {:?} completed: {}", quest.id, quest.title);
        stats_writer.send(ModifyStatsEvent {
            deltas: quest.stat_changes,
        });
        if quest.score_increase > 0 {
            score_writer.send(IncreaseScoreEvent {
                amount: quest.score_increase,
            });
        }
    }
}

pub fn handle_remove(mut events: EventReader<RemoveQuestEvent>, mut log: ResMut<QuestLog>) {
    for event in events.read() {
        log.remove(event.id);
    }
}

pub fn handle_clear(mut events: EventReader<ClearQuestsEvent>, mut log: ResMut<QuestLog>) {
    for _ in events.read() {
        log.clear_all();
        info!("[Quests] All quests cleared, id counter reset");
    }
}

pub fn handle_reset(mut events: EventReader<ResetGameEvent>, mut log: ResMut<QuestLog>) {
    for _ in events.read() {
        log.clear_all();
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
