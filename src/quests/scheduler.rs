//! Quest scheduler — the completion-with-cooldown protocol.
//!
//! Starting a completion is gated twice: a quest already completed on the
//! current in-game day is rejected, and a quest with a delay already
//! running is rejected. An accepted start records a `QuestCooldown` with a
//! pseudo-random 5-15 second delay; the deferred work is plain data ticked
//! by `tick_cooldowns`, so tearing the gameplay context down (or a full
//! reset) cancels it by clearing the resource — nothing fires into a dead
//! run. The same protocol serves catalog quests and scene-local quests.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Gate checks and delay roll for a completion request.
pub fn handle_begin_completion(
    mut events: EventReader<BeginQuestCompletionEvent>,
    time: Res<Time>,
    game: Res<GameStats>,
    log: Res<QuestLog>,
    daily: Res<DailyCompletions>,
    mut cooldowns: ResMut<QuestCooldowns>,
    mut started_writer: EventWriter<QuestCompletionStartedEvent>,
    mut denied_writer: EventWriter<QuestCompletionDeniedEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    let now = time.elapsed_secs_f64();
    let today = game.time.day;

    for event in events.read() {
        let id = event.target.quest_id();

        let title = match &event.target {
            CompletionTarget::Catalog(id) => {
                let Some(quest) = log.find_active(*id) else {
                    info!("[Scheduler] Begin skipped — quest {:?} is not active", id);
                    continue;
                };
                quest.title.clone()
            }
            CompletionTarget::Local(quest) => quest.title.clone(),
        };

        // Gate 1: once per in-game day.
        if daily.is_marked(id, today) {
            info!(
                "[Scheduler] Quest {:?} already completed on day {}",
                id, today
            );
            denied_writer.send(QuestCompletionDeniedEvent {
                id,
                title: title.clone(),
                reason: CompletionDenial::CompletedToday,
            });
            toast_writer.send(ToastEvent {
                message: format!("{} is already done today!", title),
                duration_secs: 2.0,
            });
            continue;
        }

        // Gate 2: at most one delay in flight per quest id. A rejection
        // leaves the running entry's timing untouched.
        if let Some(existing) = cooldowns.pending.get(&id) {
            let remaining = existing.remaining_secs(now);
            info!(
                "[Scheduler] Quest {:?} already in progress ({}s remaining)",
                id, remaining
            );
            denied_writer.send(QuestCompletionDeniedEvent {
                id,
                title: title.clone(),
                reason: CompletionDenial::OnCooldown {
                    remaining_secs: remaining,
                },
            });
            toast_writer.send(ToastEvent {
                message: format!("{} in progress ({}s remaining)", title, remaining),
                duration_secs: 2.0,
            });
            continue;
        }

        let delay = rand::thread_rng()
            .gen_range(QUEST_COOLDOWN_MIN_SECS..=QUEST_COOLDOWN_MAX_SECS);
        cooldowns.pending.insert(
            id,
            QuestCooldown {
                target: event.target.clone(),
                started_at: now,
                duration_secs: delay as f32,
            },
        );

        info!(
            "[Scheduler] Starting completion of '{}' ({}s delay)",
            title, delay
        );
        started_writer.send(QuestCompletionStartedEvent {
            id,
            title: title.clone(),
            delay_secs: delay,
        });
        toast_writer.send(ToastEvent {
            message: format!("Working on: {} ({}s)", title, delay),
            duration_secs: 2.5,
        });
    }
}

/// Fires completions whose delay has elapsed: rewards are dispatched
/// (stats before score), the quest is marked done for today, and the
/// cooldown entry is deleted. Catalog quests additionally transition
/// Active -> Completed via the catalog's own handler.
pub fn tick_cooldowns(
    time: Res<Time>,
    game: Res<GameStats>,
    log: Res<QuestLog>,
    mut cooldowns: ResMut<QuestCooldowns>,
    mut daily: ResMut<DailyCompletions>,
    mut complete_writer: EventWriter<CompleteQuestEvent>,
    mut stats_writer: EventWriter<ModifyStatsEvent>,
    mut score_writer: EventWriter<IncreaseScoreEvent>,
    mut applied_writer: EventWriter<QuestRewardsAppliedEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    if cooldowns.pending.is_empty() {
        return;
    }
    let now = time.elapsed_secs_f64();
    let today = game.time.day;

    let due: Vec<QuestId> = cooldowns
        .pending
        .iter()
        .filter(|(_, cd)| now >= cd.end_time())
        .map(|(id, _)| *id)
        .collect();

    for id in due {
        let Some(cooldown) = cooldowns.pending.remove(&id) else {
            continue;
        };

        let (title, score_increase) = match &cooldown.target {
            CompletionTarget::Catalog(id) => {
                let Some(quest) = log.find_active(*id) else {
                    // The quest left the active bucket while the delay ran
                    // (removed or cancelled). The completion is dropped.
                    info!(
                        "[Scheduler] Dropped completion — quest {:?} no longer active",
                        id
                    );
                    continue;
                };
                complete_writer.send(CompleteQuestEvent { id: *id });
                (quest.title.clone(), quest.score_increase)
            }
            CompletionTarget::Local(quest) => {
                // Local quests never enter the catalog: rewards apply
                // directly, stats first, then score.
                stats_writer.send(ModifyStatsEvent {
                    deltas: quest.stat_changes,
                });
                if quest.score_increase > 0 {
                    score_writer.send(IncreaseScoreEvent {
                        amount: quest.score_increase,
                    });
                }
                (quest.title.clone(), quest.score_increase)
            }
        };

        daily.mark(id, today);
        info!("[Scheduler] '{}' completed (+{} score)", title, score_increase);
        applied_writer.send(QuestRewardsAppliedEvent {
            id,
            title: title.clone(),
            score_increase,
        });
        toast_writer.send(ToastEvent {
            message: format!("{} completed!", title),
            duration_secs: 3.0,
        });
    }
}

/// Day rollover: marks from any other day are purged, re-opening
/// once-per-day quests. Running cooldowns are deliberately untouched.
/// Also refreshes the session's day snapshot.
pub fn purge_daily_marks(
    mut events: EventReader<DayChangedEvent>,
    mut daily: ResMut<DailyCompletions>,
    mut location: ResMut<PlayerLocation>,
) {
    for event in events.read() {
        location.day = event.current;
        let purged = daily.purge_other_days(event.current);
        if purged > 0 {
            info!(
                "[Scheduler] Day {} — purged {} stale daily completions",
                event.current, purged
            );
        }
    }
}

/// Full restart wipes both the pending delays and the daily gate.
pub fn handle_reset(
    mut events: EventReader<ResetGameEvent>,
    mut cooldowns: ResMut<QuestCooldowns>,
    mut daily: ResMut<DailyCompletions>,
) {
    for _ in events.read() {
        cooldowns.pending.clear();
        daily.marks.clear();
    }
}

/// Teardown cancellation: leaving the gameplay context drops every pending
/// completion so none can fire afterwards.
pub fn cancel_pending(mut cooldowns: ResMut<QuestCooldowns>) {
    if !cooldowns.pending.is_empty() {
        info!(
            "[Scheduler] Cancelled {} pending completion(s) on teardown",
            cooldowns.pending.len()
        );
        cooldowns.pending.clear();
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
