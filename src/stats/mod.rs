//! Stats domain — the mutation handlers for time, need stats, and score.
//!
//! All writes to `GameStats` happen here, driven by command events. Each
//! handler is a thin adapter around a pure method on the resource types in
//! `shared`, so a command is atomic with respect to every reader: systems
//! elsewhere observe either the pre- or post-mutation resource, never a
//! half-applied one. Handlers never panic; unknown or no-op payloads are
//! skipped silently.

use bevy::prelude::*;

use crate::shared::*;

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        // Chained: stat changes land before score increases within a frame.
        app.add_systems(
            Update,
            (
                apply_time_updates,
                apply_stat_decay,
                apply_stat_changes,
                apply_score_increases,
                handle_sleep,
                handle_reset,
            )
                .chain(),
        );
    }
}

/// Replaces the game clock and reports day rollovers.
fn apply_time_updates(
    mut events: EventReader<UpdateTimeEvent>,
    mut game: ResMut<GameStats>,
    mut day_writer: EventWriter<DayChangedEvent>,
) {
    for event in events.read() {
        let previous = game.time.day;
        game.time = event.time;
        if game.time.day != previous {
            info!(
                "[Stats] Day rolled over: {} -> {}",
                previous, game.time.day
            );
            day_writer.send(DayChangedEvent {
                previous,
                current: game.time.day,
            });
        }
    }
}

/// One decay step per event. Decay funnels through the same clamped
/// mutation as quest and item rewards.
fn apply_stat_decay(mut events: EventReader<DecayStatsEvent>, mut game: ResMut<GameStats>) {
    for _ in events.read() {
        game.stats.decay();
    }
}

/// Applies quest/item/shop stat deltas, clamped.
fn apply_stat_changes(mut events: EventReader<ModifyStatsEvent>, mut game: ResMut<GameStats>) {
    for event in events.read() {
        game.stats.apply(&event.deltas);
    }
}

fn apply_score_increases(
    mut events: EventReader<IncreaseScoreEvent>,
    mut game: ResMut<GameStats>,
) {
    for event in events.read() {
        if event.amount == 0 {
            continue;
        }
        game.score += event.amount;
        info!("[Stats] Score +{} -> {}", event.amount, game.score);
    }
}

/// Sleeping ends the day: day + 1, clock back to 08:00, +30 sleep, and a
/// quarter of the current meal burned overnight. This recharge is separate
/// from (and additive with) the periodic decay.
fn handle_sleep(
    mut events: EventReader<SleepEvent>,
    mut game: ResMut<GameStats>,
    mut day_writer: EventWriter<DayChangedEvent>,
) {
    for _ in events.read() {
        let previous = game.time.day;
        let meal_cost = (game.stats.meal * SLEEP_MEAL_COST_FRACTION).floor();

        game.time.day += 1;
        game.time.hour = WAKE_HOUR;
        game.time.minute = 0;
        game.stats.apply(&StatDeltas {
            sleep: SLEEP_RESTORE,
            meal: -meal_cost,
            ..Default::default()
        });

        info!(
            "[Stats] Slept into day {} — sleep {:.0}, meal {:.0}",
            game.time.day, game.stats.sleep, game.stats.meal
        );
        day_writer.send(DayChangedEvent {
            previous,
            current: game.time.day,
        });
    }
}

/// Full restart: defaults restored here; the quest, inventory, and player
/// domains listen for the same event and restore theirs. Also returns the
/// session to Playing when triggered from the game-over screen.
fn handle_reset(
    mut events: EventReader<ResetGameEvent>,
    mut game: ResMut<GameStats>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _ in events.read() {
        game.reset();
        info!("[Stats] Game reset to day 1, 08:00, full stats, score 0");
        if *state.get() == GameState::GameOver {
            next_state.set(GameState::Playing);
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::shared::*;

    #[test]
    fn test_apply_clamps_lower_bound() {
        let mut stats = Stats {
            meal: 5.0,
            ..Default::default()
        };
        stats.apply(&StatDeltas {
            meal: -10.0,
            ..Default::default()
        });
        assert_eq!(stats.meal, 0.0, "meal must clamp at zero, not go negative");
    }

    #[test]
    fn test_apply_clamps_upper_bound() {
        let mut stats = Stats::default();
        stats.apply(&StatDeltas {
            happiness: 250.0,
            ..Default::default()
        });
        assert_eq!(stats.happiness, STAT_MAX);
    }

    #[test]
    fn test_money_unbounded_above_but_not_negative() {
        let mut stats = Stats::default();
        stats.apply(&StatDeltas {
            money: 9000.0,
            ..Default::default()
        });
        assert_eq!(stats.money, STARTING_MONEY + 9000.0);

        stats.apply(&StatDeltas {
            money: -1_000_000.0,
            ..Default::default()
        });
        assert_eq!(stats.money, 0.0);
    }

    #[test]
    fn test_decay_rates() {
        let mut stats = Stats::default();
        stats.decay();
        assert!((stats.meal - (STAT_MAX - MEAL_DECAY_PER_TICK)).abs() < 1e-5);
        assert!((stats.sleep - (STAT_MAX - SLEEP_DECAY_PER_TICK)).abs() < 1e-5);
        assert!((stats.happiness - (STAT_MAX - HAPPINESS_DECAY_PER_TICK)).abs() < 1e-5);
        assert!((stats.cleanliness - (STAT_MAX - CLEANLINESS_DECAY_PER_TICK)).abs() < 1e-5);
        assert_eq!(stats.money, STARTING_MONEY, "decay never touches money");
    }

    #[test]
    fn test_depleted_reports_first_zero_stat() {
        let mut stats = Stats::default();
        assert_eq!(stats.depleted(), None);

        stats.cleanliness = 0.0;
        assert_eq!(stats.depleted(), Some(StatKind::Cleanliness));

        // Meal wins when several are at zero (checked first).
        stats.meal = 0.0;
        assert_eq!(stats.depleted(), Some(StatKind::Meal));
    }

    #[test]
    fn test_minute_rollover() {
        let mut time = GameTime {
            day: 1,
            hour: 8,
            minute: 59,
        };
        time.advance_minute();
        assert_eq!((time.day, time.hour, time.minute), (1, 9, 0));
    }

    #[test]
    fn test_hour_rollover_increments_day() {
        let mut time = GameTime {
            day: 3,
            hour: 23,
            minute: 59,
        };
        time.advance_minute();
        assert_eq!((time.day, time.hour, time.minute), (4, 0, 0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut game = GameStats {
            time: GameTime {
                day: 9,
                hour: 17,
                minute: 42,
            },
            stats: Stats {
                meal: 12.0,
                sleep: 30.0,
                happiness: 55.0,
                cleanliness: 8.0,
                money: 35.0,
            },
            score: 870,
        };
        game.reset();
        assert_eq!(game.time, GameTime { day: 1, hour: 8, minute: 0 });
        assert_eq!(game.stats.meal, 100.0);
        assert_eq!(game.stats.sleep, 100.0);
        assert_eq!(game.stats.happiness, 100.0);
        assert_eq!(game.stats.cleanliness, 100.0);
        assert_eq!(game.stats.money, 1000.0);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_clock_label_pads() {
        let time = GameTime {
            day: 1,
            hour: 8,
            minute: 5,
        };
        assert_eq!(time.clock_label(), "08:05");
    }
}
