//! Clock domain — the heartbeat of Shorehaven.
//!
//! Responsible for:
//! - Advancing game time one minute per tick (minute -> hour -> day rollovers)
//! - Driving continuous stat decay on the same tick
//! - The wall-clock score drip (+10 every 10 seconds)
//! - Watching for a depleted need stat and declaring game over
//!
//! The clock never mutates `GameStats` itself; it issues the same command
//! events any other producer would, so every mutation funnels through the
//! stats domain handlers.

use bevy::prelude::*;

use crate::shared::*;

/// Repeating timers for the game-minute tick and the score drip.
#[derive(Resource, Debug)]
pub struct ClockTimers {
    pub tick: Timer,
    pub score: Timer,
}

impl Default for ClockTimers {
    fn default() -> Self {
        Self {
            tick: Timer::from_seconds(CLOCK_TICK_SECS, TimerMode::Repeating),
            score: Timer::from_seconds(SCORE_BONUS_INTERVAL_SECS, TimerMode::Repeating),
        }
    }
}

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockTimers>()
            .add_systems(OnEnter(GameState::Playing), reset_clock_timers)
            .add_systems(
                Update,
                (tick_time, tick_score_bonus, check_game_over)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Fresh timers for a fresh run so the first tick lands a full interval in.
fn reset_clock_timers(mut timers: ResMut<ClockTimers>) {
    *timers = ClockTimers::default();
}

/// Advances `time` by `minutes` game-minutes, with rollovers.
fn advance_minutes(mut time: GameTime, minutes: u32) -> GameTime {
    for _ in 0..minutes {
        time.advance_minute();
    }
    time
}

/// Each elapsed tick advances the clock one game-minute and applies one
/// decay step. A long frame can cover several ticks; all of them are
/// accounted for.
fn tick_time(
    time: Res<Time>,
    mut timers: ResMut<ClockTimers>,
    game: Res<GameStats>,
    mut time_writer: EventWriter<UpdateTimeEvent>,
    mut decay_writer: EventWriter<DecayStatsEvent>,
) {
    timers.tick.tick(time.delta());
    let ticks = timers.tick.times_finished_this_tick();
    if ticks == 0 {
        return;
    }

    time_writer.send(UpdateTimeEvent {
        time: advance_minutes(game.time, ticks),
    });
    for _ in 0..ticks {
        decay_writer.send(DecayStatsEvent);
    }
}

/// The score drip accrues on wall-clock time alone. It keeps ticking
/// through quest delays and any other in-run freeze.
fn tick_score_bonus(
    time: Res<Time>,
    mut timers: ResMut<ClockTimers>,
    mut score_writer: EventWriter<IncreaseScoreEvent>,
) {
    timers.score.tick(time.delta());
    for _ in 0..timers.score.times_finished_this_tick() {
        score_writer.send(IncreaseScoreEvent {
            amount: SCORE_BONUS_AMOUNT,
        });
    }
}

/// Declares game over the moment any need stat bottoms out. The state
/// transition stops this system, so the event fires exactly once per run.
fn check_game_over(
    game: Res<GameStats>,
    mut over_writer: EventWriter<GameOverEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !game.is_changed() {
        return;
    }
    let Some(failed) = game.stats.depleted() else {
        return;
    };

    info!(
        "[Clock] Game over: {} reached 0 (final score {})",
        failed.label(),
        game.score
    );
    over_writer.send(GameOverEvent {
        failed,
        final_score: game.score,
    });
    next_state.set(GameState::GameOver);
}

// ─── Tests ────────────────────────────────────────────────────────────────────
