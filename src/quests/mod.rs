//! Quest domain — catalog lifecycle, completion scheduling, and authoring
//! templates.
//!
//! `catalog` owns the Available/Active/Completed buckets; `scheduler` owns
//! the completion-with-cooldown protocol and the once-per-day gate;
//! `templates` is the declarative authoring surface plus the sample quest
//! seeding.

pub mod catalog;
pub mod scheduler;
pub mod templates;

use bevy::prelude::*;

use crate::shared::*;

pub struct QuestPlugin;

impl Plugin for QuestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuestCooldowns>()
            .init_resource::<DailyCompletions>()
            // Seeding is chained ahead of creation so the seeded specs land
            // in the catalog the same frame and the emptiness guard holds.
            .add_systems(
                Update,
                (templates::seed_sample_quests, catalog::handle_create)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    catalog::handle_start,
                    catalog::handle_cancel,
                    catalog::handle_complete,
                    catalog::handle_remove,
                    catalog::handle_clear,
                    catalog::handle_reset,
                ),
            )
            .add_systems(
                Update,
                (
                    scheduler::handle_begin_completion,
                    scheduler::tick_cooldowns,
                    scheduler::purge_daily_marks,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, scheduler::handle_reset)
            // Leaving Playing tears the gameplay context down; pending
            // completion delays must not fire into a dead run.
            .add_systems(OnExit(GameState::Playing), scheduler::cancel_pending);
    }
}
