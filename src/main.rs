mod bridge;
mod clock;
mod data;
mod input;
mod inventory;
mod leaderboard;
mod player;
mod quests;
mod shared;
mod stats;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Shorehaven".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<GameStats>()
        .init_resource::<QuestLog>()
        .init_resource::<Inventory>()
        .init_resource::<ActiveEffects>()
        .init_resource::<ItemRegistry>()
        .init_resource::<PlayerLocation>()
        .init_resource::<PlayerProfile>()
        // Command events
        .add_event::<UpdateTimeEvent>()
        .add_event::<DecayStatsEvent>()
        .add_event::<ModifyStatsEvent>()
        .add_event::<IncreaseScoreEvent>()
        .add_event::<SleepEvent>()
        .add_event::<ResetGameEvent>()
        .add_event::<CreateQuestEvent>()
        .add_event::<StartQuestEvent>()
        .add_event::<CancelQuestEvent>()
        .add_event::<CompleteQuestEvent>()
        .add_event::<RemoveQuestEvent>()
        .add_event::<ClearQuestsEvent>()
        .add_event::<BeginQuestCompletionEvent>()
        .add_event::<AddItemEvent>()
        .add_event::<RemoveItemEvent>()
        .add_event::<UseItemEvent>()
        .add_event::<RemoveEffectEvent>()
        .add_event::<PurchaseItemEvent>()
        .add_event::<UpdatePositionEvent>()
        .add_event::<UpdateSceneEvent>()
        // Notification events
        .add_event::<DayChangedEvent>()
        .add_event::<GameOverEvent>()
        .add_event::<QuestCompletionStartedEvent>()
        .add_event::<QuestCompletionDeniedEvent>()
        .add_event::<QuestRewardsAppliedEvent>()
        .add_event::<EffectExpiredEvent>()
        .add_event::<ToastEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins(stats::StatsPlugin)
        .add_plugins(clock::ClockPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(quests::QuestPlugin)
        .add_plugins(bridge::BridgePlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(ui::UiPlugin)
        .add_plugins(leaderboard::LeaderboardPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
