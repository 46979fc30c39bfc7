//! UI domain — thin subscriber layer over the bridge.
//!
//! HUD, toasts, and the menus only read snapshots and change-detected
//! resources, and issue commands; no gameplay rules live here.

mod game_over;
mod hud;
mod main_menu;
mod toast;

use bevy::prelude::*;

use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── MAIN MENU ───
        app.add_systems(OnEnter(GameState::MainMenu), main_menu::spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), main_menu::despawn_main_menu)
            .add_systems(
                Update,
                main_menu::handle_menu_input.run_if(in_state(GameState::MainMenu)),
            );

        // ─── HUD ───
        app.add_systems(OnEnter(GameState::Playing), hud::spawn_hud)
            .add_systems(OnExit(GameState::Playing), hud::despawn_hud)
            .add_systems(
                Update,
                (
                    hud::update_clock_and_score,
                    hud::update_stat_bars,
                    hud::update_inventory_line,
                    hud::update_quest_panel,
                )
                    .run_if(in_state(GameState::Playing)),
            );

        // ─── TOASTS ───
        app.add_systems(OnEnter(GameState::Playing), toast::spawn_toast_container)
            .add_systems(OnExit(GameState::Playing), toast::despawn_toast_container)
            .add_systems(
                Update,
                (toast::handle_toast_events, toast::update_toasts)
                    .run_if(in_state(GameState::Playing)),
            );

        // ─── GAME OVER ───
        app.init_resource::<game_over::LastGameOver>()
            .add_systems(Update, game_over::capture_game_over)
            .add_systems(OnEnter(GameState::GameOver), game_over::spawn_game_over)
            .add_systems(OnExit(GameState::GameOver), game_over::despawn_game_over)
            .add_systems(
                Update,
                game_over::handle_restart_input.run_if(in_state(GameState::GameOver)),
            );
    }
}
