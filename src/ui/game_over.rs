//! Game-over overlay — failure cause, final score, leaderboard standings,
//! and the restart hook.

use bevy::prelude::*;

use crate::input::PlayerInput;
// Domain resource import: pub re-export from the leaderboard mod.
use crate::leaderboard::LeaderboardCache;
use crate::shared::*;

#[derive(Component)]
pub struct GameOverRoot;

/// The last game-over report, captured as the event flies by so the
/// overlay can be built on the following state transition.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastGameOver {
    pub failed: Option<StatKind>,
    pub final_score: u32,
}

fn failure_copy(failed: Option<StatKind>) -> (&'static str, &'static str) {
    match failed {
        Some(StatKind::Meal) => ("Starvation!", "You ran out of food and starved."),
        Some(StatKind::Sleep) => ("Exhaustion!", "You collapsed from extreme exhaustion."),
        Some(StatKind::Happiness) => (
            "Depression!",
            "Your happiness reached rock bottom and you gave up.",
        ),
        Some(StatKind::Cleanliness) => ("Disease!", "Poor hygiene led to serious illness."),
        None => ("Game Over!", "You failed to maintain your basic needs."),
    }
}

pub fn capture_game_over(
    mut events: EventReader<GameOverEvent>,
    mut last: ResMut<LastGameOver>,
) {
    for event in events.read() {
        last.failed = Some(event.failed);
        last.final_score = event.final_score;
    }
}

pub fn spawn_game_over(
    mut commands: Commands,
    last: Res<LastGameOver>,
    leaderboard: Res<LeaderboardCache>,
) {
    let (title, message) = failure_copy(last.failed);

    commands
        .spawn((
            GameOverRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 42.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.2, 0.2)),
            ));
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(format!("Final Score: {}", last.final_score)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.84, 0.0)),
            ));

            if !leaderboard.entries.is_empty() {
                parent.spawn((
                    Text::new("— Leaderboard —"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.7, 0.9, 1.0)),
                ));
                for (rank, entry) in leaderboard.entries.iter().take(5).enumerate() {
                    parent.spawn((
                        Text::new(format!("{}. {} — {}", rank + 1, entry.name, entry.score)),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                }
            }

            parent.spawn((
                Text::new("Press R to restart"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn despawn_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// R restarts: the reset command restores every domain's defaults and the
/// stats handler flips the state back to Playing.
pub fn handle_restart_input(
    input: Res<PlayerInput>,
    mut reset_writer: EventWriter<ResetGameEvent>,
) {
    if input.restart {
        info!("[Ui] Restart requested");
        reset_writer.send(ResetGameEvent);
    }
}
