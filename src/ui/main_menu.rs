//! Main menu — character pick and run start.

use bevy::prelude::*;

use crate::input::PlayerInput;
use crate::shared::*;

#[derive(Component)]
pub struct MainMenuRoot;

#[derive(Component)]
pub struct CharacterLine;

pub fn spawn_main_menu(mut commands: Commands) {
    commands
        .spawn((
            MainMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.12, 0.2)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SHOREHAVEN"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.84, 0.0)),
            ));
            parent.spawn((
                Text::new("An island life, one day at a time"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                CharacterLine,
                Text::new("Character 1 selected — press 1-5 to change"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.9, 1.0)),
            ));
            parent.spawn((
                Text::new("Press Enter to start"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn despawn_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn handle_menu_input(
    input: Res<PlayerInput>,
    mut profile: ResMut<PlayerProfile>,
    mut next_state: ResMut<NextState<GameState>>,
    mut line_query: Query<&mut Text, With<CharacterLine>>,
) {
    if let Some(digit) = input.digit {
        if (1..=5).contains(&digit) {
            profile.character = digit;
            for mut text in &mut line_query {
                **text = format!("Character {} selected — press 1-5 to change", digit);
            }
        }
    }

    if input.confirm {
        info!(
            "[Ui] Starting run as {} (character {})",
            profile.name, profile.character
        );
        next_state.set(GameState::Playing);
    }
}
