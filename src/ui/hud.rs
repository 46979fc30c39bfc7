//! In-game HUD — day/clock, score, need-stat bars, inventory line, and the
//! quest panel. Everything here is driven by change detection on the store
//! resources or by bridge snapshots; the HUD never mutates game state.

use bevy::prelude::*;

use crate::bridge::GameQueries;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudClockText;

#[derive(Component)]
pub struct HudScoreText;

/// Fill node of one stat bar.
#[derive(Component)]
pub struct HudStatFill(pub StatKind);

/// Percentage label of one stat bar.
#[derive(Component)]
pub struct HudStatText(pub StatKind);

#[derive(Component)]
pub struct HudMoneyText;

#[derive(Component)]
pub struct HudInventoryText;

#[derive(Component)]
pub struct HudQuestText;

fn stat_color(kind: StatKind) -> Color {
    match kind {
        StatKind::Meal => Color::srgb(0.13, 0.55, 0.13),
        StatKind::Sleep => Color::srgb(0.12, 0.56, 1.0),
        StatKind::Happiness => Color::srgb(1.0, 0.84, 0.0),
        StatKind::Cleanliness => Color::srgb(1.0, 0.55, 0.0),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                right: Val::Px(8.0),
                width: Val::Px(240.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HudClockText,
                Text::new("Day 1  08:00"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                HudScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.84, 0.0)),
            ));

            for kind in [
                StatKind::Meal,
                StatKind::Sleep,
                StatKind::Happiness,
                StatKind::Cleanliness,
            ] {
                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(6.0),
                        align_items: AlignItems::Center,
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            HudStatText(kind),
                            Text::new(format!("{} 100%", kind.label())),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                            Node {
                                width: Val::Px(110.0),
                                ..default()
                            },
                        ));
                        row.spawn((
                            Node {
                                width: Val::Px(100.0),
                                height: Val::Px(8.0),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.15)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                HudStatFill(kind),
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(stat_color(kind)),
                            ));
                        });
                    });
            }

            parent.spawn((
                HudMoneyText,
                Text::new("Money: 1000"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 1.0, 0.6)),
            ));
            parent.spawn((
                HudInventoryText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                HudQuestText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.9, 1.0)),
            ));
        });
}

pub fn despawn_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn update_clock_and_score(
    game: Res<GameStats>,
    mut clock_query: Query<&mut Text, (With<HudClockText>, Without<HudScoreText>)>,
    mut score_query: Query<&mut Text, (With<HudScoreText>, Without<HudClockText>)>,
) {
    if !game.is_changed() {
        return;
    }
    for mut text in &mut clock_query {
        **text = format!("Day {}  {}", game.time.day, game.time.clock_label());
    }
    for mut text in &mut score_query {
        **text = format!("Score: {}", game.score);
    }
}

pub fn update_stat_bars(
    game: Res<GameStats>,
    mut fill_query: Query<(&HudStatFill, &mut Node)>,
    mut text_query: Query<(&HudStatText, &mut Text), Without<HudMoneyText>>,
    mut money_query: Query<&mut Text, With<HudMoneyText>>,
) {
    if !game.is_changed() {
        return;
    }
    let value = |kind: StatKind| match kind {
        StatKind::Meal => game.stats.meal,
        StatKind::Sleep => game.stats.sleep,
        StatKind::Happiness => game.stats.happiness,
        StatKind::Cleanliness => game.stats.cleanliness,
    };

    for (fill, mut node) in &mut fill_query {
        node.width = Val::Percent(value(fill.0).clamp(0.0, STAT_MAX));
    }
    for (label, mut text) in &mut text_query {
        **text = format!("{} {:.0}%", label.0.label(), value(label.0));
    }
    for mut text in &mut money_query {
        **text = format!("Money: {:.0}", game.stats.money);
    }
}

pub fn update_inventory_line(
    inventory: Res<Inventory>,
    registry: Res<ItemRegistry>,
    mut query: Query<&mut Text, With<HudInventoryText>>,
) {
    if !inventory.is_changed() {
        return;
    }
    let mut lines: Vec<String> = inventory
        .items
        .iter()
        .map(|(id, qty)| {
            let name = registry
                .get(id)
                .map(|def| def.name.clone())
                .unwrap_or_else(|| id.clone());
            format!("{} x{}", name, qty)
        })
        .collect();
    lines.sort();

    for mut text in &mut query {
        **text = if lines.is_empty() {
            String::from("Pockets empty")
        } else {
            lines.join("  ")
        };
    }
}

/// Quest panel refreshes every frame: cooldown countdowns are wall-clock
/// values that change without any store mutation.
pub fn update_quest_panel(queries: GameQueries, mut query: Query<&mut Text, With<HudQuestText>>) {
    let mut lines: Vec<String> = Vec::new();
    for quest in queries.active_quests().iter().take(4) {
        if queries.is_quest_on_cooldown(quest.id) {
            lines.push(format!(
                "{} ({}s)",
                quest.title,
                queries.cooldown_remaining_secs(quest.id)
            ));
        } else {
            lines.push(quest.title.clone());
        }
    }
    let available = queries.available_quests().len();
    if available > 0 {
        lines.push(format!("{} quest(s) on the board", available));
    }

    for mut text in &mut query {
        **text = lines.join("\n");
    }
}
