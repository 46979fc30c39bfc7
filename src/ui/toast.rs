//! Toast stack — transient feedback messages at the top of the screen.

use bevy::prelude::*;

use crate::shared::*;

/// Marker for the toast container node (top-center of screen).
#[derive(Component)]
pub struct ToastContainer;

/// Marker for individual toast nodes.
#[derive(Component)]
pub struct ToastItem {
    pub timer: Timer,
}

pub fn spawn_toast_container(mut commands: Commands) {
    commands.spawn((
        ToastContainer,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(60.0),
            left: Val::Percent(50.0),
            width: Val::Px(320.0),
            // Shift left by half of the width to truly center it.
            margin: UiRect {
                left: Val::Px(-160.0),
                ..default()
            },
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            align_items: AlignItems::Center,
            ..default()
        },
    ));
}

pub fn despawn_toast_container(
    mut commands: Commands,
    query: Query<Entity, With<ToastContainer>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn handle_toast_events(
    mut commands: Commands,
    mut events: EventReader<ToastEvent>,
    container_query: Query<Entity, With<ToastContainer>>,
    existing_toasts: Query<Entity, With<ToastItem>>,
) {
    let Ok(container) = container_query.get_single() else {
        return;
    };

    for event in events.read() {
        // Enforce max 3 visible toasts: despawn oldest if over limit.
        let toast_entities: Vec<Entity> = existing_toasts.iter().collect();
        if toast_entities.len() >= 3 {
            if let Some(&oldest) = toast_entities.first() {
                commands.entity(oldest).despawn_recursive();
            }
        }

        let toast_entity = commands
            .spawn((
                ToastItem {
                    timer: Timer::from_seconds(event.duration_secs, TimerMode::Once),
                },
                Node {
                    padding: UiRect {
                        left: Val::Px(12.0),
                        right: Val::Px(12.0),
                        top: Val::Px(5.0),
                        bottom: Val::Px(5.0),
                    },
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(event.message.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            })
            .id();

        commands.entity(container).add_child(toast_entity);
    }
}

pub fn update_toasts(
    mut commands: Commands,
    time: Res<Time>,
    mut toast_query: Query<(Entity, &mut ToastItem)>,
) {
    for (entity, mut toast) in &mut toast_query {
        toast.timer.tick(time.delta());
        if toast.timer.just_finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
