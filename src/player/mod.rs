//! Player domain — the simulation-loop consumer of the bridge.
//!
//! Movement, scene transitions, sleeping, shopping, and quest interaction
//! all go through `GameQueries`/`GameCommands`; this module never touches
//! another domain's resources directly. Scenes are data (see `scenes`);
//! one set of systems serves all of them.

pub mod scenes;

use bevy::prelude::*;

use crate::bridge::{GameCommands, GameQueries};
use crate::input::PlayerInput;
use crate::shared::*;
use scenes::scene_def;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_avatar)
            .add_systems(OnExit(GameState::Playing), despawn_avatar)
            .add_systems(
                Update,
                (
                    move_avatar,
                    handle_interact,
                    handle_quest_key,
                    handle_item_keys,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn spawn_avatar(mut commands: Commands, mut game_commands: GameCommands) {
    let island = scene_def(SceneId::Island);
    commands.spawn((
        Player,
        Sprite::from_color(Color::srgb(0.92, 0.80, 0.35), Vec2::new(16.0, 32.0)),
        Transform::from_xyz(island.entry.0, island.entry.1, 2.0),
    ));
    game_commands.update_scene(SceneId::Island);
    game_commands.update_position(island.entry.0, island.entry.1);
    info!("[Player] Avatar spawned on the island");
}

fn despawn_avatar(mut commands: Commands, query: Query<Entity, With<Player>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Smooth WASD movement. Speed doubles while the coffee boost is active;
/// the multiplier is read back from the store every frame, so expiry shows
/// up within one effect sweep. Every moved frame writes the rounded
/// position through the bridge.
fn move_avatar(
    time: Res<Time>,
    input: Res<PlayerInput>,
    queries: GameQueries,
    mut game_commands: GameCommands,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    if input.move_axis == Vec2::ZERO {
        return;
    }

    let speed = BASE_PLAYER_SPEED * queries.speed_multiplier();
    let delta = input.move_axis * speed * time.delta_secs();
    transform.translation.x += delta.x;
    transform.translation.y += delta.y;

    game_commands.update_position(transform.translation.x, transform.translation.y);
}

fn near(transform: &Transform, point: (f32, f32)) -> bool {
    let at = transform.translation.truncate();
    at.distance(Vec2::new(point.0, point.1)) <= INTERACT_RADIUS
}

/// E key: doors, the bed, and the drink shack, resolved from the current
/// scene's data. A scene change teleports the avatar to the target entry
/// and writes the new scene through the bridge.
fn handle_interact(
    input: Res<PlayerInput>,
    queries: GameQueries,
    mut game_commands: GameCommands,
    mut query: Query<&mut Transform, With<Player>>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    if !input.interact {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    let scene = scene_def(queries.scene());

    if let Some(exit) = scene.exits.iter().find(|e| near(&transform, (e.x, e.y))) {
        let target = scene_def(exit.to);
        transform.translation.x = target.entry.0;
        transform.translation.y = target.entry.1;
        game_commands.update_scene(exit.to);
        game_commands.update_position(target.entry.0, target.entry.1);
        return;
    }

    if let Some(bed) = scene.bed {
        if near(&transform, bed) {
            game_commands.sleep();
            toast_writer.send(ToastEvent {
                message: "Good morning! Energy recharged.".into(),
                duration_secs: 2.5,
            });
            return;
        }
    }

    if let Some(shop) = scene.shop {
        if near(&transform, shop) {
            toast_writer.send(ToastEvent {
                message: "Drink shack: press 2/3/4 to buy".into(),
                duration_secs: 2.5,
            });
        }
    }
}

/// Q key: work the nearest quest. An active catalog quest in range enters
/// the completion protocol; an available one in range is started first; a
/// scene-local quest in range goes straight into the protocol.
fn handle_quest_key(
    input: Res<PlayerInput>,
    queries: GameQueries,
    mut game_commands: GameCommands,
    mut toast_writer: EventWriter<ToastEvent>,
    query: Query<&Transform, With<Player>>,
) {
    if !input.quest {
        return;
    }
    let Ok(transform) = query.get_single() else {
        return;
    };
    let (x, y) = (transform.translation.x, transform.translation.y);

    if let Some(nearest) = queries
        .quests_near(x, y, INTERACT_RADIUS)
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
    {
        game_commands.begin_quest_completion(CompletionTarget::Catalog(nearest.quest.id));
        return;
    }

    if let Some(nearest) = queries
        .available_quests_near(x, y, INTERACT_RADIUS)
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
    {
        game_commands.start_quest(nearest.quest.id);
        toast_writer.send(ToastEvent {
            message: format!("Quest started: {} — press Q to work on it", nearest.quest.title),
            duration_secs: 2.5,
        });
        return;
    }

    let scene = scene_def(queries.scene());
    if let Some(local) = scene
        .local_quests
        .iter()
        .filter(|q| {
            Vec2::new(x, y).distance(Vec2::new(q.x, q.y)) <= INTERACT_RADIUS
        })
        .min_by(|a, b| {
            let da = Vec2::new(x, y).distance(Vec2::new(a.x, a.y));
            let db = Vec2::new(x, y).distance(Vec2::new(b.x, b.y));
            da.total_cmp(&db)
        })
    {
        game_commands.begin_quest_completion(CompletionTarget::Local(local.to_local_quest()));
    }
}

/// Digit keys: at the drink shack they buy, anywhere else they use the
/// hotkeyed item (1 = coffee). Unknown digits are no-ops.
fn handle_item_keys(
    input: Res<PlayerInput>,
    registry: Res<ItemRegistry>,
    queries: GameQueries,
    mut game_commands: GameCommands,
    query: Query<&Transform, With<Player>>,
) {
    let Some(digit) = input.digit else {
        return;
    };
    let Some(def) = registry.by_hotkey(digit) else {
        return;
    };
    let Ok(transform) = query.get_single() else {
        return;
    };

    let at_shop = scene_def(queries.scene())
        .shop
        .is_some_and(|shop| near(transform, shop));

    if at_shop && def.price.is_some() {
        game_commands.purchase_item(&def.id);
    } else {
        game_commands.use_item(&def.id);
    }
}
