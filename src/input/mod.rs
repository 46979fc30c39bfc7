//! Input domain — turns hardware input into game actions once per frame.
//!
//! Nothing outside this module reads the keyboard directly; every consumer
//! works from the `PlayerInput` resource.

use bevy::prelude::*;

/// Frame-scoped game actions. Rebuilt from scratch every frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    /// Normalized movement direction; ZERO when idle.
    pub move_axis: Vec2,
    /// Interact key (E): doors, bed, shop counter.
    pub interact: bool,
    /// Quest key (Q): start the nearest quest.
    pub quest: bool,
    /// Restart key (R): restart after game over.
    pub restart: bool,
    /// Confirm key (Enter/Space): menu confirmation.
    pub confirm: bool,
    /// Digit just pressed this frame (1-9), if any.
    pub digit: Option<u8>,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(PreUpdate, read_input);
    }
}

/// The single point where hardware input becomes game actions.
fn read_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    *input = PlayerInput::default();

    let mut axis = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    input.move_axis = if axis != Vec2::ZERO {
        axis.normalize()
    } else {
        Vec2::ZERO
    };

    input.interact = keys.just_pressed(KeyCode::KeyE);
    input.quest = keys.just_pressed(KeyCode::KeyQ);
    input.restart = keys.just_pressed(KeyCode::KeyR);
    input.confirm = keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Space);

    const DIGITS: [(KeyCode, u8); 9] = [
        (KeyCode::Digit1, 1),
        (KeyCode::Digit2, 2),
        (KeyCode::Digit3, 3),
        (KeyCode::Digit4, 4),
        (KeyCode::Digit5, 5),
        (KeyCode::Digit6, 6),
        (KeyCode::Digit7, 7),
        (KeyCode::Digit8, 8),
        (KeyCode::Digit9, 9),
    ];
    input.digit = DIGITS
        .iter()
        .find(|(key, _)| keys.just_pressed(*key))
        .map(|(_, digit)| *digit);
}
