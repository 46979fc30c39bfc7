//! Data domain — populates the item registry at boot.
//!
//! The registry is the single place an item id is mapped to behavior. It is
//! resolved once while `GameState::Loading`; after that, consuming an item
//! is a lookup into a closed table, never ad-hoc string dispatch.

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Loading),
            (load_items, finish_loading).chain(),
        );
    }
}

fn item_defs() -> Vec<ItemDef> {
    vec![
        ItemDef {
            id: "coffee".into(),
            name: "Coffee".into(),
            description: "Double movement speed for a short while.".into(),
            price: None,
            effect: Some(ItemEffect::SpeedBoost {
                duration_secs: SPEED_BOOST_DURATION_SECS,
            }),
            hotkey: Some(1),
        },
        ItemDef {
            id: "es_kelapa".into(),
            name: "Es Kelapa".into(),
            description: "Chilled coconut water. +20 meal.".into(),
            price: Some(50.0),
            effect: Some(ItemEffect::RestoreMeal { amount: 20.0 }),
            hotkey: Some(2),
        },
        ItemDef {
            id: "es_campur".into(),
            name: "Es Campur".into(),
            description: "Shaved ice with everything. +25 meal.".into(),
            price: Some(75.0),
            effect: Some(ItemEffect::RestoreMeal { amount: 25.0 }),
            hotkey: Some(3),
        },
        ItemDef {
            id: "es_cendol".into(),
            name: "Es Cendol".into(),
            description: "Sweet pandan jelly drink. +30 meal.".into(),
            price: Some(100.0),
            effect: Some(ItemEffect::RestoreMeal { amount: 30.0 }),
            hotkey: Some(4),
        },
    ]
}

fn load_items(mut registry: ResMut<ItemRegistry>) {
    for def in item_defs() {
        registry.items.insert(def.id.clone(), def);
    }
    info!("[Data] Loaded {} item definitions", registry.items.len());
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

// ─── Tests ────────────────────────────────────────────────────────────────────
