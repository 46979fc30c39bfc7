//! Inventory domain — item counts, consumable triggers, and active effects.
//!
//! Using a consumable resolves its behavior through the `ItemRegistry`
//! table: either a temporary effect (replacing any running instance of the
//! same effect id) or an immediate stat delta routed through the stats
//! domain. Unknown item ids and empty stacks are silent no-ops.

use bevy::prelude::*;

use crate::shared::*;

/// Sub-second sweep that drops expired effects.
#[derive(Resource, Debug)]
pub struct EffectSweepTimer(pub Timer);

impl Default for EffectSweepTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(EFFECT_SWEEP_SECS, TimerMode::Repeating))
    }
}

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectSweepTimer>()
            .add_systems(OnEnter(GameState::Playing), grant_starting_items)
            .add_systems(
                Update,
                (
                    handle_add_item,
                    handle_remove_item,
                    handle_purchase,
                    handle_use_item,
                    handle_remove_effect,
                    expire_effects,
                    handle_reset,
                ),
            );
    }
}

/// Every fresh run begins with one coffee and no running effects.
fn grant_starting_items(mut inventory: ResMut<Inventory>, mut effects: ResMut<ActiveEffects>) {
    inventory.items.clear();
    inventory.add("coffee", 1);
    effects.effects.clear();
    info!("[Inventory] Starting items granted");
}

fn handle_add_item(mut events: EventReader<AddItemEvent>, mut inventory: ResMut<Inventory>) {
    for event in events.read() {
        inventory.add(&event.item_id, event.quantity);
    }
}

fn handle_remove_item(mut events: EventReader<RemoveItemEvent>, mut inventory: ResMut<Inventory>) {
    for event in events.read() {
        if !inventory.remove(&event.item_id, event.quantity) {
            info!(
                "[Inventory] Remove skipped — no '{}' held",
                event.item_id
            );
        }
    }
}

/// Beach-shack purchases. Affordability is validated before dispatch; the
/// stat handler never sees a spend the player cannot cover.
fn handle_purchase(
    mut events: EventReader<PurchaseItemEvent>,
    registry: Res<ItemRegistry>,
    game: Res<GameStats>,
    mut inventory: ResMut<Inventory>,
    mut stats_writer: EventWriter<ModifyStatsEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    let mut spent = 0.0_f32;
    for event in events.read() {
        let Some(def) = registry.get(&event.item_id) else {
            warn!("[Inventory] Purchase of unknown item '{}'", event.item_id);
            continue;
        };
        let Some(price) = def.price else {
            warn!("[Inventory] '{}' is not for sale", def.id);
            continue;
        };

        if game.stats.money - spent < price {
            toast_writer.send(ToastEvent {
                message: format!("Not enough money for {}", def.name),
                duration_secs: 2.0,
            });
            continue;
        }
        spent += price;

        stats_writer.send(ModifyStatsEvent {
            deltas: StatDeltas {
                money: -price,
                ..Default::default()
            },
        });
        inventory.add(&def.id, 1);
        info!("[Inventory] Bought {} for {:.0}", def.name, price);
        toast_writer.send(ToastEvent {
            message: format!("Bought {}!", def.name),
            duration_secs: 2.0,
        });
    }
}

/// Consumes one unit and applies the registered behavior. A zero quantity
/// is a no-op, not an error.
fn handle_use_item(
    mut events: EventReader<UseItemEvent>,
    time: Res<Time>,
    registry: Res<ItemRegistry>,
    mut inventory: ResMut<Inventory>,
    mut effects: ResMut<ActiveEffects>,
    mut stats_writer: EventWriter<ModifyStatsEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    let now = time.elapsed_secs_f64();
    for event in events.read() {
        if inventory.count(&event.item_id) == 0 {
            info!("[Inventory] Use skipped — no '{}' held", event.item_id);
            continue;
        }

        inventory.remove(&event.item_id, 1);

        let Some(def) = registry.get(&event.item_id) else {
            continue;
        };
        match def.effect {
            Some(ItemEffect::SpeedBoost { duration_secs }) => {
                // Re-use while active restarts the one instance.
                effects.apply(ActiveEffect {
                    id: EffectId::SpeedBoost,
                    name: EffectId::SpeedBoost.label().to_string(),
                    duration_secs,
                    started_at: now,
                });
                info!(
                    "[Inventory] {} used — speed boost for {:.0}s",
                    def.name, duration_secs
                );
                toast_writer.send(ToastEvent {
                    message: format!("{}! Speed x{:.0} for {:.0}s", def.name, SPEED_BOOST_MULTIPLIER, duration_secs),
                    duration_secs: 2.5,
                });
            }
            Some(ItemEffect::RestoreMeal { amount }) => {
                stats_writer.send(ModifyStatsEvent {
                    deltas: StatDeltas {
                        meal: amount,
                        ..Default::default()
                    },
                });
                info!("[Inventory] {} consumed — meal +{:.0}", def.name, amount);
                toast_writer.send(ToastEvent {
                    message: format!("{}! +{:.0} meal", def.name, amount),
                    duration_secs: 2.5,
                });
            }
            None => {}
        }
    }
}

fn handle_remove_effect(
    mut events: EventReader<RemoveEffectEvent>,
    mut effects: ResMut<ActiveEffects>,
) {
    for event in events.read() {
        effects.remove(event.effect);
    }
}

/// Drops effects whose duration has elapsed. Runs on a sub-second timer so
/// expiry is observable within one sweep by anything querying "is active".
fn expire_effects(
    time: Res<Time>,
    mut sweep: ResMut<EffectSweepTimer>,
    mut effects: ResMut<ActiveEffects>,
    mut expired_writer: EventWriter<EffectExpiredEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    sweep.0.tick(time.delta());
    if !sweep.0.just_finished() || effects.effects.is_empty() {
        return;
    }

    let now = time.elapsed_secs_f64();
    let mut expired: Vec<EffectId> = Vec::new();
    effects.effects.retain(|e| {
        if e.is_expired(now) {
            expired.push(e.id);
            false
        } else {
            true
        }
    });

    for id in expired {
        info!("[Inventory] Effect '{}' expired", id.label());
        expired_writer.send(EffectExpiredEvent { effect: id });
        toast_writer.send(ToastEvent {
            message: format!("Your {} wore off.", id.label()),
            duration_secs: 2.0,
        });
    }
}

fn handle_reset(
    mut events: EventReader<ResetGameEvent>,
    mut inventory: ResMut<Inventory>,
    mut effects: ResMut<ActiveEffects>,
) {
    for _ in events.read() {
        inventory.items.clear();
        inventory.add("coffee", 1);
        effects.effects.clear();
        info!("[Inventory] Reset to starting items");
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
