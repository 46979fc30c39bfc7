//! Leaderboard collaborator — the one external persistence boundary.
//!
//! On game over the core hands `{name, score}` across; this module owns
//! everything after that. One entry per player name, the highest score
//! wins, top ten kept. Backed by a JSON file on native targets and browser
//! localStorage on wasm. I/O failure is reported and logged; it never
//! reaches the core state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::shared::*;

pub const LEADERBOARD_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LeaderboardFile {
    version: u32,
    entries: Vec<LeaderboardEntry>,
}

/// In-memory copy of the standings, refreshed on load and after each
/// submit. The game-over screen reads this.
#[derive(Resource, Debug, Clone, Default)]
pub struct LeaderboardCache {
    pub entries: Vec<LeaderboardEntry>,
}

pub struct LeaderboardPlugin;

impl Plugin for LeaderboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LeaderboardCache>()
            .add_systems(Startup, load_standings)
            .add_systems(Update, submit_on_game_over);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MERGE SEMANTICS
// ═══════════════════════════════════════════════════════════════════════

/// Dedup-by-name-keep-max: replaces a lower score for the same name,
/// ignores a submission that does not beat it, sorts descending, and
/// truncates to the retention limit.
pub fn merge_score(entries: &mut Vec<LeaderboardEntry>, name: &str, score: u32) {
    match entries.iter_mut().find(|e| e.name == name) {
        Some(existing) => {
            if score > existing.score {
                existing.score = score;
            }
        }
        None => entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
        }),
    }
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(LEADERBOARD_LIMIT);
}

// ═══════════════════════════════════════════════════════════════════════
// STORAGE BACKENDS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn leaderboard_path() -> PathBuf {
    PathBuf::from("saves").join("leaderboard.json")
}

#[cfg(not(target_arch = "wasm32"))]
fn read_entries() -> Result<Vec<LeaderboardEntry>, String> {
    let path = leaderboard_path();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    let file: LeaderboardFile =
        serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))?;
    if file.version != LEADERBOARD_VERSION {
        warn!(
            "Leaderboard file has version {} but current version is {}. Loading anyway.",
            file.version, LEADERBOARD_VERSION
        );
    }
    Ok(file.entries)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_entries(entries: &[LeaderboardEntry]) -> Result<(), String> {
    fs::create_dir_all("saves").map_err(|e| format!("Could not create saves directory: {}", e))?;

    let file = LeaderboardFile {
        version: LEADERBOARD_VERSION,
        entries: entries.to_vec(),
    };
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| format!("Serialization failed: {}", e))?;

    let path = leaderboard_path();
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, &path).map_err(|e| format!("Rename failed: {}", e))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "shorehaven_leaderboard";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(|_| "localStorage unavailable".to_string())?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_entries() -> Result<Vec<LeaderboardEntry>, String> {
    let storage = local_storage()?;
    let Some(json) = storage
        .get_item(STORAGE_KEY)
        .map_err(|_| "localStorage read failed".to_string())?
    else {
        return Ok(Vec::new());
    };
    let file: LeaderboardFile =
        serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))?;
    Ok(file.entries)
}

#[cfg(target_arch = "wasm32")]
fn write_entries(entries: &[LeaderboardEntry]) -> Result<(), String> {
    let storage = local_storage()?;
    let file = LeaderboardFile {
        version: LEADERBOARD_VERSION,
        entries: entries.to_vec(),
    };
    let json = serde_json::to_string(&file).map_err(|e| format!("Serialization failed: {}", e))?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "localStorage write failed".to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn load_standings(mut cache: ResMut<LeaderboardCache>) {
    match read_entries() {
        Ok(entries) => {
            info!("[Leaderboard] Loaded {} entries", entries.len());
            cache.entries = entries;
        }
        Err(err) => {
            warn!("[Leaderboard] Load failed: {}", err);
        }
    }
}

/// Hands the finished run's score across the persistence boundary. A
/// storage failure is surfaced to the player and logged; the in-memory
/// standings still update so the session remains consistent.
fn submit_on_game_over(
    mut events: EventReader<GameOverEvent>,
    profile: Res<PlayerProfile>,
    mut cache: ResMut<LeaderboardCache>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for event in events.read() {
        merge_score(&mut cache.entries, &profile.name, event.final_score);

        match write_entries(&cache.entries) {
            Ok(()) => {
                info!(
                    "[Leaderboard] Recorded {} for {}",
                    event.final_score, profile.name
                );
            }
            Err(err) => {
                warn!("[Leaderboard] Save failed: {}", err);
                toast_writer.send(ToastEvent {
                    message: "Couldn't save your score.".into(),
                    duration_secs: 3.0,
                });
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
