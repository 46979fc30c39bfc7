//! Scene descriptions — each roamable area as a data table.
//!
//! A scene is an entry point, a tileset name for rendering consumers, exit
//! zones, interaction points, and its list of scene-local quests. All
//! scenes share the one behavior module in `player`; there is no per-scene
//! code.

use crate::shared::*;

/// A walk-up transition into another scene.
#[derive(Debug, Clone, Copy)]
pub struct ExitZone {
    pub x: f32,
    pub y: f32,
    pub to: SceneId,
    pub label: &'static str,
}

/// A scene-local quest entry. Fixed ids keep these out of the catalog's
/// counter range while still feeding the shared cooldown/daily gates.
#[derive(Debug, Clone, Copy)]
pub struct LocalQuestDef {
    pub id: u32,
    pub title: &'static str,
    pub x: f32,
    pub y: f32,
    pub stat_changes: StatDeltas,
    pub score_increase: u32,
}

impl LocalQuestDef {
    pub fn to_local_quest(&self) -> LocalQuest {
        LocalQuest {
            id: QuestId(self.id),
            title: self.title.to_string(),
            x: self.x,
            y: self.y,
            stat_changes: self.stat_changes,
            score_increase: self.score_increase,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneDef {
    pub id: SceneId,
    pub entry: (f32, f32),
    pub tileset: &'static str,
    pub exits: &'static [ExitZone],
    pub local_quests: &'static [LocalQuestDef],
    /// Sleep interaction point, if the scene has a bed.
    pub bed: Option<(f32, f32)>,
    /// Drink shack interaction point, if the scene has one.
    pub shop: Option<(f32, f32)>,
}

const ZERO: StatDeltas = StatDeltas {
    meal: 0.0,
    sleep: 0.0,
    happiness: 0.0,
    cleanliness: 0.0,
    money: 0.0,
};

const ISLAND: SceneDef = SceneDef {
    id: SceneId::Island,
    entry: (528.0, 597.0),
    tileset: "island_terrain",
    exits: &[
        ExitZone {
            x: 523.0,
            y: 538.0,
            to: SceneId::House,
            label: "Enter House",
        },
        ExitZone {
            x: 25.0,
            y: 980.0,
            to: SceneId::Beach,
            label: "To Beach",
        },
        ExitZone {
            x: 1011.0,
            y: 247.0,
            to: SceneId::Mountain,
            label: "To Mountain",
        },
    ],
    local_quests: &[],
    bed: None,
    shop: None,
};

const HOUSE: SceneDef = SceneDef {
    id: SceneId::House,
    entry: (100.0, 160.0),
    tileset: "house_interior",
    exits: &[ExitZone {
        x: 100.0,
        y: 200.0,
        to: SceneId::Island,
        label: "Go Outside",
    }],
    local_quests: &[
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE,
            title: "Clean the Kitchen",
            x: 165.0,
            y: 55.0,
            stat_changes: StatDeltas {
                cleanliness: 15.0,
                happiness: 10.0,
                ..ZERO
            },
            score_increase: 50,
        },
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 1,
            title: "Tidy the Bedroom",
            x: 40.0,
            y: 71.0,
            stat_changes: StatDeltas {
                cleanliness: 20.0,
                sleep: 10.0,
                ..ZERO
            },
            score_increase: 60,
        },
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 2,
            title: "Vacuum the Living Room",
            x: 173.0,
            y: 165.0,
            stat_changes: StatDeltas {
                cleanliness: 25.0,
                happiness: 5.0,
                ..ZERO
            },
            score_increase: 70,
        },
    ],
    bed: Some((35.0, 69.0)),
    shop: None,
};

const BEACH: SceneDef = SceneDef {
    id: SceneId::Beach,
    entry: (400.0, 300.0),
    tileset: "beach_sand",
    exits: &[ExitZone {
        x: 400.0,
        y: 520.0,
        to: SceneId::Island,
        label: "Back to Island",
    }],
    local_quests: &[
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 10,
            title: "Collect Seashells",
            x: 150.0,
            y: 200.0,
            stat_changes: StatDeltas {
                happiness: 20.0,
                cleanliness: -5.0,
                ..ZERO
            },
            score_increase: 80,
        },
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 11,
            title: "Build a Sandcastle",
            x: 300.0,
            y: 150.0,
            stat_changes: StatDeltas {
                happiness: 30.0,
                meal: -15.0,
                ..ZERO
            },
            score_increase: 120,
        },
    ],
    bed: None,
    shop: Some((600.0, 120.0)),
};

const MOUNTAIN: SceneDef = SceneDef {
    id: SceneId::Mountain,
    entry: (200.0, 400.0),
    tileset: "mountain_rock",
    exits: &[ExitZone {
        x: 200.0,
        y: 460.0,
        to: SceneId::Island,
        label: "Back to Island",
    }],
    local_quests: &[
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 20,
            title: "Mountain Picnic",
            x: 350.0,
            y: 220.0,
            stat_changes: StatDeltas {
                happiness: 25.0,
                sleep: -15.0,
                meal: 10.0,
                ..ZERO
            },
            score_increase: 120,
        },
        LocalQuestDef {
            id: LOCAL_QUEST_ID_BASE + 21,
            title: "Nature Photography",
            x: 480.0,
            y: 300.0,
            stat_changes: StatDeltas {
                happiness: 30.0,
                cleanliness: -5.0,
                ..ZERO
            },
            score_increase: 100,
        },
    ],
    bed: None,
    shop: None,
};

/// The full scene table.
pub const SCENES: &[SceneDef] = &[ISLAND, HOUSE, BEACH, MOUNTAIN];

pub fn scene_def(id: SceneId) -> &'static SceneDef {
    match id {
        SceneId::Island => &ISLAND,
        SceneId::House => &HOUSE,
        SceneId::Beach => &BEACH,
        SceneId::Mountain => &MOUNTAIN,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
