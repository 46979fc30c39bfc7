//! Quest authoring — named preset templates, common marker locations, and
//! the sample quest set seeded at the start of a run.
//!
//! A template is a complete `QuestSpec` minus its position; callers place
//! it with `at` / `at_location` and may override any field with plain
//! struct-update syntax afterwards.

use bevy::prelude::*;

use crate::shared::*;

/// Named quest presets for common activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestTemplate {
    Cooking,
    Eating,
    Nap,
    FullSleep,
    Shower,
    HouseCleaning,
    Work,
    PartTimeJob,
    BeachRelax,
    MountainHike,
    GroceryShopping,
    ClothesShopping,
}

impl QuestTemplate {
    /// The preset spec, positioned at the origin until placed.
    pub fn spec(self) -> QuestSpec {
        let (title, description, destination, stat_changes, score_increase) = match self {
            QuestTemplate::Cooking => (
                "Cooking Session",
                "Prepare a delicious meal",
                SceneId::House,
                StatDeltas {
                    meal: 25.0,
                    sleep: -5.0,
                    happiness: 15.0,
                    cleanliness: -10.0,
                    money: -20.0,
                },
                75,
            ),
            QuestTemplate::Eating => (
                "Meal Time",
                "Enjoy a satisfying meal",
                SceneId::House,
                StatDeltas {
                    meal: 40.0,
                    happiness: 10.0,
                    money: -15.0,
                    ..Default::default()
                },
                50,
            ),
            QuestTemplate::Nap => (
                "Quick Nap",
                "Take a refreshing nap",
                SceneId::House,
                StatDeltas {
                    sleep: 30.0,
                    happiness: 5.0,
                    ..Default::default()
                },
                40,
            ),
            QuestTemplate::FullSleep => (
                "Good Night's Sleep",
                "Get a full night of rest",
                SceneId::House,
                StatDeltas {
                    sleep: 80.0,
                    happiness: 15.0,
                    meal: -10.0,
                    ..Default::default()
                },
                100,
            ),
            QuestTemplate::Shower => (
                "Take a Shower",
                "Clean up and feel refreshed",
                SceneId::House,
                StatDeltas {
                    cleanliness: 50.0,
                    happiness: 10.0,
                    sleep: -5.0,
                    ..Default::default()
                },
                60,
            ),
            QuestTemplate::HouseCleaning => (
                "House Cleaning",
                "Clean and organize the house",
                SceneId::House,
                StatDeltas {
                    cleanliness: 30.0,
                    happiness: 20.0,
                    sleep: -15.0,
                    ..Default::default()
                },
                90,
            ),
            QuestTemplate::Work => (
                "Work Shift",
                "Complete a work shift to earn money",
                SceneId::House,
                StatDeltas {
                    meal: -15.0,
                    sleep: -20.0,
                    happiness: -5.0,
                    cleanliness: -10.0,
                    money: 150.0,
                },
                120,
            ),
            QuestTemplate::PartTimeJob => (
                "Part-time Job",
                "Do some part-time work",
                SceneId::House,
                StatDeltas {
                    meal: -10.0,
                    sleep: -10.0,
                    happiness: 5.0,
                    money: 75.0,
                    ..Default::default()
                },
                80,
            ),
            QuestTemplate::BeachRelax => (
                "Beach Relaxation",
                "Relax and unwind at the beach",
                SceneId::Beach,
                StatDeltas {
                    happiness: 25.0,
                    sleep: -5.0,
                    cleanliness: -15.0,
                    ..Default::default()
                },
                85,
            ),
            QuestTemplate::MountainHike => (
                "Mountain Adventure",
                "Explore the mountains",
                SceneId::Mountain,
                StatDeltas {
                    meal: -20.0,
                    sleep: -25.0,
                    happiness: 30.0,
                    cleanliness: -20.0,
                    ..Default::default()
                },
                150,
            ),
            QuestTemplate::GroceryShopping => (
                "Grocery Shopping",
                "Buy food and supplies",
                SceneId::House,
                StatDeltas {
                    meal: 15.0,
                    happiness: 5.0,
                    sleep: -10.0,
                    money: -80.0,
                    ..Default::default()
                },
                60,
            ),
            QuestTemplate::ClothesShopping => (
                "Clothes Shopping",
                "Buy new clothes",
                SceneId::House,
                StatDeltas {
                    happiness: 20.0,
                    cleanliness: 10.0,
                    sleep: -10.0,
                    money: -120.0,
                    ..Default::default()
                },
                70,
            ),
        };

        QuestSpec {
            title: title.into(),
            description: description.into(),
            x: 0.0,
            y: 0.0,
            destination,
            stat_changes,
            score_increase,
        }
    }

    /// The preset placed at explicit coordinates.
    pub fn at(self, x: f32, y: f32) -> QuestSpec {
        QuestSpec {
            x,
            y,
            ..self.spec()
        }
    }

    /// The preset placed at a common named location.
    pub fn at_location(self, location: CommonLocation) -> QuestSpec {
        let (x, y) = location.position();
        self.at(x, y)
    }
}

/// Well-known marker positions on the island overworld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonLocation {
    HouseEntrance,
    BeachEntrance,
    MountainEntrance,
    TownCenter,
    ParkArea,
    ShopArea,
}

impl CommonLocation {
    pub fn position(self) -> (f32, f32) {
        match self {
            CommonLocation::HouseEntrance => (523.0, 538.0),
            CommonLocation::BeachEntrance => (25.0, 980.0),
            CommonLocation::MountainEntrance => (997.0, 749.0),
            CommonLocation::TownCenter => (400.0, 400.0),
            CommonLocation::ParkArea => (200.0, 600.0),
            CommonLocation::ShopArea => (600.0, 200.0),
        }
    }
}

/// The quest set every fresh run opens with.
pub fn sample_quests() -> Vec<QuestSpec> {
    vec![
        QuestTemplate::BeachRelax.at_location(CommonLocation::BeachEntrance),
        QuestTemplate::Cooking.at_location(CommonLocation::HouseEntrance),
        QuestSpec {
            title: "House Maintenance".into(),
            description: "Fix and clean things around the house".into(),
            ..QuestTemplate::HouseCleaning.at_location(CommonLocation::HouseEntrance)
        },
        QuestTemplate::MountainHike.at_location(CommonLocation::MountainEntrance),
        QuestSpec {
            title: "Shopping Trip".into(),
            description: "Go shopping for supplies and groceries".into(),
            x: 200.0,
            y: 600.0,
            destination: SceneId::House,
            stat_changes: StatDeltas {
                meal: 10.0,
                sleep: -10.0,
                happiness: 5.0,
                money: -100.0,
                ..Default::default()
            },
            score_increase: 50,
        },
        QuestSpec {
            title: "Office Work".into(),
            description: "Complete your daily work tasks".into(),
            ..QuestTemplate::Work.at(600.0, 200.0)
        },
    ]
}

/// Posts the sample quest set whenever the catalog is completely empty —
/// at the start of a run and again after a full restart.
pub fn seed_sample_quests(
    log: Res<QuestLog>,
    mut create_writer: EventWriter<CreateQuestEvent>,
) {
    if !log.is_empty() {
        return;
    }
    let specs = sample_quests();
    info!("[Quests] Seeding {} sample quests", specs.len());
    for spec in specs {
        create_writer.send(CreateQuestEvent { spec });
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
