//! Fixed game content: seed habits, skill branches, habit bundles and
//! decorations. Balance numbers live in code next to the systems that
//! consume them rather than in loadable data files.

use crate::state::{Difficulty, Habit, HabitKind, Language, Skill, SkillId};

/// Perk-point price of each skill tier.
pub const SKILL_TIER_COSTS: [u8; 3] = [1, 1, 1];

/// Decoration ids referenced by achievements and slot gating.
pub const PLAIN_WALL_ITEM: &str = "DEK001";
pub const WOODEN_FLOOR_ITEM: &str = "DEK002";
pub const VISION_BOARD_ITEM: &str = "DEK_BOARD";
pub const WORK_DESK_ITEM: &str = "DEK_TABLE";

pub const WALL_SLOT: &str = "wall_base";

/// Desk-top slots stay locked until the work desk itself is owned.
pub const DESK_CATEGORIES: [&str; 5] = ["pc", "lamp", "books", "coffee", "agenda"];

#[must_use]
pub fn default_skills() -> Vec<Skill> {
    SkillId::ALL
        .iter()
        .map(|&id| Skill { id, level: 0 })
        .collect()
}

/// The starter roster every new save begins with.
#[must_use]
pub fn seed_habits(language: Language) -> Vec<Habit> {
    let names = match language {
        Language::Tr => [
            "Mind'N Flow kullan",
            "1 Saat kitap oku",
            "Bir şeyleri ertele",
        ],
        Language::En => ["Use Mind'N Flow", "Read for 1 hour", "Procrastinate"],
    };
    vec![
        Habit {
            id: String::from("h1"),
            name: names[0].to_string(),
            kind: HabitKind::Good,
            difficulty: Difficulty::Easy,
            template_id: None,
        },
        Habit {
            id: String::from("h2"),
            name: names[1].to_string(),
            kind: HabitKind::Good,
            difficulty: Difficulty::Medium,
            template_id: None,
        },
        Habit {
            id: String::from("h3"),
            name: names[2].to_string(),
            kind: HabitKind::Bad,
            difficulty: Difficulty::Medium,
            template_id: None,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleHabitDef {
    pub name_tr: &'static str,
    pub name_en: &'static str,
    pub kind: HabitKind,
    pub difficulty: Difficulty,
}

impl BundleHabitDef {
    #[must_use]
    pub const fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Tr => self.name_tr,
            Language::En => self.name_en,
        }
    }
}

/// A purchasable habit bundle: a themed set of habits active for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleDef {
    pub id: &'static str,
    pub price: i64,
    pub habits: &'static [BundleHabitDef],
}

pub const BUNDLES: [BundleDef; 4] = [
    BundleDef {
        id: "dopamine_detox",
        price: 300,
        habits: &[
            BundleHabitDef {
                name_tr: "Sabah Ekrana Bakma",
                name_en: "No screen in morning",
                kind: HabitKind::Good,
                difficulty: Difficulty::Medium,
            },
            BundleHabitDef {
                name_tr: "Yatakta Kaydırma",
                name_en: "Doomscrolling in bed",
                kind: HabitKind::Bad,
                difficulty: Difficulty::Medium,
            },
            BundleHabitDef {
                name_tr: "Oyun Oynamak",
                name_en: "Gaming",
                kind: HabitKind::Bad,
                difficulty: Difficulty::Hard,
            },
        ],
    },
    BundleDef {
        id: "fit_life",
        price: 250,
        habits: &[
            BundleHabitDef {
                name_tr: "30 Dk Yürüyüş",
                name_en: "30 min walk",
                kind: HabitKind::Good,
                difficulty: Difficulty::Medium,
            },
            BundleHabitDef {
                name_tr: "7 Saat Uyku",
                name_en: "Sleep 7 hours",
                kind: HabitKind::Good,
                difficulty: Difficulty::Medium,
            },
            BundleHabitDef {
                name_tr: "Asitli İçecek",
                name_en: "Drink soda",
                kind: HabitKind::Bad,
                difficulty: Difficulty::Medium,
            },
        ],
    },
    BundleDef {
        id: "deep_focus",
        price: 500,
        habits: &[
            BundleHabitDef {
                name_tr: "4 Saat Çalışma",
                name_en: "Work 4 hours",
                kind: HabitKind::Good,
                difficulty: Difficulty::Hard,
            },
            BundleHabitDef {
                name_tr: "Odağı Bozmak",
                name_en: "Break focus",
                kind: HabitKind::Bad,
                difficulty: Difficulty::Hard,
            },
        ],
    },
    BundleDef {
        id: "explorer_bag",
        price: 350,
        habits: &[
            BundleHabitDef {
                name_tr: "Yabancı İçerik",
                name_en: "Foreign content",
                kind: HabitKind::Good,
                difficulty: Difficulty::Easy,
            },
            BundleHabitDef {
                name_tr: "İngilizce Pratik",
                name_en: "Practice English",
                kind: HabitKind::Good,
                difficulty: Difficulty::Medium,
            },
        ],
    },
];

#[must_use]
pub fn bundle(id: &str) -> Option<&'static BundleDef> {
    BUNDLES.iter().find(|b| b.id == id)
}

/// Store shelf grouping for decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreGroup {
    Furniture,
    Electronics,
    Decoration,
    Stationery,
}

impl StoreGroup {
    pub const ALL: [Self; 4] = [
        Self::Furniture,
        Self::Electronics,
        Self::Decoration,
        Self::Stationery,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Furniture => "furniture",
            Self::Electronics => "electronics",
            Self::Decoration => "decoration",
            Self::Stationery => "stationery",
        }
    }
}

/// A room decoration. `requires` gates the purchase behind a skill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationDef {
    pub id: &'static str,
    pub category: &'static str,
    pub group: StoreGroup,
    pub price: i64,
    pub requires: Option<(SkillId, u8)>,
}

pub const DECORATIONS: [DecorationDef; 12] = [
    DecorationDef {
        id: "DEK001",
        category: "wall_base",
        group: StoreGroup::Decoration,
        price: 50,
        requires: None,
    },
    DecorationDef {
        id: "DEK002",
        category: "floor_base",
        group: StoreGroup::Decoration,
        price: 50,
        requires: None,
    },
    DecorationDef {
        id: "DEK_COFFEE",
        category: "coffee",
        group: StoreGroup::Decoration,
        price: 50,
        requires: None,
    },
    DecorationDef {
        id: "DEK_AGENDA",
        category: "agenda",
        group: StoreGroup::Stationery,
        price: 100,
        requires: None,
    },
    DecorationDef {
        id: "DEK_TABLE",
        category: "table",
        group: StoreGroup::Furniture,
        price: 250,
        requires: Some((SkillId::S4, 1)),
    },
    DecorationDef {
        id: "DEK_BOOKS",
        category: "books",
        group: StoreGroup::Stationery,
        price: 300,
        requires: None,
    },
    DecorationDef {
        id: "DEK_LAMP",
        category: "lamp",
        group: StoreGroup::Electronics,
        price: 400,
        requires: Some((SkillId::S2, 1)),
    },
    DecorationDef {
        id: "DEK_RUG",
        category: "rug",
        group: StoreGroup::Decoration,
        price: 500,
        requires: Some((SkillId::S5, 1)),
    },
    DecorationDef {
        id: "DEK_SHELF",
        category: "shelf",
        group: StoreGroup::Decoration,
        price: 750,
        requires: Some((SkillId::S6, 1)),
    },
    DecorationDef {
        id: "DEK_BOARD",
        category: "board",
        group: StoreGroup::Decoration,
        price: 1_000,
        requires: Some((SkillId::S4, 2)),
    },
    DecorationDef {
        id: "DEK_CHAIR",
        category: "chair",
        group: StoreGroup::Furniture,
        price: 1_500,
        requires: Some((SkillId::S1, 2)),
    },
    DecorationDef {
        id: "DEK_PC",
        category: "pc",
        group: StoreGroup::Electronics,
        price: 3_000,
        requires: Some((SkillId::S2, 2)),
    },
];

#[must_use]
pub fn decoration(id: &str) -> Option<&'static DecorationDef> {
    DECORATIONS.iter().find(|d| d.id == id)
}

#[must_use]
pub fn is_desk_category(category: &str) -> bool {
    DESK_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_roster_has_two_good_one_bad() {
        let habits = seed_habits(Language::Tr);
        assert_eq!(habits.len(), 3);
        assert_eq!(habits[0].id, "h1");
        assert_eq!(
            habits
                .iter()
                .filter(|h| h.kind == HabitKind::Good)
                .count(),
            2
        );
        assert_eq!(habits[2].kind, HabitKind::Bad);
        let english = seed_habits(Language::En);
        assert_ne!(habits[0].name, english[0].name);
    }

    #[test]
    fn default_skills_cover_all_branches() {
        let skills = default_skills();
        assert_eq!(skills.len(), SkillId::ALL.len());
        assert!(skills.iter().all(|s| s.level == 0));
    }

    #[test]
    fn bundle_ids_unique_and_resolvable() {
        let ids: HashSet<&str> = BUNDLES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BUNDLES.len());
        let focus = bundle("deep_focus").expect("deep_focus");
        assert_eq!(focus.price, 500);
        assert_eq!(focus.habits.len(), 2);
        assert!(bundle("nope").is_none());
    }

    #[test]
    fn bundle_names_localized() {
        let detox = bundle("dopamine_detox").expect("bundle");
        assert_ne!(
            detox.habits[0].name(Language::Tr),
            detox.habits[0].name(Language::En)
        );
    }

    #[test]
    fn decoration_ids_unique_and_gates_match() {
        let ids: HashSet<&str> = DECORATIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DECORATIONS.len());
        let desk = decoration(WORK_DESK_ITEM).expect("desk");
        assert_eq!(desk.requires, Some((SkillId::S4, 1)));
        let laptop = decoration("DEK_PC").expect("laptop");
        assert_eq!(laptop.price, 3_000);
        assert!(is_desk_category(laptop.category));
        assert!(!is_desk_category("wall_base"));
    }
}
