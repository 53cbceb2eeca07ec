//! Static catalog of selectable options.
//!
//! Four categories of three options each. Every option carries a small list
//! of attribute deltas that are summed into the character on creation.

use crate::attribute::Attribute;

/// A selectable option: a world, origin, power or legacy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Display name.
    pub name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Attribute bonuses granted by this option.
    pub deltas: &'static [(Attribute, i32)],
}

impl ChoiceOption {
    /// Menu line: `name - description (mana: +2, charisma: +1)`.
    pub fn present(&self) -> String {
        let deltas = self
            .deltas
            .iter()
            .map(|(a, v)| format!("{}: {v:+}", a.key()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} - {} ({deltas})", self.name, self.description)
    }

    /// The delta for one attribute, or 0 if the option does not touch it.
    pub fn delta(&self, attribute: Attribute) -> i32 {
        self.deltas
            .iter()
            .filter(|(a, _)| *a == attribute)
            .map(|(_, v)| *v)
            .sum()
    }
}

/// The four selection steps of character creation, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The world to be reborn in.
    World,
    /// The family or circumstance of rebirth.
    Origin,
    /// Gem's blessing.
    Power,
    /// The legacy the hero means to build.
    Legacy,
}

impl Category {
    /// All categories in prompt order.
    pub const ALL: [Category; 4] = [
        Category::World,
        Category::Origin,
        Category::Power,
        Category::Legacy,
    ];

    /// The menu heading shown when asking for this category.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::World => "Choose your new world",
            Self::Origin => "What will your new origin be?",
            Self::Power => "Which blessing do you wish to receive?",
            Self::Legacy => "Which legacy do you intend to build?",
        }
    }

    /// Short name for listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::World => "World",
            Self::Origin => "Origin",
            Self::Power => "Power",
            Self::Legacy => "Legacy",
        }
    }

    /// The options available in this category.
    pub fn options(self) -> &'static [ChoiceOption] {
        match self {
            Self::World => WORLDS,
            Self::Origin => ORIGINS,
            Self::Power => POWERS,
            Self::Legacy => LEGACIES,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Worlds the player can be reborn in.
pub static WORLDS: &[ChoiceOption] = &[
    ChoiceOption {
        name: "Kingdom of Aerilon",
        description: "A world where cities float and magic powers the trade routes.",
        deltas: &[(Attribute::Mana, 2), (Attribute::Charisma, 1)],
    },
    ChoiceOption {
        name: "Ferromar Empire",
        description: "Lands forged by steel and steam, where discipline speaks loudest.",
        deltas: &[(Attribute::Vigor, 2)],
    },
    ChoiceOption {
        name: "Lumen Archipelago",
        description: "Mysterious islands protected by ancestral spirits.",
        deltas: &[(Attribute::Luck, 2), (Attribute::Mana, 1)],
    },
];

/// Origins the player can be reborn into.
pub static ORIGINS: &[ChoiceOption] = &[
    ChoiceOption {
        name: "Artificer's Child",
        description: "You are reborn into a family that masters arcane technology.",
        deltas: &[(Attribute::Mana, 1), (Attribute::Vigor, 1)],
    },
    ChoiceOption {
        name: "Guild Heir",
        description: "An influential guild adopts you as a special ward of the god Gem.",
        deltas: &[(Attribute::Charisma, 2)],
    },
    ChoiceOption {
        name: "Wandering Hunter",
        description: "You wake in a caravan crossing untamed territories.",
        deltas: &[(Attribute::Vigor, 1), (Attribute::Luck, 1)],
    },
];

/// Blessings Gem can grant.
pub static POWERS: &[ChoiceOption] = &[
    ChoiceOption {
        name: "Star Forge",
        description: "Summons weapons shaped from celestial energy.",
        deltas: &[(Attribute::Vigor, 1), (Attribute::Mana, 2)],
    },
    ChoiceOption {
        name: "Echo of Time",
        description: "Foresees possible futures to avoid or provoke them.",
        deltas: &[(Attribute::Luck, 2)],
    },
    ChoiceOption {
        name: "Heart Lyre",
        description: "Enchanted music that inspires allies and confounds enemies.",
        deltas: &[(Attribute::Charisma, 2), (Attribute::Mana, 1)],
    },
];

/// Legacies the player can pursue.
pub static LEGACIES: &[ChoiceOption] = &[
    ChoiceOption {
        name: "Celestial Guardian",
        description: "You carry a promise to protect the helpless in Gem's name.",
        deltas: &[(Attribute::Charisma, 1), (Attribute::Vigor, 1)],
    },
    ChoiceOption {
        name: "Wandering Sage",
        description: "An insatiable thirst for knowledge guides you through living libraries.",
        deltas: &[(Attribute::Mana, 1), (Attribute::Luck, 1)],
    },
    ChoiceOption {
        name: "Fate Challenger",
        description: "You vow to confront the gears of the world and overcome them.",
        deltas: &[(Attribute::Vigor, 1), (Attribute::Luck, 1)],
    },
];
