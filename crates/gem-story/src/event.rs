//! Scripted story events.

use crate::text::wrap;

/// Which resolution branch an event choice triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeTag {
    /// A triumph: adds one glory.
    Glory,
    /// A setback: adds one scar.
    Scar,
    /// An arcane experience: raises mana by one.
    Mystic,
    /// Flavor only.
    Neutral,
}

impl std::fmt::Display for OutcomeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glory => write!(f, "glory"),
            Self::Scar => write!(f, "scar"),
            Self::Mystic => write!(f, "mystic"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// One of an event's fixed choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOption {
    /// Short identifier shown in brackets.
    pub id: &'static str,
    /// What the player does.
    pub label: &'static str,
    /// Resolution branch.
    pub tag: OutcomeTag,
}

/// A story event with three choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Heading.
    pub title: &'static str,
    /// Scene-setting text.
    pub description: &'static str,
    /// Choices in menu order.
    pub options: &'static [EventOption],
}

impl Event {
    /// Render the event heading, description and numbered choices.
    pub fn present(&self, width: usize) -> String {
        let mut output = format!("\n=== {} ===\n{}\n", self.title, wrap(self.description, width));
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("  {}. {} [{}]", i + 1, o.label, o.id))
            .collect::<Vec<_>>()
            .join("\n");
        output.push_str(&options);
        output
    }
}

/// The story's events, resolved in order.
pub static EVENTS: &[Event] = &[
    Event {
        title: "Festival of Rebirth",
        description: "The people celebrate your arrival and the god Gem offers a surprise challenge.",
        options: &[
            EventOption {
                id: "glory",
                label: "Show off your Star Forge in a friendly duel",
                tag: OutcomeTag::Glory,
            },
            EventOption {
                id: "charity",
                label: "Hand out blessings at the fair with the Heart Lyre",
                tag: OutcomeTag::Mystic,
            },
            EventOption {
                id: "humility",
                label: "Quietly help out at the community stalls",
                tag: OutcomeTag::Scar,
            },
        ],
    },
    Event {
        title: "Serpentine Library",
        description: "A labyrinth of living scrolls promises ancient secrets.",
        options: &[
            EventOption {
                id: "study",
                label: "Dive into the glowing manuscripts",
                tag: OutcomeTag::Mystic,
            },
            EventOption {
                id: "shortcut",
                label: "Follow a guiding spirit into a forbidden room",
                tag: OutcomeTag::Glory,
            },
            EventOption {
                id: "retreat",
                label: "Fall back when you sense a hostile presence",
                tag: OutcomeTag::Scar,
            },
        ],
    },
    Event {
        title: "Twilight Trial",
        description: "An elemental titan awakens, threatening the village that took you in.",
        options: &[
            EventOption {
                id: "combat",
                label: "Attack the titan head-on with courage",
                tag: OutcomeTag::Glory,
            },
            EventOption {
                id: "strategy",
                label: "Coordinate an orderly retreat",
                tag: OutcomeTag::Scar,
            },
            EventOption {
                id: "seal",
                label: "Channel mana to seal the creature",
                tag: OutcomeTag::Mystic,
            },
        ],
    },
];
