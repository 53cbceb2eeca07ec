//! Outcome-tag dispatch for event choices.
//!
//! Each branch rolls a small die, mixes in the character's attributes to
//! produce a number for the narration, and applies at most one permanent
//! change to the character.

use rand::rngs::StdRng;

use crate::attribute::Attribute;
use crate::character::Character;
use crate::dice::Die;
use crate::event::{EventOption, OutcomeTag};
use crate::text::wrap;

/// The narrated number produced by a resolution branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Inspiration points granted by Gem on a glorious outcome.
    Inspiration(i32),
    /// Signed lesson value of a scar. Cosmetic: never applied to attributes.
    Lesson(i32),
    /// Arcane echoes gathered on a mystic outcome.
    ArcaneEcho(i32),
    /// Nothing happened.
    Quiet,
}

impl Flavor {
    /// The branch text following "You choose to ...".
    pub fn text(self) -> String {
        match self {
            Self::Inspiration(bonus) => format!(
                "The world smiles upon you. Your allies celebrate, and the god Gem \
                 grants an extra blessing of {bonus} inspiration points."
            ),
            Self::Lesson(penalty) => format!(
                "The challenge takes its toll; a new scar appears, but it also leaves \
                 lessons that strengthen your resolve ({penalty:+})."
            ),
            Self::ArcaneEcho(echo) => format!(
                "Your mystic power pulses intensely, revealing ancient secrets. \
                 You gather {echo} arcane echoes and refine your mana."
            ),
            Self::Quiet => "The gears of fate turn silently this time.".to_string(),
        }
    }
}

/// The result of resolving one event choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The chosen option's label.
    pub label: &'static str,
    /// The narrated number.
    pub flavor: Flavor,
}

impl Resolution {
    /// Narration wrapped to `width`.
    pub fn narrative(&self, width: usize) -> String {
        wrap(
            &format!(
                "You choose to {}. {}",
                self.label.to_lowercase(),
                self.flavor.text()
            ),
            width,
        )
    }
}

/// Apply the chosen option's outcome to `character`.
pub fn resolve(character: &mut Character, option: &EventOption, rng: &mut StdRng) -> Resolution {
    let luck = character.attribute(Attribute::Luck);
    let charisma = character.attribute(Attribute::Charisma);
    let vigor = character.attribute(Attribute::Vigor);
    let mana = character.attribute(Attribute::Mana);

    let flavor = match option.tag {
        OutcomeTag::Glory => {
            character.glory += 1;
            Flavor::Inspiration(Die::D3.roll_from_zero(rng) + luck.max(charisma) / 2)
        }
        OutcomeTag::Scar => {
            character.scars += 1;
            Flavor::Lesson(Die::D3.roll_from_zero(rng) - vigor.min(luck) / 3)
        }
        OutcomeTag::Mystic => {
            let echo = Die::D6.roll(rng) + mana;
            character.attributes.add(Attribute::Mana, 1);
            Flavor::ArcaneEcho(echo)
        }
        OutcomeTag::Neutral => Flavor::Quiet,
    };

    tracing::debug!(
        option = option.id,
        tag = %option.tag,
        ?flavor,
        glory = character.glory,
        scars = character.scars,
        "event resolved"
    );

    Resolution {
        label: option.label,
        flavor,
    }
}
