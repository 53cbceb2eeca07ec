//! Epilogue synthesis.

use crate::character::Character;
use crate::text::wrap;

/// The closing narrative, picked by glory minus scars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Difference of 3 or more.
    Legend,
    /// Difference of 1 or 2.
    FondMemory,
    /// Glory and scars are even.
    Balance,
    /// More scars than glory.
    Resilience,
}

impl Tier {
    /// Pick the tier for a glory-minus-scars difference.
    pub fn from_difference(difference: i64) -> Self {
        match difference {
            d if d >= 3 => Self::Legend,
            d if d >= 1 => Self::FondMemory,
            0 => Self::Balance,
            _ => Self::Resilience,
        }
    }

    /// The tier's narrative sentence(s).
    pub fn text(self) -> &'static str {
        match self {
            Self::Legend => {
                "You become a living legend, revered in songs and invoked as the \
                 patron of heroes for generations."
            }
            Self::FondMemory => {
                "Your journey was marked by victories and sincere friendships; \
                 your name lives on in the memory of the local guilds."
            }
            Self::Balance => {
                "You strike a delicate balance between challenges and glories, \
                 leading a quiet life yet full of stories to tell."
            }
            Self::Resilience => {
                "The scars you gathered take their toll. Even so, you stand firm, \
                 proving that courage is also endurance."
            }
        }
    }
}

/// The final summary of a character's adventure, wrapped to `width`.
pub fn epilogue(character: &Character, width: usize) -> String {
    let tier = Tier::from_difference(character.difference());
    tracing::debug!(?tier, glory = character.glory, scars = character.scars, "epilogue");

    wrap(
        &format!(
            "At the end of the adventure, {} records {} glorious deeds and {} memorable \
             scars. {} The synthesis of your potential: {}.",
            character.name,
            character.glory,
            character.scars,
            tier.text(),
            character.attributes.summary(),
        ),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::character::Selections;

    fn hero(glory: u32, scars: u32) -> Character {
        let mut c = Character::new("Yuki", Selections::from_indices(2, 1, 0, 1).unwrap());
        c.glory = glory;
        c.scars = scars;
        c
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_difference(5), Tier::Legend);
        assert_eq!(Tier::from_difference(3), Tier::Legend);
        assert_eq!(Tier::from_difference(2), Tier::FondMemory);
        assert_eq!(Tier::from_difference(1), Tier::FondMemory);
        assert_eq!(Tier::from_difference(0), Tier::Balance);
        assert_eq!(Tier::from_difference(-1), Tier::Resilience);
        assert_eq!(Tier::from_difference(-3), Tier::Resilience);
    }

    #[test]
    fn four_glory_one_scar_is_legend() {
        let text = epilogue(&hero(4, 1), 1000);
        assert!(text.contains(Tier::Legend.text()));
        assert!(text.contains("records 4 glorious deeds and 1 memorable scars"));
    }

    #[test]
    fn even_counters_are_balance() {
        let text = epilogue(&hero(2, 2), 1000);
        assert!(text.contains(Tier::Balance.text()));
    }

    #[test]
    fn more_scars_is_resilience() {
        let text = epilogue(&hero(0, 3), 1000);
        assert!(text.contains(Tier::Resilience.text()));
    }

    #[test]
    fn lists_every_attribute() {
        // Lumen, Guild Heir, Star Forge, Wandering Sage:
        // vigor 1, mana 4, luck 3, charisma 2
        let c = hero(1, 0);
        let text = epilogue(&c, 1000);
        for (attribute, value) in c.attributes.iter() {
            assert!(text.contains(&format!("{}: {value}", attribute.label())));
        }
        assert!(text.ends_with("Vigor: 1, Mana: 4, Luck: 3, Charisma: 2."));
        assert_eq!(c.attribute(Attribute::Mana), 4);
    }

    #[test]
    fn wraps_to_width() {
        let text = epilogue(&hero(1, 1), 60);
        assert!(text.lines().all(|l| l.chars().count() <= 60));
    }
}
