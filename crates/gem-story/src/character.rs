//! Player character state.

use crate::attribute::{Attribute, Attributes};
use crate::catalog::{Category, ChoiceOption};

/// The four catalog options picked during character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    /// Chosen world.
    pub world: &'static ChoiceOption,
    /// Chosen origin.
    pub origin: &'static ChoiceOption,
    /// Chosen power.
    pub power: &'static ChoiceOption,
    /// Chosen legacy.
    pub legacy: &'static ChoiceOption,
}

impl Selections {
    /// Pick options by zero-based index into each category.
    ///
    /// Returns `None` if any index is out of range.
    pub fn from_indices(world: usize, origin: usize, power: usize, legacy: usize) -> Option<Self> {
        Some(Self {
            world: Category::World.options().get(world)?,
            origin: Category::Origin.options().get(origin)?,
            power: Category::Power.options().get(power)?,
            legacy: Category::Legacy.options().get(legacy)?,
        })
    }

    /// The selected options in prompt order.
    pub fn all(&self) -> [&'static ChoiceOption; 4] {
        [self.world, self.origin, self.power, self.legacy]
    }
}

/// Sum the deltas of `options` into a fresh attribute map.
pub fn aggregate<'a>(options: impl IntoIterator<Item = &'a ChoiceOption>) -> Attributes {
    let mut attributes = Attributes::new();
    for option in options {
        attributes.apply(option.deltas);
    }
    attributes
}

/// A reborn hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Name from the original world.
    pub name: String,
    /// Options picked at creation.
    pub selections: Selections,
    /// Current attribute values.
    pub attributes: Attributes,
    /// Glorious deeds recorded.
    pub glory: u32,
    /// Memorable scars recorded.
    pub scars: u32,
}

impl Character {
    /// Create a character, summing the selected options into its attributes.
    pub fn new(name: impl Into<String>, selections: Selections) -> Self {
        let attributes = aggregate(selections.all());
        let name = name.into();
        tracing::debug!(%name, attributes = %attributes.summary(), "character created");
        Self {
            name,
            selections,
            attributes,
            glory: 0,
            scars: 0,
        }
    }

    /// Shorthand for `self.attributes.get(attribute)`.
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    /// Glory minus scars.
    pub fn difference(&self) -> i64 {
        i64::from(self.glory) - i64::from(self.scars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LEGACIES, ORIGINS, POWERS, WORLDS};
    use proptest::prelude::*;

    #[test]
    fn new_sums_all_four_options() {
        // Aerilon, Guild Heir, Heart Lyre, Celestial Guardian
        let selections = Selections::from_indices(0, 1, 2, 0).unwrap();
        let hero = Character::new("Akira", selections);

        assert_eq!(hero.attribute(Attribute::Mana), 3);
        assert_eq!(hero.attribute(Attribute::Charisma), 6);
        assert_eq!(hero.attribute(Attribute::Vigor), 1);
        assert_eq!(hero.attribute(Attribute::Luck), 0);
        assert_eq!(hero.glory, 0);
        assert_eq!(hero.scars, 0);
    }

    #[test]
    fn from_indices_rejects_out_of_range() {
        assert!(Selections::from_indices(3, 0, 0, 0).is_none());
        assert!(Selections::from_indices(0, 0, 0, 7).is_none());
    }

    #[test]
    fn from_indices_picks_by_position() {
        let s = Selections::from_indices(2, 0, 1, 2).unwrap();
        assert_eq!(s.world.name, WORLDS[2].name);
        assert_eq!(s.origin.name, ORIGINS[0].name);
        assert_eq!(s.power.name, POWERS[1].name);
        assert_eq!(s.legacy.name, LEGACIES[2].name);
    }

    #[test]
    fn difference_can_be_negative() {
        let mut hero = Character::new("Rin", Selections::from_indices(0, 0, 0, 0).unwrap());
        hero.scars = 3;
        hero.glory = 1;
        assert_eq!(hero.difference(), -2);
    }

    proptest! {
        #[test]
        fn aggregate_is_per_key_sum(w in 0..3usize, o in 0..3usize, p in 0..3usize, l in 0..3usize) {
            let selections = Selections::from_indices(w, o, p, l).unwrap();
            let attrs = aggregate(selections.all());
            for a in Attribute::ALL {
                let expected: i32 = selections.all().iter().map(|opt| opt.delta(a)).sum();
                prop_assert_eq!(attrs.get(a), expected);
                prop_assert!(attrs.get(a) >= 0);
            }
        }

        #[test]
        fn aggregate_ignores_order(w in 0..3usize, o in 0..3usize, p in 0..3usize, l in 0..3usize) {
            let selections = Selections::from_indices(w, o, p, l).unwrap();
            let mut reversed = selections.all();
            reversed.reverse();
            prop_assert_eq!(aggregate(selections.all()), aggregate(reversed));
        }
    }
}
