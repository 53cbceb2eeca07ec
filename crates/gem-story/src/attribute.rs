//! Character attributes and the attribute map.

use std::collections::BTreeMap;

/// One of the four attributes a reborn hero is measured by.
///
/// The declaration order is the display order used by menus and the
/// epilogue summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    /// Physical strength and endurance.
    Vigor,
    /// Magical reserves.
    Mana,
    /// Fortune's favor.
    Luck,
    /// Social presence.
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Vigor,
        Attribute::Mana,
        Attribute::Luck,
        Attribute::Charisma,
    ];

    /// Lower-case key used in option listings.
    pub fn key(self) -> &'static str {
        match self {
            Self::Vigor => "vigor",
            Self::Mana => "mana",
            Self::Luck => "luck",
            Self::Charisma => "charisma",
        }
    }

    /// Capitalized label used in the epilogue.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vigor => "Vigor",
            Self::Mana => "Mana",
            Self::Luck => "Luck",
            Self::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Mapping from attribute to its current value.
///
/// Every attribute is present from construction, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<Attribute, i32>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            values: Attribute::ALL.into_iter().map(|a| (a, 0)).collect(),
        }
    }
}

impl Attributes {
    /// Create a map with every attribute at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.values.get(&attribute).copied().unwrap_or(0)
    }

    /// Add `amount` to an attribute.
    pub fn add(&mut self, attribute: Attribute, amount: i32) {
        *self.values.entry(attribute).or_insert(0) += amount;
    }

    /// Add every delta in `deltas`.
    pub fn apply(&mut self, deltas: &[(Attribute, i32)]) {
        for &(attribute, amount) in deltas {
            self.add(attribute, amount);
        }
    }

    /// Iterate attributes and values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.values.iter().map(|(a, v)| (*a, *v))
    }

    /// `Vigor: 3, Mana: 5, Luck: 1, Charisma: 2`
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(a, v)| format!("{}: {v}", a.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let attrs = Attributes::new();
        assert_eq!(attrs.iter().count(), 4);
        for a in Attribute::ALL {
            assert_eq!(attrs.get(a), 0);
        }
    }

    #[test]
    fn apply_sums_deltas() {
        let mut attrs = Attributes::new();
        attrs.apply(&[(Attribute::Mana, 2), (Attribute::Charisma, 1)]);
        attrs.apply(&[(Attribute::Mana, 1)]);
        assert_eq!(attrs.get(Attribute::Mana), 3);
        assert_eq!(attrs.get(Attribute::Charisma), 1);
        assert_eq!(attrs.get(Attribute::Vigor), 0);
    }

    #[test]
    fn iterates_in_display_order() {
        let keys: Vec<_> = Attributes::new().iter().map(|(a, _)| a).collect();
        assert_eq!(keys, Attribute::ALL.to_vec());
    }

    #[test]
    fn summary_uses_labels() {
        let mut attrs = Attributes::new();
        attrs.add(Attribute::Luck, 4);
        assert_eq!(attrs.summary(), "Vigor: 0, Mana: 0, Luck: 4, Charisma: 0");
    }
}
