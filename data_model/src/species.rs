//! Growth stages and the known species set.

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Growth stage of a grove asset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Stage {
    Seed,
    Tree,
}

/// Species tag carried by seeds and trees.
///
/// The known set is closed; any other tag parses into [`Species::Other`] and
/// falls back to the generic description text.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Species {
    Acacia,
    Baobab,
    Eucalyptus,
    Fig,
    Jacaranda,
    Mahogany,
    Mango,
    Moringa,
    Neem,
    Teak,
    Wattle,
    /// Catch-all for tags outside the known set.
    #[strum(default)]
    Other(String),
}

impl Species {
    /// Whether the tag belongs to the known set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Species::Other(_))
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{Species, Stage};
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn known_species_parse() {
        let species = Species::from_str("acacia").expect("Valid");
        assert_eq!(species, Species::Acacia);
        assert!(species.is_known());
        assert_eq!(species.to_string(), "acacia");
    }

    #[test]
    fn unknown_species_fall_through() {
        let species = Species::from_str("redwood").expect("never fails");
        assert_eq!(species, Species::Other("redwood".to_owned()));
        assert!(!species.is_known());
        assert_eq!(species.to_string(), "redwood");
    }

    #[test]
    fn stage_round_trips() {
        assert_eq!(Stage::from_str("seed").expect("Valid"), Stage::Seed);
        assert_eq!(Stage::Tree.to_string(), "tree");
        assert!(Stage::from_str("sapling").is_err());
    }
}
