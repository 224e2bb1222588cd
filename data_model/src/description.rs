//! Static description catalog: descriptive text for every (stage, species)
//! pair. A pure lookup table with no state and no failure mode.

use crate::species::{Species, Stage};

/// Text used for any species outside the known set, regardless of stage.
pub const FALLBACK_DESCRIPTION: &str =
    "A young member of the grove, quietly growing towards the canopy.";

/// Descriptive text for a (stage, species) pair. Total over its input
/// domain: every known pair has a unique literal, anything else maps to
/// [`FALLBACK_DESCRIPTION`].
pub fn describe(stage: Stage, species: &Species) -> &'static str {
    match (stage, species) {
        (Stage::Seed, Species::Acacia) => {
            "A thorn-guarded speck that dreams of umbrella crowns over dry savanna."
        }
        (Stage::Seed, Species::Baobab) => {
            "A seed the size of a thumbnail holding a thousand years of patience."
        }
        (Stage::Seed, Species::Eucalyptus) => {
            "A fragrant grain that will one day shed its bark like old letters."
        }
        (Stage::Seed, Species::Fig) => {
            "A tiny seed with a standing invitation to every bird in the valley."
        }
        (Stage::Seed, Species::Jacaranda) => {
            "A papery disc carrying next spring's purple rain."
        }
        (Stage::Seed, Species::Mahogany) => {
            "A winged seed spiralling down with heartwood ambitions."
        }
        (Stage::Seed, Species::Mango) => {
            "A heavy stone wrapped in the memory of sweet orange flesh."
        }
        (Stage::Seed, Species::Moringa) => {
            "A three-winged seed eager to become the tree that never quits."
        }
        (Stage::Seed, Species::Neem) => {
            "A bitter little olive with a pharmacy folded inside."
        }
        (Stage::Seed, Species::Teak) => {
            "A felt-coated bead that takes the long road to golden timber."
        }
        (Stage::Seed, Species::Wattle) => {
            "A glossy black seed that waits for fire to wake it."
        }
        (Stage::Tree, Species::Acacia) => {
            "A flat-topped sentinel feeding giraffes and shading red earth."
        }
        (Stage::Tree, Species::Baobab) => {
            "An upside-down giant storing whole seasons of rain in its trunk."
        }
        (Stage::Tree, Species::Eucalyptus) => {
            "A silver-leaved tower perfuming the wind with menthol."
        }
        (Stage::Tree, Species::Fig) => {
            "A strangler-armed host whose table is never empty."
        }
        (Stage::Tree, Species::Jacaranda) => {
            "A cloud of violet blossom that carpets the street twice a year."
        }
        (Stage::Tree, Species::Mahogany) => {
            "A straight-backed hardwood holding the canopy's quiet center."
        }
        (Stage::Tree, Species::Mango) => {
            "A broad-crowned orchard queen bowing under summer fruit."
        }
        (Stage::Tree, Species::Moringa) => {
            "A lanky miracle tree offering leaves, pods and shade at once."
        }
        (Stage::Tree, Species::Neem) => {
            "An evergreen healer that never stops dropping remedies."
        }
        (Stage::Tree, Species::Teak) => {
            "A broadleaf veteran whose timber outlives its planters."
        }
        (Stage::Tree, Species::Wattle) => {
            "A golden-flowered pioneer stitching nitrogen back into the soil."
        }
        (_, Species::Other(_)) => FALLBACK_DESCRIPTION,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const KNOWN: [Species; 11] = [
        Species::Acacia,
        Species::Baobab,
        Species::Eucalyptus,
        Species::Fig,
        Species::Jacaranda,
        Species::Mahogany,
        Species::Mango,
        Species::Moringa,
        Species::Neem,
        Species::Teak,
        Species::Wattle,
    ];

    #[test]
    fn known_pairs_have_unique_text() {
        let mut seen = HashSet::new();
        for stage in [Stage::Seed, Stage::Tree] {
            for species in &KNOWN {
                assert!(seen.insert(describe(stage, species)));
            }
        }
        assert_eq!(seen.len(), 22);
    }

    #[test]
    fn unknown_species_fall_back() {
        let redwood = Species::Other("redwood".to_owned());
        assert_eq!(describe(Stage::Seed, &redwood), FALLBACK_DESCRIPTION);
        assert_eq!(describe(Stage::Tree, &redwood), FALLBACK_DESCRIPTION);
    }
}
