//! This module contains the [`Seed`] structure: an issued, unplanted
//! collectible waiting in the nursery collection.

use core::str::FromStr;

use derive_more::{DebugCustom, Display};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    account::AccountId,
    name::Name,
    permission::{BurnCapability, MutateCapability, TransferCapability},
    species::Species,
    AssetId, Identifiable, MetadataUri, ParseError,
};

/// Hash supplied at issuance, identifying one seed for its whole lifetime.
/// The value survives planting: the tree minted from a seed carries it as its
/// id.
#[derive(
    DebugCustom,
    Display,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeserializeFromStr,
    SerializeDisplay,
)]
#[debug(fmt = "{_0}")]
#[display(fmt = "{_0}")]
pub struct SeedHash(String);

impl FromStr for SeedHash {
    type Err = ParseError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        if candidate.is_empty() {
            return Err(ParseError {
                reason: "Empty `SeedHash`",
            });
        }
        Ok(Self(candidate.to_owned()))
    }
}

/// Custody status of a [`Seed`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedStatus {
    /// In the owner's custody and plantable.
    #[display(fmt = "held")]
    Held,
    /// Reclaimed by the custodian after planting; permanently inert.
    #[display(fmt = "retired")]
    Retired,
}

/// An issued, unplanted collectible. Owned by its recipient until planted,
/// then retired in place under custodian ownership.
#[derive(Debug, Display, Getters, CopyGetters, Serialize, Deserialize)]
#[display(fmt = "seed {name} ({species}) of {owner}")]
pub struct Seed {
    /// Display name; the content address of this seed within the nursery.
    #[getset(get = "pub")]
    name: Name,
    /// Species tag.
    #[getset(get = "pub")]
    species: Species,
    /// Descriptive text looked up at issuance.
    #[getset(get = "pub")]
    description: String,
    /// URI of the off-chain token metadata.
    #[getset(get = "pub")]
    metadata_uri: MetadataUri,
    /// Hash supplied by the issuer, identifying this seed.
    #[getset(get = "pub")]
    seed_id: SeedHash,
    /// Current owner.
    #[getset(get = "pub")]
    owner: AccountId,
    /// Custody status.
    #[getset(get_copy = "pub")]
    status: SeedStatus,
    /// Capability to mutate this seed.
    #[getset(get = "pub")]
    mutate: MutateCapability,
    /// Capability to destroy this seed.
    #[getset(get = "pub")]
    burn: BurnCapability,
    /// Capability to move this seed regardless of its transferability.
    #[getset(get = "pub")]
    transfer: TransferCapability,
}

impl Seed {
    /// Construct a freshly minted [`Seed`] in `owner`'s custody, with fresh
    /// capabilities over its address.
    pub fn new(
        asset_id: AssetId,
        species: Species,
        description: String,
        metadata_uri: MetadataUri,
        seed_id: SeedHash,
        owner: AccountId,
    ) -> Self {
        let name = asset_id.name.clone();
        Self {
            name,
            species,
            description,
            metadata_uri,
            seed_id,
            owner,
            status: SeedStatus::Held,
            mutate: MutateCapability::new(asset_id.clone()),
            burn: BurnCapability::new(asset_id.clone()),
            transfer: TransferCapability::new(asset_id),
        }
    }

    /// Reclaim this seed into `custodian` custody and mark it [`SeedStatus::Retired`].
    /// A retired seed no longer answers to planting.
    pub fn retire(&mut self, custodian: AccountId) {
        self.owner = custodian;
        self.status = SeedStatus::Retired;
    }
}

impl Identifiable for Seed {
    type Id = Name;

    fn id(&self) -> &Name {
        &self.name
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{Seed, SeedHash, SeedStatus};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CollectionId;

    fn sample_seed() -> Seed {
        let collection: CollectionId = "seed nursery".parse().expect("Valid");
        let name: Name = "acacia #1".parse().expect("Valid");
        Seed::new(
            AssetId::new(collection, name),
            Species::Acacia,
            "a thorn-armed pioneer".to_owned(),
            MetadataUri::seed("https://tokens.grove.dev", &"hash123".parse().expect("Valid")),
            "hash123".parse().expect("Valid"),
            "alice".parse().expect("Valid"),
        )
    }

    #[test]
    fn fresh_seed_is_held_by_recipient() {
        let seed = sample_seed();
        assert_eq!(seed.status(), SeedStatus::Held);
        assert_eq!(seed.owner(), &"alice".parse().expect("Valid"));
        assert_eq!(seed.metadata_uri().as_ref(), "https://tokens.grove.dev/seed/hash123");
    }

    #[test]
    fn retired_seed_changes_custody() {
        let mut seed = sample_seed();
        let custodian: AccountId = "gardener.registry".parse().expect("Valid");
        seed.retire(custodian.clone());
        assert_eq!(seed.status(), SeedStatus::Retired);
        assert_eq!(seed.owner(), &custodian);
    }
}
