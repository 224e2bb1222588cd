//! This module contains the singleton [`Registry`] structure and related
//! implementations.

use core::str::FromStr;

use derive_more::{DebugCustom, Display};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    account::AccountId,
    consumable::Consumable,
    isi::error::MathError,
    name::Name,
    permission::{CollectionHandle, CustodianAuthority},
    ParseError,
};

/// Fixed seed string from which the custodian address is derived; the
/// registry record lives under that address, so the registry location is
/// computable from the owner identity alone.
pub const REGISTRY_SEED: &str = "registry";

/// Name of the collection holding unplanted seeds.
pub const SEED_COLLECTION: &str = "seed nursery";

/// Name of the collection holding planted trees.
pub const TREE_COLLECTION: &str = "plantation";

/// Identification of a named asset collection.
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
pub struct CollectionId(Name);

impl FromStr for CollectionId {
    type Err = ParseError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        Ok(Self(candidate.parse()?))
    }
}

/// The singleton record of the grove: issuance counters, the consumable
/// catalog, the treasury address and the capability tokens of the custodian
/// identity. Exactly one registry exists for the whole lifetime of the
/// system; every other mutating operation requires it to be installed.
#[derive(Debug, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Registry {
    /// Credential to sign as the custodian identity.
    #[getset(get = "pub")]
    custodian: CustodianAuthority,
    /// Mutation capability over the seed collection.
    #[getset(get = "pub")]
    seed_collection: CollectionHandle,
    /// Mutation capability over the tree collection.
    #[getset(get = "pub")]
    tree_collection: CollectionHandle,
    /// How many seeds have been issued.
    #[getset(get_copy = "pub")]
    issued_count: u64,
    /// How many seeds have been planted.
    #[getset(get_copy = "pub")]
    planted_count: u64,
    /// Purchasable consumables in insertion order.
    #[getset(get = "pub")]
    catalog: Vec<Consumable>,
    /// Account receiving consumable payments.
    #[getset(get = "pub")]
    treasury: AccountId,
}

impl Registry {
    /// Construct [`Registry`] with zeroed counters and an empty catalog.
    pub fn new(
        custodian: CustodianAuthority,
        seed_collection: CollectionHandle,
        tree_collection: CollectionHandle,
        treasury: AccountId,
    ) -> Self {
        Self {
            custodian,
            seed_collection,
            tree_collection,
            issued_count: 0,
            planted_count: 0,
            catalog: Vec::new(),
            treasury,
        }
    }

    /// The custodian account, borrowed through the stored credential.
    pub fn custodian_account(&self) -> &AccountId {
        self.custodian.account()
    }

    /// Record one more issued seed.
    ///
    /// # Errors
    /// [`MathError::Overflow`] if the counter would wrap.
    pub fn record_issued(&mut self) -> Result<(), MathError> {
        self.issued_count = self
            .issued_count
            .checked_add(1)
            .ok_or(MathError::Overflow)?;
        Ok(())
    }

    /// Record one more planted seed.
    ///
    /// # Errors
    /// [`MathError::Overflow`] if the counter would wrap.
    pub fn record_planted(&mut self) -> Result<(), MathError> {
        self.planted_count = self
            .planted_count
            .checked_add(1)
            .ok_or(MathError::Overflow)?;
        Ok(())
    }

    /// Append `consumable` to the catalog. Duplicate ids are accepted;
    /// lookups resolve to the first inserted match.
    pub fn add_consumable(&mut self, consumable: Consumable) {
        self.catalog.push(consumable);
    }

    /// First catalog entry with the given `id`, if any.
    pub fn find_consumable(&self, id: &Name) -> Option<&Consumable> {
        self.catalog
            .iter()
            .find(|consumable| consumable.id() == id)
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{
        CollectionId, Registry, REGISTRY_SEED, SEED_COLLECTION, TREE_COLLECTION,
    };
}
