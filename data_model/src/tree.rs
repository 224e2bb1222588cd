//! This module contains the [`Tree`] structure: a matured collectible in the
//! plantation collection. Terminal state of the seed lifecycle.

use derive_more::Display;
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::{
    account::AccountId,
    name::Name,
    permission::{BurnCapability, MutateCapability, TransferCapability},
    seed::SeedHash,
    species::Species,
    AssetId, MetadataUri,
};

/// A matured collectible minted when its originating seed is planted. Reuses
/// the seed's display name and carries the seed's hash as its id.
#[derive(Debug, Display, Getters, Serialize, Deserialize)]
#[display(fmt = "tree {name} ({species}) of {owner}")]
#[getset(get = "pub")]
pub struct Tree {
    /// Display name, identical to the originating seed's.
    name: Name,
    /// Species tag, copied from the originating seed.
    species: Species,
    /// Hash of the originating seed.
    id: SeedHash,
    /// Descriptive text looked up at planting.
    description: String,
    /// URI of the off-chain token metadata.
    metadata_uri: MetadataUri,
    /// The planter.
    owner: AccountId,
    /// Capability to mutate this tree.
    mutate: MutateCapability,
    /// Capability to destroy this tree.
    burn: BurnCapability,
    /// Capability to move this tree regardless of its transferability.
    transfer: TransferCapability,
}

impl Tree {
    /// Construct a freshly minted [`Tree`] in `owner`'s custody, with fresh
    /// capabilities over its address.
    pub fn new(
        asset_id: AssetId,
        species: Species,
        id: SeedHash,
        description: String,
        metadata_uri: MetadataUri,
        owner: AccountId,
    ) -> Self {
        let name = asset_id.name.clone();
        Self {
            name,
            species,
            id,
            description,
            metadata_uri,
            owner,
            mutate: MutateCapability::new(asset_id.clone()),
            burn: BurnCapability::new(asset_id.clone()),
            transfer: TransferCapability::new(asset_id),
        }
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::Tree;
}
