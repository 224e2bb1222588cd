//! This module contains data events emitted by instruction execution.
//! Events are append-only records; the world buffers them during execution
//! and the embedding node drains them into its event sink.

use derive_more::From;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::{account::AccountId, name::Name, seed::SeedHash, AssetId};

/// A new seed was minted and handed to its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct SeedRegistered {
    /// Display name of the minted seed.
    pub name: Name,
    /// Recipient the seed was issued for.
    pub recipient: AccountId,
    /// Deterministic address of the minted token.
    pub token: AssetId,
    /// Hash identifying the seed.
    pub seed_id: SeedHash,
}

/// A seed was planted and its tree minted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct TreePlanted {
    /// Hash carried over from the originating seed.
    pub id: SeedHash,
    /// Display name shared by the seed and the tree.
    pub name: Name,
    /// The planter.
    pub planter: AccountId,
    /// Deterministic address of the minted tree token.
    pub token: AssetId,
}

/// A consumable was appended to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct ConsumableAdded {
    /// Identifier of the new catalog entry.
    #[getset(get = "pub")]
    pub id: Name,
    /// Price of the new catalog entry.
    #[getset(get_copy = "pub")]
    pub price: u64,
}

/// A consumable was purchased by, or gifted to, an account.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct ConsumablePurchased {
    /// Identifier of the catalog entry.
    pub id: Name,
    /// Account the consumable now benefits.
    pub account: AccountId,
}

/// Growth of an asset was frozen by a consumable effect.
///
/// Reserved: no instruction emits this yet. Kept as the extension point for
/// a growth-freeze consumable.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct GrowthFrozen {
    /// Identifier of the consumable that caused the freeze.
    pub id: Name,
    /// Account whose asset is frozen.
    pub account: AccountId,
}

/// Data event.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataEvent {
    /// Seed issuance event.
    SeedRegistered(SeedRegistered),
    /// Maturation event.
    TreePlanted(TreePlanted),
    /// Catalog extension event.
    ConsumableAdded(ConsumableAdded),
    /// Purchase or gift event.
    ConsumablePurchased(ConsumablePurchased),
    /// Growth freeze event.
    GrowthFrozen(GrowthFrozen),
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{
        ConsumableAdded, ConsumablePurchased, DataEvent, GrowthFrozen, SeedRegistered, TreePlanted,
    };
}
