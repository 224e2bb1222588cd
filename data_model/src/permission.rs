//! Capability tokens guarding privileged actions.
//!
//! None of the types here implement [`Clone`]: a capability is minted once,
//! lives inside exactly one record and is borrowed from there when the
//! action it guards is performed. Holding a value of one of these types *is*
//! the authorization.

use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::{account::AccountId, registry::CollectionId, AssetId};

/// Credential that lets the system sign as the custodian identity without
/// holding its private key. Minted once at bootstrap and stored only inside
/// the registry; operations that act as the custodian borrow it from there.
#[derive(Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct CustodianAuthority {
    /// The custodian account this credential signs for.
    account: AccountId,
}

impl CustodianAuthority {
    /// Construct [`CustodianAuthority`] for `account`.
    pub fn new(account: AccountId) -> Self {
        Self { account }
    }
}

/// Capability to mutate a named collection, i.e. to mint new assets into it.
#[derive(Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct CollectionHandle {
    /// The collection this handle mutates.
    collection: CollectionId,
}

impl CollectionHandle {
    /// Construct [`CollectionHandle`] over `collection`.
    pub fn new(collection: CollectionId) -> Self {
        Self { collection }
    }
}

/// Capability to mutate one specific asset.
#[derive(Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct MutateCapability {
    /// The asset this capability mutates.
    asset: AssetId,
}

impl MutateCapability {
    /// Construct [`MutateCapability`] over `asset`.
    pub fn new(asset: AssetId) -> Self {
        Self { asset }
    }
}

/// Capability to destroy one specific asset.
#[derive(Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct BurnCapability {
    /// The asset this capability destroys.
    asset: AssetId,
}

impl BurnCapability {
    /// Construct [`BurnCapability`] over `asset`.
    pub fn new(asset: AssetId) -> Self {
        Self { asset }
    }
}

/// Capability to move one specific asset between owners regardless of the
/// asset's own transferability.
#[derive(Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct TransferCapability {
    /// The asset this capability moves.
    asset: AssetId,
}

impl TransferCapability {
    /// Construct [`TransferCapability`] over `asset`.
    pub fn new(asset: AssetId) -> Self {
        Self { asset }
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{
        BurnCapability, CollectionHandle, CustodianAuthority, MutateCapability, TransferCapability,
    };
}
