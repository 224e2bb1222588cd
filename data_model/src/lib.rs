//! Data model of the grove ledger.
//!
//! A grove tracks a two-stage collectible: a [`seed::Seed`] is issued into a
//! collector's custody and later matures into a [`tree::Tree`] when its owner
//! plants it. The [`registry::Registry`] singleton carries the issuance
//! counters, the consumable catalog and the capability tokens the system
//! needs to act as its custodian identity. This crate defines the records,
//! identifiers, instructions and events; execution lives in `grove_core`.

use core::{fmt::Debug, ops::RangeInclusive};

use derive_more::{Constructor, Display, From};
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::{account::AccountId, name::Name, registry::CollectionId, seed::SeedHash};

pub mod account;
pub mod consumable;
pub mod description;
pub mod events;
pub mod isi;
pub mod name;
pub mod permission;
pub mod registry;
pub mod seed;
pub mod species;
pub mod tree;

/// Error which occurs while parsing a string into a data model entity.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{reason}")]
pub struct ParseError {
    pub(crate) reason: &'static str,
}

impl std::error::Error for ParseError {}

/// Error which occurs when validating a data model entity against the configured limits.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[display(fmt = "{reason}")]
pub struct ValidationError {
    reason: String,
}

impl ValidationError {
    /// Construct [`ValidationError`].
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Limits of length of the identifiers (e.g. in [`name::Name`]) in number of chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LengthLimits {
    /// Minimal length in number of chars (inclusive).
    min: u32,
    /// Maximal length in number of chars (inclusive).
    max: u32,
}

impl LengthLimits {
    /// Constructor.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl From<LengthLimits> for RangeInclusive<usize> {
    #[inline]
    fn from(limits: LengthLimits) -> Self {
        RangeInclusive::new(limits.min as usize, limits.max as usize)
    }
}

/// This trait marks entity that implement it as identifiable with an `Id` type to find them by.
pub trait Identifiable: Debug {
    /// Defines the type of entity's identification.
    type Id: Debug + Clone + Eq + Ord;

    /// Get reference to the id of the entity.
    fn id(&self) -> &Self::Id;
}

/// Deterministic address of a named asset: the pair of its collection and its
/// display name. Within one collection a display name resolves to at most one
/// asset, so the pair is a stable content address.
#[derive(
    Debug,
    Display,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Constructor,
    Getters,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{collection}/{name}")]
#[getset(get = "pub")]
pub struct AssetId {
    /// Collection the asset was minted into.
    pub collection: CollectionId,
    /// Display name of the asset.
    pub name: Name,
}

/// Sized container for all possible identifiers.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
pub enum IdBox {
    /// [`AccountId`] variant.
    #[display(fmt = "{_0}")]
    AccountId(AccountId),
    /// [`AssetId`] variant.
    #[display(fmt = "{_0}")]
    AssetId(AssetId),
}

/// URI under which a token's off-chain metadata is published.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataUri(String);

impl MetadataUri {
    /// URI of an unplanted seed's metadata: `{base}/seed/{hash}`.
    pub fn seed(base: &str, hash: &SeedHash) -> Self {
        Self(format!("{base}/seed/{hash}"))
    }

    /// URI of a planted tree's metadata: `{base}/plant/{hash}`.
    pub fn plant(base: &str, hash: &SeedHash) -> Self {
        Self(format!("{base}/plant/{hash}"))
    }
}

impl AsRef<str> for MetadataUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{
        account::prelude::*, consumable::prelude::*, description::describe, events::prelude::*,
        isi::prelude::*, name::prelude::*, permission::prelude::*, registry::prelude::*,
        seed::prelude::*, species::prelude::*, tree::prelude::*, AssetId, IdBox, Identifiable,
        LengthLimits, MetadataUri, ParseError, ValidationError,
    };
}
