//! This module contains the [`Consumable`] catalog entry.

use derive_more::{Constructor, Display};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::{name::Name, Identifiable};

/// Purchasable catalog entry. Appended by the system owner, bought by anyone
/// for its price in the native payment asset.
///
/// The catalog does not enforce uniqueness of ids; lookups resolve to the
/// first inserted match.
#[derive(
    Debug,
    Display,
    Clone,
    PartialEq,
    Eq,
    Constructor,
    Getters,
    CopyGetters,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{id} ({price})")]
pub struct Consumable {
    /// Identifier of this consumable.
    #[getset(get = "pub")]
    id: Name,
    /// Price in units of the native payment asset.
    #[getset(get_copy = "pub")]
    price: u64,
}

impl Identifiable for Consumable {
    type Id = Name;

    fn id(&self) -> &Name {
        &self.id
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::Consumable;
}
