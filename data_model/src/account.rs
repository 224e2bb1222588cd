//! This module contains [`Account`] and [`AccountId`] structures and their
//! implementations. An account is the unit of ownership on the host ledger;
//! the only state this core keeps for it is its native-asset balance.

use core::str::FromStr;

use derive_more::{DebugCustom, Display};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{isi::error::MathError, name::Name, Identifiable, ParseError};

/// Identification of an [`Account`] on the host ledger.
///
/// # Examples
///
/// ```rust
/// use grove_data_model::account::AccountId;
///
/// let account_id = "gardener".parse::<AccountId>().expect("Valid");
/// ```
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
#[display(fmt = "{name}")]
#[debug(fmt = "{name}")]
pub struct AccountId {
    /// Account name.
    pub name: Name,
}

impl AccountId {
    /// Deterministically derive a secondary address from `base` and a fixed
    /// `seed` string, standing in for the host ledger's address-derivation
    /// primitive. The same inputs always produce the same address.
    ///
    /// # Panics
    /// If `seed` is not a valid [`Name`] suffix.
    #[must_use]
    pub fn derived(base: &AccountId, seed: &str) -> Self {
        Self {
            name: Name::try_from(format!("{base}.{seed}"))
                .expect("derived from an already validated name"),
        }
    }
}

impl FromStr for AccountId {
    type Err = ParseError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            name: candidate.parse()?,
        })
    }
}

/// Account of the host ledger, holding a balance of the native payment asset.
#[derive(Debug, Clone, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Account {
    /// Identification of this account.
    #[getset(get = "pub")]
    id: AccountId,
    /// Balance of the native payment asset.
    #[getset(get_copy = "pub")]
    balance: u64,
}

impl Account {
    /// Construct [`Account`] with an empty balance.
    pub fn new(id: AccountId) -> Self {
        Self { id, balance: 0 }
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    /// [`MathError::Overflow`] if the balance would exceed [`u64::MAX`].
    pub fn deposit(&mut self, amount: u64) -> Result<(), MathError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// # Errors
    /// [`MathError::NotEnoughQuantity`] if the balance is insufficient.
    pub fn withdraw(&mut self, amount: u64) -> Result<(), MathError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(MathError::NotEnoughQuantity)?;
        Ok(())
    }
}

impl Identifiable for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{Account, AccountId};
}
