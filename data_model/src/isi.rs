//! This library contains the grove special instructions: the only way of
//! mutating the world state.

use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};

use crate::{account::AccountId, name::Name, seed::SeedHash, species::Species};

/// Sized structure for all possible instructions.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
pub enum Instruction {
    /// `Bootstrap` variant.
    #[display(fmt = "{_0}")]
    Bootstrap(Bootstrap),
    /// `IssueSeed` variant.
    #[display(fmt = "{_0}")]
    IssueSeed(IssueSeed),
    /// `PlantSeed` variant.
    #[display(fmt = "{_0}")]
    PlantSeed(PlantSeed),
    /// `AddConsumable` variant.
    #[display(fmt = "{_0}")]
    AddConsumable(AddConsumable),
    /// `PurchaseConsumable` variant.
    #[display(fmt = "{_0}")]
    PurchaseConsumable(PurchaseConsumable),
    /// `GiftConsumable` variant.
    #[display(fmt = "{_0}")]
    GiftConsumable(GiftConsumable),
}

/// Install the registry: create the custodian identity with its delegated
/// authority and the two empty collections. Answered exactly once per world;
/// a second attempt is a repetition error.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Constructor, Serialize, Deserialize,
)]
#[display(fmt = "bootstrap the registry")]
pub struct Bootstrap;

/// Mint a new seed into `recipient`'s custody.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
#[display(fmt = "issue seed {display_name} #{index} for {recipient}")]
pub struct IssueSeed {
    /// Account the seed is issued for.
    pub recipient: AccountId,
    /// Hash identifying the seed, supplied by the issuer.
    pub seed_hash: SeedHash,
    /// Species tag.
    pub species: Species,
    /// Base of the display name.
    pub display_name: Name,
    /// Issue index appended to the display name.
    pub index: u32,
}

/// Mature the seed with the given display name into a tree. Only the seed's
/// current owner may plant it, and only once.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
#[display(fmt = "plant seed {name}")]
pub struct PlantSeed {
    /// Display name of the seed to plant.
    pub name: Name,
}

/// Append a consumable to the catalog.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
#[display(fmt = "add consumable {id} priced {price}")]
pub struct AddConsumable {
    /// Identifier of the new catalog entry.
    pub id: Name,
    /// Price in units of the native payment asset.
    pub price: u64,
}

/// Buy the first catalog entry with the given id, paying its price to the
/// treasury.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
#[display(fmt = "purchase consumable {id}")]
pub struct PurchaseConsumable {
    /// Identifier of the catalog entry to buy.
    pub id: Name,
}

/// Grant the first catalog entry with the given id to `receiver` without
/// payment.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
#[display(fmt = "gift consumable {id} to {receiver}")]
pub struct GiftConsumable {
    /// Account the consumable is granted to.
    pub receiver: AccountId,
    /// Identifier of the catalog entry to grant.
    pub id: Name,
}

pub mod error {
    //! Instruction execution errors.

    use derive_more::Display;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use crate::{account::AccountId, name::Name, IdBox, ValidationError};

    /// Instruction execution error type.
    #[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum InstructionExecutionError {
        /// Failed to find an entity the instruction depends on.
        #[error("failed to find entity")]
        Find(#[from] FindError),
        /// Instruction repeated for an entity that already exists.
        #[error(transparent)]
        Repetition(#[from] RepetitionError),
        /// Caller lacks the authority the instruction requires.
        #[error("operation not permitted: {0}")]
        NotPermitted(String),
        /// Arithmetic failure while mutating counters or balances.
        #[error("math error occurred")]
        Math(#[from] MathError),
        /// Entity failed validation against the configured limits.
        #[error("validation failed")]
        Validation(#[from] ValidationError),
    }

    /// Entity lookup failure.
    #[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum FindError {
        /// The registry has not been installed yet.
        #[error("registry is not installed")]
        Registry,
        /// No plantable seed under this name: it was never issued or it was
        /// already planted and retired.
        #[error("failed to find seed {0}")]
        Seed(Name),
        /// Failed to find tree.
        #[error("failed to find tree {0}")]
        Tree(Name),
        /// Failed to find account.
        #[error("failed to find account {0}")]
        Account(AccountId),
    }

    /// Repetition of an instruction for an entity that already exists.
    #[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[error("repetition of {instruction} for {id}")]
    pub struct RepetitionError {
        /// Instruction type.
        pub instruction: InstructionType,
        /// Id of the entity that already exists.
        pub id: IdBox,
    }

    /// Arithmetic failure.
    #[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum MathError {
        /// Overflow occurred inside instruction execution.
        #[error("overflow occurred inside instruction")]
        Overflow,
        /// Not enough of the native payment asset to complete the operation.
        #[error("not enough quantity to transfer")]
        NotEnoughQuantity,
    }

    /// Enumeration of all possible instruction types, used in error reporting.
    #[derive(
        Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
    )]
    #[allow(missing_docs)]
    pub enum InstructionType {
        #[display(fmt = "bootstrap")]
        Bootstrap,
        #[display(fmt = "issue seed")]
        IssueSeed,
        #[display(fmt = "plant seed")]
        PlantSeed,
        #[display(fmt = "add consumable")]
        AddConsumable,
        #[display(fmt = "purchase consumable")]
        PurchaseConsumable,
        #[display(fmt = "gift consumable")]
        GiftConsumable,
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::{
        error::{
            FindError, InstructionExecutionError, InstructionType, MathError, RepetitionError,
        },
        AddConsumable, Bootstrap, GiftConsumable, Instruction, IssueSeed, PlantSeed,
        PurchaseConsumable,
    };
}
