//! Grove core: the world state and instruction execution.
//!
//! The [`wsv::WorldStateView`] is the in-memory stand-in for the host
//! ledger's storage: accounts with native-asset balances, the two asset
//! collections as content-addressed indexes, the registry singleton and the
//! event buffer. The instructions under [`smartcontracts`] are the only way
//! of mutating it, each one executing atomically on behalf of an authority.

use std::collections::BTreeMap;

use grove_data_model::{
    account::{Account, AccountId},
    name::Name,
    seed::Seed,
    tree::Tree,
};

pub mod config;
pub mod smartcontracts;
pub mod wsv;

/// API to work with collections of [`AccountId`] : [`Account`] mappings.
pub type AccountsMap = BTreeMap<AccountId, Account>;

/// The seed collection: display name to [`Seed`] record. The map key is the
/// deterministic address of the asset within its collection.
pub type SeedsMap = BTreeMap<Name, Seed>;

/// The tree collection: display name to [`Tree`] record.
pub type TreesMap = BTreeMap<Name, Tree>;

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use crate::{
        config::Configuration,
        smartcontracts::Execute,
        wsv::{World, WorldStateView},
    };
}
