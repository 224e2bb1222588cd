//! This module provides the [`WorldStateView`], an in-memory representation
//! of the current grove state.

use grove_data_model::{
    account::{Account, AccountId},
    events::DataEvent,
    isi::{
        error::{FindError, InstructionExecutionError as Error, MathError},
        Instruction,
    },
    name::Name,
    registry::Registry,
    seed::Seed,
    tree::Tree,
};
use grove_logger::prelude::*;

use crate::{config::Configuration, smartcontracts::Execute, AccountsMap, SeedsMap, TreesMap};

/// The global entity holding the registry singleton, the accounts and both
/// asset collections.
#[derive(Debug)]
pub struct World {
    /// The recognized system owner identity; privileged instructions answer
    /// to it alone.
    pub(crate) owner: AccountId,
    /// The registry singleton; absent until bootstrap.
    pub(crate) registry: Option<Registry>,
    /// Accounts of the host ledger known to this world.
    pub(crate) accounts: AccountsMap,
    /// The seed collection.
    pub(crate) seeds: SeedsMap,
    /// The tree collection.
    pub(crate) trees: TreesMap,
}

impl World {
    /// Creates a [`World`] whose privileged instructions answer to `owner`.
    pub fn with_owner(owner: AccountId) -> Self {
        Self {
            owner,
            registry: None,
            accounts: AccountsMap::new(),
            seeds: SeedsMap::new(),
            trees: TreesMap::new(),
        }
    }
}

/// Current state of the grove aligned with the host ledger.
pub struct WorldStateView {
    /// The world. Contains the registry, accounts and both asset collections.
    pub world: World,
    /// Configuration of World State View.
    pub config: Configuration,
    /// Buffer containing events generated during instruction execution.
    /// Drained into the embedding node's event sink.
    pub events_buffer: Vec<DataEvent>,
}

impl WorldStateView {
    /// Construct [`WorldStateView`] with given [`World`] and the default
    /// [`Configuration`].
    #[must_use]
    #[inline]
    pub fn new(world: World) -> Self {
        Self::from_configuration(Configuration::default(), world)
    }

    /// Construct [`WorldStateView`] with specific [`Configuration`].
    #[inline]
    pub fn from_configuration(config: Configuration, world: World) -> Self {
        Self {
            world,
            config,
            events_buffer: Vec::new(),
        }
    }

    /// Execute `instruction` on behalf of `authority` as one atomic
    /// transaction.
    ///
    /// # Errors
    /// If the instruction rejects. A rejected instruction leaves the world
    /// untouched and emits nothing.
    pub fn apply(&mut self, authority: &AccountId, instruction: Instruction) -> Result<(), Error> {
        let checkpoint = self.events_buffer.len();
        trace!(%authority, %instruction, "Applying instruction");
        instruction.execute(authority, self).map_err(|error| {
            self.events_buffer.truncate(checkpoint);
            error
        })
    }

    /// The recognized system owner identity.
    #[inline]
    pub fn owner(&self) -> &AccountId {
        &self.world.owner
    }

    /// Get the [`Registry`] without an ability to modify it.
    ///
    /// # Errors
    /// Fails if the registry is not installed yet.
    pub fn registry(&self) -> Result<&Registry, FindError> {
        self.world.registry.as_ref().ok_or(FindError::Registry)
    }

    /// Get the [`Registry`] with an ability to modify it.
    ///
    /// # Errors
    /// Fails if the registry is not installed yet.
    pub fn registry_mut(&mut self) -> Result<&mut Registry, FindError> {
        self.world.registry.as_mut().ok_or(FindError::Registry)
    }

    /// Get a [`Seed`] by its display name.
    ///
    /// # Errors
    /// Fails if there is no seed under this name.
    pub fn seed(&self, name: &Name) -> Result<&Seed, FindError> {
        self.world
            .seeds
            .get(name)
            .ok_or_else(|| FindError::Seed(name.clone()))
    }

    /// Get a [`Seed`] by its display name, with an ability to modify it.
    ///
    /// # Errors
    /// Fails if there is no seed under this name.
    pub fn seed_mut(&mut self, name: &Name) -> Result<&mut Seed, FindError> {
        self.world
            .seeds
            .get_mut(name)
            .ok_or_else(|| FindError::Seed(name.clone()))
    }

    /// Get a [`Tree`] by its display name.
    ///
    /// # Errors
    /// Fails if there is no tree under this name.
    pub fn tree(&self, name: &Name) -> Result<&Tree, FindError> {
        self.world
            .trees
            .get(name)
            .ok_or_else(|| FindError::Tree(name.clone()))
    }

    /// Get an [`Account`] by its id.
    ///
    /// # Errors
    /// Fails if there is no such account.
    pub fn account(&self, id: &AccountId) -> Result<&Account, FindError> {
        self.world
            .accounts
            .get(id)
            .ok_or_else(|| FindError::Account(id.clone()))
    }

    /// Get an [`Account`] by its id, inserting an empty one if absent.
    pub fn account_or_insert(&mut self, id: &AccountId) -> &mut Account {
        self.world
            .accounts
            .entry(id.clone())
            .or_insert_with(|| Account::new(id.clone()))
    }

    /// Credit `amount` of the native payment asset to `id`, inserting the
    /// account if absent.
    ///
    /// # Errors
    /// [`MathError::Overflow`] if the balance would exceed [`u64::MAX`].
    pub fn deposit(&mut self, id: &AccountId, amount: u64) -> Result<(), Error> {
        self.account_or_insert(id).deposit(amount)?;
        Ok(())
    }

    /// Move `amount` of the native payment asset from `source` to
    /// `destination`. Both balances are checked before either is touched.
    ///
    /// # Errors
    /// - [`MathError::NotEnoughQuantity`] if `source` cannot cover `amount`
    /// - [`MathError::Overflow`] if `destination` cannot receive `amount`
    pub fn transfer_funds(
        &mut self,
        source: &AccountId,
        destination: &AccountId,
        amount: u64,
    ) -> Result<(), Error> {
        let source_balance = self.world.accounts.get(source).map_or(0, Account::balance);
        if source_balance < amount {
            return Err(MathError::NotEnoughQuantity.into());
        }
        let destination_balance = self
            .world
            .accounts
            .get(destination)
            .map_or(0, Account::balance);
        if destination_balance.checked_add(amount).is_none() {
            return Err(MathError::Overflow.into());
        }

        self.account_or_insert(source).withdraw(amount)?;
        self.account_or_insert(destination).deposit(amount)?;
        trace!(%source, %destination, amount, "Transferred funds");
        Ok(())
    }

    /// The function puts events produced by iterator into `events_buffer`.
    pub fn emit_events<I: IntoIterator<Item = T>, T: Into<DataEvent>>(&mut self, events: I) {
        self.events_buffer
            .extend(events.into_iter().map(Into::into));
    }

    /// Events accumulated since the last drain.
    #[inline]
    pub fn events(&self) -> &[DataEvent] {
        &self.events_buffer
    }

    /// Hand the accumulated events over to the event sink.
    pub fn drain_events(&mut self) -> Vec<DataEvent> {
        core::mem::take(&mut self.events_buffer)
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;

    use super::*;

    fn account_id(name: &str) -> AccountId {
        name.parse().expect("Valid")
    }

    fn wsv() -> WorldStateView {
        WorldStateView::new(World::with_owner(account_id("gardener")))
    }

    #[test]
    fn transfer_moves_funds_between_accounts() -> Result<()> {
        let mut wsv = wsv();
        wsv.deposit(&account_id("alice"), 100)?;
        wsv.transfer_funds(&account_id("alice"), &account_id("treasury"), 30)?;

        assert_eq!(wsv.account(&account_id("alice"))?.balance(), 70);
        assert_eq!(wsv.account(&account_id("treasury"))?.balance(), 30);
        Ok(())
    }

    #[test]
    fn transfer_from_unknown_account_is_rejected() {
        let mut wsv = wsv();
        let result = wsv.transfer_funds(&account_id("nobody"), &account_id("treasury"), 1);
        assert!(matches!(
            result,
            Err(Error::Math(MathError::NotEnoughQuantity))
        ));
        assert!(wsv.account(&account_id("treasury")).is_err());
    }

    #[test]
    fn transfer_checks_destination_headroom() -> Result<()> {
        let mut wsv = wsv();
        wsv.deposit(&account_id("alice"), 10)?;
        wsv.deposit(&account_id("bob"), u64::MAX)?;

        let result = wsv.transfer_funds(&account_id("alice"), &account_id("bob"), 1);
        assert!(matches!(result, Err(Error::Math(MathError::Overflow))));
        assert_eq!(wsv.account(&account_id("alice"))?.balance(), 10);
        Ok(())
    }

    #[test]
    fn drained_events_leave_an_empty_buffer() {
        let mut wsv = wsv();
        wsv.emit_events(Some(
            grove_data_model::events::ConsumableAdded {
                id: "fertilizer".parse().expect("Valid"),
                price: 5,
            },
        ));
        assert_eq!(wsv.events().len(), 1);
        assert_eq!(wsv.drain_events().len(), 1);
        assert!(wsv.events().is_empty());
    }
}
