//! This module contains the bootstrap instruction installing the
//! [`Registry`] singleton.

use grove_data_model::{
    account::AccountId,
    isi::{
        error::{InstructionExecutionError as Error, InstructionType, RepetitionError},
        Bootstrap,
    },
    permission::{CollectionHandle, CustodianAuthority},
    registry::{Registry, REGISTRY_SEED, SEED_COLLECTION, TREE_COLLECTION},
    IdBox,
};
use grove_logger::prelude::*;

use super::{assert_world_owner, Execute};
use crate::wsv::WorldStateView;

impl Execute for Bootstrap {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        assert_world_owner(authority, state_view)?;

        let custodian = AccountId::derived(authority, REGISTRY_SEED);
        if state_view.world.registry.is_some() {
            return Err(RepetitionError {
                instruction: InstructionType::Bootstrap,
                id: IdBox::AccountId(custodian),
            }
            .into());
        }

        let registry = Registry::new(
            CustodianAuthority::new(custodian.clone()),
            CollectionHandle::new(SEED_COLLECTION.parse().expect("Collection name is valid")),
            CollectionHandle::new(TREE_COLLECTION.parse().expect("Collection name is valid")),
            state_view.config.treasury_account.clone(),
        );

        state_view.account_or_insert(&custodian);
        state_view.world.registry = Some(registry);
        debug!(%custodian, "Registry installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use grove_data_model::prelude::*;

    use super::*;
    use crate::wsv::World;

    fn owner() -> AccountId {
        "gardener".parse().expect("Valid")
    }

    #[test]
    fn bootstrap_installs_registry_with_zeroed_counters() -> Result<()> {
        let mut wsv = WorldStateView::new(World::with_owner(owner()));
        wsv.apply(&owner(), Bootstrap.into())?;

        let registry = wsv.registry()?;
        assert_eq!(registry.issued_count(), 0);
        assert_eq!(registry.planted_count(), 0);
        assert_eq!(
            registry.custodian_account(),
            &AccountId::derived(&owner(), REGISTRY_SEED)
        );
        assert_eq!(registry.treasury(), &wsv.config.treasury_account);
        Ok(())
    }

    #[test]
    fn second_bootstrap_is_rejected() -> Result<()> {
        let mut wsv = WorldStateView::new(World::with_owner(owner()));
        wsv.apply(&owner(), Bootstrap.into())?;

        let result = wsv.apply(&owner(), Bootstrap.into());
        assert!(matches!(result, Err(Error::Repetition(_))));
        Ok(())
    }

    #[test]
    fn bootstrap_answers_to_the_owner_alone() {
        let mut wsv = WorldStateView::new(World::with_owner(owner()));
        let result = wsv.apply(&"mallory".parse().expect("Valid"), Bootstrap.into());

        assert!(matches!(result, Err(Error::NotPermitted(_))));
        assert!(wsv.registry().is_err());
    }
}
