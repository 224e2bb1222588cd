//! This module contains the grove instruction set: enumeration dispatch and
//! the per-entity `Execute` implementations.

pub mod consumable;
pub mod registry;
pub mod seed;

use grove_data_model::{
    account::AccountId,
    isi::{error::InstructionExecutionError as Error, Instruction},
};
use grove_logger::prelude::*;

use super::Execute;
use crate::wsv::WorldStateView;

impl Execute for Instruction {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        use Instruction::*;
        match self {
            Bootstrap(bootstrap) => bootstrap.execute(authority, state_view),
            IssueSeed(issue_seed) => issue_seed.execute(authority, state_view),
            PlantSeed(plant_seed) => plant_seed.execute(authority, state_view),
            AddConsumable(add_consumable) => add_consumable.execute(authority, state_view),
            PurchaseConsumable(purchase) => purchase.execute(authority, state_view),
            GiftConsumable(gift) => gift.execute(authority, state_view),
        }
    }
}

/// Asserts that `authority` is the recognized system owner.
pub(crate) fn assert_world_owner(
    authority: &AccountId,
    state_view: &WorldStateView,
) -> Result<(), Error> {
    if authority != state_view.owner() {
        trace!(%authority, "Rejecting instruction from non-owner");
        return Err(Error::NotPermitted(format!(
            "account {authority} is not the system owner"
        )));
    }
    Ok(())
}

pub mod prelude {
    //! Re-export important traits and types for glob import `(::*)`
    pub use super::*;
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use grove_data_model::prelude::*;

    use super::*;
    use crate::wsv::World;

    fn account_id(name: &str) -> AccountId {
        name.parse().expect("Valid")
    }

    fn owner() -> AccountId {
        account_id("gardener")
    }

    fn wsv_with_registry() -> Result<WorldStateView> {
        let mut wsv = WorldStateView::new(World::with_owner(owner()));
        wsv.apply(&owner(), Bootstrap.into())?;
        Ok(wsv)
    }

    #[test]
    fn seed_lifecycle_end_to_end() -> Result<()> {
        let mut wsv = wsv_with_registry()?;
        let user = account_id("alice");
        let custodian = AccountId::derived(&owner(), REGISTRY_SEED);
        let seed_name: Name = "acacia #1".parse()?;

        wsv.apply(
            &owner(),
            IssueSeed::new(
                user.clone(),
                "hash123".parse()?,
                "acacia".parse()?,
                "acacia".parse()?,
                1,
            )
            .into(),
        )?;

        assert_eq!(wsv.registry()?.issued_count(), 1);
        assert_eq!(wsv.registry()?.planted_count(), 0);
        assert_eq!(wsv.seed(&seed_name)?.owner(), &user);

        wsv.apply(&user, PlantSeed::new(seed_name.clone()).into())?;

        assert_eq!(wsv.registry()?.planted_count(), 1);
        assert_eq!(wsv.tree(&seed_name)?.owner(), &user);
        assert_eq!(wsv.seed(&seed_name)?.owner(), &custodian);

        let events = wsv.drain_events();
        assert!(matches!(
            &events[..],
            [DataEvent::SeedRegistered(_), DataEvent::TreePlanted(_)]
        ));
        Ok(())
    }

    #[test]
    fn rejected_instruction_emits_nothing() -> Result<()> {
        let mut wsv = wsv_with_registry()?;
        wsv.drain_events();

        let result = wsv.apply(
            &account_id("mallory"),
            AddConsumable::new("fertilizer".parse()?, 10).into(),
        );

        assert!(matches!(result, Err(Error::NotPermitted(_))));
        assert!(wsv.events().is_empty());
        Ok(())
    }
}
