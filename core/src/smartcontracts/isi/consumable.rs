//! This module contains the consumable catalog instructions: administrative
//! stocking, user purchases and administrative gifts.

use grove_data_model::{
    account::AccountId,
    consumable::Consumable,
    events::{ConsumableAdded, ConsumablePurchased},
    isi::{
        error::InstructionExecutionError as Error, AddConsumable, GiftConsumable,
        PurchaseConsumable,
    },
};
use grove_logger::prelude::*;

use super::{assert_world_owner, Execute};
use crate::wsv::WorldStateView;

impl Execute for AddConsumable {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        assert_world_owner(authority, state_view)?;

        state_view
            .registry_mut()?
            .add_consumable(Consumable::new(self.id.clone(), self.price));

        debug!(id = %self.id, price = self.price, "Consumable added to the catalog");
        state_view.emit_events(Some(ConsumableAdded {
            id: self.id,
            price: self.price,
        }));
        Ok(())
    }
}

impl Execute for PurchaseConsumable {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        let registry = state_view.registry()?;
        let Some(consumable) = registry.find_consumable(&self.id) else {
            return Err(Error::NotPermitted(format!(
                "no consumable with id {}",
                self.id
            )));
        };
        let price = consumable.price();
        let treasury = registry.treasury().clone();

        state_view.transfer_funds(authority, &treasury, price)?;

        debug!(id = %self.id, buyer = %authority, price, "Consumable purchased");
        state_view.emit_events(Some(ConsumablePurchased {
            id: self.id,
            account: authority.clone(),
        }));
        Ok(())
    }
}

impl Execute for GiftConsumable {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        assert_world_owner(authority, state_view)?;

        if state_view.registry()?.find_consumable(&self.id).is_none() {
            return Err(Error::NotPermitted(format!(
                "no consumable with id {}",
                self.id
            )));
        }

        // No payment and no granted-benefit record: the purchase event is
        // the whole effect.
        debug!(id = %self.id, receiver = %self.receiver, "Consumable gifted");
        state_view.emit_events(Some(ConsumablePurchased {
            id: self.id,
            account: self.receiver,
        }));
        Ok(())
    }
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

    fn wsv_with_catalog() -> Result<WorldStateView> {
        let mut wsv = WorldStateView::new(World::with_owner(owner()));
        wsv.apply(&owner(), Bootstrap.into())?;
        wsv.apply(&owner(), AddConsumable::new("fertilizer".parse()?, 10).into())?;
        wsv.drain_events();
        Ok(wsv)
    }

    #[test]
    fn purchase_pays_the_treasury() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let user = account_id("alice");
        wsv.deposit(&user, 25)?;

        wsv.apply(&user, PurchaseConsumable::new("fertilizer".parse()?).into())?;

        assert_eq!(wsv.account(&user)?.balance(), 15);
        let treasury = wsv.registry()?.treasury().clone();
        assert_eq!(wsv.account(&treasury)?.balance(), 10);
        assert!(matches!(
            wsv.events(),
            [DataEvent::ConsumablePurchased(_)]
        ));
        Ok(())
    }

    #[test]
    fn purchase_charges_the_first_inserted_match() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        wsv.apply(&owner(), AddConsumable::new("fertilizer".parse()?, 99).into())?;
        wsv.drain_events();

        let user = account_id("alice");
        wsv.deposit(&user, 100)?;
        wsv.apply(&user, PurchaseConsumable::new("fertilizer".parse()?).into())?;

        assert_eq!(wsv.account(&user)?.balance(), 90);
        Ok(())
    }

    #[test]
    fn purchase_of_an_unknown_id_is_rejected() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let result = wsv.apply(
            &account_id("alice"),
            PurchaseConsumable::new("compost".parse()?).into(),
        );
        assert!(matches!(result, Err(Error::NotPermitted(_))));
        Ok(())
    }

    #[test]
    fn purchase_with_insufficient_balance_is_rejected() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let user = account_id("alice");
        wsv.deposit(&user, 5)?;

        let result = wsv.apply(&user, PurchaseConsumable::new("fertilizer".parse()?).into());

        assert!(matches!(result, Err(Error::Math(MathError::NotEnoughQuantity))));
        assert_eq!(wsv.account(&user)?.balance(), 5);
        assert!(wsv.events().is_empty());
        Ok(())
    }

    #[test]
    fn stocking_answers_to_the_owner_alone() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let result = wsv.apply(
            &account_id("alice"),
            AddConsumable::new("compost".parse()?, 3).into(),
        );
        assert!(matches!(result, Err(Error::NotPermitted(_))));
        assert_eq!(wsv.registry()?.catalog().len(), 1);
        Ok(())
    }

    #[test]
    fn gift_emits_for_the_receiver_without_payment() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let receiver = account_id("alice");

        wsv.apply(
            &owner(),
            GiftConsumable::new(receiver.clone(), "fertilizer".parse()?).into(),
        )?;

        let events = wsv.drain_events();
        let [DataEvent::ConsumablePurchased(event)] = &events[..] else {
            panic!("expected a single purchase event, got {events:?}");
        };
        assert_eq!(event.account, receiver);
        assert!(wsv.account(&receiver).is_err());
        Ok(())
    }

    #[test]
    fn gift_of_an_unknown_id_is_rejected() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let result = wsv.apply(
            &owner(),
            GiftConsumable::new(account_id("alice"), "compost".parse()?).into(),
        );
        assert!(matches!(result, Err(Error::NotPermitted(_))));
        assert!(wsv.events().is_empty());
        Ok(())
    }

    #[test]
    fn gift_answers_to_the_owner_alone() -> Result<()> {
        let mut wsv = wsv_with_catalog()?;
        let result = wsv.apply(
            &account_id("alice"),
            GiftConsumable::new(account_id("bob"), "fertilizer".parse()?).into(),
        );
        assert!(matches!(result, Err(Error::NotPermitted(_))));
        Ok(())
    }
}
