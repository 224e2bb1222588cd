//! This module contains the seed lifecycle instructions: issuance into the
//! nursery and maturation into the plantation.

use grove_data_model::{
    account::AccountId,
    description::describe,
    events::{SeedRegistered, TreePlanted},
    isi::{
        error::{FindError, InstructionExecutionError as Error, InstructionType, RepetitionError},
        IssueSeed, PlantSeed,
    },
    seed::{Seed, SeedStatus},
    species::Stage,
    tree::Tree,
    AssetId, IdBox, MetadataUri,
};
use grove_logger::prelude::*;

use super::{assert_world_owner, Execute};
use crate::wsv::WorldStateView;

impl Execute for IssueSeed {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        assert_world_owner(authority, state_view)?;

        let collection = state_view.registry()?.seed_collection().collection().clone();
        let name = self.display_name.numbered(self.index);
        name.validate_len(state_view.config.ident_length_limits)?;

        let token = AssetId::new(collection, name.clone());
        if state_view.world.seeds.contains_key(&name) {
            return Err(RepetitionError {
                instruction: InstructionType::IssueSeed,
                id: IdBox::AssetId(token),
            }
            .into());
        }

        let description = describe(Stage::Seed, &self.species).to_owned();
        let metadata_uri = MetadataUri::seed(&state_view.config.base_uri, &self.seed_hash);

        state_view.registry_mut()?.record_issued()?;
        let seed = Seed::new(
            token.clone(),
            self.species,
            description,
            metadata_uri,
            self.seed_hash.clone(),
            self.recipient.clone(),
        );
        state_view.world.seeds.insert(name.clone(), seed);
        state_view.account_or_insert(&self.recipient);

        debug!(%name, recipient = %self.recipient, "Seed issued");
        state_view.emit_events(Some(SeedRegistered {
            name,
            recipient: self.recipient,
            token,
            seed_id: self.seed_hash,
        }));
        Ok(())
    }
}

impl Execute for PlantSeed {
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error> {
        let registry = state_view.registry()?;
        let custodian = registry.custodian_account().clone();
        let tree_collection = registry.tree_collection().collection().clone();

        let seed = state_view.seed(&self.name)?;
        if seed.status() == SeedStatus::Retired {
            // A planted seed sits in custodian custody; to its former owner
            // it is indistinguishable from one that never existed.
            return Err(FindError::Seed(self.name).into());
        }
        if seed.owner() != authority {
            return Err(Error::NotPermitted(format!(
                "account {authority} does not own seed {}",
                self.name
            )));
        }

        let token = AssetId::new(tree_collection, self.name.clone());
        if state_view.world.trees.contains_key(&self.name) {
            return Err(RepetitionError {
                instruction: InstructionType::PlantSeed,
                id: IdBox::AssetId(token),
            }
            .into());
        }

        let species = seed.species().clone();
        let seed_id = seed.seed_id().clone();
        let description = describe(Stage::Tree, &species).to_owned();
        let metadata_uri = MetadataUri::plant(&state_view.config.base_uri, &seed_id);

        state_view.registry_mut()?.record_planted()?;
        state_view.seed_mut(&self.name)?.retire(custodian);
        let tree = Tree::new(
            token.clone(),
            species,
            seed_id.clone(),
            description,
            metadata_uri,
            authority.clone(),
        );
        state_view.world.trees.insert(self.name.clone(), tree);

        debug!(name = %self.name, planter = %authority, "Seed planted");
        state_view.emit_events(Some(TreePlanted {
            id: seed_id,
            name: self.name,
            planter: authority.clone(),
            token,
        }));
        Ok(())
    }
}
