//! Grove smart contract functionality. The instructions in [`isi`] are the
//! main way of interacting with the [`WorldStateView`]; nothing else mutates
//! the world.

pub mod isi;

use grove_data_model::{account::AccountId, isi::error::InstructionExecutionError as Error};
pub use isi::*;

use crate::wsv::WorldStateView;

/// Trait implementations should provide actions to apply changes on
/// [`WorldStateView`].
pub trait Execute {
    /// Apply actions to `state_view` on behalf of `authority`.
    ///
    /// # Errors
    /// Concrete to each implementer.
    fn execute(self, authority: &AccountId, state_view: &mut WorldStateView) -> Result<(), Error>;
}
