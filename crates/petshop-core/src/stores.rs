//! Store collaborators consumed by the update workflow
//!
//! The workflow never owns entity state. Each entity kind lives in its own
//! store, injected into [`PetService`](crate::service::PetService) as an
//! `Arc<dyn _>`. Lookups return `None` for an absent record; only the pet
//! store can mutate, and it reports failures in its own narrow vocabulary.

use async_trait::async_trait;

use crate::errors::UpdatePetFailure;
use crate::model::{Microchip, MicrochipId, Owner, OwnerId, Pet, PetId, PetUpdate};

#[async_trait]
pub trait PetStore: Send + Sync {
    async fn get_pet(&self, id: &PetId) -> Option<Pet>;

    /// Apply `update` to the stored pet and return its new state
    ///
    /// # Errors
    ///
    /// - [`UpdatePetFailure::NotFound`] if the pet no longer exists
    /// - [`UpdatePetFailure::IllegalUpdate`] if the store rejects the requested values
    async fn update_pet(&self, id: &PetId, update: &PetUpdate) -> Result<Pet, UpdatePetFailure>;
}

#[async_trait]
pub trait OwnerStore: Send + Sync {
    async fn get_owner(&self, id: &OwnerId) -> Option<Owner>;
}

#[async_trait]
pub trait MicrochipStore: Send + Sync {
    async fn get_microchip(&self, id: &MicrochipId) -> Option<Microchip>;
}
