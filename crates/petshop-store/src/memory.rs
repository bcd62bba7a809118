//! In-memory stores
//!
//! Each store is a `HashMap` behind a `RwLock`. Locks are never held across
//! an `.await`. Every write is a single map operation, so a poisoned lock is
//! recovered instead of propagated.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use petshop_core::{
    Microchip, MicrochipId, MicrochipStore, Owner, OwnerId, OwnerStore, Pet, PetId, PetService,
    PetStore, PetUpdate, UpdatePetFailure,
};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ========== Pets ==========

#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: RwLock<HashMap<PetId, Pet>>,
}

impl InMemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pet, returning the previous record
    pub fn insert_pet(&self, pet: Pet) -> Option<Pet> {
        write(&self.pets).insert(pet.id.clone(), pet)
    }

    pub fn remove_pet(&self, id: &PetId) -> Option<Pet> {
        write(&self.pets).remove(id)
    }

    pub fn len(&self) -> usize {
        read(&self.pets).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.pets).is_empty()
    }
}

/// Rules the store enforces on top of the core's own validation
///
/// - A species change must come with a breed for the new species.
/// - A pet cannot be born after `today`.
pub fn check_update_rules(
    current: &Pet,
    update: &PetUpdate,
    today: NaiveDate,
) -> Result<(), UpdatePetFailure> {
    if let Some(pet_type) = update.pet_type.as_set() {
        if *pet_type != current.pet_type && update.breed.is_unset() {
            tracing::debug!(
                pet_id = current.id.as_str(),
                "Species change without breed rejected"
            );
            return Err(UpdatePetFailure::IllegalUpdate);
        }
    }

    if let Some(birth_date) = update.birth_date.as_set() {
        if *birth_date > today {
            tracing::debug!(
                pet_id = current.id.as_str(),
                birth_date = %birth_date,
                "Future birth date rejected"
            );
            return Err(UpdatePetFailure::IllegalUpdate);
        }
    }

    Ok(())
}

#[async_trait]
impl PetStore for InMemoryPetStore {
    async fn get_pet(&self, id: &PetId) -> Option<Pet> {
        read(&self.pets).get(id).cloned()
    }

    async fn update_pet(&self, id: &PetId, update: &PetUpdate) -> Result<Pet, UpdatePetFailure> {
        let mut pets = write(&self.pets);
        let current = pets.get(id).ok_or(UpdatePetFailure::NotFound)?;

        check_update_rules(current, update, Utc::now().date_naive())?;

        let updated = update.apply_to(current);
        pets.insert(id.clone(), updated.clone());
        tracing::debug!(pet_id = id.as_str(), "Pet updated");

        Ok(updated)
    }
}

// ========== Owners ==========

#[derive(Debug, Default)]
pub struct InMemoryOwnerStore {
    owners: RwLock<HashMap<OwnerId, Owner>>,
}

impl InMemoryOwnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_owner(&self, owner: Owner) -> Option<Owner> {
        write(&self.owners).insert(owner.id.clone(), owner)
    }

    pub fn remove_owner(&self, id: &OwnerId) -> Option<Owner> {
        write(&self.owners).remove(id)
    }

    pub fn len(&self) -> usize {
        read(&self.owners).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.owners).is_empty()
    }
}

#[async_trait]
impl OwnerStore for InMemoryOwnerStore {
    async fn get_owner(&self, id: &OwnerId) -> Option<Owner> {
        read(&self.owners).get(id).cloned()
    }
}

// ========== Microchips ==========

#[derive(Debug, Default)]
pub struct InMemoryMicrochipStore {
    microchips: RwLock<HashMap<MicrochipId, Microchip>>,
}

impl InMemoryMicrochipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_microchip(&self, microchip: Microchip) -> Option<Microchip> {
        write(&self.microchips).insert(microchip.id.clone(), microchip)
    }

    pub fn remove_microchip(&self, id: &MicrochipId) -> Option<Microchip> {
        write(&self.microchips).remove(id)
    }

    pub fn len(&self) -> usize {
        read(&self.microchips).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.microchips).is_empty()
    }
}

#[async_trait]
impl MicrochipStore for InMemoryMicrochipStore {
    async fn get_microchip(&self, id: &MicrochipId) -> Option<Microchip> {
        read(&self.microchips).get(id).cloned()
    }
}

// ========== Bundle ==========

/// Shared handles to one set of in-memory stores
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub pets: Arc<InMemoryPetStore>,
    pub owners: Arc<InMemoryOwnerStore>,
    pub microchips: Arc<InMemoryMicrochipStore>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service reading and writing these stores
    pub fn pet_service(&self) -> PetService {
        PetService::new(
            self.pets.clone(),
            self.owners.clone(),
            self.microchips.clone(),
        )
    }
}
