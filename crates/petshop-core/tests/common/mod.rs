#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use petshop_core::{
    LookupStrategy, Microchip, MicrochipId, MicrochipStore, Owner, OwnerId, OwnerStore, Pet,
    PetGender, PetId, PetService, PetStore, PetType, PetUpdate, UpdatePetFailure,
};

/// Ordered record of store calls shared by the fakes of one fixture
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// Pet store fake with call counters and an optional scripted update failure
pub struct FakePetStore {
    pets: Mutex<HashMap<PetId, Pet>>,
    update_failure: Mutex<Option<UpdatePetFailure>>,
    pub update_calls: AtomicUsize,
    log: CallLog,
}

impl FakePetStore {
    pub fn insert(&self, pet: Pet) {
        self.pets.lock().unwrap().insert(pet.id.clone(), pet);
    }

    pub fn get(&self, id: &PetId) -> Option<Pet> {
        self.pets.lock().unwrap().get(id).cloned()
    }

    /// Make every subsequent `update_pet` fail with `failure`
    pub fn fail_updates_with(&self, failure: UpdatePetFailure) {
        *self.update_failure.lock().unwrap() = Some(failure);
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PetStore for FakePetStore {
    async fn get_pet(&self, id: &PetId) -> Option<Pet> {
        self.log.record("get_pet");
        self.get(id)
    }

    async fn update_pet(&self, id: &PetId, update: &PetUpdate) -> Result<Pet, UpdatePetFailure> {
        self.log.record("update_pet");
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = *self.update_failure.lock().unwrap() {
            return Err(failure);
        }

        let mut pets = self.pets.lock().unwrap();
        let current = pets.get(id).ok_or(UpdatePetFailure::NotFound)?;
        let updated = update.apply_to(current);
        pets.insert(id.clone(), updated.clone());
        Ok(updated)
    }
}

pub struct FakeOwnerStore {
    owners: Mutex<HashMap<OwnerId, Owner>>,
    log: CallLog,
}

impl FakeOwnerStore {
    pub fn insert(&self, owner: Owner) {
        self.owners.lock().unwrap().insert(owner.id.clone(), owner);
    }
}

#[async_trait]
impl OwnerStore for FakeOwnerStore {
    async fn get_owner(&self, id: &OwnerId) -> Option<Owner> {
        self.log.record("get_owner");
        self.owners.lock().unwrap().get(id).cloned()
    }
}

pub struct FakeMicrochipStore {
    microchips: Mutex<HashMap<MicrochipId, Microchip>>,
    log: CallLog,
}

impl FakeMicrochipStore {
    pub fn insert(&self, microchip: Microchip) {
        self.microchips
            .lock()
            .unwrap()
            .insert(microchip.id.clone(), microchip);
    }
}

#[async_trait]
impl MicrochipStore for FakeMicrochipStore {
    async fn get_microchip(&self, id: &MicrochipId) -> Option<Microchip> {
        self.log.record("get_microchip");
        self.microchips.lock().unwrap().get(id).cloned()
    }
}

/// Three fakes sharing one call log
pub struct Fixture {
    pub pets: Arc<FakePetStore>,
    pub owners: Arc<FakeOwnerStore>,
    pub microchips: Arc<FakeMicrochipStore>,
    pub log: CallLog,
}

impl Fixture {
    /// All three stores empty
    pub fn empty() -> Self {
        let log = CallLog::default();
        Self {
            pets: Arc::new(FakePetStore {
                pets: Mutex::new(HashMap::new()),
                update_failure: Mutex::new(None),
                update_calls: AtomicUsize::new(0),
                log: log.clone(),
            }),
            owners: Arc::new(FakeOwnerStore {
                owners: Mutex::new(HashMap::new()),
                log: log.clone(),
            }),
            microchips: Arc::new(FakeMicrochipStore {
                microchips: Mutex::new(HashMap::new()),
                log: log.clone(),
            }),
            log,
        }
    }

    /// P1{microchip=M1}, M1{pet=P1, owner=O1}, O1
    pub fn consistent() -> Self {
        Self::consistent_with_ids(P1, M1, O1)
    }

    /// Same shape as [`Fixture::consistent`] with caller-chosen ids
    pub fn consistent_with_ids(pet: &str, microchip: &str, owner: &str) -> Self {
        let fixture = Self::empty();
        fixture.pets.insert(test_pet(pet, microchip));
        fixture.owners.insert(Owner::new(OwnerId::new(owner), "Jane Doe"));
        fixture.microchips.insert(Microchip::new(
            MicrochipId::new(microchip),
            OwnerId::new(owner),
            PetId::new(pet),
        ));
        fixture
    }

    pub fn service(&self) -> PetService {
        PetService::new(
            self.pets.clone(),
            self.owners.clone(),
            self.microchips.clone(),
        )
    }

    pub fn service_with(&self, lookup: LookupStrategy) -> PetService {
        self.service().with_lookup_strategy(lookup)
    }
}

pub const P1: &str = "P1";
pub const M1: &str = "M1";
pub const O1: &str = "O1";

pub const STRATEGIES: [LookupStrategy; 2] = [LookupStrategy::Sequential, LookupStrategy::Concurrent];

pub fn test_pet(id: &str, microchip: &str) -> Pet {
    Pet::new(
        PetId::new(id),
        MicrochipId::new(microchip),
        "Fido",
        NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
        PetType::Dog,
        "Beagle",
        PetGender::Male,
    )
}

pub fn pet_id(id: &str) -> PetId {
    PetId::new(id)
}

pub fn owner_id(id: &str) -> OwnerId {
    OwnerId::new(id)
}

pub fn rename(name: &str) -> PetUpdate {
    PetUpdate::new().with_name(name)
}
