//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed fixtures

use chrono::NaiveDate;
use petshop_core::{Microchip, MicrochipId, Owner, OwnerId, Pet, PetGender, PetId, PetType};
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub owners: Vec<SeedOwner>,

    #[serde(default)]
    pub pets: Vec<SeedPet>,

    /// Microchips may reference pets or owners absent from the seed
    #[serde(default)]
    pub microchips: Vec<SeedMicrochip>,
}

/// Owner definition in seed
///
/// Kept apart from [`Owner`], whose name is redacted and not serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedOwner {
    pub id: OwnerId,
    pub name: String,
}

impl From<&SeedOwner> for Owner {
    fn from(seed: &SeedOwner) -> Self {
        Owner::new(seed.id.clone(), seed.name.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPet {
    pub id: PetId,
    pub microchip_id: MicrochipId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    pub breed: String,
    pub gender: PetGender,
}

impl From<&SeedPet> for Pet {
    fn from(seed: &SeedPet) -> Self {
        Pet::new(
            seed.id.clone(),
            seed.microchip_id.clone(),
            seed.name.clone(),
            seed.birth_date,
            seed.pet_type,
            seed.breed.clone(),
            seed.gender,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedMicrochip {
    pub id: MicrochipId,
    pub owner_id: OwnerId,
    pub pet_id: PetId,
}

impl From<&SeedMicrochip> for Microchip {
    fn from(seed: &SeedMicrochip) -> Self {
        Microchip::new(seed.id.clone(), seed.owner_id.clone(), seed.pet_id.clone())
    }
}
