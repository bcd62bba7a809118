use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::MicrochipId;
use super::patch::Patch;
use super::pet::{Pet, PetGender, PetType};

/// Partial update of a pet's details
///
/// Every field is independently [`Patch::Unset`] ("leave unchanged") or
/// [`Patch::Set`] ("apply this value"). The pet id itself is never updatable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub microchip_id: Patch<MicrochipId>,

    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub birth_date: Patch<NaiveDate>,

    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub pet_type: Patch<PetType>,

    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub breed: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub gender: Patch<PetGender>,
}

impl PetUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_microchip_id(mut self, microchip_id: MicrochipId) -> Self {
        self.microchip_id = Patch::Set(microchip_id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Set(name.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Patch::Set(birth_date);
        self
    }

    pub fn with_pet_type(mut self, pet_type: PetType) -> Self {
        self.pet_type = Patch::Set(pet_type);
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Patch::Set(breed.into());
        self
    }

    pub fn with_gender(mut self, gender: PetGender) -> Self {
        self.gender = Patch::Set(gender);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.microchip_id.is_unset()
            && self.name.is_unset()
            && self.birth_date.is_unset()
            && self.pet_type.is_unset()
            && self.breed.is_unset()
            && self.gender.is_unset()
    }

    /// Copy of `pet` with every set field replaced
    ///
    /// Applying the same update to its own result yields the same pet.
    pub fn apply_to(&self, pet: &Pet) -> Pet {
        Pet {
            id: pet.id.clone(),
            microchip_id: self.microchip_id.resolve(&pet.microchip_id),
            name: self.name.resolve(&pet.name),
            birth_date: self.birth_date.resolve(&pet.birth_date),
            pet_type: self.pet_type.resolve(&pet.pet_type),
            breed: self.breed.resolve(&pet.breed),
            gender: self.gender.resolve(&pet.gender),
        }
    }
}
