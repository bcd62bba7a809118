use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{MicrochipId, PetId};

/// Species supported by the pet store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetGender {
    Male,
    Female,
}

/// Request-scoped snapshot of a pet as returned by the pet store
///
/// The store owns the pet; a snapshot may already be stale by the time it
/// is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,

    /// The microchip this pet carries; the microchip record must point back
    pub microchip_id: MicrochipId,

    pub name: String,

    pub birth_date: NaiveDate,

    pub pet_type: PetType,

    pub breed: String,

    pub gender: PetGender,
}

impl Pet {
    /// Create a new Pet snapshot
    pub fn new(
        id: PetId,
        microchip_id: MicrochipId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        pet_type: PetType,
        breed: impl Into<String>,
        gender: PetGender,
    ) -> Self {
        Self {
            id,
            microchip_id,
            name: name.into(),
            birth_date,
            pet_type,
            breed: breed.into(),
            gender,
        }
    }
}
