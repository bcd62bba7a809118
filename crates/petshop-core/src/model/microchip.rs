use serde::{Deserialize, Serialize};

use super::ids::{MicrochipId, OwnerId, PetId};

/// Microchip registration record
///
/// The only record asserting "this pet belongs to this owner". A pet points
/// at its microchip via `Pet::microchip_id`; the microchip must point back at
/// the same pet and at the owner on whose behalf an update is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Microchip {
    pub id: MicrochipId,
    pub owner_id: OwnerId,
    pub pet_id: PetId,
}

impl Microchip {
    pub fn new(id: MicrochipId, owner_id: OwnerId, pet_id: PetId) -> Self {
        Self {
            id,
            owner_id,
            pet_id,
        }
    }

    /// Whether this microchip is registered to the given pet
    pub fn references_pet(&self, pet_id: &PetId) -> bool {
        &self.pet_id == pet_id
    }

    /// Whether this microchip is registered to the given owner
    pub fn references_owner(&self, owner_id: &OwnerId) -> bool {
        &self.owner_id == owner_id
    }
}
