use crate::errors::UpdatePetDetailsFailure;
use crate::model::{Microchip, Owner, Pet};

/// Verify that a microchip links exactly this pet to exactly this owner
///
/// The pet reference is checked first, so a microchip that is wrong on both
/// counts reports [`UpdatePetDetailsFailure::InvalidMicrochip`].
///
/// # Errors
///
/// - `InvalidMicrochip`: `microchip.pet_id != pet.id`
/// - `OwnerMismatch`: `microchip.owner_id != owner.id`
pub fn check_microchip_link(
    pet: &Pet,
    owner: &Owner,
    microchip: &Microchip,
) -> Result<(), UpdatePetDetailsFailure> {
    if !microchip.references_pet(&pet.id) {
        tracing::debug!(
            pet_id = pet.id.as_str(),
            microchip_id = microchip.id.as_str(),
            microchip_pet_id = microchip.pet_id.as_str(),
            "Microchip does not reference pet"
        );
        return Err(UpdatePetDetailsFailure::InvalidMicrochip);
    }

    if !microchip.references_owner(&owner.id) {
        tracing::debug!(
            owner_id = owner.id.as_str(),
            microchip_id = microchip.id.as_str(),
            microchip_owner_id = microchip.owner_id.as_str(),
            "Microchip registered to a different owner"
        );
        return Err(UpdatePetDetailsFailure::OwnerMismatch);
    }

    Ok(())
}
