use crate::errors::UpdatePetDetailsFailure;
use crate::model::PetUpdate;

/// A pet name must contain something other than whitespace
///
/// # Errors
///
/// `InvalidUpdate` if `name` is empty or whitespace only
pub fn check_name_policy(name: &str) -> Result<(), UpdatePetDetailsFailure> {
    if name.trim().is_empty() {
        return Err(UpdatePetDetailsFailure::InvalidUpdate);
    }
    Ok(())
}

/// Reject structurally invalid requested values before they reach the store
///
/// Only a requested name is checked here; the remaining fields are left to
/// the pet store, which may still answer `IllegalUpdate`.
///
/// # Errors
///
/// `InvalidUpdate` if the update sets a blank name
pub fn validate_pet_update(update: &PetUpdate) -> Result<(), UpdatePetDetailsFailure> {
    if let Some(name) = update.name.as_set() {
        check_name_policy(name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_policy() {
        assert!(check_name_policy("Rex").is_ok());
        assert!(check_name_policy("  Rex ").is_ok());
        assert_eq!(
            check_name_policy(""),
            Err(UpdatePetDetailsFailure::InvalidUpdate)
        );
        assert_eq!(
            check_name_policy(" \t\n"),
            Err(UpdatePetDetailsFailure::InvalidUpdate)
        );
    }

    #[test]
    fn test_unset_name_is_not_validated() {
        assert!(validate_pet_update(&PetUpdate::new()).is_ok());
        assert!(validate_pet_update(&PetUpdate::new().with_breed("")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            validate_pet_update(&PetUpdate::new().with_name("   ")),
            Err(UpdatePetDetailsFailure::InvalidUpdate)
        );
    }
}
