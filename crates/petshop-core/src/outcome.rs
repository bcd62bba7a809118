//! Flat, value-returning form of the update result

use crate::errors::UpdatePetDetailsFailure;
use crate::model::Pet;

/// Closed set of results of `update_pet_details`
///
/// Equivalent to `Result<Pet, UpdatePetDetailsFailure>`, for callers that
/// prefer matching one enum over handling an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePetDetailsOutcome {
    Success(Pet),
    PetNotFound,
    OwnerNotFound,
    MicrochipNotFound,
    InvalidMicrochip,
    OwnerMismatch,
    InvalidUpdate,
}

impl UpdatePetDetailsOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdatePetDetailsOutcome::Success(_))
    }

    /// The failure carried by this outcome, if any
    pub fn failure(&self) -> Option<UpdatePetDetailsFailure> {
        match self {
            UpdatePetDetailsOutcome::Success(_) => None,
            // remaining variants carry no data
            other => other.clone().into_result().err(),
        }
    }

    /// Convert back into the short-circuit form
    ///
    /// # Errors
    ///
    /// Returns the failure for every non-success variant
    pub fn into_result(self) -> Result<Pet, UpdatePetDetailsFailure> {
        match self {
            UpdatePetDetailsOutcome::Success(pet) => Ok(pet),
            UpdatePetDetailsOutcome::PetNotFound => Err(UpdatePetDetailsFailure::PetNotFound),
            UpdatePetDetailsOutcome::OwnerNotFound => Err(UpdatePetDetailsFailure::OwnerNotFound),
            UpdatePetDetailsOutcome::MicrochipNotFound => {
                Err(UpdatePetDetailsFailure::MicrochipNotFound)
            }
            UpdatePetDetailsOutcome::InvalidMicrochip => {
                Err(UpdatePetDetailsFailure::InvalidMicrochip)
            }
            UpdatePetDetailsOutcome::OwnerMismatch => Err(UpdatePetDetailsFailure::OwnerMismatch),
            UpdatePetDetailsOutcome::InvalidUpdate => Err(UpdatePetDetailsFailure::InvalidUpdate),
        }
    }
}

impl From<UpdatePetDetailsFailure> for UpdatePetDetailsOutcome {
    fn from(failure: UpdatePetDetailsFailure) -> Self {
        match failure {
            UpdatePetDetailsFailure::PetNotFound => UpdatePetDetailsOutcome::PetNotFound,
            UpdatePetDetailsFailure::OwnerNotFound => UpdatePetDetailsOutcome::OwnerNotFound,
            UpdatePetDetailsFailure::MicrochipNotFound => UpdatePetDetailsOutcome::MicrochipNotFound,
            UpdatePetDetailsFailure::InvalidMicrochip => UpdatePetDetailsOutcome::InvalidMicrochip,
            UpdatePetDetailsFailure::OwnerMismatch => UpdatePetDetailsOutcome::OwnerMismatch,
            UpdatePetDetailsFailure::InvalidUpdate => UpdatePetDetailsOutcome::InvalidUpdate,
        }
    }
}

impl From<Result<Pet, UpdatePetDetailsFailure>> for UpdatePetDetailsOutcome {
    fn from(result: Result<Pet, UpdatePetDetailsFailure>) -> Self {
        match result {
            Ok(pet) => UpdatePetDetailsOutcome::Success(pet),
            Err(failure) => failure.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_failure_survives_outcome_round_trip() {
        for failure in UpdatePetDetailsFailure::ALL {
            let outcome = UpdatePetDetailsOutcome::from(failure);
            assert!(!outcome.is_success());
            assert_eq!(outcome.failure(), Some(failure));
            assert_eq!(outcome.into_result(), Err(failure));
        }
    }
}
