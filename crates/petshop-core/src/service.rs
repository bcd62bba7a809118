//! The pet details update workflow
//!
//! [`PetService::update_pet_details`] is the only implementation of the
//! workflow. It runs four stages in a fixed order and stops at the first
//! failure:
//!
//! 1. Lookup: pet, then owner, then the pet's microchip
//! 2. Consistency: the microchip must point at both the pet and the owner
//! 3. Validation: a requested name must not be blank
//! 4. Mutation: the pet store applies the update
//!
//! `update_pet_details_outcome` and `update_pet_details_in` adapt its result
//! to a flat outcome enum and to the structured [`PsError`] respectively.
//!
//! ## Logging Ownership
//!
//! Each call logs one `start` and one `end` (or `end_error`) event at the
//! operation boundary. Stage transitions are logged at debug level.

use std::sync::Arc;
use std::time::Instant;

use petshop_core_types::{schema, RequestContext};
use serde::Deserialize;
use tracing::Instrument;

use crate::errors::{PsError, UpdatePetDetailsFailure};
use crate::model::{Owner, OwnerId, Pet, PetId, PetUpdate};
use crate::outcome::UpdatePetDetailsOutcome;
use crate::rules::{check_microchip_link, validate_pet_update};
use crate::stage::{TerminalStageError, UpdateStage};
use crate::stores::{MicrochipStore, OwnerStore, PetStore};
use crate::{log_op_end, log_op_error, log_op_stage, log_op_start};

/// Operation name used in log events and structured errors
pub const OP_UPDATE_PET_DETAILS: &str = "update_pet_details";

/// How the pet and owner lookups are scheduled
///
/// Classification is identical under both: a missing pet always wins over a
/// missing owner. The microchip lookup always follows the pet lookup, since
/// it needs the pet's microchip id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Owner lookup only starts once the pet was found
    #[default]
    Sequential,
    /// Pet and owner lookups are awaited together
    Concurrent,
}

/// Entry point of the update workflow
///
/// Holds no state of its own beyond the injected stores; cloning is cheap.
#[derive(Clone)]
pub struct PetService {
    pets: Arc<dyn PetStore>,
    owners: Arc<dyn OwnerStore>,
    microchips: Arc<dyn MicrochipStore>,
    lookup: LookupStrategy,
}

impl PetService {
    pub fn new(
        pets: Arc<dyn PetStore>,
        owners: Arc<dyn OwnerStore>,
        microchips: Arc<dyn MicrochipStore>,
    ) -> Self {
        Self {
            pets,
            owners,
            microchips,
            lookup: LookupStrategy::default(),
        }
    }

    pub fn with_lookup_strategy(mut self, lookup: LookupStrategy) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn lookup_strategy(&self) -> LookupStrategy {
        self.lookup
    }

    /// Update a pet's details on behalf of its owner
    ///
    /// The update is applied to the pet only after the pet's microchip has
    /// been confirmed to link that pet to `owner_id`.
    ///
    /// # Errors
    ///
    /// - `PetNotFound`: no pet with `pet_id`, at lookup or at mutation time
    /// - `OwnerNotFound`: no owner with `owner_id`
    /// - `MicrochipNotFound`: the pet's microchip record is absent
    /// - `InvalidMicrochip`: the microchip references another pet
    /// - `OwnerMismatch`: the microchip references another owner
    /// - `InvalidUpdate`: blank name requested, or the store rejected the update
    pub async fn update_pet_details(
        &self,
        pet_id: &PetId,
        owner_id: &OwnerId,
        update: &PetUpdate,
    ) -> Result<Pet, UpdatePetDetailsFailure> {
        log_op_start!(
            OP_UPDATE_PET_DETAILS,
            pet_id = pet_id.as_str(),
            owner_id = owner_id.as_str()
        );
        let start = Instant::now();

        let mut progress = Progress::new(pet_id);
        let result = self.run(pet_id, owner_id, update, &mut progress).await;

        match &result {
            Ok(_) => {
                log_op_end!(
                    OP_UPDATE_PET_DETAILS,
                    duration_ms = start.elapsed().as_millis() as u64,
                    pet_id = pet_id.as_str(),
                    owner_id = owner_id.as_str()
                );
            }
            Err(failure) => {
                log_op_error!(
                    OP_UPDATE_PET_DETAILS,
                    *failure,
                    duration_ms = start.elapsed().as_millis() as u64,
                    pet_id = pet_id.as_str(),
                    owner_id = owner_id.as_str(),
                    stage = %progress.failed_at()
                );
            }
        }

        result
    }

    /// Same workflow, reported as a single flat outcome
    pub async fn update_pet_details_outcome(
        &self,
        pet_id: &PetId,
        owner_id: &OwnerId,
        update: &PetUpdate,
    ) -> UpdatePetDetailsOutcome {
        self.update_pet_details(pet_id, owner_id, update)
            .await
            .into()
    }

    /// Same workflow, run inside a span carrying the request's correlation ids
    ///
    /// Failures come back as [`PsError`] annotated with the operation, the
    /// request/trace ids and the id of the entity the failure is about
    /// (the owner for owner failures, the pet otherwise).
    ///
    /// # Errors
    ///
    /// A `PsError` whose kind is one of the six workflow kinds; see
    /// [`update_pet_details`](Self::update_pet_details).
    pub async fn update_pet_details_in(
        &self,
        ctx: &RequestContext,
        pet_id: &PetId,
        owner_id: &OwnerId,
        update: &PetUpdate,
    ) -> Result<Pet, PsError> {
        let span = tracing::info_span!(
            "update_pet_details",
            request_id = %ctx.request_id,
            trace_id = tracing::field::Empty,
        );
        if let Some(trace_id) = &ctx.trace_id {
            span.record(schema::FIELD_TRACE_ID, tracing::field::display(trace_id));
        }

        self.update_pet_details(pet_id, owner_id, update)
            .instrument(span)
            .await
            .map_err(|failure| {
                let entity_id = match failure {
                    UpdatePetDetailsFailure::OwnerNotFound
                    | UpdatePetDetailsFailure::OwnerMismatch => owner_id.as_str(),
                    UpdatePetDetailsFailure::PetNotFound
                    | UpdatePetDetailsFailure::MicrochipNotFound
                    | UpdatePetDetailsFailure::InvalidMicrochip
                    | UpdatePetDetailsFailure::InvalidUpdate => pet_id.as_str(),
                };

                let err = PsError::from(failure)
                    .with_op(OP_UPDATE_PET_DETAILS)
                    .with_entity_id(entity_id)
                    .with_request_id(ctx.request_id.clone());
                match &ctx.trace_id {
                    Some(trace_id) => err.with_trace_id(trace_id.clone()),
                    None => err,
                }
            })
    }

    async fn run(
        &self,
        pet_id: &PetId,
        owner_id: &OwnerId,
        update: &PetUpdate,
        progress: &mut Progress<'_>,
    ) -> Result<Pet, UpdatePetDetailsFailure> {
        let (pet, owner) = self.fetch_pet_and_owner(pet_id, owner_id, progress).await?;

        let microchip = self
            .microchips
            .get_microchip(&pet.microchip_id)
            .await
            .ok_or_else(|| progress.fail(UpdatePetDetailsFailure::MicrochipNotFound))?;
        progress.advance();

        check_microchip_link(&pet, &owner, &microchip).map_err(|f| progress.fail(f))?;
        progress.advance();

        validate_pet_update(update).map_err(|f| progress.fail(f))?;
        progress.advance();

        // The pet may have vanished since lookup; the store reports that as NotFound
        let updated = self
            .pets
            .update_pet(&pet.id, update)
            .await
            .map_err(|e| progress.fail(e.into()))?;
        progress.advance();

        Ok(updated)
    }

    async fn fetch_pet_and_owner(
        &self,
        pet_id: &PetId,
        owner_id: &OwnerId,
        progress: &mut Progress<'_>,
    ) -> Result<(Pet, Owner), UpdatePetDetailsFailure> {
        match self.lookup {
            LookupStrategy::Sequential => {
                let pet = self
                    .pets
                    .get_pet(pet_id)
                    .await
                    .ok_or_else(|| progress.fail(UpdatePetDetailsFailure::PetNotFound))?;
                progress.advance();

                let owner = self
                    .owners
                    .get_owner(owner_id)
                    .await
                    .ok_or_else(|| progress.fail(UpdatePetDetailsFailure::OwnerNotFound))?;
                progress.advance();

                Ok((pet, owner))
            }
            LookupStrategy::Concurrent => {
                let (pet, owner) = futures::join!(
                    self.pets.get_pet(pet_id),
                    self.owners.get_owner(owner_id)
                );

                let pet = pet.ok_or_else(|| progress.fail(UpdatePetDetailsFailure::PetNotFound))?;
                progress.advance();

                let owner =
                    owner.ok_or_else(|| progress.fail(UpdatePetDetailsFailure::OwnerNotFound))?;
                progress.advance();

                Ok((pet, owner))
            }
        }
    }
}

/// Stage tracking for one call, logging each transition
struct Progress<'a> {
    stage: UpdateStage,
    failed_at: Option<UpdateStage>,
    pet_id: &'a PetId,
}

impl<'a> Progress<'a> {
    fn new(pet_id: &'a PetId) -> Self {
        Self {
            stage: UpdateStage::Start,
            failed_at: None,
            pet_id,
        }
    }

    fn advance(&mut self) {
        match self.stage.advance() {
            Ok(next) => {
                self.stage = next;
                log_op_stage!(OP_UPDATE_PET_DETAILS, self.stage, pet_id = self.pet_id.as_str());
            }
            Err(err) => self.reject(err),
        }
    }

    /// Record `failure` and hand it back for propagation
    fn fail(&mut self, failure: UpdatePetDetailsFailure) -> UpdatePetDetailsFailure {
        match self.stage.fail(failure) {
            Ok(next) => {
                self.failed_at = Some(self.stage);
                self.stage = next;
                log_op_stage!(
                    OP_UPDATE_PET_DETAILS,
                    self.stage,
                    pet_id = self.pet_id.as_str(),
                    failed_at = %self.failed_at(),
                    err.code = failure.kind().code()
                );
            }
            Err(err) => self.reject(err),
        }
        failure
    }

    /// A transition out of a terminal stage is a workflow ordering bug
    fn reject(&self, err: TerminalStageError) {
        tracing::error!(
            op = OP_UPDATE_PET_DETAILS,
            pet_id = self.pet_id.as_str(),
            stage = %self.stage,
            error = %err,
            "Stage transition rejected"
        );
    }

    /// Last stage reached before the failure
    fn failed_at(&self) -> UpdateStage {
        self.failed_at.unwrap_or(self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging_facility::init_test_capture;
    use tracing::Level;

    fn run_to_done(progress: &mut Progress<'_>) {
        while !progress.stage.is_terminal() {
            progress.advance();
        }
    }

    #[test]
    fn test_progress_stays_done_and_reports_extra_advance() {
        let capture = init_test_capture();
        let pet = PetId::new("progress-done-pet");
        let mut progress = Progress::new(&pet);
        run_to_done(&mut progress);

        progress.advance();

        assert_eq!(progress.stage, UpdateStage::Done);
        let errors: Vec<_> = capture
            .events_for_pet(OP_UPDATE_PET_DETAILS, pet.as_str())
            .into_iter()
            .filter(|e| e.level == Level::ERROR)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field("stage"), Some("done"));
    }

    #[test]
    fn test_progress_keeps_first_failure() {
        let capture = init_test_capture();
        let pet = PetId::new("progress-twice-failed-pet");
        let mut progress = Progress::new(&pet);
        progress.advance();

        progress.fail(UpdatePetDetailsFailure::OwnerNotFound);
        let returned = progress.fail(UpdatePetDetailsFailure::InvalidUpdate);

        assert_eq!(returned, UpdatePetDetailsFailure::InvalidUpdate);
        assert_eq!(
            progress.stage,
            UpdateStage::Failed(UpdatePetDetailsFailure::OwnerNotFound)
        );
        assert_eq!(progress.failed_at(), UpdateStage::PetFetched);
        assert!(capture
            .events_for_pet(OP_UPDATE_PET_DETAILS, pet.as_str())
            .iter()
            .any(|e| e.level == Level::ERROR && e.field("stage") == Some("failed")));
    }
}
