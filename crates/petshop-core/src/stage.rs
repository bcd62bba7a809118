//! Progress of a single `update_pet_details` call
//!
//! The workflow walks a fixed chain of stages. The first failing stage ends
//! the call in [`UpdateStage::Failed`]; success ends it in
//! [`UpdateStage::Done`]. Both are terminal.

use std::fmt;

use thiserror::Error;

use crate::errors::UpdatePetDetailsFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateStage {
    Start,
    PetFetched,
    OwnerFetched,
    MicrochipFetched,
    ConsistencyOk,
    UpdateValidated,
    Done,
    Failed(UpdatePetDetailsFailure),
}

/// Attempted transition out of `Done` or `Failed`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No transition out of terminal stage '{0}'")]
pub struct TerminalStageError(pub UpdateStage);

impl UpdateStage {
    /// Next stage on the happy path
    ///
    /// # Errors
    ///
    /// [`TerminalStageError`] if this stage is terminal
    pub fn advance(self) -> Result<UpdateStage, TerminalStageError> {
        let next = match self {
            UpdateStage::Start => UpdateStage::PetFetched,
            UpdateStage::PetFetched => UpdateStage::OwnerFetched,
            UpdateStage::OwnerFetched => UpdateStage::MicrochipFetched,
            UpdateStage::MicrochipFetched => UpdateStage::ConsistencyOk,
            UpdateStage::ConsistencyOk => UpdateStage::UpdateValidated,
            UpdateStage::UpdateValidated => UpdateStage::Done,
            UpdateStage::Done | UpdateStage::Failed(_) => return Err(TerminalStageError(self)),
        };
        Ok(next)
    }

    /// End the call with `failure`
    ///
    /// # Errors
    ///
    /// [`TerminalStageError`] if this stage is terminal
    pub fn fail(self, failure: UpdatePetDetailsFailure) -> Result<UpdateStage, TerminalStageError> {
        if self.is_terminal() {
            return Err(TerminalStageError(self));
        }
        Ok(UpdateStage::Failed(failure))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UpdateStage::Done | UpdateStage::Failed(_))
    }

    /// Stable name used in log events
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateStage::Start => "start",
            UpdateStage::PetFetched => "pet_fetched",
            UpdateStage::OwnerFetched => "owner_fetched",
            UpdateStage::MicrochipFetched => "microchip_fetched",
            UpdateStage::ConsistencyOk => "consistency_ok",
            UpdateStage::UpdateValidated => "update_validated",
            UpdateStage::Done => "done",
            UpdateStage::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for UpdateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
