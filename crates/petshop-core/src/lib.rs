//! Petshop Core - pet details update workflow
//!
//! This crate provides the domain model and the single orchestration
//! operation of the petshop core:
//! - Pet, Owner and Microchip snapshots with newtype identifiers
//! - `Patch<T>`-based partial updates (`PetUpdate`)
//! - Store traits consumed by the workflow (`PetStore`, `OwnerStore`, `MicrochipStore`)
//! - Pure consistency and validation rules
//! - `PetService::update_pet_details` and its outcome/context adapters
//! - The structured error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod outcome;
pub mod rules;
pub mod service;
pub mod stage;
pub mod stores;

// Macro support
#[doc(hidden)]
pub use tracing as __tracing;
pub use petshop_core_types::schema;

// Re-export commonly used types
pub use errors::{
    FailureClass, PsError, PsErrorKind, Result, UpdatePetDetailsFailure, UpdatePetFailure,
};
pub use model::{
    Microchip, MicrochipId, Owner, OwnerId, Patch, Pet, PetGender, PetId, PetType, PetUpdate,
};
pub use outcome::UpdatePetDetailsOutcome;
pub use service::{LookupStrategy, PetService};
pub use stage::UpdateStage;
pub use stores::{MicrochipStore, OwnerStore, PetStore};
