use petshop_core_types::{RequestId, TraceId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using PsError
pub type Result<T> = std::result::Result<T, PsError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can use to adapt a
/// failure to their own transport (HTTP status, RPC error, exit code) without
/// matching on message text. The first six kinds mirror the update workflow's
/// failure vocabulary one-to-one; the rest cover the ambient crates
/// (seed fixtures, configuration, I/O).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsErrorKind {
    // Not-found class
    PetNotFound,
    OwnerNotFound,
    MicrochipNotFound,

    // Consistency class
    InvalidMicrochip,
    OwnerMismatch,

    // Validation class
    InvalidUpdate,

    // Fixtures/configuration
    InvalidSeed,
    InvalidConfig,

    // Integration/IO
    Io,
}

impl PsErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            PsErrorKind::PetNotFound => "ERR_PET_NOT_FOUND",
            PsErrorKind::OwnerNotFound => "ERR_OWNER_NOT_FOUND",
            PsErrorKind::MicrochipNotFound => "ERR_MICROCHIP_NOT_FOUND",
            PsErrorKind::InvalidMicrochip => "ERR_INVALID_MICROCHIP",
            PsErrorKind::OwnerMismatch => "ERR_OWNER_MISMATCH",
            PsErrorKind::InvalidUpdate => "ERR_INVALID_UPDATE",
            PsErrorKind::InvalidSeed => "ERR_INVALID_SEED",
            PsErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            PsErrorKind::Io => "ERR_IO",
        }
    }

    /// The workflow failure this kind stands for, if it is one
    pub fn failure(&self) -> Option<UpdatePetDetailsFailure> {
        match self {
            PsErrorKind::PetNotFound => Some(UpdatePetDetailsFailure::PetNotFound),
            PsErrorKind::OwnerNotFound => Some(UpdatePetDetailsFailure::OwnerNotFound),
            PsErrorKind::MicrochipNotFound => Some(UpdatePetDetailsFailure::MicrochipNotFound),
            PsErrorKind::InvalidMicrochip => Some(UpdatePetDetailsFailure::InvalidMicrochip),
            PsErrorKind::OwnerMismatch => Some(UpdatePetDetailsFailure::OwnerMismatch),
            PsErrorKind::InvalidUpdate => Some(UpdatePetDetailsFailure::InvalidUpdate),
            PsErrorKind::InvalidSeed | PsErrorKind::InvalidConfig | PsErrorKind::Io => None,
        }
    }

    /// Failure class, for the kinds produced by the update workflow
    pub fn class(&self) -> Option<FailureClass> {
        self.failure().map(|f| f.class())
    }
}

/// Coarse classification of workflow failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// A record was absent at lookup time, or vanished by mutation time
    NotFound,
    /// Linked records disagree about who references whom
    Consistency,
    /// A requested field value was rejected, locally or by the store
    Validation,
}

/// Canonical structured error type
///
/// Carries the classification fields for programmatic handling plus
/// correlation context for debugging.
#[derive(Debug, Clone)]
pub struct PsError {
    kind: PsErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl PsError {
    /// Create a new error with the specified kind
    pub fn new(kind: PsErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> PsErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for PsError {}

// ========== End Error Facility ==========

/// Failure vocabulary of the pet details update workflow
///
/// Together with a successful pet this is the entire contract exposed to
/// callers. Every variant is expected and caller-recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePetDetailsFailure {
    /// Pet absent at lookup time, or gone by the time the store applied the update
    #[error("Pet not found")]
    PetNotFound,

    /// Owner absent at lookup time
    #[error("Owner not found")]
    OwnerNotFound,

    /// The pet's microchip record is absent
    #[error("Microchip not found")]
    MicrochipNotFound,

    /// The microchip does not point back at the pet
    #[error("Microchip does not reference the pet")]
    InvalidMicrochip,

    /// The microchip links the pet to a different owner
    #[error("Microchip registers the pet to a different owner")]
    OwnerMismatch,

    /// A requested field value was rejected
    #[error("Invalid pet update")]
    InvalidUpdate,
}

impl UpdatePetDetailsFailure {
    /// Every failure, in workflow evaluation order
    pub const ALL: [UpdatePetDetailsFailure; 6] = [
        UpdatePetDetailsFailure::PetNotFound,
        UpdatePetDetailsFailure::OwnerNotFound,
        UpdatePetDetailsFailure::MicrochipNotFound,
        UpdatePetDetailsFailure::InvalidMicrochip,
        UpdatePetDetailsFailure::OwnerMismatch,
        UpdatePetDetailsFailure::InvalidUpdate,
    ];

    pub fn class(&self) -> FailureClass {
        match self {
            UpdatePetDetailsFailure::PetNotFound
            | UpdatePetDetailsFailure::OwnerNotFound
            | UpdatePetDetailsFailure::MicrochipNotFound => FailureClass::NotFound,
            UpdatePetDetailsFailure::InvalidMicrochip | UpdatePetDetailsFailure::OwnerMismatch => {
                FailureClass::Consistency
            }
            UpdatePetDetailsFailure::InvalidUpdate => FailureClass::Validation,
        }
    }

    pub fn kind(&self) -> PsErrorKind {
        match self {
            UpdatePetDetailsFailure::PetNotFound => PsErrorKind::PetNotFound,
            UpdatePetDetailsFailure::OwnerNotFound => PsErrorKind::OwnerNotFound,
            UpdatePetDetailsFailure::MicrochipNotFound => PsErrorKind::MicrochipNotFound,
            UpdatePetDetailsFailure::InvalidMicrochip => PsErrorKind::InvalidMicrochip,
            UpdatePetDetailsFailure::OwnerMismatch => PsErrorKind::OwnerMismatch,
            UpdatePetDetailsFailure::InvalidUpdate => PsErrorKind::InvalidUpdate,
        }
    }
}

/// Failures a pet store may report from `update_pet`
///
/// Deliberately not `#[non_exhaustive]`: a new store failure must get an
/// explicit mapping in `From<UpdatePetFailure> for UpdatePetDetailsFailure`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatePetFailure {
    /// The pet vanished between lookup and mutation
    #[error("Pet not found in store")]
    NotFound,

    /// The store rejected the combination of requested fields
    #[error("Store rejected the update")]
    IllegalUpdate,
}

impl From<UpdatePetFailure> for UpdatePetDetailsFailure {
    fn from(failure: UpdatePetFailure) -> Self {
        match failure {
            UpdatePetFailure::NotFound => UpdatePetDetailsFailure::PetNotFound,
            UpdatePetFailure::IllegalUpdate => UpdatePetDetailsFailure::InvalidUpdate,
        }
    }
}

impl From<UpdatePetDetailsFailure> for PsError {
    fn from(failure: UpdatePetDetailsFailure) -> Self {
        PsError::new(failure.kind()).with_message(failure.to_string())
    }
}

impl TryFrom<&PsError> for UpdatePetDetailsFailure {
    type Error = PsErrorKind;

    /// Recover the workflow failure from a structured error; returns the
    /// offending kind when the error did not originate from the workflow.
    fn try_from(err: &PsError) -> std::result::Result<Self, Self::Error> {
        err.kind().failure().ok_or(err.kind())
    }
}
