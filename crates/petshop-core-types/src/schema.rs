//! Field keys and event names shared by every petshop log record

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

pub const FIELD_PET_ID: &str = "pet_id";
pub const FIELD_OWNER_ID: &str = "owner_id";
pub const FIELD_MICROCHIP_ID: &str = "microchip_id";

/// Current workflow stage, or `failed` on the terminal transition
pub const FIELD_STAGE: &str = "stage";
/// Stage the workflow was in when it failed
pub const FIELD_FAILED_AT: &str = "failed_at";

/// `Debug` of the `PsErrorKind`
pub const FIELD_ERR_KIND: &str = "err.kind";
/// Stable `ERR_*` code
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_STAGE: &str = "stage";
