//! `log_op_*` macros
//!
//! All four stamp `component`, `op` and `event` on the record. Extra fields
//! use the usual `tracing` field syntax.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        $crate::__tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// `start` event at info level
///
/// ```
/// # use petshop_core::log_op_start;
/// log_op_start!("update_pet_details");
/// log_op_start!("update_pet_details", pet_id = "p1", owner_id = "o1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// `stage` event at debug level; the stage is rendered with `Display`
///
/// ```
/// # use petshop_core::log_op_stage;
/// log_op_stage!("update_pet_details", "pet_fetched", pet_id = "p1");
/// ```
#[macro_export]
macro_rules! log_op_stage {
    ($op:expr, $stage:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            debug,
            $op,
            $crate::schema::EVENT_STAGE,
            stage = %$stage
            $(, $($field)*)?
        )
    };
}

/// `end` event at info level; `duration_ms` is mandatory
///
/// ```
/// # use petshop_core::log_op_end;
/// log_op_end!("update_pet_details", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// `end_error` event at warn level
///
/// `$err` is anything that converts into [`PsError`](crate::errors::PsError);
/// its kind and stable code become `err.kind` and `err.code`.
///
/// ```
/// # use petshop_core::{log_op_error, errors::UpdatePetDetailsFailure};
/// log_op_error!("update_pet_details", UpdatePetDetailsFailure::PetNotFound, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ps_err: $crate::errors::PsError = $err.into();
        $crate::__log_op_event!(
            warn,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ps_err.kind(),
            err.code = ps_err.code()
            $(, $($field)*)?
        )
    }};
}
