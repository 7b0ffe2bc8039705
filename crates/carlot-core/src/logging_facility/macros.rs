//! Operation lifecycle macros
//!
//! Every facade write is bracketed by a `start` event and exactly one of `end`
//! or `end_error`. All three expand through `__op_event!`, so the `component`, `op`
//! and `event` keys come out the same in each. Callers outside this crate
//! need `carlot-core-types` and `tracing` as dependencies.

/// Emit one lifecycle event at `$level` for `$op`
#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = carlot_core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use carlot_core::log_op_start;
/// log_op_start!("vehicle_delete");
/// log_op_start!("vehicle_delete", vehicle_id = "v1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// ```
/// # use carlot_core::log_op_end;
/// log_op_end!("vehicle_add", duration_ms = 3_u64, vehicle_id = "v1");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, EVENT_END, duration_ms = $duration $(, $($field)*)?)
    };
}

/// Log a failed operation
///
/// `$err` is anything convertible into [`crate::ExError`]; the event carries
/// its `err.kind` and stable `err.code`.
///
/// ```
/// # use carlot_core::{log_op_error, CarLotError};
/// let err = CarLotError::BrandNotFound { brand_id: "b9".to_string() };
/// log_op_error!("vehicle_update", err, duration_ms = 1_u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
