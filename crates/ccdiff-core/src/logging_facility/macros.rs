//! Canonical logging macros
//!
//! Callers must depend on `ccdiff-core-types` and `tracing`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use ccdiff_core::log_op_start;
/// log_op_start!("compare_file");
/// log_op_start!("compare_file", rel_path = "a/b.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use ccdiff_core::log_op_end;
/// log_op_end!("compare_file", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into an [`ExError`](crate::errors::ExError) so the
/// event carries the stable kind and code.
///
/// # Example
///
/// ```
/// # use ccdiff_core::{log_op_error, errors::CcdDiffError};
/// let err = CcdDiffError::UnsupportedStructure {
///     path: "x.json".into(),
///     found: "string".to_string(),
/// };
/// log_op_error!("load_records", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Close an operation that failed in a nested operation
///
/// Emits the same `end_error` fields as [`log_op_error!`] at debug level;
/// the nested operation has already logged the failure at error level.
///
/// # Example
///
/// ```
/// # use ccdiff_core::{log_op_error_propagated, errors::CcdDiffError};
/// let err = CcdDiffError::UnsupportedStructure {
///     path: "x.json".into(),
///     found: "string".to_string(),
/// };
/// log_op_error_propagated!("compare_file", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error_propagated {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = ccdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
