//! Structured logging facility for ccdiff
//!
//! - Single initialization point via `init(profile)`
//! - Structured operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - `log_op_error_propagated!` closes an operation whose failure a nested operation already logged
//! - Test capture mode for deterministic assertions
//!
//! Log output always goes to stderr; stdout is reserved for the comparison report.
//!
//! # Usage
//!
//! ```rust
//! use ccdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
