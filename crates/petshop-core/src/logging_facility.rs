//! Structured logging for the update workflow
//!
//! Every public operation emits exactly one `start` event and exactly one
//! `end` or `end_error` event, with `stage` events at debug level in between.
//! Field names come from [`petshop_core_types::schema`].
//!
//! ```rust
//! use petshop_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
