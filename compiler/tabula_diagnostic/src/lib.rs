//! Diagnostic system for rich error reporting.
//!
//! Every phase reports through the same shape:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary label with span and row/column (where it went wrong)
//! - Notes and suggestions (why, and how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
