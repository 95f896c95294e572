//! Diagnostic system for resolver error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//!
//! Producers build [`Diagnostic`]s; a [`queue::DiagnosticQueue`] orders,
//! deduplicates and caps them; [`emitter::render_plain`] turns each one into
//! text with line/column positions from a [`span_utils::LineOffsetTable`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
