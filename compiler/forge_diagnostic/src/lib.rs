//! Diagnostic system for declaration validation and builder synthesis.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span pointing at the offending declaration
//! - optional notes and suggestions
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is type-level proof that at least one error was
//! emitted. Validation returns `Result<_, ErrorGuaranteed>` so a rejected
//! declaration can never be dropped without a report.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn validate(..) -> Result<ValidatedType, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
