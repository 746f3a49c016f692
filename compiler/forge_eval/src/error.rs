//! Runtime failures of generated builders.

use thiserror::Error;

/// A failure raised by a post-build hook.
///
/// Propagated through `build()` unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HookError {
    /// The declared kind, e.g. `ValidationError`.
    pub kind: String,
    pub message: String,
}

impl HookError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        HookError {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Error raised while driving a builder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("`{builder}` has no method `{method}`")]
    UnknownMethod { builder: String, method: String },

    #[error("`{method}` takes {expected} argument(s) but {got} were supplied")]
    ArgumentCount {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("`{method}` expects `{expected}` for `{param}`, found {found}")]
    TypeMismatch {
        method: String,
        param: String,
        expected: String,
        found: &'static str,
    },

    #[error("cannot pass null to primitive `{param}` of `{method}`")]
    NullPrimitive { method: String, param: String },

    #[error("`{method}` does not accept null; pass an empty wrapper to clear the value")]
    NullArgument { method: String },

    #[error("`{method}` does not accept null elements")]
    NullElement { method: String },

    #[error("`{builder}` is not pooled")]
    NotReusable { builder: String },

    #[error("host failure: {0}")]
    Host(String),

    #[error(transparent)]
    Hook(#[from] HookError),
}
