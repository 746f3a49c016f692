//! Internal synthesis failures.
//!
//! These are not user errors: a validated declaration should never produce
//! one. The pass reports them as E9001 and stops.

use forge_ir::InternError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("parameter `{name}` appears more than once")]
    DuplicateParameter { name: String },

    #[error("naming scheme covers {names} parameters but the type has {params}")]
    SchemeMismatch { names: usize, params: usize },

    #[error("collision resolution did not converge over {params} parameters")]
    Unresolved { params: usize },

    #[error(transparent)]
    Intern(#[from] InternError),
}
