//! Forge IR - shared vocabulary of the builder generator.
//!
//! This crate contains the data every other Forge crate speaks:
//! - Names for interned identifiers
//! - Spans pointing back into host source
//! - `TypeRef`, the semantic type of a construction parameter
//! - `ValueTypeDecl`, the supplier's raw picture of a value type
//! - `ParameterDescriptor`, one validated construction parameter
//!
//! Every type is `Clone + Eq + Hash + Debug` so declarations and descriptors
//! can be compared and cached by the pass driver.

mod decl;
mod descriptor;
mod interner;
mod name;
mod span;
mod ty;

pub use decl::{
    AccessorDecl, ConstructorDecl, CtorParam, Directive, DirectiveUse, HookDecl, HookReturn,
    ValueTypeDecl, Visibility,
};
pub use descriptor::{ParameterDescriptor, PostBuildHook};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use ty::{PrimitiveKind, TypeArg, TypeDisplay, TypeRef};
