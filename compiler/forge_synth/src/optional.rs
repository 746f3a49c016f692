//! Storage and setter rules for optional parameters.
//!
//! The builder stores the unwrapped inner value (null meaning unset). The
//! primary setter takes the wrapper; a convenience overload taking the bare
//! inner type exists only when that type is concrete and not itself
//! optional. At build time an unset value becomes the wrapper's empty
//! instance.

use forge_ir::{TypeArg, TypeRef};

use crate::{OptionalShape, WrapperKind};

/// Synthesis plan for one `OptionalLike` parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionalPlan {
    pub wrapper: WrapperKind,
    /// Declared wrapper type, taken by the primary setter.
    pub wrapper_ty: TypeRef,
    /// Type of the storage field (always nullable).
    pub storage_ty: TypeRef,
    /// Parameter type of the convenience overload, if one is generated.
    pub convenience: Option<TypeRef>,
}

pub fn optional_plan(shape: &OptionalShape, declared: &TypeRef) -> OptionalPlan {
    let convenience =
        (!shape.double_wrapped && !mentions_type_var(&shape.inner)).then(|| shape.inner.clone());
    OptionalPlan {
        wrapper: shape.wrapper_kind,
        wrapper_ty: declared.clone(),
        storage_ty: shape.inner.clone(),
        convenience,
    }
}

fn mentions_type_var(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Var(_) => true,
        TypeRef::Primitive(_) => false,
        TypeRef::Class { args, .. } => args.iter().any(|arg| match arg {
            TypeArg::Type(inner) => mentions_type_var(inner),
            TypeArg::Wildcard { bound } => bound.as_deref().is_some_and(mentions_type_var),
        }),
    }
}
