//! Parameter classification.
//!
//! Every construction parameter is tagged as exactly one of `Plain`,
//! `OptionalLike` or `CollectionLike`. Collections are checked first, then
//! optional wrappers; everything else is plain. Classification never fails:
//! a malformed collection type is marked degenerate instead of rejected.

use forge_ir::{ParameterDescriptor, StringInterner, TypeArg, TypeRef};

use crate::{CollectionFamily, CollectionShape, OptionalShape, Variant, WrapperKind};

/// Classify one parameter.
#[tracing::instrument(level = "trace", skip_all, fields(param = interner.lookup(desc.name)))]
pub fn classify(desc: &ParameterDescriptor, interner: &StringInterner) -> Variant {
    classify_type(&desc.ty, interner)
}

/// Classify a bare semantic type.
pub fn classify_type(ty: &TypeRef, interner: &StringInterner) -> Variant {
    let TypeRef::Class { name, args } = ty else {
        return Variant::Plain;
    };
    let class_name = interner.lookup(*name);

    if let Some(family) = CollectionFamily::from_class_name(class_name) {
        return Variant::CollectionLike(collection_shape(family, args));
    }

    if let Some(wrapper_kind) = WrapperKind::from_class_name(class_name) {
        if let Some(shape) = optional_shape(wrapper_kind, args, interner) {
            return Variant::OptionalLike(shape);
        }
    }

    Variant::Plain
}

fn collection_shape(family: CollectionFamily, args: &[TypeArg]) -> CollectionShape {
    let kind = family.kind();
    let element_types: Vec<TypeRef> = args.iter().filter_map(TypeArg::as_type).cloned().collect();
    // Raw, wildcarded and wrong-arity uses all lose their concrete arguments.
    let degenerate = args.len() != kind.arity() || element_types.len() != args.len();
    CollectionShape {
        kind,
        family,
        element_types,
        degenerate,
    }
}

fn optional_shape(
    wrapper_kind: WrapperKind,
    args: &[TypeArg],
    interner: &StringInterner,
) -> Option<OptionalShape> {
    if let Some(primitive) = wrapper_kind.primitive_inner() {
        return args.is_empty().then(|| OptionalShape {
            wrapper_kind,
            inner: TypeRef::primitive(primitive),
            double_wrapped: false,
        });
    }

    let [TypeArg::Type(inner)] = args else {
        return None;
    };
    Some(OptionalShape {
        wrapper_kind,
        inner: inner.clone(),
        double_wrapped: is_double_wrapped(inner, interner),
    })
}

fn is_double_wrapped(inner: &TypeRef, interner: &StringInterner) -> bool {
    match inner {
        TypeRef::Var(_) => true,
        TypeRef::Class { name, .. } => WrapperKind::from_class_name(interner.lookup(*name)).is_some(),
        TypeRef::Primitive(_) => false,
    }
}

#[cfg(test)]
mod tests;
