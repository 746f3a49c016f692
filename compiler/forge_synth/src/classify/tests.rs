use super::*;
use crate::CollectionKind;
use forge_ir::{PrimitiveKind, StringInterner};
use pretty_assertions::assert_eq;

fn class(interner: &StringInterner, name: &str) -> TypeRef {
    TypeRef::class(interner.intern(name))
}

fn generic(interner: &StringInterner, name: &str, args: Vec<TypeRef>) -> TypeRef {
    TypeRef::generic(interner.intern(name), args)
}

#[test]
fn primitives_and_plain_classes_are_plain() {
    let interner = StringInterner::new();
    assert_eq!(
        classify_type(&TypeRef::primitive(PrimitiveKind::Int), &interner),
        Variant::Plain
    );
    assert_eq!(
        classify_type(&class(&interner, "String"), &interner),
        Variant::Plain
    );
    assert_eq!(
        classify_type(&TypeRef::var(interner.intern("T")), &interner),
        Variant::Plain
    );
}

#[test]
fn well_formed_list_is_accumulating() {
    let interner = StringInterner::new();
    let string = class(&interner, "String");
    let ty = generic(&interner, "List", vec![string.clone()]);

    assert_eq!(
        classify_type(&ty, &interner),
        Variant::CollectionLike(CollectionShape {
            kind: CollectionKind::List,
            family: CollectionFamily::List,
            element_types: vec![string],
            degenerate: false,
        })
    );
}

#[test]
fn immutable_map_keeps_both_arguments() {
    let interner = StringInterner::new();
    let key = class(&interner, "String");
    let value = TypeRef::primitive(PrimitiveKind::Long);
    let ty = generic(&interner, "ImmutableMap", vec![key.clone(), value.clone()]);

    let variant = classify_type(&ty, &interner);
    let shape = variant.as_collection().cloned();
    assert_eq!(
        shape,
        Some(CollectionShape {
            kind: CollectionKind::Map,
            family: CollectionFamily::ImmutableMap,
            element_types: vec![key, value],
            degenerate: false,
        })
    );
}

#[test]
fn raw_collection_is_degenerate() {
    let interner = StringInterner::new();
    let variant = classify_type(&class(&interner, "Set"), &interner);
    assert!(variant.as_collection().is_some_and(|s| s.degenerate));
    assert!(!variant.has_accumulators());
}

#[test]
fn wildcard_collection_is_degenerate() {
    let interner = StringInterner::new();
    let number = class(&interner, "Number");
    let ty = TypeRef::with_args(
        interner.intern("List"),
        vec![TypeArg::wildcard_extends(number)],
    );
    let variant = classify_type(&ty, &interner);
    let shape = variant.as_collection();
    assert!(shape.is_some_and(|s| s.degenerate && s.element_types.is_empty()));
}

#[test]
fn wrong_arity_map_is_degenerate() {
    let interner = StringInterner::new();
    let ty = generic(&interner, "Map", vec![class(&interner, "String")]);
    assert!(classify_type(&ty, &interner)
        .as_collection()
        .is_some_and(|s| s.degenerate && s.kind == CollectionKind::Map));
}

#[test]
fn generic_optional() {
    let interner = StringInterner::new();
    let string = class(&interner, "String");
    let ty = generic(&interner, "Optional", vec![string.clone()]);
    assert_eq!(
        classify_type(&ty, &interner),
        Variant::OptionalLike(OptionalShape {
            wrapper_kind: WrapperKind::Generic,
            inner: string,
            double_wrapped: false,
        })
    );
}

#[test]
fn primitive_optionals_have_fixed_inner() {
    let interner = StringInterner::new();
    for (name, kind, primitive) in [
        ("OptionalInt", WrapperKind::PrimitiveInt, PrimitiveKind::Int),
        ("OptionalLong", WrapperKind::PrimitiveLong, PrimitiveKind::Long),
        (
            "OptionalDouble",
            WrapperKind::PrimitiveDouble,
            PrimitiveKind::Double,
        ),
    ] {
        assert_eq!(
            classify_type(&class(&interner, name), &interner),
            Variant::OptionalLike(OptionalShape {
                wrapper_kind: kind,
                inner: TypeRef::primitive(primitive),
                double_wrapped: false,
            })
        );
    }
}

#[test]
fn raw_or_wildcard_optional_is_plain() {
    let interner = StringInterner::new();
    assert_eq!(
        classify_type(&class(&interner, "Optional"), &interner),
        Variant::Plain
    );
    let wild = TypeRef::with_args(interner.intern("Optional"), vec![TypeArg::wildcard()]);
    assert_eq!(classify_type(&wild, &interner), Variant::Plain);
}

#[test]
fn nested_optional_is_double_wrapped() {
    let interner = StringInterner::new();
    let inner = generic(&interner, "Optional", vec![class(&interner, "String")]);
    let ty = generic(&interner, "Optional", vec![inner]);
    assert!(classify_type(&ty, &interner)
        .as_optional()
        .is_some_and(|s| s.double_wrapped));

    let over_primitive = generic(&interner, "Optional", vec![class(&interner, "OptionalInt")]);
    assert!(classify_type(&over_primitive, &interner)
        .as_optional()
        .is_some_and(|s| s.double_wrapped));
}

#[test]
fn optional_of_type_variable_is_double_wrapped() {
    let interner = StringInterner::new();
    let ty = generic(&interner, "Optional", vec![TypeRef::var(interner.intern("T"))]);
    assert!(classify_type(&ty, &interner)
        .as_optional()
        .is_some_and(|s| s.double_wrapped));
}

#[test]
fn collection_of_optionals_is_still_a_collection() {
    let interner = StringInterner::new();
    let opt = generic(&interner, "Optional", vec![class(&interner, "String")]);
    let ty = generic(&interner, "List", vec![opt]);
    assert!(classify_type(&ty, &interner).has_accumulators());
}

#[test]
fn classify_reads_descriptor_type() {
    let interner = StringInterner::new();
    let name = interner.intern("tags");
    let desc = ParameterDescriptor::new(
        name,
        generic(&interner, "Set", vec![class(&interner, "String")]),
        name,
    );
    assert!(classify(&desc, &interner).has_accumulators());
}
