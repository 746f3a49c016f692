//! Property-based tests for classification and naming.
//!
//! 1. Classification is a pure function of the type.
//! 2. Classification results are internally consistent.
//! 3. For any set of distinct parameters, collision resolution yields
//!    pairwise-distinct field names and method names, or the type is
//!    rejected for a reserved member.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use forge_ir::{Name, ParameterDescriptor, PrimitiveKind, StringInterner, TypeArg, TypeRef};
use forge_synth::{
    assemble, classify, classify_type, reserved_conflicts, resolve, SetterStyle, SynthConfig,
    TypeOptions, ValidatedType, Variant,
};
use proptest::prelude::*;

// -- Type Generation --

const CLASSES: &[&str] = &[
    "String",
    "List",
    "Set",
    "Map",
    "ImmutableList",
    "ImmutableSet",
    "ImmutableMap",
    "Optional",
    "OptionalInt",
    "OptionalLong",
    "OptionalDouble",
    "Widget",
];

#[derive(Clone, Debug)]
enum TypeShape {
    Primitive(u8),
    Var,
    Class(usize, Vec<ArgShape>),
}

#[derive(Clone, Debug)]
enum ArgShape {
    Type(TypeShape),
    Wildcard,
}

fn type_shape_strategy() -> impl Strategy<Value = TypeShape> {
    let leaf = prop_oneof![
        (0u8..8).prop_map(TypeShape::Primitive),
        Just(TypeShape::Var),
        (0..CLASSES.len()).prop_map(|i| TypeShape::Class(i, Vec::new())),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        let arg = prop_oneof![
            4 => inner.prop_map(ArgShape::Type),
            1 => Just(ArgShape::Wildcard),
        ];
        (0..CLASSES.len(), prop::collection::vec(arg, 0..4))
            .prop_map(|(i, args)| TypeShape::Class(i, args))
    })
}

fn primitive(n: u8) -> PrimitiveKind {
    match n % 8 {
        0 => PrimitiveKind::Boolean,
        1 => PrimitiveKind::Byte,
        2 => PrimitiveKind::Short,
        3 => PrimitiveKind::Int,
        4 => PrimitiveKind::Long,
        5 => PrimitiveKind::Char,
        6 => PrimitiveKind::Float,
        _ => PrimitiveKind::Double,
    }
}

fn build_type(shape: &TypeShape, interner: &StringInterner) -> TypeRef {
    match shape {
        TypeShape::Primitive(n) => TypeRef::primitive(primitive(*n)),
        TypeShape::Var => TypeRef::var(interner.intern("T")),
        TypeShape::Class(i, args) => TypeRef::with_args(
            interner.intern(CLASSES[*i]),
            args.iter()
                .map(|arg| match arg {
                    ArgShape::Type(inner) => TypeArg::Type(build_type(inner, interner)),
                    ArgShape::Wildcard => TypeArg::wildcard(),
                })
                .collect(),
        ),
    }
}

/// Variant with interned names erased, for comparing across interners.
fn tag(variant: &Variant) -> String {
    match variant {
        Variant::Plain => "plain".to_owned(),
        Variant::OptionalLike(shape) => {
            format!("optional {:?} {}", shape.wrapper_kind, shape.double_wrapped)
        }
        Variant::CollectionLike(shape) => format!(
            "collection {:?} {:?} {} {}",
            shape.kind,
            shape.family,
            shape.element_types.len(),
            shape.degenerate
        ),
    }
}

// -- Parameter Generation --

const FIELDS: &[&str] = &[
    "items",
    "addToItems",
    "itemsBuilder",
    "name",
    "x",
    "build",
    "inUse",
    "tags",
];

const ACCESSORS: &[&str] = &[
    "items",
    "getName",
    "name",
    "getX",
    "isX",
    "addToItems",
    "putInTags",
    "build",
    "tags",
    "getItems",
];

fn param_type(index: usize, interner: &StringInterner) -> TypeRef {
    let string = TypeRef::class(interner.intern("String"));
    let generic = |name: &str, args: Vec<TypeRef>| TypeRef::generic(interner.intern(name), args);
    match index % 10 {
        0 => TypeRef::primitive(PrimitiveKind::Int),
        1 => string,
        2 => generic("List", vec![string]),
        3 => generic("Set", vec![string]),
        4 => generic("Map", vec![string.clone(), string]),
        5 => generic("ImmutableList", vec![string]),
        6 => TypeRef::class(interner.intern("List")),
        7 => generic("Optional", vec![string]),
        8 => TypeRef::class(interner.intern("OptionalInt")),
        _ => generic("Map", vec![string]),
    }
}

fn params_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..ACCESSORS.len(), 0..10usize), 0..=FIELDS.len())
}

fn distinct(names: &[Name]) -> bool {
    let mut seen = names.to_vec();
    seen.sort_unstable_by_key(|n| n.raw());
    seen.dedup();
    seen.len() == names.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn classification_is_pure(shape in type_shape_strategy()) {
        let interner = StringInterner::new();
        let ty = build_type(&shape, &interner);
        let first = classify_type(&ty, &interner);
        let second = classify_type(&ty, &interner);
        prop_assert_eq!(&first, &second);

        // same answer from an unrelated interner
        let other = StringInterner::new();
        other.intern("padding");
        let ty_elsewhere = build_type(&shape, &other);
        prop_assert_eq!(tag(&first), tag(&classify_type(&ty_elsewhere, &other)));
    }

    #[test]
    fn classification_is_consistent(shape in type_shape_strategy()) {
        let interner = StringInterner::new();
        let ty = build_type(&shape, &interner);
        match classify_type(&ty, &interner) {
            Variant::Plain => {}
            Variant::OptionalLike(shape) => {
                prop_assert!(!ty.has_wildcard_args());
                if shape.wrapper_kind.primitive_inner().is_some() {
                    prop_assert!(ty.args().is_empty());
                    prop_assert!(!shape.double_wrapped);
                }
            }
            Variant::CollectionLike(shape) => {
                prop_assert_eq!(
                    shape.degenerate,
                    ty.args().len() != shape.kind.arity() || ty.has_wildcard_args()
                );
                if !shape.degenerate {
                    prop_assert_eq!(shape.element_types.len(), shape.kind.arity());
                }
            }
        }
    }

    #[test]
    fn naming_is_total(params in params_strategy(), fluent in any::<bool>(), bean in any::<bool>()) {
        let interner = StringInterner::new();
        let descs: Vec<ParameterDescriptor> = params
            .iter()
            .enumerate()
            .map(|(i, &(accessor, ty))| {
                ParameterDescriptor::new(
                    interner.intern(FIELDS[i]),
                    param_type(ty, &interner),
                    interner.intern(ACCESSORS[accessor]),
                )
            })
            .collect();
        let options = TypeOptions {
            setter_style: if fluent { SetterStyle::Fluent } else { SetterStyle::Prefixed },
            bean_accessors: bean,
            reuse_pool: true,
        };

        let variants = descs.iter().map(|d| classify(d, &interner)).collect();
        let resolution = resolve(&descs, variants, &options, &interner).unwrap();
        prop_assert!(resolution.scheme.is_total());

        let build = interner.intern("build");
        let conflicts = reserved_conflicts(&resolution.scheme, &[build]);
        if conflicts.is_empty() {
            let validated = ValidatedType {
                name: interner.intern("Sample"),
                visibility: forge_ir::Visibility::Public,
                generics: Vec::new(),
                params: descs,
                hook: None,
                options,
                span: forge_ir::Span::DUMMY,
            };
            let spec = assemble(&validated, resolution, &SynthConfig::default(), &interner).unwrap();
            let fields: Vec<Name> = spec.fields.iter().map(|f| f.name).collect();
            prop_assert!(distinct(&fields));
            prop_assert!(distinct(&spec.method_names()));
            prop_assert_eq!(spec.method_names().iter().filter(|&&n| n == build).count(), 1);
        } else {
            prop_assert!(conflicts.iter().all(|c| c.name == build));
        }
    }
}
