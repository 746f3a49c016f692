//! The three parameter shapes and the closed family tables behind them.

use forge_ir::{PrimitiveKind, TypeRef};

/// Abstract collection kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl CollectionKind {
    /// Number of type arguments a well-formed instance carries.
    pub const fn arity(self) -> usize {
        match self {
            CollectionKind::List | CollectionKind::Set => 1,
            CollectionKind::Map => 2,
        }
    }

    /// Whether accumulation is keyed (`putIn`) rather than element-wise (`addTo`).
    pub const fn is_keyed(self) -> bool {
        matches!(self, CollectionKind::Map)
    }
}

/// How a family's accumulator is obtained.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Flavor {
    /// Accumulate into a mutable copy, freeze with an unmodifiable copy.
    PlainCopy,
    /// The family ships its own builder type.
    BuilderBearing,
}

/// Recognized collection families.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CollectionFamily {
    List,
    Set,
    Map,
    ImmutableList,
    ImmutableSet,
    ImmutableMap,
}

impl CollectionFamily {
    pub const ALL: [CollectionFamily; 6] = [
        CollectionFamily::List,
        CollectionFamily::Set,
        CollectionFamily::Map,
        CollectionFamily::ImmutableList,
        CollectionFamily::ImmutableSet,
        CollectionFamily::ImmutableMap,
    ];

    /// Look a family up by its raw class name.
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            "List" => Some(CollectionFamily::List),
            "Set" => Some(CollectionFamily::Set),
            "Map" => Some(CollectionFamily::Map),
            "ImmutableList" => Some(CollectionFamily::ImmutableList),
            "ImmutableSet" => Some(CollectionFamily::ImmutableSet),
            "ImmutableMap" => Some(CollectionFamily::ImmutableMap),
            _ => None,
        }
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            CollectionFamily::List => "List",
            CollectionFamily::Set => "Set",
            CollectionFamily::Map => "Map",
            CollectionFamily::ImmutableList => "ImmutableList",
            CollectionFamily::ImmutableSet => "ImmutableSet",
            CollectionFamily::ImmutableMap => "ImmutableMap",
        }
    }

    pub const fn kind(self) -> CollectionKind {
        match self {
            CollectionFamily::List | CollectionFamily::ImmutableList => CollectionKind::List,
            CollectionFamily::Set | CollectionFamily::ImmutableSet => CollectionKind::Set,
            CollectionFamily::Map | CollectionFamily::ImmutableMap => CollectionKind::Map,
        }
    }

    pub const fn flavor(self) -> Flavor {
        match self {
            CollectionFamily::List | CollectionFamily::Set | CollectionFamily::Map => {
                Flavor::PlainCopy
            }
            CollectionFamily::ImmutableList
            | CollectionFamily::ImmutableSet
            | CollectionFamily::ImmutableMap => Flavor::BuilderBearing,
        }
    }

    /// Class name of the accumulator used for partial contents.
    pub const fn accumulator_class(self) -> &'static str {
        match self {
            CollectionFamily::List => "MutableList",
            CollectionFamily::Set => "MutableSet",
            CollectionFamily::Map => "MutableMap",
            CollectionFamily::ImmutableList => "ImmutableList.Builder",
            CollectionFamily::ImmutableSet => "ImmutableSet.Builder",
            CollectionFamily::ImmutableMap => "ImmutableMap.Builder",
        }
    }
}

/// Optional wrapper kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WrapperKind {
    /// `Optional<T>`
    Generic,
    /// `OptionalInt`
    PrimitiveInt,
    /// `OptionalLong`
    PrimitiveLong,
    /// `OptionalDouble`
    PrimitiveDouble,
}

impl WrapperKind {
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            "Optional" => Some(WrapperKind::Generic),
            "OptionalInt" => Some(WrapperKind::PrimitiveInt),
            "OptionalLong" => Some(WrapperKind::PrimitiveLong),
            "OptionalDouble" => Some(WrapperKind::PrimitiveDouble),
            _ => None,
        }
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            WrapperKind::Generic => "Optional",
            WrapperKind::PrimitiveInt => "OptionalInt",
            WrapperKind::PrimitiveLong => "OptionalLong",
            WrapperKind::PrimitiveDouble => "OptionalDouble",
        }
    }

    /// The fixed inner primitive of a specialized wrapper.
    pub const fn primitive_inner(self) -> Option<PrimitiveKind> {
        match self {
            WrapperKind::Generic => None,
            WrapperKind::PrimitiveInt => Some(PrimitiveKind::Int),
            WrapperKind::PrimitiveLong => Some(PrimitiveKind::Long),
            WrapperKind::PrimitiveDouble => Some(PrimitiveKind::Double),
        }
    }
}

/// Payload of an `OptionalLike` parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionalShape {
    pub wrapper_kind: WrapperKind,
    /// The wrapped type.
    pub inner: TypeRef,
    /// The inner type is itself optional, or a free type variable.
    pub double_wrapped: bool,
}

/// Payload of a `CollectionLike` parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CollectionShape {
    pub kind: CollectionKind,
    pub family: CollectionFamily,
    /// Concrete type arguments; complete only when not degenerate.
    pub element_types: Vec<TypeRef>,
    /// Wildcarded, raw or wrong-arity. No accumulators are generated, but an
    /// unset value still resolves to the kind's empty collection.
    pub degenerate: bool,
}

/// Classification of one construction parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    Plain,
    OptionalLike(OptionalShape),
    CollectionLike(CollectionShape),
}

impl Variant {
    /// Whether accumulator members are generated for this parameter.
    pub fn has_accumulators(&self) -> bool {
        matches!(self, Variant::CollectionLike(shape) if !shape.degenerate)
    }

    /// The same classification with any collection forced degenerate.
    #[must_use]
    pub fn degraded(self) -> Variant {
        match self {
            Variant::CollectionLike(shape) => Variant::CollectionLike(CollectionShape {
                degenerate: true,
                ..shape
            }),
            other => other,
        }
    }

    pub fn as_optional(&self) -> Option<&OptionalShape> {
        match self {
            Variant::OptionalLike(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionShape> {
        match self {
            Variant::CollectionLike(shape) => Some(shape),
            _ => None,
        }
    }
}
