//! Semantic types of construction parameters.
//!
//! `TypeRef` is the normalized form the supplier produces from the host type
//! system: primitives, nominal classes with (possibly wildcarded) type
//! arguments, and free type variables. A class whose family is generic but
//! carries no arguments is a *raw* type.

use std::fmt;

use crate::{Name, StringLookup};

/// Primitive (unboxed) types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Keyword spelling of the primitive.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Whether values of this primitive are integral.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long
        )
    }
}

/// A semantic type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    /// A primitive type: `int`, `boolean`, ...
    Primitive(PrimitiveKind),

    /// A nominal class type with optional type arguments.
    /// Examples: `String`, `List<String>`, `Map<K, ? extends V>`, raw `List`
    Class {
        /// The class name (interned).
        name: Name,
        /// Type arguments, empty if non-generic or raw.
        args: Vec<TypeArg>,
    },

    /// A free type variable, e.g. the `T` of a generic value type.
    Var(Name),
}

/// A type argument: either a concrete type or a wildcard.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeArg {
    /// A concrete type argument.
    Type(TypeRef),
    /// A wildcard `?`, optionally with an upper bound (`? extends B`).
    Wildcard { bound: Option<Box<TypeRef>> },
}

impl TypeRef {
    /// Create a primitive type.
    #[inline]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }

    /// Create a class type without type arguments.
    #[inline]
    pub fn class(name: Name) -> Self {
        TypeRef::Class {
            name,
            args: Vec::new(),
        }
    }

    /// Create a class type whose arguments are all concrete types.
    pub fn generic(name: Name, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Class {
            name,
            args: args.into_iter().map(TypeArg::Type).collect(),
        }
    }

    /// Create a class type from arbitrary type arguments.
    #[inline]
    pub fn with_args(name: Name, args: Vec<TypeArg>) -> Self {
        TypeRef::Class { name, args }
    }

    /// Create a type variable.
    #[inline]
    pub fn var(name: Name) -> Self {
        TypeRef::Var(name)
    }

    /// The class name, if this is a class type.
    pub fn class_name(&self) -> Option<Name> {
        match self {
            TypeRef::Class { name, .. } => Some(*name),
            TypeRef::Primitive(_) | TypeRef::Var(_) => None,
        }
    }

    /// Type arguments (empty for primitives, variables and raw classes).
    pub fn args(&self) -> &[TypeArg] {
        match self {
            TypeRef::Class { args, .. } => args,
            TypeRef::Primitive(_) | TypeRef::Var(_) => &[],
        }
    }

    /// The primitive kind, if this is a primitive type.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeRef::Primitive(kind) => Some(*kind),
            TypeRef::Class { .. } | TypeRef::Var(_) => None,
        }
    }

    /// Whether this is a free type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, TypeRef::Var(_))
    }

    /// Whether any direct type argument is a wildcard.
    pub fn has_wildcard_args(&self) -> bool {
        self.args().iter().any(TypeArg::is_wildcard)
    }

    /// Render this type through an interner.
    pub fn display<'a, I: StringLookup>(&'a self, interner: &'a I) -> TypeDisplay<'a, I> {
        TypeDisplay { ty: self, interner }
    }
}

impl TypeArg {
    /// Create an unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        TypeArg::Wildcard { bound: None }
    }

    /// Create a bounded wildcard `? extends bound`.
    pub fn wildcard_extends(bound: TypeRef) -> Self {
        TypeArg::Wildcard {
            bound: Some(Box::new(bound)),
        }
    }

    /// Whether this argument is a wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeArg::Wildcard { .. })
    }

    /// The concrete type, if this argument is not a wildcard.
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            TypeArg::Type(ty) => Some(ty),
            TypeArg::Wildcard { .. } => None,
        }
    }
}

/// Display adapter pairing a type with an interner.
pub struct TypeDisplay<'a, I> {
    ty: &'a TypeRef,
    interner: &'a I,
}

impl<I: StringLookup> TypeDisplay<'_, I> {
    fn write_type(&self, f: &mut fmt::Formatter<'_>, ty: &TypeRef) -> fmt::Result {
        match ty {
            TypeRef::Primitive(kind) => f.write_str(kind.keyword()),
            TypeRef::Var(name) => f.write_str(self.interner.lookup(*name)),
            TypeRef::Class { name, args } => {
                f.write_str(self.interner.lookup(*name))?;
                if args.is_empty() {
                    return Ok(());
                }
                f.write_str("<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match arg {
                        TypeArg::Type(inner) => self.write_type(f, inner)?,
                        TypeArg::Wildcard { bound: None } => f.write_str("?")?,
                        TypeArg::Wildcard { bound: Some(bound) } => {
                            f.write_str("? extends ")?;
                            self.write_type(f, bound)?;
                        }
                    }
                }
                f.write_str(">")
            }
        }
    }
}

impl<I: StringLookup> fmt::Display for TypeDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_type(f, self.ty)
    }
}
