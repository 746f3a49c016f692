//! Validated construction parameters.

use crate::{HookReturn, Name, Span, TypeRef, Visibility};

/// One construction parameter of a value type, paired with its accessor.
///
/// Built once per value type by declaration validation and never mutated.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterDescriptor {
    /// Raw parameter identifier (also the builder field name).
    pub name: Name,
    pub ty: TypeRef,
    /// Name of the accessor that reads this parameter back.
    pub accessor: Name,
    /// Visibility of the declaring value type.
    pub visibility: Visibility,
    pub span: Span,
}

impl ParameterDescriptor {
    /// Create a public descriptor with a dummy span.
    pub fn new(name: Name, ty: TypeRef, accessor: Name) -> Self {
        ParameterDescriptor {
            name,
            ty,
            accessor,
            visibility: Visibility::Public,
            span: Span::DUMMY,
        }
    }
}

/// A validated post-build hook: zero arguments, at most one per value type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PostBuildHook {
    pub name: Name,
    /// Declared thrown error kinds, propagated through `build()`.
    pub throws: Vec<Name>,
    pub returns: HookReturn,
}
