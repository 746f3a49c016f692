//! Value-type declarations as handed over by the supplier.
//!
//! A `ValueTypeDecl` is the raw, unvalidated picture of one immutable value
//! type: its canonical constructor, its accessors, any post-build hook
//! candidates and the generation directives attached to it. Validation turns
//! it into [`ParameterDescriptor`](crate::ParameterDescriptor)s.

use crate::{Name, Span, TypeRef};

/// Visibility of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Visible inside the declaring package/module only.
    Package,
    Private,
}

/// One parameter of the canonical constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CtorParam {
    pub name: Name,
    pub ty: TypeRef,
    pub span: Span,
}

/// The canonical constructor of a value type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ConstructorDecl {
    pub visibility: Visibility,
    pub params: Vec<CtorParam>,
    pub span: Span,
}

/// A zero-argument accessor on the value type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AccessorDecl {
    pub name: Name,
    pub ty: TypeRef,
    pub span: Span,
}

/// What a post-build hook returns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HookReturn {
    /// The hook only validates; `build()` returns the constructed value.
    Void,
    /// The hook's return value becomes the result of `build()`.
    Value,
}

/// A method marked as post-build hook, before validation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HookDecl {
    pub name: Name,
    /// Number of declared parameters (must be zero).
    pub param_count: usize,
    /// Declared thrown error kinds.
    pub throws: Vec<Name>,
    pub returns: HookReturn,
    pub span: Span,
}

/// Generation directives attached to a value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Directive {
    /// Opt the builder into the per-thread reuse pool.
    ReuseBuilders,
    /// Keep the builder out of the reuse pool.
    NoReuseBuilders,
    /// Derive setter names from `getX`/`isX` accessors.
    BeanAccessors,
    /// Use accessor names verbatim for setter names.
    PlainAccessors,
}

impl Directive {
    /// The directive this one cannot be combined with.
    pub const fn opposite(self) -> Directive {
        match self {
            Directive::ReuseBuilders => Directive::NoReuseBuilders,
            Directive::NoReuseBuilders => Directive::ReuseBuilders,
            Directive::BeanAccessors => Directive::PlainAccessors,
            Directive::PlainAccessors => Directive::BeanAccessors,
        }
    }

    /// Spelling used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Directive::ReuseBuilders => "reuse_builders",
            Directive::NoReuseBuilders => "no_reuse_builders",
            Directive::BeanAccessors => "bean_accessors",
            Directive::PlainAccessors => "plain_accessors",
        }
    }
}

/// A directive together with where it was written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DirectiveUse {
    pub directive: Directive,
    pub span: Span,
}

/// Everything the supplier knows about one value type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueTypeDecl {
    pub name: Name,
    pub visibility: Visibility,
    /// Generic type parameter names, in declaration order.
    pub generics: Vec<Name>,
    pub constructor: ConstructorDecl,
    pub accessors: Vec<AccessorDecl>,
    pub hooks: Vec<HookDecl>,
    pub directives: Vec<DirectiveUse>,
    pub span: Span,
}

impl ValueTypeDecl {
    /// Create an empty public declaration.
    pub fn new(name: Name) -> Self {
        ValueTypeDecl {
            name,
            visibility: Visibility::Public,
            generics: Vec::new(),
            constructor: ConstructorDecl::default(),
            accessors: Vec::new(),
            hooks: Vec::new(),
            directives: Vec::new(),
            span: Span::DUMMY,
        }
    }

    /// Add a constructor parameter together with an accessor named `accessor`.
    #[must_use]
    pub fn with_property(mut self, name: Name, accessor: Name, ty: TypeRef) -> Self {
        self.constructor.params.push(CtorParam {
            name,
            ty: ty.clone(),
            span: Span::DUMMY,
        });
        self.accessors.push(AccessorDecl {
            name: accessor,
            ty,
            span: Span::DUMMY,
        });
        self
    }

    /// Add a constructor parameter whose accessor has the same name.
    #[must_use]
    pub fn with_component(self, name: Name, ty: TypeRef) -> Self {
        self.with_property(name, name, ty)
    }

    /// Add a generic type parameter.
    #[must_use]
    pub fn with_generic(mut self, name: Name) -> Self {
        self.generics.push(name);
        self
    }

    /// Add a post-build hook candidate.
    #[must_use]
    pub fn with_hook(mut self, hook: HookDecl) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Attach a directive.
    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(DirectiveUse {
            directive,
            span: Span::DUMMY,
        });
        self
    }

    /// Whether a directive is attached.
    pub fn has_directive(&self, directive: Directive) -> bool {
        self.directives.iter().any(|d| d.directive == directive)
    }
}

impl HookDecl {
    /// A zero-argument hook with no declared errors.
    pub fn new(name: Name, returns: HookReturn) -> Self {
        HookDecl {
            name,
            param_count: 0,
            throws: Vec::new(),
            returns,
            span: Span::DUMMY,
        }
    }

    /// Declare a thrown error kind.
    #[must_use]
    pub fn throwing(mut self, kind: Name) -> Self {
        self.throws.push(kind);
        self
    }
}
