//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use forge_ir::{PrimitiveKind, SharedInterner, TypeRef, ValueTypeDecl};
use forge_synth::{BuilderSpec, GenerationPass, SynthConfig};

/// Synthesize the builder for `decl`, panicking on any error diagnostic.
pub(crate) fn spec_for(
    interner: &SharedInterner,
    decl: ValueTypeDecl,
    config: &SynthConfig,
) -> Arc<BuilderSpec> {
    let output = GenerationPass::new(config, interner).run(&[decl]);
    assert!(!output.has_errors(), "{:?}", output.diagnostics);
    output.specs.into_iter().next().expect("one spec")
}

pub(crate) fn ty(interner: &SharedInterner, class: &str, args: &[TypeRef]) -> TypeRef {
    TypeRef::generic(interner.intern(class), args.iter().cloned())
}

pub(crate) fn string(interner: &SharedInterner) -> TypeRef {
    TypeRef::class(interner.intern("String"))
}

pub(crate) fn int() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Int)
}

/// `Item(count: int, name: String, tags: Set<String>, nickname: Optional<String>,
/// attrs: Map<String, int>)`, all with plain accessors.
pub(crate) fn item(interner: &SharedInterner) -> ValueTypeDecl {
    let string = string(interner);
    ValueTypeDecl::new(interner.intern("Item"))
        .with_component(interner.intern("count"), int())
        .with_component(interner.intern("name"), string.clone())
        .with_component(
            interner.intern("tags"),
            ty(interner, "Set", &[string.clone()]),
        )
        .with_component(
            interner.intern("nickname"),
            ty(interner, "Optional", &[string.clone()]),
        )
        .with_component(
            interner.intern("attrs"),
            ty(interner, "Map", &[string, TypeRef::class(interner.intern("Integer"))]),
        )
}
