#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::SetterStyle;
use forge_ir::{HookDecl, HookReturn, PrimitiveKind, Span, TypeArg, TypeRef, Visibility};
use pretty_assertions::assert_eq;

fn string(interner: &StringInterner) -> TypeRef {
    TypeRef::class(interner.intern("String"))
}

fn simple(interner: &StringInterner, name: &str) -> ValueTypeDecl {
    ValueTypeDecl::new(interner.intern(name))
        .with_component(interner.intern("id"), TypeRef::primitive(PrimitiveKind::Long))
        .with_component(interner.intern("label"), string(interner))
}

#[test]
fn generates_every_valid_type() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let decls = vec![simple(&interner, "A"), simple(&interner, "B")];

    let output = GenerationPass::new(&config, &interner).run(&decls);
    assert_eq!(output.specs.len(), 2);
    assert!(output.diagnostics.is_empty());
    assert!(!output.halted);
    assert_eq!(output.processed, 2);
    assert!(output.spec(interner.intern("B")).is_some());
}

#[test]
fn validation_failure_is_isolated() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let mut broken = simple(&interner, "Broken");
    broken.constructor.visibility = Visibility::Private;
    let decls = vec![
        simple(&interner, "Before"),
        broken,
        simple(&interner, "After"),
    ];

    let output = GenerationPass::new(&config, &interner).run(&decls);
    assert_eq!(output.specs.len(), 2);
    assert_eq!(output.rejected, vec![interner.intern("Broken")]);
    assert_eq!(output.codes().collect::<Vec<_>>(), vec![ErrorCode::E1002]);
    assert!(output.has_errors());
    assert!(!output.halted);
}

#[test]
fn internal_error_halts_the_pass() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    // Two constructor parameters share a name; validation accepts it
    // (each finds an accessor) but synthesis cannot name them.
    let dup = interner.intern("id");
    let twin = ValueTypeDecl::new(interner.intern("Twin"))
        .with_component(dup, string(&interner))
        .with_property(dup, interner.intern("getId"), string(&interner));
    let decls = vec![simple(&interner, "First"), twin, simple(&interner, "Never")];

    let output = GenerationPass::new(&config, &interner).run(&decls);
    assert!(output.halted);
    assert_eq!(output.processed, 2);
    assert_eq!(output.specs.len(), 1);
    assert!(output.spec(interner.intern("Never")).is_none());
    assert_eq!(output.codes().collect::<Vec<_>>(), vec![ErrorCode::E9001]);
}

#[test]
fn reserved_name_rejects_only_that_type() {
    let interner = StringInterner::new();
    let config = SynthConfig {
        setter_style: SetterStyle::Fluent,
        ..SynthConfig::default()
    };
    let bad = ValueTypeDecl::new(interner.intern("Job"))
        .with_component(interner.intern("build"), string(&interner));
    let decls = vec![bad, simple(&interner, "Fine")];

    let output = GenerationPass::new(&config, &interner).run(&decls);
    assert_eq!(output.rejected, vec![interner.intern("Job")]);
    assert_eq!(output.specs.len(), 1);
    assert_eq!(output.codes().collect::<Vec<_>>(), vec![ErrorCode::E2001]);
}

#[test]
fn in_use_parameter_generates_for_pooled_type() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let decl = ValueTypeDecl::new(interner.intern("Lease"))
        .with_component(interner.intern("inUse"), TypeRef::primitive(PrimitiveKind::Boolean));

    let output = GenerationPass::new(&config, &interner).run(&[decl]);
    assert!(output.diagnostics.is_empty());
    assert!(output.rejected.is_empty());
    let spec = output.spec(interner.intern("Lease")).unwrap();
    assert!(spec.reusable);
    assert!(spec.field(interner.intern("inUse")).is_some());
    assert_eq!(
        spec.methods_named(interner.intern("setInUse")).count(),
        1
    );
}

#[test]
fn degenerate_collection_warns() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let mut decl = ValueTypeDecl::new(interner.intern("Bag")).with_component(
        interner.intern("items"),
        TypeRef::with_args(interner.intern("List"), vec![TypeArg::wildcard()]),
    );
    decl.constructor.params[0].span = Span::new(10, 20);

    let output = GenerationPass::new(&config, &interner).run(&[decl]);
    assert_eq!(output.specs.len(), 1);
    assert!(!output.has_errors());
    let warning = &output.diagnostics[0];
    assert_eq!(warning.code, ErrorCode::E3001);
    assert_eq!(warning.primary_span(), Some(Span::new(10, 20)));
    assert!(warning.message.contains("List<?>"));
}

#[test]
fn collision_passes_warn() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    // accessors `name` and `getName` both produce `setName`
    let decl = ValueTypeDecl::new(interner.intern("Person"))
        .with_component(interner.intern("name"), string(&interner))
        .with_component(interner.intern("getName"), string(&interner));

    let output = GenerationPass::new(&config, &interner).run(&[decl]);
    assert_eq!(output.specs.len(), 1);
    assert_eq!(output.codes().collect::<Vec<_>>(), vec![ErrorCode::E3003]);
    let spec = &output.specs[0];
    let setters: Vec<_> = spec
        .seed
        .copies
        .iter()
        .map(|copy| interner.lookup(copy.setter))
        .collect();
    assert_eq!(setters, vec!["name", "getName"]);
    assert_eq!(
        output.diagnostics[0].notes,
        vec!["colliding names: `setName`".to_owned()]
    );
}

#[test]
fn accumulator_collision_warns() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let decl = ValueTypeDecl::new(interner.intern("Inventory"))
        .with_component(
            interner.intern("items"),
            TypeRef::generic(interner.intern("List"), [string(&interner)]),
        )
        .with_component(interner.intern("itemsBuilder"), string(&interner));

    let output = GenerationPass::new(&config, &interner).run(&[decl]);
    assert_eq!(output.codes().collect::<Vec<_>>(), vec![ErrorCode::E3002]);
    let spec = &output.specs[0];
    assert!(spec.params.iter().all(|p| p.accumulator.is_none()));
}

#[test]
fn synthesize_reports_rejection_with_proof() {
    let interner = StringInterner::new();
    let mut decl = simple(&interner, "Broken");
    decl.hooks.push(HookDecl::new(interner.intern("a"), HookReturn::Void));
    decl.hooks.push(HookDecl::new(interner.intern("b"), HookReturn::Void));
    let mut queue = DiagnosticQueue::new();

    let outcome = synthesize(&decl, &SynthConfig::default(), &interner, &mut queue).unwrap();
    assert!(matches!(outcome, TypeOutcome::Rejected(_)));
    assert!(queue.has_errors().is_some());
}

#[test]
fn error_limit_applies_across_types() {
    let interner = StringInterner::new();
    let config = SynthConfig::default();
    let decls: Vec<_> = (0..5)
        .map(|i| {
            let mut decl = simple(&interner, &format!("T{i}"));
            decl.constructor.visibility = Visibility::Private;
            decl
        })
        .collect();

    let output = GenerationPass::new(&config, &interner)
        .with_diagnostic_config(DiagnosticConfig {
            error_limit: 2,
            deduplicate: true,
        })
        .run(&decls);
    assert_eq!(output.rejected.len(), 5);
    assert_eq!(output.diagnostics.len(), 2);
}
