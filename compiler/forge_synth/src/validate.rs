//! Declaration validation.
//!
//! Turns a supplier's `ValueTypeDecl` into `ParameterDescriptor`s. Every
//! problem is reported, not just the first, and any error rejects the whole
//! type. Sibling types are unaffected.

use forge_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use forge_ir::{
    AccessorDecl, Directive, Name, ParameterDescriptor, PostBuildHook, Span, StringInterner,
    ValueTypeDecl, Visibility,
};

use crate::{capitalize, SynthConfig, TypeOptions};

/// A declaration that passed validation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValidatedType {
    pub name: Name,
    pub visibility: Visibility,
    pub generics: Vec<Name>,
    /// Construction parameters in constructor order.
    pub params: Vec<ParameterDescriptor>,
    pub hook: Option<PostBuildHook>,
    /// Session settings with the type's directives applied.
    pub options: TypeOptions,
    pub span: Span,
}

/// Validate one declaration, reporting problems into `queue`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(value_type = interner.lookup(decl.name))
)]
pub fn validate(
    decl: &ValueTypeDecl,
    config: &SynthConfig,
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
) -> Result<ValidatedType, ErrorGuaranteed> {
    let type_name = interner.lookup(decl.name);
    let mut errors = Vec::new();

    check_directives(decl, type_name, &mut errors);

    let ctor = &decl.constructor;
    if ctor.visibility == Visibility::Private {
        errors.push(
            Diagnostic::error(ErrorCode::E1002)
                .with_message(format!(
                    "the canonical constructor of `{type_name}` is private"
                ))
                .with_label(ctor.span, "declared private here")
                .with_suggestion("make the constructor at least package-visible"),
        );
    }

    if ctor.params.len() != decl.accessors.len() {
        errors.push(
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!(
                    "`{type_name}` has {} constructor parameters but {} accessors",
                    ctor.params.len(),
                    decl.accessors.len()
                ))
                .with_label(ctor.span, "canonical constructor")
                .with_secondary_label(decl.span, "in this value type"),
        );
    }

    let mut params = Vec::with_capacity(ctor.params.len());
    for param in &ctor.params {
        let field = interner.lookup(param.name);
        match find_accessor(&decl.accessors, field, interner) {
            Some(accessor) => params.push(ParameterDescriptor {
                name: param.name,
                ty: param.ty.clone(),
                accessor: accessor.name,
                visibility: decl.visibility,
                span: param.span,
            }),
            None => {
                let cap = capitalize(field);
                errors.push(
                    Diagnostic::error(ErrorCode::E1003)
                        .with_message(format!(
                            "constructor parameter `{field}` of `{type_name}` has no accessor"
                        ))
                        .with_label(param.span, "parameter declared here")
                        .with_note(format!("looked for `{field}`, `get{cap}` and `is{cap}`")),
                );
            }
        }
    }

    if let [first, second, ..] = decl.hooks.as_slice() {
        errors.push(
            Diagnostic::error(ErrorCode::E1005)
                .with_message(format!(
                    "`{type_name}` declares {} post-build hooks",
                    decl.hooks.len()
                ))
                .with_label(second.span, "second hook declared here")
                .with_secondary_label(first.span, "first hook declared here")
                .with_note("at most one post-build hook is allowed"),
        );
    }
    for hook in &decl.hooks {
        if hook.param_count > 0 {
            errors.push(
                Diagnostic::error(ErrorCode::E1006)
                    .with_message(format!(
                        "post-build hook `{}` takes {} parameters",
                        interner.lookup(hook.name),
                        hook.param_count
                    ))
                    .with_label(hook.span, "declared here")
                    .with_suggestion("post-build hooks must take no parameters"),
            );
        }
    }

    let count = errors.len();
    let rejected = errors
        .into_iter()
        .fold(None, |_, diag| Some(queue.emit_error(diag)));
    if let Some(guarantee) = rejected {
        tracing::debug!(errors = count, "declaration rejected");
        return Err(guarantee);
    }

    Ok(ValidatedType {
        name: decl.name,
        visibility: decl.visibility,
        generics: decl.generics.clone(),
        params,
        hook: decl.hooks.first().map(|hook| PostBuildHook {
            name: hook.name,
            throws: hook.throws.clone(),
            returns: hook.returns,
        }),
        options: config.options_for(decl),
        span: decl.span,
    })
}

/// Report each directive that appears together with its opposite, once per pair.
fn check_directives(decl: &ValueTypeDecl, type_name: &str, errors: &mut Vec<Diagnostic>) {
    for directive in [Directive::ReuseBuilders, Directive::BeanAccessors] {
        let opposite = directive.opposite();
        let used = decl.directives.iter().find(|d| d.directive == directive);
        let other = decl.directives.iter().find(|d| d.directive == opposite);
        if let (Some(used), Some(other)) = (used, other) {
            errors.push(
                Diagnostic::error(ErrorCode::E1004)
                    .with_message(format!(
                        "`{type_name}` is marked both `{}` and `{}`",
                        directive.as_str(),
                        opposite.as_str()
                    ))
                    .with_label(other.span, "conflicting directive")
                    .with_secondary_label(used.span, "first directive"),
            );
        }
    }
}

/// Accessor for parameter `field`: `field`, then `getField`, then `isField`.
fn find_accessor<'a>(
    accessors: &'a [AccessorDecl],
    field: &str,
    interner: &StringInterner,
) -> Option<&'a AccessorDecl> {
    let cap = capitalize(field);
    let candidates = [field.to_owned(), format!("get{cap}"), format!("is{cap}")];
    candidates.iter().find_map(|candidate| {
        accessors
            .iter()
            .find(|accessor| interner.lookup(accessor.name) == candidate.as_str())
    })
}
