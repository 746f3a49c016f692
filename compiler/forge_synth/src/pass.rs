//! The generation pass.
//!
//! Runs validation and synthesis for every declaration in a batch:
//! 1. Validate (E1xxx; rejects only that type)
//! 2. Classify parameters (E3001 for degenerate collections)
//! 3. Resolve collisions (E3002, E3003)
//! 4. Check reserved members (E2001; rejects only that type)
//! 5. Assemble the `BuilderSpec`
//!
//! An internal `SynthError` is reported as E9001 and halts the pass: the
//! remaining declarations are not processed.

use std::sync::Arc;

use forge_diagnostic::queue::internal_error;
use forge_diagnostic::{
    Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorGuaranteed,
};
use forge_ir::{Name, StringInterner, ValueTypeDecl};

use crate::assemble::BUILD_METHOD;
use crate::{
    assemble, classify, reserved_conflicts, resolve, validate, BuilderSpec, Resolution,
    SynthConfig, SynthError, ValidatedType, Variant,
};

/// Result of synthesizing one declaration.
#[derive(Clone, Debug)]
pub enum TypeOutcome {
    Generated(Arc<BuilderSpec>),
    /// Validation or naming rejected the type; diagnostics were emitted.
    Rejected(ErrorGuaranteed),
}

/// Synthesize the builder for one declaration.
///
/// User-facing problems land in `queue`; only internal failures are `Err`.
pub fn synthesize(
    decl: &ValueTypeDecl,
    config: &SynthConfig,
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
) -> Result<TypeOutcome, SynthError> {
    let validated = match validate(decl, config, interner, queue) {
        Ok(validated) => validated,
        Err(guarantee) => return Ok(TypeOutcome::Rejected(guarantee)),
    };

    let variants: Vec<Variant> = validated
        .params
        .iter()
        .map(|desc| classify(desc, interner))
        .collect();
    report_degenerate(&validated, &variants, interner, queue);

    let resolution = resolve(&validated.params, variants, &validated.options, interner)?;
    report_resolution(&validated, &resolution, interner, queue);

    let build = interner.try_intern(BUILD_METHOD)?;
    let conflicts = reserved_conflicts(&resolution.scheme, &[build]);
    let rejected = conflicts.into_iter().fold(None, |_, conflict| {
        let desc = &validated.params[conflict.param];
        Some(
            queue.emit_error(
                Diagnostic::error(ErrorCode::E2001)
                    .with_message(format!(
                        "`{}` of `{}` would generate `{}`, a reserved builder member",
                        interner.lookup(desc.name),
                        interner.lookup(validated.name),
                        interner.lookup(conflict.name),
                    ))
                    .with_label(desc.span, "parameter declared here")
                    .with_suggestion("rename the parameter or its accessor"),
            ),
        )
    });
    if let Some(guarantee) = rejected {
        return Ok(TypeOutcome::Rejected(guarantee));
    }

    let spec = assemble(&validated, resolution, config, interner)?;
    Ok(TypeOutcome::Generated(Arc::new(spec)))
}

fn report_degenerate(
    validated: &ValidatedType,
    variants: &[Variant],
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
) {
    for (desc, variant) in validated.params.iter().zip(variants) {
        if let Variant::CollectionLike(shape) = variant {
            if shape.degenerate {
                queue.add(
                    Diagnostic::warning(ErrorCode::E3001)
                        .with_message(format!(
                            "no accumulators for `{}`: `{}` is raw, wildcarded or has the wrong number of type arguments",
                            interner.lookup(desc.name),
                            desc.ty.display(interner),
                        ))
                        .with_label(desc.span, "declared here")
                        .with_note("the parameter can only be set as a whole"),
                );
            }
        }
    }
}

fn report_resolution(
    validated: &ValidatedType,
    resolution: &Resolution,
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
) {
    let type_name = interner.lookup(validated.name);
    let list = |names: &[Name]| {
        names
            .iter()
            .map(|n| format!("`{}`", interner.lookup(*n)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if resolution.accumulators_disabled {
        queue.add(
            Diagnostic::warning(ErrorCode::E3002)
                .with_message(format!(
                    "collection accumulators of `{type_name}` disabled by a naming collision"
                ))
                .with_label(validated.span, "in this value type")
                .with_note(format!(
                    "colliding names: {}",
                    list(&resolution.accumulator_collisions)
                )),
        );
    }
    if resolution.setters_fell_back {
        queue.add(
            Diagnostic::warning(ErrorCode::E3003)
                .with_message(format!(
                    "setters of `{type_name}` fell back to parameter identifiers"
                ))
                .with_label(validated.span, "in this value type")
                .with_note(format!(
                    "colliding names: {}",
                    list(&resolution.setter_collisions)
                )),
        );
    }
}

/// Everything a pass produced.
#[derive(Clone, Debug, Default)]
pub struct GenerationOutput {
    /// Generated builders, in declaration order.
    pub specs: Vec<Arc<BuilderSpec>>,
    /// Types rejected by validation or naming.
    pub rejected: Vec<Name>,
    /// Sorted diagnostics from every processed type.
    pub diagnostics: Vec<Diagnostic>,
    /// An internal error stopped the pass early.
    pub halted: bool,
    /// Number of declarations processed (including the one that halted).
    pub processed: usize,
}

impl GenerationOutput {
    pub fn spec(&self, value_type: Name) -> Option<&Arc<BuilderSpec>> {
        self.specs.iter().find(|s| s.value_type == value_type)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.diagnostics.iter().map(|d| d.code)
    }
}

/// Batch driver over a set of declarations.
pub struct GenerationPass<'a> {
    config: &'a SynthConfig,
    interner: &'a StringInterner,
    diagnostics: DiagnosticConfig,
}

impl<'a> GenerationPass<'a> {
    pub fn new(config: &'a SynthConfig, interner: &'a StringInterner) -> Self {
        GenerationPass {
            config,
            interner,
            diagnostics: DiagnosticConfig::default(),
        }
    }

    #[must_use]
    pub fn with_diagnostic_config(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Run the pass over `decls`.
    #[tracing::instrument(level = "debug", skip_all, fields(types = decls.len()))]
    pub fn run(&self, decls: &[ValueTypeDecl]) -> GenerationOutput {
        let mut queue = DiagnosticQueue::with_config(self.diagnostics.clone());
        let mut output = GenerationOutput::default();

        for decl in decls {
            output.processed += 1;
            match synthesize(decl, self.config, self.interner, &mut queue) {
                Ok(TypeOutcome::Generated(spec)) => output.specs.push(spec),
                Ok(TypeOutcome::Rejected(_)) => output.rejected.push(decl.name),
                Err(err) => {
                    let type_name = self.interner.lookup(decl.name);
                    tracing::debug!(%err, type_name, "internal error, halting pass");
                    queue.add(internal_error(type_name, decl.span, &err));
                    output.halted = true;
                    break;
                }
            }
        }

        output.diagnostics = queue.flush();
        tracing::debug!(
            generated = output.specs.len(),
            rejected = output.rejected.len(),
            halted = output.halted,
            "generation pass complete"
        );
        output
    }
}

#[cfg(test)]
mod tests;
