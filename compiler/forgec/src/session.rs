//! Generation sessions.

use std::sync::Arc;

use forge_diagnostic::{Diagnostic, DiagnosticConfig};
use forge_eval::{BuilderInstance, EvalError, PoolContext, ValueTypeHost, Value};
use forge_ir::{SharedInterner, StringInterner, ValueTypeDecl};
use forge_synth::{BuilderSpec, GenerationOutput, GenerationPass, SynthConfig};

/// One generation run: interner, configuration and diagnostic limits.
#[derive(Clone, Default)]
pub struct Session {
    interner: SharedInterner,
    config: SynthConfig,
    diagnostics: DiagnosticConfig,
}

impl Session {
    pub fn new(config: SynthConfig) -> Self {
        Session {
            config,
            ..Session::default()
        }
    }

    #[must_use]
    pub fn with_diagnostic_config(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Run the generation pass over `decls`.
    #[tracing::instrument(level = "debug", skip_all, fields(types = decls.len()))]
    pub fn generate(&self, decls: &[ValueTypeDecl]) -> GenerationOutput {
        GenerationPass::new(&self.config, &self.interner)
            .with_diagnostic_config(self.diagnostics.clone())
            .run(decls)
    }

    /// A fresh, unpooled builder for `spec`.
    pub fn builder(&self, spec: &Arc<BuilderSpec>) -> BuilderInstance {
        BuilderInstance::new(Arc::clone(spec), self.interner.clone())
    }

    /// A builder for `spec` seeded from `existing`.
    pub fn builder_from(
        &self,
        spec: &Arc<BuilderSpec>,
        host: &dyn ValueTypeHost,
        existing: &Value,
    ) -> Result<BuilderInstance, EvalError> {
        BuilderInstance::from_value(Arc::clone(spec), self.interner.clone(), host, existing)
    }

    /// A reuse pool for the calling thread.
    pub fn pool(&self) -> PoolContext {
        PoolContext::new(self.interner.clone())
    }
}

/// Render diagnostics one per block, in the order given.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("diagnostics", &self.diagnostics)
            .field("names", &StringInterner::len(&self.interner))
            .finish()
    }
}
