//! Builder synthesis for immutable value types.
//!
//! Given a validated value type, this crate derives the complete member set
//! of its mutable builder companion:
//!
//! ```text
//! ValueTypeDecl ──validate──▶ ParameterDescriptor* ──classify──▶ Variant*
//!      ──collision::resolve──▶ NamingScheme ──assemble──▶ BuilderSpec
//! ```
//!
//! [`GenerationPass`] drives the whole pipeline over a batch of declarations,
//! collecting diagnostics per type. Emitting text from a [`BuilderSpec`] is the
//! consumer's job.

mod accumulate;
mod assemble;
mod classify;
mod collision;
mod config;
mod error;
mod naming;
mod optional;
mod pass;
mod spec;
mod validate;
mod variant;

pub use accumulate::{accumulator_plan, AccumulatorPlan};
pub use assemble::assemble;
pub use classify::{classify, classify_type};
pub use collision::{reserved_conflicts, resolve, ReservedConflict, Resolution};
pub use config::{SetterStyle, SynthConfig, TypeOptions};
pub use error::SynthError;
pub use naming::{capitalize, property_name, AccumulatorNames, NameEntry, NamingScheme};
pub use optional::{optional_plan, OptionalPlan};
pub use pass::{synthesize, GenerationOutput, GenerationPass, TypeOutcome};
pub use spec::{
    BuilderParam, BuilderSpec, FieldRole, FieldSpec, MethodKind, MethodParam, MethodSpec,
    PoolSpec, ReturnSpec, SeedCopy, SeedSpec,
};
pub use validate::{validate, ValidatedType};
pub use variant::{
    CollectionFamily, CollectionKind, CollectionShape, Flavor, OptionalShape, Variant, WrapperKind,
};
