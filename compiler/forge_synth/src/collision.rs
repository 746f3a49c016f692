//! Global collision resolution over the generated naming surface.
//!
//! Two all-or-nothing passes:
//!
//! 1. If any accumulator-derived name equals a name contributed by another
//!    parameter (field or method), every collection parameter is degraded
//!    (no accumulators at all).
//! 2. If setter names still collide, every setter falls back to its raw
//!    parameter identifier.
//!
//! Both passes are re-checked after either fires. Both flags only ever turn
//! on, so resolution finishes in at most three rounds.

use forge_ir::{Name, ParameterDescriptor, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{NameEntry, NamingScheme, SynthError, TypeOptions, Variant};

/// Outcome of collision resolution for one value type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Resolution {
    /// Classification after pass 1 (collections degraded if it fired).
    pub variants: Vec<Variant>,
    pub scheme: NamingScheme,
    /// Pass 1 fired.
    pub accumulators_disabled: bool,
    /// Pass 2 fired.
    pub setters_fell_back: bool,
    /// Names whose collision triggered pass 1, in first-seen order.
    pub accumulator_collisions: Vec<Name>,
    /// Names whose collision triggered pass 2, in first-seen order.
    pub setter_collisions: Vec<Name>,
}

/// A resolved name that lands on a reserved builder member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReservedConflict {
    /// Index of the offending parameter.
    pub param: usize,
    pub name: Name,
}

/// Resolve the naming scheme for `params`.
///
/// `variants` must be the classification of `params`, index for index.
#[tracing::instrument(level = "debug", skip_all, fields(params = params.len()))]
pub fn resolve(
    params: &[ParameterDescriptor],
    variants: Vec<Variant>,
    options: &TypeOptions,
    interner: &StringInterner,
) -> Result<Resolution, SynthError> {
    if variants.len() != params.len() {
        return Err(SynthError::SchemeMismatch {
            names: variants.len(),
            params: params.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for desc in params {
        if !seen.insert(desc.name) {
            return Err(SynthError::DuplicateParameter {
                name: interner.lookup(desc.name).to_owned(),
            });
        }
    }

    let mut variants = variants;
    let mut accumulators_disabled = false;
    let mut setters_fell_back = false;
    let mut accumulator_collisions = Vec::new();
    let mut setter_collisions = Vec::new();

    for _ in 0..3 {
        let entries = base_entries(params, &variants, options, setters_fell_back, interner)?;

        if !accumulators_disabled {
            let hits = collisions(&entries, true);
            if !hits.is_empty() {
                tracing::debug!(count = hits.len(), "accumulator names collide, degrading collections");
                variants = variants.into_iter().map(Variant::degraded).collect();
                accumulators_disabled = true;
                accumulator_collisions = hits;
                continue;
            }
        }

        if !setters_fell_back {
            let hits = collisions(&entries, false);
            if !hits.is_empty() {
                tracing::debug!(count = hits.len(), "setter names collide, using parameter identifiers");
                setters_fell_back = true;
                setter_collisions = hits;
                continue;
            }
        }

        let scheme = NamingScheme::new(entries);
        if !scheme.is_total() {
            break;
        }
        return Ok(Resolution {
            variants,
            scheme,
            accumulators_disabled,
            setters_fell_back,
            accumulator_collisions,
            setter_collisions,
        });
    }

    Err(SynthError::Unresolved {
        params: params.len(),
    })
}

fn base_entries(
    params: &[ParameterDescriptor],
    variants: &[Variant],
    options: &TypeOptions,
    raw_setters: bool,
    interner: &StringInterner,
) -> Result<Vec<NameEntry>, SynthError> {
    params
        .iter()
        .zip(variants)
        .map(|(desc, variant)| {
            let mut entry = NameEntry::base(desc, variant, options, interner)?;
            if raw_setters {
                entry.setter = entry.field;
            }
            Ok(entry)
        })
        .collect()
}

/// Names contributed by more than one parameter.
///
/// With `accumulator_only`, field and method names form one pool and a name
/// counts only when at least one occurrence is accumulator-derived. Otherwise
/// fields and methods are checked as separate namespaces.
fn collisions(entries: &[NameEntry], accumulator_only: bool) -> Vec<Name> {
    let merged: [fn(&NameEntry) -> Vec<(Name, bool)>; 1] =
        [|e| e.field_names().chain(e.method_names()).collect()];
    let separate: [fn(&NameEntry) -> Vec<(Name, bool)>; 2] = [
        |e| e.field_names().collect(),
        |e| e.method_names().collect(),
    ];
    let namespaces: &[fn(&NameEntry) -> Vec<(Name, bool)>] =
        if accumulator_only { &merged } else { &separate };

    let mut hits = Vec::new();
    for names_of in namespaces {
        // name -> (contributing parameters, any accumulator-derived occurrence)
        let mut owners: FxHashMap<Name, (Vec<usize>, bool)> = FxHashMap::default();
        let mut order = Vec::new();
        for (param, entry) in entries.iter().enumerate() {
            for (name, from_accumulator) in names_of(entry) {
                let slot = owners.entry(name).or_insert_with(|| {
                    order.push(name);
                    (Vec::new(), false)
                });
                if !slot.0.contains(&param) {
                    slot.0.push(param);
                }
                slot.1 |= from_accumulator;
            }
        }
        for name in order {
            if let Some((params, any_accumulator)) = owners.get(&name) {
                let counts = *any_accumulator || !accumulator_only;
                if params.len() > 1 && counts && !hits.contains(&name) {
                    hits.push(name);
                }
            }
        }
    }
    hits
}

/// Parameters whose resolved method names hit a reserved builder method.
pub fn reserved_conflicts(scheme: &NamingScheme, reserved: &[Name]) -> Vec<ReservedConflict> {
    scheme
        .entries()
        .iter()
        .enumerate()
        .flat_map(move |(param, entry)| {
            entry
                .method_names()
                .filter(move |(name, _)| reserved.contains(name))
                .map(move |(name, _)| ReservedConflict { param, name })
        })
        .collect()
}
