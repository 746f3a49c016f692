//! Builder assembly.
//!
//! Combines classification, resolved names and the optional/accumulator
//! plans into the full member list of the builder:
//!
//! - a storage field per parameter, plus a partial-contents field per
//!   accumulating collection
//! - a primary setter per parameter
//! - `addTo`/`addAllTo` or `putIn`/`putAllIn` per accumulating collection
//! - a convenience overload per eligible optional
//! - the seed-from-existing-instance constructor
//! - `build()`, which carries the post-build hook's declared errors

use forge_ir::{HookReturn, Name, StringInterner, TypeRef};

use crate::spec::{
    BuilderParam, BuilderSpec, FieldRole, FieldSpec, MethodKind, MethodParam, MethodSpec,
    PoolSpec, ReturnSpec, SeedCopy, SeedSpec,
};
use crate::{
    accumulator_plan, optional_plan, CollectionKind, Resolution, SynthConfig, SynthError,
    ValidatedType, Variant,
};

/// The only builder member a parameter may not claim.
pub(crate) const BUILD_METHOD: &str = "build";

fn is_reusable(validated: &ValidatedType) -> bool {
    validated.generics.is_empty() && validated.options.reuse_pool
}

/// Assemble the builder for a validated value type.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(value_type = interner.lookup(validated.name), params = validated.params.len())
)]
pub fn assemble(
    validated: &ValidatedType,
    resolution: Resolution,
    config: &SynthConfig,
    interner: &StringInterner,
) -> Result<BuilderSpec, SynthError> {
    let Resolution {
        variants, scheme, ..
    } = resolution;
    if scheme.len() != validated.params.len() || variants.len() != validated.params.len() {
        return Err(SynthError::SchemeMismatch {
            names: scheme.len(),
            params: validated.params.len(),
        });
    }

    let visibility = validated.visibility;
    let mut params = Vec::with_capacity(validated.params.len());
    let mut fields = Vec::new();
    let mut methods = Vec::new();

    for (index, ((desc, variant), names)) in validated
        .params
        .iter()
        .zip(variants)
        .zip(scheme.entries().iter().copied())
        .enumerate()
    {
        let mutator = |name: Name, kind: MethodKind, params: Vec<MethodParam>| MethodSpec {
            name,
            kind,
            params,
            returns: ReturnSpec::SelfType,
            visibility,
            throws: Vec::new(),
            param: Some(index),
        };

        let mut accumulator = None;
        let mut optional = None;

        match &variant {
            Variant::Plain => {
                fields.push(FieldSpec {
                    name: names.field,
                    ty: desc.ty.clone(),
                    nullable: desc.ty.as_primitive().is_none(),
                    role: FieldRole::Value,
                    param: index,
                });
                methods.push(mutator(
                    names.setter,
                    MethodKind::Setter,
                    vec![MethodParam {
                        name: names.field,
                        ty: desc.ty.clone(),
                    }],
                ));
            }
            Variant::OptionalLike(shape) => {
                let plan = optional_plan(shape, &desc.ty);
                fields.push(FieldSpec {
                    name: names.field,
                    ty: plan.storage_ty.clone(),
                    nullable: true,
                    role: FieldRole::Value,
                    param: index,
                });
                methods.push(mutator(
                    names.setter,
                    MethodKind::Setter,
                    vec![MethodParam {
                        name: names.field,
                        ty: plan.wrapper_ty.clone(),
                    }],
                ));
                if let Some(bare) = &plan.convenience {
                    methods.push(mutator(
                        names.setter,
                        MethodKind::ConvenienceSetter,
                        vec![MethodParam {
                            name: names.field,
                            ty: bare.clone(),
                        }],
                    ));
                }
                optional = Some(plan);
            }
            Variant::CollectionLike(shape) => {
                let plan = accumulator_plan(shape, interner)?;
                fields.push(FieldSpec {
                    name: names.field,
                    ty: desc.ty.clone(),
                    nullable: true,
                    role: if plan.is_some() {
                        FieldRole::Whole
                    } else {
                        FieldRole::Value
                    },
                    param: index,
                });
                methods.push(mutator(
                    names.setter,
                    MethodKind::Setter,
                    vec![MethodParam {
                        name: names.field,
                        ty: desc.ty.clone(),
                    }],
                ));

                if let (Some(plan), Some(acc_names)) = (&plan, names.accumulator) {
                    fields.push(FieldSpec {
                        name: acc_names.field,
                        ty: plan.accumulator_ty.clone(),
                        nullable: true,
                        role: FieldRole::Partial,
                        param: index,
                    });
                    let (add_kind, add_all_kind, add_param_names, add_all_name) = match plan.kind {
                        CollectionKind::List | CollectionKind::Set => (
                            MethodKind::AddTo,
                            MethodKind::AddAllTo,
                            vec![interner.try_intern("element")?],
                            interner.try_intern("elements")?,
                        ),
                        CollectionKind::Map => (
                            MethodKind::PutIn,
                            MethodKind::PutAllIn,
                            vec![interner.try_intern("key")?, interner.try_intern("value")?],
                            interner.try_intern("entries")?,
                        ),
                    };
                    let add_params = add_param_names
                        .into_iter()
                        .zip(plan.add_params.iter().cloned())
                        .map(|(name, ty)| MethodParam { name, ty })
                        .collect();
                    methods.push(mutator(acc_names.add, add_kind, add_params));
                    methods.push(mutator(
                        acc_names.add_all,
                        add_all_kind,
                        vec![MethodParam {
                            name: add_all_name,
                            ty: plan.add_all_param.clone(),
                        }],
                    ));
                }
                accumulator = plan;
            }
        }

        params.push(BuilderParam {
            descriptor: desc.clone(),
            variant,
            names,
            accumulator,
            optional,
        });
    }

    let hook = validated.hook.clone();
    methods.push(MethodSpec {
        name: interner.try_intern(BUILD_METHOD)?,
        kind: MethodKind::Build,
        params: Vec::new(),
        returns: match hook.as_ref().map(|h| h.returns) {
            Some(HookReturn::Value) => ReturnSpec::HookResult,
            Some(HookReturn::Void) | None => ReturnSpec::ValueType,
        },
        visibility,
        throws: hook.as_ref().map(|h| h.throws.clone()).unwrap_or_default(),
        param: None,
    });

    let seed = SeedSpec {
        from: TypeRef::generic(
            validated.name,
            validated.generics.iter().copied().map(TypeRef::var),
        ),
        copies: validated
            .params
            .iter()
            .zip(&params)
            .enumerate()
            .map(|(param, (desc, bp))| SeedCopy {
                param,
                accessor: desc.accessor,
                setter: bp.names.setter,
            })
            .collect(),
    };

    let reusable = is_reusable(validated);
    let pool = if reusable {
        Some(PoolSpec {
            slot_type: interner.try_intern("ReuseSlot")?,
            occupant_field: interner.try_intern("occupant")?,
            in_use_field: interner.try_intern("inUse")?,
            acquire: interner.try_intern("acquire")?,
            acquire_from: interner.try_intern("acquireFrom")?,
        })
    } else {
        None
    };

    let builder_type = interner.try_intern(&format!(
        "{}{}",
        interner.lookup(validated.name),
        config.builder_suffix
    ))?;

    tracing::debug!(
        fields = fields.len(),
        methods = methods.len(),
        reusable,
        "builder assembled"
    );

    Ok(BuilderSpec {
        value_type: validated.name,
        builder_type,
        generics: validated.generics.clone(),
        visibility,
        params,
        fields,
        methods,
        seed,
        hook,
        reusable,
        pool,
    })
}
