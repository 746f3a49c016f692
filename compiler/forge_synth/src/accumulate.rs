//! Accumulator members for collection parameters.
//!
//! A non-degenerate collection is stored in two slots: `whole` (the last
//! collection handed to the bulk setter) and `partial` (an accumulator fed
//! by `addTo`/`putIn`). At most one is non-null. The runtime side of the
//! merge algebra lives in `forge_eval::AccumulatorState`; this module only
//! decides which members exist and how they are typed.

use forge_ir::{StringInterner, TypeRef};

use crate::{CollectionFamily, CollectionKind, CollectionShape, Flavor, SynthError};

/// Synthesis plan for one accumulating collection parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AccumulatorPlan {
    pub kind: CollectionKind,
    pub family: CollectionFamily,
    pub flavor: Flavor,
    /// Type of the partial-contents field.
    pub accumulator_ty: TypeRef,
    /// Parameters of the single-element method: `[E]` or `[K, V]`.
    pub add_params: Vec<TypeRef>,
    /// Parameter of the bulk-accumulate method: `Iterable<E>` or `Map<K, V>`.
    pub add_all_param: TypeRef,
}

/// Plan the accumulator members, or `None` for a degenerate collection.
pub fn accumulator_plan(
    shape: &CollectionShape,
    interner: &StringInterner,
) -> Result<Option<AccumulatorPlan>, SynthError> {
    if shape.degenerate {
        return Ok(None);
    }

    let elements = shape.element_types.clone();
    let accumulator_ty = TypeRef::generic(
        interner.try_intern(shape.family.accumulator_class())?,
        elements.clone(),
    );
    let add_all_class = match shape.kind {
        CollectionKind::List | CollectionKind::Set => "Iterable",
        CollectionKind::Map => "Map",
    };
    let add_all_param = TypeRef::generic(interner.try_intern(add_all_class)?, elements.clone());

    Ok(Some(AccumulatorPlan {
        kind: shape.kind,
        family: shape.family,
        flavor: shape.family.flavor(),
        accumulator_ty,
        add_params: elements,
        add_all_param,
    }))
}
