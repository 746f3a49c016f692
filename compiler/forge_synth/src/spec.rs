//! The assembled builder description handed to emitters and to the runtime.

use forge_ir::{Name, ParameterDescriptor, PostBuildHook, TypeRef, Visibility};

use crate::{AccumulatorPlan, NameEntry, OptionalPlan, Variant};

/// Role of a builder field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldRole {
    /// Direct storage for a plain or optional parameter.
    Value,
    /// The `whole` slot of a collection parameter.
    Whole,
    /// The `partial` accumulator slot of a collection parameter.
    Partial,
}

/// One field of the builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldSpec {
    pub name: Name,
    pub ty: TypeRef,
    pub nullable: bool,
    pub role: FieldRole,
    /// Index of the owning parameter.
    pub param: usize,
}

/// What a builder method does.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MethodKind {
    /// Primary setter; for collections this is the bulk setter.
    Setter,
    /// Optional overload taking the bare inner type.
    ConvenienceSetter,
    AddTo,
    AddAllTo,
    PutIn,
    PutAllIn,
    Build,
}

impl MethodKind {
    /// Whether the method returns the builder itself.
    pub const fn is_mutator(self) -> bool {
        !matches!(self, MethodKind::Build)
    }
}

/// A method parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodParam {
    pub name: Name,
    pub ty: TypeRef,
}

/// Return type of a builder method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReturnSpec {
    /// The builder itself, for chaining.
    SelfType,
    /// The value type.
    ValueType,
    /// Whatever the post-build hook returns.
    HookResult,
}

/// One method of the builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodSpec {
    pub name: Name,
    pub kind: MethodKind,
    pub params: Vec<MethodParam>,
    pub returns: ReturnSpec,
    pub visibility: Visibility,
    /// Declared thrown kinds; only `build` carries any.
    pub throws: Vec<Name>,
    /// Index of the parameter this method writes, `None` for `build`.
    pub param: Option<usize>,
}

/// One step of the seed-from-existing-instance constructor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SeedCopy {
    pub param: usize,
    /// Accessor read on the existing value.
    pub accessor: Name,
    /// Primary setter receiving the read value.
    pub setter: Name,
}

/// The seed-from-existing-instance constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SeedSpec {
    /// Type of the existing instance.
    pub from: TypeRef,
    pub copies: Vec<SeedCopy>,
}

/// Nested types of a pooled builder.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PoolSpec {
    /// Per-thread holder type.
    pub slot_type: Name,
    /// Slot field holding the current occupant.
    pub occupant_field: Name,
    /// Occupant flag the slot checks before handing the builder out again.
    pub in_use_field: Name,
    /// Fresh acquisition.
    pub acquire: Name,
    /// Acquisition seeded from an existing value.
    pub acquire_from: Name,
}

/// One parameter as the builder sees it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuilderParam {
    pub descriptor: ParameterDescriptor,
    pub variant: Variant,
    pub names: NameEntry,
    /// Present for accumulating collections.
    pub accumulator: Option<AccumulatorPlan>,
    /// Present for optional parameters.
    pub optional: Option<OptionalPlan>,
}

/// Complete description of a generated builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuilderSpec {
    pub value_type: Name,
    pub builder_type: Name,
    /// Copied from the value type.
    pub generics: Vec<Name>,
    pub visibility: Visibility,
    pub params: Vec<BuilderParam>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    pub seed: SeedSpec,
    pub hook: Option<PostBuildHook>,
    /// No generic parameters and pooling enabled.
    pub reusable: bool,
    pub pool: Option<PoolSpec>,
}

impl BuilderSpec {
    /// All methods named `name` (a setter and its convenience overload share one).
    pub fn methods_named(&self, name: Name) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn field(&self, name: Name) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields belonging to parameter `param`.
    pub fn fields_of(&self, param: usize) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.param == param)
    }

    pub fn build_method(&self) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.kind == MethodKind::Build)
    }

    /// Distinct method names, counting an overload set once.
    pub fn method_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = Vec::with_capacity(self.methods.len());
        for method in &self.methods {
            let overload = method.kind == MethodKind::ConvenienceSetter;
            if !overload || !names.contains(&method.name) {
                names.push(method.name);
            }
        }
        names
    }
}
