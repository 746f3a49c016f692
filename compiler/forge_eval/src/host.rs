//! The seam between builders and the value types they construct.

use forge_ir::{Name, PostBuildHook, StringInterner};
use forge_synth::BuilderSpec;
use rustc_hash::FxHashMap;

use crate::{EvalError, HookError, Value};

/// Constructs values, reads them back, and runs post-build hooks.
pub trait ValueTypeHost {
    /// Invoke the canonical constructor with arguments in declaration order.
    fn construct(&self, spec: &BuilderSpec, args: Vec<Value>) -> Result<Value, EvalError>;

    /// Read `accessor` from an existing instance.
    fn read_accessor(
        &self,
        spec: &BuilderSpec,
        value: &Value,
        accessor: Name,
    ) -> Result<Value, EvalError>;

    /// Run `hook` on a freshly constructed value.
    ///
    /// `Ok(None)` means the hook returned nothing and the value itself is
    /// the build result.
    fn invoke_hook(
        &self,
        spec: &BuilderSpec,
        hook: &PostBuildHook,
        value: &Value,
    ) -> Result<Option<Value>, HookError>;
}

type HookFn = Box<dyn Fn(&Value) -> Result<Option<Value>, HookError>>;

/// Models every value type as a [`Value::Record`] with one field per
/// constructor parameter.
///
/// Hooks are registered per value type; a declared hook with no registered
/// body does nothing.
#[derive(Default)]
pub struct RecordHost {
    hooks: FxHashMap<Name, HookFn>,
}

impl RecordHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the hook body for `value_type`.
    #[must_use]
    pub fn with_hook(
        mut self,
        value_type: Name,
        hook: impl Fn(&Value) -> Result<Option<Value>, HookError> + 'static,
    ) -> Self {
        self.hooks.insert(value_type, Box::new(hook));
        self
    }

    /// Field `param` of a record produced by this host.
    pub fn field<'v>(value: &'v Value, param: usize) -> Option<&'v Value> {
        value.fields().and_then(|fields| fields.get(param))
    }

    /// Resolve a record field by parameter name, for diagnostics and tests.
    pub fn field_named<'v>(
        spec: &BuilderSpec,
        value: &'v Value,
        name: &str,
        interner: &StringInterner,
    ) -> Option<&'v Value> {
        let param = spec
            .params
            .iter()
            .position(|p| interner.lookup(p.descriptor.name) == name)?;
        Self::field(value, param)
    }
}

impl ValueTypeHost for RecordHost {
    fn construct(&self, spec: &BuilderSpec, args: Vec<Value>) -> Result<Value, EvalError> {
        if args.len() != spec.params.len() {
            return Err(EvalError::Host(format!(
                "constructor takes {} argument(s), got {}",
                spec.params.len(),
                args.len()
            )));
        }
        Ok(Value::record(spec.value_type, args))
    }

    fn read_accessor(
        &self,
        spec: &BuilderSpec,
        value: &Value,
        accessor: Name,
    ) -> Result<Value, EvalError> {
        let Value::Record { type_name, fields } = value else {
            return Err(EvalError::Host(format!(
                "expected a record, found {}",
                value.type_name()
            )));
        };
        if *type_name != spec.value_type {
            return Err(EvalError::Host(
                "record belongs to a different value type".to_owned(),
            ));
        }
        spec.params
            .iter()
            .position(|p| p.descriptor.accessor == accessor)
            .and_then(|index| fields.get(index))
            .cloned()
            .ok_or_else(|| EvalError::Host("no such accessor on record".to_owned()))
    }

    fn invoke_hook(
        &self,
        spec: &BuilderSpec,
        _hook: &PostBuildHook,
        value: &Value,
    ) -> Result<Option<Value>, HookError> {
        match self.hooks.get(&spec.value_type) {
            Some(hook) => hook(value),
            None => Ok(None),
        }
    }
}
