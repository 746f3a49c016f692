//! A live builder driven by a [`BuilderSpec`].
//!
//! Methods are dispatched by name; a setter and its convenience overload
//! share one name and are told apart by the argument (a wrapper value goes
//! to the primary setter, a bare value to the overload).

use std::sync::Arc;

use forge_ir::{HookReturn, PrimitiveKind, SharedInterner};
use forge_synth::{BuilderSpec, MethodKind, MethodSpec, Variant, WrapperKind};

use crate::{AccumulatorState, EvalError, ValueTypeHost, Value};

/// Storage for one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ParamState {
    Plain {
        primitive: Option<PrimitiveKind>,
        /// `Null` until set.
        value: Value,
    },
    Optional {
        kind: WrapperKind,
        /// Unwrapped content; `None` for unset or empty.
        inner: Option<Value>,
    },
    Collection(AccumulatorState),
}

impl ParamState {
    fn for_variant(variant: &Variant, primitive: Option<PrimitiveKind>) -> Self {
        match variant {
            Variant::Plain => ParamState::Plain {
                primitive,
                value: Value::Null,
            },
            Variant::OptionalLike(shape) => ParamState::Optional {
                kind: shape.wrapper_kind,
                inner: None,
            },
            Variant::CollectionLike(shape) => {
                ParamState::Collection(AccumulatorState::new(shape.kind))
            }
        }
    }

    fn resolve(&self) -> Value {
        match self {
            ParamState::Plain {
                primitive: Some(primitive),
                value: Value::Null,
            } => Value::zero(*primitive),
            ParamState::Plain { value, .. } => value.clone(),
            ParamState::Optional { kind, inner } => match inner {
                Some(inner) => Value::present(*kind, inner.clone()),
                None => Value::empty(*kind),
            },
            ParamState::Collection(state) => state.resolve(),
        }
    }
}

/// A builder instance for one value type.
#[derive(Clone)]
pub struct BuilderInstance {
    spec: Arc<BuilderSpec>,
    interner: SharedInterner,
    states: Vec<ParamState>,
}

impl BuilderInstance {
    /// A fresh builder with every parameter unset.
    pub fn new(spec: Arc<BuilderSpec>, interner: SharedInterner) -> Self {
        let states = Self::fresh_states(&spec);
        BuilderInstance {
            spec,
            interner,
            states,
        }
    }

    /// A builder seeded from an existing instance.
    pub fn from_value(
        spec: Arc<BuilderSpec>,
        interner: SharedInterner,
        host: &dyn ValueTypeHost,
        existing: &Value,
    ) -> Result<Self, EvalError> {
        let mut builder = Self::new(spec, interner);
        builder.seed_from(host, existing)?;
        Ok(builder)
    }

    fn fresh_states(spec: &BuilderSpec) -> Vec<ParamState> {
        spec.params
            .iter()
            .map(|p| ParamState::for_variant(&p.variant, p.descriptor.ty.as_primitive()))
            .collect()
    }

    pub fn spec(&self) -> &Arc<BuilderSpec> {
        &self.spec
    }

    /// Accumulator storage of the collection parameter `param`.
    pub fn accumulator(&self, param: &str) -> Option<&AccumulatorState> {
        let index = self
            .spec
            .params
            .iter()
            .position(|p| self.interner.lookup(p.descriptor.name) == param)?;
        match &self.states[index] {
            ParamState::Collection(state) => Some(state),
            _ => None,
        }
    }

    /// Copy every accessor of `existing` through its primary setter.
    pub fn seed_from(
        &mut self,
        host: &dyn ValueTypeHost,
        existing: &Value,
    ) -> Result<(), EvalError> {
        let spec = Arc::clone(&self.spec);
        for copy in &spec.seed.copies {
            let value = host.read_accessor(&spec, existing, copy.accessor)?;
            let setter = spec
                .methods
                .iter()
                .find(|m| m.kind == MethodKind::Setter && m.param == Some(copy.param))
                .ok_or_else(|| self.unknown(copy.setter))?;
            self.call(setter, vec![value])?;
        }
        Ok(())
    }

    /// Invoke the mutator `method` with `args`.
    pub fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<(), EvalError> {
        let spec = Arc::clone(&self.spec);
        let candidates: Vec<&MethodSpec> = spec
            .methods
            .iter()
            .filter(|m| m.kind.is_mutator() && self.interner.lookup(m.name) == method)
            .collect();

        let chosen = match candidates.as_slice() {
            [] => {
                return Err(EvalError::UnknownMethod {
                    builder: self.interner.lookup(spec.builder_type).to_owned(),
                    method: method.to_owned(),
                })
            }
            [only] => *only,
            overloads => {
                let wanted = match args.first() {
                    Some(Value::Optional { .. }) => MethodKind::Setter,
                    Some(Value::Null) => {
                        return Err(EvalError::NullArgument {
                            method: method.to_owned(),
                        })
                    }
                    _ => MethodKind::ConvenienceSetter,
                };
                overloads
                    .iter()
                    .copied()
                    .find(|m| m.kind == wanted)
                    .unwrap_or(overloads[0])
            }
        };
        self.call(chosen, args)
    }

    fn call(&mut self, method: &MethodSpec, args: Vec<Value>) -> Result<(), EvalError> {
        let name = self.interner.lookup(method.name);
        if args.len() != method.params.len() {
            return Err(EvalError::ArgumentCount {
                method: name.to_owned(),
                expected: method.params.len(),
                got: args.len(),
            });
        }
        let Some(index) = method.param else {
            return Err(self.unknown(method.name));
        };
        self.check_args(method, &args)?;

        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or(Value::Null);
        let applied = match (&mut self.states[index], method.kind) {
            (ParamState::Plain { value, .. }, MethodKind::Setter) => {
                *value = next();
                true
            }
            (ParamState::Optional { inner, .. }, MethodKind::Setter) => {
                *inner = next().optional_inner().flatten().cloned();
                true
            }
            (ParamState::Optional { inner, .. }, MethodKind::ConvenienceSetter) => {
                *inner = Some(next());
                true
            }
            (ParamState::Collection(state), MethodKind::Setter) => {
                let value = next();
                state.set_whole((!value.is_null()).then_some(value));
                true
            }
            (ParamState::Collection(state), MethodKind::AddTo) => {
                state.add(next());
                true
            }
            (ParamState::Collection(state), MethodKind::PutIn) => {
                let key = next();
                state.put(key, next());
                true
            }
            (ParamState::Collection(state), MethodKind::AddAllTo) => {
                state.add_all(next().elements().unwrap_or_default().iter().cloned());
                true
            }
            (ParamState::Collection(state), MethodKind::PutAllIn) => {
                state.put_all(next().entries().unwrap_or_default().iter().cloned());
                true
            }
            _ => false,
        };
        if !applied {
            return Err(self.unknown(method.name));
        }
        Ok(())
    }

    /// Null and type checks for every argument of `method`.
    fn check_args(&self, method: &MethodSpec, args: &[Value]) -> Result<(), EvalError> {
        let method_name = || self.interner.lookup(method.name).to_owned();
        for (param, arg) in method.params.iter().zip(args) {
            if arg.is_null() {
                match method.kind {
                    MethodKind::Setter if param.ty.as_primitive().is_some() => {
                        return Err(EvalError::NullPrimitive {
                            method: method_name(),
                            param: self.interner.lookup(param.name).to_owned(),
                        });
                    }
                    MethodKind::Setter if !self.wrapper_setter(method) => continue,
                    MethodKind::AddTo | MethodKind::PutIn => {
                        return Err(EvalError::NullElement {
                            method: method_name(),
                        });
                    }
                    _ => {
                        return Err(EvalError::NullArgument {
                            method: method_name(),
                        });
                    }
                }
            }
            let null_element = match method.kind {
                MethodKind::AddAllTo => arg.elements().is_some_and(|e| e.iter().any(Value::is_null)),
                MethodKind::PutAllIn => arg
                    .entries()
                    .is_some_and(|e| e.iter().any(|(k, v)| k.is_null() || v.is_null())),
                _ => false,
            };
            if null_element {
                return Err(EvalError::NullElement {
                    method: method_name(),
                });
            }
            if !arg.conforms_to(&param.ty, &self.interner) {
                return Err(EvalError::TypeMismatch {
                    method: method_name(),
                    param: self.interner.lookup(param.name).to_owned(),
                    expected: param.ty.display(&*self.interner).to_string(),
                    found: arg.type_name(),
                });
            }
        }
        Ok(())
    }

    fn wrapper_setter(&self, method: &MethodSpec) -> bool {
        method
            .param
            .is_some_and(|index| matches!(self.states[index], ParamState::Optional { .. }))
    }

    fn unknown(&self, method: forge_ir::Name) -> EvalError {
        EvalError::UnknownMethod {
            builder: self.interner.lookup(self.spec.builder_type).to_owned(),
            method: self.interner.lookup(method).to_owned(),
        }
    }

    /// Resolved constructor arguments, in declaration order.
    pub fn resolve(&self) -> Vec<Value> {
        self.states.iter().map(ParamState::resolve).collect()
    }

    /// Reset every parameter to unset.
    pub fn clear(&mut self) {
        self.states = Self::fresh_states(&self.spec);
    }

    /// Construct the value and run the post-build hook.
    pub fn build(&self, host: &dyn ValueTypeHost) -> Result<Value, EvalError> {
        let value = host.construct(&self.spec, self.resolve())?;
        finish(&self.spec, host, value)
    }
}

/// Run the post-build hook, if any, on a constructed value.
pub(crate) fn finish(
    spec: &BuilderSpec,
    host: &dyn ValueTypeHost,
    value: Value,
) -> Result<Value, EvalError> {
    let Some(hook) = &spec.hook else {
        return Ok(value);
    };
    let returned = host.invoke_hook(spec, hook, &value)?;
    Ok(match (hook.returns, returned) {
        (HookReturn::Value, Some(result)) => result,
        _ => value,
    })
}

impl std::fmt::Debug for BuilderInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderInstance")
            .field("builder", &self.interner.lookup(self.spec.builder_type))
            .field("args", &self.resolve())
            .finish()
    }
}
