//! Per-thread reuse of builder instances.
//!
//! A [`PoolContext`] keeps one slot per pooled builder spec. Acquiring
//! hands out the slot's occupant when it is idle and allocates a fresh one
//! otherwise, so nested acquisitions never share an instance.
//!
//! The context and its handles hold `Rc`s and therefore stay on the thread
//! that created them.
//!
//! [`PooledBuilder::build`] consumes the handle: after `build()` the builder
//! can no longer be touched through it. Dropping an unbuilt handle clears
//! the occupant and returns it to the slot.

// Rc is the intentional implementation detail of LocalCell<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of LocalCell<T>"
)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::sync::Arc;

use forge_ir::SharedInterner;
use forge_synth::BuilderSpec;
use rustc_hash::FxHashMap;

use crate::builder::finish;
use crate::{AccumulatorState, BuilderInstance, EvalError, ValueTypeHost, Value};

/// Single-threaded shared cell for pool occupants.
///
/// All occupant allocations go through [`LocalCell::new`]. The `Rc` inside
/// keeps pools and their handles on the creating thread.
#[repr(transparent)]
struct LocalCell<T>(Rc<RefCell<T>>);

impl<T> LocalCell<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalCell(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalCell<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalCell(Rc::clone(&self.0))
    }
}

/// Identity of one generated builder. Two specs for the same value type
/// (for example from differently configured passes) get separate slots.
type SpecKey = *const BuilderSpec;

struct Occupant {
    id: u64,
    in_use: bool,
    builder: BuilderInstance,
}

/// Holder of the current occupant for one generated builder.
#[derive(Default)]
struct ReuseSlot {
    occupant: Option<LocalCell<Occupant>>,
}

/// Thread-confined pool of builder instances.
pub struct PoolContext {
    interner: SharedInterner,
    /// Keyed by spec identity; every occupant holds its spec, so a key
    /// cannot be reused by another allocation while its slot is occupied.
    slots: FxHashMap<SpecKey, ReuseSlot>,
    next_id: u64,
}

impl PoolContext {
    pub fn new(interner: SharedInterner) -> Self {
        PoolContext {
            interner,
            slots: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Acquire a cleared builder for `spec`.
    pub fn acquire(&mut self, spec: &Arc<BuilderSpec>) -> Result<PooledBuilder, EvalError> {
        if !spec.reusable {
            return Err(EvalError::NotReusable {
                builder: self.interner.lookup(spec.builder_type).to_owned(),
            });
        }

        let slot = self.slots.entry(Arc::as_ptr(spec)).or_default();
        let idle = slot
            .occupant
            .as_ref()
            .filter(|occupant| !occupant.borrow().in_use)
            .cloned();

        let occupant = match idle {
            Some(occupant) => {
                tracing::debug!(
                    builder = self.interner.lookup(spec.builder_type),
                    id = occupant.borrow().id,
                    "reusing pooled builder"
                );
                occupant
            }
            None => {
                self.next_id += 1;
                tracing::debug!(
                    builder = self.interner.lookup(spec.builder_type),
                    id = self.next_id,
                    "allocating pooled builder"
                );
                let fresh = LocalCell::new(Occupant {
                    id: self.next_id,
                    in_use: false,
                    builder: BuilderInstance::new(Arc::clone(spec), self.interner.clone()),
                });
                slot.occupant = Some(fresh.clone());
                fresh
            }
        };
        occupant.borrow_mut().in_use = true;

        Ok(PooledBuilder {
            occupant,
            released: false,
        })
    }

    /// Acquire a builder for `spec` seeded from `existing`.
    pub fn acquire_from(
        &mut self,
        spec: &Arc<BuilderSpec>,
        host: &dyn ValueTypeHost,
        existing: &Value,
    ) -> Result<PooledBuilder, EvalError> {
        let mut handle = self.acquire(spec)?;
        handle.seed_from(host, existing)?;
        Ok(handle)
    }

    /// Id of the current occupant of `spec`'s slot.
    pub fn occupant_id(&self, spec: &Arc<BuilderSpec>) -> Option<u64> {
        self.slots
            .get(&Arc::as_ptr(spec))
            .and_then(|slot| slot.occupant.as_ref())
            .map(|occupant| occupant.borrow().id)
    }

    /// Number of builder instances allocated so far.
    pub fn allocated(&self) -> u64 {
        self.next_id
    }
}

/// Exclusive handle to an acquired builder.
pub struct PooledBuilder {
    occupant: LocalCell<Occupant>,
    released: bool,
}

impl PooledBuilder {
    /// Identity of the underlying instance.
    pub fn instance_id(&self) -> u64 {
        self.occupant.borrow().id
    }

    pub fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<(), EvalError> {
        self.occupant.borrow_mut().builder.invoke(method, args)
    }

    pub fn seed_from(
        &mut self,
        host: &dyn ValueTypeHost,
        existing: &Value,
    ) -> Result<(), EvalError> {
        self.occupant.borrow_mut().builder.seed_from(host, existing)
    }

    /// Snapshot of a collection parameter's storage.
    pub fn accumulator(&self, param: &str) -> Option<AccumulatorState> {
        self.occupant.borrow().builder.accumulator(param).cloned()
    }

    /// Build the value and hand the instance back to its slot.
    ///
    /// Fields are resolved, then cleared; the instance is released right
    /// after construction (even if construction fails) and before the
    /// post-build hook runs.
    pub fn build(mut self, host: &dyn ValueTypeHost) -> Result<Value, EvalError> {
        let (spec, args) = {
            let mut occupant = self.occupant.borrow_mut();
            let args = occupant.builder.resolve();
            occupant.builder.clear();
            (Arc::clone(occupant.builder.spec()), args)
        };

        let constructed = host.construct(&spec, args);
        self.occupant.borrow_mut().in_use = false;
        self.released = true;

        finish(&spec, host, constructed?)
    }
}

impl Drop for PooledBuilder {
    fn drop(&mut self) {
        if !self.released {
            let mut occupant = self.occupant.borrow_mut();
            occupant.builder.clear();
            occupant.in_use = false;
        }
    }
}

impl std::fmt::Debug for PooledBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledBuilder")
            .field("id", &self.instance_id())
            .field("released", &self.released)
            .finish()
    }
}
