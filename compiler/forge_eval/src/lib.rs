//! Runtime model of generated builders.
//!
//! A [`BuilderInstance`] executes the members a [`forge_synth::BuilderSpec`]
//! describes: setters, convenience overloads, collection accumulators and
//! `build()`. Construction, accessor reads and post-build hooks go through a
//! [`ValueTypeHost`]; [`RecordHost`] models value types as plain records.
//!
//! Pooled builders are acquired from a per-thread [`PoolContext`].

mod accumulator;
mod builder;
mod error;
mod host;
mod pool;
mod value;

#[cfg(test)]
mod test_helpers;

pub use accumulator::{Accumulator, AccumulatorState};
pub use builder::BuilderInstance;
pub use error::{EvalError, HookError};
pub use host::{RecordHost, ValueTypeHost};
pub use pool::{PoolContext, PooledBuilder};
pub use value::{Heap, Value};
