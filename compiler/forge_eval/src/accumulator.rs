//! Two-slot storage of a collection parameter.
//!
//! `whole` holds a collection set in one piece; `partial` holds contents
//! being accumulated element by element. At most one slot is occupied:
//!
//! - bulk set: `whole = value`, `partial` cleared
//! - add / put / add-all / put-all: `partial` is created on first use,
//!   seeded from `whole` (which is then cleared), and extended
//! - resolve: frozen `partial`, else `whole`, else the empty collection
//!
//! The resolved value is therefore always "last bulk set (or empty), then
//! every later accumulation in order".

use forge_synth::CollectionKind;

use crate::value::{insert_entry, insert_unique};
use crate::Value;

/// Mutable contents under accumulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accumulator {
    List(Vec<Value>),
    /// Unique elements in insertion order.
    Set(Vec<Value>),
    /// Unique keys in insertion order.
    Map(Vec<(Value, Value)>),
}

impl Accumulator {
    pub fn empty(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::List => Accumulator::List(Vec::new()),
            CollectionKind::Set => Accumulator::Set(Vec::new()),
            CollectionKind::Map => Accumulator::Map(Vec::new()),
        }
    }

    /// A copy of an existing collection value.
    fn seeded(kind: CollectionKind, whole: &Value) -> Self {
        let mut acc = Accumulator::empty(kind);
        match whole {
            Value::List(items) | Value::Set(items) => acc.extend(items.iter().cloned()),
            Value::Map(entries) => acc.extend_entries(entries.iter().cloned()),
            _ => {}
        }
        acc
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            Accumulator::List(_) => CollectionKind::List,
            Accumulator::Set(_) => CollectionKind::Set,
            Accumulator::Map(_) => CollectionKind::Map,
        }
    }

    fn push(&mut self, element: Value) {
        match self {
            Accumulator::List(items) => items.push(element),
            Accumulator::Set(items) => insert_unique(items, element),
            Accumulator::Map(_) => {}
        }
    }

    fn put(&mut self, key: Value, value: Value) {
        if let Accumulator::Map(entries) = self {
            insert_entry(entries, key, value);
        }
    }

    fn extend(&mut self, elements: impl IntoIterator<Item = Value>) {
        for element in elements {
            self.push(element);
        }
    }

    fn extend_entries(&mut self, entries: impl IntoIterator<Item = (Value, Value)>) {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Freeze into an immutable collection value.
    pub fn freeze(&self) -> Value {
        match self {
            Accumulator::List(items) => Value::list(items.clone()),
            Accumulator::Set(items) => Value::set(items.iter().cloned()),
            Accumulator::Map(entries) => Value::map(entries.iter().cloned()),
        }
    }
}

/// Builder storage for one collection parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccumulatorState {
    kind: CollectionKind,
    whole: Option<Value>,
    partial: Option<Accumulator>,
}

impl AccumulatorState {
    pub fn new(kind: CollectionKind) -> Self {
        AccumulatorState {
            kind,
            whole: None,
            partial: None,
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn whole(&self) -> Option<&Value> {
        self.whole.as_ref()
    }

    pub fn partial(&self) -> Option<&Accumulator> {
        self.partial.as_ref()
    }

    /// Replace the contents; `None` (a null collection) unsets them.
    pub fn set_whole(&mut self, value: Option<Value>) {
        self.whole = value;
        self.partial = None;
    }

    /// Add one element (list and set kinds).
    pub fn add(&mut self, element: Value) {
        self.partial_mut().push(element);
    }

    /// Put one entry (map kind).
    pub fn put(&mut self, key: Value, value: Value) {
        self.partial_mut().put(key, value);
    }

    /// Add every element in one step.
    pub fn add_all(&mut self, elements: impl IntoIterator<Item = Value>) {
        self.partial_mut().extend(elements);
    }

    /// Put every entry in one step.
    pub fn put_all(&mut self, entries: impl IntoIterator<Item = (Value, Value)>) {
        self.partial_mut().extend_entries(entries);
    }

    fn partial_mut(&mut self) -> &mut Accumulator {
        let kind = self.kind;
        let whole = &mut self.whole;
        self.partial.get_or_insert_with(|| match whole.take() {
            Some(existing) => Accumulator::seeded(kind, &existing),
            None => Accumulator::empty(kind),
        })
    }

    /// The value `build()` passes for this parameter.
    pub fn resolve(&self) -> Value {
        match (&self.partial, &self.whole) {
            (Some(partial), _) => partial.freeze(),
            (None, Some(whole)) => whole.clone(),
            (None, None) => Value::empty_collection(self.kind),
        }
    }

    pub fn clear(&mut self) {
        self.whole = None;
        self.partial = None;
    }
}
