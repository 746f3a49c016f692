//! String interner for identifiers.
//!
//! A generation session interns a few hundred names at most, so a single
//! table behind one `RwLock` is enough. Strings are leaked on first intern;
//! `lookup` hands out `&'static str` and never holds the lock past the call.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// The interner ran out of indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    Exhausted { interned: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Exhausted { interned } => {
                write!(f, "interner is full after {interned} names")
            }
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Table {
    index: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl Table {
    fn insert(&mut self, s: &str) -> Result<Name, InternError> {
        let interned = self.strings.len();
        let name = u32::try_from(interned)
            .map(Name::from_index)
            .map_err(|_| InternError::Exhausted { interned })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        self.strings.push(leaked);
        self.index.insert(leaked, name);
        Ok(name)
    }
}

/// Interner shared by every phase of one session.
///
/// Wrap in [`SharedInterner`] to hand it to builders and pools.
pub struct StringInterner {
    table: RwLock<Table>,
}

/// Names every builder surface uses, interned up front.
const VOCABULARY: &[&str] = &[
    "",
    // builder members
    "build",
    "Builder",
    "inUse",
    // collection families
    "List",
    "Set",
    "Map",
    "ImmutableList",
    "ImmutableSet",
    "ImmutableMap",
    "Iterable",
    // optional wrappers
    "Optional",
    "OptionalInt",
    "OptionalLong",
    "OptionalDouble",
    // primitives
    "boolean",
    "byte",
    "short",
    "int",
    "long",
    "char",
    "float",
    "double",
];

impl StringInterner {
    pub fn new() -> Self {
        let mut table = Table::default();
        for word in VOCABULARY {
            if table.insert(word).is_err() {
                break;
            }
        }
        StringInterner {
            table: RwLock::new(table),
        }
    }

    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().index.get(s) {
            return Ok(name);
        }
        let mut table = self.table.write();
        // Another caller may have won the race for the write lock.
        match table.index.get(s) {
            Some(&name) => Ok(name),
            None => table.insert(s),
        }
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics if the interner is exhausted. Generation paths use
    /// [`try_intern`](Self::try_intern) and report the failure instead.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The string behind `name`, or `""` for a name from another interner
    /// that is out of range here.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or_default()
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Whether nothing beyond the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can resolve a [`Name`]; used by type rendering.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Cloneable handle to one session's interner.
///
/// The session and runtime builders hold this; phases that only read take
/// `&StringInterner` through `Deref`.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
