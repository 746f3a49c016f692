//! Builder member naming.
//!
//! Base names come straight from the parameter identifier and its accessor:
//!
//! | member              | name                                       |
//! |---------------------|--------------------------------------------|
//! | storage field       | parameter identifier                       |
//! | primary setter      | `set` + property, or property (fluent)     |
//! | accumulator field   | field + `Builder`                          |
//! | accumulator methods | `addTo{F}`/`addAllTo{F}`, `putIn{F}`/`putAllIn{F}` |
//!
//! The collision resolver may rewrite these afterwards.

use std::borrow::Cow;

use forge_ir::{Name, ParameterDescriptor, StringInterner};
use rustc_hash::FxHashSet;

use crate::{SetterStyle, SynthError, TypeOptions, Variant};

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Property name derived from an accessor.
///
/// With the bean heuristic on, `getName` and `isActive` become `name` and
/// `active`. The prefix only counts when an upper-case letter follows it, so
/// `getaway` and `island` stay as they are.
pub fn property_name(accessor: &str, bean_accessors: bool) -> Cow<'_, str> {
    if bean_accessors {
        for prefix in ["get", "is"] {
            if let Some(rest) = accessor.strip_prefix(prefix) {
                if rest.chars().next().is_some_and(char::is_uppercase) {
                    return Cow::Owned(decapitalize(rest));
                }
            }
        }
    }
    Cow::Borrowed(accessor)
}

/// Names of the accumulator members of one collection parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AccumulatorNames {
    /// Field holding the partial contents.
    pub field: Name,
    /// `addToX` / `putInX`
    pub add: Name,
    /// `addAllToX` / `putAllInX`
    pub add_all: Name,
}

/// Final names for one parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NameEntry {
    pub field: Name,
    pub property: Name,
    pub setter: Name,
    pub accumulator: Option<AccumulatorNames>,
}

impl NameEntry {
    /// Base names before collision resolution.
    pub fn base(
        desc: &ParameterDescriptor,
        variant: &Variant,
        options: &TypeOptions,
        interner: &StringInterner,
    ) -> Result<NameEntry, SynthError> {
        let field_str = interner.lookup(desc.name);
        let property_str = property_name(interner.lookup(desc.accessor), options.bean_accessors);
        let property = interner.try_intern(&property_str)?;

        let setter = match options.setter_style {
            SetterStyle::Prefixed => {
                interner.try_intern(&format!("set{}", capitalize(&property_str)))?
            }
            SetterStyle::Fluent => property,
        };

        let accumulator = match variant {
            Variant::CollectionLike(shape) if !shape.degenerate => {
                let cap = capitalize(field_str);
                let (add, add_all) = if shape.kind.is_keyed() {
                    (format!("putIn{cap}"), format!("putAllIn{cap}"))
                } else {
                    (format!("addTo{cap}"), format!("addAllTo{cap}"))
                };
                Some(AccumulatorNames {
                    field: interner.try_intern(&format!("{field_str}Builder"))?,
                    add: interner.try_intern(&add)?,
                    add_all: interner.try_intern(&add_all)?,
                })
            }
            _ => None,
        };

        Ok(NameEntry {
            field: desc.name,
            property,
            setter,
            accumulator,
        })
    }

    /// Field names this parameter contributes, tagged with whether each is
    /// accumulator-derived.
    pub fn field_names(&self) -> impl Iterator<Item = (Name, bool)> + '_ {
        std::iter::once((self.field, false)).chain(self.accumulator.map(|acc| (acc.field, true)))
    }

    /// Method names this parameter contributes, tagged the same way.
    pub fn method_names(&self) -> impl Iterator<Item = (Name, bool)> + '_ {
        std::iter::once((self.setter, false)).chain(
            self.accumulator
                .into_iter()
                .flat_map(|acc| [(acc.add, true), (acc.add_all, true)]),
        )
    }
}

/// Resolved names for every parameter of one value type, in declaration order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NamingScheme {
    entries: Vec<NameEntry>,
}

impl NamingScheme {
    pub fn new(entries: Vec<NameEntry>) -> Self {
        NamingScheme { entries }
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&NameEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All field names are pairwise distinct and so are all method names.
    pub fn is_total(&self) -> bool {
        let mut fields = FxHashSet::default();
        let mut methods = FxHashSet::default();
        self.entries.iter().all(|entry| {
            entry.field_names().all(|(name, _)| fields.insert(name))
                && entry.method_names().all(|(name, _)| methods.insert(name))
        })
    }
}
