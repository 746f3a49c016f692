//! Runtime values flowing through builders.
//!
//! Heap payloads are wrapped in [`Heap`], whose constructor is private to
//! this module: values are created through the factory methods
//! (`Value::string`, `Value::set`, `Value::present`, ...), which also keep
//! set elements and map keys unique.
//!
//! Sets and maps remember insertion order but compare order-insensitively.

mod heap;

use std::fmt;

use forge_ir::{Name, PrimitiveKind, StringInterner, TypeArg, TypeRef};
use forge_synth::{CollectionFamily, CollectionKind, WrapperKind};

pub use heap::Heap;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    /// Every integral primitive.
    Int(i64),
    /// `float` and `double`.
    Double(f64),
    Char(char),
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    /// Unique elements in insertion order.
    Set(Heap<Vec<Value>>),
    /// Unique keys in insertion order.
    Map(Heap<Vec<(Value, Value)>>),
    /// An optional wrapper; `inner: None` is the kind's empty instance.
    Optional {
        kind: WrapperKind,
        inner: Option<Heap<Value>>,
    },
    /// An instance of a value type, fields in constructor order.
    Record {
        type_name: Name,
        fields: Heap<Vec<Value>>,
    },
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// A set of `items`; later duplicates are dropped.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            insert_unique(&mut unique, item);
        }
        Value::Set(Heap::new(unique))
    }

    /// A map of `entries`; a repeated key replaces the earlier value in place.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            insert_entry(&mut unique, key, value);
        }
        Value::Map(Heap::new(unique))
    }

    /// The empty instance of a wrapper kind.
    #[inline]
    pub fn empty(kind: WrapperKind) -> Self {
        Value::Optional { kind, inner: None }
    }

    /// A wrapper holding `inner`.
    #[inline]
    pub fn present(kind: WrapperKind, inner: Value) -> Self {
        Value::Optional {
            kind,
            inner: Some(Heap::new(inner)),
        }
    }

    #[inline]
    pub fn record(type_name: Name, fields: Vec<Value>) -> Self {
        Value::Record {
            type_name,
            fields: Heap::new(fields),
        }
    }

    /// The canonical empty collection of a kind.
    pub fn empty_collection(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::List => Value::list(Vec::new()),
            CollectionKind::Set => Value::set(Vec::new()),
            CollectionKind::Map => Value::map(Vec::new()),
        }
    }

    /// What an unset field of type `primitive` reads as.
    pub fn zero(primitive: PrimitiveKind) -> Self {
        match primitive {
            PrimitiveKind::Boolean => Value::Bool(false),
            PrimitiveKind::Byte
            | PrimitiveKind::Short
            | PrimitiveKind::Int
            | PrimitiveKind::Long => Value::Int(0),
            PrimitiveKind::Float | PrimitiveKind::Double => Value::Double(0.0),
            PrimitiveKind::Char => Value::Char('\0'),
        }
    }
}

pub(crate) fn insert_unique(items: &mut Vec<Value>, item: Value) {
    if !items.contains(&item) {
        items.push(item);
    }
}

pub(crate) fn insert_entry(entries: &mut Vec<(Value, Value)>, key: Value, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

// Queries

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or set.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Content of an optional wrapper: `Some(None)` for an empty one.
    pub fn optional_inner(&self) -> Option<Option<&Value>> {
        match self {
            Value::Optional { inner, .. } => Some(inner.as_deref()),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&[Value]> {
        match self {
            Value::Record { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// The collection kind this value is, if any.
    pub fn collection_kind(&self) -> Option<CollectionKind> {
        match self {
            Value::List(_) => Some(CollectionKind::List),
            Value::Set(_) => Some(CollectionKind::Set),
            Value::Map(_) => Some(CollectionKind::Map),
            _ => None,
        }
    }

    /// Short name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::Char(_) => "char",
            Value::Str(_) => "String",
            Value::List(_) => "List",
            Value::Set(_) => "Set",
            Value::Map(_) => "Map",
            Value::Optional { kind, .. } => kind.class_name(),
            Value::Record { .. } => "record",
        }
    }

    /// Whether this value may be passed where `ty` is expected.
    ///
    /// Checks primitives, boxed scalars, strings, collection kinds and
    /// wrapper kinds, descending into concrete type arguments. Type variables
    /// and unknown classes accept any non-null value; `null` is accepted for
    /// every reference type.
    pub fn conforms_to(&self, ty: &TypeRef, interner: &StringInterner) -> bool {
        if let Some(primitive) = ty.as_primitive() {
            return self.is_primitive(primitive);
        }
        if self.is_null() {
            return true;
        }
        let Some(class) = ty.class_name() else {
            return true;
        };
        let class = interner.lookup(class);

        if let Some(family) = CollectionFamily::from_class_name(class) {
            return self.collection_kind() == Some(family.kind())
                && self.arguments_conform(ty.args(), interner);
        }
        if let Some(kind) = WrapperKind::from_class_name(class) {
            return match self {
                Value::Optional { kind: actual, inner } => {
                    *actual == kind
                        && inner.as_deref().is_none_or(|v| match kind.primitive_inner() {
                            Some(primitive) => v.is_primitive(primitive),
                            None => conforms_arg(v, ty.args().first(), interner),
                        })
                }
                _ => false,
            };
        }
        match class {
            "String" | "CharSequence" => matches!(self, Value::Str(_)),
            "Boolean" => matches!(self, Value::Bool(_)),
            "Byte" | "Short" | "Integer" | "Long" => matches!(self, Value::Int(_)),
            "Float" | "Double" => matches!(self, Value::Double(_)),
            "Character" => matches!(self, Value::Char(_)),
            "Iterable" | "Collection" => {
                matches!(self, Value::List(_) | Value::Set(_))
                    && self.arguments_conform(ty.args(), interner)
            }
            _ => true,
        }
    }

    fn is_primitive(&self, primitive: PrimitiveKind) -> bool {
        match primitive {
            PrimitiveKind::Boolean => matches!(self, Value::Bool(_)),
            PrimitiveKind::Byte
            | PrimitiveKind::Short
            | PrimitiveKind::Int
            | PrimitiveKind::Long => matches!(self, Value::Int(_)),
            PrimitiveKind::Float | PrimitiveKind::Double => matches!(self, Value::Double(_)),
            PrimitiveKind::Char => matches!(self, Value::Char(_)),
        }
    }

    fn arguments_conform(&self, args: &[TypeArg], interner: &StringInterner) -> bool {
        match self {
            Value::List(items) | Value::Set(items) => items
                .iter()
                .all(|item| conforms_arg(item, args.first(), interner)),
            Value::Map(entries) => entries.iter().all(|(k, v)| {
                conforms_arg(k, args.first(), interner) && conforms_arg(v, args.get(1), interner)
            }),
            _ => false,
        }
    }
}

/// Raw types and wildcards accept anything.
fn conforms_arg(value: &Value, arg: Option<&TypeArg>, interner: &StringInterner) -> bool {
    arg.and_then(TypeArg::as_type)
        .is_none_or(|ty| value.conforms_to(ty, interner))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|entry| b.contains(entry))
            }
            (
                Value::Optional { kind: k1, inner: i1 },
                Value::Optional { kind: k2, inner: i2 },
            ) => k1 == k2 && i1.as_deref() == i2.as_deref(),
            (
                Value::Record {
                    type_name: t1,
                    fields: f1,
                },
                Value::Record {
                    type_name: t2,
                    fields: f2,
                },
            ) => t1 == t2 && **f1 == **f2,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T>(
            f: &mut fmt::Formatter<'_>,
            items: &[T],
            mut each: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
        ) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                each(f, item)?;
            }
            Ok(())
        }

        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) => write!(f, "{:?}", &***s),
            Value::List(items) => {
                write!(f, "[")?;
                join(f, items, |f, v| write!(f, "{v}"))?;
                write!(f, "]")
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                join(f, items, |f, v| write!(f, "{v}"))?;
                write!(f, "}}")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                join(f, entries, |f, (k, v)| write!(f, "{k}={v}"))?;
                write!(f, "}}")
            }
            Value::Optional { kind, inner } => match inner {
                Some(v) => write!(f, "{}[{v}]", kind.class_name()),
                None => write!(f, "{}.empty", kind.class_name()),
            },
            Value::Record { fields, .. } => {
                write!(f, "record(")?;
                join(f, fields, |f, v| write!(f, "{v}"))?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
