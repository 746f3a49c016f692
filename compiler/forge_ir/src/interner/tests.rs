use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let tags = interner.intern("tags");
    let name = interner.intern("name");
    let tags2 = interner.intern("tags");

    assert_eq!(tags, tags2);
    assert_ne!(tags, name);

    assert_eq!(interner.lookup(tags), "tags");
    assert_eq!(interner.lookup(name), "name");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_vocabulary_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    let build = interner.intern("build");
    let optional = interner.intern("Optional");

    assert_eq!(interner.len(), before);
    assert_eq!(interner.lookup(build), "build");
    assert_eq!(interner.lookup(optional), "Optional");
    assert!(!interner.is_empty());
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");

    assert_eq!(name1, name2);
}

#[test]
fn test_case_sensitive() {
    let interner = StringInterner::new();
    assert_ne!(interner.intern("foo"), interner.intern("Foo"));
}

#[test]
fn test_foreign_name_looks_up_empty() {
    let small = StringInterner::new();
    let large = StringInterner::new();
    let mut last = Name::EMPTY;
    for i in 0..8 {
        last = large.intern(&format!("field{i}"));
    }
    assert_eq!(small.lookup(last), "");
}

#[test]
fn test_names_follow_interning_order() {
    let interner = StringInterner::new();
    let first = interner.intern("alpha");
    let second = interner.intern("beta");
    assert!(first < second);
    assert_eq!(second.raw(), first.raw() + 1);
}
