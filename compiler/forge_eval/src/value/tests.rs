use super::*;
use pretty_assertions::assert_eq;

fn s(text: &str) -> Value {
    Value::string(text)
}

#[test]
fn set_drops_later_duplicates() {
    let set = Value::set([s("a"), s("b"), s("a")]);
    assert_eq!(set.elements(), Some(&[s("a"), s("b")][..]));
}

#[test]
fn map_replaces_in_place() {
    let map = Value::map([
        (s("k1"), Value::Int(1)),
        (s("k2"), Value::Int(2)),
        (s("k1"), Value::Int(3)),
    ]);
    assert_eq!(
        map.entries(),
        Some(&[(s("k1"), Value::Int(3)), (s("k2"), Value::Int(2))][..])
    );
}

#[test]
fn sets_and_maps_compare_unordered() {
    assert_eq!(Value::set([s("a"), s("b")]), Value::set([s("b"), s("a")]));
    assert_eq!(
        Value::map([(s("x"), Value::Int(1)), (s("y"), Value::Int(2))]),
        Value::map([(s("y"), Value::Int(2)), (s("x"), Value::Int(1))])
    );
    // lists keep order
    assert_ne!(
        Value::list(vec![s("a"), s("b")]),
        Value::list(vec![s("b"), s("a")])
    );
    // kinds never compare equal
    assert_ne!(Value::list(vec![s("a")]), Value::set([s("a")]));
}

#[test]
fn optional_equality_includes_kind() {
    assert_eq!(Value::empty(WrapperKind::Generic), Value::empty(WrapperKind::Generic));
    assert_ne!(
        Value::empty(WrapperKind::Generic),
        Value::empty(WrapperKind::PrimitiveInt)
    );
    assert_eq!(
        Value::present(WrapperKind::PrimitiveInt, Value::Int(4)).optional_inner(),
        Some(Some(&Value::Int(4)))
    );
}

#[test]
fn zero_values() {
    assert_eq!(Value::zero(PrimitiveKind::Boolean), Value::Bool(false));
    assert_eq!(Value::zero(PrimitiveKind::Short), Value::Int(0));
    assert_eq!(Value::zero(PrimitiveKind::Float), Value::Double(0.0));
    assert_eq!(Value::zero(PrimitiveKind::Char), Value::Char('\0'));
}

#[test]
fn empty_collections_match_kind() {
    assert_eq!(
        Value::empty_collection(CollectionKind::Map).collection_kind(),
        Some(CollectionKind::Map)
    );
    assert_eq!(
        Value::empty_collection(CollectionKind::Set).elements(),
        Some(&[][..])
    );
}

#[test]
fn conformance() {
    let interner = StringInterner::new();
    let string = TypeRef::class(interner.intern("String"));
    let list_of_strings = TypeRef::generic(interner.intern("List"), [string.clone()]);
    let int = TypeRef::primitive(PrimitiveKind::Int);

    assert!(Value::Int(1).conforms_to(&int, &interner));
    assert!(!Value::Null.conforms_to(&int, &interner));
    assert!(Value::Null.conforms_to(&string, &interner));
    assert!(!Value::Int(1).conforms_to(&string, &interner));

    assert!(Value::list(vec![s("a")]).conforms_to(&list_of_strings, &interner));
    assert!(!Value::list(vec![Value::Int(1)]).conforms_to(&list_of_strings, &interner));
    assert!(!Value::set([s("a")]).conforms_to(&list_of_strings, &interner));

    let iterable = TypeRef::generic(interner.intern("Iterable"), [string.clone()]);
    assert!(Value::set([s("a")]).conforms_to(&iterable, &interner));

    let optional = TypeRef::generic(interner.intern("Optional"), [string]);
    assert!(Value::present(WrapperKind::Generic, s("a")).conforms_to(&optional, &interner));
    assert!(Value::empty(WrapperKind::Generic).conforms_to(&optional, &interner));
    assert!(!Value::empty(WrapperKind::PrimitiveInt).conforms_to(&optional, &interner));

    let optional_int = TypeRef::class(interner.intern("OptionalInt"));
    assert!(Value::present(WrapperKind::PrimitiveInt, Value::Int(2))
        .conforms_to(&optional_int, &interner));
    assert!(!Value::present(WrapperKind::PrimitiveInt, s("2"))
        .conforms_to(&optional_int, &interner));

    // variables and unknown classes are unchecked
    assert!(s("x").conforms_to(&TypeRef::var(interner.intern("T")), &interner));
    assert!(Value::Int(3).conforms_to(&TypeRef::class(interner.intern("Widget")), &interner));
}

#[test]
fn display() {
    let map = Value::map([(s("k"), Value::list(vec![Value::Int(1), Value::Bool(true)]))]);
    assert_eq!(map.to_string(), r#"{"k"=[1, true]}"#);
    assert_eq!(
        Value::present(WrapperKind::Generic, Value::Char('c')).to_string(),
        "Optional['c']"
    );
    assert_eq!(Value::empty(WrapperKind::PrimitiveLong).to_string(), "OptionalLong.empty");
}

#[test]
fn display_nested_optional_through_heap() {
    let inner = Value::present(WrapperKind::Generic, s("x"));
    let outer = Value::present(WrapperKind::Generic, inner);
    assert_eq!(outer.to_string(), r#"Optional[Optional["x"]]"#);

    let Value::Optional { inner: Some(heap), .. } = &outer else {
        unreachable!()
    };
    assert_eq!(heap.to_string(), r#"Optional["x"]"#);
}

#[test]
fn heap_clones_share_allocation() {
    let Value::Str(a) = s("shared") else {
        unreachable!()
    };
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(&**b, "shared");
}
