#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::LineEnding;
use crate::dictionary::Dictionary;
use pretty_assertions::assert_eq;
use wick_numeric::Integer;

fn text(s: &str) -> Value {
    Value::text(s)
}

fn lf_store() -> VariableStore {
    VariableStore::with_config(ValueConfig::default().with_line_ending(LineEnding::Lf))
}

// Declaration and lookup

#[test]
fn names_are_case_insensitive() {
    let mut store = VariableStore::new();
    store.declare("Count", None, None).unwrap();
    store.set("COUNT", text("42")).unwrap();
    assert_eq!(store.get("count"), Some(text("42")));
    assert!(store.is_declared("cOuNt"));
    assert_eq!(store.declared_name("count"), Some("Count"));
}

#[test]
fn declare_defaults() {
    let mut store = VariableStore::new();
    store.declare("s", None, None).unwrap();
    store.declare("n", Some(ValueKind::Integer), None).unwrap();
    store.declare("flag", Some(ValueKind::Boolean), None).unwrap();
    assert_eq!(store.kind_of("s"), Some(ValueKind::Text));
    assert_eq!(store.get("s"), Some(text("")));
    assert_eq!(store.get("n"), Some(Value::Integer(Integer::zero())));
    assert_eq!(store.get("flag"), Some(Value::Empty));
}

#[test]
fn declare_coerces_initial_value() {
    let mut store = VariableStore::new();
    store
        .declare("n", Some(ValueKind::Integer), Some(text("7")))
        .unwrap();
    assert_eq!(store.get("n"), Some(Value::integer(7)));

    let err = store
        .declare("m", Some(ValueKind::Integer), Some(text("seven")))
        .unwrap_err();
    assert!(err.is_coercion_failure());
    assert!(!store.is_declared("m"));
}

#[test]
fn undeclared_contents_is_the_name() {
    let store = VariableStore::new();
    assert_eq!(store.get("hello"), None);
    assert_eq!(store.contents("hello"), text("hello"));
}

// Assignment

#[test]
fn set_coerces_to_declared_kind() {
    let mut store = VariableStore::new();
    store.declare("n", Some(ValueKind::Integer), None).unwrap();
    store.set("n", text(" 12 ")).unwrap();
    assert_eq!(store.get("n"), Some(Value::integer(12)));

    let err = store.set("n", text("twelve")).unwrap_err();
    assert!(err.is_coercion_failure());
    assert_eq!(store.get("n"), Some(Value::integer(12)));
}

#[test]
fn set_declares_unknown_names_as_text() {
    let mut store = VariableStore::new();
    store.set("fresh", Value::integer(5)).unwrap();
    assert_eq!(store.kind_of("fresh"), Some(ValueKind::Text));
    assert_eq!(store.get("fresh"), Some(text("5")));
}

#[test]
fn set_reads_its_own_old_value_first() {
    let mut store = VariableStore::new();
    store.set("x", text("abc")).unwrap();
    let word = Value::chunk(
        Value::variable("x"),
        crate::container::Address::Chunk(wick_chunk::ChunkSpec::nth(ChunkKind::Character, 2)),
    );
    store.set("x", word).unwrap();
    assert_eq!(store.get("x"), Some(text("b")));
}

#[test]
fn prepend_and_append_concatenate() {
    let mut store = VariableStore::new();
    store.set("s", text("middle")).unwrap();
    store.prepend("s", text("<")).unwrap();
    store.append("s", text(">")).unwrap();
    assert_eq!(store.get("s"), Some(text("<middle>")));

    store.declare("n", Some(ValueKind::Integer), Some(Value::integer(1))).unwrap();
    store.append("n", Value::integer(2)).unwrap();
    assert_eq!(store.get("n"), Some(Value::integer(12)));
}

#[test]
fn append_to_undeclared_starts_empty() {
    let mut store = VariableStore::new();
    store.append("log", text("first")).unwrap();
    assert_eq!(store.get("log"), Some(text("first")));
}

#[test]
fn append_merges_dictionaries() {
    let mut store = VariableStore::new();
    let initial = Dictionary::from_entries([("a", text("1"))]);
    store
        .declare("d", Some(ValueKind::Dictionary), Some(initial.into()))
        .unwrap();
    store
        .append("d", Dictionary::from_entries([("a", text("A")), ("b", text("2"))]).into())
        .unwrap();
    let expected = Dictionary::from_entries([("a", text("A")), ("b", text("2"))]);
    assert_eq!(store.get("d"), Some(Value::Dictionary(expected)));
}

#[test]
fn assign_with_follows_preposition() {
    let mut store = VariableStore::new();
    store.assign_with("v", text("b"), Preposition::Into).unwrap();
    store.assign_with("v", text("a"), Preposition::Before).unwrap();
    store.assign_with("v", text("c"), Preposition::After).unwrap();
    assert_eq!(store.get("v"), Some(text("abc")));
}

// Scopes

#[test]
fn inner_scopes_shadow_and_pop() {
    let mut store = VariableStore::new();
    store.set("x", text("outer")).unwrap();
    store.push_scope();
    store.declare("X", None, Some(text("inner"))).unwrap();
    assert_eq!(store.get("x"), Some(text("inner")));
    store.set("y", text("local")).unwrap();
    assert_eq!(store.depth(), 2);

    assert!(store.pop_scope());
    assert_eq!(store.get("x"), Some(text("outer")));
    assert!(!store.is_declared("y"));
    assert!(!store.pop_scope());
}

#[test]
fn assignment_reaches_outer_declarations() {
    let mut store = VariableStore::new();
    store.declare("total", Some(ValueKind::Integer), None).unwrap();
    store.push_scope();
    store.set("total", text("3")).unwrap();
    store.pop_scope();
    assert_eq!(store.get("total"), Some(Value::integer(3)));
}

#[test]
fn remove_drops_innermost() {
    let mut store = VariableStore::new();
    store.set("x", text("outer")).unwrap();
    store.push_scope();
    store.declare("x", None, Some(text("inner"))).unwrap();
    assert_eq!(store.remove("X"), Some(text("inner")));
    assert_eq!(store.get("x"), Some(text("outer")));
    assert_eq!(store.remove("missing"), None);
}

// Sorting

#[test]
fn sort_lines_of_text() {
    let mut store = lf_store();
    store.set("v", text("b\na\nc")).unwrap();
    store
        .sort("v", SortStyle::Text, SortDirection::Ascending)
        .unwrap();
    assert_eq!(store.get("v"), Some(text("a\nb\nc")));
}

#[test]
fn text_sort_ignores_case_then_breaks_ties() {
    let mut store = lf_store();
    store.set("v", text("b\na\nB\nA")).unwrap();
    store.sort("v", SortStyle::Text, SortDirection::Ascending).unwrap();
    assert_eq!(store.get("v"), Some(text("A\na\nB\nb")));
}

#[test]
fn reassembly_uses_configured_line_ending() {
    let mut store =
        VariableStore::with_config(ValueConfig::default().with_line_ending(LineEnding::CrLf));
    store.set("v", text("2\n1")).unwrap();
    store.sort("v", SortStyle::Text, SortDirection::Ascending).unwrap();
    assert_eq!(store.get("v"), Some(text("1\r\n2")));
}

#[test]
fn numeric_sort_puts_non_numbers_last() {
    let mut store = lf_store();
    store.set("v", text("10\nx\n9\n100")).unwrap();
    store.sort("v", SortStyle::Numeric, SortDirection::Ascending).unwrap();
    assert_eq!(store.get("v"), Some(text("9\n10\n100\nx")));

    store.sort("v", SortStyle::Numeric, SortDirection::Descending).unwrap();
    assert_eq!(store.get("v"), Some(text("100\n10\n9\nx")));
}

#[test]
fn datetime_sort() {
    let mut store = lf_store();
    store
        .set("v", text("2024-05-01\nnot a date\n2023-12-31\n2024-01-15"))
        .unwrap();
    store.sort("v", SortStyle::DateTime, SortDirection::Ascending).unwrap();
    assert_eq!(
        store.get("v"),
        Some(text("2023-12-31\n2024-01-15\n2024-05-01\nnot a date"))
    );
}

#[test]
fn sort_list_elements_keeps_list_kind() {
    let mut store = VariableStore::new();
    let items = vec![Value::integer(3), Value::integer(1), Value::integer(2)];
    store
        .declare("l", Some(ValueKind::List), Some(Value::list(items)))
        .unwrap();
    store.sort("l", SortStyle::Numeric, SortDirection::Ascending).unwrap();
    assert_eq!(
        store.get("l"),
        Some(Value::list(vec![
            Value::integer(1),
            Value::integer(2),
            Value::integer(3)
        ]))
    );
}

#[test]
fn sort_binary_bytes() {
    let mut store = VariableStore::new();
    store
        .declare("b", Some(ValueKind::Binary), Some(Value::binary(b"cab".to_vec())))
        .unwrap();
    store.sort("b", SortStyle::Text, SortDirection::Ascending).unwrap();
    assert_eq!(store.get("b"), Some(Value::binary(b"abc".to_vec())));
}

#[test]
fn sort_by_custom_comparator() {
    let mut store = lf_store();
    store.set("v", text("ccc\na\nbb")).unwrap();
    store
        .sort_by("v", |a, b| {
            let len = |v: &Value| v.as_text().map_or(0, str::len);
            len(a).cmp(&len(b))
        })
        .unwrap();
    assert_eq!(store.get("v"), Some(text("a\nbb\nccc")));
}

#[test]
fn sorting_undeclared_variable_fails() {
    let mut store = VariableStore::new();
    let err = store
        .sort("ghost", SortStyle::Text, SortDirection::Ascending)
        .unwrap_err();
    assert!(err.is_access_failure());
    assert_eq!(err.message, "variable 'ghost' is not declared");
}

#[test]
fn sort_style_names() {
    assert_eq!("Numeric".parse::<SortStyle>().unwrap(), SortStyle::Numeric);
    assert_eq!(SortStyle::DateTime.to_string(), "datetime");
    assert!("random".parse::<SortStyle>().is_err());
}
