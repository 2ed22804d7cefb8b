//! Property-based tests for coercion, dictionaries and variables.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use chrono::DateTime;
use proptest::prelude::*;
use wick_value::grammar::{parse, render};
use wick_value::{
    convert_concat_to, convert_to, Decimal, Dictionary, LineEnding, SortDirection, SortStyle,
    Value, ValueConfig, ValueKind, VariableStore,
};

// -- Strategies --

/// Keys drawn from printable ASCII, including the characters that force
/// quoting.
fn key_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,10}"
}

/// Single-line text that cannot be mistaken for a nested block.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    "[a-zA-Z0-9 ,.!?]{0,12}".prop_map(Value::text)
}

/// Dictionaries nested at most five levels deep.
fn dictionary_strategy() -> impl Strategy<Value = Dictionary> {
    let flat = prop::collection::vec((key_strategy(), leaf_strategy()), 0..4)
        .prop_map(Dictionary::from_entries);
    flat.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(
            (
                key_strategy(),
                prop_oneof![leaf_strategy(), inner.prop_map(Value::Dictionary)],
            ),
            0..4,
        )
        .prop_map(Dictionary::from_entries)
    })
}

/// A plain value of every concrete kind.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,12}".prop_map(Value::text),
        any::<i64>().prop_map(Value::from),
        (any::<i64>(), 0u32..6).prop_map(|(n, scale)| Value::Decimal(Decimal::new(n, scale))),
        any::<bool>().prop_map(Value::Boolean),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::from),
        prop::collection::vec("[a-z]{0,4}".prop_map(Value::text), 0..4).prop_map(Value::list),
        dictionary_strategy().prop_map(Value::Dictionary),
        (0i64..4_000_000_000).prop_map(|secs| {
            Value::Date(DateTime::from_timestamp(secs, 0).unwrap().naive_utc())
        }),
    ]
}

fn target_strategy() -> impl Strategy<Value = ValueKind> {
    prop_oneof![
        Just(ValueKind::Text),
        Just(ValueKind::Integer),
        Just(ValueKind::Decimal),
        Just(ValueKind::Number),
        Just(ValueKind::Boolean),
        Just(ValueKind::Binary),
        Just(ValueKind::Dictionary),
        Just(ValueKind::Date),
    ]
}

/// Text that often parses as a number, boolean or date.
fn operand_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(|n| Value::text(n.to_string())),
        Just(Value::text("true")),
        Just(Value::text("2024-02-29")),
        "[a-z0-9.]{1,6}".prop_map(Value::text),
        value_strategy(),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Rendering then parsing gives back the same dictionary.
    #[test]
    fn prop_dictionary_round_trip(dict in dictionary_strategy()) {
        let config = ValueConfig::default();
        let text = render(&dict, &config).unwrap();
        prop_assert_eq!(parse(&text), Some(dict), "rendered: {:?}", text);
    }

    /// A value already of the target kind converts to itself.
    #[test]
    fn prop_coercion_identity(value in value_strategy()) {
        let config = ValueConfig::default();
        prop_assert_eq!(convert_to(value.kind(), &value, &config).unwrap(), value);
    }

    /// Empty is a two-sided identity for the concatenating form.
    #[test]
    fn prop_empty_is_concat_identity(kind in target_strategy(), x in operand_strategy()) {
        let config = ValueConfig::default();
        let alone = convert_to(kind, &x, &config);
        prop_assert_eq!(&convert_concat_to(kind, &Value::Empty, &x, &config), &alone);
        prop_assert_eq!(&convert_concat_to(kind, &x, &Value::text(""), &config), &alone);
    }

    /// A one-element list converts like its element.
    #[test]
    fn prop_list_of_one_is_transparent(kind in target_strategy(), x in operand_strategy()) {
        let config = ValueConfig::default();
        if let Ok(direct) = convert_to(kind, &x, &config) {
            let wrapped = Value::list(vec![x]);
            prop_assert_eq!(convert_to(kind, &wrapped, &config).unwrap(), direct);
        }
    }

    /// Any casing of a name reaches the same slot.
    #[test]
    fn prop_variable_names_fold_case(name in name_strategy(), content in ".{0,12}") {
        let mut store = VariableStore::new();
        store.declare(&name, None, None).unwrap();
        store.set(&name.to_uppercase(), Value::text(content.as_str())).unwrap();
        prop_assert_eq!(store.get(&name.to_lowercase()), Some(Value::text(content)));
    }

    /// Text sorting orders lines case-insensitively.
    #[test]
    fn prop_sort_orders_lines(lines in prop::collection::vec("[a-zA-Z]{1,6}", 1..10)) {
        let config = ValueConfig::default().with_line_ending(LineEnding::Lf);
        let mut store = VariableStore::with_config(config);
        store.set("v", Value::text(lines.join("\n"))).unwrap();
        store.sort("v", SortStyle::Text, SortDirection::Ascending).unwrap();

        let mut expected = lines.clone();
        expected.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        prop_assert_eq!(store.get("v"), Some(Value::text(expected.join("\n"))));
    }
}

#[test]
fn documented_round_trip_example() {
    let config = ValueConfig::default();
    let nested = Dictionary::from_entries([("c", Value::text("2"))]);
    let dict = Dictionary::from_entries([
        ("a", Value::text("1")),
        ("b", Value::Dictionary(nested)),
    ]);
    let text = render(&dict, &config).unwrap();
    assert_eq!(text, "{\n\ta = 1\n\tb = {\n\t\tc = 2\n\t}\n}");
    assert_eq!(parse(&text), Some(dict));
}

#[test]
fn sort_example() {
    let mut store = VariableStore::with_config(ValueConfig::default().with_line_ending(LineEnding::Lf));
    store.set("v", Value::text("b\na\nc")).unwrap();
    store
        .sort("v", SortStyle::Text, SortDirection::Ascending)
        .unwrap();
    assert_eq!(store.get("v"), Some(Value::text("a\nb\nc")));
}
