//! Property-based invariant tests for the normalization core.
//!
//! 1. `normalize_role` is total and idempotent on its output
//! 2. `extract_list` never panics and only returns arrays found in the input
//! 3. A bare array always comes back unchanged under every envelope
//! 4. The category "select all" toggle is an involution from all-or-none
//! 5. Mappers never produce NaN money or empty display names

use contracts::shared::config::CurrencyConfig;
use contracts::shared::envelope::{extract_list, extract_single};
use contracts::shared::view_models::{Customer, CustomerView, Order, OrderView, Product};
use contracts::system::access::catalog::catalog;
use contracts::system::access::{normalize_role, CategoryState, PermissionSet, Role};
use proptest::prelude::*;
use serde_json::{json, Value};

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>().prop_map(|f| json!(f)),
        "[a-zA-Z0-9 _.,$-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("data".to_string()),
                        Just("items".to_string()),
                        Just("results".to_string()),
                        Just("orders".to_string()),
                        Just("name".to_string()),
                        Just("total".to_string()),
                        "[a-z]{1,8}",
                    ],
                    inner
                ),
                0..6
            )
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_role_input() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        any::<String>().prop_map(Some),
        prop_oneof![
            Just("CEO"),
            Just(" owner "),
            Just("Sales Rep"),
            Just("MANAGEMENT"),
            Just("super_admin"),
        ]
        .prop_map(|s| Some(s.to_string())),
    ]
}

fn collect_arrays<'a>(value: &'a Value, out: &mut Vec<&'a Vec<Value>>) {
    match value {
        Value::Array(items) => {
            out.push(items);
            items.iter().for_each(|v| collect_arrays(v, out));
        }
        Value::Object(map) => map.values().for_each(|v| collect_arrays(v, out)),
        _ => {}
    }
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_role_is_total_and_idempotent(raw in arb_role_input()) {
        let role = normalize_role(raw.as_deref());
        prop_assert!(Role::ALL.contains(&role));
        prop_assert_eq!(normalize_role(Some(role.as_str())), role);
    }

    #[test]
    fn normalize_role_ignores_case_and_padding(
        raw in prop_oneof![Just("ceo"), Just("manager"), Just("sales"), Just("admin")],
        upper in any::<bool>(),
        pad in 0usize..4,
    ) {
        let cased = if upper { raw.to_uppercase() } else { raw.to_string() };
        let padded = format!("{}{}{}", " ".repeat(pad), cased, " ".repeat(pad));
        prop_assert_eq!(normalize_role(Some(&padded)), normalize_role(Some(raw)));
    }

    #[test]
    fn extract_list_returns_an_array_from_the_input(response in arb_json(), key in "[a-z]{1,8}") {
        let list = extract_list(&response, &key);
        if !list.is_empty() {
            let mut arrays = Vec::new();
            collect_arrays(&response, &mut arrays);
            prop_assert!(arrays.iter().any(|a| **a == list));
        }
    }

    #[test]
    fn bare_array_survives_every_envelope(items in prop::collection::vec(any::<i32>(), 0..8)) {
        let items: Vec<Value> = items.into_iter().map(|n| json!(n)).collect();
        let shapes = [
            Value::Array(items.clone()),
            json!({"orders": items.clone()}),
            json!({"items": items.clone()}),
            json!({"results": items.clone()}),
            json!({"data": items.clone()}),
            json!({"data": {"orders": items.clone()}}),
        ];
        for shape in shapes {
            prop_assert_eq!(extract_list(&shape, "orders"), items.clone());
        }
    }

    #[test]
    fn extract_single_never_panics(response in arb_json()) {
        let single = extract_single(&response, &["message", "item"]);
        if !response.is_object() {
            prop_assert!(single.is_empty());
        }
    }

    #[test]
    fn select_all_twice_restores_all_or_none(category_idx in 0usize..9, start_full in any::<bool>()) {
        let category = &catalog().categories()[category_idx % catalog().categories().len()];
        let mut set = PermissionSet::new();
        if start_full {
            set.toggle_category(category);
        }
        let original = set.clone();

        set.toggle_category(category);
        set.toggle_category(category);
        prop_assert_eq!(&set, &original);
        prop_assert_ne!(set.category_state(category), CategoryState::Partial);
    }

    #[test]
    fn mappers_are_total(raw in arb_json()) {
        let currency = CurrencyConfig::default();

        let customer = Customer::from_raw(&raw);
        prop_assert!(!customer.name.is_empty());
        prop_assert!(customer.total_spent.is_finite());
        let view = CustomerView::new(customer, &currency);
        prop_assert!(!view.total_spent_display.contains("NaN"));

        let order = Order::from_raw(&raw);
        prop_assert!(order.total.is_finite());
        prop_assert!(!order.customer_name.is_empty());
        let view = OrderView::new(order, &currency);
        prop_assert!(!view.total_display.contains("NaN"));
        prop_assert!(!view.total_display.contains("inf"));

        let product = Product::from_raw(&raw);
        prop_assert!(product.price.is_finite());
        prop_assert!(!product.name.is_empty());
    }
}
