//! Response envelope normalization.
//!
//! Backend endpoints wrap their payload in several shapes (`[..]`,
//! `{items: [..]}`, `{data: {orders: [..]}}`, ...). Every list screen goes
//! through [`extract_list`] and every detail screen through
//! [`extract_single`], so a shape change on the server degrades to an empty
//! list instead of a broken page.

use serde_json::{Map, Value};

pub const CUSTOMERS_KEY: &str = "customers";
pub const ORDERS_KEY: &str = "orders";
pub const PRODUCTS_KEY: &str = "products";
pub const MESSAGES_KEY: &str = "messages";
pub const KPIS_KEY: &str = "kpis";

/// Recognized list envelope, in resolution order.
///
/// [`Envelope::classify`] tries the variants top to bottom and stops at the
/// first one whose slot holds an array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
    /// `[..]`
    Bare(&'a [Value]),
    /// `{<key>: [..]}`
    Keyed(&'a [Value]),
    /// `{items: [..]}`
    Items(&'a [Value]),
    /// `{results: [..]}`
    Results(&'a [Value]),
    /// `{data: [..]}`
    Data(&'a [Value]),
    /// `{data: {<key>: [..]}}`
    DataKeyed(&'a [Value]),
    /// `{data: {data: [..]}}`
    DataData(&'a [Value]),
    Unrecognized,
}

impl<'a> Envelope<'a> {
    pub fn classify(response: &'a Value, preferred_key: &str) -> Self {
        if let Value::Array(items) = response {
            return Envelope::Bare(items);
        }
        if let Some(items) = array_at(response, preferred_key) {
            return Envelope::Keyed(items);
        }
        if let Some(items) = array_at(response, "items") {
            return Envelope::Items(items);
        }
        if let Some(items) = array_at(response, "results") {
            return Envelope::Results(items);
        }
        let data = response.get("data");
        if let Some(Value::Array(items)) = data {
            return Envelope::Data(items);
        }
        if let Some(items) = data.and_then(|d| array_at(d, preferred_key)) {
            return Envelope::DataKeyed(items);
        }
        if let Some(items) = data.and_then(|d| array_at(d, "data")) {
            return Envelope::DataData(items);
        }
        Envelope::Unrecognized
    }

    pub fn records(&self) -> &'a [Value] {
        match *self {
            Envelope::Bare(items)
            | Envelope::Keyed(items)
            | Envelope::Items(items)
            | Envelope::Results(items)
            | Envelope::Data(items)
            | Envelope::DataKeyed(items)
            | Envelope::DataData(items) => items,
            Envelope::Unrecognized => &[],
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Envelope::Unrecognized)
    }
}

fn array_at<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    match value.get(key) {
        Some(Value::Array(items)) => Some(items.as_slice()),
        _ => None,
    }
}

fn object_at<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

/// Canonical list out of any supported envelope. Empty when nothing matches.
pub fn extract_list(response: &Value, preferred_key: &str) -> Vec<Value> {
    let envelope = Envelope::classify(response, preferred_key);
    if !envelope.is_recognized() && !response.is_null() {
        log::debug!("no list under '{}' in response, using empty list", preferred_key);
    }
    envelope.records().to_vec()
}

/// Canonical object for a detail endpoint.
///
/// Order: `response[key]` for each key, `response.data[key]` for each key,
/// `response.data`, then the payload itself. Non-object payloads give an
/// empty map.
pub fn extract_single(response: &Value, preferred_keys: &[&str]) -> Map<String, Value> {
    for key in preferred_keys {
        if let Some(found) = object_at(response, key) {
            return found.clone();
        }
    }
    if let Some(data) = response.get("data") {
        for key in preferred_keys {
            if let Some(found) = object_at(data, key) {
                return found.clone();
            }
        }
        if let Value::Object(found) = data {
            return found.clone();
        }
    }
    match response {
        Value::Object(found) => found.clone(),
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_supported_shapes() {
        let expected = vec![json!(1), json!(2), json!(3)];
        let shapes = [
            json!([1, 2, 3]),
            json!({"orders": [1, 2, 3]}),
            json!({"items": [1, 2, 3]}),
            json!({"results": [1, 2, 3]}),
            json!({"data": [1, 2, 3]}),
            json!({"data": {"orders": [1, 2, 3]}}),
            json!({"data": {"data": [1, 2, 3]}}),
        ];
        for shape in shapes {
            assert_eq!(extract_list(&shape, ORDERS_KEY), expected, "{shape}");
        }
    }

    #[test]
    fn test_unrecognized_is_empty() {
        for shape in [
            json!({}),
            json!(null),
            json!({"foo": "bar"}),
            json!("text"),
            json!(42),
            json!({"items": {"not": "a list"}}),
            json!({"data": null}),
            json!({"data": "x"}),
        ] {
            assert!(extract_list(&shape, ORDERS_KEY).is_empty(), "{shape}");
        }
    }

    #[test]
    fn test_precedence_first_match_wins() {
        let response = json!({
            "items": [2],
            "orders": [1],
            "results": [3],
            "data": [4],
        });
        assert_eq!(Envelope::classify(&response, ORDERS_KEY), Envelope::Keyed(&[json!(1)]));

        let response = json!({"results": [3], "items": [2]});
        assert_eq!(extract_list(&response, ORDERS_KEY), vec![json!(2)]);

        let response = json!({"data": {"orders": [6], "data": [7]}, "results": [3]});
        assert_eq!(extract_list(&response, ORDERS_KEY), vec![json!(3)]);

        let response = json!({"data": {"orders": [6], "data": [7]}});
        assert_eq!(extract_list(&response, ORDERS_KEY), vec![json!(6)]);
    }

    #[test]
    fn test_preferred_key_is_not_hardcoded() {
        let response = json!({"customers": [{"id": 1}], "orders": [{"id": 2}]});
        assert_eq!(extract_list(&response, CUSTOMERS_KEY), vec![json!({"id": 1})]);
        assert_eq!(extract_list(&response, ORDERS_KEY), vec![json!({"id": 2})]);
        assert!(extract_list(&response, PRODUCTS_KEY).is_empty());
    }

    #[test]
    fn test_extract_single_precedence() {
        let response = json!({"message": {"id": 1}, "data": {"message": {"id": 2}}});
        assert_eq!(extract_single(&response, &["message"])["id"], json!(1));

        let response = json!({"data": {"message": {"id": 2}, "id": 3}});
        assert_eq!(extract_single(&response, &["message"])["id"], json!(2));

        let response = json!({"data": {"id": 3}});
        assert_eq!(extract_single(&response, &["message"])["id"], json!(3));

        let response = json!({"id": 4, "subject": "hi"});
        assert_eq!(extract_single(&response, &["message"])["id"], json!(4));
    }

    #[test]
    fn test_extract_single_key_order() {
        let response = json!({"customer": {"id": 1}, "item": {"id": 2}});
        assert_eq!(extract_single(&response, &["item", "customer"])["id"], json!(2));
    }

    #[test]
    fn test_extract_single_non_object() {
        assert!(extract_single(&json!(null), &["message"]).is_empty());
        assert!(extract_single(&json!([{"id": 1}]), &["message"]).is_empty());
        assert!(extract_single(&json!("x"), &[]).is_empty());
    }
}
