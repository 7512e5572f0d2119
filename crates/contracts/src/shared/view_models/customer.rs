use serde::Serialize;
use serde_json::Value;

use super::avatar::{avatar_color, initials};
use super::defaults::{RawRecord, UNKNOWN_NAME};
use crate::shared::config::CurrencyConfig;
use crate::shared::envelope::{extract_list, CUSTOMERS_KEY};
use crate::shared::format::{format_count, format_money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_orders: u64,
    pub total_spent: f64,
    pub created_at: String,
}

/// Display name of a customer-like record.
///
/// `name`, then `first last`, then `email`, then `"Unknown"`.
pub fn customer_display_name(record: &RawRecord) -> String {
    if let Some(name) = record.opt_text(&["name", "fullName", "full_name"]) {
        return name;
    }
    let full = format!(
        "{} {}",
        record.text(&["firstName", "first_name"]),
        record.text(&["lastName", "last_name"])
    );
    let full = full.trim();
    if !full.is_empty() {
        return full.to_string();
    }
    record
        .opt_text(&["email"])
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

impl Customer {
    pub fn from_raw(value: &Value) -> Self {
        let record = RawRecord::new(value);
        Self {
            id: record.id(),
            name: customer_display_name(&record),
            email: record.text(&["email"]),
            phone: record.text(&["phone", "phoneNumber", "phone_number"]),
            total_orders: record.count(&["totalOrders", "total_orders", "ordersCount", "orders_count"]),
            total_spent: record.amount(&["totalSpent", "total_spent", "lifetimeValue"]),
            created_at: record.text(&["createdAt", "created_at"]),
        }
    }
}

/// Customers from a list response, whatever its envelope.
pub fn customers_from_response(response: &Value) -> Vec<Customer> {
    extract_list(response, CUSTOMERS_KEY)
        .iter()
        .map(Customer::from_raw)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerView {
    #[serde(flatten)]
    pub customer: Customer,
    pub initials: String,
    pub avatar_color: &'static str,
    pub total_spent_display: String,
    pub total_orders_display: String,
}

impl CustomerView {
    pub fn new(customer: Customer, currency: &CurrencyConfig) -> Self {
        Self {
            initials: initials(&customer.name),
            avatar_color: avatar_color(&customer.name),
            total_spent_display: format_money(customer.total_spent, currency),
            total_orders_display: format_count(
                customer.total_orders as f64,
                &currency.thousands_separator,
            ),
            customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name_of(value: Value) -> String {
        Customer::from_raw(&value).name
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(name_of(json!({"name": "Acme Ltd", "firstName": "Jane"})), "Acme Ltd");
        assert_eq!(name_of(json!({"firstName": "Jane", "lastName": "Doe"})), "Jane Doe");
        assert_eq!(name_of(json!({"first_name": "Jane"})), "Jane");
        assert_eq!(name_of(json!({"lastName": "Doe", "email": "d@x.io"})), "Doe");
        assert_eq!(name_of(json!({"name": "", "email": "d@x.io"})), "d@x.io");
        assert_eq!(name_of(json!({})), "Unknown");
        assert_eq!(name_of(json!(null)), "Unknown");
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let customer = Customer::from_raw(&json!({"id": 7, "totalSpent": null, "totalOrders": "x"}));
        assert_eq!(customer.id, "7");
        assert_eq!(customer.total_spent, 0.0);
        assert_eq!(customer.total_orders, 0);
    }

    #[test]
    fn test_view_model() {
        let customer = Customer::from_raw(&json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "totalSpent": "1234.5",
            "totalOrders": 1200,
        }));
        let view = CustomerView::new(customer, &CurrencyConfig::default());
        assert_eq!(view.customer.name, "Jane Doe");
        assert_eq!(view.initials, "JD");
        assert_eq!(view.total_spent_display, "$1,234.50");
        assert_eq!(view.total_orders_display, "1,200");
    }

    #[test]
    fn test_customers_from_nested_envelope() {
        let response = json!({"data": {"customers": [{"name": "A"}, {"email": "b@x.io"}]}});
        let names: Vec<String> = customers_from_response(&response)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["A", "b@x.io"]);
    }
}
