use serde::Serialize;
use serde_json::Value;

use super::customer::customer_display_name;
use super::defaults::{RawRecord, DEFAULT_ORDER_STATUS, UNKNOWN_NAME};
use crate::shared::config::CurrencyConfig;
use crate::shared::envelope::{extract_list, ORDERS_KEY};
use crate::shared::format::{format_date, format_money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub number: String,
    pub customer_name: String,
    pub total: f64,
    pub status: String,
    pub item_count: u64,
    pub created_at: String,
}

impl Order {
    pub fn from_raw(value: &Value) -> Self {
        let record = RawRecord::new(value);
        let id = record.id();

        let number = record
            .opt_text(&["orderNumber", "order_number", "number", "reference"])
            .unwrap_or_else(|| id.clone());

        // embedded customer object first, then flat name fields
        let customer_name = match record.nested(&["customer"]) {
            Some(customer) => customer_display_name(&customer),
            None => record
                .opt_text(&["customerName", "customer_name", "customer"])
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        };

        let item_count = match record.field(&["items", "lineItems", "line_items"]) {
            Some(Value::Array(items)) => items.len() as u64,
            _ => record.count(&["itemCount", "item_count", "itemsCount", "quantity"]),
        };

        let status = record
            .opt_text(&["status", "orderStatus", "order_status"])
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string());

        Self {
            number,
            customer_name,
            total: record.amount(&["total", "totalAmount", "total_amount", "amount", "grandTotal"]),
            status,
            item_count,
            created_at: record.text(&["createdAt", "created_at", "date", "orderDate"]),
            id,
        }
    }
}

pub fn orders_from_response(response: &Value) -> Vec<Order> {
    extract_list(response, ORDERS_KEY)
        .iter()
        .map(Order::from_raw)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub total_display: String,
    pub date_display: String,
    pub status_label: String,
}

impl OrderView {
    pub fn new(order: Order, currency: &CurrencyConfig) -> Self {
        Self {
            total_display: format_money(order.total, currency),
            date_display: format_date(&order.created_at),
            status_label: status_label(&order.status),
            order,
        }
    }
}

/// `partially_shipped` -> `Partially shipped`.
fn status_label(status: &str) -> String {
    let spaced = status.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
