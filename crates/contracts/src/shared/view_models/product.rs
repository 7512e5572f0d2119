use serde::Serialize;
use serde_json::Value;

use super::defaults::{coerce_count, RawRecord, DEFAULT_REORDER_LEVEL, UNKNOWN_NAME};
use crate::shared::config::CurrencyConfig;
use crate::shared::envelope::{extract_list, PRODUCTS_KEY};
use crate::shared::format::{format_count, format_money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn classify(stock: u64, reorder_level: u64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: u64,
    pub reorder_level: u64,
}

impl Product {
    pub fn from_raw(value: &Value) -> Self {
        let record = RawRecord::new(value);

        // category is either a plain name or an embedded {name} object
        let category = match record.nested(&["category"]) {
            Some(category) => category.text(&["name", "title"]),
            None => record.text(&["category", "categoryName", "category_name"]),
        };

        let reorder_level = match record.field(&["reorderLevel", "reorder_level", "minStock"]) {
            Some(level) => coerce_count(Some(level)),
            None => DEFAULT_REORDER_LEVEL,
        };

        Self {
            id: record.id(),
            name: record
                .opt_text(&["name", "title", "productName"])
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            sku: record.text(&["sku", "SKU", "code"]),
            category,
            price: record.amount(&["price", "unitPrice", "unit_price", "sellingPrice"]),
            stock: record.count(&["stock", "quantity", "stockQuantity", "stock_quantity"]),
            reorder_level,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.reorder_level)
    }
}

pub fn products_from_response(response: &Value) -> Vec<Product> {
    extract_list(response, PRODUCTS_KEY)
        .iter()
        .map(Product::from_raw)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub price_display: String,
    pub stock_display: String,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
}

impl ProductView {
    pub fn new(product: Product, currency: &CurrencyConfig) -> Self {
        let stock_status = product.stock_status();
        Self {
            price_display: format_money(product.price, currency),
            stock_display: format_count(product.stock as f64, &currency.thousands_separator),
            stock_status,
            stock_label: stock_status.label(),
            product,
        }
    }
}
