//! Per-entity mappers: raw backend record → normalized record → view model.
//!
//! Normalized records (`Customer`, `Order`, ...) only hold typed fields with
//! safe defaults. View models add presentation fields and are pure functions
//! of the record plus the currency configuration.

pub mod avatar;
pub mod customer;
pub mod defaults;
pub mod kpi;
pub mod message;
pub mod order;
pub mod product;

pub use customer::{customers_from_response, Customer, CustomerView};
pub use kpi::{kpis_from_response, KpiFormat, KpiMetric, KpiView, Trend, DASHBOARD_KPIS};
pub use message::{message_from_response, messages_from_response, Message, MessageView};
pub use order::{orders_from_response, Order, OrderView};
pub use product::{products_from_response, Product, ProductView, StockStatus};
