use serde::Serialize;
use serde_json::Value;

use super::defaults::RawRecord;
use crate::shared::config::CurrencyConfig;
use crate::shared::envelope::{extract_list, KPIS_KEY};
use crate::shared::format::{format_change, format_count, format_money, format_percent};
use crate::system::access::catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Explicit backend `trend` wins; otherwise the sign of `change`.
    pub fn resolve(change: f64, explicit: Option<&str>) -> Self {
        if let Some(trend) = explicit.and_then(Trend::parse) {
            return trend;
        }
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "up" => Some(Trend::Up),
            "down" => Some(Trend::Down),
            "neutral" | "flat" => Some(Trend::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    Money,
    Number,
    Percent,
}

impl KpiFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "money" | "currency" => Some(KpiFormat::Money),
            "number" | "count" | "integer" => Some(KpiFormat::Number),
            "percent" | "percentage" => Some(KpiFormat::Percent),
            _ => None,
        }
    }
}

/// A dashboard KPI card known to the console, with the permission gating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub permission: &'static str,
    pub format: KpiFormat,
}

pub const DASHBOARD_KPIS: &[KpiDefinition] = &[
    KpiDefinition {
        key: "gross_revenue",
        label: "Gross Revenue",
        permission: catalog::VIEW_KPI_GROSS_REVENUE,
        format: KpiFormat::Money,
    },
    KpiDefinition {
        key: "net_profit",
        label: "Net Profit",
        permission: catalog::VIEW_KPI_NET_PROFIT,
        format: KpiFormat::Money,
    },
    KpiDefinition {
        key: "total_orders",
        label: "Total Orders",
        permission: catalog::VIEW_KPI_TOTAL_ORDERS,
        format: KpiFormat::Number,
    },
    KpiDefinition {
        key: "average_order_value",
        label: "Average Order Value",
        permission: catalog::VIEW_KPI_AVERAGE_ORDER_VALUE,
        format: KpiFormat::Money,
    },
    KpiDefinition {
        key: "inventory_value",
        label: "Inventory Value",
        permission: catalog::VIEW_KPI_INVENTORY_VALUE,
        format: KpiFormat::Money,
    },
    KpiDefinition {
        key: "low_stock",
        label: "Low Stock Items",
        permission: catalog::VIEW_KPI_LOW_STOCK,
        format: KpiFormat::Number,
    },
];

/// Card definition for a metric key; accepts `grossRevenue`,
/// `gross_revenue` and `GROSS_REVENUE` alike.
pub fn kpi_definition(key: &str) -> Option<&'static KpiDefinition> {
    let wanted = snake_case(key);
    DASHBOARD_KPIS.iter().find(|def| def.key == wanted)
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.trim().chars() {
        if c == '-' || c == ' ' || c == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
            continue;
        }
        // word break only on a lower-to-upper edge, so SHOUTING_CASE stays whole
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_lowercase());
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiMetric {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub change: f64,
    pub format: KpiFormat,
    pub trend: Trend,
}

impl KpiMetric {
    pub fn from_raw(value: &Value) -> Self {
        let record = RawRecord::new(value);
        let key = record.text(&["key", "id", "name", "metric"]);
        let definition = kpi_definition(&key);

        let label = record
            .opt_text(&["label", "title"])
            .or_else(|| definition.map(|d| d.label.to_string()))
            .unwrap_or_else(|| key.clone());
        let format = record
            .opt_text(&["format", "type"])
            .and_then(|f| KpiFormat::parse(&f))
            .or_else(|| definition.map(|d| d.format))
            .unwrap_or(KpiFormat::Number);
        let change = record.amount(&["change", "changePercent", "change_percent", "delta"]);
        let explicit_trend = record.opt_text(&["trend"]);

        Self {
            label,
            value: record.amount(&["value", "amount", "total"]),
            change,
            format,
            trend: Trend::resolve(change, explicit_trend.as_deref()),
            key,
        }
    }

    /// Permission gating this metric's card, `None` for metrics the console
    /// does not know.
    pub fn permission(&self) -> Option<&'static str> {
        kpi_definition(&self.key).map(|d| d.permission)
    }
}

pub fn kpis_from_response(response: &Value) -> Vec<KpiMetric> {
    extract_list(response, KPIS_KEY)
        .iter()
        .map(KpiMetric::from_raw)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiView {
    #[serde(flatten)]
    pub metric: KpiMetric,
    pub value_display: String,
    pub change_display: String,
    pub trend_label: &'static str,
}

impl KpiView {
    pub fn new(metric: KpiMetric, currency: &CurrencyConfig) -> Self {
        let value_display = match metric.format {
            KpiFormat::Money => format_money(metric.value, currency),
            KpiFormat::Number => format_count(metric.value, &currency.thousands_separator),
            KpiFormat::Percent => format_percent(metric.value, 1),
        };
        Self {
            value_display,
            change_display: format_change(metric.change),
            trend_label: metric.trend.as_str(),
            metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trend_from_change() {
        assert_eq!(Trend::resolve(3.2, None), Trend::Up);
        assert_eq!(Trend::resolve(-0.1, None), Trend::Down);
        assert_eq!(Trend::resolve(0.0, None), Trend::Neutral);
    }

    #[test]
    fn test_explicit_trend_overrides() {
        assert_eq!(Trend::resolve(3.2, Some("down")), Trend::Down);
        assert_eq!(Trend::resolve(-5.0, Some(" UP ")), Trend::Up);
        assert_eq!(Trend::resolve(5.0, Some("neutral")), Trend::Neutral);
        // unreadable override is ignored
        assert_eq!(Trend::resolve(5.0, Some("sideways")), Trend::Up);
    }

    #[test]
    fn test_definition_lookup() {
        assert_eq!(
            kpi_definition("grossRevenue").map(|d| d.permission),
            Some(catalog::VIEW_KPI_GROSS_REVENUE)
        );
        assert_eq!(kpi_definition("low_stock").map(|d| d.key), Some("low_stock"));
        assert!(kpi_definition("churn").is_none());
    }

    #[test]
    fn test_definition_lookup_key_casings() {
        for key in ["GROSS_REVENUE", "GrossRevenue", "gross-revenue", " grossRevenue "] {
            assert_eq!(kpi_definition(key).map(|d| d.key), Some("gross_revenue"), "{key}");
        }
        assert_eq!(
            kpi_definition("AverageOrderValue").map(|d| d.key),
            Some("average_order_value")
        );
        assert_eq!(kpi_definition("LOW_STOCK").map(|d| d.key), Some("low_stock"));
    }

    #[test]
    fn test_metric_defaults_from_definition() {
        let metric = KpiMetric::from_raw(&json!({"key": "grossRevenue", "value": "15000", "change": 4}));
        assert_eq!(metric.label, "Gross Revenue");
        assert_eq!(metric.format, KpiFormat::Money);
        assert_eq!(metric.trend, Trend::Up);
        assert_eq!(metric.permission(), Some(catalog::VIEW_KPI_GROSS_REVENUE));

        let view = KpiView::new(metric, &CurrencyConfig::default());
        assert_eq!(view.value_display, "$15,000.00");
        assert_eq!(view.change_display, "+4.0%");
        assert_eq!(view.trend_label, "up");
    }

    #[test]
    fn test_metric_with_garbage_values() {
        let metric = KpiMetric::from_raw(&json!({"id": "churn", "value": null, "change": "n/a", "trend": "down"}));
        assert_eq!(metric.label, "churn");
        assert_eq!(metric.value, 0.0);
        assert_eq!(metric.trend, Trend::Down);
        assert_eq!(metric.permission(), None);

        let view = KpiView::new(metric, &CurrencyConfig::default());
        assert_eq!(view.value_display, "0");
        assert_eq!(view.change_display, "0.0%");
    }

    #[test]
    fn test_kpis_from_keyed_envelope() {
        let response = json!({"kpis": [{"key": "total_orders", "value": 1520}]});
        let kpis = kpis_from_response(&response);
        assert_eq!(kpis.len(), 1);
        let view = KpiView::new(kpis[0].clone(), &CurrencyConfig::default());
        assert_eq!(view.value_display, "1,520");
    }
}
