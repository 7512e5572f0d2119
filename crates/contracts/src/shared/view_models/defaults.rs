//! Default substitution policy for raw backend records.
//!
//! Mappers never read a `serde_json::Value` directly; they go through
//! [`RawRecord`], and this module alone decides what a missing, `null` or
//! malformed field turns into:
//!
//! | field kind      | missing / malformed          |
//! |-----------------|------------------------------|
//! | text            | `""`                         |
//! | money, amounts  | `0.0` (never NaN or ∞)       |
//! | counts          | `0` (negatives clamp to `0`) |
//! | flags           | `false`                      |
//! | display names   | `"Unknown"`                  |

use serde_json::{Map, Value};

pub const DEFAULT_TEXT: &str = "";
pub const DEFAULT_AMOUNT: f64 = 0.0;
pub const DEFAULT_COUNT: u64 = 0;
pub const UNKNOWN_NAME: &str = "Unknown";
pub const DEFAULT_ORDER_STATUS: &str = "pending";
pub const DEFAULT_REORDER_LEVEL: u64 = 10;

/// Number from a JSON number or numeric string, `0.0` otherwise.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_grouped(s.trim()),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(DEFAULT_AMOUNT)
}

// Commas are only read as thousands separators in well-formed groups
// ("1,234.50"); "1,5" or "12,50" are rejected rather than rescaled.
fn parse_grouped(s: &str) -> Option<f64> {
    if !s.contains(',') {
        return s.parse::<f64>().ok();
    }

    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let integer = unsigned.split('.').next().unwrap_or_default();
    let mut groups = integer.split(',');
    let head = groups.next().unwrap_or_default();
    let head_ok = (1..=3).contains(&head.len()) && head.bytes().all(|b| b.is_ascii_digit());
    let tail_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
    if !head_ok || !tail_ok {
        return None;
    }

    s.replace(',', "").parse::<f64>().ok()
}

/// Non-negative integer; fractions are truncated.
pub fn coerce_count(value: Option<&Value>) -> u64 {
    let amount = coerce_amount(value);
    if amount <= 0.0 {
        DEFAULT_COUNT
    } else {
        amount.trunc() as u64
    }
}

pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => DEFAULT_TEXT.to_string(),
    }
}

pub fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Read-only view over one raw backend record.
///
/// Field lookups take a list of aliases (camelCase and snake_case spellings
/// of the same field) and use the first one that is present and not `null`.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    /// Non-object values behave like an empty record.
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    pub fn from_map(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    pub fn field(&self, aliases: &[&str]) -> Option<&'a Value> {
        let fields = self.fields?;
        aliases
            .iter()
            .filter_map(|alias| fields.get(*alias))
            .find(|value| !value.is_null())
    }

    /// First alias holding non-empty text.
    pub fn opt_text(&self, aliases: &[&str]) -> Option<String> {
        let fields = self.fields?;
        aliases
            .iter()
            .map(|alias| coerce_text(fields.get(*alias)))
            .find(|text| !text.is_empty())
    }

    pub fn text(&self, aliases: &[&str]) -> String {
        self.opt_text(aliases)
            .unwrap_or_else(|| DEFAULT_TEXT.to_string())
    }

    pub fn amount(&self, aliases: &[&str]) -> f64 {
        coerce_amount(self.field(aliases))
    }

    pub fn opt_amount(&self, aliases: &[&str]) -> Option<f64> {
        self.field(aliases).map(|v| coerce_amount(Some(v)))
    }

    pub fn count(&self, aliases: &[&str]) -> u64 {
        coerce_count(self.field(aliases))
    }

    pub fn flag(&self, aliases: &[&str]) -> bool {
        coerce_flag(self.field(aliases))
    }

    /// Nested object under the first matching alias.
    pub fn nested(&self, aliases: &[&str]) -> Option<RawRecord<'a>> {
        self.field(aliases)
            .and_then(Value::as_object)
            .map(RawRecord::from_map)
    }

    pub fn id(&self) -> String {
        self.text(&["id", "_id", "uuid"])
    }
}
