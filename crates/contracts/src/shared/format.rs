//! Number, money and date formatting for view models.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::config::CurrencyConfig;

/// Formats a number with a thousands separator and a fixed number of decimals.
///
/// Non-finite input is treated as zero.
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ","), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Insert the separator every 3 digits from the right
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }

    // "-0.00" reads badly on a card
    let sign = if grouped.chars().all(|c| c == '0')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with currency symbol: `$1,234.50`, `-$12.00`.
pub fn format_money(value: f64, currency: &CurrencyConfig) -> String {
    let body = format_number_with_decimals(value, currency.decimals, &currency.thousands_separator);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", currency.symbol, abs),
        None => format!("{}{}", currency.symbol, body),
    }
}

/// Integer count with thousands separator.
pub fn format_count(value: f64, separator: &str) -> String {
    format_number_with_decimals(value, 0, separator)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals, ","))
}

/// Signed change label: `+12.5%`, `-3.0%`, `0.0%`.
pub fn format_change(change: f64) -> String {
    let body = format_percent(change, 1);
    if change.is_finite() && change > 0.0 && body != "0.0%" {
        format!("+{}", body)
    } else {
        body
    }
}

/// ISO date or datetime to `DD.MM.YYYY`; anything unparsable is returned as is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ","), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ","), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2, ","), "1,234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3, " "), "1 234.567");
        assert_eq!(format_number_with_decimals(123.0, 0, ","), "123");
        assert_eq!(format_number_with_decimals(123456.0, 0, ","), "123,456");
        assert_eq!(format_number_with_decimals(-1234567.0, 0, ","), "-1,234,567");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_number_with_decimals(f64::NAN, 2, ","), "0.00");
        assert_eq!(format_number_with_decimals(f64::INFINITY, 0, ","), "0");
        assert_eq!(format_number_with_decimals(-0.0001, 2, ","), "0.00");
    }

    #[test]
    fn test_format_money() {
        let usd = CurrencyConfig::default();
        assert_eq!(format_money(1234.5, &usd), "$1,234.50");
        assert_eq!(format_money(0.0, &usd), "$0.00");
        assert_eq!(format_money(-12.0, &usd), "-$12.00");
        assert_eq!(format_money(f64::NAN, &usd), "$0.00");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.46), "+12.5%");
        assert_eq!(format_change(-3.0), "-3.0%");
        assert_eq!(format_change(0.0), "0.0%");
        assert_eq!(format_change(0.01), "0.0%");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26"), "15.03.2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15.03.2024");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
