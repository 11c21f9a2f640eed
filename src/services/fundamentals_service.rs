use serde_json::Value;

use crate::models::{FundamentalStat, FundamentalsView, RawAnalyticsPayload};

/// Shown for a missing value.
pub const MISSING: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Grouped, at most two fraction digits
    Number,
    /// Rounded and grouped
    Integer,
    /// Two decimals and `%`; values below 1 are fractions
    Percent,
    Text,
}

/// The fundamentals table: label, origin key, format.
pub const FUNDAMENTAL_FIELDS: [(&str, &str, StatFormat); 20] = [
    ("Open", "Today_Open", StatFormat::Number),
    ("High", "Today_High", StatFormat::Number),
    ("Low", "Today_Low", StatFormat::Number),
    ("Avg Vol (20d)", "Average_Volume_20d", StatFormat::Integer),
    ("Last Dividend", "Last Dividend", StatFormat::Number),
    ("Last Split", "Last Split", StatFormat::Number),
    ("Forward P/E", "Forward P/E", StatFormat::Number),
    ("Trailing EPS", "Trailing EPS", StatFormat::Number),
    ("PEG Ratio", "peg_ratio", StatFormat::Number),
    ("Price / Book", "price_to_book", StatFormat::Number),
    ("Market Cap", "market_cap", StatFormat::Integer),
    ("Beta", "beta", StatFormat::Number),
    ("Volatility (6m)", "volatility_6m", StatFormat::Number),
    ("Revenue Growth", "revenue_growth", StatFormat::Percent),
    ("EPS Growth (Q)", "eps_growth_q", StatFormat::Percent),
    ("Dividend Yield", "dividend_yield", StatFormat::Percent),
    ("Payout Ratio", "payout_ratio", StatFormat::Percent),
    ("50d MA", "ma_50", StatFormat::Number),
    ("200d MA", "ma_200", StatFormat::Number),
    ("Valuation", "valuation_label", StatFormat::Text),
];

/// Build the fundamentals table, or `None` when the origin sent none.
///
/// The header symbol prefers the origin's `Resolved_Symbol`, then the
/// catalog symbol, then the company name.
pub fn fundamentals_view(
    payload: &RawAnalyticsPayload,
    catalog_symbol: Option<&str>,
) -> Option<FundamentalsView> {
    let fundamentals = payload.fundamentals.as_ref()?;

    let symbol = fundamentals
        .get("Resolved_Symbol")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or(catalog_symbol.filter(|s| !s.is_empty()))
        .or(payload.company_name.as_deref())
        .unwrap_or_default()
        .to_string();

    let stats = FUNDAMENTAL_FIELDS
        .iter()
        .map(|&(label, key, format)| FundamentalStat {
            label,
            value: format_stat(fundamentals.get(key), format),
        })
        .collect();

    Some(FundamentalsView { symbol, stats })
}

pub fn format_stat(value: Option<&Value>, format: StatFormat) -> String {
    match (value, format) {
        (None | Some(Value::Null), _) => MISSING.to_string(),
        (Some(Value::Number(n)), StatFormat::Number) => n
            .as_f64()
            .map(|v| format_decimal(v, 2))
            .unwrap_or_else(|| n.to_string()),
        (Some(Value::Number(n)), StatFormat::Integer) => n
            .as_f64()
            .map(|v| format_decimal(v.round(), 0))
            .unwrap_or_else(|| n.to_string()),
        (Some(Value::Number(n)), StatFormat::Percent) => n
            .as_f64()
            .map(format_percent)
            .unwrap_or_else(|| n.to_string()),
        (Some(Value::String(s)), _) => s.clone(),
        (Some(other), _) => other.to_string(),
    }
}

fn format_percent(value: f64) -> String {
    let pct = if value < 1.0 { value * 100.0 } else { value };
    format!("{pct:.2}%")
}

/// Thousands separators and at most `max_fraction` digits, trailing zeros
/// trimmed.
pub fn format_decimal(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && frac_part.is_empty() {
        ""
    } else {
        sign
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
