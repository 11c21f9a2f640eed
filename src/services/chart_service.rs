use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{
    ChartSample, ChartView, DisplayRange, ForecastWindow, RangeBound, RawAnalyticsPayload,
    SeriesPoint,
};

/// Share of the value span added above and below the plotted values.
pub const RANGE_PAD_RATIO: f64 = 0.08;
/// Smallest padding applied, so a flat series still gets some headroom.
pub const MIN_RANGE_PAD: f64 = 1.0;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date entry into epoch milliseconds.
///
/// Numbers are taken as epoch milliseconds. Strings may be RFC 3339,
/// RFC 2822, a naive date-time or a bare date; naive forms are read as UTC.
pub fn parse_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|ms| ms.is_finite() && ms.abs() <= 8.64e15)
            .map(|ms| ms.trunc() as i64),
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Only JSON numbers count as closes; strings and nulls do not.
fn parse_close(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Pair `dates[i]` with `closings[i]`, dropping every index where either
/// side is unusable.
pub fn series_points(dates: &[Value], closings: &[Value]) -> Vec<SeriesPoint> {
    dates
        .iter()
        .enumerate()
        .filter_map(|(i, date)| {
            let timestamp = parse_timestamp(date)?;
            let value = closings.get(i).and_then(parse_close)?;
            Some(SeriesPoint { timestamp, value })
        })
        .collect()
}

/// Merge historical and forecast closes into one chronologically ordered
/// series, with its display range and the latest forecast.
///
/// Samples with equal timestamps keep history before forecast; they are
/// never folded into one sample.
pub fn merge(payload: &RawAnalyticsPayload) -> ChartView {
    let history = series_points(&payload.past_dates, &payload.past_closings);
    let forecast = series_points(&payload.closing_timestamps, &payload.future_closings);

    let mut samples: Vec<ChartSample> = history
        .into_iter()
        .map(ChartSample::history)
        .chain(forecast.into_iter().map(ChartSample::forecast))
        .collect();
    // sort_by_key is stable
    samples.sort_by_key(|s| s.timestamp);

    let range = display_range(&samples);
    let last_forecast = samples.iter().rev().find_map(|s| s.forecast_value);

    ChartView {
        samples,
        range,
        last_forecast,
    }
}

pub fn display_range(samples: &[ChartSample]) -> DisplayRange {
    let bounds = samples
        .iter()
        .flat_map(|s| s.values())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match bounds {
        None => DisplayRange::EMPTY,
        Some((lo, hi)) => {
            let pad = ((hi - lo) * RANGE_PAD_RATIO).max(MIN_RANGE_PAD);
            DisplayRange {
                low: lo - pad,
                high: RangeBound::Value(hi + pad),
            }
        }
    }
}

/// First and last forecast timestamps as sent, when both parse.
pub fn forecast_window(payload: &RawAnalyticsPayload) -> Option<ForecastWindow> {
    let start = parse_timestamp(payload.closing_timestamps.first()?)?;
    let end = parse_timestamp(payload.closing_timestamps.last()?)?;
    Some(ForecastWindow { start, end })
}
