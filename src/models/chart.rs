use serde::ser::{Serialize, SerializeTuple, Serializer};

/// One valid (timestamp, close) pair taken out of the origin's parallel
/// date/close arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub value: f64,
}

/// One point of the merged history/forecast series.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSample {
    pub timestamp: i64,
    pub history_value: Option<f64>,
    pub forecast_value: Option<f64>,
}

impl ChartSample {
    pub fn history(point: SeriesPoint) -> Self {
        Self {
            timestamp: point.timestamp,
            history_value: Some(point.value),
            forecast_value: None,
        }
    }

    pub fn forecast(point: SeriesPoint) -> Self {
        Self {
            timestamp: point.timestamp,
            history_value: None,
            forecast_value: Some(point.value),
        }
    }

    /// Present values of both sides, history first.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        self.history_value.into_iter().chain(self.forecast_value)
    }
}

/// Upper bound of the vertical display range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    /// Let the renderer fit the axis itself
    Auto,
    Value(f64),
}

impl Serialize for RangeBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RangeBound::Auto => serializer.serialize_str("auto"),
            RangeBound::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Padded vertical bounds of the chart, serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub low: f64,
    pub high: RangeBound,
}

impl DisplayRange {
    /// Range used when there is nothing to plot.
    pub const EMPTY: DisplayRange = DisplayRange {
        low: 0.0,
        high: RangeBound::Auto,
    };
}

impl Serialize for DisplayRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.low)?;
        tuple.serialize_element(&self.high)?;
        tuple.end()
    }
}

/// Output of the series merge.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub samples: Vec<ChartSample>,
    pub range: DisplayRange,
    pub last_forecast: Option<f64>,
}

/// First and last forecast timestamps, in the order the origin sent them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ForecastWindow {
    pub start: i64,
    pub end: i64,
}
