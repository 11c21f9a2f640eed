use serde::Serialize;

/// Fixed three-bucket sentiment label shown next to articles and the
/// overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    /// No usable score
    Unscored,
}

impl SentimentLabel {
    pub const POSITIVE_ABOVE: f64 = 0.18;
    pub const NEGATIVE_BELOW: f64 = -0.05;

    pub fn classify(score: Option<f64>) -> Self {
        match score {
            Some(s) if s.is_nan() => SentimentLabel::Unscored,
            Some(s) if s > Self::POSITIVE_ABOVE => SentimentLabel::Positive,
            Some(s) if s < Self::NEGATIVE_BELOW => SentimentLabel::Negative,
            Some(_) => SentimentLabel::Neutral,
            None => SentimentLabel::Unscored,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Unscored => write!(f, "—"),
        }
    }
}

/// A news article ready for list rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
    pub sentiment: Option<f64>,
    pub label: SentimentLabel,
    /// Hostname of `link` without a leading `www.`, empty when unparseable
    pub host: String,
}
