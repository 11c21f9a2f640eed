use serde_json::Value;
use url::Url;

use crate::models::{ArticleItem, RawAnalyticsPayload, SentimentLabel};

/// Pair the origin's parallel article arrays into records.
///
/// The count is the shortest of `links`, `titles` and `dates`; the length
/// of `sentiments` does not limit it. An article without a usable score of
/// its own takes `overall_sentiment`.
pub fn zip_articles(payload: &RawAnalyticsPayload) -> Vec<ArticleItem> {
    let n = payload
        .links
        .len()
        .min(payload.titles.len())
        .min(payload.dates.len());

    (0..n)
        .map(|i| {
            let link = as_text(&payload.links[i]);
            let sentiment = payload
                .sentiments
                .as_ref()
                .and_then(|scores| scores.get(i))
                .and_then(Value::as_f64)
                .or(payload.overall_sentiment);

            ArticleItem {
                title: as_text(&payload.titles[i]),
                host: link.as_deref().map(link_host).unwrap_or_default(),
                link,
                date: as_text(&payload.dates[i]),
                sentiment,
                label: SentimentLabel::classify(sentiment),
            }
        })
        .collect()
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Hostname of an article link, minus a leading `www.`.
pub fn link_host(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> RawAnalyticsPayload {
        RawAnalyticsPayload::from_value(&value)
    }

    #[test]
    fn test_short_sentiments_fall_back_to_overall() {
        let items = zip_articles(&payload(json!({
            "titles": ["a", "b"],
            "links": ["https://l1.example.com/x", "https://l2.example.com/y"],
            "dates": ["d1", "d2"],
            "sentiments": [0.5],
            "overall_sentiment": -0.2,
        })));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sentiment, Some(0.5));
        assert_eq!(items[0].label, SentimentLabel::Positive);
        assert_eq!(items[1].sentiment, Some(-0.2));
        assert_eq!(items[1].label, SentimentLabel::Negative);
    }

    #[test]
    fn test_zips_to_shortest_of_links_titles_dates() {
        let items = zip_articles(&payload(json!({
            "titles": ["a", "b", "c"],
            "links": ["l1", "l2"],
            "dates": ["d1", "d2", "d3", "d4"],
            "sentiments": [0.1, 0.2, 0.3, 0.4, 0.5],
        })));

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title.as_deref(), Some("b"));
        assert_eq!(items[1].link.as_deref(), Some("l2"));
        assert_eq!(items[1].date.as_deref(), Some("d2"));
    }

    #[test]
    fn test_missing_sentiments_use_overall_for_every_article() {
        let items = zip_articles(&payload(json!({
            "titles": ["a", "b"],
            "links": ["l1", "l2"],
            "dates": ["d1", "d2"],
            "overall_sentiment": 0.1,
        })));

        assert!(items.iter().all(|it| it.sentiment == Some(0.1)));
        assert!(items.iter().all(|it| it.label == SentimentLabel::Neutral));
    }

    #[test]
    fn test_no_scores_at_all_is_unscored() {
        let items = zip_articles(&payload(json!({
            "titles": ["a"],
            "links": ["l1"],
            "dates": ["d1"],
            "sentiments": [null],
        })));

        assert_eq!(items[0].sentiment, None);
        assert_eq!(items[0].label, SentimentLabel::Unscored);
        assert_eq!(items[0].label.to_string(), "—");
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::classify(Some(0.19)), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::classify(Some(0.18)), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(Some(0.0)), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(Some(-0.05)), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(Some(-0.051)), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::classify(Some(f64::NAN)), SentimentLabel::Unscored);
        assert_eq!(SentimentLabel::classify(None), SentimentLabel::Unscored);
    }

    #[test]
    fn test_link_host() {
        assert_eq!(link_host("https://www.reuters.com/markets/x"), "reuters.com");
        assert_eq!(link_host("https://finance.yahoo.com/news"), "finance.yahoo.com");
        assert_eq!(link_host("not a url"), "");
    }
}
