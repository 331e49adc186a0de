//! Keyword sentiment over filing titles.
//!
//! A fixed lookup, not a model. Positive keywords are checked before
//! negative ones, so a title matching both classifies positive. Swap for a
//! richer classifier once accuracy matters.

use crate::models::signal::Sentiment;

const POSITIVE_KEYWORDS: [&str; 7] = ["실적", "증가", "호실적", "배당", "신규", "수주", "계약"];
const NEGATIVE_KEYWORDS: [&str; 9] = [
    "감소", "적자", "사기", "조사", "규제", "리콜", "소송", "지연", "부실",
];

const SUMMARY_MAX_CHARS: usize = 50;

/// Classify a filing title into a sentiment and a short summary.
///
/// Blank titles come back `(Neutral, "no title")`; otherwise the summary is
/// the title prefixed with `Filing: `, truncated to 50 characters.
pub fn classify_sentiment(title: &str) -> (Sentiment, String) {
    let name = title.trim();
    if name.is_empty() {
        return (Sentiment::Neutral, "no title".to_string());
    }
    let summary = summarize(name);
    if POSITIVE_KEYWORDS.iter().any(|k| name.contains(k)) {
        return (Sentiment::Positive, summary);
    }
    if NEGATIVE_KEYWORDS.iter().any(|k| name.contains(k)) {
        return (Sentiment::Negative, summary);
    }
    (Sentiment::Neutral, summary)
}

fn summarize(name: &str) -> String {
    if name.chars().count() > SUMMARY_MAX_CHARS {
        let head: String = name.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("Filing: {head}…")
    } else {
        format!("Filing: {name}")
    }
}
