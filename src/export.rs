//! Final table projection and CSV rendering for the presentation layer.

use chrono::{DateTime, Utc};

use crate::sentiment::{ScoredComment, SentimentLabel};

/// One row of the table handed to the presentation layer. The collection-only
/// columns (video id, last-modified instant) are dropped here and nowhere
/// else.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub text: String,
    pub likes: u64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
    pub sentiment: SentimentLabel,
}

impl From<&ScoredComment> for ReportRow {
    fn from(comment: &ScoredComment) -> Self {
        Self {
            timestamp: comment.timestamp,
            username: comment.username.clone(),
            text: comment.text.clone(),
            likes: comment.likes,
            positive: comment.positive,
            negative: comment.negative,
            neutral: comment.neutral,
            compound: comment.compound,
            sentiment: comment.sentiment_label,
        }
    }
}

const CSV_HEADER: &str =
    "Timestamp,Username,Comment,Likes,Positive,Negative,Neutral,Compound,Sentiment";

/// Renders the report as UTF-8 CSV with a header row. Text cells are always
/// quoted with inner quotes doubled, so commas and newlines in comments
/// survive.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{},\"{}\",\"{}\",{},{},{},{},{},{}\n",
            row.timestamp.to_rfc3339(),
            escape(&row.username),
            escape(&row.text),
            row.likes,
            row.positive,
            row.negative,
            row.neutral,
            row.compound,
            row.sentiment,
        ));
    }

    out
}

fn escape(cell: &str) -> String {
    cell.replace('"', "\"\"")
}
