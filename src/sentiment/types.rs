use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-way sentiment bucket derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Thresholds are inclusive: +0.05 is already positive and -0.05 already
    /// negative; everything strictly between is neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            SentimentLabel::Positive
        } else if compound <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four scores the lexicon scorer reports for one text. The three weight
/// scores sum to 1; compound is the normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// A comment record with its sentiment enrichment attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub video_id: String,
    pub text: String,
    pub last_modified: DateTime<Utc>,
    pub likes: u64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
    pub sentiment_label: SentimentLabel,
}

/// Aggregate label counts for the run summary.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub total: usize,
    pub by_label: HashMap<SentimentLabel, usize>,
}

impl Stats {
    pub fn of(comments: &[ScoredComment]) -> Self {
        let mut stats = Stats {
            total: comments.len(),
            ..Default::default()
        };
        for comment in comments {
            *stats.by_label.entry(comment.sentiment_label).or_insert(0) += 1;
        }
        stats
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.by_label.get(&label).copied().unwrap_or(0)
    }
}
