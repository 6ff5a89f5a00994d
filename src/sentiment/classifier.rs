use crate::collect::CommentRecord;

use super::scorer::{SentimentScorer, VaderScorer};
use super::types::{ScoredComment, SentimentLabel};

/// Attaches sentiment scores and a label to every collected record. Runs once
/// over the whole set after collection completes, in order, with one scorer
/// call per record's text.
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl SentimentClassifier<VaderScorer> {
    /// Classifier backed by the process-wide VADER lexicon, loaded eagerly so
    /// the first score call does no extra work.
    pub fn with_vader() -> Self {
        Self::new(VaderScorer::new())
    }
}

impl<S: SentimentScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn enrich(&self, records: Vec<CommentRecord>) -> Vec<ScoredComment> {
        records
            .into_iter()
            .map(|record| self.enrich_one(record))
            .collect()
    }

    fn enrich_one(&self, record: CommentRecord) -> ScoredComment {
        let scores = self.scorer.score(&record.text);
        ScoredComment {
            timestamp: record.timestamp,
            username: record.username,
            video_id: record.video_id,
            text: record.text,
            last_modified: record.last_modified,
            likes: record.likes,
            positive: scores.positive,
            negative: scores.negative,
            neutral: scores.neutral,
            compound: scores.compound,
            sentiment_label: SentimentLabel::from_compound(scores.compound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::types::SentimentScores;
    use chrono::{TimeZone, Utc};

    /// Scores by a fixed table so label derivation is tested in isolation.
    struct TableScorer;

    impl SentimentScorer for TableScorer {
        fn score(&self, text: &str) -> SentimentScores {
            let compound = match text {
                "boundary positive" => 0.05,
                "boundary negative" => -0.05,
                "almost positive" => 0.0499,
                "grim" => -0.8,
                _ => 0.0,
            };
            SentimentScores {
                positive: if compound > 0.0 { 0.5 } else { 0.0 },
                negative: if compound < 0.0 { 0.5 } else { 0.0 },
                neutral: 0.5,
                compound,
            }
        }
    }

    fn record(text: &str) -> CommentRecord {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        CommentRecord {
            timestamp: at,
            username: "alice".to_string(),
            video_id: "vid1".to_string(),
            text: text.to_string(),
            last_modified: at,
            likes: 0,
        }
    }

    #[test]
    fn labels_follow_the_compound_table() {
        let classifier = SentimentClassifier::new(TableScorer);
        let scored = classifier.enrich(vec![
            record("boundary positive"),
            record("boundary negative"),
            record("almost positive"),
            record("grim"),
        ]);

        let labels: Vec<_> = scored.iter().map(|c| c.sentiment_label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
                SentimentLabel::Negative,
            ]
        );
    }

    #[test]
    fn enrichment_preserves_record_order_and_fields() {
        let classifier = SentimentClassifier::new(TableScorer);
        let scored = classifier.enrich(vec![record("first"), record("second")]);
        let texts: Vec<_> = scored.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(scored[0].username, "alice");
        assert_eq!(scored[0].video_id, "vid1");
        assert_eq!(scored[0].last_modified, scored[0].timestamp);
    }

    #[test]
    fn reclassifying_unchanged_text_yields_identical_results() {
        let classifier = SentimentClassifier::new(TableScorer);
        let first = classifier.enrich(vec![record("grim"), record("meh")]);
        let second = classifier.enrich(vec![record("grim"), record("meh")]);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.compound, b.compound);
            assert_eq!(a.positive, b.positive);
            assert_eq!(a.negative, b.negative);
            assert_eq!(a.neutral, b.neutral);
            assert_eq!(a.sentiment_label, b.sentiment_label);
        }
    }
}
