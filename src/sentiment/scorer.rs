use vader_sentiment::SentimentIntensityAnalyzer;

use super::types::SentimentScores;

/// The lexicon scorer boundary. An implementation reports, for one text, the
/// positive/negative/neutral weights and the normalized compound score.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScores;
}

/// VADER-backed scorer. Constructing it loads the embedded lexicon, so build
/// one per process during startup and share it.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        SentimentScores {
            positive: get("pos"),
            negative: get("neg"),
            neutral: get("neu"),
            compound: get("compound"),
        }
    }
}
