pub mod classifier;
pub mod scorer;
pub mod types;

pub use classifier::SentimentClassifier;
pub use scorer::{SentimentScorer, VaderScorer};
pub use types::{ScoredComment, SentimentLabel, SentimentScores, Stats};
