use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::youtube::CommentSnippet;

/// One flattened comment or reply, before sentiment scoring. Replies carry no
/// pointer back to their parent; only the owning video id is kept for joins.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRecord {
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub video_id: String,
    pub text: String,
    pub last_modified: DateTime<Utc>,
    pub likes: u64,
}

impl CommentRecord {
    /// Normalizes a service comment snippet. A missing edit instant falls
    /// back to the publication instant; a missing like count counts as zero.
    pub fn from_snippet(snippet: CommentSnippet, video_id: &str) -> Self {
        Self {
            timestamp: snippet.published_at,
            username: snippet.author_display_name,
            video_id: video_id.to_string(),
            text: snippet.text_display,
            last_modified: snippet.updated_at.unwrap_or(snippet.published_at),
            likes: snippet.like_count.unwrap_or(0),
        }
    }
}

/// Collection progress, one update per completed video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}
