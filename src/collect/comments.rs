use std::pin::pin;

use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt};

use crate::youtube::CommentDirectory;

use super::paginate::{paginate, Page};
use super::types::CommentRecord;

/// Collects every reply below one top-level comment, in page-arrival order.
/// Page failures propagate to the caller.
pub async fn collect_replies<D: CommentDirectory>(
    dir: &D,
    parent_id: &str,
    video_id: &str,
) -> Result<Vec<CommentRecord>> {
    let fetch = {
        let parent_id = parent_id.to_string();
        let video_id = video_id.to_string();
        move |token: Option<String>| {
            let parent_id = parent_id.clone();
            let video_id = video_id.clone();
            async move {
                let page = dir.replies_page(&parent_id, token.as_deref()).await?;
                Ok(Page {
                    items: page
                        .items
                        .into_iter()
                        .map(|reply| CommentRecord::from_snippet(reply.snippet, &video_id))
                        .collect(),
                    next_page_token: page.next_page_token,
                })
            }
        }
    };

    paginate(fetch).try_collect().await
}

/// Collects all comments for one video: every top-level comment in thread
/// order, each immediately followed by its replies when the thread reports
/// any. Page failures, in either the thread listing or a reply listing,
/// propagate and abandon the video.
pub async fn collect_video_comments<D: CommentDirectory>(
    dir: &D,
    video_id: &str,
) -> Result<Vec<CommentRecord>> {
    let fetch = {
        let video_id = video_id.to_string();
        move |token: Option<String>| {
            let video_id = video_id.clone();
            async move {
                let page = dir.comment_threads_page(&video_id, token.as_deref()).await?;
                Ok(Page {
                    items: page.items,
                    next_page_token: page.next_page_token,
                })
            }
        }
    };

    let mut threads = pin!(paginate(fetch));
    let mut records = Vec::new();

    while let Some(thread) = threads.next().await {
        let snippet = thread?.snippet;
        let top = snippet.top_level_comment;
        let parent_id = top.id;
        records.push(CommentRecord::from_snippet(top.snippet, video_id));

        if snippet.total_reply_count > 0 {
            let replies = collect_replies(dir, &parent_id, video_id)
                .await
                .with_context(|| format!("Failed to fetch replies for comment {}", parent_id))?;
            records.extend(replies);
        }
    }

    Ok(records)
}
