use std::pin::pin;

use futures::StreamExt;
use regex::Regex;
use tracing::warn;

use crate::youtube::CommentDirectory;

use super::paginate::{paginate, Page};

/// Pulls the `list=` query parameter out of a playlist link. Everything up to
/// the next `&` (or end of string) is the playlist id.
pub fn extract_playlist_id(url: &str) -> Option<String> {
    let pattern = Regex::new(r"list=([^&]+)").ok()?;
    pattern
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Resolves playlists to the ordered union of their video ids: playlists in
/// request order, videos in page-arrival order within each playlist.
///
/// A page failure abandons that one playlist: whatever it already yielded is
/// kept, a diagnostic names the playlist and the error, and the remaining
/// playlists are still resolved. Resolution is never fatal to the pipeline.
pub async fn resolve_playlists<D: CommentDirectory>(
    dir: &D,
    playlist_ids: &[String],
) -> Vec<String> {
    let mut all_videos = Vec::new();

    for playlist_id in playlist_ids {
        let fetch = {
            let playlist_id = playlist_id.clone();
            move |token: Option<String>| {
                let playlist_id = playlist_id.clone();
                async move {
                    let page = dir
                        .playlist_items_page(&playlist_id, token.as_deref())
                        .await?;
                    Ok(Page {
                        items: page
                            .items
                            .into_iter()
                            .map(|item| item.content_details.video_id)
                            .collect(),
                        next_page_token: page.next_page_token,
                    })
                }
            }
        };

        let mut videos = pin!(paginate(fetch));
        while let Some(video) = videos.next().await {
            match video {
                Ok(video_id) => all_videos.push(video_id),
                Err(e) => {
                    warn!("Error fetching playlist with ID {}: {:#}", playlist_id, e);
                    break;
                }
            }
        }
    }

    all_videos
}
