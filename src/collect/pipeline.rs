use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::FailurePolicy;
use crate::youtube::CommentDirectory;

use super::comments::collect_video_comments;
use super::playlist::{extract_playlist_id, resolve_playlists};
use super::types::{CommentRecord, Progress};

/// Everything one playlist run produces.
#[derive(Debug)]
pub struct PlaylistCollection {
    pub playlist_id: String,
    pub title: String,
    pub records: Vec<CommentRecord>,
}

/// Runs the full collection pipeline for one playlist link: extract the
/// playlist id, resolve it to video ids, collect every video's comments and
/// replies into one flat record set, then fetch the playlist title.
///
/// Returns `Ok(None)` when the link carries no playlist id; there is nothing
/// to collect and that is not an error. A progress update is sent after each
/// video completes, when a sender is supplied.
pub async fn collect_playlist<D: CommentDirectory>(
    dir: &D,
    playlist_url: &str,
    on_video_error: FailurePolicy,
    progress: Option<mpsc::Sender<Progress>>,
) -> Result<Option<PlaylistCollection>> {
    let Some(playlist_id) = extract_playlist_id(playlist_url) else {
        return Ok(None);
    };

    let video_ids = resolve_playlists(dir, std::slice::from_ref(&playlist_id)).await;
    info!(
        "Playlist {} resolved to {} videos",
        playlist_id,
        video_ids.len()
    );

    let total = video_ids.len();
    let mut records: Vec<CommentRecord> = Vec::new();

    for (index, video_id) in video_ids.iter().enumerate() {
        match collect_video_comments(dir, video_id).await {
            Ok(video_records) => records.extend(video_records),
            Err(e) => match on_video_error {
                FailurePolicy::Abort => {
                    return Err(e.context(format!(
                        "Failed to collect comments for video {}",
                        video_id
                    )))
                }
                FailurePolicy::SkipVideo => {
                    warn!("Skipping video {}: {:#}", video_id, e);
                }
            },
        }

        if let Some(tx) = &progress {
            let _ = tx
                .send(Progress {
                    completed: index + 1,
                    total,
                })
                .await;
        }
    }

    let title = dir
        .playlist_title(&playlist_id)
        .await
        .with_context(|| format!("Failed to fetch metadata for playlist {}", playlist_id))?;

    Ok(Some(PlaylistCollection {
        playlist_id,
        title,
        records,
    }))
}
