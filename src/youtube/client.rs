use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::YouTubeConfig;

use super::types::{CommentThreadsPage, PlaylistItemsPage, PlaylistListResponse, RepliesPage};

/// Largest page the service hands out per `playlistItems.list` request.
const PLAYLIST_PAGE_SIZE: u32 = 50;
/// Largest page for `commentThreads.list` and `comments.list`.
const COMMENT_PAGE_SIZE: u32 = 100;

/// The paginated directory queries the collectors run against. Implemented by
/// [`YouTubeClient`] for the real service and by scripted fakes in tests.
#[async_trait]
pub trait CommentDirectory: Send + Sync {
    /// One page of video references for a playlist.
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage>;

    /// One page of top-level comment threads for a video.
    async fn comment_threads_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsPage>;

    /// One page of replies below a top-level comment.
    async fn replies_page(
        &self,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<RepliesPage>;

    /// Display title of a playlist.
    async fn playlist_title(&self, playlist_id: &str) -> Result<String>;
}

/// YouTube Data API v3 client. Cheap to clone; the API key is shared
/// read-only across all requests.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(config: &YouTubeConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("{} request failed", resource))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube API returned {} for {}: {}", status, resource, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", resource))
    }
}

#[async_trait]
impl CommentDirectory for YouTubeClient {
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage> {
        let mut query = vec![
            ("part", "contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", PLAYLIST_PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        self.get_json("playlistItems", &query).await
    }

    async fn comment_threads_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsPage> {
        let mut query = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("textFormat", "plainText".to_string()),
            ("maxResults", COMMENT_PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        self.get_json("commentThreads", &query).await
    }

    async fn replies_page(
        &self,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<RepliesPage> {
        let mut query = vec![
            ("part", "snippet".to_string()),
            ("parentId", parent_id.to_string()),
            ("textFormat", "plainText".to_string()),
            ("maxResults", COMMENT_PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        self.get_json("comments", &query).await
    }

    async fn playlist_title(&self, playlist_id: &str) -> Result<String> {
        let query = vec![
            ("part", "snippet".to_string()),
            ("id", playlist_id.to_string()),
        ];
        let response: PlaylistListResponse = self.get_json("playlists", &query).await?;
        let playlist = response
            .items
            .into_iter()
            .next()
            .with_context(|| format!("Playlist {} not found", playlist_id))?;
        Ok(playlist.snippet.title)
    }
}
