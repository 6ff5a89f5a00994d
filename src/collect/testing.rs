//! Scripted directory service for collector tests. Pages are keyed by
//! (request id, page token); an unscripted request is a service error, so a
//! collector asking for a page it should not ask for fails its test.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::youtube::{
    CommentDirectory, CommentSnippet, CommentThread, CommentThreadSnippet, CommentThreadsPage,
    PlaylistItem, PlaylistItemContentDetails, PlaylistItemsPage, RepliesPage, Reply,
    TopLevelComment,
};

type Key = (String, Option<String>);

#[derive(Default)]
pub struct FakeDirectory {
    playlists: HashMap<Key, Result<PlaylistItemsPage, String>>,
    threads: HashMap<Key, Result<CommentThreadsPage, String>>,
    replies: HashMap<Key, Result<RepliesPage, String>>,
    titles: HashMap<String, String>,
}

pub fn snippet(author: &str, text: &str) -> CommentSnippet {
    CommentSnippet {
        published_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        author_display_name: author.to_string(),
        text_display: text.to_string(),
        updated_at: None,
        like_count: None,
    }
}

fn key(id: &str, token: Option<&str>) -> Key {
    (id.to_string(), token.map(str::to_string))
}

impl FakeDirectory {
    pub fn playlist_page(
        &mut self,
        playlist_id: &str,
        token: Option<&str>,
        video_ids: &[&str],
        next: Option<&str>,
    ) {
        let page = PlaylistItemsPage {
            items: video_ids
                .iter()
                .map(|id| PlaylistItem {
                    content_details: PlaylistItemContentDetails {
                        video_id: id.to_string(),
                    },
                })
                .collect(),
            next_page_token: next.map(str::to_string),
        };
        self.playlists.insert(key(playlist_id, token), Ok(page));
    }

    pub fn playlist_error(&mut self, playlist_id: &str, token: Option<&str>, message: &str) {
        self.playlists
            .insert(key(playlist_id, token), Err(message.to_string()));
    }

    pub fn thread_page(
        &mut self,
        video_id: &str,
        token: Option<&str>,
        threads: &[(&str, CommentSnippet, u64)],
        next: Option<&str>,
    ) {
        let page = CommentThreadsPage {
            items: threads
                .iter()
                .map(|(id, snippet, reply_count)| CommentThread {
                    snippet: CommentThreadSnippet {
                        top_level_comment: TopLevelComment {
                            id: id.to_string(),
                            snippet: snippet.clone(),
                        },
                        total_reply_count: *reply_count,
                    },
                })
                .collect(),
            next_page_token: next.map(str::to_string),
        };
        self.threads.insert(key(video_id, token), Ok(page));
    }

    pub fn thread_error(&mut self, video_id: &str, token: Option<&str>, message: &str) {
        self.threads
            .insert(key(video_id, token), Err(message.to_string()));
    }

    pub fn reply_page(
        &mut self,
        parent_id: &str,
        token: Option<&str>,
        replies: &[CommentSnippet],
        next: Option<&str>,
    ) {
        let page = RepliesPage {
            items: replies
                .iter()
                .map(|snippet| Reply {
                    snippet: snippet.clone(),
                })
                .collect(),
            next_page_token: next.map(str::to_string),
        };
        self.replies.insert(key(parent_id, token), Ok(page));
    }

    pub fn reply_error(&mut self, parent_id: &str, token: Option<&str>, message: &str) {
        self.replies
            .insert(key(parent_id, token), Err(message.to_string()));
    }

    pub fn title(&mut self, playlist_id: &str, title: &str) {
        self.titles
            .insert(playlist_id.to_string(), title.to_string());
    }

    fn lookup<P: Clone>(
        pages: &HashMap<Key, Result<P, String>>,
        what: &str,
        id: &str,
        token: Option<&str>,
    ) -> Result<P> {
        match pages.get(&key(id, token)) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(message)) => Err(anyhow!("{}", message)),
            None => Err(anyhow!(
                "no scripted {} page for {} with token {:?}",
                what,
                id,
                token
            )),
        }
    }
}

#[async_trait]
impl CommentDirectory for FakeDirectory {
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage> {
        Self::lookup(&self.playlists, "playlistItems", playlist_id, page_token)
    }

    async fn comment_threads_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsPage> {
        Self::lookup(&self.threads, "commentThreads", video_id, page_token)
    }

    async fn replies_page(
        &self,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<RepliesPage> {
        Self::lookup(&self.replies, "comments", parent_id, page_token)
    }

    async fn playlist_title(&self, playlist_id: &str) -> Result<String> {
        self.titles
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| anyhow!("Playlist {} not found", playlist_id))
    }
}
