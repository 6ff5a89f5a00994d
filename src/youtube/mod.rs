pub mod client;
pub mod types;

pub use client::{CommentDirectory, YouTubeClient};
pub use types::{
    CommentSnippet, CommentThread, CommentThreadSnippet, CommentThreadsPage, PlaylistItem,
    PlaylistItemContentDetails, PlaylistItemsPage, RepliesPage, Reply, TopLevelComment,
};
