pub mod comments;
pub mod paginate;
pub mod pipeline;
pub mod playlist;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use pipeline::{collect_playlist, PlaylistCollection};
pub use types::{CommentRecord, Progress};
