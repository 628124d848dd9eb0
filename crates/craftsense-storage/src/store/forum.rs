//! # Forum Store
//!
//! Persisted community board. On first run (nothing stored yet) the board
//! starts from the seed threads shipped with the catalog.

use craftsense_core::{Comment, CoreResult, ForumBoard, ForumPost, PostDraft};
use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::StorageResult;
use crate::store::{persist, rehydrate, report_duplicates, save};
use crate::FORUM_KEY;

/// Forum board bound to a storage backend.
#[derive(Debug)]
pub struct ForumStore<S> {
    storage: S,
    board: ForumBoard,
}

impl<S: KeyValueStore> ForumStore<S> {
    /// Rehydrates the board, falling back to `seed` when nothing usable is
    /// stored. Duplicate post ids are dropped (first one wins).
    pub fn open(storage: S, seed: &[ForumPost]) -> Self {
        let stored: Option<ForumBoard> = rehydrate(&storage, FORUM_KEY);

        let mut board = match stored {
            Some(board) => board,
            None => {
                debug!(posts = seed.len(), "Seeding forum board");
                ForumBoard::from_posts(seed.to_vec())
            }
        };
        report_duplicates(FORUM_KEY, board.dedup_by_id());

        debug!(posts = board.len(), "Forum store opened");
        ForumStore { storage, board }
    }

    pub fn board(&self) -> &ForumBoard {
        &self.board
    }

    pub fn posts(&self) -> &[ForumPost] {
        self.board.posts()
    }

    /// Starts a thread at the top of the board, then persists.
    pub fn create_post(&mut self, draft: PostDraft) -> CoreResult<ForumPost> {
        let post = self.board.create_post(draft)?.clone();
        debug!(id = %post.id, "create_post");
        self.save();
        Ok(post)
    }

    /// Appends a comment, then persists.
    pub fn add_comment(&mut self, post_id: &str, content: &str) -> CoreResult<Comment> {
        let comment = self.board.add_comment(post_id, content)?.clone();
        debug!(post_id, id = %comment.id, "add_comment");
        self.save();
        Ok(comment)
    }

    /// Likes a post, then persists. Returns the new like count.
    pub fn like(&mut self, post_id: &str) -> CoreResult<u32> {
        let likes = self.board.like(post_id)?;
        debug!(post_id, likes, "like");
        self.save();
        Ok(likes)
    }

    /// Writes the current board, returning any storage error.
    pub fn persist(&self) -> StorageResult<()> {
        persist(&self.storage, FORUM_KEY, &self.board)
    }

    fn save(&self) {
        save(&self.storage, FORUM_KEY, &self.board);
    }
}
