//! # Forum
//!
//! The community board: posts, comments, likes.
//!
//! New posts go to the top of the board, comments go to the bottom of
//! their post. There are no accounts, so everything is written as
//! [`ANONYMOUS_AUTHOR`](crate::ANONYMOUS_AUTHOR).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_body, validate_name};
use crate::ANONYMOUS_AUTHOR;

/// A reply under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

/// A discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// What a user submits to start a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        PostDraft {
            title: title.into(),
            content: content.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// All posts, newest first. Serialized as `{"posts": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumBoard {
    #[serde(default)]
    posts: Vec<ForumPost>,
}

impl ForumBoard {
    pub fn new() -> Self {
        ForumBoard { posts: Vec::new() }
    }

    /// Board pre-populated with existing threads, kept in the given order.
    pub fn from_posts(posts: Vec<ForumPost>) -> Self {
        ForumBoard { posts }
    }

    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> CoreResult<&ForumPost> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::PostNotFound(id.to_string()))
    }

    fn post_mut(&mut self, id: &str) -> CoreResult<&mut ForumPost> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::PostNotFound(id.to_string()))
    }

    /// Starts a new thread at the top of the board.
    ///
    /// Title and content must be non-blank. A blank image link is dropped.
    pub fn create_post(&mut self, draft: PostDraft) -> CoreResult<&ForumPost> {
        self.create_post_at(draft, Utc::now())
    }

    /// [`ForumBoard::create_post`] with an explicit timestamp.
    pub fn create_post_at(&mut self, draft: PostDraft, now: DateTime<Utc>) -> CoreResult<&ForumPost> {
        validate_name("title", &draft.title)?;
        validate_body("content", &draft.content)?;

        let post = ForumPost {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            date: now,
            image: draft
                .image
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
            likes: 0,
            comments: Vec::new(),
        };

        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    /// Appends a comment to a post.
    pub fn add_comment(&mut self, post_id: &str, content: &str) -> CoreResult<&Comment> {
        self.add_comment_at(post_id, content, Utc::now())
    }

    pub fn add_comment_at(
        &mut self,
        post_id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> CoreResult<&Comment> {
        validate_body("comment", content)?;
        let post = self.post_mut(post_id)?;

        post.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            content: content.trim().to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            date: now,
        });

        let last = post.comments.len() - 1;
        Ok(&post.comments[last])
    }

    /// Adds one like. Returns the new count.
    pub fn like(&mut self, post_id: &str) -> CoreResult<u32> {
        let post = self.post_mut(post_id)?;
        post.likes = post.likes.saturating_add(1);
        Ok(post.likes)
    }

    /// Drops later posts whose id already appeared, keeping the first.
    ///
    /// Returns the number of posts dropped.
    pub fn dedup_by_id(&mut self) -> usize {
        let initial_len = self.posts.len();
        let mut seen = HashSet::new();
        self.posts.retain(|p| seen.insert(p.id.clone()));
        initial_len - self.posts.len()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::TimeZone;

    fn seeded() -> ForumBoard {
        let post: ForumPost = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "Tips for pricing handmade jewelry?",
                "content": "How do you calculate fair pricing?",
                "author": "Sarah M.",
                "date": "2024-03-20T08:30:00Z",
                "likes": 24,
                "comments": [{
                    "id": "c1",
                    "content": "Materials + labor + overhead, then x2-3.",
                    "author": "Maya P.",
                    "date": "2024-03-20T09:15:00Z"
                }]
            }"#,
        )
        .unwrap();
        ForumBoard::from_posts(vec![post])
    }

    #[test]
    fn test_create_post_goes_to_top() {
        let mut board = seeded();
        let now = Utc.with_ymd_and_hms(2024, 3, 21, 12, 0, 0).unwrap();

        let id = board
            .create_post_at(PostDraft::new("Natural dyes", "Turmeric or indigo?"), now)
            .unwrap()
            .id
            .clone();

        assert_eq!(board.len(), 2);
        let top = &board.posts()[0];
        assert_eq!(top.id, id);
        assert_eq!(top.author, ANONYMOUS_AUTHOR);
        assert_eq!(top.date, now);
        assert_eq!(top.likes, 0);
        assert!(top.comments.is_empty());
        assert!(top.image.is_none());
        assert_eq!(board.posts()[1].id, "1");
    }

    #[test]
    fn test_create_post_requires_title_and_content() {
        let mut board = ForumBoard::new();

        let err = board.create_post(PostDraft::new("  ", "body")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { ref field }) if field == "title"
        ));

        let err = board.create_post(PostDraft::new("title", "")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { ref field }) if field == "content"
        ));

        assert!(board.is_empty());
    }

    #[test]
    fn test_create_post_blank_image_dropped() {
        let mut board = ForumBoard::new();
        let post = board
            .create_post(PostDraft::new("Kiln", "Which kiln?").with_image("  "))
            .unwrap();
        assert!(post.image.is_none());

        let post = board
            .create_post(PostDraft::new("Kiln", "Photo").with_image("https://img/kiln.jpg"))
            .unwrap();
        assert_eq!(post.image.as_deref(), Some("https://img/kiln.jpg"));
    }

    #[test]
    fn test_add_comment_appends() {
        let mut board = seeded();
        board.add_comment("1", "Don't forget packaging costs").unwrap();

        let post = board.post("1").unwrap();
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[1].content, "Don't forget packaging costs");
        assert_eq!(post.comments[1].author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_add_comment_errors() {
        let mut board = seeded();
        assert!(matches!(
            board.add_comment("missing", "hello"),
            Err(CoreError::PostNotFound(_))
        ));
        assert!(matches!(
            board.add_comment("1", "   "),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(board.post("1").unwrap().comments.len(), 1);
    }

    #[test]
    fn test_like() {
        let mut board = seeded();
        assert_eq!(board.like("1").unwrap(), 25);
        assert_eq!(board.like("1").unwrap(), 26);
        assert!(matches!(board.like("2"), Err(CoreError::PostNotFound(_))));
    }

    #[test]
    fn test_dedup_keeps_first() {
        let mut board = seeded();
        let mut copy = board.posts()[0].clone();
        copy.title = "Second copy".to_string();
        copy.likes = 0;
        let mut posts = board.posts().to_vec();
        posts.push(copy);
        board = ForumBoard::from_posts(posts);

        assert_eq!(board.dedup_by_id(), 1);
        assert_eq!(board.len(), 1);
        assert_eq!(board.post("1").unwrap().title, "Tips for pricing handmade jewelry?");
        assert_eq!(board.dedup_by_id(), 0);
    }

    #[test]
    fn test_board_round_trip() {
        let mut board = seeded();
        board.create_post(PostDraft::new("Looms", "Pit or frame?")).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let back: ForumBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
