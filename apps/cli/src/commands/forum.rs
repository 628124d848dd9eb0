//! # Forum Commands
//!
//! The community board: list threads, start one, reply, like.
//!
//! On first use the board is seeded from the catalog's forum posts; from
//! then on it lives in `<data_dir>/forumPosts.json`.

use serde::Serialize;
use tracing::debug;

use craftsense_core::{Comment, ForumPost, PostDraft};

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState};

#[derive(Debug, Clone, Serialize)]
pub struct PostList {
    pub posts: Vec<ForumPost>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub post_id: String,
    pub likes: u32,
}

/// All threads, newest first.
pub fn list(state: &AppState) -> AppResult<PostList> {
    debug!("forum list command");
    Ok(PostList {
        posts: state.forum_store().posts().to_vec(),
    })
}

/// Starts a new thread at the top of the board.
pub fn post(
    state: &AppState,
    title: &str,
    content: &str,
    image: Option<&str>,
) -> AppResult<ForumPost> {
    debug!(title, "forum post command");

    let mut draft = PostDraft::new(title, content);
    if let Some(image) = image {
        draft = draft.with_image(image);
    }

    Ok(state.forum_store().create_post(draft)?)
}

/// Replies to a thread.
pub fn comment(state: &AppState, post_id: &str, content: &str) -> AppResult<Comment> {
    debug!(post_id, "forum comment command");
    Ok(state.forum_store().add_comment(post_id, content)?)
}

/// Likes a thread.
pub fn like(state: &AppState, post_id: &str) -> AppResult<LikeResponse> {
    debug!(post_id, "forum like command");
    let likes = state.forum_store().like(post_id)?;

    Ok(LikeResponse {
        post_id: post_id.to_string(),
        likes,
    })
}

fn render_post(post: &ForumPost) -> String {
    let mut block = format!(
        "[{}] {}\n    {} | {} | {} likes | {} comments\n    {}",
        post.id,
        post.title,
        post.author,
        post.date.format("%Y-%m-%d %H:%M"),
        post.likes,
        post.comments.len(),
        post.content,
    );

    if let Some(ref image) = post.image {
        block.push_str(&format!("\n    Image: {}", image));
    }
    for c in &post.comments {
        block.push_str(&format!("\n    > {}: {}", c.author, c.content));
    }
    block
}

impl Render for PostList {
    fn render(&self, _config: &AppConfig) -> String {
        if self.posts.is_empty() {
            return "No posts yet".to_string();
        }

        self.posts
            .iter()
            .map(render_post)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Render for ForumPost {
    fn render(&self, _config: &AppConfig) -> String {
        format!("Posted\n\n{}", render_post(self))
    }
}

impl Render for Comment {
    fn render(&self, _config: &AppConfig) -> String {
        format!("Commented as {}: {}", self.author, self.content)
    }
}

impl Render for LikeResponse {
    fn render(&self, _config: &AppConfig) -> String {
        format!("Post {} now has {} likes", self.post_id, self.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::load_catalog;
    use craftsense_core::ANONYMOUS_AUTHOR;
    use craftsense_storage::MemoryStore;

    fn state() -> AppState {
        let config = AppConfig::default();
        let catalog = load_catalog(&config).unwrap();
        AppState::with_storage(config, catalog, MemoryStore::new())
    }

    #[test]
    fn test_list_starts_from_seed() {
        let posts = list(&state()).unwrap().posts;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Tips for pricing handmade jewelry?");
    }

    #[test]
    fn test_post_prepends_and_persists() {
        let state = state();

        let created = post(&state, "Kiln advice", "Electric or wood-fired?", Some("https://img/kiln.jpg")).unwrap();
        assert_eq!(created.author, ANONYMOUS_AUTHOR);
        assert_eq!(created.image.as_deref(), Some("https://img/kiln.jpg"));

        let posts = list(&state).unwrap().posts;
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, created.id);
    }

    #[test]
    fn test_blank_post_rejected() {
        let err = post(&state(), " ", "content", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_comment_and_like() {
        let state = state();

        comment(&state, "2", "Pomegranate rind gives a lovely yellow").unwrap();
        assert_eq!(like(&state, "2").unwrap().likes, 32);

        let posts = list(&state).unwrap().posts;
        let thread = posts.iter().find(|p| p.id == "2").unwrap();
        assert_eq!(thread.comments.len(), 1);
        assert_eq!(thread.likes, 32);

        assert_eq!(like(&state, "nope").unwrap_err().code, ErrorCode::NotFound);
    }
}
