//! Pure post-list helpers shared by the viewer and the editor.

use platform_host::{Post, PostDraft};

pub(crate) const HOT_MARKER: &str = "🔥 ";

/// Posts readers may see, in service order.
pub(crate) fn visible_posts(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|post| post.published).cloned().collect()
}

/// Post selected when the viewer loads.
pub(crate) fn first_visible_post_id(posts: &[Post]) -> Option<u64> {
    posts.iter().find(|post| post.published).map(|post| post.id)
}

/// Current copy of post `id` in the latest loaded list.
pub(crate) fn post_by_id(posts: &[Post], id: u64) -> Option<Post> {
    posts.iter().find(|post| post.id == id).cloned()
}

pub(crate) fn list_label(post: &Post) -> String {
    if post.is_hot {
        format!("{HOT_MARKER}{}", post.title)
    } else {
        post.title.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Admin editor form contents.
pub(crate) struct EditorForm {
    pub editing_id: Option<u64>,
    pub title: String,
    pub date: String,
    pub content: String,
    pub is_hot: bool,
    pub published: bool,
}

impl EditorForm {
    pub fn blank(today: String) -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            date: today,
            content: String::new(),
            is_hot: false,
            published: true,
        }
    }

    pub fn from_post(post: &Post) -> Self {
        Self {
            editing_id: Some(post.id),
            title: post.title.clone(),
            date: post.date.clone(),
            content: post.content.clone(),
            is_hot: post.is_hot,
            published: post.published,
        }
    }

    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            date: self.date.clone(),
            content: self.content.clone(),
            is_hot: self.is_hot,
            published: self.published,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Save Changes"
        } else {
            "Save Post"
        }
    }
}

pub(crate) fn saved_status(was_editing: bool, saved: &Post) -> String {
    if was_editing {
        format!("Updated: {}", saved.title)
    } else {
        format!("Saved: {}", saved.title)
    }
}

pub(crate) fn editing_status(post: &Post) -> String {
    format!("Editing: {}", post.title)
}
