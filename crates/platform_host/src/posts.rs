//! Blog post contracts and the in-memory post service behind the blog and admin apps.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AdminCredentials, SessionCookie};

const SEED_POSTS_JSON: &str = include_str!("../data/posts.seed.json");

/// Object-safe boxed future used by [`PostService`] async methods.
pub type PostServiceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Service-assigned id, never reused.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// HTML body.
    pub content: String,
    /// Whether the post is flagged as hot in listings.
    #[serde(default)]
    pub is_hot: bool,
    /// Whether readers can see the post.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Editable fields of a post, submitted by the admin editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Post title; must not be blank.
    pub title: String,
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// HTML body.
    pub content: String,
    /// Hot flag.
    pub is_hot: bool,
    /// Published flag.
    pub published: bool,
}

impl PostDraft {
    fn validate(&self) -> Result<(), PostServiceError> {
        if self.title.trim().is_empty() {
            return Err(PostServiceError::InvalidDraft("title is required"));
        }
        if !is_iso_date(&self.date) {
            return Err(PostServiceError::InvalidDraft("date must be YYYY-MM-DD"));
        }
        Ok(())
    }

    fn into_post(self, id: u64) -> Post {
        Post {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            content: self.content,
            is_hot: self.is_hot,
            published: self.published,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            date: post.date.clone(),
            content: post.content.clone(),
            is_hot: post.is_hot,
            published: post.published,
        }
    }
}

fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported by [`PostService`] operations.
pub enum PostServiceError {
    /// The password or session cookie was rejected.
    #[error("not authorized")]
    Unauthorized,
    /// No post has the requested id.
    #[error("post {0} not found")]
    NotFound(u64),
    /// The submitted draft failed validation.
    #[error("invalid post: {0}")]
    InvalidDraft(&'static str),
    /// The bundled seed posts could not be parsed.
    #[error("seed posts unreadable: {0}")]
    Seed(String),
}

/// Host service for listing and editing blog posts.
///
/// Reads are public; writes require a [`SessionCookie`] obtained from [`PostService::login`].
pub trait PostService {
    /// Lists every post, published or not, in id order.
    fn list_posts(&self) -> PostServiceFuture<'_, Result<Vec<Post>, PostServiceError>>;

    /// Loads one post by id.
    fn get_post(&self, id: u64) -> PostServiceFuture<'_, Result<Post, PostServiceError>>;

    /// Exchanges the admin password for a session cookie.
    fn login<'a>(
        &'a self,
        password: &'a str,
    ) -> PostServiceFuture<'a, Result<SessionCookie, PostServiceError>>;

    /// Returns whether `cookie` is a live admin session.
    fn is_authenticated<'a>(&'a self, cookie: Option<&'a SessionCookie>) -> PostServiceFuture<'a, bool>;

    /// Creates a post from `draft` and returns it with its assigned id.
    fn create_post<'a>(
        &'a self,
        cookie: &'a SessionCookie,
        draft: PostDraft,
    ) -> PostServiceFuture<'a, Result<Post, PostServiceError>>;

    /// Replaces the editable fields of post `id`.
    fn update_post<'a>(
        &'a self,
        cookie: &'a SessionCookie,
        id: u64,
        draft: PostDraft,
    ) -> PostServiceFuture<'a, Result<Post, PostServiceError>>;
}

#[derive(Debug, Default)]
struct PostTable {
    posts: Vec<Post>,
    next_id: u64,
}

#[derive(Debug, Clone)]
/// In-memory post service keyed by id.
pub struct MemoryPostService {
    credentials: AdminCredentials,
    table: Rc<RefCell<PostTable>>,
}

impl MemoryPostService {
    /// Creates an empty service guarded by `credentials`.
    pub fn new(credentials: AdminCredentials) -> Self {
        Self::with_posts(credentials, Vec::new())
    }

    /// Creates a service holding `posts`; new ids continue after the largest existing id.
    pub fn with_posts(credentials: AdminCredentials, mut posts: Vec<Post>) -> Self {
        posts.sort_by_key(|post| post.id);
        let next_id = posts
            .iter()
            .map(|post| post.id)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            credentials,
            table: Rc::new(RefCell::new(PostTable { posts, next_id })),
        }
    }

    /// Creates a service holding the bundled seed posts.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Seed`] when the bundled JSON cannot be parsed.
    pub fn seeded(credentials: AdminCredentials) -> Result<Self, PostServiceError> {
        Self::from_seed_json(credentials, SEED_POSTS_JSON)
    }

    fn from_seed_json(credentials: AdminCredentials, json: &str) -> Result<Self, PostServiceError> {
        let posts: Vec<Post> =
            serde_json::from_str(json).map_err(|err| PostServiceError::Seed(err.to_string()))?;
        Ok(Self::with_posts(credentials, posts))
    }

    /// Seeds from `json`, falling back to an empty service and handing back the seed error.
    fn seeded_or_empty(
        credentials: AdminCredentials,
        json: &str,
    ) -> (Self, Option<PostServiceError>) {
        match Self::from_seed_json(credentials.clone(), json) {
            Ok(service) => (service, None),
            Err(err) => (Self::new(credentials), Some(err)),
        }
    }

    fn authorize(&self, cookie: &SessionCookie) -> Result<(), PostServiceError> {
        if self.credentials.accepts(cookie) {
            Ok(())
        } else {
            Err(PostServiceError::Unauthorized)
        }
    }
}

impl PostService for MemoryPostService {
    fn list_posts(&self) -> PostServiceFuture<'_, Result<Vec<Post>, PostServiceError>> {
        Box::pin(async move { Ok(self.table.borrow().posts.clone()) })
    }

    fn get_post(&self, id: u64) -> PostServiceFuture<'_, Result<Post, PostServiceError>> {
        Box::pin(async move {
            self.table
                .borrow()
                .posts
                .iter()
                .find(|post| post.id == id)
                .cloned()
                .ok_or(PostServiceError::NotFound(id))
        })
    }

    fn login<'a>(
        &'a self,
        password: &'a str,
    ) -> PostServiceFuture<'a, Result<SessionCookie, PostServiceError>> {
        Box::pin(async move {
            if self.credentials.verify(password) {
                Ok(self.credentials.session_cookie())
            } else {
                Err(PostServiceError::Unauthorized)
            }
        })
    }

    fn is_authenticated<'a>(&'a self, cookie: Option<&'a SessionCookie>) -> PostServiceFuture<'a, bool> {
        Box::pin(async move { cookie.is_some_and(|cookie| self.credentials.accepts(cookie)) })
    }

    fn create_post<'a>(
        &'a self,
        cookie: &'a SessionCookie,
        draft: PostDraft,
    ) -> PostServiceFuture<'a, Result<Post, PostServiceError>> {
        Box::pin(async move {
            self.authorize(cookie)?;
            draft.validate()?;
            let mut table = self.table.borrow_mut();
            let id = table.next_id;
            table.next_id += 1;
            let post = draft.into_post(id);
            table.posts.push(post.clone());
            Ok(post)
        })
    }

    fn update_post<'a>(
        &'a self,
        cookie: &'a SessionCookie,
        id: u64,
        draft: PostDraft,
    ) -> PostServiceFuture<'a, Result<Post, PostServiceError>> {
        Box::pin(async move {
            self.authorize(cookie)?;
            draft.validate()?;
            let mut table = self.table.borrow_mut();
            let slot = table
                .posts
                .iter_mut()
                .find(|post| post.id == id)
                .ok_or(PostServiceError::NotFound(id))?;
            *slot = draft.into_post(id);
            Ok(slot.clone())
        })
    }
}

thread_local! {
    static GLOBAL_POST_SERVICE: (MemoryPostService, Option<PostServiceError>) =
        MemoryPostService::seeded_or_empty(AdminCredentials::default(), SEED_POSTS_JSON);
}

/// Returns the page-local post service shared by the blog and admin apps.
pub fn post_service() -> MemoryPostService {
    GLOBAL_POST_SERVICE.with(|(service, _)| service.clone())
}

/// Returns why the bundled seed posts were not loaded, if they were not.
pub fn post_service_seed_error() -> Option<PostServiceError> {
    GLOBAL_POST_SERVICE.with(|(_, err)| err.clone())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            date: "2024-05-01".to_string(),
            content: "<p>body</p>".to_string(),
            is_hot: false,
            published: true,
        }
    }

    fn service() -> MemoryPostService {
        MemoryPostService::new(AdminCredentials::from_password("salt", "pw"))
    }

    #[test]
    fn unreadable_seed_falls_back_to_empty_service_and_keeps_error() {
        let (service, err) =
            MemoryPostService::seeded_or_empty(AdminCredentials::default(), "{not json");
        assert!(matches!(err, Some(PostServiceError::Seed(_))));
        assert_eq!(block_on(service.list_posts()), Ok(Vec::new()));
    }

    #[test]
    fn bundled_seed_loads_without_error() {
        let (service, err) =
            MemoryPostService::seeded_or_empty(AdminCredentials::default(), SEED_POSTS_JSON);
        assert_eq!(err, None);
        assert!(!block_on(service.list_posts()).expect("list").is_empty());
        assert_eq!(post_service_seed_error(), None);
    }

    #[test]
    fn seed_posts_parse_with_camel_case_fields() {
        let service = MemoryPostService::seeded(AdminCredentials::default()).expect("seed");
        let posts = block_on(service.list_posts()).expect("list");
        assert_eq!(posts.len(), 3);
        assert!(posts[0].is_hot);
        assert!(!posts[2].published);
    }

    #[test]
    fn writes_require_a_session_cookie_from_login() {
        let service = service();
        let forged = SessionCookie::from_raw("nope");
        assert_eq!(
            block_on(service.create_post(&forged, draft("Hello"))),
            Err(PostServiceError::Unauthorized)
        );
        assert_eq!(
            block_on(service.login("wrong")),
            Err(PostServiceError::Unauthorized)
        );

        let cookie = block_on(service.login("pw")).expect("login");
        assert!(block_on(service.is_authenticated(Some(&cookie))));
        assert!(!block_on(service.is_authenticated(None)));

        let created = block_on(service.create_post(&cookie, draft("Hello"))).expect("create");
        assert_eq!(created.id, 1);
        assert_eq!(block_on(service.get_post(1)), Ok(created));
    }

    #[test]
    fn create_assigns_ids_after_existing_posts() {
        let existing = draft("Old").into_post(7);
        let service = MemoryPostService::with_posts(
            AdminCredentials::from_password("salt", "pw"),
            vec![existing],
        );
        let cookie = block_on(service.login("pw")).expect("login");
        let created = block_on(service.create_post(&cookie, draft("New"))).expect("create");
        assert_eq!(created.id, 8);
    }

    #[test]
    fn update_replaces_fields_and_reports_missing_posts() {
        let service = service();
        let cookie = block_on(service.login("pw")).expect("login");
        let created = block_on(service.create_post(&cookie, draft("First"))).expect("create");

        let mut edit = PostDraft::from(&created);
        edit.title = "  Renamed ".to_string();
        edit.is_hot = true;
        let updated = block_on(service.update_post(&cookie, created.id, edit)).expect("update");
        assert_eq!(updated.title, "Renamed");
        assert!(updated.is_hot);

        assert_eq!(
            block_on(service.update_post(&cookie, 99, draft("x"))),
            Err(PostServiceError::NotFound(99))
        );
    }

    #[test]
    fn drafts_are_validated_before_storing() {
        let service = service();
        let cookie = block_on(service.login("pw")).expect("login");

        let mut blank = draft("   ");
        assert!(matches!(
            block_on(service.create_post(&cookie, blank.clone())),
            Err(PostServiceError::InvalidDraft(_))
        ));
        blank.title = "ok".to_string();
        blank.date = "05/01/2024".to_string();
        assert!(matches!(
            block_on(service.create_post(&cookie, blank)),
            Err(PostServiceError::InvalidDraft(_))
        ));
        assert_eq!(block_on(service.list_posts()).expect("list"), Vec::new());
    }
}
