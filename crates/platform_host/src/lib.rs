//! Typed host-domain contracts shared by the desktop runtime and hosted apps.
//!
//! The crate owns the blog content service (posts plus the admin session gate) and the clock
//! helpers used by the taskbar and editors. Everything here is in-memory and client-local.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod posts;
pub mod time;

pub use auth::{cookie_jar, AdminCredentials, CookieJar, SessionCookie};
pub use posts::{
    post_service, post_service_seed_error, MemoryPostService, Post, PostDraft, PostService,
    PostServiceError, PostServiceFuture,
};
pub use time::{local_now, today_iso_date, unix_time_ms_now, LocalDateTime};
