//! Blog viewer and admin editor apps hosted by the desktop.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod admin;
mod feed;
mod viewer;

pub use admin::AdminApp;
pub use viewer::BlogApp;
