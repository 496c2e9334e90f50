//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! An app is described by a static [`AppDescriptor`]: a stable [`AppKey`], the label and glyph
//! shown on the desktop, a body factory, and optional preferred window dimensions. The window
//! manager never looks inside the body; it only mounts it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for an app registered with the desktop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppKey(String);

impl AppKey {
    /// Returns an app key when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_app_key(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid app key `{raw}`; expected lowercase kebab-case"
            ))
        }
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates a key without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for AppKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_app_key(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Factory producing the renderable body of an app window.
///
/// The factory is captured once when a window is created and reused for every mount of that
/// window, so a window's body never changes over its lifetime.
#[derive(Clone, Copy)]
pub struct AppBody(fn() -> View);

impl AppBody {
    /// Wraps a body factory.
    pub const fn new(factory: fn() -> View) -> Self {
        Self(factory)
    }

    /// Builds the body view.
    pub fn mount(self) -> View {
        (self.0)()
    }
}

impl std::fmt::Debug for AppBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppBody(..)")
    }
}

impl PartialEq for AppBody {
    fn eq(&self, other: &Self) -> bool {
        (self.0 as usize) == (other.0 as usize)
    }
}

impl Eq for AppBody {}

/// Preferred window dimensions declared by an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowDefaults {
    /// Preferred width in CSS pixels.
    pub width: Option<i32>,
    /// Preferred height in CSS pixels.
    pub height: Option<i32>,
}

/// Static description of a launchable app. Immutable for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Unique key; at most one live window exists per key.
    pub app_key: AppKey,
    /// Label shown under the desktop icon and used as the window title.
    pub label: String,
    /// Icon glyph rendered on the desktop tile.
    pub icon_glyph: String,
    /// Background color of the desktop tile.
    pub icon_color: String,
    /// Body factory for the window content.
    pub body: AppBody,
    /// Optional preferred window dimensions.
    pub window_defaults: WindowDefaults,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn empty_body() -> View {
        View::default()
    }

    fn other_body() -> View {
        leptos::IntoView::into_view("other")
    }

    #[test]
    fn app_key_requires_kebab_case() {
        assert!(AppKey::new("presentation").is_ok());
        assert!(AppKey::new("my-computer").is_ok());
        assert!(AppKey::new("recycle-bin2").is_ok());
        assert!(AppKey::new("").is_err());
        assert!(AppKey::new("My-Computer").is_err());
        assert!(AppKey::new("trailing-").is_err());
        assert!(AppKey::new("9lives").is_err());
        assert!(AppKey::new("dotted.key").is_err());
    }

    #[test]
    fn app_key_displays_raw_value() {
        assert_eq!(AppKey::trusted("blog").to_string(), "blog");
        assert_eq!(AppKey::trusted("admin").as_str(), "admin");
    }

    #[test]
    fn app_body_equality_tracks_factory_identity() {
        let body = AppBody::new(empty_body);
        assert_eq!(body, body);
        assert_ne!(body, AppBody::new(other_body));
    }
}
