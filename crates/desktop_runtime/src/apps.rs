//! App registry built from the generated catalog, plus body factories per app key.

mod builtin;

use std::sync::OnceLock;

use desktop_app_blog::{AdminApp, BlogApp};
use desktop_app_contract::{AppBody, AppDescriptor, AppKey, WindowDefaults};
use leptos::*;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct CatalogWindowDefaults {
    width: Option<i32>,
    height: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    app_key: String,
    label: String,
    icon_glyph: String,
    icon_color: String,
    window_defaults: CatalogWindowDefaults,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogSession {
    initial_app: String,
    z_index_base: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    session: CatalogSession,
    #[serde(rename = "app")]
    apps: Vec<CatalogEntry>,
}

struct Registry {
    apps: Vec<AppDescriptor>,
    initial_app: usize,
    z_index_base: u32,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let catalog: Catalog =
            serde_json::from_str(APP_CATALOG_JSON).expect("generated app catalog should parse");
        let apps: Vec<AppDescriptor> = catalog
            .apps
            .into_iter()
            .map(|entry| AppDescriptor {
                body: app_body(&entry.app_key),
                app_key: AppKey::trusted(entry.app_key),
                label: entry.label,
                icon_glyph: entry.icon_glyph,
                icon_color: entry.icon_color,
                window_defaults: WindowDefaults {
                    width: entry.window_defaults.width,
                    height: entry.window_defaults.height,
                },
            })
            .collect();
        let initial_app = apps
            .iter()
            .position(|app| app.app_key.as_str() == catalog.session.initial_app)
            .expect("generated app catalog names a declared initial app");
        Registry {
            apps,
            initial_app,
            z_index_base: catalog.session.z_index_base,
        }
    })
}

fn app_body(app_key: &str) -> AppBody {
    match app_key {
        "presentation" => AppBody::new(builtin::presentation_body),
        "my-computer" => AppBody::new(builtin::my_computer_body),
        "recycle-bin" => AppBody::new(builtin::recycle_bin_body),
        "blog" => AppBody::new(blog_body),
        "admin" => AppBody::new(admin_body),
        "about" => AppBody::new(builtin::about_body),
        _ => AppBody::new(builtin::unavailable_body),
    }
}

fn blog_body() -> View {
    view! { <BlogApp /> }.into_view()
}

fn admin_body() -> View {
    view! { <AdminApp /> }.into_view()
}

/// Ordered app descriptors, as shown on the desktop.
pub fn app_registry() -> &'static [AppDescriptor] {
    &registry().apps
}

/// Looks up a registered app by key.
pub fn app_descriptor(app_key: &AppKey) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|app| &app.app_key == app_key)
}

/// App opened when the session boots.
pub fn initial_app() -> &'static AppDescriptor {
    let registry = registry();
    &registry.apps[registry.initial_app]
}

/// CSS stacking offset that keeps windows above the icon layer.
pub fn z_index_base() -> u32 {
    registry().z_index_base
}

/// CSS `z-index` for a window stack position.
pub fn paint_z_index(z_index: u64) -> u64 {
    u64::from(z_index_base()).saturating_add(z_index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_follows_catalog_order() {
        let keys: Vec<_> = app_registry().iter().map(|app| app.app_key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["presentation", "my-computer", "recycle-bin", "blog", "admin", "about"]
        );
        let labels: Vec<_> = app_registry().iter().map(|app| app.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Welcome", "My Computer", "Recycle Bin", "My Blog", "Admin", "About Me"]
        );
    }

    #[test]
    fn catalog_keys_are_valid_app_keys() {
        for app in app_registry() {
            assert_eq!(AppKey::new(app.app_key.as_str()).as_ref(), Ok(&app.app_key));
        }
    }

    #[test]
    fn window_defaults_come_from_catalog() {
        let blog = app_descriptor(&AppKey::trusted("blog")).expect("blog app");
        assert_eq!(
            blog.window_defaults,
            WindowDefaults {
                width: Some(600),
                height: Some(500),
            }
        );
        let bin = app_descriptor(&AppKey::trusted("recycle-bin")).expect("bin app");
        assert_eq!(bin.window_defaults, WindowDefaults::default());
        assert!(app_descriptor(&AppKey::trusted("paint")).is_none());
    }

    #[test]
    fn initial_app_is_welcome_presentation() {
        let app = initial_app();
        assert_eq!(app.app_key.as_str(), "presentation");
        assert_eq!(app.icon_glyph, "👋");
        assert_eq!(
            app.window_defaults,
            WindowDefaults {
                width: Some(500),
                height: Some(400),
            }
        );
    }

    #[test]
    fn every_catalog_app_has_a_dedicated_body() {
        let fallback = AppBody::new(builtin::unavailable_body);
        for app in app_registry() {
            assert_ne!(app.body, fallback, "{} has no body", app.app_key);
        }
        assert_eq!(app_body("unknown"), fallback);
    }

    #[test]
    fn paint_z_index_is_offset_by_base() {
        assert_eq!(z_index_base(), 10);
        assert_eq!(paint_z_index(1), 11);
        assert_eq!(paint_z_index(u64::from(u32::MAX)), u64::from(u32::MAX) + 10);
    }
}
