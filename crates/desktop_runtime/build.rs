use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WindowDefaults {
    width: Option<i32>,
    height: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    app_key: String,
    label: String,
    icon_glyph: String,
    icon_color: String,
    #[serde(default)]
    window_defaults: WindowDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionConfig {
    initial_app: String,
    z_index_base: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    session: SessionConfig,
    #[serde(rename = "app")]
    apps: Vec<AppEntry>,
}

fn is_kebab_key(key: &str) -> bool {
    key.len() <= 32
        && key.starts_with(|ch: char| ch.is_ascii_lowercase())
        && !key.ends_with('-')
        && key
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "app catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }
    if catalog.apps.is_empty() {
        panic!("app catalog {path} declares no apps");
    }

    let mut seen = HashSet::new();
    for app in &catalog.apps {
        if !is_kebab_key(&app.app_key) {
            panic!("invalid app_key `{}` in {path}", app.app_key);
        }
        if !seen.insert(app.app_key.as_str()) {
            panic!("duplicate app_key `{}` in {path}", app.app_key);
        }
        if app.label.trim().is_empty() {
            panic!("app `{}` in {path} has an empty label", app.app_key);
        }
        let dims = [app.window_defaults.width, app.window_defaults.height];
        if dims.iter().flatten().any(|dim| *dim <= 0) {
            panic!("app `{}` in {path} has a non-positive window size", app.app_key);
        }
    }

    if !seen.contains(catalog.session.initial_app.as_str()) {
        panic!(
            "initial_app `{}` in {path} is not a declared app",
            catalog.session.initial_app
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
