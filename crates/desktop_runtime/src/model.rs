use desktop_app_contract::{AppBody, AppKey};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 400;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_key: AppKey,
    pub title: String,
    pub body: AppBody,
    pub z_index: u64,
    pub minimized: bool,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl WindowRecord {
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

/// Session state owned by the desktop runtime: open windows, focus, and the id/stack counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    /// Open windows in insertion order. Stacking is defined by `z_index`, not position.
    pub windows: Vec<WindowRecord>,
    pub focused: Option<WindowId>,
    /// Strictly greater than every `z_index` ever assigned.
    pub next_z_index: u64,
    /// Strictly greater than every window id ever assigned.
    pub next_window_id: u64,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_z_index: 1,
            next_window_id: 1,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn is_focused(&self, window_id: WindowId) -> bool {
        self.focused == Some(window_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub w: i32,
    pub h: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self { w: 1024, h: 768 }
    }
}
