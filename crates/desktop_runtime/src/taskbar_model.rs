//! Read-only taskbar projection of the session state and clock formatting.

use platform_host::LocalDateTime;

use crate::model::{DesktopState, WindowId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One taskbar button.
pub struct TaskbarEntry {
    /// Window the button controls.
    pub window_id: WindowId,
    /// Window title shown on the button.
    pub title: String,
    /// Focused and visible.
    pub active: bool,
    /// Hidden from the desktop but still running.
    pub minimized: bool,
}

/// Projects every open window, minimized ones included, in insertion order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .map(|win| TaskbarEntry {
            window_id: win.id,
            title: win.title.clone(),
            active: state.is_focused(win.id) && !win.minimized,
            minimized: win.minimized,
        })
        .collect()
}

pub fn taskbar_window_button_class(entry: &TaskbarEntry) -> &'static str {
    match (entry.active, entry.minimized) {
        (true, _) => "taskbar-item active",
        (false, true) => "taskbar-item minimized",
        (false, false) => "taskbar-item",
    }
}

pub fn taskbar_window_button_dom_id(window_id: WindowId) -> String {
    format!("taskbar-window-button-{}", window_id.0)
}

/// Where a document click landed relative to the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuClickTarget {
    Trigger,
    Menu,
    Elsewhere,
}

/// Outside-click rule: only a click away from both the trigger and the open menu closes it.
/// The trigger handles its own toggle.
pub fn start_menu_after_document_click(open: bool, target: StartMenuClickTarget) -> bool {
    open && target != StartMenuClickTarget::Elsewhere
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskbarClockConfig {
    pub use_24_hour: bool,
}

/// Hour and minute, two digits each. The 12-hour form appends `AM`/`PM`.
pub fn format_taskbar_clock_time(now: LocalDateTime, config: TaskbarClockConfig) -> String {
    if config.use_24_hour {
        format!("{:02}:{:02}", now.hour, now.minute)
    } else {
        let mut hour = now.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        let suffix = if now.hour >= 12 { "PM" } else { "AM" };
        format!("{:02}:{:02} {}", hour, now.minute, suffix)
    }
}

pub fn format_taskbar_clock_aria(now: LocalDateTime, config: TaskbarClockConfig) -> String {
    format!(
        "{}, {}",
        now.iso_date(),
        format_taskbar_clock_time(now, config)
    )
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppBody, AppKey};
    use leptos::View;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRecord;

    fn blank() -> View {
        View::default()
    }

    fn window(id: u64, title: &str, z_index: u64, minimized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(id),
            app_key: AppKey::trusted(&format!("app-{id}")),
            title: title.to_string(),
            body: AppBody::new(blank),
            z_index,
            minimized,
            width: None,
            height: None,
        }
    }

    fn at(hour: u32, minute: u32) -> LocalDateTime {
        LocalDateTime {
            year: 2024,
            month: 3,
            day: 7,
            hour,
            minute,
            second: 42,
        }
    }

    #[test]
    fn entries_follow_insertion_order_and_include_minimized_windows() {
        let state = DesktopState {
            windows: vec![
                window(1, "Welcome", 5, false),
                window(2, "My Blog", 2, true),
                window(3, "Admin", 6, false),
            ],
            focused: Some(WindowId(3)),
            next_z_index: 7,
            next_window_id: 4,
        };

        let entries = taskbar_entries(&state);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Welcome", "My Blog", "Admin"]);
        assert_eq!(
            entries.iter().map(|e| e.active).collect::<Vec<_>>(),
            vec![false, false, true]
        );
        assert!(entries[1].minimized);
        assert_eq!(taskbar_window_button_class(&entries[1]), "taskbar-item minimized");
        assert_eq!(taskbar_window_button_class(&entries[2]), "taskbar-item active");
    }

    #[test]
    fn no_entry_is_active_without_focus() {
        let state = DesktopState {
            windows: vec![window(1, "Welcome", 1, false)],
            focused: None,
            next_z_index: 2,
            next_window_id: 2,
        };
        assert!(taskbar_entries(&state).iter().all(|e| !e.active));
    }

    #[test]
    fn outside_click_closes_start_menu_only_when_elsewhere() {
        assert!(!start_menu_after_document_click(true, StartMenuClickTarget::Elsewhere));
        assert!(start_menu_after_document_click(true, StartMenuClickTarget::Menu));
        assert!(start_menu_after_document_click(true, StartMenuClickTarget::Trigger));
        assert!(!start_menu_after_document_click(false, StartMenuClickTarget::Menu));
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        let config = TaskbarClockConfig::default();
        assert_eq!(format_taskbar_clock_time(at(0, 5), config), "12:05 AM");
        assert_eq!(format_taskbar_clock_time(at(9, 30), config), "09:30 AM");
        assert_eq!(format_taskbar_clock_time(at(12, 0), config), "12:00 PM");
        assert_eq!(format_taskbar_clock_time(at(23, 59), config), "11:59 PM");
    }

    #[test]
    fn clock_formats_twenty_four_hour_time_and_aria() {
        let config = TaskbarClockConfig { use_24_hour: true };
        assert_eq!(format_taskbar_clock_time(at(7, 4), config), "07:04");
        assert_eq!(format_taskbar_clock_aria(at(18, 20), config), "2024-03-07, 18:20");
    }
}
