//! Window record store queries and stack helpers shared by the desktop reducer and views.

use desktop_app_contract::AppKey;

use crate::model::{DesktopState, WindowId, WindowRecord};

/// Returns a mutable handle to `window_id`, if it is still open.
pub fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Returns the live window hosting `app_key`, if any.
pub fn window_for_app(state: &DesktopState, app_key: &AppKey) -> Option<WindowId> {
    state
        .windows
        .iter()
        .find(|w| &w.app_key == app_key)
        .map(|w| w.id)
}

/// Highest stack position among open windows, minimized ones included.
pub fn top_z_index(state: &DesktopState) -> Option<u64> {
    state.windows.iter().map(|w| w.z_index).max()
}

/// Returns whether `window_id` already holds the highest stack position.
pub fn is_top_of_stack(state: &DesktopState, window_id: WindowId) -> bool {
    match (state.window(window_id), top_z_index(state)) {
        (Some(window), Some(top)) => window.z_index == top,
        _ => false,
    }
}

/// Returns the visible window painted on top.
pub fn topmost_visible_window(state: &DesktopState) -> Option<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| w.is_visible())
        .max_by_key(|w| w.z_index)
        .map(|w| w.id)
}

/// Hands out the next stack position. Positions are never handed out twice.
pub fn allocate_z_index(state: &mut DesktopState) -> u64 {
    let z_index = state.next_z_index;
    state.next_z_index += 1;
    z_index
}

/// Hands out the next window id.
pub fn allocate_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id += 1;
    id
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A broken stacking/focus rule found by [`stack_violations`].
pub enum StackViolation {
    /// Two live windows host the same app.
    DuplicateApp(AppKey),
    /// Two live windows share a stack position.
    SharedZIndex(u64),
    /// A stack position or id reached the allocation counter.
    CounterBehind,
    /// Focus names a closed window.
    FocusMissing(WindowId),
    /// Focus names a minimized window.
    FocusMinimized(WindowId),
    /// The focused window is not the topmost visible one.
    FocusNotTopmost {
        /// Focused window.
        focused: WindowId,
        /// Actual topmost visible window.
        topmost: WindowId,
    },
}

/// Checks the single-instance, distinct-stack, and focus-on-top rules.
pub fn stack_violations(state: &DesktopState) -> Vec<StackViolation> {
    let mut violations = Vec::new();

    for (idx, window) in state.windows.iter().enumerate() {
        let rest = &state.windows[idx + 1..];
        if rest.iter().any(|other| other.app_key == window.app_key) {
            violations.push(StackViolation::DuplicateApp(window.app_key.clone()));
        }
        if rest.iter().any(|other| other.z_index == window.z_index) {
            violations.push(StackViolation::SharedZIndex(window.z_index));
        }
        if window.z_index >= state.next_z_index || window.id.0 >= state.next_window_id {
            violations.push(StackViolation::CounterBehind);
        }
    }

    if let Some(focused) = state.focused {
        match state.window(focused) {
            None => violations.push(StackViolation::FocusMissing(focused)),
            Some(window) if window.minimized => {
                violations.push(StackViolation::FocusMinimized(focused));
            }
            Some(_) => {
                if let Some(topmost) = topmost_visible_window(state) {
                    if topmost != focused {
                        violations.push(StackViolation::FocusNotTopmost { focused, topmost });
                    }
                }
            }
        }
    }

    violations
}
