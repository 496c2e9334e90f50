//! Reducer actions and transition logic for the desktop session.
//!
//! Every transition is total: an action naming a window that is no longer open degrades to a
//! no-op reported as [`TransitionOutcome::Stale`] and leaves the state untouched.

use desktop_app_contract::AppDescriptor;

use crate::{
    model::{DesktopState, WindowId, WindowRecord},
    window_manager::{
        allocate_window_id, allocate_z_index, find_window_mut, is_top_of_stack, window_for_app,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the app's window, or bring its live window forward.
    OpenApp(AppDescriptor),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Taskbar button behavior: restore if minimized, minimize if focused, otherwise focus.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one transition, reported back to the dispatcher.
pub enum TransitionOutcome {
    /// A new window was created.
    Opened(WindowId),
    /// An open request resolved to the app's existing window.
    Reused(WindowId),
    /// Stack, focus, or minimized state changed.
    Changed,
    /// The action was valid but nothing needed to change.
    Unchanged,
    /// The action named a window that is not open.
    Stale(WindowId),
}

/// Applies a [`DesktopAction`] to the session state.
///
/// This is the only place the window stack and focus are mutated.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> TransitionOutcome {
    match action {
        DesktopAction::OpenApp(descriptor) => open_app(state, &descriptor),
        DesktopAction::CloseWindow { window_id } => close_window(state, window_id),
        DesktopAction::MinimizeWindow { window_id } => minimize_window(state, window_id),
        DesktopAction::FocusWindow { window_id } => focus_window(state, window_id),
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            toggle_taskbar_window(state, window_id)
        }
    }
}

/// Opens `descriptor` as a new focused window, or focuses and restores its live window.
pub fn open_app(state: &mut DesktopState, descriptor: &AppDescriptor) -> TransitionOutcome {
    if let Some(existing) = window_for_app(state, &descriptor.app_key) {
        focus_window(state, existing);
        return TransitionOutcome::Reused(existing);
    }

    let id = allocate_window_id(state);
    let z_index = allocate_z_index(state);
    state.windows.push(WindowRecord {
        id,
        app_key: descriptor.app_key.clone(),
        title: descriptor.label.clone(),
        body: descriptor.body,
        z_index,
        minimized: false,
        width: descriptor.window_defaults.width,
        height: descriptor.window_defaults.height,
    });
    state.focused = Some(id);
    TransitionOutcome::Opened(id)
}

/// Removes a window. Focus is cleared, not handed to the next window.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> TransitionOutcome {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return TransitionOutcome::Stale(window_id);
    };
    state.windows.remove(index);
    if state.focused == Some(window_id) {
        state.focused = None;
    }
    TransitionOutcome::Changed
}

/// Minimizes a window, keeping its stack position for later.
pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> TransitionOutcome {
    let was_focused = state.focused == Some(window_id);
    let Some(window) = find_window_mut(state, window_id) else {
        return TransitionOutcome::Stale(window_id);
    };
    if window.minimized {
        return TransitionOutcome::Unchanged;
    }
    window.minimized = true;
    if was_focused {
        state.focused = None;
    }
    TransitionOutcome::Changed
}

/// Focuses a window, raising it only when it is not already on top of the stack.
///
/// A minimized target is restored so focus never lands on a hidden window.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> TransitionOutcome {
    let Some(window) = state.window(window_id) else {
        return TransitionOutcome::Stale(window_id);
    };
    let was_minimized = window.minimized;
    let already_top = is_top_of_stack(state, window_id);
    let already_focused = state.focused == Some(window_id);

    if already_top && already_focused && !was_minimized {
        return TransitionOutcome::Unchanged;
    }

    let raised_z = (!already_top).then(|| allocate_z_index(state));
    if let Some(window) = find_window_mut(state, window_id) {
        if let Some(z_index) = raised_z {
            window.z_index = z_index;
        }
        window.minimized = false;
    }
    state.focused = Some(window_id);
    TransitionOutcome::Changed
}

/// Taskbar click: restore-and-raise a minimized window, minimize the focused window, or focus
/// a background window, checked in that order.
pub fn toggle_taskbar_window(state: &mut DesktopState, window_id: WindowId) -> TransitionOutcome {
    let Some(window) = state.window(window_id) else {
        return TransitionOutcome::Stale(window_id);
    };

    if window.minimized {
        let z_index = allocate_z_index(state);
        if let Some(window) = find_window_mut(state, window_id) {
            window.minimized = false;
            window.z_index = z_index;
        }
        state.focused = Some(window_id);
        TransitionOutcome::Changed
    } else if state.focused == Some(window_id) {
        minimize_window(state, window_id)
    } else {
        focus_window(state, window_id)
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppBody, AppKey, WindowDefaults};
    use leptos::View;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{stack_violations, topmost_visible_window};

    fn blank() -> View {
        View::default()
    }

    fn descriptor(key: &str) -> AppDescriptor {
        AppDescriptor {
            app_key: AppKey::trusted(key),
            label: format!("{key} label"),
            icon_glyph: "*".to_string(),
            icon_color: "#ddd".to_string(),
            body: AppBody::new(blank),
            window_defaults: WindowDefaults::default(),
        }
    }

    fn open(state: &mut DesktopState, key: &str) -> WindowId {
        match reduce_desktop(state, DesktopAction::OpenApp(descriptor(key))) {
            TransitionOutcome::Opened(id) | TransitionOutcome::Reused(id) => id,
            other => panic!("unexpected open outcome {other:?}"),
        }
    }

    fn z(state: &DesktopState, id: WindowId) -> u64 {
        state.window(id).expect("window").z_index
    }

    fn minimized(state: &DesktopState, id: WindowId) -> bool {
        state.window(id).expect("window").minimized
    }

    #[test]
    fn open_window_focuses_new_window_and_updates_stack() {
        let mut state = DesktopState::default();

        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");

        assert_eq!(state.focused, Some(second));
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.windows[0].id, first);
        assert_eq!(state.windows[1].id, second);
        assert_eq!(z(&state, first), 1);
        assert_eq!(z(&state, second), 2);
        assert_eq!(state.windows[1].title, "blog label");
    }

    #[test]
    fn open_copies_descriptor_dimensions() {
        let mut state = DesktopState::default();
        let mut sized = descriptor("blog");
        sized.window_defaults = WindowDefaults {
            width: Some(600),
            height: Some(500),
        };
        let TransitionOutcome::Opened(id) = open_app(&mut state, &sized) else {
            panic!("expected new window");
        };
        let window = state.window(id).expect("window");
        assert_eq!((window.width, window.height), (Some(600), Some(500)));
    }

    #[test]
    fn repeated_open_converges_to_single_instance() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "blog");
        let other = open(&mut state, "admin");

        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::OpenApp(descriptor("blog"))),
            TransitionOutcome::Reused(first)
        );
        assert_eq!(open(&mut state, "blog"), first);

        let blog_windows = state
            .windows
            .iter()
            .filter(|w| w.app_key == AppKey::trusted("blog"))
            .count();
        assert_eq!(blog_windows, 1);
        assert_eq!(state.focused, Some(first));
        assert!(z(&state, first) > z(&state, other));
        assert_eq!(state.next_window_id, 3);
    }

    #[test]
    fn open_restores_minimized_instance() {
        let mut state = DesktopState::default();
        let blog = open(&mut state, "blog");
        let _admin = open(&mut state, "admin");
        minimize_window(&mut state, blog);

        assert_eq!(open(&mut state, "blog"), blog);
        assert!(!minimized(&state, blog));
        assert_eq!(state.focused, Some(blog));
        assert_eq!(topmost_visible_window(&state), Some(blog));
    }

    #[test]
    fn focusing_already_focused_top_window_is_noop_for_stack_order() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");
        let before = state.clone();

        assert_eq!(focus_window(&mut state, second), TransitionOutcome::Unchanged);
        assert_eq!(focus_window(&mut state, second), TransitionOutcome::Unchanged);

        assert_eq!(state, before);
        assert_eq!(z(&state, second), 2);
        assert_ne!(state.focused, Some(first));
    }

    #[test]
    fn focusing_unfocused_top_window_only_sets_focus() {
        let mut state = DesktopState::default();
        let _first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");
        state.focused = None;
        let next_z = state.next_z_index;

        assert_eq!(focus_window(&mut state, second), TransitionOutcome::Changed);
        assert_eq!(state.focused, Some(second));
        assert_eq!(z(&state, second), 2);
        assert_eq!(state.next_z_index, next_z);
    }

    #[test]
    fn focusing_background_window_raises_it() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");

        focus_window(&mut state, first);

        assert_eq!(state.focused, Some(first));
        assert_eq!(z(&state, first), 3);
        assert_eq!(z(&state, second), 2);
    }

    #[test]
    fn close_clears_focus_only_when_closing_focused_window() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");

        close_window(&mut state, first);
        assert_eq!(state.focused, Some(second));

        close_window(&mut state, second);
        assert_eq!(state.focused, None);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_focused_window_does_not_refocus_next_topmost() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");

        close_window(&mut state, second);

        assert_eq!(state.focused, None);
        assert_eq!(topmost_visible_window(&state), Some(first));
    }

    #[test]
    fn minimize_keeps_stack_position_and_clears_focus() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "presentation");
        let second = open(&mut state, "blog");

        minimize_window(&mut state, first);
        assert!(minimized(&state, first));
        assert_eq!(z(&state, first), 1);
        assert_eq!(state.focused, Some(second));

        minimize_window(&mut state, second);
        assert_eq!(z(&state, second), 2);
        assert_eq!(state.focused, None);
        assert_eq!(minimize_window(&mut state, second), TransitionOutcome::Unchanged);
    }

    #[test]
    fn taskbar_toggle_precedence_focuses_background_before_minimizing() {
        let mut state = DesktopState::default();
        let a = open(&mut state, "presentation");
        let b = open(&mut state, "blog");
        assert_eq!((z(&state, a), z(&state, b)), (1, 2));

        toggle_taskbar_window(&mut state, a);
        assert_eq!(state.focused, Some(a));
        assert_eq!(z(&state, a), 3);
        assert!(!minimized(&state, b));
        assert_eq!(z(&state, b), 2);

        toggle_taskbar_window(&mut state, a);
        assert!(minimized(&state, a));
        assert_eq!(state.focused, None);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "presentation");
        let before_z = z(&state, win);

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: win });
        assert!(minimized(&state, win));
        assert_eq!(state.focused, None);

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: win });
        assert!(!minimized(&state, win));
        assert_eq!(state.focused, Some(win));
        assert!(z(&state, win) > before_z);
    }

    #[test]
    fn minimize_then_restore_raises_strictly() {
        let mut state = DesktopState::default();
        let a = open(&mut state, "presentation");
        let b = open(&mut state, "blog");
        let before = z(&state, b);

        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: b });
        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: b });

        assert!(!minimized(&state, b));
        assert_eq!(state.focused, Some(b));
        assert!(z(&state, b) > before);
        assert!(z(&state, b) > z(&state, a));
    }

    #[test]
    fn closed_window_ids_are_never_resurrected() {
        let mut state = DesktopState::default();
        let a = open(&mut state, "presentation");
        let b = open(&mut state, "blog");
        close_window(&mut state, a);
        let snapshot = state.clone();

        for action in [
            DesktopAction::FocusWindow { window_id: a },
            DesktopAction::MinimizeWindow { window_id: a },
            DesktopAction::ToggleTaskbarWindow { window_id: a },
            DesktopAction::CloseWindow { window_id: a },
        ] {
            assert_eq!(reduce_desktop(&mut state, action), TransitionOutcome::Stale(a));
            assert_eq!(state, snapshot);
        }
        assert!(state.window(a).is_none());
        assert_eq!(state.focused, Some(b));

        let reopened = open(&mut state, "presentation");
        assert_ne!(reopened, a);
    }

    #[test]
    fn every_short_action_sequence_preserves_stack_rules() {
        const KEYS: [&str; 3] = ["presentation", "blog", "admin"];

        fn action(code: usize) -> DesktopAction {
            let window_id = WindowId((code % 3) as u64 + 1);
            match code / 3 {
                0 => DesktopAction::OpenApp(descriptor(KEYS[code % 3])),
                1 => DesktopAction::CloseWindow { window_id },
                2 => DesktopAction::MinimizeWindow { window_id },
                3 => DesktopAction::FocusWindow { window_id },
                _ => DesktopAction::ToggleTaskbarWindow { window_id },
            }
        }

        const ALPHABET: usize = 15;
        const DEPTH: u32 = 4;
        for seq in 0..ALPHABET.pow(DEPTH) {
            let mut state = DesktopState::default();
            let mut code = seq;
            for _ in 0..DEPTH {
                let act = action(code % ALPHABET);
                code /= ALPHABET;
                let next_z = state.next_z_index;
                reduce_desktop(&mut state, act);

                let violations = stack_violations(&state);
                assert!(violations.is_empty(), "sequence {seq}: {violations:?}");
                assert!(state.next_z_index >= next_z);
            }
        }
    }
}
