//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived session signal and the single dispatch path into the reducer.
//! UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    apps,
    model::DesktopState,
    reducer::{reduce_desktop, open_app, DesktopAction, TransitionOutcome},
    window_manager::stack_violations,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop session signal.
    pub state: RwSignal<DesktopState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Session state at boot: the initial app open and focused.
pub fn boot_desktop_state() -> DesktopState {
    let mut state = DesktopState::default();
    open_app(&mut state, apps::initial_app());
    state
}

/// Applies one action and reports whether the signal needs to be written.
fn apply_action(desktop: &mut DesktopState, action: DesktopAction) -> bool {
    match reduce_desktop(desktop, action) {
        TransitionOutcome::Stale(window_id) => {
            logging::debug_warn!("desktop action ignored for closed window {}", window_id.0);
            false
        }
        TransitionOutcome::Unchanged => false,
        TransitionOutcome::Opened(_) | TransitionOutcome::Reused(_) | TransitionOutcome::Changed => {
            true
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots the initial session.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(boot_desktop_state());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        if apply_action(&mut desktop, action) {
            if cfg!(debug_assertions) {
                for violation in stack_violations(&desktop) {
                    logging::warn!("desktop stack rule broken: {violation:?}");
                }
            }
            state.set(desktop);
        }
    });

    provide_context(DesktopRuntimeContext { state, dispatch });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    #[test]
    fn boot_state_opens_initial_app_focused() {
        let state = boot_desktop_state();
        assert_eq!(state.windows.len(), 1);
        let welcome = &state.windows[0];
        assert_eq!(welcome.id, WindowId(1));
        assert_eq!(welcome.title, "Welcome");
        assert_eq!(welcome.z_index, 1);
        assert_eq!((welcome.width, welcome.height), (Some(500), Some(400)));
        assert_eq!(state.focused, Some(WindowId(1)));
        assert_eq!((state.next_window_id, state.next_z_index), (2, 2));
    }

    #[test]
    fn apply_action_skips_signal_write_for_noops() {
        let mut state = boot_desktop_state();
        assert!(!apply_action(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: WindowId(1),
            }
        ));
        assert!(!apply_action(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: WindowId(9),
            }
        ));
        assert!(apply_action(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: WindowId(1),
            }
        ));
        assert!(state.windows[0].minimized);
    }
}
