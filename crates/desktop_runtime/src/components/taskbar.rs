use std::time::Duration;

use super::*;
use crate::taskbar_model::{
    format_taskbar_clock_aria, format_taskbar_clock_time, start_menu_after_document_click,
    taskbar_entries, taskbar_window_button_class, taskbar_window_button_dom_id,
    StartMenuClickTarget, TaskbarClockConfig,
};
use platform_host::local_now;
use system_ui::{ClockButton, Taskbar, TaskbarButton, TaskbarSection};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn start_menu_click_target(ev: &web_sys::MouseEvent) -> StartMenuClickTarget {
    let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return StartMenuClickTarget::Elsewhere;
    };
    let inside = |selector: &str| matches!(element.closest(selector), Ok(Some(_)));
    if inside(".start-menu-trigger") {
        StartMenuClickTarget::Trigger
    } else if inside(".start-menu") {
        StartMenuClickTarget::Menu
    } else {
        StartMenuClickTarget::Elsewhere
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start_menu_click_target(_: &web_sys::MouseEvent) -> StartMenuClickTarget {
    StartMenuClickTarget::Elsewhere
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_config = TaskbarClockConfig::default();
    let clock_now = create_rw_signal(local_now());
    let start_menu_open = create_rw_signal(false);

    if let Ok(interval) =
        set_interval_with_handle(move || clock_now.set(local_now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::click, move |ev| {
        let open = start_menu_open.get_untracked();
        if !open {
            return;
        }
        let still_open = start_menu_after_document_click(open, start_menu_click_target(&ev));
        if !still_open {
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <Taskbar layout_class="taskbar" aria_label="Desktop taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    layout_class="start-menu-trigger"
                    ui_slot="start-button"
                    aria_label="Open start menu"
                    aria_haspopup="menu"
                    aria_controls="start-menu"
                    aria_expanded=Signal::derive(move || start_menu_open.get())
                    on_click=Callback::new(move |_| start_menu_open.update(|open| *open = !*open))
                >
                    "❖ start"
                </TaskbarButton>
                <super::menus::StartMenu open=start_menu_open />
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Running windows">
                <For
                    each=move || taskbar_entries(&state.get())
                    key=|entry| entry.clone()
                    let:entry
                >
                    {
                        let window_id = entry.window_id;
                        view! {
                            <TaskbarButton
                                layout_class=taskbar_window_button_class(&entry)
                                id=taskbar_window_button_dom_id(window_id)
                                aria_pressed=entry.active
                                pressed=entry.active
                                title=entry.title.clone()
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id,
                                    });
                                })
                            >
                                <span class="taskbar-app-label">{entry.title.clone()}</span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <ClockButton
                    layout_class="taskbar-clock"
                    aria_label=Signal::derive(move || {
                        format_taskbar_clock_aria(clock_now.get(), clock_config)
                    })
                >
                    {move || format_taskbar_clock_time(clock_now.get(), clock_config)}
                </ClockButton>
            </TaskbarSection>
        </Taskbar>
    }
}
