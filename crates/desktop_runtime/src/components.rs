//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, GlyphIcon, IconSize,
};

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    apps,
    model::{PointerPosition, ViewportSize, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[cfg(target_arch = "wasm32")]
fn current_viewport() -> ViewportSize {
    let win = window();
    let w = win.inner_width().ok().and_then(|v| v.as_f64());
    let h = win.inner_height().ok().and_then(|v| v.as_f64());
    match (w, h) {
        (Some(w), Some(h)) => ViewportSize {
            w: w as i32,
            h: h as i32,
        },
        _ => ViewportSize::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn current_viewport() -> ViewportSize {
    ViewportSize::default()
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn window_ids(windows: &[crate::model::WindowRecord]) -> Vec<WindowId> {
    windows.iter().map(|w| w.id).collect()
}

#[component]
/// Desktop composition root: launcher icons, one frame per open window, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let icons = apps::app_registry()
        .iter()
        .map(|app| {
            let app_key = app.app_key.clone();
            view! {
                <DesktopIconButton
                    title=app.label.clone()
                    data_app=app.app_key.to_string()
                    on_click=Callback::new(move |_| {
                        if let Some(descriptor) = apps::app_descriptor(&app_key) {
                            runtime.dispatch_action(DesktopAction::OpenApp(descriptor.clone()));
                        }
                    })
                >
                    <GlyphIcon
                        glyph=app.icon_glyph.clone()
                        color=app.icon_color.clone()
                        size=IconSize::Lg
                    />
                    <span class="desktop-icon-label">{app.label.clone()}</span>
                </DesktopIconButton>
            }
        })
        .collect_view();

    view! {
        <DesktopRoot>
            <DesktopIconGrid>{icons}</DesktopIconGrid>

            <DesktopWindowLayer>
                <For
                    each=move || window_ids(&state.get().windows)
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id />
                </For>
            </DesktopWindowLayer>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}
