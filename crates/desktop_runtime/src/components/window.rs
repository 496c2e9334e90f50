use super::*;
use crate::{
    apps::paint_z_index,
    frame::{
        frame_press_steps, initial_frame_rect, window_control_action, DragSession,
        FramePressStep, FramePressTarget, WindowControl,
    },
};
use system_ui::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());

    // Geometry and body are fixed at mount; the frame stays mounted while minimized.
    let mounted = runtime.state.get_untracked().window(window_id).cloned();
    let rect = create_rw_signal(initial_frame_rect(
        current_viewport(),
        mounted.as_ref().and_then(|w| w.width),
        mounted.as_ref().and_then(|w| w.height),
    ));
    let drag = create_rw_signal(None::<DragSession>);
    let title = mounted.as_ref().map(|w| w.title.clone()).unwrap_or_default();
    let body = mounted.map(|w| w.body.mount());

    let focused = Signal::derive(move || runtime.state.get().is_focused(window_id));
    let minimized = Signal::derive(move || window.get().map(|w| w.minimized).unwrap_or(false));
    let style = Signal::derive(move || {
        let z_index = window.get().map(|w| w.z_index).unwrap_or_default();
        let mut style = rect.get().style(paint_z_index(z_index));
        if minimized.get() {
            style.push_str("display:none;");
        }
        style
    });

    let press = move |ev: &web_sys::PointerEvent, target: FramePressTarget| {
        for step in frame_press_steps(target, is_primary_press(ev)) {
            match step {
                FramePressStep::StopPropagation => ev.stop_propagation(),
                FramePressStep::Focus => {
                    runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
                }
                FramePressStep::BeginDrag => {
                    try_set_pointer_capture(ev);
                    ev.prevent_default();
                    drag.set(Some(DragSession::begin(
                        rect.get_untracked(),
                        pointer_from_pointer_event(ev),
                    )));
                }
            }
        }
    };
    let control_click = move |ev: web_sys::MouseEvent, control: WindowControl| {
        ev.stop_propagation();
        runtime.dispatch_action(window_control_action(control, window_id));
    };
    let update_drag = move |ev: web_sys::PointerEvent| {
        if let Some(session) = drag.get_untracked() {
            rect.set(session.rect_at(pointer_from_pointer_event(&ev)));
        }
    };
    let end_drag = move |_: web_sys::PointerEvent| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    };

    view! {
        <WindowFrame
            layout_class="desktop-window"
            style=style
            aria_label=title.clone()
            focused=focused
            minimized=minimized
            on_pointerdown=Callback::new(move |ev| press(&ev, FramePressTarget::Frame))
        >
            <WindowTitleBar
                layout_class="title-bar"
                on_pointerdown=Callback::new(move |ev| press(&ev, FramePressTarget::TitleBar))
                on_pointermove=Callback::new(update_drag)
                on_pointerup=Callback::new(end_drag)
            >
                <WindowTitle>{title}</WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        on_pointerdown=Callback::new(move |ev| press(&ev, FramePressTarget::Control))
                        on_click=Callback::new(move |ev| control_click(ev, WindowControl::Minimize))
                    >
                        "_"
                    </WindowControlButton>
                    <WindowControlButton aria_label="Maximize window">
                        "□"
                    </WindowControlButton>
                    <WindowControlButton
                        layout_class="close"
                        aria_label="Close window"
                        on_pointerdown=Callback::new(move |ev| press(&ev, FramePressTarget::Control))
                        on_click=Callback::new(move |ev| control_click(ev, WindowControl::Close))
                    >
                        "X"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{body}</WindowBody>
        </WindowFrame>
    }
}
