//! Frame-local window geometry (initial placement, drag-to-move) and pointer routing.
//!
//! Geometry never enters [`crate::model::DesktopState`]; each mounted frame owns its own
//! [`FrameRect`] for as long as the window stays open.

use crate::{
    model::{PointerPosition, ViewportSize, WindowId, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl FrameRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn style(self, z_index: u64) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.x, self.y, self.w, self.h, z_index
        )
    }
}

/// Resolves preferred dimensions, falling back to the default window size.
pub fn frame_size(width: Option<i32>, height: Option<i32>) -> (i32, i32) {
    (
        width.filter(|w| *w > 0).unwrap_or(DEFAULT_WINDOW_WIDTH),
        height.filter(|h| *h > 0).unwrap_or(DEFAULT_WINDOW_HEIGHT),
    )
}

/// Centers a frame in the viewport, keeping its top-left corner on screen.
pub fn initial_frame_rect(viewport: ViewportSize, width: Option<i32>, height: Option<i32>) -> FrameRect {
    let (w, h) = frame_size(width, height);
    FrameRect {
        x: ((viewport.w - w) / 2).max(0),
        y: ((viewport.h - h) / 2).max(0),
        w,
        h,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-progress titlebar drag.
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub rect_start: FrameRect,
}

impl DragSession {
    pub fn begin(rect: FrameRect, pointer: PointerPosition) -> Self {
        Self {
            pointer_start: pointer,
            rect_start: rect,
        }
    }

    /// Frame rect for the current pointer position. Dragging is unbounded.
    pub fn rect_at(&self, pointer: PointerPosition) -> FrameRect {
        self.rect_start.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}

/// Part of a window frame a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePressTarget {
    /// Anywhere on the frame not claimed by a nested handler.
    Frame,
    TitleBar,
    /// Minimize or close button.
    Control,
}

/// One step of handling a pointer press, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePressStep {
    /// Keep the press away from the enclosing frame handler.
    StopPropagation,
    /// Dispatch `FocusWindow`.
    Focus,
    /// Capture the pointer and record a [`DragSession`].
    BeginDrag,
}

/// Steps for a pointer press on `target`.
///
/// A secondary press on the titlebar is left to bubble so the frame still focuses the window.
pub fn frame_press_steps(target: FramePressTarget, primary: bool) -> &'static [FramePressStep] {
    use FramePressStep::*;
    match (target, primary) {
        (FramePressTarget::Frame, _) => &[Focus],
        (FramePressTarget::TitleBar, true) => &[StopPropagation, Focus, BeginDrag],
        (FramePressTarget::TitleBar, false) => &[],
        (FramePressTarget::Control, _) => &[StopPropagation],
    }
}

/// Titlebar control buttons that act on the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Minimize,
    Close,
}

/// Action dispatched when a control button is clicked.
pub fn window_control_action(control: WindowControl, window_id: WindowId) -> DesktopAction {
    match control {
        WindowControl::Minimize => DesktopAction::MinimizeWindow { window_id },
        WindowControl::Close => DesktopAction::CloseWindow { window_id },
    }
}
