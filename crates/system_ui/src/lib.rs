//! Shared UI primitive library for the desktop shell and its apps.
//!
//! The crate owns reusable Leptos primitives, the glyph icon tile, and the
//! stable `data-ui-*` DOM contract consumed by the desktop stylesheet.
//! Apps compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{GlyphIcon, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, CheckboxField, ClockButton, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, FieldGroup, FieldVariant,
    Heading, MenuItem, MenuSeparator, MenuSurface, Pane, SplitLayout, Taskbar, TaskbarButton,
    TaskbarSection, TextArea, TextField, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, CheckboxField, EmptyState, FieldGroup, FieldVariant,
        GlyphIcon, Heading, IconSize, Pane, SplitLayout, TextArea, TextField,
    };
}
