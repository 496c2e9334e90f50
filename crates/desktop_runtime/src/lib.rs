//! Desktop session runtime: window state, the reducer that drives it, and the shell UI.

pub mod apps;
pub mod components;
pub mod frame;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod taskbar_model;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, TransitionOutcome};
pub use runtime_context::boot_desktop_state;
