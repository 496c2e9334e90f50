use super::*;

#[component]
/// Sidebar/content split used by list-detail apps.
pub fn SplitLayout(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-split-layout", layout_class)
            data-ui-primitive="true"
            data-ui-kind="split-layout"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared pane surface.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-slot=ui_slot
        >
            {children()}
        </section>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
        >
            {children()}
        </h2>
    }
}

#[component]
/// Placeholder shown when a pane has nothing to display.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
