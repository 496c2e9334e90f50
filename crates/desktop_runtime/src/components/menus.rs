use super::*;
use system_ui::{MenuItem, MenuSeparator, MenuSurface};

const BLOG_PAGE_PATH: &str = "/blog";

fn open_blog_page() {
    if let Err(err) = window().open_with_url_and_target(BLOG_PAGE_PATH, "_blank") {
        logging::warn!("failed to open blog page: {err:?}");
    }
}

#[component]
pub(super) fn StartMenu(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <MenuSurface layout_class="start-menu" id="start-menu" aria_label="Start menu">
                <div class="start-menu-header">
                    <span aria-hidden="true">"👤"</span>
                    <span>"Admin"</span>
                </div>
                <div class="start-menu-items">
                    <MenuItem on_click=Callback::new(move |_| {
                        open_blog_page();
                        open.set(false);
                    })>
                        "My Blog"
                    </MenuItem>
                </div>
                <MenuSeparator />
                <div class="start-menu-footer">
                    <MenuItem layout_class="start-menu-power">"Turn Off Computer"</MenuItem>
                </div>
            </MenuSurface>
        </Show>
    }
}
