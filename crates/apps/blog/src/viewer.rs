use leptos::*;
use platform_host::{post_service, post_service_seed_error, Post, PostService};
use system_ui::prelude::*;

use crate::feed::{first_visible_post_id, list_label, visible_posts};

#[component]
/// Read-only blog: article list on the left, selected article on the right.
pub fn BlogApp(
    /// Render as the standalone `/blog` page instead of window content.
    #[prop(optional)]
    full_page: bool,
) -> impl IntoView {
    let posts = create_rw_signal(Vec::<Post>::new());
    let selected = create_rw_signal(None::<u64>);

    if let Some(err) = post_service_seed_error() {
        logging::warn!("blog seed posts skipped: {err}");
    }

    spawn_local(async move {
        let service = post_service();
        match service.list_posts().await {
            Ok(loaded) => {
                selected.set(first_visible_post_id(&loaded));
                posts.set(loaded);
            }
            Err(err) => {
                logging::warn!("blog posts unavailable: {err}");
                posts.set(Vec::new());
                selected.set(None);
            }
        }
    });

    let selected_post = Signal::derive(move || {
        let id = selected.get()?;
        posts.get().into_iter().find(|post| post.id == id)
    });

    view! {
        <SplitLayout
            layout_class=if full_page { "app-blog app-blog-page" } else { "app-blog" }
            ui_slot="blog"
        >
            <Pane layout_class="app-blog-sidebar" ui_slot="sidebar" aria_label="Articles">
                <Heading ui_slot="sidebar-title">"Top Articles"</Heading>
                <div class="app-blog-list" role="list">
                    <For
                        each=move || visible_posts(&posts.get())
                        key=|post| post.id
                        let:post
                    >
                        {
                            let post_id = post.id;
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="app-blog-list-item"
                                    selected=Signal::derive(move || selected.get() == Some(post_id))
                                    on_click=Callback::new(move |_| selected.set(Some(post_id)))
                                >
                                    {list_label(&post)}
                                </Button>
                            }
                        }
                    </For>
                </div>
            </Pane>

            <Pane layout_class="app-blog-main" ui_slot="article">
                {move || match selected_post.get() {
                    Some(post) => view! {
                        <article class="app-blog-article">
                            <h1 class="app-blog-title">{post.title.clone()}</h1>
                            <div class="app-blog-meta">{format!("Posted on {}", post.date)}</div>
                            <div class="app-blog-body" inner_html=post.content.clone()></div>
                        </article>
                    }
                    .into_view(),
                    None => view! {
                        <EmptyState>"Select an article to read..."</EmptyState>
                    }
                    .into_view(),
                }}
            </Pane>
        </SplitLayout>
    }
}
