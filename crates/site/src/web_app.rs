use desktop_app_blog::BlogApp;
use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Retro Portfolio" />
        <Meta name="description" content="A retro desktop-style personal website with a blog." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/blog" view=BlogPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Standalone blog reader, opened from the start menu in a new tab.
#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <Title text="My Blog" />
        <section class="blog-page">
            <header class="blog-page-header">
                <h1>"My Blog"</h1>
                <A href="/">"Back to Desktop"</A>
            </header>
            <BlogApp full_page=true />
        </section>
    }
}
