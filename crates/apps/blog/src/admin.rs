use leptos::*;
use platform_host::{cookie_jar, post_service, today_iso_date, Post, PostService};
use system_ui::prelude::*;

use crate::feed::{editing_status, list_label, post_by_id, saved_status, EditorForm};

fn reload_posts(posts: RwSignal<Vec<Post>>) {
    spawn_local(async move {
        let service = post_service();
        match service.list_posts().await {
            Ok(loaded) => posts.set(loaded),
            Err(err) => {
                logging::warn!("admin post list failed: {err}");
                posts.set(Vec::new());
            }
        }
    });
}

#[component]
/// Password-gated post editor.
pub fn AdminApp() -> impl IntoView {
    let authenticated = create_rw_signal(false);
    let password = create_rw_signal(String::new());
    let status = create_rw_signal(String::new());
    let posts = create_rw_signal(Vec::<Post>::new());
    let form = create_rw_signal(EditorForm::blank(today_iso_date()));

    spawn_local(async move {
        let service = post_service();
        let cookie = cookie_jar().get();
        let ok = service.is_authenticated(cookie.as_ref()).await;
        authenticated.set(ok);
        if ok {
            reload_posts(posts);
        }
    });

    let submit_login = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        status.set("Checking...".to_string());
        let candidate = password.get_untracked();
        spawn_local(async move {
            let service = post_service();
            match service.login(&candidate).await {
                Ok(cookie) => {
                    cookie_jar().set(cookie);
                    authenticated.set(true);
                    status.set("Logged in".to_string());
                    reload_posts(posts);
                }
                Err(_) => status.set("Wrong password".to_string()),
            }
        });
    };

    let start_new = move || {
        form.set(EditorForm::blank(today_iso_date()));
        status.set(String::new());
    };

    let submit_post = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        status.set("Saving...".to_string());
        let current = form.get_untracked();
        spawn_local(async move {
            let service = post_service();
            let Some(cookie) = cookie_jar().get() else {
                status.set("Error saving post".to_string());
                return;
            };
            let draft = current.to_draft();
            let result = match current.editing_id {
                Some(id) => service.update_post(&cookie, id, draft).await,
                None => service.create_post(&cookie, draft).await,
            };
            match result {
                Ok(saved) => {
                    status.set(saved_status(current.editing_id.is_some(), &saved));
                    form.update(|form| form.editing_id = Some(saved.id));
                    reload_posts(posts);
                }
                Err(err) => {
                    logging::warn!("admin save failed: {err}");
                    status.set("Error saving post".to_string());
                }
            }
        });
    };

    view! {
        <div class="app-shell app-admin">
            <Show
                when=move || authenticated.get()
                fallback=move || view! {
                    <form class="app-admin-form app-admin-login" on:submit=submit_login>
                        <FieldGroup title="Password">
                            <TextField
                                input_type="password"
                                autocomplete="current-password"
                                value=password
                                on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                            />
                        </FieldGroup>
                        <div class="app-admin-row">
                            <Button button_type="submit" variant=ButtonVariant::Primary>"Login"</Button>
                            <span class="app-admin-status">{move || status.get()}</span>
                        </div>
                    </form>
                }
            >
                <SplitLayout layout_class="app-admin-split">
                    <Pane layout_class="app-admin-sidebar" ui_slot="sidebar" aria_label="Posts">
                        <Heading ui_slot="sidebar-title">"Posts"</Heading>
                        <Button
                            variant=ButtonVariant::Quiet
                            layout_class="app-admin-post-item"
                            selected=Signal::derive(move || form.get().editing_id.is_none())
                            on_click=Callback::new(move |_| start_new())
                        >
                            "+ New Post"
                        </Button>
                        <For each=move || posts.get() key=|post| post.id let:post>
                            {
                                let post_id = post.id;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        layout_class="app-admin-post-item"
                                        selected=Signal::derive(move || form.get().editing_id == Some(post_id))
                                        on_click=Callback::new(move |_| {
                                            let Some(current) =
                                                posts.with_untracked(|all| post_by_id(all, post_id))
                                            else {
                                                return;
                                            };
                                            status.set(editing_status(&current));
                                            form.set(EditorForm::from_post(&current));
                                        })
                                    >
                                        {move || {
                                            posts.with(|all| {
                                                post_by_id(all, post_id)
                                                    .map(|current| list_label(&current))
                                                    .unwrap_or_default()
                                            })
                                        }}
                                    </Button>
                                }
                            }
                        </For>
                    </Pane>

                    <form class="app-admin-form" on:submit=submit_post>
                        <FieldGroup title="Title">
                            <TextField
                                value=Signal::derive(move || form.get().title)
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|form| form.title = value);
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Date">
                            <TextField
                                input_type="date"
                                value=Signal::derive(move || form.get().date)
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|form| form.date = value);
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Content (HTML supported)">
                            <TextArea
                                rows=10
                                value=Signal::derive(move || form.get().content)
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|form| form.content = value);
                                })
                            />
                        </FieldGroup>
                        <CheckboxField
                            label="Mark as Hot"
                            checked=Signal::derive(move || form.get().is_hot)
                            on_change=Callback::new(move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|form| form.is_hot = checked);
                            })
                        />
                        <CheckboxField
                            label="Published"
                            checked=Signal::derive(move || form.get().published)
                            on_change=Callback::new(move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|form| form.published = checked);
                            })
                        />
                        <div class="app-admin-row">
                            <Button button_type="submit" variant=ButtonVariant::Primary>
                                {move || form.get().submit_label()}
                            </Button>
                            <Button on_click=Callback::new(move |_| start_new())>"New"</Button>
                            <span class="app-admin-status">{move || status.get()}</span>
                        </div>
                    </form>
                </SplitLayout>
            </Show>
        </div>
    }
}
