//! Bodies for the small built-in apps that need no host services.

use leptos::*;

/// Welcome presentation shown on boot.
pub(super) fn presentation_body() -> View {
    view! {
        <div class="app-shell app-presentation-shell">
            <h2 class="app-presentation-title">"Welcome to My Portfolio"</h2>
            <p class="app-presentation-text">
                "Hi, I'm Matt! This is my retro Windows XP-style portfolio. "
                "Feel free to explore the desktop environment, open applications, and drag windows around."
            </p>
            <p class="app-presentation-text">
                "I also write about my development journey. Check out my blog!"
            </p>
            <a class="app-link-button" href="/blog" target="_blank" rel="noopener noreferrer">
                "Visit My Blog ➜"
            </a>
        </div>
    }
    .into_view()
}

pub(super) fn my_computer_body() -> View {
    view! {
        <div class="app-shell app-padded">"System Specs: Rust + Leptos Project"</div>
    }
    .into_view()
}

pub(super) fn recycle_bin_body() -> View {
    view! {
        <div class="app-shell app-padded">"The bin is empty."</div>
    }
    .into_view()
}

pub(super) fn about_body() -> View {
    view! {
        <div class="app-shell app-padded">
            <h3>"Hello!"</h3>
            <p>"I am a developer who loves retro UIs."</p>
        </div>
    }
    .into_view()
}

/// Shown for catalog keys without a compiled body.
pub(super) fn unavailable_body() -> View {
    view! {
        <div class="app-shell app-padded">
            <p>"This app is not available."</p>
        </div>
    }
    .into_view()
}
