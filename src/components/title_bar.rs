//! Title Bar Component
//!
//! Sticky header with brand, external links, and the theme toggle.

use leptos::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn TitleBar() -> impl IntoView {
    let theme = use_theme();

    let toggle_label = move || {
        if theme.is_dark.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <header class="title-bar">
            <div class="title-bar-inner">
                <div class="brand">
                    <span class="brand-mark">"◭"</span>
                    <span class="brand-name">"leptos-starter"</span>
                </div>
                <div class="title-bar-actions">
                    <a
                        class="text-btn"
                        href="https://github.com/leptos-rs/leptos"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Leptos on GitHub"
                    >
                        "GitHub"
                    </a>
                    <a
                        class="text-btn"
                        href="https://book.leptos.dev"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Leptos book"
                    >
                        "Docs"
                    </a>
                    <span class="divider"></span>
                    <button
                        class="icon-btn"
                        on:click=move |_| theme.toggle()
                        aria-label=toggle_label
                    >
                        {move || if theme.is_dark.get() { "☀" } else { "🌙" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
