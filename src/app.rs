//! Application Shell
//!
//! Page layout: header, hero with the counter, feature cards, and the
//! drag-and-drop demos.

use leptos::prelude::*;

use crate::components::{BasicDragDrop, FeatureCard, SortableList, TitleBar};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    theme::provide_theme();
    let (count, set_count) = signal(0u32);

    view! {
        <div class="page">
            <TitleBar />

            <main class="main-content">
                <section class="hero">
                    <h1>"Leptos Starter"</h1>
                    <p class="subtitle">"Trunk + Leptos + WASM template"</p>
                    <button
                        class="count-btn"
                        on:click=move |_| set_count.update(|c| *c += 1)
                        aria-label=move || {
                            format!("Increment count, current count is {}", count.get())
                        }
                    >
                        {move || format!("Count is: {}", count.get())}
                    </button>
                </section>

                <section class="feature-grid">
                    <FeatureCard
                        title="🌗 Theme Management"
                        description="Dark mode with system preference detection and \
                                     persistent storage, provided through a typed context."
                        code_example=r#"let theme = use_theme();

view! {
    <button on:click=move |_| theme.toggle()>
        {move || if theme.is_dark.get() { "Light" } else { "Dark" }}
    </button>
}"#
                    />
                    <FeatureCard
                        title="⚡ Fine-Grained Reactivity"
                        description="Leptos signals and reactive stores update exactly \
                                     the DOM that depends on them."
                        code_example=r#"let (count, set_count) = signal(0u32);

view! {
    <button on:click=move |_| set_count.update(|c| *c += 1)>
        {move || count.get()}
    </button>
}"#
                    />
                    <FeatureCard
                        title="🧲 Drag Engine"
                        description="leptos-dnd senses pointer and keyboard drags with \
                                     configurable activation constraints and collision \
                                     strategies, and reports start/drop/cancel."
                        code_example=r#"let dnd = create_dnd_signals();
let cfg = DndConfig {
    scope: "sortable",
    activation: ActivationConstraint::default(),
    collision: CollisionMode::ClosestCenter,
};
bind_global_dnd(dnd, cfg, cbs);"#
                    />
                    <FeatureCard
                        title="↕ Sortable List"
                        description="Reordering is a pure state machine: one transition \
                                     function over start/end/cancel events, tested \
                                     without a browser."
                        code_example=r#"let out = transition(&state, &items, &evt);
if let Some(new_items) = out.items {
    store.items().set(new_items);
}
store.active_id().set(out.next.active_id());"#
                    />
                    <FeatureCard
                        title="📦 Trunk Workflow"
                        description="One command serves the app with hot reload; \
                                     cargo test covers the logic natively."
                        code_example=r#"trunk serve --open
cargo test --workspace"#
                    />
                </section>

                <section class="demos">
                    <h2>"Drag & Drop"</h2>
                    <BasicDragDrop />
                    <SortableList />
                </section>
            </main>

            <footer class="page-footer">
                <p>
                    "Ready to start building? Edit "
                    <code>"src/app.rs"</code>
                </p>
            </footer>
        </div>
    }
}
