//! Feature Card Component

use leptos::prelude::*;

/// Bordered card describing one template feature, with a code snippet
#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    code_example: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
            <pre><code>{code_example}</code></pre>
        </div>
    }
}
