use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(optional)] site_name: Option<String>) -> impl IntoView {
    let brand = site_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Brochure".to_string());

    view! {
        <footer class="border-t border-[var(--color-neutral)] bg-[var(--color-secondary)]/5">
            <div class="max-w-6xl mx-auto px-6 py-12 text-center">
                <p class="text-2xl font-bold mb-2 text-[var(--color-primary)]">{brand.clone()}</p>
                <p class="text-xs opacity-60">"© " {brand} ". All rights reserved."</p>
            </div>
        </footer>
    }
}
