//! Internal debug panels. Not linked from anywhere; reachable only by URL.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::api::{get_landing_page, list_features_pages};
use crate::frontend::components::Spinner;
use crate::frontend::router::View;

/// Shows how the current location resolves and what the client knows
/// about its environment.
#[component]
pub fn DebugPage() -> impl IntoView {
    let location = use_location();
    let resolved = move || {
        let view = View::resolve(&location.pathname.get(), &location.hash.get());
        format!("{view:?}")
    };

    view! {
        <Title text="Debug"/>
        <div class="max-w-3xl mx-auto pt-32 pb-20 px-6 font-mono text-sm">
            <h1 class="text-2xl font-bold mb-8">"Debug"</h1>
            <dl class="space-y-2">
                <dt class="font-bold">"pathname"</dt>
                <dd>{move || location.pathname.get()}</dd>
                <dt class="font-bold">"hash"</dt>
                <dd>{move || location.hash.get()}</dd>
                <dt class="font-bold">"resolved view"</dt>
                <dd>{resolved}</dd>
            </dl>
        </div>
    }
}

/// Raw dump of the landing page document.
#[component]
pub fn DebugLandingPage() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_landing_page());

    view! {
        <Title text="Debug: Landing"/>
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| {
                    let dump = match result {
                        Ok(data) => serde_json::to_string_pretty(&data)
                            .unwrap_or_else(|e| format!("serialize error: {e}")),
                        Err(e) => format!("fetch error: {e}"),
                    };
                    view! { <DebugDump title="Landing page document" dump/> }
                })
            }}
        </Suspense>
    }
}

/// Raw dump of every features page document.
#[component]
pub fn DebugFeaturesPage() -> impl IntoView {
    let pages = Resource::new(|| (), |_| list_features_pages());

    view! {
        <Title text="Debug: Features"/>
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                pages.get().map(|result| {
                    let dump = match result {
                        Ok(data) => serde_json::to_string_pretty(&data)
                            .unwrap_or_else(|e| format!("serialize error: {e}")),
                        Err(e) => format!("fetch error: {e}"),
                    };
                    view! { <DebugDump title="Features page documents" dump/> }
                })
            }}
        </Suspense>
    }
}

#[component]
fn DebugDump(title: &'static str, dump: String) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto pt-32 pb-20 px-6">
            <h1 class="text-2xl font-bold mb-8 font-mono">{title}</h1>
            <pre class="text-xs overflow-x-auto p-4 rounded-lg border border-[var(--color-neutral)]">
                {dump}
            </pre>
        </div>
    }
}
