use leptos::prelude::*;

/// Generic page-level failure view. Recovery is a whole-page reload; there
/// is no scoped re-fetch.
#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    let retry = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="max-w-lg mx-auto py-24 px-6 text-center">
            <h1 class="text-3xl font-bold mb-4">"Unable to Load Page"</h1>
            <p class="mb-8 text-[var(--color-text)] opacity-70">{message}</p>
            <button class="btn-primary px-8 py-3" on:click=retry>
                "Try Again"
            </button>
        </div>
    }
}
