use leptos::prelude::*;

/// Full-width loading indicator shown while a page document is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24" role="status" aria-label="Loading">
            <span class="w-10 h-10 border-4 rounded-full animate-spin
                         border-[var(--color-neutral)] border-t-[var(--color-primary)]"></span>
        </div>
    }
}
