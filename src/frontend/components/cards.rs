use leptos::prelude::*;

use crate::models::Card;

/// Responsive card grid used by the `card_grid` block and the landing
/// page's card sections.
#[component]
pub fn CardGrid(cards: Vec<Card>) -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-3">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="rounded-xl border border-[var(--color-neutral)] overflow-hidden
                                hover:-translate-y-1 transition-transform duration-300">
                        {card.image_url.map(|url| view! {
                            <img src=url alt="" class="w-full h-40 object-cover"/>
                        })}
                        <div class="p-6">
                            {card.title.map(|t| view! { <h3 class="text-xl font-semibold mb-2">{t}</h3> })}
                            {card.description.map(|d| view! { <p class="text-sm opacity-80 mb-4">{d}</p> })}
                            {match (card.link_url, card.link_text) {
                                (Some(url), text) => Some(view! {
                                    <a href=url class="text-[var(--color-primary)] font-semibold">
                                        {text.unwrap_or_else(|| "Learn more".to_string())}
                                    </a>
                                }),
                                _ => None,
                            }}
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
