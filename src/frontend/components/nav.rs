use leptos::prelude::*;

use crate::models::{LinkType, NavigationItem};

/// Site header driven by CMS navigation settings.
#[component]
pub fn SiteNav(
    items: Vec<NavigationItem>,
    site_name: Option<String>,
    logo_url: Option<String>,
) -> impl IntoView {
    let brand = site_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Brochure".to_string());

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md border-b
                    bg-[var(--color-background)]/80 border-[var(--color-neutral)]">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3">
                    {logo_url.map(|url| view! { <img src=url alt="" class="h-8"/> })}
                    <span class="text-xl font-bold text-[var(--color-primary)]">{brand}</span>
                </a>
                <div class="flex items-center gap-6">
                    {items.into_iter().map(nav_entry).collect_view()}
                </div>
            </div>
        </nav>
    }
}

fn nav_entry(item: NavigationItem) -> AnyView {
    match item.link_type {
        LinkType::Dropdown => view! {
            <div class="relative group">
                <span class="cursor-pointer text-[var(--color-text)]">{item.title}</span>
                <div class="absolute hidden group-hover:block top-full left-0 pt-2">
                    <div class="rounded-lg border border-[var(--color-neutral)]
                                bg-[var(--color-background)] py-2 min-w-[12rem] shadow-lg">
                        {item
                            .children
                            .into_iter()
                            .map(|child| view! {
                                <a
                                    href=child.url
                                    class="block px-4 py-2 text-sm text-[var(--color-text)]
                                           hover:bg-[var(--color-neutral)]"
                                >
                                    {child.title}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
        .into_any(),
        LinkType::Page | LinkType::Url => view! {
            <a
                href=item.url
                class="text-[var(--color-text)] hover:text-[var(--color-primary)] transition-colors"
            >
                {item.title}
            </a>
        }
        .into_any(),
    }
}
