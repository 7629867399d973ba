//! Renderers for dynamic content blocks.
//!
//! Dispatch is one exhaustive match over [`ContentBlock`]; a new kind added
//! to the enum will not compile until it renders. Rows that failed parsing
//! never reach this module, so sibling blocks always render.

use leptos::prelude::*;

use crate::models::{
    CardGridValue, ContentBlock, CtaValue, FaqValue, ImageValue, PricingValue, RawBlock,
    RichTextValue, SpacerValue, TestimonialsValue, VideoValue,
};

use super::cards::CardGrid;

/// Renders a CMS `dynamic_content` array in order.
#[component]
pub fn DynamicBlocks(raw: Vec<RawBlock>) -> impl IntoView {
    let blocks = ContentBlock::parse_all(&raw);
    view! {
        <div class="dynamic-content space-y-12">
            {blocks.into_iter().map(render_block).collect_view()}
        </div>
    }
}

pub fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::RichText(value) => rich_text_block(value),
        ContentBlock::Video(value) => video_block(value),
        ContentBlock::CardGrid(value) => card_grid_block(value),
        ContentBlock::Cta(value) => cta_block(value),
        ContentBlock::Faq(value) => faq_block(value),
        ContentBlock::Pricing(value) => pricing_block(value),
        ContentBlock::Testimonials(value) => testimonials_block(value),
        ContentBlock::Image(value) => image_block(value),
        ContentBlock::Spacer(value) => spacer_block(value),
    }
}

fn rich_text_block(value: RichTextValue) -> AnyView {
    view! {
        <div class="prose max-w-3xl mx-auto px-6" inner_html=value.content></div>
    }
    .into_any()
}

fn video_block(value: VideoValue) -> AnyView {
    view! {
        <div class="max-w-3xl mx-auto px-6">
            {value.title.map(|t| view! { <h2 class="text-2xl font-bold mb-4">{t}</h2> })}
            <div class="aspect-video rounded-xl overflow-hidden border border-[var(--color-neutral)]">
                <iframe
                    src=value.url
                    class="w-full h-full"
                    allow=if value.autoplay { "autoplay" } else { "" }
                    allowfullscreen=true
                ></iframe>
            </div>
        </div>
    }
    .into_any()
}

fn card_grid_block(value: CardGridValue) -> AnyView {
    view! {
        <div class="max-w-6xl mx-auto px-6">
            {value.title.map(|t| view! { <h2 class="text-2xl font-bold mb-8 text-center">{t}</h2> })}
            <CardGrid cards=value.cards/>
        </div>
    }
    .into_any()
}

fn cta_block(value: CtaValue) -> AnyView {
    view! {
        <div class="max-w-3xl mx-auto px-6 py-12 text-center rounded-2xl
                    bg-[var(--color-primary)] text-[var(--color-background)]">
            <h2 class="text-3xl font-bold mb-3">{value.title}</h2>
            {value.description.map(|d| view! { <p class="mb-6 opacity-80">{d}</p> })}
            {match (value.button_text, value.button_url) {
                (Some(text), Some(url)) => Some(view! {
                    <a href=url class="btn-primary inline-block px-8 py-3">{text}</a>
                }),
                _ => None,
            }}
        </div>
    }
    .into_any()
}

fn faq_block(value: FaqValue) -> AnyView {
    view! {
        <div class="max-w-3xl mx-auto px-6">
            <h2 class="text-2xl font-bold mb-8 text-center">
                {value.title.unwrap_or_else(|| "Frequently Asked Questions".to_string())}
            </h2>
            {value
                .items
                .into_iter()
                .map(|item| view! {
                    <details class="mb-3 rounded-lg border border-[var(--color-neutral)] p-4">
                        <summary class="font-semibold cursor-pointer">{item.question}</summary>
                        <p class="mt-3 opacity-80">{item.answer}</p>
                    </details>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn pricing_block(value: PricingValue) -> AnyView {
    view! {
        <div class="max-w-6xl mx-auto px-6">
            {value.title.map(|t| view! { <h2 class="text-2xl font-bold mb-8 text-center">{t}</h2> })}
            <div class="grid gap-6 md:grid-cols-3">
                {value
                    .plans
                    .into_iter()
                    .map(|plan| {
                        let border = if plan.highlighted {
                            "border-[var(--color-accent)]"
                        } else {
                            "border-[var(--color-neutral)]"
                        };
                        view! {
                            <div class=format!("rounded-xl border-2 p-6 {border}")>
                                <h3 class="text-xl font-semibold mb-1">{plan.name}</h3>
                                <p class="text-3xl font-bold mb-1">{plan.price.unwrap_or_default()}</p>
                                {plan.period.map(|p| view! { <p class="text-sm opacity-60 mb-4">{p}</p> })}
                                <ul class="space-y-2 mb-6">
                                    {plan
                                        .features
                                        .into_iter()
                                        .map(|f| view! { <li class="text-sm">"✓ " {f}</li> })
                                        .collect_view()}
                                </ul>
                                {match (plan.cta_text, plan.cta_url) {
                                    (Some(text), Some(url)) => Some(view! {
                                        <a href=url class="btn-primary block text-center py-2">{text}</a>
                                    }),
                                    _ => None,
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn testimonials_block(value: TestimonialsValue) -> AnyView {
    view! {
        <div class="max-w-6xl mx-auto px-6">
            {value.title.map(|t| view! { <h2 class="text-2xl font-bold mb-8 text-center">{t}</h2> })}
            <div class="grid gap-6 md:grid-cols-3">
                {value
                    .items
                    .into_iter()
                    .map(|t| view! {
                        <figure class="rounded-xl border border-[var(--color-neutral)] p-6">
                            <blockquote class="mb-4 italic opacity-90">"“" {t.quote} "”"</blockquote>
                            <figcaption class="flex items-center gap-3">
                                {t.avatar_url.map(|url| view! {
                                    <img src=url alt="" class="w-10 h-10 rounded-full"/>
                                })}
                                <div>
                                    <p class="font-semibold">{t.author.unwrap_or_default()}</p>
                                    {t.role.map(|r| view! { <p class="text-sm opacity-60">{r}</p> })}
                                </div>
                            </figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn image_block(value: ImageValue) -> AnyView {
    view! {
        <figure class="max-w-3xl mx-auto px-6">
            <img src=value.url alt=value.alt.unwrap_or_default() class="rounded-xl w-full"/>
            {value.caption.map(|c| view! {
                <figcaption class="mt-2 text-sm text-center opacity-60">{c}</figcaption>
            })}
        </figure>
    }
    .into_any()
}

fn spacer_block(value: SpacerValue) -> AnyView {
    let height = value.size.unwrap_or(48);
    view! { <div style=format!("height:{height}px") aria-hidden="true"></div> }.into_any()
}
