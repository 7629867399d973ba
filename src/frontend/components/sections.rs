//! Landing-page sections.
//!
//! One dispatch match covers both CMS-ordered and default-ordered rendering;
//! the order always arrives as a `Vec<SectionKey>` from
//! [`resolve_section_order`](crate::models::resolve_section_order). Every
//! section self-suppresses when its data is absent or empty.

use leptos::prelude::*;

use crate::models::{LandingPageData, SectionKey};

use super::blocks::DynamicBlocks;
use super::cards::CardGrid;
use super::footer::Footer;

pub fn render_section(key: SectionKey, data: &LandingPageData) -> AnyView {
    match key {
        SectionKey::Header => header(data),
        SectionKey::Features => features(data),
        SectionKey::ProblemSolution => problem_solution(data),
        SectionKey::HowItWorks => how_it_works(data),
        SectionKey::Video => video(data),
        SectionKey::Benefits => benefits(data),
        SectionKey::Pricing => pricing(data),
        SectionKey::CardSections => card_sections(data),
        SectionKey::DynamicContent => dynamic_content(data),
        SectionKey::Testimonials => testimonials(data),
        SectionKey::Faq => faq(data),
        SectionKey::Cta => cta(data),
        SectionKey::SecondaryCta => secondary_cta(data),
        SectionKey::Footer => view! { <Footer/> }.into_any(),
    }
}

fn header(data: &LandingPageData) -> AnyView {
    let Some(heading) = data.hero_heading.clone() else {
        return ().into_any();
    };

    view! {
        <section class="pt-32 pb-20 px-6 flex flex-col items-center text-center">
            {data.hero_image_url.clone().map(|url| view! {
                <img src=url alt="" class="w-full max-w-2xl mb-12 rounded-xl"/>
            })}
            <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">{heading}</h1>
            {data.hero_subheading.clone().map(|sub| view! {
                <p class="text-xl opacity-70 max-w-2xl mb-10">{sub}</p>
            })}
            {match (data.hero_cta_text.clone(), data.hero_cta_url.clone()) {
                (Some(text), Some(url)) => Some(view! {
                    <a href=url class="btn-primary btn-large">{text}</a>
                }),
                _ => None,
            }}
        </section>
    }
    .into_any()
}

fn features(data: &LandingPageData) -> AnyView {
    if data.features.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto grid gap-6 md:grid-cols-3">
                {data
                    .features
                    .iter()
                    .cloned()
                    .map(|f| view! {
                        <div class="p-6 rounded-xl border border-[var(--color-neutral)]">
                            {f.icon.map(|i| view! { <span class="text-4xl mb-4 block">{i}</span> })}
                            {f.title.map(|t| view! { <h3 class="text-xl font-semibold mb-2">{t}</h3> })}
                            {f.description.map(|d| view! { <p class="text-sm opacity-80">{d}</p> })}
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

fn problem_solution(data: &LandingPageData) -> AnyView {
    if data.problem_heading.is_none() && data.solution_heading.is_none() {
        return ().into_any();
    }

    view! {
        <section class="py-20 px-6">
            <div class="max-w-5xl mx-auto grid gap-12 md:grid-cols-2">
                <div>
                    {data.problem_heading.clone().map(|h| view! { <h2 class="text-3xl font-bold mb-4">{h}</h2> })}
                    {data.problem_description.clone().map(|d| view! { <p class="opacity-80">{d}</p> })}
                </div>
                <div>
                    {data.solution_heading.clone().map(|h| view! { <h2 class="text-3xl font-bold mb-4">{h}</h2> })}
                    {data.solution_description.clone().map(|d| view! { <p class="opacity-80">{d}</p> })}
                </div>
            </div>
        </section>
    }
    .into_any()
}

fn how_it_works(data: &LandingPageData) -> AnyView {
    if data.how_it_works_steps.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="py-20 px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl font-bold mb-12 text-center">"How It Works"</h2>
                <ol class="grid gap-8 md:grid-cols-3">
                    {data
                        .how_it_works_steps
                        .iter()
                        .cloned()
                        .map(|step| view! {
                            <li class="text-center">
                                <span class="inline-flex w-12 h-12 items-center justify-center mb-4
                                             rounded-full font-bold text-lg
                                             bg-[var(--color-primary)] text-[var(--color-background)]">
                                    {step.step.map(|n| n.to_string()).unwrap_or_default()}
                                </span>
                                {step.title.map(|t| view! { <h3 class="font-semibold mb-2">{t}</h3> })}
                                {step.description.map(|d| view! { <p class="text-sm opacity-80">{d}</p> })}
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
    .into_any()
}

fn video(data: &LandingPageData) -> AnyView {
    let Some(url) = data.video_url.clone() else {
        return ().into_any();
    };

    view! {
        <section class="py-20 px-6">
            <div class="max-w-3xl mx-auto">
                {data.video_title.clone().map(|t| view! {
                    <h2 class="text-3xl font-bold mb-8 text-center">{t}</h2>
                })}
                <div class="aspect-video rounded-xl overflow-hidden border border-[var(--color-neutral)]">
                    <iframe src=url class="w-full h-full" allowfullscreen=true></iframe>
                </div>
            </div>
        </section>
    }
    .into_any()
}

fn benefits(data: &LandingPageData) -> AnyView {
    if data.benefits.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="py-20 px-6 bg-[var(--color-neutral)]/30">
            <div class="max-w-6xl mx-auto grid gap-6 md:grid-cols-2">
                {data
                    .benefits
                    .iter()
                    .cloned()
                    .map(|b| view! {
                        <div class="flex gap-4 items-start">
                            {b.icon.map(|i| view! { <span class="text-3xl">{i}</span> })}
                            <div>
                                {b.title.map(|t| view! { <h3 class="font-semibold mb-1">{t}</h3> })}
                                {b.description.map(|d| view! { <p class="text-sm opacity-80">{d}</p> })}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

fn pricing(data: &LandingPageData) -> AnyView {
    if data.pricing_plans.is_empty() {
        return ().into_any();
    }

    let value = crate::models::PricingValue {
        title: Some("Pricing".to_string()),
        plans: data.pricing_plans.clone(),
    };
    view! {
        <section class="py-20">{super::blocks::render_block(crate::models::ContentBlock::Pricing(value))}</section>
    }
    .into_any()
}

fn card_sections(data: &LandingPageData) -> AnyView {
    if data.card_sections.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="py-20 px-6 space-y-16">
            {data
                .card_sections
                .iter()
                .cloned()
                .map(|section| view! {
                    <div class="max-w-6xl mx-auto">
                        {section.title.map(|t| view! { <h2 class="text-3xl font-bold mb-4 text-center">{t}</h2> })}
                        {section.description.map(|d| view! { <p class="opacity-80 mb-8 text-center">{d}</p> })}
                        <CardGrid cards=section.cards/>
                    </div>
                })
                .collect_view()}
        </section>
    }
    .into_any()
}

fn dynamic_content(data: &LandingPageData) -> AnyView {
    if data.dynamic_content.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="py-20">
            <DynamicBlocks raw=data.dynamic_content.clone()/>
        </section>
    }
    .into_any()
}

fn testimonials(data: &LandingPageData) -> AnyView {
    if data.testimonials.is_empty() {
        return ().into_any();
    }

    let value = crate::models::TestimonialsValue {
        title: Some("What Our Customers Say".to_string()),
        items: data.testimonials.clone(),
    };
    view! {
        <section class="py-20">
            {super::blocks::render_block(crate::models::ContentBlock::Testimonials(value))}
        </section>
    }
    .into_any()
}

fn faq(data: &LandingPageData) -> AnyView {
    if data.faqs.is_empty() {
        return ().into_any();
    }

    let value = crate::models::FaqValue {
        title: None,
        items: data.faqs.clone(),
    };
    view! {
        <section class="py-20">
            {super::blocks::render_block(crate::models::ContentBlock::Faq(value))}
        </section>
    }
    .into_any()
}

fn cta(data: &LandingPageData) -> AnyView {
    cta_banner(
        data.cta_heading.clone(),
        data.cta_text.clone(),
        data.cta_url.clone(),
    )
}

fn secondary_cta(data: &LandingPageData) -> AnyView {
    cta_banner(
        data.secondary_cta_heading.clone(),
        data.secondary_cta_text.clone(),
        data.secondary_cta_url.clone(),
    )
}

fn cta_banner(heading: Option<String>, text: Option<String>, url: Option<String>) -> AnyView {
    let Some(heading) = heading else {
        return ().into_any();
    };

    view! {
        <section class="py-20 px-6">
            <div class="max-w-3xl mx-auto py-12 px-6 text-center rounded-2xl
                        bg-[var(--color-primary)] text-[var(--color-background)]">
                <h2 class="text-3xl font-bold mb-6">{heading}</h2>
                {match (text, url) {
                    (Some(text), Some(url)) => Some(view! {
                        <a href=url class="btn-primary inline-block px-8 py-3">{text}</a>
                    }),
                    _ => None,
                }}
            </div>
        </section>
    }
    .into_any()
}
