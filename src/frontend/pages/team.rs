use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::get_team_page;
use crate::frontend::components::{ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;

#[component]
pub fn TeamPage() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_team_page());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! {
                        <ThemeProvider theme=data.color_theme.clone()>
                            <Title text=data.title.clone().unwrap_or_else(|| "Our Team".to_string())/>
                            <div class="max-w-6xl mx-auto pt-32 pb-20 px-6">
                                <h1 class="text-4xl font-bold mb-4 text-center">
                                    {data.title.clone().unwrap_or_else(|| "Our Team".to_string())}
                                </h1>
                                {data.description.clone().map(|d| view! {
                                    <p class="opacity-70 mb-12 text-center">{d}</p>
                                })}
                                <div class="grid gap-8 sm:grid-cols-2 md:grid-cols-3">
                                    {data
                                        .members
                                        .iter()
                                        .cloned()
                                        .map(|member| view! {
                                            <div class="text-center">
                                                {member.photo_url.map(|url| view! {
                                                    <img
                                                        src=url
                                                        alt=""
                                                        class="w-32 h-32 rounded-full mx-auto mb-4 object-cover"
                                                    />
                                                })}
                                                <h2 class="text-xl font-semibold">{member.name}</h2>
                                                {member.role.map(|r| view! {
                                                    <p class="text-sm text-[var(--color-primary)] mb-2">{r}</p>
                                                })}
                                                {member.bio.map(|b| view! {
                                                    <p class="text-sm opacity-80">{b}</p>
                                                })}
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <Footer/>
                        </ThemeProvider>
                    }
                    .into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}
