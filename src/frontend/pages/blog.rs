use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::{get_blog_index, get_blog_post};
use crate::frontend::components::{DynamicBlocks, ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;
use crate::models::BlogPostData;

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| get_blog_index());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                posts.get().map(|result| match result {
                    Ok(posts) => view! {
                        <Title text="Blog"/>
                        <div class="max-w-3xl mx-auto pt-32 pb-20 px-6">
                            <h1 class="text-4xl font-bold mb-12 text-center">"Blog"</h1>
                            <div class="space-y-10">
                                {posts
                                    .into_iter()
                                    .map(|post| view! {
                                        <article>
                                            <a href=format!("/blog/{}", post.slug)>
                                                <h2 class="text-2xl font-semibold mb-1
                                                           hover:text-[var(--color-primary)]">
                                                    {post.title}
                                                </h2>
                                            </a>
                                            {post.published_at.map(|date| view! {
                                                <p class="text-sm opacity-60 mb-2">
                                                    {date.format("%B %-d, %Y").to_string()}
                                                </p>
                                            })}
                                            {post.excerpt.map(|e| view! { <p class="opacity-80">{e}</p> })}
                                        </article>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <Footer/>
                    }
                    .into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
pub fn BlogPostPage(slug: String) -> impl IntoView {
    let post = Resource::new(move || slug.clone(), get_blog_post);

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                post.get().map(|result| match result {
                    Ok(Some(post)) => view! { <BlogPostContent post/> }.into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn BlogPostContent(post: BlogPostData) -> impl IntoView {
    view! {
        <ThemeProvider theme=post.color_theme.clone()>
            <Title text=post.title.clone()/>
            <article class="max-w-3xl mx-auto pt-32 pb-20 px-6">
                <h1 class="text-4xl font-bold mb-3">{post.title.clone()}</h1>
                <p class="text-sm opacity-60 mb-10">
                    {post.author.clone().unwrap_or_default()}
                    {post
                        .published_at
                        .map(|date| format!(" · {}", date.format("%B %-d, %Y")))
                        .unwrap_or_default()}
                </p>
                {post.body.clone().map(|body| view! {
                    <div class="prose" inner_html=body></div>
                })}
                {(!post.dynamic_content.is_empty()).then(|| view! {
                    <DynamicBlocks raw=post.dynamic_content.clone()/>
                })}
            </article>
            <Footer/>
        </ThemeProvider>
    }
}
