//! Single blog post addressed by slug.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::content::blog::{find_post, render_markdown};
use crate::routes::Route;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || match find_post(&slug()) {
        Some(post) => view! {
            <article class="post">
                <p class="post__meta">
                    {post.date} " · " {post.tags.join(", ")}
                </p>
                <div class="post__body" inner_html=render_markdown(post.body)></div>
                <a href=Route::Blog.path() class="post__back">"← All posts"</a>
            </article>
        }
        .into_any(),
        None => view! {
            <section class="post post--missing">
                <h1>"Post not found"</h1>
                <p>{format!("There is no post called \"{}\".", slug())}</p>
                <a href=Route::Blog.path()>"Back to the blog"</a>
            </section>
        }
        .into_any(),
    }
}
