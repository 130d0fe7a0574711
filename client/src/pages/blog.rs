//! Blog listing, newest first.

use leptos::prelude::*;

use crate::content::blog;
use crate::routes::blog_post_path;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="blog">
            <h1>"Blog"</h1>
            <ul class="blog__list">
                {blog::posts()
                    .into_iter()
                    .map(|post| {
                        view! {
                            <li class="blog__entry">
                                <a href=blog_post_path(post.slug) class="blog__title">{post.title}</a>
                                <p class="blog__meta">
                                    {post.date} " · " {format!("{} min read", post.reading_minutes())}
                                </p>
                                <p class="blog__summary">{post.summary}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
