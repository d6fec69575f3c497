//! Customer reviews.
//!
//! Same fetch contract as the gallery: one load on mount, skeletons while
//! loading, the four fallback reviews if the request fails.

use content::{MAX_RATING, Testimonial};
use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::fetch::load_testimonials;
use crate::util::mount_fetch::use_mount_fetch;

#[component]
pub fn Testimonials() -> impl IntoView {
    let state = use_mount_fetch(|| async move { load_testimonials(&HttpApi::from_build_env()).await });

    view! {
        <section id="testimonials" class="section testimonials" data-testid="testimonials-section">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title" data-testid="testimonials-title">"What My Neighbors Say"</h2>
                    <p class="section__lead">
                        "Don't just take my word for it. Here's what my customers have to say "
                        "about their experience working with me."
                    </p>
                </header>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || {
                        view! {
                            <div class="testimonials__grid">
                                {(0..state.with(|s| s.placeholder_slots()))
                                    .map(|_| view! { <div class="skeleton testimonials__skeleton"></div> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    }
                >
                    <div class="testimonials__grid">
                        <For
                            each=move || state.with(|s| s.rows(|t| t.id.as_str()))
                            key=|(key, _)| key.clone()
                            children=|((index, _), testimonial)| view! { <TestimonialCard testimonial=testimonial index=index/> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    let initials = testimonial.initials();
    let filled = testimonial.filled_stars();
    let Testimonial { name, comment, service_type, .. } = testimonial;

    view! {
        <article class="testimonial-card" data-testid=format!("testimonial-card-{index}")>
            <span class="testimonial-card__quote">"\u{201C}"</span>
            <StarRating filled=filled/>
            <p class="testimonial-card__comment">{format!("\"{comment}\"")}</p>
            <footer class="testimonial-card__author">
                <span class="avatar">{initials}</span>
                <div>
                    <p class="testimonial-card__name">{name}</p>
                    <p class="testimonial-card__service">{service_type}</p>
                </div>
            </footer>
        </article>
    }
}

/// Five stars, the first `filled` highlighted.
#[component]
fn StarRating(filled: i32) -> impl IntoView {
    view! {
        <div class="stars" aria-label=format!("{filled} out of {MAX_RATING} stars")>
            {(1..=MAX_RATING)
                .map(|star| {
                    let class = if star <= filled { "stars__star stars__star--filled" } else { "stars__star" };
                    view! { <span class=class>"\u{2605}"</span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
