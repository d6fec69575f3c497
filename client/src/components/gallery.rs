//! Before/after project gallery.
//!
//! Loads projects once on mount through [`load_gallery`]; shows skeleton
//! blocks until the load settles and the fallback projects if it fails.

use content::GalleryItem;
use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::fetch::load_gallery;
use crate::util::mount_fetch::use_mount_fetch;
use crate::util::{config, slider};

#[component]
pub fn Gallery() -> impl IntoView {
    let state = use_mount_fetch(|| async move {
        load_gallery(&HttpApi::from_build_env(), config::gallery_refresh()).await
    });

    view! {
        <section id="gallery" class="section section--muted gallery" data-testid="gallery-section">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title" data-testid="gallery-title">"See the Transformation"</h2>
                    <p class="section__lead">
                        "Drag the slider to see the before and after of my recent projects. "
                        "Quality work that speaks for itself."
                    </p>
                </header>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || {
                        view! {
                            <div class="gallery__grid">
                                {(0..state.with(|s| s.placeholder_slots()))
                                    .map(|_| view! { <div class="skeleton gallery__skeleton"></div> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    }
                >
                    <div class="gallery__grid">
                        <For
                            each=move || state.with(|s| s.rows(|g| g.id.as_str()))
                            key=|(key, _)| key.clone()
                            children=|((index, _), item)| view! { <BeforeAfterCard item=item index=index/> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

/// One project: the "after" photo with the "before" photo clipped over it
/// up to the slider position.
#[component]
fn BeforeAfterCard(item: GalleryItem, index: usize) -> impl IntoView {
    let position = RwSignal::new(slider::SLIDER_START);
    let GalleryItem { title, description, service_type, before_image, after_image, .. } = item;
    let after_alt = format!("{title} - After");
    let before_alt = format!("{title} - Before");

    view! {
        <article class="gallery-card" data-testid=format!("gallery-card-{index}")>
            <div class="gallery-card__compare">
                <img class="gallery-card__image" src=after_image alt=after_alt/>
                <div class="gallery-card__clip" style:width=move || slider::clip_width(position.get())>
                    <img
                        class="gallery-card__image gallery-card__image--before"
                        src=before_image
                        alt=before_alt
                        style:width=move || slider::before_image_width(position.get())
                    />
                </div>
                <div class="gallery-card__divider" style:left=move || slider::clip_width(position.get())>
                    <span class="gallery-card__handle">"\u{21C4}"</span>
                </div>
                <span class="badge badge--secondary gallery-card__label gallery-card__label--before">"Before"</span>
                <span class="badge badge--accent gallery-card__label gallery-card__label--after">"After"</span>
            </div>

            <div class="gallery-card__slider">
                <input
                    type="range"
                    min=slider::SLIDER_MIN.to_string()
                    max=slider::SLIDER_MAX.to_string()
                    step="1"
                    aria-label="Before and after comparison"
                    data-testid=format!("gallery-slider-{index}")
                    prop:value=move || position.get().to_string()
                    on:input=move |ev| {
                        if let Some(value) = slider::parse_position(&event_target_value(&ev)) {
                            position.set(value);
                        }
                    }
                />
            </div>

            <div class="gallery-card__body">
                <span class="badge badge--outline">{service_type}</span>
                <h3 class="gallery-card__title">{title}</h3>
                <p class="gallery-card__description">{description}</p>
            </div>
        </article>
    }
}
