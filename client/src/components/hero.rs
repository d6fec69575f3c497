//! Landing hero: pitch, feature bullets, calls to action, portrait.

use content::site::{CREDENTIAL, EXPERIENCE, Glyph, HERO_FEATURES, HERO_IMAGE};
use leptos::prelude::*;

use crate::components::glyph::GlyphIcon;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-testid="hero-section">
            <div class="hero__inner">
                <div class="hero__copy">
                    <span class="badge badge--secondary" data-testid="hero-badge">
                        "Your Neighborhood Handyman"
                    </span>
                    <h1 class="hero__title" data-testid="hero-title">
                        "Hi, I'm " <span class="hero__name">"Chi"</span> " \u{2014} Your Certified Fixerupper"
                    </h1>
                    <p class="hero__description" data-testid="hero-description">
                        "I can fix anything for a bargain and make it last like brand new. "
                        "From plumbing to painting, roofs to floors \u{2014} if it needs fixing, I've got you covered."
                    </p>

                    <ul class="hero__features">
                        {HERO_FEATURES
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| {
                                view! {
                                    <li class="hero__feature" data-testid=format!("hero-feature-{i}")>
                                        <GlyphIcon glyph=feature.glyph class="hero__feature-icon"/>
                                        <span>{feature.text}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>

                    <div class="hero__actions">
                        <a href="#contact" class="btn btn--primary btn--lg" data-testid="hero-cta-primary">
                            "Get a Free Quote"
                        </a>
                        <a href="#services" class="btn btn--outline btn--lg" data-testid="hero-cta-secondary">
                            "View Services"
                        </a>
                    </div>
                </div>

                <div class="hero__media">
                    <img
                        class="hero__image"
                        src=HERO_IMAGE
                        alt="Chi - Professional Handyman"
                        data-testid="hero-image"
                    />
                    <div class="hero__credential glass">
                        <span class="hero__credential-icon">
                            <GlyphIcon glyph=Glyph::Award/>
                        </span>
                        <div>
                            <p class="hero__credential-title">{CREDENTIAL}</p>
                            <p class="hero__credential-sub">{EXPERIENCE}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
