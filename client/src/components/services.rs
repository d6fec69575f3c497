//! Services grid. Featured services get wider, larger cards.

use content::site::SERVICES;
use leptos::prelude::*;

use crate::components::glyph::GlyphIcon;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services" data-testid="services-section">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title" data-testid="services-title">"What Can I Fix For You?"</h2>
                    <p class="section__lead">
                        "From small repairs to major renovations, I've got the skills and experience "
                        "to make your home look and work like new."
                    </p>
                </header>

                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let class = if service.featured {
                                "service-card service-card--featured"
                            } else {
                                "service-card"
                            };
                            view! {
                                <article class=class data-testid=format!("service-card-{i}")>
                                    <span class="service-card__icon">
                                        <GlyphIcon glyph=service.glyph/>
                                    </span>
                                    <h3 class="service-card__title">{service.title}</h3>
                                    <p class="service-card__description">{service.description}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
