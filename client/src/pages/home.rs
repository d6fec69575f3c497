//! Landing page: every section in scroll order.

use leptos::prelude::*;

use crate::components::contact::Contact;
use crate::components::footer::SiteFooter;
use crate::components::gallery::Gallery;
use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page" data-testid="home-page">
            <SiteHeader/>
            <main>
                <Hero/>
                <Services/>
                <Gallery/>
                <Testimonials/>
                <Contact/>
            </main>
            <SiteFooter/>
        </div>
    }
}
