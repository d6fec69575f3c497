use content::site::{BUSINESS_NAME, CREDENTIAL, EMAIL, FOOTER_SERVICES, Glyph, PHONE, QUICK_LINKS, TAGLINE};
use leptos::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::util::year::current_year;

/// Site footer. The copyright year is read from the clock at render time.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer" data-testid="footer">
            <div class="site-footer__inner">
                <div class="site-footer__columns">
                    <div class="site-footer__brand">
                        <div class="site-footer__logo">
                            <span class="site-footer__logo-mark">
                                <GlyphIcon glyph=Glyph::Wrench/>
                            </span>
                            <span class="site-footer__logo-text">{BUSINESS_NAME}</span>
                        </div>
                        <p class="site-footer__tagline">{TAGLINE}</p>
                        <p class="site-footer__credential">
                            <GlyphIcon glyph=Glyph::Award/>
                            <span>{CREDENTIAL}</span>
                        </p>
                    </div>

                    <div>
                        <h4 class="site-footer__heading">"Services"</h4>
                        <ul class="site-footer__list">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|service| view! { <li><a href="#services">{*service}</a></li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="site-footer__heading">"Quick Links"</h4>
                        <ul class="site-footer__list">
                            {QUICK_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="site-footer__heading">"Contact"</h4>
                        <ul class="site-footer__list site-footer__list--contact">
                            <li><GlyphIcon glyph=Glyph::Phone/><span>{PHONE}</span></li>
                            <li><GlyphIcon glyph=Glyph::Mail/><span>{EMAIL}</span></li>
                            <li><GlyphIcon glyph=Glyph::MapPin/><span>"Your Neighborhood"</span></li>
                        </ul>
                    </div>
                </div>

                <div class="site-footer__bottom">
                    <p data-testid="footer-copyright">
                        {format!("\u{00A9} {year} {BUSINESS_NAME}. All rights reserved.")}
                    </p>
                    <p>"Licensed & Insured Handyman Services"</p>
                </div>
            </div>
        </footer>
    }
}
