//! Fixed site header with in-page navigation and a mobile menu.

use content::site::{BUSINESS_NAME, Glyph, NAV_LINKS};
use leptos::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::util::scroll;

/// Header bar. Turns solid once the page scrolls past
/// [`scroll::SCROLL_THRESHOLD`].
#[component]
pub fn SiteHeader() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        // Page may be restored mid-scroll; sync once after hydration.
        Effect::new(move || scrolled.set(scroll::is_scrolled(scroll::window_scroll_y())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(scroll::is_scrolled(scroll::window_scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let header_class = move || {
        if scrolled.get() {
            "site-header site-header--scrolled"
        } else {
            "site-header"
        }
    };
    let close_menu = move |_| menu_open.set(false);

    view! {
        <header class=header_class data-testid="header">
            <div class="site-header__inner">
                <a href="#" class="site-header__logo" data-testid="logo-link">
                    <span class="site-header__logo-mark">
                        <GlyphIcon glyph=Glyph::Wrench/>
                    </span>
                    <span class="site-header__logo-text">{BUSINESS_NAME}</span>
                </a>

                <nav class="site-header__nav" data-testid="desktop-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="site-header__link" href=link.href data-testid=format!("nav-{}", link.slug())>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <a href="#contact" class="btn btn--accent site-header__cta" data-testid="header-cta">
                    "Get a Free Quote"
                </a>

                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    data-testid="mobile-menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile-nav" data-testid="mobile-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="site-header__mobile-link"
                                    href=link.href
                                    data-testid=format!("mobile-nav-{}", link.slug())
                                    on:click=close_menu
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a href="#contact" class="btn btn--accent" on:click=close_menu>
                        "Get a Free Quote"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
