//! Inline SVG icons for the glyphs named in `content::site`.

use content::site::Glyph;
use leptos::prelude::*;

/// Stroke paths on a 24x24 grid.
fn paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Award => &["M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z", "M8.2 13.9 7 23l5-3 5 3-1.2-9.1"],
        Glyph::Bath => &["M4 12h16v3a5 5 0 0 1-5 5H9a5 5 0 0 1-5-5z", "M6 12V5a2 2 0 0 1 4 0", "M7 20l-1 2", "M17 20l1 2"],
        Glyph::Check => &["M22 11.1V12a10 10 0 1 1-5.9-9.1", "M22 4 12 14l-3-3"],
        Glyph::ChefHat => &["M6 13.9A4 4 0 0 1 7 6a5 5 0 0 1 10 0 4 4 0 0 1 1 7.9V21H6z", "M6 17h12"],
        Glyph::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        Glyph::DoorOpen => &["M13 4h3a2 2 0 0 1 2 2v14", "M2 20h20", "M13 20V3l-7 2v15", "M10 12v.01"],
        Glyph::Droplets => &["M7 16.3c2.2 0 4-1.8 4-4 0-1.2-.6-2.3-1.8-3.3L7 6.5 4.8 9C3.6 10 3 11.1 3 12.3c0 2.2 1.8 4 4 4z", "M12.6 6.6 16 2.3l3.2 4.4A6 6 0 1 1 12 16"],
        Glyph::Fence => &["M4 3 2 5v15h4V5z", "M20 3l-2 2v15h4V5z", "M12 3l-2 2v15h4V5z", "M6 8h4", "M6 16h4", "M14 8h4", "M14 16h4"],
        Glyph::Hammer => &["M15 12l-8.4 8.4a2.1 2.1 0 0 1-3-3L12 9", "M17.6 15 22 10.6", "M20.9 11.7 12.3 3.1a4 4 0 0 0-5.6 0L10 6.4l6.3 6.3"],
        Glyph::Home => &["M3 10 12 3l9 7v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        Glyph::LayoutGrid => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M14 14h7v7h-7z", "M3 14h7v7H3z"],
        Glyph::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
        Glyph::MapPin => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
        Glyph::Package => &["M16.5 9.4 7.5 4.2", "M21 16V8a2 2 0 0 0-1-1.7l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.7l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z", "M3.3 7 12 12l8.7-5", "M12 22V12"],
        Glyph::Paintbrush => &["M18.4 2.6a2 2 0 0 1 3 3L14 13l-3-3z", "M9 14c-1.7 0-3 1.3-3 3 0 1.3-2.5 1.5-2 2 1.1 1.5 2.5 2 4 2 2.2 0 4-1.8 4-4 0-1.7-1.3-3-3-3z"],
        Glyph::Phone => &["M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8.1 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z"],
        Glyph::Thermometer => &["M14 14.8V4.5a2.5 2.5 0 0 0-5 0v10.3a4 4 0 1 0 5 0z"],
        Glyph::TreePine => &["M17 14l3 3.3a1 1 0 0 1-.7 1.7H4.7a1 1 0 0 1-.7-1.7L7 14h-.3a1 1 0 0 1-.7-1.7L9 9h-.2A1 1 0 0 1 8 7.3L12 3l4 4.3a1 1 0 0 1-.8 1.7H15l3 3.3a1 1 0 0 1-.7 1.7z", "M12 22v-3"],
        Glyph::Wind => &["M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2", "M9.6 4.6A2 2 0 1 1 11 8H2", "M12.6 19.4A2 2 0 1 0 14 16H2"],
        Glyph::Wrench => &["M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.8-3.8a6 6 0 0 1-7.9 7.9l-6.9 6.9a2.1 2.1 0 0 1-3-3l6.9-6.9a6 6 0 0 1 7.9-7.9z"],
    }
}

/// One icon, sized and coloured by `class`.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("glyph {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(glyph).iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
