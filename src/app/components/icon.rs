//! Material-style glyphs for the side menu, drawn as inline SVG.

use dioxus::prelude::*;

use crate::app::menu::Icon;

fn svg_path(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
        Icon::History => "M13 3c-4.97 0-9 4.03-9 9H1l3.89 3.89.07.14L9 12H6c0-3.87 3.13-7 7-7s7 3.13 7 7-3.13 7-7 7c-1.93 0-3.68-.79-4.94-2.06l-1.42 1.42C8.27 19.99 10.51 21 13 21c4.97 0 9-4.03 9-9s-4.03-9-9-9zm-1 5v5l4.28 2.54.72-1.21-3.5-2.08V8H12z",
        Icon::Movie => "M18 4l2 4h-3l-2-4h-2l2 4h-3l-2-4H8l2 4H5L3 4H2v16h20V4h-4z",
        Icon::TextFormat => "M5 17v2h14v-2H5zm4.5-4.2h5l.9 2.2h2.1L12.75 4h-1.5L6.5 15h2.1l.9-2.2zM12 5.98L13.87 11h-3.74L12 5.98z",
        Icon::Mail => "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z",
    }
}

#[component]
pub fn MenuIcon(icon: Icon) -> Element {
    rsx! {
        svg { class: "menu-icon", view_box: "0 0 24 24", fill: "currentColor", "aria-hidden": "true",
            path { d: svg_path(icon) }
        }
    }
}
