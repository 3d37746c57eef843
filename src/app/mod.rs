//! Dioxus fullstack application entry point.
//!
//! The Dioxus router only tracks the browser location. Every path lands on
//! [`Screen`] inside the [`Shell`] layout, which resolves it against the
//! ordered [`routes::RouteTable`] and renders the selected page.

use dioxus::prelude::*;

pub mod components;
pub mod menu;
pub mod pages;
pub mod routes;

use components::Shell;
use routes::route_table;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_context_provider(PendingRequests::new);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/:..segments")]
        Screen { segments: Vec<String> },
}

/// Rebuild the location path from catch-all segments.
fn location_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Content area for the current location.
#[component]
pub fn Screen(segments: Vec<String>) -> Element {
    let path = location_path(&segments);
    let redirect = route_table().resolve(&path).redirect_target();

    use_effect(use_reactive!(|redirect| {
        if let Some(to) = redirect {
            if let Some(failure) = navigator().replace(to.to_string()) {
                tracing::warn!(to, ?failure, "redirect failed");
            }
        }
    }));

    rsx! {
        ScreenContent { path }
    }
}

/// Page for `path`, following redirects so the target shows without an
/// empty frame in between. Renders nothing when no route matches.
#[component]
fn ScreenContent(path: String) -> Element {
    match route_table().resolve_view(&path) {
        Some(view) => pages::render(&view),
        None => rsx! {},
    }
}

/// Pending request count shared with the side menu.
///
/// External data sources write the count; the menu only reads it.
#[derive(Clone, Copy)]
pub struct PendingRequests {
    count: Signal<Option<u32>>,
}

impl PendingRequests {
    /// Create an empty count in the current scope.
    pub fn new() -> Self {
        Self {
            count: Signal::new(None),
        }
    }

    pub fn get(&self) -> Option<u32> {
        (self.count)()
    }

    pub fn set(&self, count: Option<u32>) {
        let mut signal = self.count;
        signal.set(count);
    }
}

impl Default for PendingRequests {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the pending request count provided by [`App`].
pub fn use_pending_requests() -> PendingRequests {
    use_context::<PendingRequests>()
}
