//! Side navigation menu component.

use dioxus::prelude::*;

use super::icon::MenuIcon;
use crate::app::menu::{main_menu, Badge};

#[derive(Props, Clone, PartialEq)]
pub struct SideMenuProps {
    /// Pending request count shown on the requests entry
    #[props(!optional)]
    pub pending_requests: Option<u32>,
}

/// Vertical list of router links, one per menu entry.
#[component]
pub fn SideMenu(props: SideMenuProps) -> Element {
    let entries = main_menu(props.pending_requests);

    rsx! {
        nav { class: "side-menu",
            ul {
                for entry in entries {
                    li { key: "{entry.path}",
                        Link { class: "side-menu-item", to: entry.path.to_string(),
                            span { class: "side-menu-icon",
                                if let Some(badge) = entry.badge {
                                    MenuBadge { badge, MenuIcon { icon: entry.icon } }
                                } else {
                                    MenuIcon { icon: entry.icon }
                                }
                            }
                            span { class: "side-menu-label", "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Badge overlay; renders only its children when the count is suppressed.
#[component]
pub fn MenuBadge(badge: Badge, children: Element) -> Element {
    rsx! {
        span { class: "badge-root",
            {children}
            if let Some(text) = badge.text() {
                span { class: "badge", "{text}" }
            }
        }
    }
}
