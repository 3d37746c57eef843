//! Persistent layout frame: side menu plus the routed content area.

use dioxus::prelude::*;

use super::nav::SideMenu;
use crate::app::{use_pending_requests, Route};

/// CSS styles for the application shell.
const SHELL_STYLES: &str = r#"
body { margin: 0; font-family: "Roboto", "Noto Sans JP", sans-serif; }
.shell { display: flex; min-height: 100vh; }
.side-menu { width: 240px; flex-shrink: 0; border-right: 1px solid rgba(0,0,0,.12); }
.side-menu ul { list-style: none; margin: 0; padding: 8px 0; }
.side-menu-item { display: flex; align-items: center; padding: 8px 16px; color: inherit; text-decoration: none; }
.side-menu-item:hover { background: rgba(0,0,0,.04); }
.side-menu-icon { min-width: 56px; display: inline-flex; color: rgba(0,0,0,.54); }
.menu-icon { width: 24px; height: 24px; }
.badge-root { position: relative; display: inline-flex; }
.badge { position: absolute; top: -8px; right: -10px; min-width: 20px; height: 20px; padding: 0 6px;
         box-sizing: border-box; border-radius: 10px; background: #3f51b5; color: #fff;
         font-size: 0.75rem; line-height: 20px; text-align: center; }
.content { flex-grow: 1; padding: 24px; }
"#;

/// Layout wrapping every route; the content area stays empty when nothing matches.
#[component]
pub fn Shell() -> Element {
    let pending = use_pending_requests();

    rsx! {
        document::Style { {SHELL_STYLES} }

        div { class: "shell",
            SideMenu { pending_requests: pending.get() }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
