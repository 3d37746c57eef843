//! Dashboard page.

use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { id: "dashboard",
            h1 { "ホーム" }
        }
    }
}
