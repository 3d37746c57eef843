//! Expression word (value type) listing page.

use dioxus::prelude::*;

#[component]
pub fn ValueTypeListPage() -> Element {
    rsx! {
        section { id: "word",
            h1 { "表現語" }
        }
    }
}
