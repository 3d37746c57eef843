//! Content listing page.

use dioxus::prelude::*;

#[component]
pub fn ContentListPage() -> Element {
    rsx! {
        section { id: "content",
            h1 { "コンテンツ" }
        }
    }
}
