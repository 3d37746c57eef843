//! Annotation history page.

use dioxus::prelude::*;

#[component]
pub fn HistoryPage() -> Element {
    rsx! {
        section { id: "history",
            h1 { "履歴" }
        }
    }
}
