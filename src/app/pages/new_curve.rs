//! Curve creation form.

use dioxus::prelude::*;

#[component]
pub fn CreateCurvePage() -> Element {
    rsx! {
        section { id: "new-curve",
            h1 { "新規作成" }
        }
    }
}
