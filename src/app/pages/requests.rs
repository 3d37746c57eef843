//! Request listing page.

use dioxus::prelude::*;

use crate::app::use_pending_requests;

#[component]
pub fn RequestPage() -> Element {
    let pending = use_pending_requests();

    rsx! {
        section { id: "requests",
            h1 { "依頼" }
            if let Some(count) = pending.get() {
                p { class: "text-muted", "未対応の依頼: {count}" }
            }
        }
    }
}
