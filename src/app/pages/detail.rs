//! Single-record pages addressed by a numeric id in the URL.
//!
//! The router only guarantees the id is a run of digits; turning it into a
//! record id and checking it exists is up to the page.

use dioxus::prelude::*;

/// Parse a routed id, rejecting values that overflow a record id.
pub fn parse_record_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

#[component]
pub fn RequestEditPage(id: String) -> Element {
    let heading = match parse_record_id(&id) {
        Some(request_id) => rsx! { h1 { "依頼 #{request_id}" } },
        None => rsx! { p { class: "status-err", "Invalid request id: {id}" } },
    };

    rsx! {
        section { id: "request-edit", {heading} }
    }
}

#[component]
pub fn RoomPage(id: String) -> Element {
    let heading = match parse_record_id(&id) {
        Some(room_id) => rsx! { h1 { "Room #{room_id}" } },
        None => rsx! { p { class: "status-err", "Invalid room id: {id}" } },
    };

    rsx! {
        section { id: "room", {heading} }
    }
}
