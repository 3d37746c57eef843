//! Page components bound to routes.
//!
//! Page bodies belong to the feature teams that own them; the shell only
//! selects which one to show and hands over routing-derived input.

mod content;
mod dashboard;
mod detail;
mod history;
mod new_curve;
mod requests;
mod word;

use dioxus::prelude::*;

pub use content::ContentListPage;
pub use dashboard::Dashboard;
pub use detail::{RequestEditPage, RoomPage};
pub use history::HistoryPage;
pub use new_curve::CreateCurvePage;
pub use requests::RequestPage;
pub use word::ValueTypeListPage;

use super::routes::View;

/// Render the page bound to `view`.
pub fn render(view: &View) -> Element {
    let title = format!("{} - emonotate", view.title());
    let page = match view {
        View::Dashboard => rsx! { Dashboard {} },
        View::History => rsx! { HistoryPage {} },
        View::ContentList => rsx! { ContentListPage {} },
        View::ValueTypeList => rsx! { ValueTypeListPage {} },
        View::CreateCurve => rsx! { CreateCurvePage {} },
        View::Requests => rsx! { RequestPage {} },
        View::RequestEdit { id } => rsx! { RequestEditPage { id: id.clone() } },
        View::Room { id } => rsx! { RoomPage { id: id.clone() } },
    };

    rsx! {
        document::Title { "{title}" }
        {page}
    }
}
