use dioxus::prelude::*;

use ui::views::ErrorPage;

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        ErrorPage {
            status_text: "Not Found",
            message: format!("No page at /{}", segments.join("/")),
        }
    }
}
