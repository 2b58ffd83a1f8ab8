use dioxus::prelude::*;

/// Generic error page for unmatched routes and errors caught while rendering.
///
/// Shows `status_text` when there is one, else `message`.
#[component]
pub fn ErrorPage(
    #[props(default)] status_text: String,
    #[props(default)] message: String,
) -> Element {
    let shown = if status_text.is_empty() {
        message
    } else {
        status_text
    };

    let logged = shown.clone();
    use_hook(move || {
        tracing::error!("Route error: {}", logged);
    });

    rsx! {
        div {
            id: "error-page",
            h1 { "There was an error." }
            p { "{shown}" }
        }
    }
}
