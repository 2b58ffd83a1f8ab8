use dioxus::prelude::*;

use ui::views::ErrorPage;
use ui::ApiProvider;
use views::{Home, Login, NotFound, Register, RegisterStudent, Shell};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/register/student")]
        RegisterStudent {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::app_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let message = errors
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                rsx! {
                    ErrorPage { message: message }
                }
            },
            ApiProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}
