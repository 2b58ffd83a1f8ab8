use dioxus::prelude::*;

use ui::views::LoginView;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "page",
            LoginView {}
        }
    }
}
