use dioxus::prelude::*;

use crate::components::Button;

/// Landing page. The buttons only report clicks; routing is the caller's job.
#[component]
pub fn HomeView(on_login: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    rsx! {
        main {
            class: "home",
            p { "Welcome! Please log in." }
            div {
                class: "home-actions",
                Button { onclick: move |_| on_login.call(()), "Log in" }
                Button { onclick: move |_| on_register.call(()), "Register" }
            }
        }
    }
}
