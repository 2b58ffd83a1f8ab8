use dioxus::prelude::*;

use crate::VIEWS_CSS;

/// Site title plus a list of navigation entries (`li` children).
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            h1 { "webdevcamp" }
            ul {
                class: "nav-items",
                {children}
            }
        }
    }
}
