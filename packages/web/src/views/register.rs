use dioxus::prelude::*;

use ui::views::RegisterView;

#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "page",
            RegisterView {}
        }
    }
}
