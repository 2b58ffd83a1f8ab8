use dioxus::prelude::*;

use ui::views::StudentRegisterView;

#[component]
pub fn RegisterStudent() -> Element {
    rsx! {
        div {
            class: "page",
            StudentRegisterView {}
        }
    }
}
