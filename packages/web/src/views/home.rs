use dioxus::prelude::*;

use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
