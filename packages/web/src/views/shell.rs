use dioxus::prelude::*;

use ui::{Footer, Navbar};

use crate::Route;

/// Root layout: navigation, the matched page, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            li { Link { to: Route::Home {}, "Home" } }
            li { Link { to: Route::Login {}, "Login" } }
            li { Link { to: Route::Register {}, "Register" } }
            li { Link { to: Route::RegisterStudent {}, "Enrol student" } }
        }

        Outlet::<Route> {}

        Footer {}
    }
}
