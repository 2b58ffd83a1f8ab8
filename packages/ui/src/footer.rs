use dioxus::prelude::*;

pub const REPOSITORY_URL: &str = "https://github.com/lachlanshoesmith/webdevcamp";
pub const AUTHOR_URL: &str = "https://github.com/lachlanshoesmith";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            a { href: REPOSITORY_URL, "GitHub" }
            p {
                "By "
                a { href: AUTHOR_URL, "Lachlan Shoesmith" }
            }
            p {
                class: "small-text",
                "webdevcamp is not associated with Skill Samurai Rouse Hill or Skill Samurai as a broader company."
            }
        }
    }
}
