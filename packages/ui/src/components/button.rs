use dioxus::prelude::*;

#[component]
pub fn Button(
    /// HTML button type: `"button"` or `"submit"`.
    #[props(default = "button".to_string())]
    kind: String,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button {class}",
            r#type: "{kind}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
