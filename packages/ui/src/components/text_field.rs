use dioxus::prelude::*;

/// A labelled-by-placeholder input with its inline validation message.
///
/// `error` is empty while the field is valid; otherwise it is printed under the
/// input and the input is marked `aria-invalid`.
#[component]
pub fn TextField(
    name: String,
    #[props(default = "text".to_string())] kind: String,
    placeholder: String,
    value: String,
    #[props(default)] error: String,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = if error.is_empty() { "false" } else { "true" };

    rsx! {
        div {
            class: "field",
            input {
                name: "{name}",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                "aria-invalid": invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if !error.is_empty() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
