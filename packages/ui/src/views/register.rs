//! Registration page view.
//!
//! Creates administrator accounts (see [`RegisterForm::ACCOUNT_TYPE`]). Server
//! rejections such as "User already exists." are shown under the form.

use api::{submit, Form, RegisterForm};
use dioxus::prelude::*;

use crate::components::{Button, TextField};
use crate::{use_api, FormStatus};

/// Register page component.
#[component]
pub fn RegisterView() -> Element {
    let api = use_api();
    let mut form = use_signal(RegisterForm::default);
    let mut status = use_signal(FormStatus::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();

        let client = match api.client() {
            Ok(client) => client.clone(),
            Err(message) => {
                status.write().fail(message);
                return;
            }
        };
        let values = form();

        let ticket = status.write().begin();
        spawn(async move {
            let result = submit(&client, &values).await;
            status.write().finish(ticket, &result);
        });
    };

    let mut revalidate = move || {
        let errors = form.read().field_errors();
        status.write().revalidate(errors);
    };

    let current = status();

    rsx! {
        h1 { "Register new administrator" }

        form {
            class: "auth-form",
            novalidate: true,
            onsubmit: handle_register,

            TextField {
                name: "given_name",
                placeholder: "Given name",
                value: form().given_name,
                error: current.field_message("given_name"),
                oninput: move |value: String| {
                    form.write().given_name = value;
                    revalidate();
                },
            }

            TextField {
                name: "family_name",
                placeholder: "Family name",
                value: form().family_name,
                error: current.field_message("family_name"),
                oninput: move |value: String| {
                    form.write().family_name = value;
                    revalidate();
                },
            }

            TextField {
                name: "username",
                placeholder: "Username",
                value: form().username,
                error: current.field_message("username"),
                oninput: move |value: String| {
                    form.write().username = value;
                    revalidate();
                },
            }

            TextField {
                name: "password",
                kind: "password",
                placeholder: "Password",
                value: form().password,
                error: current.field_message("password"),
                oninput: move |value: String| {
                    form.write().password = value;
                    revalidate();
                },
            }

            TextField {
                name: "email",
                kind: "email",
                placeholder: "Email",
                value: form().email,
                error: current.field_message("email"),
                oninput: move |value: String| {
                    form.write().email = value;
                    revalidate();
                },
            }

            TextField {
                name: "phone_number",
                placeholder: "Phone number",
                value: form().phone_number,
                error: current.field_message("phone_number"),
                oninput: move |value: String| {
                    form.write().phone_number = value;
                    revalidate();
                },
            }

            Button {
                kind: "submit",
                if current.is_pending() { "Registering..." } else { "Register" }
            }
        }

        if let Some(err) = current.error.clone() {
            p { class: "form-error", "{err}" }
        }
    }
}
