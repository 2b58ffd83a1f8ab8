//! Login page view with username/password form.

use api::{submit, Form, LoginForm};
use dioxus::prelude::*;

use crate::components::{Button, TextField};
use crate::{use_api, FormStatus};

/// Login page component.
#[component]
pub fn LoginView() -> Element {
    let api = use_api();
    let mut form = use_signal(LoginForm::default);
    let mut status = use_signal(FormStatus::default);

    let handle_login = move |evt: FormEvent| {
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

    let current = status();

    rsx! {
        h1 { "Login Page" }

        form {
            class: "auth-form",
            novalidate: true,
            onsubmit: handle_login,

            TextField {
                name: "username",
                placeholder: "Username",
                value: form().username,
                error: current.field_message("username"),
                oninput: move |value: String| {
                    form.write().username = value;
                    let errors = form.read().field_errors();
                    status.write().revalidate(errors);
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
                    let errors = form.read().field_errors();
                    status.write().revalidate(errors);
                },
            }

            Button {
                kind: "submit",
                if current.is_pending() { "Logging in..." } else { "Login" }
            }
        }

        if let Some(err) = current.error.clone() {
            p { class: "form-error", "{err}" }
        }
    }
}
