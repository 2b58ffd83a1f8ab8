//! Student enrolment view.
//!
//! Students are created under an existing administrator, identified by the
//! numeric account id the backend returned when that administrator registered.

use api::{submit, Form, StudentRegisterForm};
use dioxus::prelude::*;

use crate::components::{Button, TextField};
use crate::{use_api, FormStatus};

#[component]
pub fn StudentRegisterView() -> Element {
    let api = use_api();
    let mut form = use_signal(StudentRegisterForm::default);
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
        h1 { "Enrol new student" }

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
                name: "administrator_id",
                placeholder: "Administrator id",
                value: form().administrator_id,
                error: current.field_message("administrator_id"),
                oninput: move |value: String| {
                    form.write().administrator_id = value;
                    revalidate();
                },
            }

            Button {
                kind: "submit",
                if current.is_pending() { "Enrolling..." } else { "Enrol" }
            }
        }

        if let Some(err) = current.error.clone() {
            p { class: "form-error", "{err}" }
        }
    }
}
