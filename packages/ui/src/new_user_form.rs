use dioxus::prelude::*;
use store::UserField;

use crate::panel::use_user_panel;

/// Input type and placeholder per field.
const INPUTS: [(UserField, &str, &str); 3] = [
    (UserField::Name, "text", "Enter name"),
    (UserField::Email, "email", "Enter email"),
    (UserField::Mobile, "tel", "Enter mobile number"),
];

/// Inline form for creating a new user.
///
/// Bound to the book's new-record draft, so the inputs clear once the service
/// confirms the create and keep their values when it fails.
#[component]
pub fn NewUserForm() -> Element {
    let panel = use_user_panel();
    let draft = panel.book().read().new_draft().clone();

    rsx! {
        form {
            class: "user-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                panel.create();
            },
            for (field, kind, placeholder) in INPUTS {
                input {
                    key: "{placeholder}",
                    r#type: kind,
                    name: field.as_str(),
                    placeholder: placeholder,
                    required: true,
                    value: draft.get(field).to_string(),
                    oninput: move |evt: FormEvent| panel.set_new_field(field, evt.value()),
                }
            }
            button {
                r#type: "submit",
                class: "btn-primary",
                "Add New User"
            }
        }
    }
}
