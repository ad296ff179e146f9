//! Record tables for the two views.

use dioxus::prelude::*;
use store::{UserDraft, UserField, UserRecord};

use crate::icons::{FaFloppyDisk, FaPen, FaRotateLeft, FaTrash, FaXmark};
use crate::panel::use_user_panel;
use crate::Icon;

const EDIT_INPUTS: [(UserField, &str); 3] = [
    (UserField::Name, "text"),
    (UserField::Email, "email"),
    (UserField::Mobile, "tel"),
];

#[component]
fn TableHead() -> Element {
    rsx! {
        thead {
            tr {
                th { "Name" }
                th { "Email" }
                th { "Mobile" }
                th { "Actions" }
            }
        }
    }
}

/// Active records with per-row Edit/Delete, or Save/Cancel for the row in edit mode.
#[component]
pub fn ActiveUserTable() -> Element {
    let panel = use_user_panel();
    let rows: Vec<(UserRecord, Option<UserDraft>)> = {
        let book = panel.book();
        let book = book.read();
        book.active()
            .iter()
            .map(|r| {
                let draft = if book.is_editing(&r.id) {
                    book.edit_draft().cloned()
                } else {
                    None
                };
                (r.clone(), draft)
            })
            .collect()
    };

    rsx! {
        table {
            class: "user-table",
            TableHead {}
            tbody {
                for (record, draft) in rows {
                    UserRow {
                        key: "{record.id}",
                        record: record.clone(),
                        draft: draft,
                    }
                }
            }
        }
    }
}

/// One active row, read-only or in edit mode when `draft` is set.
#[component]
fn UserRow(record: UserRecord, draft: Option<UserDraft>) -> Element {
    let panel = use_user_panel();

    if let Some(draft) = draft {
        return rsx! {
            tr {
                for (field, kind) in EDIT_INPUTS {
                    td {
                        key: "{kind}",
                        input {
                            r#type: kind,
                            name: field.as_str(),
                            value: draft.get(field).to_string(),
                            oninput: move |evt: FormEvent| panel.set_edit_field(field, evt.value()),
                        }
                    }
                }
                td {
                    button {
                        class: "btn-save",
                        onclick: move |_| panel.save_edit(),
                        Icon { icon: FaFloppyDisk, width: 12, height: 12 }
                        " Save"
                    }
                    button {
                        class: "btn-cancel",
                        onclick: move |_| panel.cancel_edit(),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                        " Cancel"
                    }
                }
            }
        };
    }

    let edit_target = record.clone();
    let delete_target = record.clone();

    rsx! {
        tr {
            td { "{record.name}" }
            td { "{record.email}" }
            td { "{record.mobile}" }
            td {
                button {
                    class: "btn-edit",
                    onclick: move |_| panel.start_edit(&edit_target),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "btn-delete",
                    onclick: move |_| panel.soft_delete(&delete_target),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}

/// Locally soft-deleted records, each with a Restore action.
#[component]
pub fn DeletedUserTable() -> Element {
    let panel = use_user_panel();
    let records = panel.book().read().deleted().to_vec();

    rsx! {
        h3 { "Deleted Users" }
        table {
            class: "user-table",
            TableHead {}
            tbody {
                for record in records {
                    DeletedUserRow { key: "{record.id}", record: record.clone() }
                }
            }
        }
    }
}

#[component]
fn DeletedUserRow(record: UserRecord) -> Element {
    let panel = use_user_panel();
    let restore_target = record.clone();

    rsx! {
        tr {
            td { "{record.name}" }
            td { "{record.email}" }
            td { "{record.mobile}" }
            td {
                button {
                    class: "btn-restore",
                    onclick: move |_| panel.restore(&restore_target),
                    Icon { icon: FaRotateLeft, width: 12, height: 12 }
                    " Restore"
                }
            }
        }
    }
}
