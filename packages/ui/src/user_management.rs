use dioxus::prelude::*;
use store::ViewMode;

use crate::new_user_form::NewUserForm;
use crate::panel::use_user_panel;
use crate::user_table::{ActiveUserTable, DeletedUserTable};
use crate::view_toggle::ViewToggle;

/// The user management panel: view toggle, create form and record tables.
///
/// Must be rendered inside a [`crate::UserPanelProvider`].
#[component]
pub fn UserManagement() -> Element {
    let panel = use_user_panel();
    let view = panel.book().read().view();

    rsx! {
        div {
            class: "user-management",
            ViewToggle {}
            if view == ViewMode::Active {
                NewUserForm {}
                ActiveUserTable {}
            } else {
                DeletedUserTable {}
            }
        }
    }
}
