//! "Users" / "Deleted Users" switch.

use dioxus::prelude::*;
use store::ViewMode;

use crate::icons::{FaUserSlash, FaUsers};
use crate::panel::use_user_panel;
use crate::Icon;

/// Selects which partition the panel renders. Switching never touches data.
#[component]
pub fn ViewToggle() -> Element {
    let panel = use_user_panel();
    let current = panel.book().read().view();
    let users_label = ViewMode::Active.label();
    let deleted_label = ViewMode::Deleted.label();

    rsx! {
        div {
            class: "view-buttons",
            button {
                class: if current == ViewMode::Active { "active" } else { "" },
                onclick: move |_| panel.set_view(ViewMode::Active),
                Icon { icon: FaUsers, width: 14, height: 14 }
                " {users_label}"
            }
            button {
                class: if current == ViewMode::Deleted { "active" } else { "" },
                onclick: move |_| panel.set_view(ViewMode::Deleted),
                Icon { icon: FaUserSlash, width: 14, height: 14 }
                " {deleted_label}"
            }
        }
    }
}
