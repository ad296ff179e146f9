//! This crate contains the shared UI of the user management panel.
//!
//! Wrap the app in [`UserPanelProvider`] and render [`UserManagement`] inside
//! it. The provider owns the session: the record book lives in a signal for as
//! long as the provider is mounted and is loaded once on mount.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod gateway;
pub use gateway::{make_gateway, PanelGateway};

mod panel;
pub use panel::{use_user_panel, UserPanel, UserPanelProvider};

mod view_toggle;
pub use view_toggle::ViewToggle;

mod new_user_form;
pub use new_user_form::NewUserForm;

mod user_table;
pub use user_table::{ActiveUserTable, DeletedUserTable};

mod user_management;
pub use user_management::UserManagement;
