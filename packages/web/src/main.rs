use dioxus::prelude::*;

use store::PanelConfig;
use ui::{UserManagement, UserPanelProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Panel configuration baked in at build time.
const PANEL_TOML: &str = include_str!("../panel.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to the defaults.
fn load_config(source: &str) -> PanelConfig {
    match PanelConfig::from_toml(source) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default panel config: {}", e);
            PanelConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(PANEL_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UserPanelProvider {
            config: config,
            UserManagement {}
        }
    }
}
