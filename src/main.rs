use dioxus::prelude::*;
use tracing::Level;

mod components;
mod config;
mod error;
mod hooks;
mod layout;
mod utils;
use components::OutputPanels;
use config::APP_TITLE;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "{APP_TITLE}" }
        OutputPanels {}
    }
}
