use crate::config::{LOG_OUTPUT_ID, TECHNICAL_OUTPUT_ID};
use crate::hooks::use_output_panel_layout;
use dioxus::prelude::*;

#[component]
pub fn OutputPanels() -> Element {
    use_output_panel_layout();

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; margin: 0; background: #0d0f10; color: #e5e7eb; font-family: monospace;",
            pre {
                id: LOG_OUTPUT_ID,
                style: "margin: 0; overflow-y: auto; border-bottom: 1px solid #2a2e33;",
            }
            pre {
                id: TECHNICAL_OUTPUT_ID,
                style: "margin: 0; overflow-y: auto;",
            }
        }
    }
}
