use crate::layout::{initialize, ResizeSubscription};
use dioxus::prelude::*;

/// Hook to size the output panels to the window, on mount and on every resize.
pub fn use_output_panel_layout() {
    let mut subscription = use_signal(|| None::<ResizeSubscription>);

    use_effect(move || {
        // peek() keeps this effect from re-running; the panels are mounted by now
        if subscription.peek().is_none() {
            subscription.set(initialize());
        }
    });
}
